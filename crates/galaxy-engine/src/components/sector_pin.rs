use glam::Vec2;

use crate::api::types::ImageId;
use crate::components::entity::FrameContext;
use crate::components::sector::{SectorDescriptor, SectorId};
use crate::components::sprite::Sprite;
use crate::core::rng::Rng;

const DRIFT_RANGE: f32 = 10.0;
const ACTIVE_SIZE: f32 = 80.0;
const DORMANT_SIZE: f32 = 12.0;
const DORMANT_OPACITY: f32 = 0.6;

/// Browse-mode "planet" for one content sector. Floats around its fixed
/// offset and swells when its sector is the current one.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorPin {
    pub sector: SectorId,
    pub descriptor: SectorDescriptor,
    /// Radians per frame for the x and y drift.
    pub drift_speed: Vec2,
    pub image: Option<ImageId>,
}

impl SectorPin {
    pub fn new(sector: SectorId, rng: &mut Rng, image: Option<ImageId>) -> Self {
        Self {
            sector,
            descriptor: sector.descriptor(),
            drift_speed: Vec2::new(rng.range(0.002, 0.004), rng.range(0.003, 0.005)),
            image,
        }
    }

    pub fn drift(&self, time: f64) -> Vec2 {
        Vec2::new(
            (time * self.drift_speed.x as f64).cos() as f32,
            (time * self.drift_speed.y as f64).sin() as f32,
        ) * DRIFT_RANGE
    }

    pub fn is_active(&self, ctx: &FrameContext) -> bool {
        ctx.sector == Some(self.sector)
    }

    pub fn sprite(&self, ctx: &FrameContext) -> Sprite {
        let (size, opacity) = match (ctx.is_intro(), self.is_active(ctx)) {
            (true, _) => (0.0, 0.0),
            (false, true) => (ACTIVE_SIZE, 1.0),
            (false, false) => (DORMANT_SIZE, DORMANT_OPACITY),
        };
        Sprite {
            pos: ctx.project(self.descriptor.offset + self.drift(ctx.time)),
            size,
            opacity,
            image: self.image,
            color: Some(self.descriptor.color),
            silhouette: false,
        }
    }
}
