use std::f32::consts::TAU;

use glam::Vec2;

use crate::api::types::ImageId;
use crate::components::entity::FrameContext;
use crate::components::sprite::Sprite;

const ORBIT_RADIUS: f32 = 1920.0;
const RING_TILT: f32 = 0.4;
const ANGULAR_STEP: f32 = 0.002;
const SIZE: f32 = 240.0;

/// "Hello" in one language, riding the huge ring that frames the sun
/// during the intro.
#[derive(Debug, Clone, PartialEq)]
pub struct GreetingStar {
    pub angle: f32,
    pub image: Option<ImageId>,
}

impl GreetingStar {
    /// Greetings are evenly spaced around the ring.
    pub fn new(index: usize, count: usize, image: Option<ImageId>) -> Self {
        let count = count.max(1);
        Self {
            angle: index as f32 * (TAU / count as f32),
            image,
        }
    }

    pub fn update(&mut self, _ctx: &FrameContext) {
        self.angle = (self.angle + ANGULAR_STEP).rem_euclid(TAU);
    }

    /// On the far half of the orbit, painted before the sun.
    pub fn is_behind_sun(&self) -> bool {
        self.angle.sin() < 0.0
    }

    /// Fades in linearly over zoom (2, 4]. Zero outside intro mode.
    pub fn opacity(ctx: &FrameContext) -> f32 {
        if !ctx.is_intro() {
            return 0.0;
        }
        ((ctx.zoom - ctx.intro_threshold) / 2.0).clamp(0.0, 1.0)
    }

    pub fn screen_pos(&self, ctx: &FrameContext) -> Vec2 {
        ctx.project(Vec2::new(
            self.angle.cos() * ORBIT_RADIUS,
            self.angle.sin() * ORBIT_RADIUS * RING_TILT,
        ))
    }

    pub fn sprite(&self, ctx: &FrameContext) -> Sprite {
        let pos = self.screen_pos(ctx);
        let overlaps_sun = (pos.x - ctx.center.x).abs() < ctx.silhouette_half_width;
        Sprite {
            pos,
            size: SIZE,
            opacity: Self::opacity(ctx),
            image: self.image,
            color: None,
            silhouette: !self.is_behind_sun() && overlaps_sun,
        }
    }
}
