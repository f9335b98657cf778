use std::f32::consts::TAU;

use glam::Vec2;

use crate::api::error::SurfaceError;
use crate::components::entity::FrameContext;
use crate::core::rng::Rng;
use crate::renderer::color::Color;
use crate::renderer::surface::{DrawSurface, Paint, Shadow};

/// Vertical squash of the dust ring.
const RING_TILT: f32 = 0.4;

/// One mote of the orbiting dust ring. Inner motes orbit faster.
#[derive(Debug, Clone, PartialEq)]
pub struct Dust {
    pub angle: f32,
    pub orbit_radius: f32,
    /// Radians per frame, inversely proportional to `orbit_radius`.
    pub speed: f32,
    pub y_offset: f32,
    pub size: f32,
    pub opacity: f32,
}

impl Dust {
    pub fn new(rng: &mut Rng) -> Self {
        let angle = rng.next_f32() * TAU;
        let orbit_radius = rng.range(160.0, 960.0);
        let speed = rng.range(0.000_05, 0.000_15) * (500.0 / orbit_radius);
        Self {
            angle,
            orbit_radius,
            speed,
            y_offset: rng.centered(40.0),
            size: rng.range(0.5, 2.0),
            opacity: rng.range(0.4, 1.0),
        }
    }

    pub fn update(&mut self, _ctx: &FrameContext) {
        self.angle = (self.angle + self.speed).rem_euclid(TAU);
    }

    /// Dust only shows once the camera is close to browse distance.
    pub fn is_visible(&self, ctx: &FrameContext) -> bool {
        ctx.zoom <= ctx.dust_max_zoom
    }

    pub fn screen_pos(&self, ctx: &FrameContext) -> Vec2 {
        let ring = Vec2::new(
            self.angle.cos() * self.orbit_radius,
            self.angle.sin() * self.orbit_radius * RING_TILT + self.y_offset,
        );
        ctx.project(ring)
    }

    pub fn draw(&self, surface: &mut dyn DrawSurface, ctx: &FrameContext) -> Result<(), SurfaceError> {
        if !self.is_visible(ctx) {
            return Ok(());
        }
        surface.save();
        surface.set_fill(Paint::Solid(Color::WHITE));
        surface.set_shadow(Some(Shadow { color: Color::WHITE, blur: 2.0 }));
        surface.set_global_alpha(self.opacity);
        let result = surface.fill_circle(self.screen_pos(ctx), self.size / ctx.zoom);
        surface.restore();
        result
    }
}
