use glam::Vec2;

use crate::api::error::SurfaceError;
use crate::components::entity::FrameContext;
use crate::core::rng::Rng;
use crate::renderer::color::Color;
use crate::renderer::surface::{DrawSurface, Paint};

/// Far background star with depth parallax and a sine twinkle.
#[derive(Debug, Clone, PartialEq)]
pub struct DeepSpaceStar {
    /// Offset from center at parallax 1.
    pub pos: Vec2,
    /// Depth factor in [0.5, 1.5); nearer stars spread faster.
    pub depth: f32,
    pub size: f32,
    /// Unclamped twinkle accumulator.
    pub opacity: f32,
    pub twinkle_speed: f32,
}

impl DeepSpaceStar {
    const FIELD_HALF_EXTENT: f32 = 1500.0;

    pub fn new(rng: &mut Rng) -> Self {
        Self {
            pos: Vec2::new(
                rng.centered(Self::FIELD_HALF_EXTENT),
                rng.centered(Self::FIELD_HALF_EXTENT),
            ),
            depth: rng.range(0.5, 1.5),
            size: rng.range(0.0, 1.5),
            opacity: rng.next_f32(),
            twinkle_speed: rng.range(0.02, 0.07),
        }
    }

    pub fn update(&mut self, ctx: &FrameContext) {
        self.opacity += (ctx.time * self.twinkle_speed as f64).sin() as f32 * 0.01;
    }

    /// `1 / (zoom * 0.5)`: the field pulls apart as the camera backs off.
    pub fn parallax(zoom: f32) -> f32 {
        1.0 / (zoom * 0.5)
    }

    pub fn screen_pos(&self, ctx: &FrameContext) -> Vec2 {
        ctx.center + self.pos * Self::parallax(ctx.zoom) * self.depth
    }

    /// Drawn alpha: never fully dark, never above 1.
    pub fn alpha(&self) -> f32 {
        (self.opacity * 0.6).clamp(0.2, 1.0)
    }

    pub fn draw(&self, surface: &mut dyn DrawSurface, ctx: &FrameContext) -> Result<(), SurfaceError> {
        surface.save();
        surface.set_fill(Paint::Solid(Color::WHITE));
        surface.set_global_alpha(self.alpha());
        let result = surface.fill_circle(self.screen_pos(ctx), self.size);
        surface.restore();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star() -> DeepSpaceStar {
        DeepSpaceStar {
            pos: Vec2::new(100.0, -50.0),
            depth: 1.0,
            size: 1.0,
            opacity: 0.5,
            twinkle_speed: 0.05,
        }
    }

    #[test]
    fn random_parameters_in_range() {
        let mut rng = Rng::new(3);
        for _ in 0..500 {
            let s = DeepSpaceStar::new(&mut rng);
            assert!(s.pos.x.abs() <= 1500.0 && s.pos.y.abs() <= 1500.0);
            assert!((0.5..1.5).contains(&s.depth));
            assert!((0.02..0.07).contains(&s.twinkle_speed));
        }
    }

    #[test]
    fn parallax_spreads_as_zoom_drops() {
        let s = star();
        let near = s.screen_pos(&FrameContext::test(5.0));
        let far = s.screen_pos(&FrameContext::test(1.0));
        let c = FrameContext::test(1.0).center;
        assert!((far - c).length() > (near - c).length());
        assert_eq!(far, c + Vec2::new(200.0, -100.0));
    }

    #[test]
    fn alpha_is_clamped() {
        let mut s = star();
        s.opacity = -3.0;
        assert_eq!(s.alpha(), 0.2);
        s.opacity = 10.0;
        assert_eq!(s.alpha(), 1.0);
    }

    #[test]
    fn twinkle_follows_sine_of_time() {
        let mut s = star();
        let mut ctx = FrameContext::test(5.0);
        ctx.time = 10.0;
        s.update(&ctx);
        let expected = 0.5 + (10.0f32 * 0.05).sin() * 0.01;
        assert!((s.opacity - expected).abs() < 1e-6);
    }
}
