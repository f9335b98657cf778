use std::f32::consts::TAU;

use glam::Vec2;

use crate::api::types::ImageId;
use crate::components::entity::FrameContext;
use crate::components::sprite::Sprite;
use crate::core::rng::Rng;

const RING_TILT: f32 = 0.6;
const SIZE: f32 = 30.0;
const OPACITY: f32 = 0.4;

/// Decorative tech icon on a slow independent orbit. Browse mode only.
#[derive(Debug, Clone, PartialEq)]
pub struct AmbientStar {
    pub angle: f32,
    pub orbit_radius: f32,
    pub speed: f32,
    pub image: Option<ImageId>,
}

impl AmbientStar {
    pub fn new(rng: &mut Rng, image: Option<ImageId>) -> Self {
        Self {
            angle: rng.next_f32() * TAU,
            orbit_radius: rng.range(600.0, 1600.0),
            speed: rng.range(0.0002, 0.0007),
            image,
        }
    }

    pub fn update(&mut self, _ctx: &FrameContext) {
        self.angle = (self.angle + self.speed).rem_euclid(TAU);
    }

    pub fn sprite(&self, ctx: &FrameContext) -> Sprite {
        let pos = ctx.project(Vec2::new(
            self.angle.cos() * self.orbit_radius,
            self.angle.sin() * self.orbit_radius * RING_TILT,
        ));
        Sprite {
            pos,
            size: SIZE,
            opacity: if ctx.is_intro() { 0.0 } else { OPACITY },
            image: self.image,
            color: None,
            silhouette: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameters_in_range() {
        let mut rng = Rng::new(9);
        for _ in 0..100 {
            let a = AmbientStar::new(&mut rng, None);
            assert!((600.0..1600.0).contains(&a.orbit_radius));
            assert!((0.0002..0.0007).contains(&a.speed));
        }
    }

    #[test]
    fn only_visible_while_browsing() {
        let a = AmbientStar::new(&mut Rng::new(2), Some(ImageId(3)));
        assert_eq!(a.sprite(&FrameContext::test(5.0)).opacity, 0.0);
        let s = a.sprite(&FrameContext::test(1.0));
        assert_eq!(s.opacity, 0.4);
        assert_eq!(s.size, 30.0);
        assert!(!s.silhouette);
    }

    #[test]
    fn angle_wraps_each_lap() {
        let mut a = AmbientStar {
            angle: TAU - 0.0001,
            orbit_radius: 1000.0,
            speed: 0.0005,
            image: None,
        };
        a.update(&FrameContext::test(1.0));
        assert!((a.angle - 0.0004).abs() < 1e-5, "angle {}", a.angle);
    }

    #[test]
    fn orbit_is_squashed() {
        let a = AmbientStar {
            angle: TAU / 4.0,
            orbit_radius: 1000.0,
            speed: 0.0,
            image: None,
        };
        let ctx = FrameContext::test(1.0);
        let offset = a.sprite(&ctx).pos - ctx.center;
        assert!(offset.x.abs() < 1e-3);
        assert!((offset.y - 600.0).abs() < 1e-3);
    }
}
