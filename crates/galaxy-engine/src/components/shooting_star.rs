use glam::Vec2;

use crate::api::error::SurfaceError;
use crate::core::rng::Rng;
use crate::renderer::color::Color;
use crate::renderer::surface::DrawSurface;

/// Length of the streak in multiples of one frame's velocity.
const TRAIL_FRAMES: f32 = 3.0;
const LINE_WIDTH: f32 = 2.0;

/// Transient streak across the upper half of the sky.
/// Moves in a straight line and fades out linearly.
#[derive(Debug, Clone, PartialEq)]
pub struct ShootingStar {
    /// Head position in surface pixels.
    pub pos: Vec2,
    /// Pixels per frame.
    pub velocity: Vec2,
    /// 1.0 at spawn; the star is spent at or below zero.
    pub life: f32,
}

impl ShootingStar {
    /// Spawn somewhere in the top half of a `size` surface, heading left and down.
    pub fn spawn(rng: &mut Rng, size: Vec2) -> Self {
        Self {
            pos: Vec2::new(rng.next_f32() * size.x, rng.next_f32() * size.y * 0.5),
            velocity: Vec2::new(-10.0 - rng.next_f32() * 10.0, 2.0 + rng.next_f32() * 5.0),
            life: 1.0,
        }
    }

    /// One frame of motion and decay.
    pub fn advance(&mut self, decay: f32) {
        self.pos += self.velocity;
        self.life -= decay;
    }

    pub fn is_spent(&self) -> bool {
        self.life <= 0.0
    }

    /// Tail end of the streak.
    pub fn tail(&self) -> Vec2 {
        self.pos - self.velocity * TRAIL_FRAMES
    }

    pub fn draw(&self, surface: &mut dyn DrawSurface) -> Result<(), SurfaceError> {
        surface.save();
        surface.set_stroke(Color::WHITE.with_alpha(self.life.max(0.0)), LINE_WIDTH);
        let result = surface.stroke_line(self.pos, self.tail());
        surface.restore();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::draw_list::{DrawCommand, DrawList};

    #[test]
    fn spawn_stays_in_upper_half_heading_left() {
        let mut rng = Rng::new(5);
        let size = Vec2::new(1000.0, 800.0);
        for _ in 0..200 {
            let s = ShootingStar::spawn(&mut rng, size);
            assert!((0.0..1000.0).contains(&s.pos.x));
            assert!((0.0..400.0).contains(&s.pos.y));
            assert!(s.velocity.x <= -10.0 && s.velocity.x > -20.0);
            assert!(s.velocity.y >= 2.0 && s.velocity.y < 7.0);
            assert_eq!(s.life, 1.0);
        }
    }

    #[test]
    fn life_strictly_decreases_until_spent() {
        let mut s = ShootingStar::spawn(&mut Rng::new(8), Vec2::new(800.0, 600.0));
        let mut frames = 0;
        loop {
            let before = s.life;
            s.advance(0.02);
            frames += 1;
            assert!(s.life < before);
            assert!((before - s.life - 0.02).abs() < 1e-5);
            if s.is_spent() {
                break;
            }
        }
        assert!((50..=51).contains(&frames), "spent after {frames} frames");
    }

    #[test]
    fn moves_linearly() {
        let mut s = ShootingStar {
            pos: Vec2::new(500.0, 100.0),
            velocity: Vec2::new(-12.0, 3.0),
            life: 1.0,
        };
        s.advance(0.02);
        s.advance(0.02);
        assert_eq!(s.pos, Vec2::new(476.0, 106.0));
    }

    #[test]
    fn streak_alpha_is_life() {
        let s = ShootingStar {
            pos: Vec2::new(500.0, 100.0),
            velocity: Vec2::new(-10.0, 2.0),
            life: 0.4,
        };
        let mut list = DrawList::new(800, 600);
        s.draw(&mut list).unwrap();
        match &list.commands()[0] {
            DrawCommand::Line { from, to, color, width, .. } => {
                assert_eq!(*from, Vec2::new(500.0, 100.0));
                assert_eq!(*to, Vec2::new(530.0, 94.0));
                assert!((color.a - 0.4).abs() < 1e-6);
                assert_eq!(*width, 2.0);
            }
            other => panic!("expected line, got {other:?}"),
        }
    }
}
