//! Procedural sun: three rotating corona flares, a boiling disc and a
//! soft atmosphere, plus the "click to enter" prompt during the intro.
//!
//! The only state is a phase accumulator. It wraps at `PULSE_PERIOD`, a
//! whole period of every ripple and of the half-speed flare rotation.

use std::f32::consts::TAU;

use glam::Vec2;

use crate::api::config::GalaxyConfig;
use crate::api::error::SurfaceError;
use crate::components::entity::FrameContext;
use crate::renderer::color::Color;
use crate::renderer::surface::{ColorStop, Composite, DrawSurface, Paint, Shadow};

pub const PULSE_STEP: f32 = 0.005;
pub const PULSE_PERIOD: f32 = 2.0 * TAU;
/// Disc radius at zoom <= 1.
pub const BASE_RADIUS: f32 = 130.0;
/// Angular samples around the disc outline.
pub const OUTLINE_SAMPLES: usize = 100;
const FLARE_COUNT: usize = 3;
const FLARE_ASPECT: f32 = 0.8;

pub const PROMPT_TEXT: &str = "CLICK TO ENTER";
pub const PROMPT_FONT: &str = "bold 28px 'Courier New', serif";
const PROMPT_OFFSET_Y: f32 = 10.0;
const PROMPT_SHADOW_BLUR: f32 = 8.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Sun {
    pulse: f32,
    prompt_fade_start: f32,
    prompt_fade_span: f32,
}

impl Sun {
    pub fn new(config: &GalaxyConfig) -> Self {
        Self {
            pulse: 0.0,
            prompt_fade_start: config.prompt_fade_start,
            prompt_fade_span: config.prompt_fade_span,
        }
    }

    pub fn pulse(&self) -> f32 {
        self.pulse
    }

    pub fn update(&mut self) {
        self.pulse = (self.pulse + PULSE_STEP).rem_euclid(PULSE_PERIOD);
    }

    /// Grows with zoom above 1; constant at and below it.
    pub fn base_radius(zoom: f32) -> f32 {
        BASE_RADIUS * if zoom > 1.0 { zoom * 0.5 } else { 1.0 }
    }

    /// Disc radius at `angle`: the base radius plus three sine ripples.
    pub fn surface_radius(base: f32, angle: f32, pulse: f32) -> f32 {
        let noise = (angle * 10.0 + pulse * 2.0).sin() * 2.0
            + (angle * 25.0 - pulse * 5.0).sin() * 1.5
            + (angle * 5.0 + pulse).sin() * 3.0;
        base + noise
    }

    /// Closed outline relative to the sun center. The last point repeats
    /// the first.
    pub fn outline(&self, base: f32) -> Vec<Vec2> {
        (0..=OUTLINE_SAMPLES)
            .map(|i| {
                let angle = TAU * i as f32 / OUTLINE_SAMPLES as f32;
                Vec2::from_angle(angle) * Self::surface_radius(base, angle, self.pulse)
            })
            .collect()
    }

    /// Prompt alpha: linear over (start, start + span], zero below.
    pub fn prompt_alpha(&self, zoom: f32) -> Option<f32> {
        (zoom > self.prompt_fade_start)
            .then(|| ((zoom - self.prompt_fade_start) / self.prompt_fade_span).min(1.0))
    }

    pub fn draw(&self, surface: &mut dyn DrawSurface, ctx: &FrameContext) -> Result<(), SurfaceError> {
        let base = Self::base_radius(ctx.zoom);

        surface.save();
        surface.set_composite(Composite::Screen);
        let corona = self.draw_corona(surface, ctx.center, base);
        surface.restore();

        surface.save();
        surface.translate(ctx.center);
        let disc = self.draw_disc(surface, base);
        surface.restore();

        let prompt = match self.prompt_alpha(ctx.zoom) {
            Some(alpha) => {
                surface.save();
                surface.set_global_alpha(alpha);
                surface.set_fill(Paint::Solid(Color::WHITE));
                surface.set_shadow(Some(Shadow { color: Color::BLACK, blur: PROMPT_SHADOW_BLUR }));
                let r = surface.fill_text(
                    PROMPT_TEXT,
                    ctx.center + Vec2::new(0.0, PROMPT_OFFSET_Y),
                    PROMPT_FONT,
                );
                surface.restore();
                r
            }
            None => Ok(()),
        };

        corona.and(disc).and(prompt)
    }

    fn draw_corona(&self, surface: &mut dyn DrawSurface, center: Vec2, base: f32) -> Result<(), SurfaceError> {
        for i in 1..=FLARE_COUNT {
            let size = base * (1.5 + (self.pulse * i as f32).sin() * 0.1);
            let direction = if i % 2 == 0 { 1.0 } else { -1.0 };
            surface.save();
            surface.translate(center);
            surface.rotate(self.pulse * direction * 0.5);
            surface.set_fill(Paint::Radial {
                center: Vec2::ZERO,
                inner_radius: base * 0.5,
                outer_radius: size,
                stops: vec![
                    ColorStop::new(0.0, Color::rgba8(255, 69, 0, 0.4)),
                    ColorStop::new(0.6, Color::rgba8(255, 140, 0, 0.2)),
                    ColorStop::new(1.0, Color::TRANSPARENT),
                ],
            });
            let result = surface.fill_ellipse(Vec2::ZERO, Vec2::new(size, size * FLARE_ASPECT));
            surface.restore();
            result?;
        }
        Ok(())
    }

    fn draw_disc(&self, surface: &mut dyn DrawSurface, base: f32) -> Result<(), SurfaceError> {
        let outline = self.outline(base);
        surface.set_fill(Paint::Radial {
            center: Vec2::ZERO,
            inner_radius: base * 0.2,
            outer_radius: base * 1.1,
            stops: vec![
                ColorStop::new(0.0, Color::WHITE),
                ColorStop::new(0.3, Color::GOLD),
                ColorStop::new(0.7, Color::rgba8(255, 69, 0, 1.0)),
                ColorStop::new(1.0, Color::rgba8(255, 69, 0, 0.0)),
            ],
        });
        surface.fill_polygon(&outline)?;

        // Atmosphere: same outline, faint gold with an orange glow.
        surface.set_shadow(Some(Shadow {
            color: Color::rgba8(255, 140, 0, 1.0),
            blur: base * 0.5,
        }));
        surface.set_fill(Paint::Solid(Color::rgba8(255, 215, 0, 0.1)));
        surface.fill_polygon(&outline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::draw_list::{DrawCommand, DrawList};

    fn sun() -> Sun {
        Sun::new(&GalaxyConfig::default())
    }

    #[test]
    fn base_radius_scales_above_zoom_one() {
        assert_eq!(Sun::base_radius(5.0), 325.0);
        assert_eq!(Sun::base_radius(2.0), 130.0);
        assert_eq!(Sun::base_radius(1.0), 130.0);
        assert_eq!(Sun::base_radius(0.5), 130.0);
        // Kept as-is: just above 1 the disc is smaller than at 1.
        assert!(Sun::base_radius(1.1) < Sun::base_radius(1.0));
    }

    #[test]
    fn pulse_accumulates() {
        let mut s = sun();
        for _ in 0..200 {
            s.update();
        }
        assert!((s.pulse() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn pulse_wraps_without_changing_the_disc() {
        let mut s = sun();
        s.pulse = PULSE_PERIOD - PULSE_STEP * 0.5;
        let before = s.pulse;
        s.update();
        assert!((0.0..PULSE_STEP).contains(&s.pulse()), "pulse {}", s.pulse());
        for i in 0..OUTLINE_SAMPLES {
            let angle = TAU * i as f32 / OUTLINE_SAMPLES as f32;
            let unwrapped = Sun::surface_radius(130.0, angle, before + PULSE_STEP);
            let wrapped = Sun::surface_radius(130.0, angle, s.pulse());
            assert!((unwrapped - wrapped).abs() < 1e-2, "{unwrapped} vs {wrapped}");
        }
    }

    #[test]
    fn outline_is_closed_and_near_base() {
        let mut s = sun();
        s.update();
        let outline = s.outline(130.0);
        assert_eq!(outline.len(), OUTLINE_SAMPLES + 1);
        assert!((outline[0] - outline[OUTLINE_SAMPLES]).length() < 1e-3);
        for p in &outline {
            // Ripple amplitude is at most 2 + 1.5 + 3.
            assert!((p.length() - 130.0).abs() <= 6.5 + 1e-3);
        }
    }

    #[test]
    fn prompt_fades_between_three_and_five() {
        let s = sun();
        assert_eq!(s.prompt_alpha(3.0), None);
        assert_eq!(s.prompt_alpha(4.0), Some(0.5));
        assert_eq!(s.prompt_alpha(5.0), Some(1.0));
        assert_eq!(s.prompt_alpha(1.0), None);
    }

    #[test]
    fn draws_flares_then_disc_then_prompt() {
        let ctx = FrameContext::test(5.0);
        let mut list = DrawList::new(800, 600);
        sun().draw(&mut list, &ctx).unwrap();
        let cmds = list.commands();
        assert_eq!(cmds.len(), 6);
        for c in &cmds[..3] {
            match c {
                DrawCommand::Ellipse { center, radii, style, .. } => {
                    assert_eq!(*center, ctx.center);
                    assert!((radii.y - radii.x * 0.8).abs() < 1e-3);
                    assert_eq!(style.composite, Composite::Screen);
                }
                other => panic!("expected flare, got {other:?}"),
            }
        }
        assert!(matches!(cmds[3], DrawCommand::Polygon { .. }));
        match &cmds[4] {
            DrawCommand::Polygon { style, .. } => {
                assert_eq!(style.shadow.unwrap().blur, 325.0 * 0.5);
                assert_eq!(style.composite, Composite::SourceOver);
            }
            other => panic!("expected atmosphere, got {other:?}"),
        }
        match &cmds[5] {
            DrawCommand::Text { text, pos, font, style, .. } => {
                assert_eq!(text, PROMPT_TEXT);
                assert_eq!(*pos, ctx.center + Vec2::new(0.0, 10.0));
                assert_eq!(font, PROMPT_FONT);
                assert_eq!(style.alpha, 1.0);
            }
            other => panic!("expected prompt, got {other:?}"),
        }
        assert_eq!(list.save_depth(), 0);
    }

    #[test]
    fn no_prompt_in_browse_mode() {
        let mut list = DrawList::new(800, 600);
        sun().draw(&mut list, &FrameContext::test(1.0)).unwrap();
        assert!(list.commands().iter().all(|c| !matches!(c, DrawCommand::Text { .. })));
    }
}
