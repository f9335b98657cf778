use glam::Vec2;

use crate::api::error::SurfaceError;
use crate::api::types::ImageId;
use crate::renderer::color::Color;
use crate::renderer::surface::{DrawSurface, Filter, Paint, Rect, Shadow};

/// Sprites at or below this opacity are skipped entirely.
pub const MIN_VISIBLE_OPACITY: f32 = 0.01;
/// Icons are only blitted above this size; smaller ones are dots.
const MIN_IMAGE_SIZE: f32 = 10.0;
const LARGE_SIZE: f32 = 50.0;
const GLOW_LARGE: f32 = 40.0;
const GLOW_SMALL: f32 = 15.0;

/// Resolved per-frame appearance of an icon star (greeting, ambient or
/// sector pin).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    /// Center in surface pixels.
    pub pos: Vec2,
    /// Edge length of the icon box.
    pub size: f32,
    pub opacity: f32,
    pub image: Option<ImageId>,
    /// Glow and fallback color. Greetings and ambient stars have none and
    /// glow gold over a white dot.
    pub color: Option<Color>,
    /// Draw as a pure black cut-out.
    pub silhouette: bool,
}

impl Sprite {
    /// Paint the sprite. Falls back to a dot of radius `size / 4` when the
    /// icon is missing, still loading, or too small. A failed blit is
    /// returned after the surface state is restored.
    pub fn draw(&self, surface: &mut dyn DrawSurface) -> Result<(), SurfaceError> {
        surface.save();
        surface.set_global_alpha(self.opacity);
        surface.set_filter(if self.silhouette { Filter::Silhouette } else { Filter::None });

        let result = match self.image {
            Some(image) if self.size > MIN_IMAGE_SIZE && surface.image_ready(image) => {
                let blur = if self.size > LARGE_SIZE { GLOW_LARGE } else { GLOW_SMALL };
                surface.set_shadow(Some(Shadow {
                    color: self.color.unwrap_or(Color::GOLD),
                    blur,
                }));
                surface.draw_image(image, Rect::centered(self.pos, self.size))
            }
            _ => {
                surface.set_fill(Paint::Solid(self.color.unwrap_or(Color::WHITE)));
                surface.fill_circle(self.pos, self.size / 4.0)
            }
        };

        surface.restore();
        result
    }
}
