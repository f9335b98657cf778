//! Drawing surface contract.
//!
//! The engine never touches a platform API directly. Every layer draws
//! through `DrawSurface`, an immediate-mode 2D context modelled on the
//! browser canvas: a style/transform state with save/restore scoping, path
//! primitives, image blits and text. The bridge implements it on a real
//! canvas; `DrawList` implements it in memory for tests and headless hosts.

use glam::Vec2;

use crate::api::error::SurfaceError;
use crate::api::types::ImageId;
use crate::renderer::color::Color;

/// A gradient color stop at `offset` in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Color,
}

impl ColorStop {
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Fill style.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    /// Gradient along the segment `start -> end`.
    Linear {
        start: Vec2,
        end: Vec2,
        stops: Vec<ColorStop>,
    },
    /// Two concentric circles around `center` (in current user space).
    Radial {
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        stops: Vec<ColorStop>,
    },
}

impl Default for Paint {
    fn default() -> Self {
        Paint::Solid(Color::BLACK)
    }
}

/// How new pixels combine with what is already drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Composite {
    #[default]
    SourceOver,
    /// Lightening blend used by the sun's corona.
    Screen,
}

impl Composite {
    pub fn as_css(self) -> &'static str {
        match self {
            Composite::SourceOver => "source-over",
            Composite::Screen => "screen",
        }
    }
}

/// Per-draw pixel filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    None,
    /// Everything drawn becomes pure black (`brightness(0)`).
    Silhouette,
}

impl Filter {
    pub fn as_css(self) -> &'static str {
        match self {
            Filter::None => "none",
            Filter::Silhouette => "brightness(0)",
        }
    }
}

/// Soft glow cast behind everything drawn while it is set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub color: Color,
    pub blur: f32,
}

/// Axis-aligned destination box for image blits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Square of side `size` centered on `center`.
    pub fn centered(center: Vec2, size: f32) -> Self {
        Self {
            x: center.x - size / 2.0,
            y: center.y - size / 2.0,
            width: size,
            height: size,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Immediate-mode 2D drawing surface.
///
/// State setters affect every subsequent primitive until the matching
/// `restore()`. Primitives that can fail on a real backend return
/// `Result`; callers in the engine never let one failure abort a frame.
pub trait DrawSurface {
    /// Surface size in pixels.
    fn size(&self) -> Vec2;

    /// Resize the backing store (e.g. on viewport resize).
    fn resize(&mut self, width: u32, height: u32);

    /// Clear every pixel to transparent.
    fn clear(&mut self);

    /// Push the current transform and style state.
    fn save(&mut self);

    /// Pop the state pushed by the matching `save()`.
    fn restore(&mut self);

    fn translate(&mut self, offset: Vec2);

    fn rotate(&mut self, radians: f32);

    /// Global alpha multiplier for subsequent draws.
    fn set_global_alpha(&mut self, alpha: f32);

    fn set_composite(&mut self, composite: Composite);

    fn set_filter(&mut self, filter: Filter);

    /// `None` disables the glow.
    fn set_shadow(&mut self, shadow: Option<Shadow>);

    fn set_fill(&mut self, paint: Paint);

    fn set_stroke(&mut self, color: Color, width: f32);

    fn fill_circle(&mut self, center: Vec2, radius: f32) -> Result<(), SurfaceError>;

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2) -> Result<(), SurfaceError>;

    /// Fill the closed polygon through `points`.
    fn fill_polygon(&mut self, points: &[Vec2]) -> Result<(), SurfaceError>;

    fn stroke_line(&mut self, from: Vec2, to: Vec2) -> Result<(), SurfaceError>;

    /// Whether `image` has finished loading and can be blitted.
    fn image_ready(&self, image: ImageId) -> bool;

    /// Blit `image` scaled into `dst`.
    fn draw_image(&mut self, image: ImageId, dst: Rect) -> Result<(), SurfaceError>;

    /// Draw `text` horizontally centered on `pos` with a CSS font string.
    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str) -> Result<(), SurfaceError>;
}
