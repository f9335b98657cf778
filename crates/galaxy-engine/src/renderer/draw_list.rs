//! In-memory recording surface.
//!
//! `DrawList` implements `DrawSurface` by appending one `DrawCommand` per
//! primitive, with the transform already applied and the style stack
//! resolved into the command. Tests assert on it directly; a host without a
//! live canvas can replay it.
//!
//! `clear()` starts a new frame and drops the previous one, so a list driven
//! every frame holds a single frame. `with_history` keeps every frame.

use std::collections::HashSet;

use glam::{Affine2, Vec2};

use crate::api::error::SurfaceError;
use crate::api::types::ImageId;
use crate::renderer::color::Color;
use crate::renderer::surface::{
    ColorStop, Composite, DrawSurface, Filter, Paint, Rect, Shadow,
};

/// Style in effect when a primitive was recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawStyle {
    pub alpha: f32,
    pub composite: Composite,
    pub filter: Filter,
    pub shadow: Option<Shadow>,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            composite: Composite::SourceOver,
            filter: Filter::None,
            shadow: None,
        }
    }
}

/// One recorded primitive. Coordinates are in surface pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Circle {
        center: Vec2,
        radius: f32,
        paint: Paint,
        style: DrawStyle,
    },
    Ellipse {
        center: Vec2,
        radii: Vec2,
        rotation: f32,
        paint: Paint,
        style: DrawStyle,
    },
    Polygon {
        points: Vec<Vec2>,
        paint: Paint,
        style: DrawStyle,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Color,
        width: f32,
        style: DrawStyle,
    },
    Image {
        image: ImageId,
        dst: Rect,
        style: DrawStyle,
    },
    Text {
        text: String,
        pos: Vec2,
        font: String,
        paint: Paint,
        style: DrawStyle,
    },
}

impl DrawCommand {
    pub fn style(&self) -> Option<&DrawStyle> {
        match self {
            DrawCommand::Clear => None,
            DrawCommand::Circle { style, .. }
            | DrawCommand::Ellipse { style, .. }
            | DrawCommand::Polygon { style, .. }
            | DrawCommand::Line { style, .. }
            | DrawCommand::Image { style, .. }
            | DrawCommand::Text { style, .. } => Some(style),
        }
    }
}

#[derive(Debug, Clone)]
struct State {
    transform: Affine2,
    rotation: f32,
    style: DrawStyle,
    fill: Paint,
    stroke: (Color, f32),
}

impl Default for State {
    fn default() -> Self {
        Self {
            transform: Affine2::IDENTITY,
            rotation: 0.0,
            style: DrawStyle::default(),
            fill: Paint::default(),
            stroke: (Color::BLACK, 1.0),
        }
    }
}

/// Recording `DrawSurface`.
pub struct DrawList {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
    state: State,
    stack: Vec<State>,
    ready: HashSet<ImageId>,
    broken: HashSet<ImageId>,
    keep_history: bool,
}

impl DrawList {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::with_capacity(1024),
            state: State::default(),
            stack: Vec::new(),
            ready: HashSet::new(),
            broken: HashSet::new(),
            keep_history: false,
        }
    }

    /// A list whose `clear()` appends a marker instead of dropping earlier
    /// frames. Memory grows with every frame.
    pub fn with_history(width: u32, height: u32) -> Self {
        Self {
            keep_history: true,
            ..Self::new(width, height)
        }
    }

    /// Report `image` as loaded.
    pub fn mark_ready(&mut self, image: ImageId) {
        self.ready.insert(image);
    }

    /// Report `image` as loaded but failing every blit, like a canvas image
    /// stuck in a broken intermediate state.
    pub fn mark_broken(&mut self, image: ImageId) {
        self.ready.insert(image);
        self.broken.insert(image);
    }

    /// Every command recorded since the last `clear()`, or since creation
    /// when keeping history.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Commands recorded since the most recent `clear()`.
    pub fn last_frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Clear))
            .map(|i| i + 1)
            .unwrap_or(0);
        &self.commands[start..]
    }

    /// Drop recorded commands, keeping surface state.
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Depth of the save/restore stack. Zero between frames.
    pub fn save_depth(&self) -> usize {
        self.stack.len()
    }

    fn point(&self, p: Vec2) -> Vec2 {
        self.state.transform.transform_point2(p)
    }

    fn resolve_paint(&self, paint: &Paint) -> Paint {
        let map_stops = |stops: &[ColorStop]| stops.to_vec();
        match paint {
            Paint::Solid(c) => Paint::Solid(*c),
            Paint::Linear { start, end, stops } => Paint::Linear {
                start: self.point(*start),
                end: self.point(*end),
                stops: map_stops(stops),
            },
            Paint::Radial { center, inner_radius, outer_radius, stops } => Paint::Radial {
                center: self.point(*center),
                inner_radius: *inner_radius,
                outer_radius: *outer_radius,
                stops: map_stops(stops),
            },
        }
    }

    fn fill_paint(&self) -> Paint {
        self.resolve_paint(&self.state.fill)
    }
}

impl DrawSurface for DrawList {
    fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn clear(&mut self) {
        if !self.keep_history {
            self.commands.clear();
        }
        self.commands.push(DrawCommand::Clear);
    }

    fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn translate(&mut self, offset: Vec2) {
        self.state.transform = self.state.transform * Affine2::from_translation(offset);
    }

    fn rotate(&mut self, radians: f32) {
        self.state.transform = self.state.transform * Affine2::from_angle(radians);
        self.state.rotation += radians;
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.state.style.alpha = alpha.clamp(0.0, 1.0);
    }

    fn set_composite(&mut self, composite: Composite) {
        self.state.style.composite = composite;
    }

    fn set_filter(&mut self, filter: Filter) {
        self.state.style.filter = filter;
    }

    fn set_shadow(&mut self, shadow: Option<Shadow>) {
        self.state.style.shadow = shadow;
    }

    fn set_fill(&mut self, paint: Paint) {
        self.state.fill = paint;
    }

    fn set_stroke(&mut self, color: Color, width: f32) {
        self.state.stroke = (color, width);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) -> Result<(), SurfaceError> {
        self.commands.push(DrawCommand::Circle {
            center: self.point(center),
            radius,
            paint: self.fill_paint(),
            style: self.state.style.clone(),
        });
        Ok(())
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2) -> Result<(), SurfaceError> {
        self.commands.push(DrawCommand::Ellipse {
            center: self.point(center),
            radii,
            rotation: self.state.rotation,
            paint: self.fill_paint(),
            style: self.state.style.clone(),
        });
        Ok(())
    }

    fn fill_polygon(&mut self, points: &[Vec2]) -> Result<(), SurfaceError> {
        self.commands.push(DrawCommand::Polygon {
            points: points.iter().map(|p| self.point(*p)).collect(),
            paint: self.fill_paint(),
            style: self.state.style.clone(),
        });
        Ok(())
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2) -> Result<(), SurfaceError> {
        let (color, width) = self.state.stroke;
        self.commands.push(DrawCommand::Line {
            from: self.point(from),
            to: self.point(to),
            color,
            width,
            style: self.state.style.clone(),
        });
        Ok(())
    }

    fn image_ready(&self, image: ImageId) -> bool {
        self.ready.contains(&image)
    }

    fn draw_image(&mut self, image: ImageId, dst: Rect) -> Result<(), SurfaceError> {
        if !self.ready.contains(&image) {
            return Err(SurfaceError::ImageNotReady(image));
        }
        if self.broken.contains(&image) {
            return Err(SurfaceError::Backend(format!("image {} is broken", image.0)));
        }
        let center = self.point(dst.center());
        self.commands.push(DrawCommand::Image {
            image,
            dst: Rect::centered(center, dst.width),
            style: self.state.style.clone(),
        });
        Ok(())
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str) -> Result<(), SurfaceError> {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            pos: self.point(pos),
            font: font.to_owned(),
            paint: self.fill_paint(),
            style: self.state.style.clone(),
        });
        Ok(())
    }
}
