use std::f64::consts::TAU;

use galaxy_engine::{
    Color, ColorStop, Composite, DrawSurface, Filter, ImageId, Paint, Rect, Shadow, SurfaceError,
};
use glam::Vec2;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasGradient, CanvasRenderingContext2d, HtmlCanvasElement};

use crate::images::ImageStore;

fn backend(e: JsValue) -> SurfaceError {
    SurfaceError::Backend(format!("{e:?}"))
}

/// State setters have no error channel in `DrawSurface`; a canvas that
/// rejects one just keeps its previous state.
fn log_rejected(op: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        log::debug!("canvas rejected {op}: {e:?}");
    }
}

/// `DrawSurface` over a browser 2D canvas.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    images: ImageStore,
}

impl CanvasSurface {
    /// Look up `canvas_id` and take its 2D context.
    pub fn from_element_id(canvas_id: &str, images: ImageStore) -> Result<Self, String> {
        let canvas = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("no document")?
            .get_element_by_id(canvas_id)
            .ok_or_else(|| format!("no element #{canvas_id}"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| format!("#{canvas_id} is not a canvas"))?;

        let ctx = canvas
            .get_context("2d")
            .map_err(|e| format!("{e:?}"))?
            .ok_or("no 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "not a 2d context")?;

        Ok(Self { canvas, ctx, images })
    }

    pub fn images(&self) -> &ImageStore {
        &self.images
    }

    fn gradient(&self, paint: &Paint) -> Result<Option<CanvasGradient>, JsValue> {
        let (gradient, stops): (CanvasGradient, &[ColorStop]) = match paint {
            Paint::Solid(_) => return Ok(None),
            Paint::Linear { start, end, stops } => (
                self.ctx.create_linear_gradient(
                    start.x as f64,
                    start.y as f64,
                    end.x as f64,
                    end.y as f64,
                ),
                stops.as_slice(),
            ),
            Paint::Radial { center, inner_radius, outer_radius, stops } => (
                self.ctx.create_radial_gradient(
                    center.x as f64,
                    center.y as f64,
                    *inner_radius as f64,
                    center.x as f64,
                    center.y as f64,
                    *outer_radius as f64,
                )?,
                stops.as_slice(),
            ),
        };
        for stop in stops {
            gradient.add_color_stop(stop.offset, &stop.color.to_css())?;
        }
        Ok(Some(gradient))
    }
}

impl DrawSurface for CanvasSurface {
    fn size(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self) {
        let size = self.size();
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, offset: Vec2) {
        log_rejected("translate", self.ctx.translate(offset.x as f64, offset.y as f64));
    }

    fn rotate(&mut self, radians: f32) {
        log_rejected("rotate", self.ctx.rotate(radians as f64));
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha.clamp(0.0, 1.0) as f64);
    }

    fn set_composite(&mut self, composite: Composite) {
        log_rejected(
            "composite",
            self.ctx.set_global_composite_operation(composite.as_css()),
        );
    }

    fn set_filter(&mut self, filter: Filter) {
        self.ctx.set_filter(filter.as_css());
    }

    fn set_shadow(&mut self, shadow: Option<Shadow>) {
        match shadow {
            Some(shadow) => {
                self.ctx.set_shadow_color(&shadow.color.to_css());
                self.ctx.set_shadow_blur(shadow.blur as f64);
            }
            None => {
                self.ctx.set_shadow_color(&Color::TRANSPARENT.to_css());
                self.ctx.set_shadow_blur(0.0);
            }
        }
    }

    fn set_fill(&mut self, paint: Paint) {
        match self.gradient(&paint) {
            Ok(Some(gradient)) => self.ctx.set_fill_style_canvas_gradient(&gradient),
            Ok(None) => {
                if let Paint::Solid(color) = paint {
                    self.ctx.set_fill_style_str(&color.to_css());
                }
            }
            Err(e) => log::debug!("canvas rejected gradient: {e:?}"),
        }
    }

    fn set_stroke(&mut self, color: Color, width: f32) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) -> Result<(), SurfaceError> {
        self.ctx.begin_path();
        self.ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU)
            .map_err(backend)?;
        self.ctx.fill();
        Ok(())
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2) -> Result<(), SurfaceError> {
        self.ctx.begin_path();
        self.ctx
            .ellipse(
                center.x as f64,
                center.y as f64,
                radii.x.max(0.0) as f64,
                radii.y.max(0.0) as f64,
                0.0,
                0.0,
                TAU,
            )
            .map_err(backend)?;
        self.ctx.fill();
        Ok(())
    }

    fn fill_polygon(&mut self, points: &[Vec2]) -> Result<(), SurfaceError> {
        let Some((first, rest)) = points.split_first() else {
            return Ok(());
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
        self.ctx.fill();
        Ok(())
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2) -> Result<(), SurfaceError> {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
        Ok(())
    }

    fn image_ready(&self, image: ImageId) -> bool {
        self.images.is_ready(image)
    }

    fn draw_image(&mut self, image: ImageId, dst: Rect) -> Result<(), SurfaceError> {
        let img = self.images.get(image).ok_or(SurfaceError::UnknownImage(image))?;
        if !self.images.is_ready(image) {
            return Err(SurfaceError::ImageNotReady(image));
        }
        self.ctx
            .draw_image_with_html_image_element_and_dw_and_dh(
                img,
                dst.x as f64,
                dst.y as f64,
                dst.width as f64,
                dst.height as f64,
            )
            .map_err(backend)
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str) -> Result<(), SurfaceError> {
        self.ctx.set_font(font);
        self.ctx.set_text_align("center");
        self.ctx
            .fill_text(text, pos.x as f64, pos.y as f64)
            .map_err(backend)
    }
}
