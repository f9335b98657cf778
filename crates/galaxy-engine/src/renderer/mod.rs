pub mod camera;
pub mod color;
pub mod draw_list;
pub mod surface;

pub use camera::{ViewMode, Viewport, ZoomCamera};
pub use color::Color;
pub use draw_list::{DrawCommand, DrawList, DrawStyle};
pub use surface::{ColorStop, Composite, DrawSurface, Filter, Paint, Rect, Shadow};
