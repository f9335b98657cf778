pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod assets;

// Re-export key types at crate root for convenience
pub use api::config::GalaxyConfig;
pub use api::error::{AssetError, ConfigError, SurfaceError};
pub use api::types::{ImageId, SceneEvent};
pub use assets::manifest::AssetManifest;
pub use assets::registry::ImageRegistry;
pub use components::entity::{Entity, FrameContext};
pub use components::layer::Layer;
pub use components::sector::{SectorDescriptor, SectorId, UnknownSector};
pub use components::shooting_star::ShootingStar;
pub use components::sprite::Sprite;
pub use core::clock::{FrameClock, OneShot};
pub use core::rng::Rng;
pub use core::scene::GalaxyScene;
pub use renderer::camera::{ViewMode, Viewport, ZoomCamera};
pub use renderer::color::Color;
pub use renderer::draw_list::{DrawCommand, DrawList, DrawStyle};
pub use renderer::surface::{ColorStop, Composite, DrawSurface, Filter, Paint, Rect, Shadow};
pub use systems::compositor::{draw_layers, FrameStats, LayerSources};
pub use systems::sector_binding::SectorTracker;
pub use systems::sun::Sun;
