use glam::Vec2;

use crate::api::config::GalaxyConfig;
use crate::api::error::SurfaceError;
use crate::components::ambient::AmbientStar;
use crate::components::deep_star::DeepSpaceStar;
use crate::components::dust::Dust;
use crate::components::greeting::GreetingStar;
use crate::components::layer::Layer;
use crate::components::sector::SectorId;
use crate::components::sector_pin::SectorPin;
use crate::components::sprite::{Sprite, MIN_VISIBLE_OPACITY};
use crate::renderer::surface::DrawSurface;

/// Read-only view of the scene state handed to every entity each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    pub zoom: f32,
    /// Viewport center in surface pixels.
    pub center: Vec2,
    /// Global frame counter as a float.
    pub time: f64,
    pub sector: Option<SectorId>,
    pub intro_threshold: f32,
    pub dust_max_zoom: f32,
    pub silhouette_half_width: f32,
}

impl FrameContext {
    pub fn new(config: &GalaxyConfig, zoom: f32, center: Vec2, time: f64, sector: Option<SectorId>) -> Self {
        Self {
            zoom,
            center,
            time,
            sector,
            intro_threshold: config.intro_threshold,
            dust_max_zoom: config.dust_max_zoom,
            silhouette_half_width: config.silhouette_half_width,
        }
    }

    pub fn is_intro(&self) -> bool {
        self.zoom > self.intro_threshold
    }

    /// Screen position of a zoom-1 offset. Dividing by zoom is the whole
    /// camera: lower zoom spreads everything outward.
    pub fn project(&self, offset: Vec2) -> Vec2 {
        self.center + offset / self.zoom
    }

    /// Default-config context centered in an 800x600 surface.
    #[cfg(test)]
    pub(crate) fn test(zoom: f32) -> Self {
        Self::new(&GalaxyConfig::default(), zoom, Vec2::new(400.0, 300.0), 0.0, None)
    }
}

/// Every long-lived scene entity. The shooting star is transient and lives
/// outside this list.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    DeepSpace(DeepSpaceStar),
    Dust(Dust),
    Greeting(GreetingStar),
    Ambient(AmbientStar),
    Sector(SectorPin),
}

impl Entity {
    /// Layer this entity paints into this frame. Greetings switch between
    /// the two halves of the ring as they orbit.
    pub fn layer(&self) -> Layer {
        match self {
            Entity::DeepSpace(_) => Layer::DeepSpace,
            Entity::Dust(_) => Layer::Dust,
            Entity::Ambient(_) => Layer::Ambient,
            Entity::Sector(_) => Layer::SectorPins,
            Entity::Greeting(g) if g.is_behind_sun() => Layer::GreetingsBehind,
            Entity::Greeting(_) => Layer::GreetingsFront,
        }
    }

    pub fn update(&mut self, ctx: &FrameContext) {
        match self {
            Entity::DeepSpace(s) => s.update(ctx),
            Entity::Dust(d) => d.update(ctx),
            Entity::Greeting(g) => g.update(ctx),
            Entity::Ambient(a) => a.update(ctx),
            Entity::Sector(_) => {}
        }
    }

    /// Icon appearance for sprite-based entities.
    pub fn sprite(&self, ctx: &FrameContext) -> Option<Sprite> {
        match self {
            Entity::Greeting(g) => Some(g.sprite(ctx)),
            Entity::Ambient(a) => Some(a.sprite(ctx)),
            Entity::Sector(p) => Some(p.sprite(ctx)),
            Entity::DeepSpace(_) | Entity::Dust(_) => None,
        }
    }

    pub fn draw(&self, surface: &mut dyn DrawSurface, ctx: &FrameContext) -> Result<(), SurfaceError> {
        match self {
            Entity::DeepSpace(s) => s.draw(surface, ctx),
            Entity::Dust(d) => d.draw(surface, ctx),
            _ => match self.sprite(ctx) {
                Some(sprite) if sprite.opacity > MIN_VISIBLE_OPACITY => sprite.draw(surface),
                _ => Ok(()),
            },
        }
    }
}
