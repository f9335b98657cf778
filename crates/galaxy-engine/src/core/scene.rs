use crate::api::config::GalaxyConfig;
use crate::api::types::{ImageId, SceneEvent};
use crate::assets::manifest::AssetManifest;
use crate::assets::registry::ImageRegistry;
use crate::components::ambient::AmbientStar;
use crate::components::deep_star::DeepSpaceStar;
use crate::components::dust::Dust;
use crate::components::entity::{Entity, FrameContext};
use crate::components::greeting::GreetingStar;
use crate::components::sector::SectorId;
use crate::components::sector_pin::SectorPin;
use crate::components::shooting_star::ShootingStar;
use crate::core::clock::{FrameClock, OneShot};
use crate::core::rng::Rng;
use crate::renderer::camera::{ViewMode, Viewport, ZoomCamera};
use crate::renderer::surface::DrawSurface;
use crate::systems::compositor::{self, FrameStats, LayerSources};
use crate::systems::sector_binding::SectorTracker;
use crate::systems::sun::Sun;

/// The whole landing scene: camera, entities, sun, current sector and the
/// deferred interface reveal. Owned by the host's frame loop; every input
/// is a plain method call made between frames.
pub struct GalaxyScene {
    config: GalaxyConfig,
    camera: ZoomCamera,
    viewport: Viewport,
    clock: FrameClock,
    rng: Rng,
    sectors: SectorTracker,
    entities: Vec<Entity>,
    shooting_star: Option<ShootingStar>,
    sun: Sun,
    reveal: Option<OneShot>,
    images: ImageRegistry,
    events: Vec<SceneEvent>,
    last_stats: FrameStats,
}

impl GalaxyScene {
    /// Build the scene and every entity. All random parameters come from
    /// `config.seed`. The viewport starts empty; call `resize` before the
    /// first frame.
    pub fn new(config: GalaxyConfig, manifest: &AssetManifest) -> Self {
        let mut rng = Rng::new(config.seed);
        let mut images = ImageRegistry::new();
        let mut entities = Vec::with_capacity(
            config.deep_star_count
                + config.dust_count
                + config.greeting_count
                + SectorId::COUNT
                + config.ambient_count,
        );

        entities.extend((0..config.deep_star_count).map(|_| Entity::DeepSpace(DeepSpaceStar::new(&mut rng))));
        entities.extend((0..config.dust_count).map(|_| Entity::Dust(Dust::new(&mut rng))));

        for i in 0..config.greeting_count {
            let image = cycle(&manifest.greetings, i).map(|path| images.intern(path));
            entities.push(Entity::Greeting(GreetingStar::new(i, config.greeting_count, image)));
        }

        for sector in SectorId::ALL {
            let image = images.intern(manifest.icon_for(sector));
            entities.push(Entity::Sector(SectorPin::new(sector, &mut rng, Some(image))));
        }

        if manifest.ambient.is_empty() {
            log::debug!("no ambient icons; skipping ambient stars");
        } else {
            for i in 0..config.ambient_count {
                let image = cycle(&manifest.ambient, i).map(|path| images.intern(path));
                entities.push(Entity::Ambient(AmbientStar::new(&mut rng, image)));
            }
        }

        log::debug!("galaxy scene: {} entities, {} images", entities.len(), images.len());

        Self {
            camera: ZoomCamera::new(&config),
            viewport: Viewport::new(0.0, 0.0),
            clock: FrameClock::new(),
            rng,
            sectors: SectorTracker::new(),
            entities,
            shooting_star: None,
            sun: Sun::new(&config),
            reveal: None,
            images,
            events: Vec::new(),
            last_stats: FrameStats::default(),
            config,
        }
    }

    /// Record a new viewport size. The center is valid immediately.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport.resize(width, height);
    }

    /// A click anywhere on the page. Same as `unlock`.
    pub fn click(&mut self) -> bool {
        self.unlock()
    }

    /// Start the intro -> browse transition and arm the interface reveal.
    /// Only the first call does anything; returns whether this one did.
    pub fn unlock(&mut self) -> bool {
        if !self.camera.trigger_unlock(self.config.browse_zoom) {
            return false;
        }
        self.reveal = Some(OneShot::after(self.clock.now_ms(), self.config.reveal_delay_ms));
        self.events.push(SceneEvent::UnlockStarted);
        log::info!(
            "unlock: zoom {:.2} -> {:.2}, reveal in {} ms",
            self.camera.zoom(),
            self.camera.target(),
            self.config.reveal_delay_ms
        );
        true
    }

    /// Point the pins at `section_id` directly.
    pub fn set_focus(&mut self, section_id: &str) {
        self.sectors.set_focus(section_id);
    }

    /// Visibility report for a content section (`ratio` of it on screen).
    pub fn on_section_visibility(&mut self, section_id: &str, ratio: f32) -> bool {
        self.sectors.on_visibility(section_id, ratio)
    }

    /// Advance one frame and paint it onto `surface`.
    pub fn frame(&mut self, dt_ms: f64, surface: &mut dyn DrawSurface) -> FrameStats {
        self.clock.tick(dt_ms);
        self.camera.update();

        if let Some(reveal) = self.reveal.as_mut() {
            if reveal.poll(self.clock.now_ms()) {
                log::info!("revealing interface at frame {}", self.clock.frame());
                self.events.push(SceneEvent::InterfaceRevealed);
            }
        }

        surface.clear();

        let ctx = self.frame_context();
        for entity in &mut self.entities {
            entity.update(&ctx);
        }
        self.sun.update();
        self.update_shooting_star();

        let stats = compositor::draw_layers(
            surface,
            &LayerSources {
                entities: &self.entities,
                shooting_star: self.shooting_star.as_ref(),
                sun: &self.sun,
            },
            &ctx,
        );

        if self.shooting_star.as_ref().is_some_and(ShootingStar::is_spent) {
            self.shooting_star = None;
        }

        if stats.failed > 0 && self.last_stats.failed == 0 {
            log::warn!("{} draw calls failed; skipping them", stats.failed);
        }
        self.last_stats = stats;
        stats
    }

    fn update_shooting_star(&mut self) {
        if self.shooting_star.is_none() && self.rng.next_f32() < self.config.shooting_star_chance {
            self.shooting_star = Some(ShootingStar::spawn(&mut self.rng, self.viewport.size()));
        }
        if let Some(star) = self.shooting_star.as_mut() {
            star.advance(self.config.shooting_star_decay);
        }
    }

    fn frame_context(&self) -> FrameContext {
        FrameContext::new(
            &self.config,
            self.camera.zoom(),
            self.viewport.center,
            self.clock.time(),
            self.sectors.current(),
        )
    }

    /// Take every event produced since the last call.
    pub fn drain_events(&mut self) -> Vec<SceneEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn config(&self) -> &GalaxyConfig {
        &self.config
    }

    pub fn zoom(&self) -> f32 {
        self.camera.zoom()
    }

    pub fn target_zoom(&self) -> f32 {
        self.camera.target()
    }

    pub fn is_exploding(&self) -> bool {
        self.camera.is_exploding()
    }

    pub fn mode(&self) -> ViewMode {
        self.camera.mode()
    }

    pub fn is_browsing(&self) -> bool {
        !self.camera.is_intro()
    }

    /// Force the zoom (host overrides, tests). Does not touch the target.
    pub fn set_zoom(&mut self, zoom: f32) {
        self.camera.set_zoom(zoom);
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn current_sector(&self) -> Option<SectorId> {
        self.sectors.current()
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn shooting_star(&self) -> Option<&ShootingStar> {
        self.shooting_star.as_ref()
    }

    pub fn images(&self) -> &ImageRegistry {
        &self.images
    }

    /// Frames rendered so far.
    pub fn frame_count(&self) -> u64 {
        self.clock.frame()
    }

    pub fn last_stats(&self) -> FrameStats {
        self.last_stats
    }

    pub fn is_interface_revealed(&self) -> bool {
        self.reveal.as_ref().is_some_and(OneShot::has_fired)
    }

    /// Image id for an asset path, if the scene uses it.
    pub fn image_for(&self, path: &str) -> Option<ImageId> {
        self.images.iter().find(|(_, p)| *p == path).map(|(id, _)| id)
    }
}

fn cycle(paths: &[String], index: usize) -> Option<&str> {
    if paths.is_empty() {
        None
    } else {
        Some(paths[index % paths.len()].as_str())
    }
}
