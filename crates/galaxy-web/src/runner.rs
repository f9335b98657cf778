use galaxy_engine::{AssetManifest, DrawSurface, FrameStats, GalaxyConfig, GalaxyScene};

use crate::canvas::CanvasSurface;
use crate::dom;
use crate::images::ImageStore;

/// Wires a `GalaxyScene` to a canvas and the page.
///
/// The crate keeps one runner in a `thread_local!` and exports free
/// functions that forward to it.
pub struct GalaxyRunner {
    scene: GalaxyScene,
    surface: CanvasSurface,
}

impl GalaxyRunner {
    /// Build the scene and bind it to `#canvas_id`. Bad config or manifest
    /// JSON falls back to the defaults with a warning.
    pub fn new(canvas_id: &str, config_json: Option<&str>, manifest_json: Option<&str>) -> Result<Self, String> {
        let config = match config_json.map(GalaxyConfig::from_json) {
            Some(Ok(config)) => config,
            Some(Err(e)) => {
                log::warn!("{e}; using default config");
                GalaxyConfig::default()
            }
            None => GalaxyConfig::default(),
        };
        let manifest = match manifest_json.map(AssetManifest::from_json) {
            Some(Ok(manifest)) => manifest,
            Some(Err(e)) => {
                log::warn!("{e}; using default manifest");
                AssetManifest::default()
            }
            None => AssetManifest::default(),
        };

        let scene = GalaxyScene::new(config, &manifest);
        let mut images = ImageStore::new();
        images.load_all(scene.images());
        let surface = CanvasSurface::from_element_id(canvas_id, images)?;

        let mut runner = Self { scene, surface };
        runner.fit_window();
        Ok(runner)
    }

    /// Size canvas and scene to the window's inner size, if there is one.
    pub fn fit_window(&mut self) {
        let size = web_sys::window().and_then(|w| {
            let width = w.inner_width().ok()?.as_f64()?;
            let height = w.inner_height().ok()?.as_f64()?;
            Some((width, height))
        });
        match size {
            Some((width, height)) => self.resize(width as u32, height as u32),
            None => log::warn!("window size unavailable; call galaxy_resize"),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface.resize(width, height);
        self.scene.resize(width as f32, height as f32);
    }

    /// Render one frame and apply any page effects it produced.
    pub fn frame(&mut self, dt_ms: f64) -> FrameStats {
        let stats = self.scene.frame(dt_ms, &mut self.surface);
        self.flush_events();
        stats
    }

    pub fn click(&mut self) -> bool {
        let fired = self.scene.click();
        self.flush_events();
        fired
    }

    pub fn unlock(&mut self) -> bool {
        let fired = self.scene.unlock();
        self.flush_events();
        fired
    }

    pub fn set_focus(&mut self, section_id: &str) {
        self.scene.set_focus(section_id);
    }

    pub fn section_visible(&mut self, section_id: &str, ratio: f32) {
        self.scene.on_section_visibility(section_id, ratio);
    }

    pub fn zoom(&self) -> f32 {
        self.scene.zoom()
    }

    pub fn is_browsing(&self) -> bool {
        self.scene.is_browsing()
    }

    fn flush_events(&mut self) {
        for event in self.scene.drain_events() {
            dom::apply(event);
        }
    }
}
