use glam::Vec2;

use crate::api::config::GalaxyConfig;

/// Rendering regime derived from the zoom scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Zoomed in on the sun, waiting for the unlock click.
    Intro,
    /// Unlocked, still above the intro threshold while easing out.
    Transition,
    /// At or below the intro threshold: sector browser.
    Browse,
}

/// Single-scalar camera.
///
/// There is no view matrix: every entity divides its offset from the
/// viewport center by `zoom`, so lowering the zoom spreads the scene
/// outward ("pulling back"). The zoom eases toward its target by a fixed
/// fraction each frame and never quite arrives.
#[derive(Debug, Clone)]
pub struct ZoomCamera {
    zoom: f32,
    target: f32,
    exploding: bool,
    ease_rate: f32,
    snap_tolerance: f32,
    intro_threshold: f32,
}

impl ZoomCamera {
    pub fn new(config: &GalaxyConfig) -> Self {
        Self {
            zoom: config.initial_zoom,
            target: config.initial_zoom,
            exploding: false,
            ease_rate: config.ease_rate,
            snap_tolerance: config.snap_tolerance,
            intro_threshold: config.intro_threshold,
        }
    }

    /// Ease the zoom toward its target. Returns whether the zoom moved.
    pub fn update(&mut self) -> bool {
        let delta = self.target - self.zoom;
        if delta.abs() > self.snap_tolerance {
            self.zoom += delta * self.ease_rate;
            true
        } else {
            false
        }
    }

    /// Start the one-way intro -> browse transition. Returns false (and
    /// changes nothing) if it was already started.
    pub fn trigger_unlock(&mut self, browse_zoom: f32) -> bool {
        if self.exploding {
            return false;
        }
        self.exploding = true;
        self.target = browse_zoom;
        true
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Once set, never cleared.
    pub fn is_exploding(&self) -> bool {
        self.exploding
    }

    pub fn is_intro(&self) -> bool {
        self.zoom > self.intro_threshold
    }

    pub fn mode(&self) -> ViewMode {
        if !self.is_intro() {
            ViewMode::Browse
        } else if self.exploding {
            ViewMode::Transition
        } else {
            ViewMode::Intro
        }
    }

    /// Force a zoom value (host overrides, tests).
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom;
    }
}

/// Drawing-surface frame: pixel size and its center point.
/// All scene positions are offsets from `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub center: Vec2,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            center: Vec2::new(width / 2.0, height / 2.0),
        }
    }

    /// Record a new surface size and recompute the center.
    pub fn resize(&mut self, width: f32, height: f32) {
        *self = Self::new(width, height);
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> ZoomCamera {
        ZoomCamera::new(&GalaxyConfig::default())
    }

    #[test]
    fn starts_in_intro_at_rest() {
        let mut cam = camera();
        assert_eq!(cam.zoom(), 5.0);
        assert_eq!(cam.mode(), ViewMode::Intro);
        assert!(!cam.update());
        assert_eq!(cam.zoom(), 5.0);
    }

    #[test]
    fn easing_is_two_percent_of_remaining_distance() {
        let mut cam = camera();
        cam.trigger_unlock(1.0);
        assert!(cam.update());
        assert!((cam.zoom() - (5.0 - 4.0 * 0.02)).abs() < 1e-6);
    }

    #[test]
    fn easing_converges_monotonically_without_overshoot() {
        let mut cam = camera();
        cam.trigger_unlock(1.0);
        let mut prev = cam.zoom();
        for _ in 0..2000 {
            cam.update();
            let z = cam.zoom();
            assert!(z <= prev, "zoom went back up: {prev} -> {z}");
            assert!(z > cam.target(), "overshot target: {z}");
            prev = z;
        }
        assert!((cam.zoom() - cam.target()).abs() <= 0.01 + 1e-6);
    }

    #[test]
    fn unlock_is_one_shot() {
        let mut cam = camera();
        assert!(cam.trigger_unlock(1.0));
        assert!(!cam.trigger_unlock(3.0));
        assert_eq!(cam.target(), 1.0);
        assert!(cam.is_exploding());
    }

    #[test]
    fn mode_follows_threshold() {
        let mut cam = camera();
        cam.trigger_unlock(1.0);
        assert_eq!(cam.mode(), ViewMode::Transition);
        cam.set_zoom(2.0);
        assert_eq!(cam.mode(), ViewMode::Browse);
        cam.set_zoom(2.0001);
        assert_eq!(cam.mode(), ViewMode::Transition);
    }

    #[test]
    fn viewport_center_is_half_size() {
        let mut vp = Viewport::new(800.0, 600.0);
        assert_eq!(vp.center, Vec2::new(400.0, 300.0));
        vp.resize(1920.0, 1081.0);
        assert_eq!(vp.center, Vec2::new(960.0, 540.5));
        assert_eq!(vp.size(), Vec2::new(1920.0, 1081.0));
    }
}
