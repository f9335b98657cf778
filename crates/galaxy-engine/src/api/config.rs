use serde::{Deserialize, Serialize};

use crate::api::error::ConfigError;

/// Tuning constants for the galaxy scene.
///
/// The defaults reproduce the shipped landing page exactly; the host may
/// override any subset of fields with a JSON object (missing fields keep
/// their defaults).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalaxyConfig {
    /// Zoom at page load (intro mode).
    pub initial_zoom: f32,
    /// Zoom target once the scene is unlocked.
    pub browse_zoom: f32,
    /// Fraction of the remaining distance covered per frame while easing.
    pub ease_rate: f32,
    /// Easing stops once `|target - zoom|` is at or below this.
    pub snap_tolerance: f32,
    /// `zoom > intro_threshold` renders intro mode, otherwise browse mode.
    pub intro_threshold: f32,
    /// Dust is hidden while `zoom > dust_max_zoom`.
    pub dust_max_zoom: f32,
    /// The "click to enter" prompt starts fading in above this zoom...
    pub prompt_fade_start: f32,
    /// ...and is fully opaque `prompt_fade_span` zoom units later.
    pub prompt_fade_span: f32,
    pub dust_count: usize,
    pub deep_star_count: usize,
    pub greeting_count: usize,
    pub ambient_count: usize,
    /// Per-frame probability of spawning a shooting star when none is alive.
    pub shooting_star_chance: f32,
    /// Life lost by the shooting star every frame (life starts at 1.0).
    pub shooting_star_decay: f32,
    /// Delay between the unlock trigger and the interface reveal.
    pub reveal_delay_ms: f64,
    /// Front-facing greetings closer than this (horizontal px) to the sun
    /// center are drawn as silhouettes.
    pub silhouette_half_width: f32,
    /// Seed for every random intrinsic parameter in the scene.
    pub seed: u64,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            initial_zoom: 5.0,
            browse_zoom: 1.0,
            ease_rate: 0.02,
            snap_tolerance: 0.01,
            intro_threshold: 2.0,
            dust_max_zoom: 3.0,
            prompt_fade_start: 3.0,
            prompt_fade_span: 2.0,
            dust_count: 400,
            deep_star_count: 500,
            greeting_count: 8,
            ambient_count: 15,
            shooting_star_chance: 0.01,
            shooting_star_decay: 0.02,
            reveal_delay_ms: 1000.0,
            silhouette_half_width: 150.0,
            seed: 42,
        }
    }
}

impl GalaxyConfig {
    /// Parse a (possibly partial) JSON override.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(ConfigError::Parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_landing_page() {
        let c = GalaxyConfig::default();
        assert_eq!(c.initial_zoom, 5.0);
        assert_eq!(c.browse_zoom, 1.0);
        assert_eq!(c.ease_rate, 0.02);
        assert_eq!(c.dust_count, 400);
        assert_eq!(c.deep_star_count, 500);
        assert_eq!(c.reveal_delay_ms, 1000.0);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let c = GalaxyConfig::from_json(r#"{ "dust_count": 10, "seed": 7 }"#).unwrap();
        assert_eq!(c.dust_count, 10);
        assert_eq!(c.seed, 7);
        assert_eq!(c.deep_star_count, 500);
        assert_eq!(c.ease_rate, 0.02);
    }

    #[test]
    fn empty_object_is_default() {
        let c = GalaxyConfig::from_json("{}").unwrap();
        assert_eq!(c, GalaxyConfig::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(GalaxyConfig::from_json("{ dust_count: ").is_err());
    }
}
