use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::api::error::AssetError;
use crate::components::sector::SectorId;

/// Image assets referenced by the scene. Loaded from JSON at runtime or
/// taken from `Default`, which lists the landing page's own icons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetManifest {
    /// Icons for the greeting ring, cycled if there are fewer than stars.
    pub greetings: Vec<String>,
    /// Icons for ambient browse-mode stars. Empty means no ambient stars.
    pub ambient: Vec<String>,
    /// Per-sector icon overrides keyed by sector token (`"bio"`, ...).
    pub sector_icons: HashMap<String, String>,
}

impl Default for AssetManifest {
    fn default() -> Self {
        let greetings = [
            "arabic", "chinese", "hindi", "namaskaram", "spanish", "telugu", "french", "japanese",
        ]
        .iter()
        .map(|name| format!("assets/icons/greetings/{name}.svg"))
        .collect();
        let ambient = ["c", "cplusplus", "css", "html5", "github", "bootstrap"]
            .iter()
            .map(|name| format!("assets/icons/tech/{name}.png"))
            .collect();
        Self {
            greetings,
            ambient,
            sector_icons: HashMap::new(),
        }
    }
}

impl AssetManifest {
    /// Parse a manifest from a JSON string. Sector override keys must name
    /// real sectors.
    pub fn from_json(json: &str) -> Result<Self, AssetError> {
        let manifest: Self = serde_json::from_str(json).map_err(AssetError::Parse)?;
        if let Some(bad) = manifest
            .sector_icons
            .keys()
            .find(|key| key.parse::<SectorId>().is_err())
        {
            return Err(AssetError::UnknownSector(bad.clone()));
        }
        Ok(manifest)
    }

    /// Icon path for a sector pin: override if present, else the built-in one.
    pub fn icon_for(&self, sector: SectorId) -> &str {
        self.sector_icons
            .get(sector.as_str())
            .map(String::as_str)
            .unwrap_or(sector.descriptor().icon)
    }
}
