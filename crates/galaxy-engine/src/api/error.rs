//! Error types. None of these ever escape a frame: the compositor downgrades
//! draw failures to logged no-ops, and the bridge falls back to defaults on
//! bad configuration.

use crate::api::types::ImageId;

/// Failure of a single drawing primitive.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SurfaceError {
    /// The image has not finished loading (or never will).
    #[error("image {0:?} is not ready")]
    ImageNotReady(ImageId),

    /// The image id is not known to the surface.
    #[error("image {0:?} is not registered with the surface")]
    UnknownImage(ImageId),

    /// The backend rejected the call (e.g. a canvas exception).
    #[error("draw call failed: {0}")]
    Backend(String),
}

/// Failure to parse an engine configuration override.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse galaxy config: {0}")]
    Parse(#[source] serde_json::Error),
}

/// Failure to parse an asset manifest.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("failed to parse asset manifest: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("unknown sector `{0}` in asset manifest")]
    UnknownSector(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_error_messages_name_the_image() {
        let err = SurfaceError::ImageNotReady(ImageId(3));
        assert_eq!(err.to_string(), "image ImageId(3) is not ready");
    }

    #[test]
    fn config_error_wraps_json_error() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = ConfigError::Parse(json_err);
        assert!(err.to_string().starts_with("failed to parse galaxy config"));
    }
}
