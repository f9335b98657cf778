use std::collections::HashMap;

use galaxy_engine::{ImageId, ImageRegistry};
use web_sys::HtmlImageElement;

/// Browser-side image elements for every interned asset.
///
/// Loading is fire-and-forget: the element fetches in the background and
/// the engine polls `is_ready` each frame, drawing a dot until it is.
#[derive(Default)]
pub struct ImageStore {
    images: HashMap<ImageId, HtmlImageElement>,
}

impl ImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start loading every image in `registry`. An image element that
    /// cannot be created is left out; that sprite stays a dot.
    pub fn load_all(&mut self, registry: &ImageRegistry) {
        for (id, path) in registry.iter() {
            match HtmlImageElement::new() {
                Ok(img) => {
                    img.set_src(path);
                    self.images.insert(id, img);
                }
                Err(e) => log::warn!("cannot create image for {path}: {e:?}"),
            }
        }
        log::info!("loading {} images", self.images.len());
    }

    pub fn get(&self, id: ImageId) -> Option<&HtmlImageElement> {
        self.images.get(&id)
    }

    /// Decoded and non-empty. A failed load never becomes ready.
    pub fn is_ready(&self, id: ImageId) -> bool {
        self.images
            .get(&id)
            .is_some_and(|img| img.complete() && img.natural_width() > 0)
    }
}
