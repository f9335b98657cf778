use std::collections::HashMap;

use crate::api::types::ImageId;

/// Interns asset paths into stable `ImageId`s.
/// The same path always maps to the same id; ids are dense from zero.
pub struct ImageRegistry {
    paths: Vec<String>,
    lookup: HashMap<String, ImageId>,
}

impl ImageRegistry {
    pub fn new() -> Self {
        Self {
            paths: Vec::new(),
            lookup: HashMap::new(),
        }
    }

    /// Return the id for `path`, registering it on first sight.
    pub fn intern(&mut self, path: &str) -> ImageId {
        if let Some(id) = self.lookup.get(path) {
            return *id;
        }
        let id = ImageId(self.paths.len() as u32);
        self.paths.push(path.to_owned());
        self.lookup.insert(path.to_owned(), id);
        id
    }

    /// Look up a path by id. Returns None for ids this registry never issued.
    pub fn path(&self, id: ImageId) -> Option<&str> {
        self.paths.get(id.0 as usize).map(String::as_str)
    }

    /// All registered images, in id order.
    pub fn iter(&self) -> impl Iterator<Item = (ImageId, &str)> {
        self.paths
            .iter()
            .enumerate()
            .map(|(i, p)| (ImageId(i as u32), p.as_str()))
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl Default for ImageRegistry {
    fn default() -> Self {
        Self::new()
    }
}
