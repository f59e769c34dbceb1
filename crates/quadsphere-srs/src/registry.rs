//! Named registry of spatial references.
//!
//! References are constructed exactly once, when registered, and handed
//! out as shared immutable instances. Registration is the explicit
//! one-time initialization step; there is no late or privileged
//! re-initialization path.

use std::collections::HashMap;
use std::sync::Arc;

use crate::{CubeSrs, GeographicSrs, PlateCarreeSrs, RegistryError, SpatialReference};

/// Registry of the spatial references known to a tiling session.
pub struct SrsRegistry {
    entries: Vec<Arc<dyn SpatialReference>>,
    name_index: HashMap<String, usize>,
}

impl SrsRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            name_index: HashMap::new(),
        }
    }

    /// Create a registry with the built-in references registered:
    /// "wgs84", "plate-carree", and "unified-cube".
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        // The built-in names are distinct; registration cannot fail.
        let _ = registry.register(Arc::new(GeographicSrs));
        let _ = registry.register(Arc::new(PlateCarreeSrs));
        let _ = registry.register(Arc::new(CubeSrs));
        registry
    }

    /// Register a reference under its own name. Returns its index.
    ///
    /// # Errors
    ///
    /// Returns an error if a reference with the same name is already
    /// registered; the existing instance stays in place.
    pub fn register(
        &mut self,
        srs: Arc<dyn SpatialReference>,
    ) -> Result<usize, RegistryError> {
        let name = srs.name().to_string();
        if self.name_index.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }
        let index = self.entries.len();
        self.name_index.insert(name, index);
        self.entries.push(srs);
        Ok(index)
    }

    /// Look up a reference by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<dyn SpatialReference>> {
        self.name_index
            .get(name)
            .map(|&index| Arc::clone(&self.entries[index]))
    }

    /// Look up a reference by registration index.
    #[must_use]
    pub fn get_by_index(&self, index: usize) -> Option<Arc<dyn SpatialReference>> {
        self.entries.get(index).map(Arc::clone)
    }

    /// Number of registered references.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the registered references.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn SpatialReference>> {
        self.entries.iter()
    }
}

impl Default for SrsRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SrsKind;

    #[test]
    fn test_defaults_are_registered() {
        let registry = SrsRegistry::with_defaults();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.get("wgs84").unwrap().kind(), SrsKind::Geographic);
        assert_eq!(registry.get("plate-carree").unwrap().kind(), SrsKind::Projected);
        assert_eq!(registry.get("unified-cube").unwrap().kind(), SrsKind::Cube);
        assert!(registry.get("mercator").is_none());
    }

    #[test]
    fn test_lookup_returns_shared_instance() {
        let registry = SrsRegistry::with_defaults();
        let a = registry.get("unified-cube").unwrap();
        let b = registry.get("unified-cube").unwrap();
        assert!(Arc::ptr_eq(&a, &b), "lookups must share one instance");
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = SrsRegistry::with_defaults();
        let result = registry.register(Arc::new(CubeSrs));
        assert_eq!(
            result,
            Err(RegistryError::DuplicateName("unified-cube".to_string()))
        );
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_empty_registry() {
        let registry = SrsRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.iter().count(), 0);
    }

    #[test]
    fn test_get_by_index() {
        let registry = SrsRegistry::with_defaults();
        assert_eq!(registry.get_by_index(0).unwrap().name(), "wgs84");
        assert!(registry.get_by_index(9).is_none());
    }
}
