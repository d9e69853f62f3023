//! Registry mapping file extensions to loaders.

use std::path::Path;

use crate::{CsvLoader, JsonLoader, Loader};

/// Registry of format loaders.
///
/// Loaders are consulted in registration order; the first whose
/// [`Loader::identify`] accepts the path wins. Unknown and missing
/// extensions fall back to the first-registered loader, which is CSV in
/// the standard setup.
pub struct LoaderRegistry {
    loaders: Vec<Box<dyn Loader>>,
}

impl LoaderRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            loaders: Vec::new(),
        }
    }

    /// The standard setup: CSV (the default format) and JSON.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(CsvLoader);
        registry.register(JsonLoader);
        registry
    }

    /// Register a loader.
    pub fn register(&mut self, loader: impl Loader + 'static) {
        self.loaders.push(Box::new(loader));
    }

    /// Pick the loader for a path by file extension.
    ///
    /// Falls back to the default loader, with a warning, when no
    /// registered loader recognizes the extension. Returns `None` only
    /// for an empty registry.
    pub fn detect(&self, path: &Path) -> Option<&dyn Loader> {
        if let Some(loader) = self.loaders.iter().find(|l| l.identify(path)) {
            return Some(loader.as_ref());
        }
        let fallback = self.loaders.first()?;
        tracing::warn!(
            path = %path.display(),
            "unknown file extension, defaulting to {}",
            fallback.name()
        );
        Some(fallback.as_ref())
    }
}

impl Default for LoaderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
