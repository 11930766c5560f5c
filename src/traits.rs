use crate::resource::{ResourceError, ResourceLocation};
use crate::row::Dataset;

/// Trait for fetching the raw bytes of a resource.
/// Fetchers must be shareable with background loading threads.
pub trait ResourceFetcher: Send + Sync {
    fn fetch(&self, location: &ResourceLocation) -> Result<Vec<u8>, ResourceError>;
}

impl<T: ResourceFetcher + ?Sized> ResourceFetcher for std::sync::Arc<T> {
    fn fetch(&self, location: &ResourceLocation) -> Result<Vec<u8>, ResourceError> {
        (**self).fetch(location)
    }
}

/// Trait for producing a catalog dataset
pub trait CatalogReader {
    /// Loads and parses the catalog found at `location`
    fn read(&self, location: &ResourceLocation) -> anyhow::Result<Dataset>;
}

/// Trait for the system clipboard (or a stand-in for it in tests)
pub trait ClipboardSink {
    /// Replaces the clipboard contents with `text`
    fn set_text(&mut self, text: &str) -> anyhow::Result<()>;
}
