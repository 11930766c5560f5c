pub mod traits;
pub mod row;
pub mod resource;
pub mod parser;
pub mod search;
pub mod card;
pub mod markup;
pub mod writer;
pub mod sample;
pub mod clipboard;
pub mod theme;

// Export traits
pub use traits::{CatalogReader, ClipboardSink, ResourceFetcher};

// Export data model
pub use row::{fields, Dataset, Row};

// Export resource loading
pub use resource::{
    fetch_bytes, fetch_text, DefaultFetcher, MemoryFetcher, ResourceError, ResourceLocation,
    DEFAULT_CATALOG_RESOURCE, DEFAULT_PHONE_MODELS_RESOURCE,
};

// Export CSV implementation
pub use parser::{
    parse_catalog, parse_catalog_str, parse_phone_models, read_phone_models, CsvCatalogReader,
};

// Export generated catalogs
pub use sample::{sample_phone_models, SampleCatalogReader, DEFAULT_SAMPLE_SEED};

// Export search and card generation
pub use search::{normalize_query, search, suggest_models};
pub use card::{split_image_urls, Card, InfoField, IMAGE_ALT_TEXT, MISSING_VALUE, UNNAMED_ITEM};
pub use markup::{card_html, catalog_page_html, escape_html, MarkupMode};

// Export writer
pub use writer::{write_phone_models, CatalogWriter};

// Export clipboard implementations
pub use clipboard::{RecordingClipboard, SystemClipboard};

// Export theme support
pub use theme::{Theme, ThemeColors, ThemeManager, hex_to_color32};
