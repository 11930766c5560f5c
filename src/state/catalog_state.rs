//! Catalog data and rendered view state.

use crate::state::CatalogView;
use rcatalog::{Dataset, ResourceLocation, Row};
use std::fmt;
use std::sync::Arc;

/// Text shown in place of the cards when the catalog cannot be loaded.
pub const LOAD_FAILURE_TEXT: &str = "Failed to load CLASSIFY.csv";

/// Where the current dataset came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Resource(ResourceLocation),
    Sample { seed: u64 },
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Resource(location) => write!(f, "{}", location),
            CatalogSource::Sample { seed } => write!(f, "Sample catalog | Seed: {}", seed),
        }
    }
}

/// State related to the loaded dataset and the view rendered from it.
///
/// Responsibilities:
/// - Owning the dataset (replaced wholesale, never edited)
/// - Owning the current view (full dataset or a search result)
/// - Remembering load failure for the catalog area
#[derive(Debug, Default)]
pub struct CatalogState {
    dataset: Dataset,
    view: CatalogView,
    source: Option<CatalogSource>,
    load_failed: bool,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a freshly loaded dataset and renders all of it.
    pub fn load_dataset(&mut self, dataset: Dataset, source: CatalogSource) {
        self.view = CatalogView::render(dataset.rows().to_vec());
        self.dataset = dataset;
        self.source = Some(source);
        self.load_failed = false;
    }

    /// Clears the dataset and shows the failure text instead of cards.
    pub fn set_load_failed(&mut self) {
        self.dataset = Dataset::default();
        self.view = CatalogView::default();
        self.load_failed = true;
    }

    /// Discards the dataset and the view, ahead of loading a new catalog.
    pub fn clear(&mut self) {
        self.dataset = Dataset::default();
        self.view = CatalogView::default();
        self.source = None;
        self.load_failed = false;
    }

    /// Replaces the view with placeholders for `rows`.
    pub fn render(&mut self, rows: Vec<Arc<Row>>) {
        self.view = CatalogView::render(rows);
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn view(&self) -> &CatalogView {
        &self.view
    }

    pub fn source(&self) -> Option<&CatalogSource> {
        self.source.as_ref()
    }

    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    /// Text the catalog area shows instead of cards, if any.
    pub fn failure_text(&self) -> Option<&'static str> {
        self.load_failed.then_some(LOAD_FAILURE_TEXT)
    }

    /// Resolves an image entry of a row to a loadable URI.
    ///
    /// Relative entries are resolved next to the catalog resource; the sample
    /// catalog only uses absolute URLs.
    pub fn resolve_image(&self, reference: &str) -> String {
        match &self.source {
            Some(CatalogSource::Resource(location)) => location.resolve_reference(reference),
            _ => reference.trim().to_string(),
        }
    }
}
