//! Search box and phone model suggestion state.

use rcatalog::suggest_models;

/// Maximum number of autocomplete entries shown under the search box.
pub const MAX_SUGGESTIONS: usize = 8;

/// Availability of the phone model list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PhoneModelsStatus {
    #[default]
    Pending,
    Loaded,
    Unavailable,
}

/// State related to searching.
///
/// Responsibilities:
/// - Holding the live search-box text
/// - Remembering the query the current view was filtered with
/// - Holding the phone model list used for suggestions
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    query: String,
    applied_query: Option<String>,
    phone_models: Vec<String>,
    phone_models_status: PhoneModelsStatus,
    suggestions_open: bool,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Queries =====

    pub fn query(&self) -> &str {
        &self.query
    }

    /// The query the current view was filtered by, if a search ran.
    pub fn applied_query(&self) -> Option<&str> {
        self.applied_query.as_deref()
    }

    pub fn phone_models(&self) -> &[String] {
        &self.phone_models
    }

    pub fn phone_models_status(&self) -> &PhoneModelsStatus {
        &self.phone_models_status
    }

    /// Suggestions for the current text, empty while the list is closed.
    pub fn suggestions(&self) -> Vec<&str> {
        if !self.suggestions_open {
            return Vec::new();
        }
        suggest_models(&self.phone_models, &self.query, MAX_SUGGESTIONS)
    }

    // ===== Mutations =====

    /// Mutable access to the search-box text for the text edit widget.
    pub fn query_mut(&mut self) -> &mut String {
        &mut self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn open_suggestions(&mut self) {
        self.suggestions_open = true;
    }

    pub fn close_suggestions(&mut self) {
        self.suggestions_open = false;
    }

    /// Records that the view now shows the result for `query`.
    pub fn mark_applied(&mut self, query: &str) {
        self.applied_query = Some(query.to_string());
        self.suggestions_open = false;
    }

    /// Forgets the applied query (a new dataset shows unfiltered).
    pub fn clear_applied(&mut self) {
        self.applied_query = None;
    }

    pub fn set_phone_models(&mut self, models: Vec<String>) {
        self.phone_models = models;
        self.phone_models_status = PhoneModelsStatus::Loaded;
    }

    pub fn set_phone_models_unavailable(&mut self) {
        self.phone_models.clear();
        self.phone_models_status = PhoneModelsStatus::Unavailable;
    }
}
