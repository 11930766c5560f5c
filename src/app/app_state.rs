//! Centralized application state for the catalog browser.
//!
//! Composes focused state components that each manage one aspect of the
//! application, so invariants stay local and the borrow checker can hand
//! out disjoint parts of the state.

use crate::state::{
    CatalogState, LoaderIndicator, Preferences, ScrollState, SearchState, ThemeState, ToastState,
};
use rcatalog::{ResourceLocation, DEFAULT_CATALOG_RESOURCE, DEFAULT_PHONE_MODELS_RESOURCE};

/// Main application state composed of focused state components.
pub struct AppState {
    // ===== Focused State Components =====
    /// Dataset and rendered view
    pub catalog: CatalogState,

    /// Search text and phone model suggestions
    pub search: SearchState,

    /// Loading indicator
    pub loader_indicator: LoaderIndicator,

    /// Catalog scroll position
    pub scroll: ScrollState,

    /// Transient notifications
    pub toasts: ToastState,

    /// Theme and styling state
    pub theme: ThemeState,

    /// Persisted user preferences
    pub preferences: Preferences,

    // ===== Top-Level State =====
    /// Catalog location used for the initial load
    pub catalog_location: ResourceLocation,

    /// Phone model list location used for the initial load
    pub phone_models_location: ResourceLocation,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates application state with the default resource locations.
    pub fn new() -> Self {
        Self::with_settings(
            ResourceLocation::parse(DEFAULT_CATALOG_RESOURCE),
            ResourceLocation::parse(DEFAULT_PHONE_MODELS_RESOURCE),
            ThemeState::new(),
            Preferences::default(),
        )
    }

    /// Creates application state from command-line locations and stored settings.
    pub fn with_settings(
        catalog_location: ResourceLocation,
        phone_models_location: ResourceLocation,
        theme: ThemeState,
        preferences: Preferences,
    ) -> Self {
        Self {
            catalog: CatalogState::new(),
            search: SearchState::new(),
            loader_indicator: LoaderIndicator::new(),
            scroll: ScrollState::new(),
            toasts: ToastState::new(),
            theme,
            preferences,
            catalog_location,
            phone_models_location,
        }
    }

    // ===== High-Level Coordination Methods =====

    /// Resets catalog-related state ahead of loading a new catalog.
    pub fn reset_catalog_state(&mut self) {
        self.catalog.clear();
        self.search.clear_applied();
        self.search.close_suggestions();
        self.scroll.reset();
    }
}
