//! State management modules for the catalog browser.
//!
//! This module contains state-only logic (no UI concerns):
//! - Catalog state (dataset, rendered view, load failure)
//! - Search state (query text, phone model suggestions)
//! - Loader indicator (minimum visible duration)
//! - Scroll state (offset, back-to-top)
//! - Toast state (transient notifications)
//! - Theme state (theme manager, current theme)
//! - Preferences (persisted settings)

mod catalog_view;
mod catalog_state;
mod search_state;
mod loader_indicator;
mod scroll_state;
mod toast_state;
mod theme_state;
mod preferences;

pub use catalog_view::{CatalogView, Placeholder};
pub use catalog_state::{CatalogSource, CatalogState};
pub use search_state::{PhoneModelsStatus, SearchState, MAX_SUGGESTIONS};
pub use loader_indicator::{LoaderIndicator, MINIMUM_VISIBLE};
pub use scroll_state::{ScrollState, BACK_TO_TOP_THRESHOLD};
pub use toast_state::{Toast, ToastKind, ToastState, TOAST_DURATION};
pub use theme_state::{ThemeState, DEFAULT_THEME};
pub use preferences::Preferences;
