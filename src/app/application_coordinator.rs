//! Application-level coordination and workflow management.
//!
//! Handles catalog loading, searching, clipboard copies and exports, keeping
//! the individual state components consistent with each other.

use crate::app::AppState;
use crate::io::{AsyncLoader, LoadResult};
use crate::state::{CatalogSource, ToastKind};
use anyhow::{Context, Result};
use rcatalog::{catalog_page_html, sample_phone_models, search, Card, ClipboardSink, ResourceLocation, SampleCatalogReader};
use std::path::Path;
use std::time::Instant;

/// Title of exported catalog pages.
pub const EXPORT_PAGE_TITLE: &str = "Product Catalog";

/// Coordinates application-level operations and workflows.
///
/// This struct is responsible for:
/// - Starting catalog and phone model loads
/// - Applying load results to application state
/// - Running searches and re-rendering the view
/// - Clipboard copies and HTML export
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Starts both startup loads: the catalog and the phone model list.
    ///
    /// The loads are independent; either may finish first.
    pub fn start_initial_load(state: &mut AppState, loader: &mut AsyncLoader, ctx: &egui::Context, now: Instant) {
        loader.start_phone_models_load(state.phone_models_location.clone(), ctx);
        let location = state.catalog_location.clone();
        Self::open_catalog(state, loader, location, ctx, now);
    }

    /// Initiates asynchronous loading of a catalog.
    ///
    /// Clears the previous view immediately and shows the loading indicator.
    pub fn open_catalog(
        state: &mut AppState,
        loader: &mut AsyncLoader,
        location: ResourceLocation,
        ctx: &egui::Context,
        now: Instant,
    ) {
        state.reset_catalog_state();
        state.catalog_location = location.clone();
        state.loader_indicator.show(now);
        loader.start_catalog_load(location, ctx);
    }

    /// Replaces the catalog with a generated sample, synchronously.
    ///
    /// Any catalog load still in flight is superseded and its result dropped.
    pub fn open_sample_catalog(state: &mut AppState, loader: &mut AsyncLoader, now: Instant) {
        loader.supersede_catalog_load();
        state.reset_catalog_state();
        state.loader_indicator.show(now);

        let reader = SampleCatalogReader::new();
        let dataset = reader.generate();
        log::info!("Generated sample catalog with {} rows", dataset.len());
        state.catalog.load_dataset(dataset, CatalogSource::Sample { seed: reader.seed() });

        if state.search.phone_models().is_empty() {
            state.search.set_phone_models(sample_phone_models());
        }
        state.loader_indicator.hide_after_minimum_delay(now);
    }

    /// Checks for loading completion and applies results to application state.
    ///
    /// Called once per frame in the update loop. Returns true if at least one
    /// load completed.
    pub fn check_loading_completion(state: &mut AppState, loader: &mut AsyncLoader, now: Instant) -> bool {
        let mut completed = false;
        loop {
            match loader.check_completion() {
                LoadResult::None => break,
                result => {
                    Self::apply_load_result(state, result, now);
                    completed = true;
                }
            }
        }
        completed
    }

    /// Applies one completed load to the state.
    pub fn apply_load_result(state: &mut AppState, result: LoadResult, now: Instant) {
        match result {
            LoadResult::Catalog { location, result: Ok(dataset) } => {
                log::info!("Loaded {} catalog rows from {}", dataset.len(), location);
                state.toasts.push(ToastKind::Info, format!("Loaded {} products", dataset.len()), now);
                state.catalog.load_dataset(dataset, CatalogSource::Resource(location));
                state.search.clear_applied();
                state.loader_indicator.hide_after_minimum_delay(now);
            }
            LoadResult::Catalog { location, result: Err(message) } => {
                log::error!("Failed to load catalog from {}: {}", location, message);
                state.catalog.set_load_failed();
                state.loader_indicator.hide_after_minimum_delay(now);
            }
            LoadResult::PhoneModels(Ok(models)) => {
                log::info!("Loaded {} phone models", models.len());
                state.search.set_phone_models(models);
            }
            LoadResult::PhoneModels(Err(message)) => {
                log::warn!("Phone models unavailable: {}", message);
                state.search.set_phone_models_unavailable();
                state.toasts.push(ToastKind::Error, "Phone models unavailable", now);
            }
            LoadResult::None => {}
        }
    }

    /// Filters the dataset by the search-box text and re-renders the view.
    pub fn perform_search(state: &mut AppState) {
        let query = state.search.query().to_string();
        let rows = search(state.catalog.dataset().rows(), &query);
        log::debug!("Search '{}' matched {} rows", query, rows.len());

        state.catalog.render(rows);
        state.search.mark_applied(&query);
        state.scroll.reset();
    }

    /// Fills the search box with a suggested model and searches for it.
    pub fn select_suggestion(state: &mut AppState, model: &str) {
        state.search.set_query(model);
        Self::perform_search(state);
    }

    /// Copies a card's SKU to the clipboard and reports the outcome.
    pub fn copy_sku(state: &mut AppState, clipboard: &mut dyn ClipboardSink, sku: &str, now: Instant) {
        match clipboard.set_text(sku) {
            Ok(()) => {
                log::info!("Copied SKU '{}' to clipboard", sku);
                state.toasts.push(ToastKind::Success, format!("Copied SKU: {}", sku), now);
            }
            Err(err) => {
                log::error!("Failed to copy SKU '{}': {:#}", sku, err);
                state.toasts.push(ToastKind::Error, "Failed to copy SKU", now);
            }
        }
    }

    /// Writes the current view as a standalone HTML page.
    ///
    /// Returns the number of cards written.
    pub fn export_html(state: &AppState, path: &Path) -> Result<usize> {
        let cards: Vec<Card> = state
            .catalog
            .view()
            .rows()
            .iter()
            .map(|row| Card::from_row(row))
            .collect();

        let html = catalog_page_html(
            EXPORT_PAGE_TITLE,
            &cards,
            state.preferences.markup_mode,
            |reference| state.catalog.resolve_image(reference),
        );
        std::fs::write(path, html)
            .with_context(|| format!("Failed to write HTML export: {}", path.display()))?;

        log::info!("Exported {} cards to {}", cards.len(), path.display());
        Ok(cards.len())
    }

    /// Runs an export and reports the outcome as a toast.
    pub fn export_html_with_feedback(state: &mut AppState, path: &Path, now: Instant) {
        match Self::export_html(state, path) {
            Ok(count) => state.toasts.push(
                ToastKind::Success,
                format!("Exported {} cards to {}", count, path.display()),
                now,
            ),
            Err(err) => {
                log::error!("{:#}", err);
                state.toasts.push(ToastKind::Error, "HTML export failed", now);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{PhoneModelsStatus, MINIMUM_VISIBLE};
    use rcatalog::{parse_catalog_str, MarkupMode, MemoryFetcher, RecordingClipboard, ResourceFetcher, DEFAULT_SAMPLE_SEED};
    use std::sync::Arc;
    use std::time::Duration;

    const SCENARIO_CSV: &str = "PRODUCT_TITLE,PRODUCT_SKU,PHONE\nWidget,SKU1,iPhone 12\n,,\n";

    fn loader() -> AsyncLoader {
        let fetcher: Arc<dyn ResourceFetcher> = Arc::new(
            MemoryFetcher::new()
                .with_resource("CLASSIFY.csv", SCENARIO_CSV)
                .with_resource("phone_model_dict.txt", "iPhone 12\nPixel 7\n"),
        );
        AsyncLoader::with_fetcher(fetcher)
    }

    /// Polls until both startup loads have been applied.
    fn wait_for_loads(state: &mut AppState, loader: &mut AsyncLoader, now: Instant) {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            ApplicationCoordinator::check_loading_completion(state, loader, now);
            let catalog_done = state.catalog.load_failed() || state.catalog.source().is_some();
            let models_done = state.search.phone_models_status() != &PhoneModelsStatus::Pending;
            if (catalog_done && models_done) || Instant::now() > deadline {
                return;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    fn state_with(csv: &str) -> AppState {
        let mut state = AppState::new();
        state.catalog.load_dataset(parse_catalog_str(csv).unwrap(), CatalogSource::Sample { seed: 1 });
        state
    }

    #[test]
    fn test_initial_load_scenario() {
        let ctx = egui::Context::default();
        let mut state = AppState::new();
        let mut loader = loader();
        let start = Instant::now();

        ApplicationCoordinator::start_initial_load(&mut state, &mut loader, &ctx, start);
        assert!(state.loader_indicator.is_visible(start));

        wait_for_loads(&mut state, &mut loader, start + Duration::from_millis(10));

        assert_eq!(state.catalog.dataset().len(), 1);
        assert_eq!(state.catalog.view().len(), 1);
        assert_eq!(state.search.phone_models(), &["iPhone 12", "Pixel 7"]);
        assert!(state.loader_indicator.is_visible(start + Duration::from_millis(10)));
        assert!(!state.loader_indicator.is_visible(start + MINIMUM_VISIBLE));

        state.search.set_query("iphone");
        ApplicationCoordinator::perform_search(&mut state);
        assert_eq!(state.catalog.view().fill(0).map(|c| c.title.as_str()), Some("Widget"));
    }

    #[test]
    fn test_catalog_failure_shows_text_and_hides_loader() {
        let ctx = egui::Context::default();
        let mut state = AppState::new();
        state.catalog_location = ResourceLocation::parse("missing.csv");
        let mut loader = loader();
        let start = Instant::now();

        ApplicationCoordinator::start_initial_load(&mut state, &mut loader, &ctx, start);
        wait_for_loads(&mut state, &mut loader, start + Duration::from_millis(20));

        assert!(state.catalog.load_failed());
        assert_eq!(state.catalog.failure_text(), Some("Failed to load CLASSIFY.csv"));
        assert!(state.catalog.view().is_empty());
        assert!(state.loader_indicator.is_visible(start + Duration::from_millis(499)));
        assert!(!state.loader_indicator.is_visible(start + MINIMUM_VISIBLE));
    }

    #[test]
    fn test_phone_models_failure_is_reported() {
        let ctx = egui::Context::default();
        let mut state = AppState::new();
        state.phone_models_location = ResourceLocation::parse("missing.txt");
        let mut loader = loader();
        let now = Instant::now();

        ApplicationCoordinator::start_initial_load(&mut state, &mut loader, &ctx, now);
        wait_for_loads(&mut state, &mut loader, now);

        assert_eq!(state.search.phone_models_status(), &PhoneModelsStatus::Unavailable);
        assert_eq!(state.catalog.view().len(), 1);
        assert!(state
            .toasts
            .iter()
            .any(|t| t.kind == ToastKind::Error && t.message == "Phone models unavailable"));
    }

    #[test]
    fn test_search_is_idempotent() {
        let mut state = state_with("PRODUCT_TITLE,PHONE\nA,iPhone 12\nB,Pixel 7\nC,\nD,iPhone 13\n");
        state.search.set_query("  IPHONE ");
        ApplicationCoordinator::perform_search(&mut state);
        let first: Vec<_> = state.catalog.view().rows().to_vec();
        ApplicationCoordinator::perform_search(&mut state);
        let second: Vec<_> = state.catalog.view().rows().to_vec();

        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
        assert_eq!(state.search.applied_query(), Some("  IPHONE "));
    }

    #[test]
    fn test_empty_query_excludes_rows_without_phone() {
        let mut state = state_with("PRODUCT_TITLE,PHONE\nA,iPhone 12\nB,\n");
        state.search.set_query("");
        ApplicationCoordinator::perform_search(&mut state);
        assert_eq!(state.catalog.view().len(), 1);
        assert_eq!(state.catalog.dataset().len(), 2);
    }

    #[test]
    fn test_search_discards_filled_cards() {
        let mut state = state_with("PRODUCT_TITLE,PHONE\nA,iPhone 12\nB,Pixel 7\n");
        state.catalog.view().fill(0);
        state.catalog.view().fill(1);

        state.scroll.observe(4000.0);
        state.search.set_query("pixel");
        ApplicationCoordinator::perform_search(&mut state);
        assert_eq!(state.catalog.view().filled_count(), 0);
        assert_eq!(state.scroll.offset(), 0.0);
        assert!(state.scroll.take_jump_to_top());
        assert!(!state.scroll.take_scroll_to_top());
        assert_eq!(state.catalog.view().fill(0).map(|c| c.title.as_str()), Some("B"));
    }

    #[test]
    fn test_select_suggestion_runs_search() {
        let mut state = state_with("PRODUCT_TITLE,PHONE\nA,iPhone 12\nB,Pixel 7\n");
        ApplicationCoordinator::select_suggestion(&mut state, "Pixel 7");
        assert_eq!(state.search.query(), "Pixel 7");
        assert_eq!(state.catalog.view().len(), 1);
    }

    #[test]
    fn test_copy_sku_writes_exact_value() {
        let mut state = AppState::new();
        let mut clipboard = RecordingClipboard::default();
        let now = Instant::now();

        ApplicationCoordinator::copy_sku(&mut state, &mut clipboard, "SKU-001", now);
        ApplicationCoordinator::copy_sku(&mut state, &mut clipboard, "", now);
        assert_eq!(clipboard.writes, vec!["SKU-001".to_string(), String::new()]);
        assert_eq!(state.toasts.iter().last().map(|t| t.kind), Some(ToastKind::Success));
    }

    #[test]
    fn test_copy_sku_failure_is_reported() {
        let mut state = AppState::new();
        let mut clipboard = RecordingClipboard { fail: true, ..Default::default() };

        ApplicationCoordinator::copy_sku(&mut state, &mut clipboard, "SKU-001", Instant::now());
        assert!(clipboard.writes.is_empty());
        assert_eq!(state.toasts.iter().last().map(|t| t.kind), Some(ToastKind::Error));
    }

    #[test]
    fn test_sample_catalog_supersedes_pending_load() {
        let ctx = egui::Context::default();
        let mut state = AppState::new();
        let mut loader = loader();
        let now = Instant::now();

        ApplicationCoordinator::open_catalog(&mut state, &mut loader, ResourceLocation::parse("CLASSIFY.csv"), &ctx, now);
        ApplicationCoordinator::open_sample_catalog(&mut state, &mut loader, now);
        let sample_len = state.catalog.dataset().len();

        std::thread::sleep(Duration::from_millis(200));
        ApplicationCoordinator::check_loading_completion(&mut state, &mut loader, now);
        assert_eq!(
            state.catalog.source(),
            Some(&CatalogSource::Sample { seed: DEFAULT_SAMPLE_SEED })
        );
        assert_eq!(state.catalog.dataset().len(), sample_len);
        assert!(!state.search.phone_models().is_empty());
    }

    #[test]
    fn test_export_html_escapes_by_default() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("catalog.html");
        let mut state = state_with("PRODUCT_TITLE,PHONE,IMAGES\n<b>Bold</b>,iPhone 12,a.jpg\nPlain,Pixel 7,\n");

        assert_eq!(ApplicationCoordinator::export_html(&state, &path)?, 2);
        let html = std::fs::read_to_string(&path)?;
        assert!(html.contains("&lt;b&gt;Bold&lt;/b&gt;"));
        assert!(html.contains("alt=\"Item Image\""));

        state.preferences.markup_mode = MarkupMode::Raw;
        ApplicationCoordinator::export_html(&state, &path)?;
        let html = std::fs::read_to_string(&path)?;
        assert!(html.contains("<b>Bold</b>"));
        Ok(())
    }
}
