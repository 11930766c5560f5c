//! Product Catalog Browser GUI Application
//!
//! An interactive browser for a product catalog CSV built on egui:
//! - Card list with virtual scrolling and lazily built cards
//! - Search by phone model with autocomplete from a model list
//! - Click-to-copy SKUs, back-to-top button and toasts
//! - HTML export of the current view
//! - Multiple themes with persistent preferences

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `domain/` - Viewport intersection for lazy filling
//! - `io/` - Background loading of the catalog and phone model list
//! - `state/` - Focused state components
//! - `ui/` - Panel rendering and interaction
//! - `utils/` - Formatting helpers

use eframe::egui;
use std::time::Instant;

mod utils;
mod domain;
mod io;
mod app;
mod ui;
mod state;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator, ThemeCoordinator, PREFERENCES_KEY};
use io::AsyncLoader;
use rcatalog::{ResourceLocation, SystemClipboard, DEFAULT_CATALOG_RESOURCE, DEFAULT_PHONE_MODELS_RESOURCE};
use state::{Preferences, ThemeState};
use ui::panel_manager::{PanelInteraction, PanelManager};

const APP_TITLE: &str = "Product Catalog";

fn print_help() {
    println!("Usage: catalog-gui [CSV_LOCATION] [PHONE_LIST_LOCATION]");
    println!();
    println!("Arguments:");
    println!("  CSV_LOCATION         Catalog CSV path or http(s) URL (default: {})", DEFAULT_CATALOG_RESOURCE);
    println!("  PHONE_LIST_LOCATION  Phone model list path or URL (default: {})", DEFAULT_PHONE_MODELS_RESOURCE);
    println!();
    println!("Locations ending in .br are Brotli-decompressed.");
    println!("Set RUST_LOG to control logging (default: info).");
}

/// Main application entry point that initializes and launches the catalog browser.
fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|arg| arg == "-h" || arg == "--help") {
        print_help();
        return Ok(());
    }

    let catalog_location = ResourceLocation::parse(
        args.first().map(String::as_str).unwrap_or(DEFAULT_CATALOG_RESOURCE),
    );
    let phone_models_location = ResourceLocation::parse(
        args.get(1).map(String::as_str).unwrap_or(DEFAULT_PHONE_MODELS_RESOURCE),
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_title(APP_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| {
            Ok(Box::new(CatalogBrowserApp::new(cc, catalog_location, phone_models_location)))
        }),
    )
}

/// The catalog browser application.
///
/// Delegates to coordinators:
/// - `ApplicationCoordinator` handles loading, searching, copying and export
/// - `ThemeCoordinator` handles theme persistence and application
/// - `PanelManager` handles UI panel layout and rendering
struct CatalogBrowserApp {
    /// Centralized application state
    state: AppState,
    /// Background loader for the catalog and phone model list
    loader: AsyncLoader,
    /// System clipboard for SKU copies
    clipboard: SystemClipboard,
    /// Startup loads are issued on the first frame, once a context exists
    pending_initial_load: bool,
}

impl CatalogBrowserApp {
    /// Creates the application with theme and preferences loaded from persistent storage.
    fn new(
        cc: &eframe::CreationContext,
        catalog_location: ResourceLocation,
        phone_models_location: ResourceLocation,
    ) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let theme = ThemeState::with_theme(ThemeCoordinator::load_theme_from_storage(cc.storage));
        let preferences: Preferences = SettingsCoordinator::load_setting(cc.storage, PREFERENCES_KEY);

        Self {
            state: AppState::with_settings(catalog_location, phone_models_location, theme, preferences),
            loader: AsyncLoader::new(),
            clipboard: SystemClipboard::new(),
            pending_initial_load: true,
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context, now: Instant) {
        match interaction {
            PanelInteraction::SearchRequested => {
                ApplicationCoordinator::perform_search(&mut self.state);
            }
            PanelInteraction::SuggestionSelected(model) => {
                ApplicationCoordinator::select_suggestion(&mut self.state, &model);
            }
            PanelInteraction::OpenCatalogRequested(path) => {
                let location = ResourceLocation::Path(path);
                ApplicationCoordinator::open_catalog(&mut self.state, &mut self.loader, location, ctx, now);
            }
            PanelInteraction::OpenSampleRequested => {
                ApplicationCoordinator::open_sample_catalog(&mut self.state, &mut self.loader, now);
            }
            PanelInteraction::ExportHtmlRequested(path) => {
                ApplicationCoordinator::export_html_with_feedback(&mut self.state, &path, now);
            }
            PanelInteraction::CopySkuRequested(sku) => {
                ApplicationCoordinator::copy_sku(&mut self.state, &mut self.clipboard, &sku, now);
            }
        }
    }
}

impl eframe::App for CatalogBrowserApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        SettingsCoordinator::save_setting(storage, PREFERENCES_KEY, &self.state.preferences);
    }

    /// Main update loop:
    /// 1. Issue the startup loads on the first frame
    /// 2. Apply completed background loads
    /// 3. Apply theme
    /// 4. Render all panels via PanelManager
    /// 5. Handle panel interactions
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        if std::mem::take(&mut self.pending_initial_load) {
            ApplicationCoordinator::start_initial_load(&mut self.state, &mut self.loader, ctx, now);
        }

        ApplicationCoordinator::check_loading_completion(&mut self.state, &mut self.loader, now);

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state, &self.loader, now) {
            self.handle_panel_interaction(interaction, ctx, now);
        }
    }
}
