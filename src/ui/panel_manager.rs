//! Panel orchestration and layout management.
//!
//! Coordinates all UI panels (header, catalog, status bar) and the floating
//! overlays, and funnels their interactions to the application.

use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::ui::{catalog_panel, header, overlays, status_bar};
use std::path::PathBuf;
use std::time::Instant;

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// User submitted a search
    SearchRequested,
    /// User picked a phone model suggestion
    SuggestionSelected(String),
    /// User requested to open a catalog file
    OpenCatalogRequested(PathBuf),
    /// User requested the sample catalog
    OpenSampleRequested,
    /// User requested an HTML export of the current view
    ExportHtmlRequested(PathBuf),
    /// A card's SKU should be copied to the clipboard
    CopySkuRequested(String),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        loader: &AsyncLoader,
        now: Instant,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        let theme_colors = state.theme.colors().clone();

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::SearchRequested => PanelInteraction::SearchRequested,
                    header::HeaderInteraction::SuggestionSelected(model) => {
                        PanelInteraction::SuggestionSelected(model)
                    }
                    header::HeaderInteraction::OpenCatalogRequested(path) => {
                        PanelInteraction::OpenCatalogRequested(path)
                    }
                    header::HeaderInteraction::OpenSampleRequested => PanelInteraction::OpenSampleRequested,
                    header::HeaderInteraction::ExportHtmlRequested(path) => {
                        PanelInteraction::ExportHtmlRequested(path)
                    }
                });
            }
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state, &theme_colors, loader.is_loading());
        });

        // Catalog fills the remaining space
        let catalog_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(8))
            .fill(theme_colors.extreme_background);

        egui::CentralPanel::default()
            .frame(catalog_frame)
            .show(ctx, |ui| {
                if let Some(catalog_panel::CatalogPanelInteraction::CopySku(sku)) =
                    catalog_panel::render_catalog_panel(ui, state, &theme_colors)
                {
                    interaction = Some(PanelInteraction::CopySkuRequested(sku));
                }
            });

        overlays::render_loading_indicator(ctx, state, &theme_colors, now);
        overlays::render_back_to_top(ctx, state);
        overlays::render_toasts(ctx, state, &theme_colors, now);

        interaction
    }
}
