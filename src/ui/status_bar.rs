//! Status bar UI rendering
//!
//! Handles the bottom status bar: memory usage, catalog source and counts,
//! the active filter and phone model availability.

use eframe::egui;
use egui::RichText;
use crate::app::AppState;
use crate::state::PhoneModelsStatus;
use crate::utils::{format_count, format_memory_mb, get_current_memory_mb};
use rcatalog::ThemeColors;

/// Renders the status panel at the bottom of the window.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
/// * `loading` - Whether a catalog load is still in flight
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState, theme_colors: &ThemeColors, loading: bool) {
    ui.horizontal(|ui| {
        // Always show memory usage first
        let memory_text = format_memory_mb(get_current_memory_mb());
        ui.label(RichText::new(&memory_text).strong());
        ui.label(RichText::new("|").strong());

        if loading {
            ui.label(RichText::new(format!("Loading {}", state.catalog_location)).strong());
        } else if state.catalog.load_failed() {
            ui.label(RichText::new(format!("Catalog unavailable: {}", state.catalog_location))
                .strong()
                .color(theme_colors.error));
        } else if let Some(source) = state.catalog.source() {
            ui.label(RichText::new(format!(
                "{} | Showing {} of {} products",
                source,
                format_count(state.catalog.view().len()),
                format_count(state.catalog.dataset().len()),
            )).strong());

            if let Some(query) = state.search.applied_query() {
                ui.label(RichText::new("|").strong());
                ui.label(RichText::new(format!("Filter: \"{}\"", query.trim()))
                    .strong()
                    .color(theme_colors.accent));
            }
        } else {
            ui.label(RichText::new("No catalog loaded").strong());
        }

        ui.label(RichText::new("|").strong());
        match state.search.phone_models_status() {
            PhoneModelsStatus::Pending => {
                ui.label("Phone models loading");
            }
            PhoneModelsStatus::Loaded => {
                ui.label(format!("{} phone models", format_count(state.search.phone_models().len())));
            }
            PhoneModelsStatus::Unavailable => {
                ui.label(RichText::new("Phone models unavailable").color(theme_colors.error));
            }
        }
    });
}
