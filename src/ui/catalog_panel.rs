//! Catalog panel UI rendering
//!
//! The central scrollable list of product cards. Only slots near the
//! viewport are laid out; placeholders are filled as they come into view.

use crate::app::AppState;
use crate::domain::visibility::VisibilityWatcher;
use crate::ui::card_renderer::{self, CardInteraction};
use crate::ui::virtual_scrolling::{content_height, slot_top, CARD_HEIGHT, CARD_MAX_WIDTH, SLOT_HEIGHT};
use egui::{RichText, ScrollArea};
use rcatalog::ThemeColors;

/// Result of catalog panel interactions that need to be handled by the application.
pub enum CatalogPanelInteraction {
    /// A card's SKU control was clicked
    CopySku(String),
}

/// Renders the catalog panel.
pub fn render_catalog_panel(
    ui: &mut egui::Ui,
    state: &mut AppState,
    theme_colors: &ThemeColors,
) -> Option<CatalogPanelInteraction> {
    if let Some(text) = state.catalog.failure_text() {
        ui.centered_and_justified(|ui| {
            ui.label(RichText::new(text).size(20.0).color(theme_colors.error));
        });
        return None;
    }

    if state.catalog.view().is_empty() {
        render_empty_message(ui, state, theme_colors);
        return None;
    }

    let mut interaction = None;
    let count = state.catalog.view().len();
    let watcher = VisibilityWatcher::default();
    let on_screen = VisibilityWatcher::new(0.0, 0.0);

    let scroll_to_top = state.scroll.take_scroll_to_top();

    let mut scroll_area = ScrollArea::vertical()
        .id_salt("catalog_scroll")
        .auto_shrink([false, false]);
    if state.scroll.take_jump_to_top() {
        // New view: the viewport handed to the watcher already starts at 0
        scroll_area = scroll_area.vertical_scroll_offset(0.0);
    }

    let output = scroll_area.show_viewport(ui, |ui, viewport| {
        let origin = ui.max_rect().min;
        let width = ui.available_width().min(CARD_MAX_WIDTH);
        let left = origin.x + (ui.available_width() - width).max(0.0) / 2.0;
        ui.set_min_height(content_height(count));

        if scroll_to_top {
            // Animated by the style's scroll animation
            let top = egui::Rect::from_min_size(origin, egui::vec2(width, 1.0));
            ui.scroll_to_rect(top, Some(egui::Align::TOP));
        }

        // Fill everything the watcher reports before drawing
        let view = state.catalog.view();
        for index in watcher.intersecting_range(viewport.min.y, viewport.max.y, SLOT_HEIGHT, CARD_HEIGHT, count) {
            view.fill(index);
        }

        for index in on_screen.intersecting_range(viewport.min.y, viewport.max.y, SLOT_HEIGHT, CARD_HEIGHT, count) {
            let rect = egui::Rect::from_min_size(
                egui::pos2(left, origin.y + slot_top(index)),
                egui::vec2(width, CARD_HEIGHT),
            );
            let placeholder = &view.placeholders()[index];
            match placeholder.card() {
                Some(card) => {
                    let resolve = |reference: &str| state.catalog.resolve_image(reference);
                    if let Some(CardInteraction::CopySku(sku)) =
                        card_renderer::render_card(ui, rect, placeholder.index(), card, theme_colors, resolve)
                    {
                        interaction = Some(CatalogPanelInteraction::CopySku(sku));
                    }
                }
                None => card_renderer::render_placeholder(ui, rect, theme_colors),
            }
        }
    });

    state.scroll.observe(output.state.offset.y);

    interaction
}

fn render_empty_message(ui: &mut egui::Ui, state: &AppState, theme_colors: &ThemeColors) {
    let message = match state.search.applied_query() {
        Some(query) if !query.trim().is_empty() => format!("No products match \"{}\"", query.trim()),
        Some(_) => "No products with a phone model".to_string(),
        None if state.catalog.source().is_some() => "The catalog is empty".to_string(),
        None => return,
    };
    ui.centered_and_justified(|ui| {
        ui.label(RichText::new(message).color(theme_colors.text_dim));
    });
}
