//! Header panel UI rendering
//!
//! Handles the top bar with the search box, phone model suggestions, catalog
//! controls, export settings and the theme selector.

use eframe::egui;
use std::path::PathBuf;
use crate::app::AppState;
use rcatalog::MarkupMode;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User submitted the search box (button or Enter)
    SearchRequested,
    /// User picked a phone model from the suggestion list
    SuggestionSelected(String),
    /// User picked a catalog file
    OpenCatalogRequested(PathBuf),
    /// User clicked "Sample Catalog"
    OpenSampleRequested,
    /// User picked a destination for the HTML export
    ExportHtmlRequested(PathBuf),
}

/// Renders the application header.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        let search_response = ui.add(
            egui::TextEdit::singleline(state.search.query_mut())
                .id(egui::Id::new("search_box"))
                .hint_text("Search by phone model")
                .desired_width(240.0),
        );

        if search_response.changed() {
            if state.search.query().trim().is_empty() {
                state.search.close_suggestions();
            } else {
                state.search.open_suggestions();
            }
        }

        let enter_pressed = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if search_response.lost_focus() && enter_pressed {
            interaction = Some(HeaderInteraction::SearchRequested);
        }

        if ui.button("🔍 Search").clicked() {
            interaction = Some(HeaderInteraction::SearchRequested);
        }

        if let Some(model) = render_suggestions(ui, state, &search_response) {
            interaction = Some(HeaderInteraction::SuggestionSelected(model));
        }

        ui.separator();

        if ui.button("📁 Open CSV").clicked() {
            let mut dialog = rfd::FileDialog::new()
                .add_filter("Catalogs", &["csv", "br"])
                .add_filter("All Files", &["*"]);

            if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.set_directory(cwd);
            }

            if let Some(path) = dialog.pick_file() {
                interaction = Some(HeaderInteraction::OpenCatalogRequested(path));
            }
        }

        if ui.button("🔮 Sample Catalog").clicked() {
            interaction = Some(HeaderInteraction::OpenSampleRequested);
        }

        ui.separator();

        let can_export = !state.catalog.view().is_empty();
        if ui.add_enabled(can_export, egui::Button::new("💾 Export HTML")).clicked() {
            let dialog = rfd::FileDialog::new()
                .add_filter("HTML", &["html", "htm"])
                .set_file_name("catalog.html");

            if let Some(path) = dialog.save_file() {
                interaction = Some(HeaderInteraction::ExportHtmlRequested(path));
            }
        }

        egui::ComboBox::from_id_salt("markup_mode_selector")
            .selected_text(state.preferences.markup_mode.label())
            .show_ui(ui, |ui| {
                for mode in [MarkupMode::Escaped, MarkupMode::Raw] {
                    ui.selectable_value(&mut state.preferences.markup_mode, mode, mode.label());
                }
            })
            .response
            .on_hover_text("How field values are written into exported HTML");

        // Push theme selector to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let old_theme = state.theme.current_theme_name().to_string();
            let mut current_theme = old_theme.clone();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    for theme_name in state.theme.theme_manager().list_themes() {
                        ui.selectable_value(
                            &mut current_theme,
                            theme_name.to_string(),
                            theme_name
                        );
                    }
                });

            if old_theme != current_theme {
                state.theme.set_theme(current_theme);
                ui.ctx().request_repaint();
            }

            ui.label("Theme:");
        });
    });

    interaction
}

/// Draws the phone model suggestion popup under the search box.
///
/// Returns the model the user picked, if any.
fn render_suggestions(
    ui: &mut egui::Ui,
    state: &mut AppState,
    search_response: &egui::Response,
) -> Option<String> {
    let suggestions: Vec<String> = state
        .search
        .suggestions()
        .into_iter()
        .map(str::to_string)
        .collect();
    if suggestions.is_empty() {
        return None;
    }

    let mut picked = None;
    let area = egui::Area::new(egui::Id::new("phone_models"))
        .order(egui::Order::Foreground)
        .fixed_pos(search_response.rect.left_bottom())
        .show(ui.ctx(), |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_min_width(search_response.rect.width());
                for model in &suggestions {
                    if ui.selectable_label(false, model).clicked() {
                        picked = Some(model.clone());
                    }
                }
            });
        });

    let escape_pressed = ui.input(|i| i.key_pressed(egui::Key::Escape));
    let pressed_elsewhere = ui.input(|i| i.pointer.any_pressed())
        && !area.response.contains_pointer()
        && !search_response.contains_pointer();
    if picked.is_none() && (escape_pressed || pressed_elsewhere) {
        state.search.close_suggestions();
    }

    picked
}
