//! Product card rendering.
//!
//! Field values are drawn as plain text labels; nothing in a row is ever
//! interpreted as markup. Cards have a fixed height, so the description
//! scrolls inside whatever room the card has left.

use crate::ui::virtual_scrolling::THUMBNAIL_SIZE;
use egui::{Label, RichText, Sense};
use rcatalog::{Card, ThemeColors, IMAGE_ALT_TEXT};

/// Result of user interaction with a card.
pub enum CardInteraction {
    /// The SKU control was clicked
    CopySku(String),
}

const CARD_ROUNDING: f32 = 6.0;
const CARD_PADDING: f32 = 10.0;

/// Draws a placeholder slot that has not been filled yet.
pub fn render_placeholder(ui: &mut egui::Ui, rect: egui::Rect, theme_colors: &ThemeColors) {
    ui.painter().rect_filled(rect, CARD_ROUNDING, theme_colors.placeholder);
}

/// Draws a card into `rect`.
///
/// # Arguments
/// * `index` - Position of the card in the view, used to keep widget ids unique
/// * `resolve_image` - Maps an image entry of the row to a loadable URI
pub fn render_card(
    ui: &mut egui::Ui,
    rect: egui::Rect,
    index: usize,
    card: &Card,
    theme_colors: &ThemeColors,
    resolve_image: impl Fn(&str) -> String,
) -> Option<CardInteraction> {
    let mut interaction = None;

    ui.painter().rect_filled(rect, CARD_ROUNDING, theme_colors.card_background);
    ui.painter().rect_stroke(
        rect,
        CARD_ROUNDING,
        egui::Stroke::new(1.0, theme_colors.card_border),
        egui::StrokeKind::Inside,
    );

    let inner = rect.shrink(CARD_PADDING);
    let mut card_ui = ui.new_child(
        egui::UiBuilder::new()
            .max_rect(inner)
            .layout(egui::Layout::top_down(egui::Align::LEFT)),
    );
    card_ui.set_clip_rect(inner.intersect(ui.clip_rect()));
    let ui = &mut card_ui;

    // Identifier block
    ui.add(
        Label::new(RichText::new(&card.title).size(18.0).strong().color(theme_colors.title)).wrap(),
    );
    ui.horizontal(|ui| {
        let sku_text = if card.sku.is_empty() { "SKU: -".to_string() } else { format!("SKU: {}", card.sku) };
        let sku_response = ui
            .add(Label::new(RichText::new(sku_text).monospace().color(theme_colors.sku)).sense(Sense::click()))
            .on_hover_text("Click to copy SKU");
        let button_response = ui.small_button("📋").on_hover_text("Copy SKU");
        if sku_response.clicked() || button_response.clicked() {
            interaction = Some(CardInteraction::CopySku(card.sku.clone()));
        }
    });

    // Gallery
    if card.has_gallery() {
        egui::ScrollArea::horizontal()
            .id_salt(("gallery", index))
            .max_height(THUMBNAIL_SIZE + 4.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    for url in &card.images {
                        ui.add(
                            egui::Image::new(resolve_image(url.as_str()))
                                .fit_to_exact_size(egui::vec2(THUMBNAIL_SIZE, THUMBNAIL_SIZE)),
                        )
                        .on_hover_text(IMAGE_ALT_TEXT);
                    }
                });
            });
    }

    // Info block
    ui.horizontal_wrapped(|ui| {
        for field in &card.info {
            ui.label(RichText::new(format!("{}:", field.label)).strong().color(theme_colors.label));
            ui.label(&field.value);
            ui.add_space(8.0);
        }
    });

    // Description
    if !card.description.is_empty() {
        render_description(ui, index, &card.description, theme_colors.text_dim);
    }

    interaction
}

/// Lays out the full description in a vertical scroll area filling the
/// remaining height of the card.
pub fn render_description(
    ui: &mut egui::Ui,
    index: usize,
    description: &str,
    color: egui::Color32,
) -> egui::scroll_area::ScrollAreaOutput<()> {
    egui::ScrollArea::vertical()
        .id_salt(("description", index))
        .max_height(ui.available_height().max(0.0))
        .auto_shrink([false, true])
        .show(ui, |ui| {
            ui.add(Label::new(RichText::new(description).color(color)).wrap());
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOX_HEIGHT: f32 = 60.0;

    fn layout_description(text: &str) -> egui::scroll_area::ScrollAreaOutput<()> {
        let ctx = egui::Context::default();
        let mut output = None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let rect = egui::Rect::from_min_size(ui.max_rect().min, egui::vec2(300.0, BOX_HEIGHT));
                let mut child = ui.new_child(egui::UiBuilder::new().max_rect(rect));
                output = Some(render_description(&mut child, 0, text, egui::Color32::GRAY));
            });
        });
        output.expect("description was laid out")
    }

    #[test]
    fn test_long_description_scrolls_instead_of_clipping() {
        let text = "Raised edges protect the camera and screen. ".repeat(40);
        let output = layout_description(&text);
        assert!(output.inner_rect.height() <= BOX_HEIGHT + 0.5);
        // The whole text is laid out, beyond the visible box
        assert!(output.content_size.y > output.inner_rect.height() * 2.0);
    }

    #[test]
    fn test_short_description_fits() {
        let output = layout_description("Slim fit.");
        assert!(output.content_size.y <= output.inner_rect.height() + 0.5);
    }
}
