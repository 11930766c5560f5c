//! Floating UI drawn above the panels: the loading bar, the back-to-top
//! button and toasts.

use crate::app::AppState;
use crate::state::ToastKind;
use egui::{Align2, RichText};
use rcatalog::ThemeColors;
use std::time::{Duration, Instant};

/// Repaint interval while the loading spinner is shown without a scheduled hide.
const LOADING_REPAINT_INTERVAL: Duration = Duration::from_millis(100);

/// Renders the loading bar while the loader indicator is visible.
pub fn render_loading_indicator(ctx: &egui::Context, state: &AppState, theme_colors: &ThemeColors, now: Instant) {
    if !state.loader_indicator.is_visible(now) {
        return;
    }

    egui::Area::new(egui::Id::new("loadingBar"))
        .order(egui::Order::Foreground)
        .anchor(Align2::CENTER_TOP, egui::vec2(0.0, 48.0))
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style())
                .fill(theme_colors.toast_background)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(RichText::new("Loading catalog...").color(theme_colors.text));
                    });
                });
        });

    let interval = state
        .loader_indicator
        .remaining(now)
        .unwrap_or(LOADING_REPAINT_INTERVAL);
    ctx.request_repaint_after(interval);
}

/// Renders the back-to-top button once the catalog is scrolled far enough.
pub fn render_back_to_top(ctx: &egui::Context, state: &mut AppState) {
    if !state.scroll.back_to_top_visible() {
        return;
    }

    egui::Area::new(egui::Id::new("backToTop"))
        .order(egui::Order::Foreground)
        .anchor(Align2::RIGHT_BOTTOM, egui::vec2(-24.0, -40.0))
        .show(ctx, |ui| {
            if ui
                .button(RichText::new("⬆ Top").size(16.0))
                .on_hover_text("Back to top")
                .clicked()
            {
                state.scroll.request_scroll_to_top();
            }
        });
}

/// Renders active toasts in the bottom-right corner.
pub fn render_toasts(ctx: &egui::Context, state: &mut AppState, theme_colors: &ThemeColors, now: Instant) {
    state.toasts.prune(now);
    if state.toasts.is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("toasts"))
        .order(egui::Order::Tooltip)
        .anchor(Align2::RIGHT_BOTTOM, egui::vec2(-24.0, -88.0))
        .interactable(false)
        .show(ctx, |ui| {
            for toast in state.toasts.iter() {
                let color = match toast.kind {
                    ToastKind::Info => theme_colors.text,
                    ToastKind::Success => theme_colors.success,
                    ToastKind::Error => theme_colors.error,
                };
                egui::Frame::popup(ui.style())
                    .fill(theme_colors.toast_background)
                    .show(ui, |ui| {
                        ui.label(RichText::new(&toast.message).color(color));
                    });
            }
        });

    if let Some(next) = state.toasts.next_expiry(now) {
        ctx.request_repaint_after(next);
    }
}
