//! Theme styling functions

use eframe::egui::{self, CornerRadius, Stroke};

use super::colors;

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.window_fill = colors::BG_DARK;
    style.visuals.panel_fill = colors::BG_DARK;
    style.visuals.extreme_bg_color = colors::INPUT_BG;

    style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);

    style.visuals.widgets.inactive.bg_fill = colors::CARD_BORDER;
    style.visuals.widgets.inactive.weak_bg_fill = colors::CARD_BORDER;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);

    style.visuals.widgets.hovered.bg_fill = colors::ACCENT_HOVER;
    style.visuals.widgets.hovered.weak_bg_fill = colors::ACCENT_HOVER;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);

    style.visuals.widgets.active.bg_fill = colors::ACCENT;
    style.visuals.widgets.active.weak_bg_fill = colors::ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);

    style.visuals.selection.bg_fill = colors::ACCENT;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);

    ctx.set_style(style);
}

/// Create a frame style for the header bar
pub fn header_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::HEADER_BG)
        .inner_margin(egui::Margin::symmetric(16, 10))
}

/// Create a frame style for the central panel
pub fn main_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::BG_DARK)
        .inner_margin(egui::Margin::same(16))
}

/// Create a frame for the form and list cards
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::CARD_BG)
        .stroke(Stroke::new(1.0, colors::CARD_BORDER))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(egui::Margin::same(12))
}

/// Create a frame for one customer row
pub fn row_frame(is_selected: bool) -> egui::Frame {
    let fill = if is_selected {
        colors::ROW_SELECTED
    } else {
        colors::CARD_BG
    };

    egui::Frame::new()
        .fill(fill)
        .corner_radius(CornerRadius::same(4))
        .inner_margin(egui::Margin::symmetric(8, 6))
}

/// Create a frame for the notice bar, coloured by outcome
pub fn notice_frame(is_error: bool) -> egui::Frame {
    let fill = if is_error { colors::ERROR } else { colors::SUCCESS };

    egui::Frame::new()
        .fill(fill)
        .inner_margin(egui::Margin::symmetric(16, 10))
}
