use eframe::egui;

use crate::desk_app::customers::{ControllerState, SyncAction};
use crate::desk_app::theme::{colors, styles};

pub fn render(ctx: &egui::Context, view: &ControllerState) -> Option<SyncAction> {
    let notice = view.notice()?;
    let mut action = None;

    egui::TopBottomPanel::bottom("notice_bar")
        .frame(styles::notice_frame(notice.is_error()))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(colors::TEXT_PRIMARY, notice.message.as_str());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("✕").clicked() {
                        action = Some(SyncAction::DismissNotice);
                    }
                });
            });
        });

    action
}
