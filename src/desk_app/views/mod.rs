use eframe::egui;

use crate::desk_app::customers::SyncAction;
use crate::desk_app::state::DeskState;
use crate::desk_app::theme::{colors, styles};

pub mod customer_form;
pub mod customer_list;
pub mod notice_bar;

pub fn render_top_bar(ctx: &egui::Context, state: &mut DeskState) {
    let mut refresh = false;

    egui::TopBottomPanel::top("top_panel")
        .frame(styles::header_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::TEXT_PRIMARY,
                    egui::RichText::new("Customer Management").size(22.0).strong(),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let busy = state.is_busy();
                    refresh = ui
                        .add_enabled(!busy, egui::Button::new("Refresh"))
                        .clicked();

                    if busy {
                        ui.spinner();
                    } else if state.view().is_stale() {
                        ui.colored_label(colors::WARNING, "List may be out of date");
                    }
                    ui.colored_label(colors::TEXT_MUTED, state.config.server_url());
                });
            });
        });

    if refresh {
        state.dispatch(SyncAction::Refresh, ctx);
    }
}

/// Bottom notice bar, shown only while a notice is visible
pub fn render_notice_bar(ctx: &egui::Context, state: &mut DeskState) {
    if let Some(action) = notice_bar::render(ctx, state.view()) {
        state.dispatch(action, ctx);
    }
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut DeskState) {
    egui::CentralPanel::default()
        .frame(styles::main_frame())
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                let enabled = !state.is_busy();
                let view = state.view().clone();

                let mut scratch = view.form().clone();
                let form = match state.form_mut() {
                    Some(form) => form,
                    None => &mut scratch,
                };
                let form_action = customer_form::render(ui, form, view.mode(), enabled);

                ui.add_space(16.0);
                let list_action = customer_list::render(ui, &view, enabled);

                if let Some(action) = form_action.or(list_action) {
                    state.dispatch(action, ctx);
                }
            });
        });
}
