use eframe::egui;

use crate::desk_app::customers::{ControllerState, SyncAction};
use crate::desk_app::theme::{colors, styles};
use crate::shared::customer::Customer;

pub fn render(ui: &mut egui::Ui, view: &ControllerState, enabled: bool) -> Option<SyncAction> {
    let mut action = None;

    styles::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.colored_label(
            colors::TEXT_PRIMARY,
            egui::RichText::new("Customer List").size(18.0).strong(),
        );
        ui.add_space(8.0);

        if view.shows_empty_state() {
            ui.colored_label(colors::TEXT_MUTED, "No customers found");
            return;
        }

        if view.shows_load_failure() {
            ui.colored_label(colors::ERROR, "Could not load customers");
            return;
        }

        if !view.is_loaded() {
            ui.colored_label(colors::TEXT_MUTED, "Loading customers...");
            return;
        }

        let selected_id = view.selected().map(|c| &c.id);

        for customer in view.records() {
            let is_selected = selected_id == Some(&customer.id);
            if let Some(row_action) = render_row(ui, customer, is_selected, enabled) {
                action = Some(row_action);
            }
            ui.add_space(4.0);
        }
    });

    action
}

fn render_row(
    ui: &mut egui::Ui,
    customer: &Customer,
    is_selected: bool,
    enabled: bool,
) -> Option<SyncAction> {
    let mut action = None;

    styles::row_frame(is_selected).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.colored_label(colors::TEXT_PRIMARY, egui::RichText::new(&customer.name).strong());
                ui.colored_label(colors::TEXT_MUTED, format!("Interest: {}", customer.interest));
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let delete = egui::Button::new("Delete").fill(colors::DANGER);
                if ui.add_enabled(enabled, delete).clicked() {
                    action = Some(SyncAction::Delete(customer.id.clone()));
                }
                if ui.add_enabled(enabled, egui::Button::new("Edit")).clicked() {
                    action = Some(SyncAction::Edit(customer.clone()));
                }
            });
        });
    });

    action
}
