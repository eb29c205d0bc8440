use eframe::egui;

use crate::desk_app::customers::{CustomerForm, FormMode, SyncAction};
use crate::desk_app::theme::{colors, styles};

pub fn render(
    ui: &mut egui::Ui,
    form: &mut CustomerForm,
    mode: &FormMode,
    enabled: bool,
) -> Option<SyncAction> {
    let (title, submit_label) = if mode.is_update() {
        ("Update Customer", "Update Customer")
    } else {
        ("Create New Customer", "Create Customer")
    };
    let mut action = None;

    styles::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.colored_label(colors::TEXT_PRIMARY, egui::RichText::new(title).size(18.0).strong());
        ui.add_space(8.0);

        ui.add_enabled_ui(enabled, |ui| {
            egui::Grid::new("customer_form_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    field(ui, "Name", &mut form.name, "");
                    field(ui, "Date", &mut form.date, "YYYY-MM-DD");
                    field(ui, "Member", &mut form.member, "0");
                    field(ui, "Interest", &mut form.interest, "");
                });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let submit = egui::Button::new(submit_label).fill(colors::ACCENT);
                if ui.add(submit).clicked() {
                    action = Some(SyncAction::Submit);
                }
                if mode.is_update() && ui.button("Cancel").clicked() {
                    action = Some(SyncAction::CancelEdit);
                }
            });
        });
    });

    action
}

fn field(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str) {
    ui.colored_label(colors::TEXT_MUTED, label);
    ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(280.0),
    );
    ui.end_row();
}
