use eframe::egui::{self, RichText};

use ride_core::session::Role;

use crate::app::RideUiApp;
use crate::ui::components::{card_frame, styled_button, ButtonVariant};
use crate::ui::constants::{FORM_MAX_WIDTH, TEXT_STRONG};

pub fn render_role_selection(ui: &mut egui::Ui, app: &mut RideUiApp) {
    let mut chosen = None;
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.set_max_width(FORM_MAX_WIDTH);
        card_frame().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new("Choose Your Role")
                        .heading()
                        .strong()
                        .color(TEXT_STRONG),
                );
                ui.add_space(16.0);
                if styled_button(ui, Role::Rider.label(), ButtonVariant::Primary, true, true) {
                    chosen = Some(Role::Rider);
                }
                ui.add_space(8.0);
                if styled_button(ui, Role::Driver.label(), ButtonVariant::Secondary, true, true) {
                    chosen = Some(Role::Driver);
                }
            });
        });
    });

    if let Some(role) = chosen {
        tracing::info!(role = role.label(), "role selected");
        app.select_role(role);
    }
}
