//! Operator guidance shown when the backend variables are missing.

use eframe::egui::{self, RichText};

use ride_core::config::ENV_FILE_NAMES;

use crate::ui::constants::{CARD_ROUNDING, TEXT_STRONG, TEXT_WARNING, WARNING_BACKGROUND};

pub fn render_setup_guide(ui: &mut egui::Ui, missing: &[&str]) {
    egui::Frame::new()
        .fill(WARNING_BACKGROUND)
        .corner_radius(egui::CornerRadius::same(CARD_ROUNDING))
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.label(
                RichText::new("Environment Variables Not Set")
                    .heading()
                    .color(TEXT_WARNING),
            );
            ui.add_space(6.0);
            ui.label(
                RichText::new(
                    "The backend connection is not configured. To run the app properly:",
                )
                .color(TEXT_STRONG),
            );
            ui.add_space(4.0);
            ui.label(format!(
                "1. Create a {} file in the directory you start the app from",
                ENV_FILE_NAMES[0]
            ));
            ui.label("2. Add the following variables:");
            egui::Frame::new()
                .fill(egui::Color32::from_gray(245))
                .inner_margin(egui::Margin::same(8))
                .show(ui, |ui| {
                    for name in missing {
                        ui.monospace(format!("{name}=..."));
                    }
                });
            ui.label("3. Restart the application");
        });
}
