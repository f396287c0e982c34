use eframe::egui::{self, RichText, Stroke};

use crate::ui::constants::{PRIMARY, SECONDARY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    /// Transparent with a light border; meant for the header bar.
    Outline,
}

impl ButtonVariant {
    fn colors(self) -> (egui::Color32, egui::Color32, Stroke) {
        match self {
            ButtonVariant::Primary => (PRIMARY, egui::Color32::WHITE, Stroke::NONE),
            ButtonVariant::Secondary => (SECONDARY, egui::Color32::WHITE, Stroke::NONE),
            ButtonVariant::Outline => (
                egui::Color32::TRANSPARENT,
                egui::Color32::WHITE,
                Stroke::new(1.5, egui::Color32::WHITE),
            ),
        }
    }
}

/// Render a button in one of the brand variants and report whether it was
/// clicked. Disabled buttons never report a click.
pub fn styled_button(
    ui: &mut egui::Ui,
    label: &str,
    variant: ButtonVariant,
    full_width: bool,
    enabled: bool,
) -> bool {
    let (fill, text, stroke) = variant.colors();
    let width = if full_width { ui.available_width() } else { 0.0 };
    let button = egui::Button::new(RichText::new(label).color(text).strong())
        .fill(fill)
        .stroke(stroke)
        .min_size(egui::vec2(width, 34.0));
    ui.add_enabled(enabled, button).clicked()
}
