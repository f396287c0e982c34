use eframe::egui::{self, RichText};

use crate::ui::constants::{CARD_BACKGROUND, CARD_ROUNDING, TEXT_MUTED, TEXT_STRONG};

#[derive(Debug, Clone, Copy)]
pub struct FeatureCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(CARD_BACKGROUND)
        .corner_radius(egui::CornerRadius::same(CARD_ROUNDING))
        .inner_margin(egui::Margin::same(16))
        .stroke(egui::Stroke::new(1.0, egui::Color32::from_gray(225)))
}

/// Lay the cards out side by side in equal columns.
pub fn feature_grid(ui: &mut egui::Ui, cards: &[FeatureCard]) {
    if cards.is_empty() {
        return;
    }
    ui.columns(cards.len(), |columns| {
        for (column, card) in columns.iter_mut().zip(cards) {
            render_feature_card(column, card);
        }
    });
}

fn render_feature_card(ui: &mut egui::Ui, card: &FeatureCard) {
    card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(card.icon).size(28.0));
            ui.label(RichText::new(card.title).strong().color(TEXT_STRONG));
            ui.label(RichText::new(card.description).color(TEXT_MUTED));
        });
    });
}
