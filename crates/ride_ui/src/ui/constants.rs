//! Constants used throughout the UI.

use eframe::egui::Color32;

pub const APP_TITLE: &str = "RideConnect";

pub const FOOTER_TEXT: &str = "© 2023 RideConnect. All rights reserved.";

/// Primary brand blue (header, primary buttons).
pub const PRIMARY: Color32 = Color32::from_rgb(37, 99, 235);

/// Secondary brand green.
pub const SECONDARY: Color32 = Color32::from_rgb(16, 185, 129);

pub const PAGE_BACKGROUND: Color32 = Color32::from_rgb(243, 244, 246);
pub const CARD_BACKGROUND: Color32 = Color32::WHITE;
pub const FOOTER_BACKGROUND: Color32 = Color32::from_rgb(31, 41, 55);

pub const TEXT_STRONG: Color32 = Color32::from_rgb(17, 24, 39);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(75, 85, 99);
pub const TEXT_ERROR: Color32 = Color32::from_rgb(220, 38, 38);
pub const TEXT_WARNING: Color32 = Color32::from_rgb(180, 83, 9);
pub const WARNING_BACKGROUND: Color32 = Color32::from_rgb(254, 243, 199);

pub const CARD_ROUNDING: u8 = 8;
pub const FORM_MAX_WIDTH: f32 = 520.0;
pub const INPUT_HEIGHT: f32 = 28.0;

/// Repaint cadence while a worker result is outstanding.
pub const BUSY_REPAINT_MS: u64 = 100;
