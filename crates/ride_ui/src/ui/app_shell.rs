use std::sync::Once;
use std::time::Duration;

use eframe::egui::{self, RichText};
use tracing_subscriber::EnvFilter;

use ride_core::config::StoreConfig;
use ride_core::session::Screen;

use crate::app::RideUiApp;
use crate::ui::components::{styled_button, ButtonVariant};
use crate::ui::constants::{
    APP_TITLE, BUSY_REPAINT_MS, FOOTER_BACKGROUND, FOOTER_TEXT, PAGE_BACKGROUND, PRIMARY,
};
use crate::ui::dashboard::render_dashboard;
use crate::ui::role_selection::render_role_selection;

static TRACING: Once = Once::new();

/// Install the fmt subscriber once. `RUST_LOG` overrides the default filter.
pub fn init_tracing(default_filter: &str) {
    TRACING.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    });
}

pub fn run(config: StoreConfig) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([1024.0, 768.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(RideUiApp::from_config(config)))
        }),
    )
}

impl eframe::App for RideUiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_worker_results();
        if self.is_waiting() {
            ctx.request_repaint_after(Duration::from_millis(BUSY_REPAINT_MS));
        }

        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::new()
                    .fill(PRIMARY)
                    .inner_margin(egui::Margin::symmetric(16, 12)),
            )
            .show(ctx, |ui| {
                render_header(ui, self);
            });

        egui::TopBottomPanel::bottom("footer")
            .frame(
                egui::Frame::new()
                    .fill(FOOTER_BACKGROUND)
                    .inner_margin(egui::Margin::same(12)),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(FOOTER_TEXT).color(egui::Color32::WHITE));
                });
            });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(PAGE_BACKGROUND)
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| match self.session.screen() {
                    Screen::RoleSelection => render_role_selection(ui, self),
                    Screen::Dashboard(role) => render_dashboard(ui, self, role),
                });
            });

        render_acknowledgment(ctx, self);
    }
}

fn render_header(ui: &mut egui::Ui, app: &mut RideUiApp) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(APP_TITLE)
                .heading()
                .strong()
                .color(egui::Color32::WHITE),
        );
        if !app.session.is_logged_in() {
            return;
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // Right-to-left, so the last button added sits leftmost.
            let logout = styled_button(ui, "Logout", ButtonVariant::Secondary, false, true);
            let switch = styled_button(ui, "Switch Mode", ButtonVariant::Outline, false, true);
            if logout {
                tracing::info!("logout");
                app.logout();
            } else if switch {
                tracing::info!("switching mode");
                app.switch_mode();
            }
        });
    });
}

/// Modal acknowledgment after a successful insert.
fn render_acknowledgment(ctx: &egui::Context, app: &mut RideUiApp) {
    let Some(message) = app.acknowledgment_message() else {
        return;
    };
    let mut dismissed = false;
    egui::Window::new("Success")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(message);
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });
    if dismissed {
        app.dismiss_acknowledgment();
    }
}
