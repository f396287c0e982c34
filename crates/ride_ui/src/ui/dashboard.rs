//! Rider and driver dashboards: the connectivity gate views, the ride forms
//! and the feature cards below them.

use eframe::egui::{self, RichText};

use ride_core::connectivity::GateView;
use ride_core::dashboard::{DriverDashboardState, RiderDashboardState};
use ride_core::rides::{parse_seats, RideOfferUpdate, RideSearchUpdate, MAX_SEATS, MIN_SEATS};
use ride_core::session::Role;

use crate::app::RideUiApp;
use crate::ui::components::{
    card_frame, feature_grid, render_setup_guide, styled_button, ButtonVariant, FeatureCard,
};
use crate::ui::constants::{FORM_MAX_WIDTH, INPUT_HEIGHT, TEXT_ERROR, TEXT_MUTED, TEXT_STRONG};

const RIDER_FEATURES: [FeatureCard; 3] = [
    FeatureCard {
        icon: "👤",
        title: "Profile",
        description: "Manage your profile and settings",
    },
    FeatureCard {
        icon: "💳",
        title: "Payments",
        description: "View payment history and methods",
    },
    FeatureCard {
        icon: "🛡",
        title: "Safety",
        description: "Emergency contacts and ride tracking",
    },
];

const DRIVER_FEATURES: [FeatureCard; 3] = [
    FeatureCard {
        icon: "🔔",
        title: "Notifications",
        description: "Ride requests and updates",
    },
    FeatureCard {
        icon: "🛡",
        title: "Safety",
        description: "Emergency features and tracking",
    },
    FeatureCard {
        icon: "💰",
        title: "Earnings",
        description: "View payment history",
    },
];

/// User intent collected while rendering, applied once the borrow of the
/// dashboard state has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DashboardAction {
    Retry,
    Submit,
}

pub fn render_dashboard(ui: &mut egui::Ui, app: &mut RideUiApp, role: Role) {
    ui.vertical_centered(|ui| {
        ui.set_max_width(FORM_MAX_WIDTH * 1.6);
        ui.add_space(24.0);

        if app.shows_setup_guide() {
            render_setup_guide(ui, app.config.missing_variables());
            return;
        }

        let action = match role {
            Role::Rider => render_rider(ui, app),
            Role::Driver => render_driver(ui, app),
        };
        match action {
            Some(DashboardAction::Retry) => {
                tracing::info!(role = role.label(), "connection retry requested");
                app.retry_connection();
            }
            Some(DashboardAction::Submit) => app.submit(),
            None => {}
        }
    });
}

fn render_rider(ui: &mut egui::Ui, app: &mut RideUiApp) -> Option<DashboardAction> {
    let state = app.rider.as_mut()?;
    let action = card_frame()
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            match state.view() {
                GateView::Connected => render_search_form(ui, state),
                view => render_gate(ui, view, state.gate().is_checking()),
            }
        })
        .inner;
    let cards = feature_cards(Role::Rider, state.view());
    if !cards.is_empty() {
        ui.add_space(16.0);
        feature_grid(ui, cards);
    }
    action
}

fn render_driver(ui: &mut egui::Ui, app: &mut RideUiApp) -> Option<DashboardAction> {
    let RideUiApp {
        driver,
        seats_input,
        ..
    } = app;
    let state = driver.as_mut()?;
    let action = card_frame()
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            match state.view() {
                GateView::Connected => render_offer_form(ui, state, seats_input),
                view => render_gate(ui, view, state.gate().is_checking()),
            }
        })
        .inner;
    let cards = feature_cards(Role::Driver, state.view());
    if !cards.is_empty() {
        ui.add_space(16.0);
        feature_grid(ui, cards);
    }
    action
}

/// Feature cards sit below the form, so they only show once connected.
fn feature_cards(role: Role, view: GateView) -> &'static [FeatureCard] {
    if view != GateView::Connected {
        return &[];
    }
    match role {
        Role::Rider => &RIDER_FEATURES,
        Role::Driver => &DRIVER_FEATURES,
    }
}

fn render_gate(ui: &mut egui::Ui, view: GateView, checking: bool) -> Option<DashboardAction> {
    let mut action = None;
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(view.title()).heading().strong().color(TEXT_STRONG));
        ui.add_space(8.0);
        ui.label(RichText::new(view.message()).color(TEXT_MUTED));
        ui.add_space(12.0);
        if view == GateView::Checking {
            ui.spinner();
        } else if view.offers_retry() {
            let label = if checking { "Retrying..." } else { "⟳ Retry Connection" };
            if styled_button(ui, label, ButtonVariant::Primary, false, !checking) {
                action = Some(DashboardAction::Retry);
            }
        }
    });
    action
}

fn render_search_form(ui: &mut egui::Ui, state: &mut RiderDashboardState) -> Option<DashboardAction> {
    ui.label(RichText::new("Find a Ride").heading().strong().color(TEXT_STRONG));
    ui.add_space(12.0);

    let draft = state.draft().clone();
    if let Some(value) = text_field(ui, "Start Location", &draft.start_location) {
        state.update(RideSearchUpdate::StartLocation(value));
    }
    if let Some(value) = text_field(ui, "End Location", &draft.end_location) {
        state.update(RideSearchUpdate::EndLocation(value));
    }
    if let Some(value) = text_field(ui, "Preferred Time", &draft.preferred_time) {
        state.update(RideSearchUpdate::PreferredTime(value));
    }

    ui.add_space(8.0);
    let submitting = state.is_submitting();
    let label = if submitting { "Searching..." } else { "Search Rides" };
    let clicked = styled_button(ui, label, ButtonVariant::Primary, true, !submitting);
    render_error(ui, state.error_message());
    clicked.then_some(DashboardAction::Submit)
}

fn render_offer_form(
    ui: &mut egui::Ui,
    state: &mut DriverDashboardState,
    seats_input: &mut String,
) -> Option<DashboardAction> {
    ui.label(RichText::new("Offer a Ride").heading().strong().color(TEXT_STRONG));
    ui.add_space(12.0);

    let draft = state.draft().clone();
    if let Some(value) = text_field(ui, "Start Location", &draft.start_location) {
        state.update(RideOfferUpdate::StartLocation(value));
    }
    if let Some(value) = text_field(ui, "End Location", &draft.end_location) {
        state.update(RideOfferUpdate::EndLocation(value));
    }
    if let Some(value) = text_field(ui, "Departure Time", &draft.departure_time) {
        state.update(RideOfferUpdate::DepartureTime(value));
    }

    ui.horizontal(|ui| {
        ui.label(RichText::new("Available Seats:").color(TEXT_STRONG));
        let response = ui.add_sized(
            [64.0, INPUT_HEIGHT],
            egui::TextEdit::singleline(seats_input).hint_text(format!("{MIN_SEATS}-{MAX_SEATS}")),
        );
        if response.changed() {
            state.update(RideOfferUpdate::AvailableSeats(parse_seats(seats_input)));
        }
    });

    ui.add_space(8.0);
    let submitting = state.is_submitting();
    let label = if submitting { "Posting Ride..." } else { "Post Ride" };
    let clicked = styled_button(ui, label, ButtonVariant::Secondary, true, !submitting);
    render_error(ui, state.error_message());
    clicked.then_some(DashboardAction::Submit)
}

/// Single-line input with a placeholder. Returns the new text when edited.
fn text_field(ui: &mut egui::Ui, hint: &str, value: &str) -> Option<String> {
    let mut text = value.to_owned();
    let response = ui.add_sized(
        [ui.available_width(), INPUT_HEIGHT],
        egui::TextEdit::singleline(&mut text).hint_text(hint),
    );
    ui.add_space(6.0);
    response.changed().then_some(text)
}

fn render_error(ui: &mut egui::Ui, message: Option<&str>) {
    if let Some(message) = message {
        ui.add_space(6.0);
        ui.colored_label(TEXT_ERROR, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_cards_only_accompany_the_connected_form() {
        for role in [Role::Rider, Role::Driver] {
            for view in [GateView::Checking, GateView::NetworkDown, GateView::BackendDown] {
                assert!(feature_cards(role, view).is_empty(), "{role:?} {view:?}");
            }
        }

        let rider: Vec<_> = feature_cards(Role::Rider, GateView::Connected)
            .iter()
            .map(|card| card.title)
            .collect();
        assert_eq!(rider, ["Profile", "Payments", "Safety"]);
        let driver: Vec<_> = feature_cards(Role::Driver, GateView::Connected)
            .iter()
            .map(|card| card.title)
            .collect();
        assert_eq!(driver, ["Notifications", "Safety", "Earnings"]);
    }
}
