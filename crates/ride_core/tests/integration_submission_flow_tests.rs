use ride_core::connectivity::ConnectivityStatus;
use ride_core::dashboard::{DriverDashboardState, RiderDashboardState};
use ride_core::error::RideError;
use ride_core::rides::{
    parse_seats, RideKind, RideOfferRequest, RideOfferUpdate, RideSearchRequest, RideSearchUpdate,
};
use ride_core::submission::submit;
use ride_core::test_helpers::{RecordingStore, ScriptedProbe};

fn connected_driver_dashboard() -> DriverDashboardState {
    let mut dashboard = DriverDashboardState::new();
    dashboard.run_check(&ScriptedProbe::up("network"), &ScriptedProbe::up("backend"));
    dashboard
}

fn fill_offer(dashboard: &mut DriverDashboardState) {
    dashboard.update(RideOfferUpdate::StartLocation("A".into()));
    dashboard.update(RideOfferUpdate::EndLocation("B".into()));
    dashboard.update(RideOfferUpdate::DepartureTime("09:00".into()));
    dashboard.update(RideOfferUpdate::AvailableSeats(parse_seats("2")));
}

#[test]
fn submit_without_connection_makes_no_remote_call() {
    let store = RecordingStore::new();
    for status in [
        None,
        Some(ConnectivityStatus::NetworkDown),
        Some(ConnectivityStatus::BackendDown),
    ] {
        let result = submit(status, &store, &RideSearchRequest::default());
        assert_eq!(result, Err(RideError::BackendUnreachable));
    }
    assert_eq!(store.calls(), 0);
}

#[test]
fn dashboard_refuses_submission_before_first_check() {
    let store = RecordingStore::new();
    let mut dashboard = RiderDashboardState::new();
    dashboard.update(RideSearchUpdate::StartLocation("Home".into()));

    let result = dashboard.submit(&store);

    assert_eq!(result, Err(RideError::BackendUnreachable));
    assert_eq!(
        dashboard.error_message(),
        Some("Unable to connect to the database. Please try again later.")
    );
    assert!(!dashboard.is_submitting());
    assert_eq!(store.calls(), 0);
}

#[test]
fn dashboard_refuses_submission_when_backend_is_down() {
    let store = RecordingStore::new();
    let mut dashboard = DriverDashboardState::new();
    dashboard.run_check(&ScriptedProbe::up("network"), &ScriptedProbe::down("backend"));

    assert!(dashboard.begin_submit().is_err());
    assert_eq!(store.calls(), 0);
}

#[test]
fn successful_offer_writes_exactly_the_four_fields() {
    let store = RecordingStore::new();
    let mut dashboard = connected_driver_dashboard();
    fill_offer(&mut dashboard);

    let acknowledgment = dashboard.submit(&store).expect("submission should succeed");

    assert_eq!(acknowledgment.kind, RideKind::Offer);
    assert_eq!(acknowledgment.message(), "Ride offer successfully posted!");
    assert_eq!(dashboard.acknowledgment(), Some(acknowledgment));
    assert_eq!(dashboard.error(), None);
    assert_eq!(store.calls(), 1);

    let offers = store.offers();
    assert_eq!(offers.len(), 1);
    assert_eq!(
        serde_json::to_value(&offers[0]).expect("serialize"),
        serde_json::json!({
            "start_location": "A",
            "end_location": "B",
            "departure_time": "09:00",
            "available_seats": 2
        })
    );
    assert!(store.searches().is_empty());
}

#[test]
fn failed_insert_keeps_the_draft_and_reports_failure() {
    let store = RecordingStore::failing("simulated transport error");
    let mut dashboard = connected_driver_dashboard();
    fill_offer(&mut dashboard);
    let before = dashboard.draft().clone();

    let result = dashboard.submit(&store);

    assert!(matches!(
        result,
        Err(RideError::WriteFailed {
            kind: RideKind::Offer,
            ..
        })
    ));
    assert_eq!(
        dashboard.error_message(),
        Some("Failed to save ride offer. Please try again.")
    );
    assert_eq!(dashboard.draft(), &before);
    assert_eq!(dashboard.acknowledgment(), None);
    assert!(!dashboard.is_submitting());
    assert_eq!(store.calls(), 1);
    assert!(store.offers().is_empty());
}

#[test]
fn resubmission_after_failure_sends_the_same_draft() {
    let store = RecordingStore::failing("timeout");
    let mut dashboard = connected_driver_dashboard();
    fill_offer(&mut dashboard);
    assert!(dashboard.submit(&store).is_err());

    store.set_failure(None);
    dashboard.submit(&store).expect("retry should succeed");

    assert_eq!(store.offers(), vec![dashboard.draft().clone()]);
}

#[test]
fn draft_is_retained_after_success_and_a_second_submit_duplicates_the_row() {
    let store = RecordingStore::new();
    let mut dashboard = RiderDashboardState::new();
    dashboard.run_check(&ScriptedProbe::up("network"), &ScriptedProbe::up("backend"));
    dashboard.update(RideSearchUpdate::StartLocation("Mitte".into()));
    dashboard.update(RideSearchUpdate::EndLocation("Airport".into()));
    dashboard.update(RideSearchUpdate::PreferredTime("07:30".into()));

    let first = dashboard.submit(&store).expect("first submission");
    assert_eq!(first.message(), "Ride search submitted successfully!");
    assert_eq!(dashboard.draft().start_location, "Mitte");

    dashboard.submit(&store).expect("second submission");
    let searches = store.searches();
    assert_eq!(searches.len(), 2);
    assert_eq!(searches[0], searches[1]);
}

#[test]
fn out_of_range_and_non_numeric_seats_are_not_rejected() {
    let store = RecordingStore::new();
    let mut dashboard = connected_driver_dashboard();

    dashboard.update(RideOfferUpdate::AvailableSeats(parse_seats("9")));
    dashboard.submit(&store).expect("out of range seats still submit");
    dashboard.update(RideOfferUpdate::AvailableSeats(parse_seats("lots")));
    dashboard.submit(&store).expect("non-numeric seats still submit");

    let offers = store.offers();
    assert_eq!(offers[0].available_seats, Some(9));
    assert_eq!(offers[1].available_seats, None);
}

#[test]
fn begin_and_finish_split_matches_single_call_submit() {
    let store = RecordingStore::new();
    let mut dashboard = connected_driver_dashboard();
    fill_offer(&mut dashboard);

    let draft = dashboard.begin_submit().expect("connected");
    assert!(dashboard.is_submitting());
    assert!(dashboard.is_busy());
    let expected: RideOfferRequest = dashboard.draft().clone();
    assert_eq!(draft, expected);

    let result = ride_core::submission::insert_draft(&store, &draft);
    dashboard.finish_submit(result);

    assert!(!dashboard.is_submitting());
    assert!(dashboard.acknowledgment().is_some());
    dashboard.dismiss_acknowledgment();
    assert!(dashboard.acknowledgment().is_none());
}
