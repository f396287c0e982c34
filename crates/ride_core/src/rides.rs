//! Ride search and ride offer records, and the field-update actions that
//! mutate them while they are being edited.
//!
//! Records are sent to the store verbatim. Nothing here validates locations
//! or times; the seat count is only *intended* to be 1–4.

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::store::RideStore;

pub const RIDE_SEARCHES_TABLE: &str = "ride_searches";
pub const RIDE_OFFERS_TABLE: &str = "ride_offers";

pub const MIN_SEATS: i32 = 1;
pub const MAX_SEATS: i32 = 4;
pub const DEFAULT_SEATS: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RideKind {
    Search,
    Offer,
}

impl RideKind {
    pub fn table(self) -> &'static str {
        match self {
            RideKind::Search => RIDE_SEARCHES_TABLE,
            RideKind::Offer => RIDE_OFFERS_TABLE,
        }
    }

    pub fn noun(self) -> &'static str {
        match self {
            RideKind::Search => "ride search",
            RideKind::Offer => "ride offer",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            RideKind::Search => "Ride search submitted successfully!",
            RideKind::Offer => "Ride offer successfully posted!",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            RideKind::Search => "Failed to save ride search. Please try again.",
            RideKind::Offer => "Failed to save ride offer. Please try again.",
        }
    }
}

/// A record that can be edited through a closed set of updates and written
/// to the store as one row.
pub trait RideRecord: std::fmt::Debug + Clone + Default + Send + 'static {
    type Update;

    const KIND: RideKind;

    fn apply(&mut self, update: Self::Update);

    fn insert_into(&self, store: &dyn RideStore) -> Result<(), StoreError>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RideSearchRequest {
    pub start_location: String,
    pub end_location: String,
    pub preferred_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RideSearchUpdate {
    StartLocation(String),
    EndLocation(String),
    PreferredTime(String),
}

impl RideRecord for RideSearchRequest {
    type Update = RideSearchUpdate;

    const KIND: RideKind = RideKind::Search;

    fn apply(&mut self, update: RideSearchUpdate) {
        match update {
            RideSearchUpdate::StartLocation(value) => self.start_location = value,
            RideSearchUpdate::EndLocation(value) => self.end_location = value,
            RideSearchUpdate::PreferredTime(value) => self.preferred_time = value,
        }
    }

    fn insert_into(&self, store: &dyn RideStore) -> Result<(), StoreError> {
        store.insert_search(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RideOfferRequest {
    pub start_location: String,
    pub end_location: String,
    pub departure_time: String,
    /// `None` when the seat input did not contain a number; serialized as `null`.
    pub available_seats: Option<i32>,
}

impl Default for RideOfferRequest {
    fn default() -> Self {
        Self {
            start_location: String::new(),
            end_location: String::new(),
            departure_time: String::new(),
            available_seats: Some(DEFAULT_SEATS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RideOfferUpdate {
    StartLocation(String),
    EndLocation(String),
    DepartureTime(String),
    AvailableSeats(Option<i32>),
}

impl RideRecord for RideOfferRequest {
    type Update = RideOfferUpdate;

    const KIND: RideKind = RideKind::Offer;

    fn apply(&mut self, update: RideOfferUpdate) {
        match update {
            RideOfferUpdate::StartLocation(value) => self.start_location = value,
            RideOfferUpdate::EndLocation(value) => self.end_location = value,
            RideOfferUpdate::DepartureTime(value) => self.departure_time = value,
            RideOfferUpdate::AvailableSeats(value) => self.available_seats = value,
        }
    }

    fn insert_into(&self, store: &dyn RideStore) -> Result<(), StoreError> {
        store.insert_offer(self)
    }
}

/// Lenient integer parse of a seat input: optional leading whitespace and
/// sign, then as many digits as are present. Trailing garbage is ignored and
/// input without leading digits yields `None`. The result is not clamped.
pub fn parse_seats(input: &str) -> Option<i32> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).ok()
}

pub fn seats_in_intended_range(seats: Option<i32>) -> bool {
    matches!(seats, Some(n) if (MIN_SEATS..=MAX_SEATS).contains(&n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_updates_touch_only_their_field() {
        let mut draft = RideSearchRequest::default();
        draft.apply(RideSearchUpdate::StartLocation("Alexanderplatz".into()));
        draft.apply(RideSearchUpdate::PreferredTime("08:15".into()));
        assert_eq!(
            draft,
            RideSearchRequest {
                start_location: "Alexanderplatz".into(),
                end_location: String::new(),
                preferred_time: "08:15".into(),
            }
        );
    }

    #[test]
    fn offer_defaults_to_one_seat() {
        let draft = RideOfferRequest::default();
        assert_eq!(draft.available_seats, Some(1));
        assert!(draft.start_location.is_empty());
    }

    #[test]
    fn offer_serializes_with_snake_case_fields() {
        let draft = RideOfferRequest {
            start_location: "A".into(),
            end_location: "B".into(),
            departure_time: "09:00".into(),
            available_seats: Some(2),
        };
        let value = serde_json::to_value(&draft).expect("serialize");
        assert_eq!(
            value,
            serde_json::json!({
                "start_location": "A",
                "end_location": "B",
                "departure_time": "09:00",
                "available_seats": 2
            })
        );
    }

    #[test]
    fn non_numeric_seats_serialize_as_null() {
        let mut draft = RideOfferRequest::default();
        draft.apply(RideOfferUpdate::AvailableSeats(parse_seats("many")));
        let value = serde_json::to_value(&draft).expect("serialize");
        assert_eq!(value["available_seats"], serde_json::Value::Null);
    }

    #[test]
    fn parse_seats_is_lenient_and_unclamped() {
        assert_eq!(parse_seats("3"), Some(3));
        assert_eq!(parse_seats("  2 seats"), Some(2));
        assert_eq!(parse_seats("7"), Some(7));
        assert_eq!(parse_seats("-1"), Some(-1));
        assert_eq!(parse_seats(""), None);
        assert_eq!(parse_seats("x2"), None);
        assert_eq!(parse_seats("99999999999"), None);
    }

    #[test]
    fn intended_range_is_one_to_four() {
        assert!(seats_in_intended_range(Some(1)));
        assert!(seats_in_intended_range(Some(4)));
        assert!(!seats_in_intended_range(Some(0)));
        assert!(!seats_in_intended_range(Some(5)));
        assert!(!seats_in_intended_range(None));
    }
}
