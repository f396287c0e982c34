//! Remote store abstraction: two append-only collections, one insert each.
//!
//! - **`RestRideStore`**: PostgREST-style HTTP endpoint (Supabase `rest/v1`).
//! - Test doubles live in [`crate::test_helpers`].

pub mod rest;

use crate::error::StoreError;
use crate::rides::{RideOfferRequest, RideSearchRequest};

pub use rest::RestRideStore;

/// Insert-only access to the ride collections. Implementations must be
/// `Send + Sync` so a store can be shared with worker threads.
pub trait RideStore: Send + Sync {
    fn insert_search(&self, request: &RideSearchRequest) -> Result<(), StoreError>;

    fn insert_offer(&self, request: &RideOfferRequest) -> Result<(), StoreError>;
}
