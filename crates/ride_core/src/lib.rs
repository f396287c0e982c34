pub mod config;
pub mod connectivity;
pub mod dashboard;
pub mod error;
pub mod rides;
pub mod session;
pub mod store;
pub mod submission;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;
