//! UI modules for the RideConnect front end.

pub mod app_shell;
pub mod components;
pub mod constants;
pub mod dashboard;
pub mod role_selection;
