//! Error taxonomy shared by the connectivity gate, the store client and the
//! submission flow.
//!
//! Every [`RideError`] maps to one short static string for the user. The
//! underlying cause travels in the error value only so it can be logged.

use thiserror::Error;

use crate::rides::RideKind;

pub const NETWORK_UNREACHABLE_MESSAGE: &str =
    "No internet connection. Please check your network settings.";
pub const BACKEND_UNREACHABLE_MESSAGE: &str =
    "Unable to connect to the database. Please try again later.";
pub const MISCONFIGURED_MESSAGE: &str =
    "Backend environment variables are not set. See the setup guide.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RideError {
    #[error("network unreachable")]
    NetworkUnreachable,
    #[error("backend unreachable")]
    BackendUnreachable,
    #[error("failed to save {}: {cause}", .kind.noun())]
    WriteFailed { kind: RideKind, cause: String },
    #[error("environment misconfigured, missing {}", .missing.join(", "))]
    MisconfiguredEnvironment { missing: Vec<&'static str> },
}

impl RideError {
    /// The message shown to the user. Never includes the cause.
    pub fn user_message(&self) -> &'static str {
        match self {
            RideError::NetworkUnreachable => NETWORK_UNREACHABLE_MESSAGE,
            RideError::BackendUnreachable => BACKEND_UNREACHABLE_MESSAGE,
            RideError::WriteFailed { kind, .. } => kind.failure_message(),
            RideError::MisconfiguredEnvironment { .. } => MISCONFIGURED_MESSAGE,
        }
    }
}

/// Failures talking to the remote store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("store responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("{0}")]
    Rejected(String),
}

/// Failures of a single reachability probe. The gate collapses all of them to
/// "unreachable".
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("{0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
    #[error("failed to load {path}: {source}")]
    EnvFile {
        path: String,
        #[source]
        source: dotenvy::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_failure_message_hides_cause() {
        let error = RideError::WriteFailed {
            kind: RideKind::Offer,
            cause: "connection reset by peer".to_string(),
        };
        assert_eq!(
            error.user_message(),
            "Failed to save ride offer. Please try again."
        );
        assert!(error.to_string().contains("connection reset by peer"));
    }

    #[test]
    fn misconfiguration_lists_missing_variables_in_display_only() {
        let error = RideError::MisconfiguredEnvironment {
            missing: vec!["SUPABASE_URL", "SUPABASE_ANON_KEY"],
        };
        assert_eq!(
            error.to_string(),
            "environment misconfigured, missing SUPABASE_URL, SUPABASE_ANON_KEY"
        );
        assert!(!error.user_message().contains("SUPABASE_URL"));
    }
}
