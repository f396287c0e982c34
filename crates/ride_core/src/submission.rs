//! Submission flow: one insert of a draft, allowed only behind a connected
//! gate.

use crate::connectivity::ConnectivityStatus;
use crate::error::RideError;
use crate::rides::{RideKind, RideRecord};
use crate::store::RideStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Acknowledgment {
    pub kind: RideKind,
}

impl Acknowledgment {
    pub fn message(&self) -> &'static str {
        self.kind.success_message()
    }
}

/// Refuse submission unless the gate last resolved to `Connected`.
pub fn ensure_connected(status: Option<ConnectivityStatus>) -> Result<(), RideError> {
    match status {
        Some(ConnectivityStatus::Connected) => Ok(()),
        _ => Err(RideError::BackendUnreachable),
    }
}

/// Write `draft` to the store as one row. The draft is only borrowed; callers
/// keep it unchanged for resubmission whatever the outcome.
pub fn insert_draft<R: RideRecord>(
    store: &dyn RideStore,
    draft: &R,
) -> Result<Acknowledgment, RideError> {
    match draft.insert_into(store) {
        Ok(()) => {
            tracing::info!(table = R::KIND.table(), "{} saved", R::KIND.noun());
            Ok(Acknowledgment { kind: R::KIND })
        }
        Err(error) => {
            tracing::error!(table = R::KIND.table(), %error, "error saving {}", R::KIND.noun());
            Err(RideError::WriteFailed {
                kind: R::KIND,
                cause: error.to_string(),
            })
        }
    }
}

/// Gate check followed by the insert. No remote call is made when the gate
/// is not connected.
pub fn submit<R: RideRecord>(
    status: Option<ConnectivityStatus>,
    store: &dyn RideStore,
    draft: &R,
) -> Result<Acknowledgment, RideError> {
    if let Err(error) = ensure_connected(status) {
        tracing::warn!(kind = R::KIND.noun(), ?status, "submission refused, gate not connected");
        return Err(error);
    }
    insert_draft(store, draft)
}
