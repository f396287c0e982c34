//! State owned by one dashboard: its connectivity gate, its draft, and the
//! outcome of the last action.
//!
//! Remote work is split into `begin_*` / `finish_*` pairs so a UI can run the
//! blocking part on a worker thread and apply the result later. The `run_*`
//! and `submit` helpers do both halves on the current thread.

use crate::connectivity::{
    check_connectivity, CheckTicket, ConnectivityGate, ConnectivityStatus, GateView,
    ReachabilityProbe,
};
use crate::error::RideError;
use crate::rides::{RideOfferRequest, RideRecord, RideSearchRequest};
use crate::store::RideStore;
use crate::submission::{ensure_connected, insert_draft, Acknowledgment};

pub type RiderDashboardState = DashboardState<RideSearchRequest>;
pub type DriverDashboardState = DashboardState<RideOfferRequest>;

#[derive(Debug)]
pub struct DashboardState<R: RideRecord> {
    gate: ConnectivityGate,
    draft: R,
    error: Option<RideError>,
    acknowledgment: Option<Acknowledgment>,
    submitting: bool,
}

impl<R: RideRecord> Default for DashboardState<R> {
    fn default() -> Self {
        Self {
            gate: ConnectivityGate::new(),
            draft: R::default(),
            error: None,
            acknowledgment: None,
            submitting: false,
        }
    }
}

impl<R: RideRecord> DashboardState<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gate(&self) -> &ConnectivityGate {
        &self.gate
    }

    pub fn view(&self) -> GateView {
        self.gate.view()
    }

    pub fn draft(&self) -> &R {
        &self.draft
    }

    pub fn update(&mut self, update: R::Update) {
        self.draft.apply(update);
    }

    pub fn error(&self) -> Option<&RideError> {
        self.error.as_ref()
    }

    pub fn error_message(&self) -> Option<&'static str> {
        self.error.as_ref().map(RideError::user_message)
    }

    pub fn acknowledgment(&self) -> Option<Acknowledgment> {
        self.acknowledgment
    }

    /// Clear the acknowledgment once the user has dismissed it.
    pub fn dismiss_acknowledgment(&mut self) {
        self.acknowledgment = None;
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_busy(&self) -> bool {
        self.submitting || self.gate.is_checking()
    }

    pub fn begin_check(&mut self) -> CheckTicket {
        self.error = None;
        self.gate.begin_check()
    }

    pub fn finish_check(&mut self, ticket: CheckTicket, status: ConnectivityStatus) {
        self.gate.resolve(ticket, status);
        self.error = status.error();
    }

    pub fn run_check(
        &mut self,
        network: &dyn ReachabilityProbe,
        backend: &dyn ReachabilityProbe,
    ) -> ConnectivityStatus {
        let ticket = self.begin_check();
        let status = check_connectivity(network, backend);
        self.finish_check(ticket, status);
        status
    }

    /// Returns a copy of the draft to send, or the refusal when the gate is
    /// not connected. A refusal is recorded as the current error.
    pub fn begin_submit(&mut self) -> Result<R, RideError> {
        if let Err(error) = ensure_connected(self.gate.status()) {
            tracing::warn!(
                kind = R::KIND.noun(),
                status = ?self.gate.status(),
                "submission refused, gate not connected"
            );
            self.error = Some(error.clone());
            return Err(error);
        }
        self.submitting = true;
        self.error = None;
        self.acknowledgment = None;
        Ok(self.draft.clone())
    }

    /// Record the insert outcome. The draft is left as it is either way.
    pub fn finish_submit(&mut self, result: Result<Acknowledgment, RideError>) {
        self.submitting = false;
        match result {
            Ok(acknowledgment) => {
                self.acknowledgment = Some(acknowledgment);
                self.error = None;
            }
            Err(error) => {
                self.acknowledgment = None;
                self.error = Some(error);
            }
        }
    }

    pub fn submit(&mut self, store: &dyn RideStore) -> Result<Acknowledgment, RideError> {
        let draft = self.begin_submit()?;
        let result = insert_draft(store, &draft);
        self.finish_submit(result.clone());
        result
    }
}
