//! Worker threads for blocking remote calls.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use ride_core::connectivity::{check_connectivity, CheckTicket, ConnectivityStatus, ReachabilityProbe};
use ride_core::error::RideError;
use ride_core::rides::{RideKind, RideRecord};
use ride_core::store::RideStore;
use ride_core::submission::{insert_draft, Acknowledgment};

/// A finished unit of remote work, tagged with the dashboard mount that
/// started it.
#[derive(Debug)]
pub struct WorkerMessage {
    pub mount: u64,
    pub outcome: WorkerOutcome,
}

#[derive(Debug)]
pub enum WorkerOutcome {
    CheckFinished {
        ticket: CheckTicket,
        status: ConnectivityStatus,
    },
    SearchSubmitted(Result<Acknowledgment, RideError>),
    OfferSubmitted(Result<Acknowledgment, RideError>),
}

pub(crate) fn spawn_check(
    sender: Sender<WorkerMessage>,
    mount: u64,
    ticket: CheckTicket,
    network: Arc<dyn ReachabilityProbe>,
    backend: Arc<dyn ReachabilityProbe>,
) {
    std::thread::spawn(move || {
        let status = check_connectivity(network.as_ref(), backend.as_ref());
        let _ = sender.send(WorkerMessage {
            mount,
            outcome: WorkerOutcome::CheckFinished { ticket, status },
        });
    });
}

pub(crate) fn spawn_insert<R: RideRecord>(
    sender: Sender<WorkerMessage>,
    mount: u64,
    store: Arc<dyn RideStore>,
    draft: R,
) {
    std::thread::spawn(move || {
        let result = insert_draft(store.as_ref(), &draft);
        let outcome = match R::KIND {
            RideKind::Search => WorkerOutcome::SearchSubmitted(result),
            RideKind::Offer => WorkerOutcome::OfferSubmitted(result),
        };
        let _ = sender.send(WorkerMessage { mount, outcome });
    });
}
