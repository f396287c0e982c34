//! Connectivity gate: two sequential reachability checks that decide whether
//! a dashboard may submit.
//!
//! The check runs the network probe first and the backend probe only if the
//! network is reachable. The outcome is a single [`ConnectivityStatus`], so a
//! backend result can never exist without a reachable network. Which view a
//! dashboard shows is a pure function of the gate state ([`GateView`]).
//!
//! Checks are identified by a [`CheckTicket`]. Resolving a ticket overwrites
//! the state unconditionally: when two retries overlap, the gate reflects the
//! check that finished last, not the one that was started last.

pub mod http_probe;

use crate::error::{ProbeError, RideError};

pub use http_probe::HttpReachabilityProbe;

/// One remote reachability check. Implementations must be `Send + Sync` so
/// they can be moved onto worker threads behind an `Arc`.
pub trait ReachabilityProbe: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &str;

    fn probe(&self) -> Result<(), ProbeError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectivityStatus {
    /// Network probe failed; the backend probe was skipped.
    NetworkDown,
    BackendDown,
    Connected,
}

impl ConnectivityStatus {
    /// Combine two probe flags. A down network wins regardless of `backend`.
    pub fn from_flags(network: bool, backend: bool) -> Self {
        match (network, backend) {
            (false, _) => ConnectivityStatus::NetworkDown,
            (true, false) => ConnectivityStatus::BackendDown,
            (true, true) => ConnectivityStatus::Connected,
        }
    }

    pub fn network_reachable(self) -> bool {
        !matches!(self, ConnectivityStatus::NetworkDown)
    }

    /// `false` both when the backend probe failed and when it was skipped.
    pub fn backend_reachable(self) -> bool {
        matches!(self, ConnectivityStatus::Connected)
    }

    pub fn error(self) -> Option<RideError> {
        match self {
            ConnectivityStatus::NetworkDown => Some(RideError::NetworkUnreachable),
            ConnectivityStatus::BackendDown => Some(RideError::BackendUnreachable),
            ConnectivityStatus::Connected => None,
        }
    }
}

/// Run the two-step check. Blocks for as long as the probes do.
pub fn check_connectivity(
    network: &dyn ReachabilityProbe,
    backend: &dyn ReachabilityProbe,
) -> ConnectivityStatus {
    if let Err(error) = network.probe() {
        tracing::warn!(probe = network.name(), %error, "network reachability probe failed");
        return ConnectivityStatus::NetworkDown;
    }
    tracing::debug!(probe = network.name(), "network reachable");

    if let Err(error) = backend.probe() {
        tracing::error!(probe = backend.name(), %error, "backend reachability probe failed");
        return ConnectivityStatus::BackendDown;
    }
    tracing::info!(probe = backend.name(), "backend connection successful");
    ConnectivityStatus::Connected
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CheckTicket(u64);

impl CheckTicket {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Per-dashboard gate state. `status` is `None` until the first check
/// resolves; later checks leave the previous status visible while in flight.
#[derive(Debug, Default)]
pub struct ConnectivityGate {
    status: Option<ConnectivityStatus>,
    next_ticket: u64,
    in_flight: usize,
    resolved_by: Option<CheckTicket>,
}

impl ConnectivityGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> Option<ConnectivityStatus> {
        self.status
    }

    pub fn view(&self) -> GateView {
        GateView::from_status(self.status)
    }

    pub fn is_connected(&self) -> bool {
        self.status == Some(ConnectivityStatus::Connected)
    }

    pub fn is_checking(&self) -> bool {
        self.in_flight > 0
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Ticket of the check whose result is currently shown.
    pub fn resolved_by(&self) -> Option<CheckTicket> {
        self.resolved_by
    }

    /// Register a new check. Does not guard against one already in flight.
    pub fn begin_check(&mut self) -> CheckTicket {
        let ticket = CheckTicket(self.next_ticket);
        self.next_ticket += 1;
        self.in_flight += 1;
        tracing::debug!(ticket = ticket.0, in_flight = self.in_flight, "connectivity check started");
        ticket
    }

    pub fn resolve(&mut self, ticket: CheckTicket, status: ConnectivityStatus) {
        self.in_flight = self.in_flight.saturating_sub(1);
        if let Some(previous) = self.resolved_by {
            if previous > ticket {
                tracing::debug!(
                    ticket = ticket.0,
                    previous = previous.0,
                    "older connectivity check resolved after a newer one"
                );
            }
        }
        self.status = Some(status);
        self.resolved_by = Some(ticket);
    }

    /// Begin, run and resolve a check on the current thread.
    pub fn run(
        &mut self,
        network: &dyn ReachabilityProbe,
        backend: &dyn ReachabilityProbe,
    ) -> ConnectivityStatus {
        let ticket = self.begin_check();
        let status = check_connectivity(network, backend);
        self.resolve(ticket, status);
        status
    }
}

/// What a dashboard renders for a given gate state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateView {
    Checking,
    NetworkDown,
    BackendDown,
    Connected,
}

impl GateView {
    pub fn from_status(status: Option<ConnectivityStatus>) -> Self {
        match status {
            None => GateView::Checking,
            Some(ConnectivityStatus::NetworkDown) => GateView::NetworkDown,
            Some(ConnectivityStatus::BackendDown) => GateView::BackendDown,
            Some(ConnectivityStatus::Connected) => GateView::Connected,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            GateView::Checking => "Checking Connection...",
            GateView::NetworkDown => "No Internet Connection",
            GateView::BackendDown => "Unable to Connect to Database",
            GateView::Connected => "Connected",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            GateView::Checking => "Please wait while we check the connection to our servers.",
            GateView::NetworkDown => "Please check your network settings and try again.",
            GateView::BackendDown => {
                "We're having trouble connecting to our servers. Please try again later."
            }
            GateView::Connected => "Network and backend are reachable.",
        }
    }

    pub fn offers_retry(self) -> bool {
        matches!(self, GateView::NetworkDown | GateView::BackendDown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_to_status() {
        assert_eq!(
            ConnectivityStatus::from_flags(false, false),
            ConnectivityStatus::NetworkDown
        );
        assert_eq!(
            ConnectivityStatus::from_flags(false, true),
            ConnectivityStatus::NetworkDown
        );
        assert_eq!(
            ConnectivityStatus::from_flags(true, false),
            ConnectivityStatus::BackendDown
        );
        assert_eq!(
            ConnectivityStatus::from_flags(true, true),
            ConnectivityStatus::Connected
        );
    }

    #[test]
    fn network_down_reports_backend_unreachable() {
        let status = ConnectivityStatus::NetworkDown;
        assert!(!status.network_reachable());
        assert!(!status.backend_reachable());
    }

    #[test]
    fn only_down_views_offer_retry() {
        assert!(!GateView::Checking.offers_retry());
        assert!(GateView::NetworkDown.offers_retry());
        assert!(GateView::BackendDown.offers_retry());
        assert!(!GateView::Connected.offers_retry());
    }

    #[test]
    fn tickets_are_monotonic() {
        let mut gate = ConnectivityGate::new();
        let first = gate.begin_check();
        let second = gate.begin_check();
        assert!(second > first);
        assert_eq!(gate.in_flight(), 2);
        gate.resolve(second, ConnectivityStatus::Connected);
        gate.resolve(first, ConnectivityStatus::BackendDown);
        assert_eq!(gate.in_flight(), 0);
        assert_eq!(gate.resolved_by(), Some(first));
        assert_eq!(gate.view(), GateView::BackendDown);
    }
}
