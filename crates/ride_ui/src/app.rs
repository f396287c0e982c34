//! Application state for the RideConnect UI.
//!
//! The app owns the session and at most one mounted dashboard. Remote work
//! (connectivity checks, inserts) runs on worker threads; results come back
//! over a channel and are applied in arrival order by
//! [`RideUiApp::drain_worker_results`], once per frame.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;

use ride_core::config::StoreConfig;
use ride_core::connectivity::{ConnectivityStatus, HttpReachabilityProbe, ReachabilityProbe};
use ride_core::dashboard::{DriverDashboardState, RiderDashboardState};
use ride_core::error::{ProbeError, RideError};
use ride_core::rides::{RideOfferRequest, RideSearchRequest, DEFAULT_SEATS};
use ride_core::session::{Role, Session};
use ride_core::store::{RestRideStore, RideStore};

mod worker;


pub use worker::{WorkerMessage, WorkerOutcome};

/// Remote collaborators shared with worker threads.
#[derive(Clone)]
pub struct Services {
    pub network: Arc<dyn ReachabilityProbe>,
    pub backend: Arc<dyn ReachabilityProbe>,
    pub store: Arc<dyn RideStore>,
}

impl Services {
    pub fn from_config(config: &StoreConfig) -> Result<Self, ProbeError> {
        let network = HttpReachabilityProbe::new(&config.probe_url, config.request_timeout)?;
        let rest = Arc::new(RestRideStore::new(config)?);
        Ok(Self {
            network: Arc::new(network),
            backend: rest.clone(),
            store: rest,
        })
    }
}

pub struct RideUiApp {
    pub session: Session,
    pub config: StoreConfig,
    pub rider: Option<RiderDashboardState>,
    pub driver: Option<DriverDashboardState>,
    /// Raw text of the seat input; parsed into the draft on every edit.
    pub seats_input: String,
    services: Option<Services>,
    /// Identifies the mounted dashboard; results for older mounts are dropped.
    mount: u64,
    sender: Sender<WorkerMessage>,
    receiver: Receiver<WorkerMessage>,
}

impl RideUiApp {
    pub fn new(config: StoreConfig, services: Option<Services>) -> Self {
        let (sender, receiver) = std::sync::mpsc::channel();
        Self {
            session: Session::new(),
            config,
            rider: None,
            driver: None,
            seats_input: DEFAULT_SEATS.to_string(),
            services,
            mount: 0,
            sender,
            receiver,
        }
    }

    pub fn from_config(config: StoreConfig) -> Self {
        let services = match Services::from_config(&config) {
            Ok(services) => Some(services),
            Err(error) => {
                tracing::error!(%error, "failed to build HTTP clients");
                None
            }
        };
        Self::new(config, services)
    }

    pub fn shows_setup_guide(&self) -> bool {
        self.config.is_misconfigured()
    }

    pub fn select_role(&mut self, role: Role) {
        self.session.select_role(role);
        self.mount_dashboard(role);
    }

    pub fn switch_mode(&mut self) {
        self.session.switch_mode();
        self.unmount_dashboards();
    }

    pub fn logout(&mut self) {
        self.session.logout();
        self.unmount_dashboards();
    }

    /// Fresh dashboard state, then the on-mount connectivity check.
    fn mount_dashboard(&mut self, role: Role) {
        self.unmount_dashboards();
        match role {
            Role::Rider => self.rider = Some(RiderDashboardState::new()),
            Role::Driver => self.driver = Some(DriverDashboardState::new()),
        }
        tracing::debug!(mount = self.mount, role = role.label(), "dashboard mounted");
        if self.shows_setup_guide() {
            return;
        }
        self.retry_connection();
    }

    fn unmount_dashboards(&mut self) {
        self.mount += 1;
        self.rider = None;
        self.driver = None;
        self.seats_input = DEFAULT_SEATS.to_string();
    }

    /// Run the full two-step check for the mounted dashboard.
    pub fn retry_connection(&mut self) {
        let ticket = if let Some(state) = self.rider.as_mut() {
            state.begin_check()
        } else if let Some(state) = self.driver.as_mut() {
            state.begin_check()
        } else {
            return;
        };

        match &self.services {
            Some(services) => worker::spawn_check(
                self.sender.clone(),
                self.mount,
                ticket,
                services.network.clone(),
                services.backend.clone(),
            ),
            None => {
                tracing::warn!("no HTTP clients available, reporting network down");
                self.apply(WorkerMessage {
                    mount: self.mount,
                    outcome: WorkerOutcome::CheckFinished {
                        ticket,
                        status: ConnectivityStatus::NetworkDown,
                    },
                });
            }
        }
    }

    /// Submit the mounted dashboard's draft if its gate is connected.
    pub fn submit(&mut self) {
        let mount = self.mount;
        let store = self.services.as_ref().map(|services| services.store.clone());
        if let Some(state) = self.rider.as_mut() {
            let Ok(draft) = state.begin_submit() else {
                return;
            };
            match store {
                Some(store) => worker::spawn_insert::<RideSearchRequest>(
                    self.sender.clone(),
                    mount,
                    store,
                    draft,
                ),
                None => state.finish_submit(Err(RideError::BackendUnreachable)),
            }
        } else if let Some(state) = self.driver.as_mut() {
            let Ok(draft) = state.begin_submit() else {
                return;
            };
            match store {
                Some(store) => worker::spawn_insert::<RideOfferRequest>(
                    self.sender.clone(),
                    mount,
                    store,
                    draft,
                ),
                None => state.finish_submit(Err(RideError::BackendUnreachable)),
            }
        }
    }

    pub fn dismiss_acknowledgment(&mut self) {
        if let Some(state) = self.rider.as_mut() {
            state.dismiss_acknowledgment();
        }
        if let Some(state) = self.driver.as_mut() {
            state.dismiss_acknowledgment();
        }
    }

    pub fn acknowledgment_message(&self) -> Option<&'static str> {
        let rider = self.rider.as_ref().and_then(|state| state.acknowledgment());
        let driver = self.driver.as_ref().and_then(|state| state.acknowledgment());
        rider.or(driver).map(|ack| ack.message())
    }

    /// Whether any remote work for the mounted dashboard is outstanding.
    pub fn is_waiting(&self) -> bool {
        self.rider.as_ref().is_some_and(|state| state.is_busy())
            || self.driver.as_ref().is_some_and(|state| state.is_busy())
    }

    pub fn drain_worker_results(&mut self) {
        while let Ok(message) = self.receiver.try_recv() {
            self.apply(message);
        }
    }

    pub(crate) fn apply(&mut self, message: WorkerMessage) {
        if message.mount != self.mount {
            tracing::debug!(
                mount = message.mount,
                current = self.mount,
                "dropping result for an unmounted dashboard"
            );
            return;
        }
        match message.outcome {
            WorkerOutcome::CheckFinished { ticket, status } => {
                if let Some(state) = self.rider.as_mut() {
                    state.finish_check(ticket, status);
                } else if let Some(state) = self.driver.as_mut() {
                    state.finish_check(ticket, status);
                }
            }
            WorkerOutcome::SearchSubmitted(result) => {
                if let Some(state) = self.rider.as_mut() {
                    state.finish_submit(result);
                }
            }
            WorkerOutcome::OfferSubmitted(result) => {
                if let Some(state) = self.driver.as_mut() {
                    state.finish_submit(result);
                }
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn current_mount(&self) -> u64 {
        self.mount
    }

    /// Block until one worker result arrives and apply it.
    #[cfg(test)]
    pub(crate) fn wait_for_worker(&mut self) -> bool {
        match self.receiver.recv_timeout(std::time::Duration::from_secs(5)) {
            Ok(message) => {
                self.apply(message);
                true
            }
            Err(_) => false,
        }
    }
}
