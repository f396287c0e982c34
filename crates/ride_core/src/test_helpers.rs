//! Test doubles for probes and stores.
//!
//! These count every call so tests can assert which remote operations were
//! attempted, not just what the gate concluded.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Mutex;

use crate::connectivity::ReachabilityProbe;
use crate::error::{ProbeError, StoreError};
use crate::rides::{RideOfferRequest, RideSearchRequest};
use crate::store::RideStore;

/// Probe that answers from a script. Once the script is exhausted the last
/// answer repeats.
pub struct ScriptedProbe {
    name: &'static str,
    outcomes: Mutex<VecDeque<bool>>,
    last: Mutex<bool>,
    calls: AtomicUsize,
}

impl ScriptedProbe {
    pub fn sequence(name: &'static str, outcomes: &[bool]) -> Self {
        Self {
            name,
            outcomes: Mutex::new(outcomes.iter().copied().collect()),
            last: Mutex::new(outcomes.last().copied().unwrap_or(true)),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn up(name: &'static str) -> Self {
        Self::sequence(name, &[true])
    }

    pub fn down(name: &'static str) -> Self {
        Self::sequence(name, &[false])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ReachabilityProbe for ScriptedProbe {
    fn name(&self) -> &str {
        self.name
    }

    fn probe(&self) -> Result<(), ProbeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self
            .outcomes
            .lock()
            .expect("probe script lock poisoned")
            .pop_front();
        let reachable = match next {
            Some(value) => value,
            None => *self.last.lock().expect("probe script lock poisoned"),
        };
        if reachable {
            Ok(())
        } else {
            Err(ProbeError::Unavailable(format!("{} scripted down", self.name)))
        }
    }
}

/// Probe that blocks until the test sends the outcome, for ordering
/// overlapping checks deterministically.
pub struct ChannelProbe {
    name: &'static str,
    receiver: Mutex<Receiver<bool>>,
    calls: AtomicUsize,
}

impl ChannelProbe {
    pub fn new(name: &'static str) -> (Self, Sender<bool>) {
        let (sender, receiver) = mpsc::channel();
        (
            Self {
                name,
                receiver: Mutex::new(receiver),
                calls: AtomicUsize::new(0),
            },
            sender,
        )
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ReachabilityProbe for ChannelProbe {
    fn name(&self) -> &str {
        self.name
    }

    fn probe(&self) -> Result<(), ProbeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let reachable = self
            .receiver
            .lock()
            .expect("probe channel lock poisoned")
            .recv()
            .unwrap_or(false);
        if reachable {
            Ok(())
        } else {
            Err(ProbeError::Unavailable(format!("{} released as down", self.name)))
        }
    }
}

/// In-memory store that records every insert attempt.
#[derive(Default)]
pub struct RecordingStore {
    searches: Mutex<Vec<RideSearchRequest>>,
    offers: Mutex<Vec<RideOfferRequest>>,
    failure: Mutex<Option<String>>,
    calls: AtomicUsize,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every insert fails with a simulated transport error.
    pub fn failing(message: &str) -> Self {
        let store = Self::default();
        store.set_failure(Some(message));
        store
    }

    pub fn set_failure(&self, message: Option<&str>) {
        *self.failure.lock().expect("store lock poisoned") = message.map(str::to_string);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn searches(&self) -> Vec<RideSearchRequest> {
        self.searches.lock().expect("store lock poisoned").clone()
    }

    pub fn offers(&self) -> Vec<RideOfferRequest> {
        self.offers.lock().expect("store lock poisoned").clone()
    }

    fn attempt(&self) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.failure.lock().expect("store lock poisoned").as_ref() {
            Some(message) => Err(StoreError::Rejected(message.clone())),
            None => Ok(()),
        }
    }
}

impl RideStore for RecordingStore {
    fn insert_search(&self, request: &RideSearchRequest) -> Result<(), StoreError> {
        self.attempt()?;
        self.searches
            .lock()
            .expect("store lock poisoned")
            .push(request.clone());
        Ok(())
    }

    fn insert_offer(&self, request: &RideOfferRequest) -> Result<(), StoreError> {
        self.attempt()?;
        self.offers
            .lock()
            .expect("store lock poisoned")
            .push(request.clone());
        Ok(())
    }
}
