//! General network reachability: one `GET` of a fixed, well-known URL.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::connectivity::ReachabilityProbe;
use crate::error::ProbeError;

#[derive(Debug, Clone)]
pub struct HttpReachabilityProbe {
    client: Client,
    url: String,
}

impl HttpReachabilityProbe {
    /// `timeout` of `None` lets a hung request block the caller indefinitely.
    pub fn new(url: &str, timeout: Option<Duration>) -> Result<Self, ProbeError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ProbeError::Client)?;
        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ReachabilityProbe for HttpReachabilityProbe {
    fn name(&self) -> &str {
        "network"
    }

    fn probe(&self) -> Result<(), ProbeError> {
        let response = self.client.get(&self.url).send()?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ProbeError::Status(status.as_u16()))
        }
    }
}
