//! Blocking client for a PostgREST-style endpoint (`<base>/rest/v1/<table>`).
//!
//! Every request carries the access key both as the `apikey` header and as a
//! bearer token. Inserts post a one-element JSON array; the reachability
//! check is a `HEAD` count query that reads no rows.

use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::Serialize;

use crate::config::StoreConfig;
use crate::connectivity::ReachabilityProbe;
use crate::error::{ProbeError, StoreError};
use crate::rides::{RideOfferRequest, RideSearchRequest, RIDE_OFFERS_TABLE, RIDE_SEARCHES_TABLE};
use crate::store::RideStore;

const REST_PATH: &str = "rest/v1";
const MAX_ERROR_BODY_CHARS: usize = 512;

#[derive(Debug, Clone)]
pub struct RestRideStore {
    client: Client,
    base_url: String,
    access_key: String,
}

impl RestRideStore {
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(StoreError::Client)?;
        Ok(Self {
            client,
            base_url: config.backend_url.trim_end_matches('/').to_string(),
            access_key: config.access_key.clone(),
        })
    }

    pub fn table_url(&self, table: &str) -> String {
        format!("{}/{}/{}", self.base_url, REST_PATH, table)
    }

    /// Insert one row into `table`. No idempotency key is attached.
    pub fn insert<T>(&self, table: &str, record: &T) -> Result<(), StoreError>
    where
        T: Serialize + ?Sized,
    {
        tracing::debug!(table, "inserting row");
        let response = self
            .authorized(self.client.post(self.table_url(table)))
            .header("Prefer", "return=minimal")
            .json(&[record])
            .send()?;
        ensure_success(response)
    }

    /// Exact-count query without a body; only the status matters.
    pub fn count_rows(&self, table: &str) -> Result<(), StoreError> {
        let response = self
            .authorized(self.client.head(self.table_url(table)))
            .query(&[("select", "count")])
            .header("Prefer", "count=exact")
            .send()?;
        ensure_success(response)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.access_key)
            .bearer_auth(&self.access_key)
    }
}

impl RideStore for RestRideStore {
    fn insert_search(&self, request: &RideSearchRequest) -> Result<(), StoreError> {
        self.insert(RIDE_SEARCHES_TABLE, request)
    }

    fn insert_offer(&self, request: &RideOfferRequest) -> Result<(), StoreError> {
        self.insert(RIDE_OFFERS_TABLE, request)
    }
}

impl ReachabilityProbe for RestRideStore {
    fn name(&self) -> &str {
        "backend"
    }

    fn probe(&self) -> Result<(), ProbeError> {
        self.count_rows(RIDE_OFFERS_TABLE).map_err(ProbeError::from)
    }
}

fn ensure_success(response: Response) -> Result<(), StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let body = response.text().unwrap_or_default();
    Err(StoreError::Status {
        status: status.as_u16(),
        body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
    })
}
