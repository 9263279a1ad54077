// API client module: a small blocking HTTP client that creates records in
// a PocketBase collection. Kept synchronous; the seeder sends one request
// at a time.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;

use crate::room::Room;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8090";
pub const DEFAULT_COLLECTION: &str = "rooms";

/// Result of a single create request that reached the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    /// Any status other than 200, with the response body as text.
    Rejected { status: u16, body: String },
}

impl CreateOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, CreateOutcome::Created)
    }
}

/// Something rooms can be created in. The upload loop only talks to this
/// trait; `ApiClient` is the real implementation.
pub trait RoomSink {
    /// Send one room. `Err` means the request never got a response
    /// (connection refused, timeout, ...); a non-200 answer is `Ok(Rejected)`.
    fn create_room(&self, room: &Room) -> Result<CreateOutcome>;
}

/// Blocking client bound to one collection's records endpoint.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    records_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, collection: &str) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        let records_url = format!(
            "{}/api/collections/{}/records",
            base_url.trim_end_matches('/'),
            collection
        );
        Ok(ApiClient { client, records_url })
    }

    /// Create an ApiClient configured from `POCKETBASE_URL` and
    /// `POCKETBASE_COLLECTION`, falling back to a local PocketBase and the
    /// `rooms` collection.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("POCKETBASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let collection =
            std::env::var("POCKETBASE_COLLECTION").unwrap_or_else(|_| DEFAULT_COLLECTION.into());
        Self::new(&base_url, &collection)
    }

    pub fn records_url(&self) -> &str {
        &self.records_url
    }
}

impl RoomSink for ApiClient {
    fn create_room(&self, room: &Room) -> Result<CreateOutcome> {
        let res = self
            .client
            .post(&self.records_url)
            .json(room)
            .send()
            .context("Failed to send create record request")?;
        let status = res.status();
        // PocketBase answers a successful create with 200; anything else,
        // other 2xx included, counts as a failure.
        if status == StatusCode::OK {
            return Ok(CreateOutcome::Created);
        }
        let body = res.text().context("Failed to read error response body")?;
        Ok(CreateOutcome::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
