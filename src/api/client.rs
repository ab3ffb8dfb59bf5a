// client.rs
use crate::api::{FetchError, NeighborhoodBackend};
use crate::domain::{AmenityType, RentType, SearchCriteria, SearchResult};
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

const USER_AGENT: &str = concat!("neighborhood-matchmaker/", env!("CARGO_PKG_VERSION"));

const AMENITIES: &str = "amenities";
const NEIGHBORHOODS: &str = "neighborhoods";
const RENT_TYPES: &str = "rent-types";
const SEARCH: &str = "search-neighborhoods";

/// Blocking HTTP client for the matchmaking backend.
pub struct BackendClient {
    client: Client,
    base_url: Url,
}

impl BackendClient {
    /// `timeout: None` means a hung backend blocks the calling request.
    pub fn new(base_url: Url, timeout: Option<Duration>) -> Result<Self, FetchError> {
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl(base_url.to_string()));
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Network {
                endpoint: "client",
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: with_trailing_slash(base_url),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &'static str) -> Result<Url, FetchError> {
        self.base_url
            .join(path)
            .map_err(|e| FetchError::InvalidUrl(format!("{}{path}: {e}", self.base_url)))
    }

    fn get_json<T: DeserializeOwned>(&self, endpoint: &'static str) -> Result<T, FetchError> {
        let url = self.endpoint(endpoint)?;
        debug!(%url, "GET backend");

        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::Network {
                endpoint,
                message: e.to_string(),
            })?;

        read_json(endpoint, resp)
    }
}

impl NeighborhoodBackend for BackendClient {
    fn list_amenities(&self) -> Result<Vec<AmenityType>, FetchError> {
        self.get_json(AMENITIES)
    }

    fn list_neighborhoods(&self) -> Result<Vec<String>, FetchError> {
        self.get_json(NEIGHBORHOODS)
    }

    fn list_rent_types(&self) -> Result<Vec<RentType>, FetchError> {
        self.get_json(RENT_TYPES)
    }

    fn search_neighborhoods(&self, criteria: &SearchCriteria) -> Result<SearchResult, FetchError> {
        let url = self.endpoint(SEARCH)?;
        debug!(%url, budget = criteria.budget, "POST backend search");

        let resp = self
            .client
            .post(url)
            .json(criteria)
            .send()
            .map_err(|e| FetchError::Network {
                endpoint: SEARCH,
                message: e.to_string(),
            })?;

        read_json(SEARCH, resp)
    }
}

/// Status first, then the body. The body is read as text so JSON objects are
/// parsed in document order.
fn read_json<T: DeserializeOwned>(endpoint: &'static str, resp: Response) -> Result<T, FetchError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            endpoint,
            status: status.as_u16(),
        });
    }

    let text = resp.text().map_err(|e| FetchError::Network {
        endpoint,
        message: e.to_string(),
    })?;

    debug!(endpoint, status = status.as_u16(), bytes = text.len(), "backend responded");

    serde_json::from_str(&text).map_err(|e| FetchError::Decode {
        endpoint,
        message: e.to_string(),
    })
}

/// `Url::join` replaces the last path segment unless the base ends in `/`.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
