mod client;
mod fetch_error;

pub use client::BackendClient;
pub use fetch_error::FetchError;

use crate::domain::{AmenityType, RentType, SearchCriteria, SearchResult};

/// Everything the UI needs from the matchmaking backend.
///
/// Each call is one request with no retry and no caching; callers decide how
/// a failure degrades the page.
pub trait NeighborhoodBackend: Send + Sync {
    fn list_amenities(&self) -> Result<Vec<AmenityType>, FetchError>;

    fn list_neighborhoods(&self) -> Result<Vec<String>, FetchError>;

    fn list_rent_types(&self) -> Result<Vec<RentType>, FetchError>;

    fn search_neighborhoods(&self, criteria: &SearchCriteria) -> Result<SearchResult, FetchError>;
}
