//! Cross-page handoff of a finished search.
//!
//! A successful submit stores a `Handoff` and redirects to the results page
//! with its id in the URL. The id is also set as a cookie so a bare
//! `/results` still finds the latest search.

mod store;
mod token;

pub use store::HandoffStore;
pub use token::looks_like_token;

use crate::domain::{SearchCriteria, SearchResult};
use serde::{Deserialize, Serialize};

pub const HANDOFF_COOKIE: &str = "handoff";
pub const HANDOFF_PARAM: &str = "handoff";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Handoff {
    #[serde(rename = "searchResults")]
    pub results: SearchResult,
    #[serde(rename = "searchCriteria")]
    pub criteria: SearchCriteria,
}

impl Handoff {
    pub fn new(results: SearchResult, criteria: SearchCriteria) -> Self {
        Self { results, criteria }
    }
}
