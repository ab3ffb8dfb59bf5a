use crate::api::{FetchError, NeighborhoodBackend};
use crate::domain::{
    AmenityCounts, AmenityType, Coordinates, NeighborhoodResult, RentType, SearchCriteria,
    SearchResult,
};
use crate::handoff::HandoffStore;
use crate::state::AppState;
use astra::{Body, Request, Response};
use http::Method;
use serde_json::{json, Map};
use std::io::Read;
use std::sync::{Arc, Mutex};

/// In-process stand-in for the matchmaking backend. Statuses stand in for
/// failed calls; every search body is recorded.
pub struct FakeBackend {
    pub neighborhoods: Result<Vec<String>, u16>,
    pub search: Result<SearchResult, u16>,
    pub searches: Mutex<Vec<SearchCriteria>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            neighborhoods: Ok(vec![
                "Plateau".to_string(),
                "Mile End".to_string(),
                "Verdun".to_string(),
            ]),
            search: Ok(sample_result(5)),
            searches: Mutex::new(Vec::new()),
        }
    }

    pub fn with_neighborhood_status(mut self, status: u16) -> Self {
        self.neighborhoods = Err(status);
        self
    }

    pub fn with_search_status(mut self, status: u16) -> Self {
        self.search = Err(status);
        self
    }

    pub fn with_search_result(mut self, result: SearchResult) -> Self {
        self.search = Ok(result);
        self
    }

    pub fn recorded_searches(&self) -> Vec<SearchCriteria> {
        self.searches.lock().unwrap().clone()
    }
}

impl NeighborhoodBackend for FakeBackend {
    fn list_amenities(&self) -> Result<Vec<AmenityType>, FetchError> {
        Ok(AmenityType::ALL.to_vec())
    }

    fn list_neighborhoods(&self) -> Result<Vec<String>, FetchError> {
        self.neighborhoods
            .clone()
            .map_err(|status| FetchError::Status {
                endpoint: "neighborhoods",
                status,
            })
    }

    fn list_rent_types(&self) -> Result<Vec<RentType>, FetchError> {
        Ok(RentType::ALL.to_vec())
    }

    fn search_neighborhoods(&self, criteria: &SearchCriteria) -> Result<SearchResult, FetchError> {
        self.searches.lock().unwrap().push(criteria.clone());
        self.search.clone().map_err(|status| FetchError::Status {
            endpoint: "search-neighborhoods",
            status,
        })
    }
}

const NAMES: [&str; 6] = [
    "Mile End",
    "Plateau",
    "Verdun",
    "Rosemont",
    "Old Montreal",
    "Saint-Henri",
];

/// `n` neighborhoods ranked best first, with distinct names while they last.
pub fn sample_result(n: usize) -> SearchResult {
    let neighborhoods = (0..n)
        .map(|i| NeighborhoodResult {
            id: i as i64 + 1,
            name: NAMES
                .get(i)
                .map(|s| s.to_string())
                .unwrap_or_else(|| format!("Neighborhood {}", i + 1)),
            amenity_counts: [
                (AmenityType::Cafe, 12),
                (AmenityType::Park, 7),
                (AmenityType::Transit, 7),
                (AmenityType::Gym, 2),
                (AmenityType::Library, 1),
            ]
            .into_iter()
            .collect::<AmenityCounts>(),
            total_amenities: 29,
            commute_time: if i == 0 { Some(18) } else { None },
            score: 95.0 - (i as f64) * 12.0,
            coordinates: Coordinates {
                lat: 45.52,
                lng: -73.58,
            },
        })
        .collect();

    let mut search_criteria = Map::new();
    search_criteria.insert("budget".into(), json!(1500));

    SearchResult {
        neighborhoods,
        total_results: n as i64,
        search_criteria,
    }
}

pub fn app_state(backend: Arc<FakeBackend>) -> AppState {
    AppState::new(
        backend,
        HandoffStore::new(16, chrono::Duration::minutes(10)),
        "Montreal",
    )
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get_with_cookie(uri: &str, cookie: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("Cookie", cookie)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, body: &str) -> Request {
    http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body.as_bytes().to_vec()))
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

pub fn set_cookie(resp: &Response) -> &str {
    resp.headers()
        .get("Set-Cookie")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}
