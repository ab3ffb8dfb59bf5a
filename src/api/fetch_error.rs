use std::error::Error;
use std::fmt;

/// Failure of a single backend round trip.
#[derive(Debug)]
pub enum FetchError {
    /// The request never produced a response (connect, TLS, body read).
    Network {
        endpoint: &'static str,
        message: String,
    },
    /// The backend answered with a non-2xx status.
    Status { endpoint: &'static str, status: u16 },
    /// The body was not the JSON shape we expected.
    Decode {
        endpoint: &'static str,
        message: String,
    },
    /// The configured backend origin cannot address the endpoint.
    InvalidUrl(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network { endpoint, message } => {
                write!(f, "request to {endpoint} failed: {message}")
            }
            FetchError::Status { endpoint, status } => {
                write!(f, "{endpoint} returned HTTP {status}")
            }
            FetchError::Decode { endpoint, message } => {
                write!(f, "malformed response from {endpoint}: {message}")
            }
            FetchError::InvalidUrl(msg) => write!(f, "invalid backend url: {msg}"),
        }
    }
}

impl Error for FetchError {}
