use crate::api::FetchError;
use crate::config::ConfigError;
use astra::Response;
// errors.rs
use std::fmt;

/// Errors a route handler can end with. Anything recoverable (validation,
/// backend outages) is rendered as a page before it gets here.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    UnsupportedMedia(String),
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::UnsupportedMedia(_) => 415,
            ServerError::InternalError => 500,
        }
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::UnsupportedMedia(msg) => write!(f, "Unsupported Media Type: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}

/// Anything that stops the process from starting or keeps it from serving.
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    /// The log filter or subscriber could not be installed.
    Telemetry(String),
    Backend(FetchError),
    Io(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {err}"),
            AppError::Telemetry(msg) => write!(f, "telemetry error: {msg}"),
            AppError::Backend(err) => write!(f, "backend client error: {err}"),
            AppError::Io(err) => write!(f, "io error: {err}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(_) => None,
            AppError::Backend(err) => Some(err),
            AppError::Io(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<FetchError> for AppError {
    fn from(value: FetchError) -> Self {
        Self::Backend(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
