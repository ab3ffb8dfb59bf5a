use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use url::Url;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_CITY: &str = "Montreal";

/// Top-level configuration, read from `.env` and the process environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub backend: BackendConfig,
    pub search: SearchConfig,
    pub handoff: HandoffConfig,
    pub telemetry: TelemetryConfig,
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_workers: usize,
}

#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: Url,
    /// `None` leaves backend calls without a timeout.
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub city: String,
}

#[derive(Debug, Clone)]
pub struct HandoffConfig {
    pub capacity: usize,
    pub ttl_secs: i64,
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::load_from(|key| env::var(key).ok())
    }

    /// Same as `load`, with the variable source injected.
    pub fn load_from<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = var("APP_HOST", "127.0.0.1");
        let port = var("APP_PORT", "3000")
            .parse::<u16>()
            .map_err(|_| ConfigError::Invalid("APP_PORT"))?;
        let max_workers = var("APP_MAX_WORKERS", "8")
            .parse::<usize>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or(ConfigError::Invalid("APP_MAX_WORKERS"))?;

        let base_url = parse_backend_url(&var("BACKEND_URL", DEFAULT_BACKEND_URL))?;
        let timeout = match lookup("BACKEND_TIMEOUT_SECS") {
            Some(raw) if !raw.trim().is_empty() => Some(Duration::from_secs(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::Invalid("BACKEND_TIMEOUT_SECS"))?,
            )),
            _ => None,
        };

        let city = var("SEARCH_CITY", DEFAULT_CITY).trim().to_string();
        if city.is_empty() {
            return Err(ConfigError::Invalid("SEARCH_CITY"));
        }

        let capacity = var("HANDOFF_CAPACITY", "1024")
            .parse::<usize>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or(ConfigError::Invalid("HANDOFF_CAPACITY"))?;
        let ttl_secs = var("HANDOFF_TTL_SECS", "3600")
            .parse::<i64>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or(ConfigError::Invalid("HANDOFF_TTL_SECS"))?;

        let log_level = var("APP_LOG_LEVEL", "info");

        Ok(Self {
            server: ServerConfig {
                host,
                port,
                max_workers,
            },
            backend: BackendConfig { base_url, timeout },
            search: SearchConfig { city },
            handoff: HandoffConfig { capacity, ttl_secs },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

pub fn parse_backend_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidBackendUrl { source })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(ConfigError::Invalid("BACKEND_URL")),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    /// The named variable is present but unusable.
    Invalid(&'static str),
    InvalidHost { source: std::net::AddrParseError },
    InvalidBackendUrl { source: url::ParseError },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid(key) => write!(f, "{key} has an invalid value"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidBackendUrl { source } => {
                write!(f, "BACKEND_URL is not a valid url: {source}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Invalid(_) => None,
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidBackendUrl { source } => Some(source),
        }
    }
}
