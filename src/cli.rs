use crate::config::{parse_backend_url, AppConfig, ConfigError};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "neighborhood-matchmaker",
    about = "Serve the neighborhood matchmaker search UI",
    version
)]
pub struct Cli {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub port: Option<u16>,
    /// Override the matchmaking backend origin
    #[arg(long)]
    pub backend_url: Option<String>,
}

impl Cli {
    /// Flags win over the environment.
    pub fn apply(self, config: &mut AppConfig) -> Result<(), ConfigError> {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(raw) = self.backend_url {
            config.backend.base_url = parse_backend_url(&raw)?;
        }
        Ok(())
    }
}
