use crate::config::TelemetryConfig;
use crate::errors::AppError;
use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber. `RUST_LOG` wins over the configured
/// level when it parses.
pub fn init(config: &TelemetryConfig) -> Result<(), AppError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => level_filter(&config.log_level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| AppError::Telemetry(format!("subscriber already installed: {e}")))
}

fn level_filter(level: &str) -> Result<EnvFilter, AppError> {
    EnvFilter::try_new(level)
        .map_err(|e| AppError::Telemetry(format!("invalid log level {level:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_levels_and_directives_parse() {
        assert!(level_filter("info").is_ok());
        assert!(level_filter("neighborhood_matchmaker=debug,warn").is_ok());
    }

    #[test]
    fn bad_level_is_a_startup_error() {
        match level_filter("neighborhood_matchmaker=loud") {
            Err(AppError::Telemetry(msg)) => assert!(msg.contains("loud")),
            other => panic!("expected telemetry error, got {other:?}"),
        }
    }
}
