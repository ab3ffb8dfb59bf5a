use crate::api::BackendClient;
use crate::cli::Cli;
use crate::config::AppConfig;
use crate::errors::AppError;
use crate::handoff::HandoffStore;
use crate::responses::html_error_response;
use crate::router::handle;
use crate::state::AppState;
use astra::Server;
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};

mod api;
mod cli;
mod config;
mod domain;
mod errors;
mod form;
mod handoff;
mod responses;
mod results;
mod router;
mod state;
mod telemetry;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    // 1️⃣ Configuration: .env + environment, then CLI flags
    let mut config = AppConfig::load()?;
    Cli::parse().apply(&mut config)?;
    telemetry::init(&config.telemetry)?;

    // 2️⃣ Backend client and the handoff buffer shared by all workers
    let backend = BackendClient::new(config.backend.base_url.clone(), config.backend.timeout)?;
    let handoffs = HandoffStore::new(
        config.handoff.capacity,
        chrono::Duration::seconds(config.handoff.ttl_secs),
    );

    // 3️⃣ Start the server
    let addr = config.server.socket_addr()?;
    info!(
        %addr,
        backend = %backend.base_url(),
        city = %config.search.city,
        "starting server"
    );

    let state = AppState::new(Arc::new(backend), handoffs, config.search.city.clone());

    let server = Server::bind(&addr).max_workers(config.server.max_workers);

    server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => {
            warn!(error = %err, "request failed");
            html_error_response(err)
        }
    })?;

    info!("server shut down cleanly");
    Ok(())
}
