//! Backend entry-point: wires the in-memory store into the REST endpoints and
//! serves them on `localhost:8080`.

mod server;

use std::sync::Arc;

use actix_web::web;
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt};

use demo_api::inbound::http::state::HttpState;
use demo_api::outbound::memory::InMemoryUserRepository;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = fmt().with_env_filter(filter).json().try_init() {
        warn!(error = %e, "tracing init failed");
    }

    let http_state = web::Data::new(HttpState::new(Arc::new(
        InMemoryUserRepository::seeded(),
    )));
    let config = ServerConfig::default();
    let (server, _addrs) = create_server(http_state, &config).inspect_err(|e| {
        error!(error = %e, url = %config.base_url(), "failed to bind listener");
    })?;
    server.await
}
