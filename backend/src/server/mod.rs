//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::net::SocketAddr;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use demo_api::RequestLog;
use demo_api::inbound::http::router::configure;
use demo_api::inbound::http::state::HttpState;

fn build_app(
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(http_state)
        .wrap(RequestLog)
        .configure(configure)
}

/// Construct an Actix HTTP server sharing `http_state` across workers.
///
/// # Returns
/// A [`Server`] that must be awaited to drive the listener, together with the
/// socket addresses actually bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    http_state: web::Data<HttpState>,
    config: &ServerConfig,
) -> std::io::Result<(Server, Vec<SocketAddr>)> {
    let http_server =
        HttpServer::new(move || build_app(http_state.clone())).bind(config.bind_target())?;
    let addrs = http_server.addrs();
    info!(url = %config.base_url(), addrs = ?addrs, "server starting");
    Ok((http_server.run(), addrs))
}

#[cfg(test)]
mod tests;
