//! Tests for server construction: binding, request flow, and shutdown.

use super::*;
use std::sync::Arc;

use actix_web::http::StatusCode;
use awc::Client;
use demo_api::inbound::http::envelope::HealthResponse;
use demo_api::outbound::memory::InMemoryUserRepository;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

#[fixture]
fn http_state() -> web::Data<HttpState> {
    web::Data::new(HttpState::new(Arc::new(InMemoryUserRepository::seeded())))
}

#[fixture]
fn ephemeral_config() -> ServerConfig {
    ServerConfig::default().with_bind("127.0.0.1", 0)
}

#[rstest]
#[actix_rt::test]
async fn create_server_binds_ephemeral_port(
    http_state: web::Data<HttpState>,
    ephemeral_config: ServerConfig,
) {
    let (server, addrs) =
        create_server(http_state, &ephemeral_config).expect("server should bind");
    assert!(addrs.iter().all(|addr| addr.port() != 0));

    let handle = server.handle();
    actix_rt::spawn(server);
    handle.stop(true).await;
}

#[rstest]
#[actix_rt::test]
async fn create_server_fails_when_port_taken(http_state: web::Data<HttpState>) {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("reserve port");
    let port = listener.local_addr().expect("listener addr").port();
    let config = ServerConfig::default().with_bind("127.0.0.1", port);

    let result = create_server(http_state, &config);
    assert!(result.is_err(), "binding an occupied port must fail");
}

#[rstest]
#[actix_rt::test]
async fn served_requests_share_one_store(
    http_state: web::Data<HttpState>,
    ephemeral_config: ServerConfig,
) {
    let (server, addrs) =
        create_server(http_state, &ephemeral_config).expect("server should bind");
    let addr = addrs.first().copied().expect("bound address");
    let handle = server.handle();
    actix_rt::spawn(server);
    let base_url = format!("http://{addr}");
    let client = Client::default();

    let mut health = client
        .get(format!("{base_url}/api/health"))
        .send()
        .await
        .expect("health request");
    assert_eq!(health.status(), StatusCode::OK);
    assert!(health.headers().contains_key("trace-id"));
    let body: HealthResponse = health.json().await.expect("health body");
    assert!(body.success);

    let created = client
        .post(format!("{base_url}/api/users"))
        .send_json(&json!({"name": "New Guy", "email": "new@x.com"}))
        .await
        .expect("create request");
    assert_eq!(created.status(), StatusCode::CREATED);

    let mut listed = client
        .get(format!("{base_url}/api/users"))
        .send()
        .await
        .expect("list request");
    let body: Value = listed.json().await.expect("list body");
    let count = body
        .get("data")
        .and_then(Value::as_array)
        .map(Vec::len);
    assert_eq!(count, Some(3));

    let unrouted = client
        .get(format!("{base_url}/api/unknown"))
        .send()
        .await
        .expect("unrouted request");
    assert_eq!(unrouted.status(), StatusCode::NOT_FOUND);

    handle.stop(true).await;
}
