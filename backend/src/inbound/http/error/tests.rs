//! Tests for the HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use actix_web::http::header;
use rstest::rstest;
use serde_json::{Value, json};

async fn body_text(response: HttpResponse) -> String {
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}

fn content_type(response: &HttpResponse) -> String {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned()
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::method_not_allowed("nope"), StatusCode::METHOD_NOT_ALLOWED)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] expected: StatusCode) {
    assert_eq!(error.status_code(), expected);
}

#[rstest]
#[case(Error::invalid_request("Invalid user ID"), "Invalid user ID")]
#[case(Error::method_not_allowed("Method not allowed"), "Method not allowed")]
#[actix_web::test]
async fn client_errors_render_plain_text(#[case] error: Error, #[case] expected: &str) {
    let response = error.error_response();
    assert!(content_type(&response).starts_with("text/plain"));
    assert_eq!(body_text(response).await, expected);
}

#[actix_web::test]
async fn not_found_renders_failure_envelope() {
    let response = Error::not_found("User not found").error_response();
    assert!(content_type(&response).starts_with("application/json"));
    let body: Value = serde_json::from_str(&body_text(response).await).expect("json body");
    assert_eq!(body, json!({"success": false, "message": "User not found"}));
}

#[actix_web::test]
async fn internal_errors_are_redacted() {
    let response = Error::internal("user store unavailable: lock poisoned").error_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(content_type(&response).starts_with("text/plain"));
    assert_eq!(body_text(response).await, "Internal server error");
}
