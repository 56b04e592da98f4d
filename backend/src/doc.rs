//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint and the envelope schemas they
//! return. The document is exported via `cargo run --bin openapi-dump`; it is
//! not served over HTTP.

use crate::inbound::http::envelope::HealthResponse;
use crate::inbound::http::schemas::{
    FailureEnvelopeSchema, UserEnvelopeSchema, UserListEnvelopeSchema, UserSchema,
};
use crate::inbound::http::users::CreateUserRequest;
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Demo users API",
        description = "In-memory user directory with health probe."
    ),
    servers(
        (url = "http://localhost:8080", description = "Local process")
    ),
    paths(
        crate::inbound::http::health::health,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::get_user,
    ),
    components(schemas(
        UserSchema,
        UserEnvelopeSchema,
        UserListEnvelopeSchema,
        FailureEnvelopeSchema,
        HealthResponse,
        CreateUserRequest
    )),
    tags(
        (name = "users", description = "Operations on user records"),
        (name = "health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/health", "get")]
    #[case("/api/users", "get")]
    #[case("/api/users", "post")]
    #[case("/api/users/{id}", "get")]
    fn documents_every_endpoint(#[case] path: &str, #[case] method: &str) {
        let doc = ApiDoc::openapi();
        let item = doc.paths.paths.get(path).expect("path documented");
        let operation = match method {
            "get" => item.get.as_ref(),
            "post" => item.post.as_ref(),
            _ => None,
        };
        assert!(operation.is_some(), "{method} {path} documented");
    }

    #[test]
    fn registers_envelope_schemas() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components present");
        for name in ["User", "UserEnvelope", "UserListEnvelope", "FailureEnvelope"] {
            assert!(components.schemas.contains_key(name), "{name} registered");
        }
    }
}
