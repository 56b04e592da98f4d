//! OpenAPI schema definitions for response envelopes.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror the wire shape of [`crate::domain::User`] and of the
//! concrete [`ApiResponse`](crate::inbound::http::envelope::ApiResponse)
//! variants each endpoint returns.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    id: i64,
    /// Name as supplied on creation.
    #[schema(example = "John Doe")]
    name: String,
    /// Email as supplied on creation.
    #[schema(example = "john@example.com")]
    email: String,
}

/// Envelope carrying a single user.
#[derive(ToSchema)]
#[schema(as = UserEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserEnvelopeSchema {
    /// Always `true`.
    #[schema(example = true)]
    success: bool,
    /// The requested or created user.
    data: UserSchema,
}

/// Envelope carrying every user in store order.
#[derive(ToSchema)]
#[schema(as = UserListEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserListEnvelopeSchema {
    /// Always `true`.
    #[schema(example = true)]
    success: bool,
    /// Users in insertion order.
    data: Vec<UserSchema>,
}

/// Envelope describing a failed lookup.
#[derive(ToSchema)]
#[schema(as = FailureEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct FailureEnvelopeSchema {
    /// Always `false`.
    #[schema(example = false)]
    success: bool,
    /// Reason for the failure.
    #[schema(example = "User not found")]
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn property_names<T: PartialSchema>() -> Vec<String> {
        let mut names: Vec<String> = match T::schema() {
            RefOr::T(Schema::Object(object)) => object.properties.keys().cloned().collect(),
            other => panic!("expected object schema, got {other:?}"),
        };
        names.sort();
        names
    }

    #[test]
    fn user_schema_matches_wire_fields() {
        assert_eq!(property_names::<UserSchema>(), vec!["email", "id", "name"]);
        assert_eq!(UserSchema::name(), "User");
    }

    #[test]
    fn failure_envelope_has_no_data() {
        assert_eq!(
            property_names::<FailureEnvelopeSchema>(),
            vec!["message", "success"]
        );
    }

    #[test]
    fn list_envelope_carries_data() {
        assert_eq!(
            property_names::<UserListEnvelopeSchema>(),
            vec!["data", "success"]
        );
    }
}
