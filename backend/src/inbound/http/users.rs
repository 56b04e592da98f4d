//! Users API handlers.
//!
//! ```text
//! GET  /api/users
//! POST /api/users {"name":"New Guy","email":"new@x.com"}
//! ANY  /api/users/{id}
//! ```

use std::fmt;

use actix_web::{HttpResponse, web};
use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::{Error, NewUser, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::ApiResponse;
use crate::inbound::http::schemas::{
    FailureEnvelopeSchema, UserEnvelopeSchema, UserListEnvelopeSchema,
};
use crate::inbound::http::state::HttpState;

const EMPTY_BODY: &str = "EOF while parsing a value";

/// Creation body for `POST /api/users`.
///
/// Keys match `name` and `email` without regard to ASCII case, and a later
/// duplicate key wins. Missing or `null` fields decode as empty strings; any
/// `id` or other unknown field is ignored because identifiers are assigned by
/// the store.
#[derive(Debug, Default, PartialEq, Eq, ToSchema)]
pub struct CreateUserRequest {
    /// Name to store verbatim.
    #[schema(example = "New Guy")]
    pub name: Option<String>,
    /// Email to store verbatim.
    #[schema(example = "new@x.com")]
    pub email: Option<String>,
}

impl CreateUserRequest {
    /// Decode the first JSON value in `body`.
    ///
    /// Anything after that value is left unread, and a `null` value yields an
    /// empty request.
    ///
    /// # Errors
    /// Returns the decoder's message when `body` is empty or the first value
    /// is not an object with string fields.
    ///
    /// # Examples
    /// ```
    /// use demo_api::inbound::http::users::CreateUserRequest;
    ///
    /// let request = CreateUserRequest::from_body(br#"{"Name":"Cap"} trailing"#)
    ///     .expect("first value decodes");
    /// assert_eq!(request.name.as_deref(), Some("Cap"));
    /// ```
    pub fn from_body(body: &[u8]) -> Result<Self, String> {
        let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Option<Self>>();
        match values.next() {
            Some(Ok(request)) => Ok(request.unwrap_or_default()),
            Some(Err(err)) => Err(err.to_string()),
            None => Err(EMPTY_BODY.to_owned()),
        }
    }
}

impl<'de> Deserialize<'de> for CreateUserRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(CreateUserVisitor)
    }
}

struct CreateUserVisitor;

impl<'de> Visitor<'de> for CreateUserVisitor {
    type Value = CreateUserRequest;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a user object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut request = CreateUserRequest::default();
        while let Some(key) = map.next_key::<String>()? {
            let slot = if key.eq_ignore_ascii_case("name") {
                &mut request.name
            } else if key.eq_ignore_ascii_case("email") {
                &mut request.email
            } else {
                map.next_value::<IgnoredAny>()?;
                continue;
            };
            // `null` leaves an earlier value in place.
            if let Some(value) = map.next_value::<Option<String>>()? {
                *slot = Some(value);
            }
        }
        Ok(request)
    }
}

impl From<CreateUserRequest> for NewUser {
    fn from(value: CreateUserRequest) -> Self {
        Self::new(
            value.name.unwrap_or_default(),
            value.email.unwrap_or_default(),
        )
    }
}

/// List every user in store order.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users", body = UserListEnvelopeSchema),
        (status = 405, description = "Method not allowed", body = String, content_type = "text/plain")
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let users = state.users.list().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::records(users)))
}

/// Create a user from the request body.
///
/// The body is decoded regardless of its declared content type or size, see
/// [`CreateUserRequest::from_body`]. Decode failures answer `400` with the
/// decoder's message and leave the store untouched.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserEnvelopeSchema),
        (status = 400, description = "Body could not be decoded", body = String, content_type = "text/plain")
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
pub async fn create_user(
    state: web::Data<HttpState>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let request = CreateUserRequest::from_body(&body).map_err(Error::invalid_request)?;
    let user = state.users.append(request.into()).await?;
    Ok(HttpResponse::Created().json(ApiResponse::record(user)))
}

/// Reject methods other than `GET` and `POST` on the collection.
pub async fn users_method_not_allowed() -> ApiResult<HttpResponse> {
    Err(Error::method_not_allowed("Method not allowed"))
}

/// Fetch a single user by the id token following `/api/users/`.
///
/// Every method performs the same read.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(
        ("id" = String, Path, description = "Integer user identifier", example = "1")
    ),
    responses(
        (status = 200, description = "User", body = UserEnvelopeSchema),
        (status = 400, description = "Invalid user ID", body = String, content_type = "text/plain"),
        (status = 404, description = "User not found", body = FailureEnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
pub async fn get_user(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id: UserId = id.parse().map_err(|_| Error::invalid_request("Invalid user ID"))?;
    match state.users.find(id).await? {
        Some(user) => Ok(HttpResponse::Ok().json(ApiResponse::record(user))),
        None => Err(Error::not_found("User not found")),
    }
}
