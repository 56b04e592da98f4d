//! JSON response envelopes.
//!
//! Every JSON body except the health probe is wrapped in [`ApiResponse`]:
//!
//! ```text
//! {"success":true,"data":[{"id":1,"name":"John Doe","email":"john@example.com"}]}
//! {"success":false,"message":"User not found"}
//! ```
//!
//! `data` and `message` are omitted when absent.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::User;

/// Payload carried in [`ApiResponse::data`].
///
/// Serialised untagged so a single record renders as an object and a
/// sequence renders as an array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Payload {
    /// A single user record.
    Record(User),
    /// Every user record, in store order.
    Records(Vec<User>),
}

/// Uniform success/data/message wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Whether the request succeeded.
    pub success: bool,
    /// Returned content, present on successful reads and creations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Payload>,
    /// Human-readable note, present on failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiResponse {
    /// Successful response carrying one record.
    #[must_use]
    pub fn record(user: User) -> Self {
        Self {
            success: true,
            data: Some(Payload::Record(user)),
            message: None,
        }
    }

    /// Successful response carrying a sequence of records.
    #[must_use]
    pub fn records(users: Vec<User>) -> Self {
        Self {
            success: true,
            data: Some(Payload::Records(users)),
            message: None,
        }
    }

    /// Failed response carrying only a message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// Message reported by the health probe.
pub const HEALTH_MESSAGE: &str = "API is running";

/// Health probe body; a distinct shape from [`ApiResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `true` while the process answers.
    #[schema(example = true)]
    pub success: bool,
    /// Fixed status message.
    #[schema(example = "API is running")]
    pub message: String,
    /// UTC time the probe was answered, RFC 3339 with second precision.
    #[schema(example = "2024-01-01T12:00:00Z")]
    pub timestamp: String,
}

impl HealthResponse {
    /// Build the probe body stamped with `now`.
    ///
    /// # Examples
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use demo_api::inbound::http::envelope::HealthResponse;
    ///
    /// let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    /// assert_eq!(HealthResponse::at(now).timestamp, "2024-01-01T12:00:00Z");
    /// ```
    #[must_use]
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            success: true,
            message: HEALTH_MESSAGE.to_owned(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}
