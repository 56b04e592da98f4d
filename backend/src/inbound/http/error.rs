//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while giving each
//! failure its wire shape. Missing records answer with a JSON
//! [`ApiResponse`] envelope; every other failure answers in plain text.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::{debug, error};

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::envelope::ApiResponse;
use crate::middleware::TraceId;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

const INTERNAL_MESSAGE: &str = "Internal server error";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let trace_id = TraceId::current().map(|id| id.to_string());
        if status.is_server_error() {
            error!(error = %self, trace_id = trace_id.as_deref(), "request failed");
        } else {
            debug!(
                error = %self,
                status = status.as_u16(),
                trace_id = trace_id.as_deref(),
                "request rejected"
            );
        }

        let mut builder = HttpResponse::build(status);
        match self.code() {
            ErrorCode::NotFound => builder.json(ApiResponse::failure(self.message())),
            ErrorCode::InternalError => builder
                .content_type(ContentType::plaintext())
                .body(INTERNAL_MESSAGE),
            _ => builder
                .content_type(ContentType::plaintext())
                .body(self.message().to_owned()),
        }
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak implementation details to clients.
        error!(error = %err, "actix error promoted to domain error");
        Self::internal(INTERNAL_MESSAGE)
    }
}

#[cfg(test)]
mod tests;
