//! Health probe answering on `/health` and `/api/health`.

use actix_web::HttpResponse;
use chrono::Utc;

use crate::inbound::http::envelope::HealthResponse;

/// Report that the process is serving requests.
///
/// Accepts any method and never touches the user store.
#[utoipa::path(
    get,
    path = "/health",
    tags = ["health"],
    responses(
        (status = 200, description = "API is running", body = HealthResponse)
    ),
    operation_id = "health"
)]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::at(Utc::now()))
}
