//! Route table mapping method and path to handlers.
//!
//! Matching is literal or by prefix only:
//!
//! - `/health`, `/api/health` → [`health`] for any method.
//! - `/api/users` → [`list_users`] on `GET`, [`create_user`] on `POST`,
//!   `405` otherwise.
//! - `/api/users/<rest>` → [`get_user`] for any method, with everything after
//!   the prefix handed over as the raw id token.
//!
//! Any other path falls through to Actix's default `404`. Creation bodies are
//! read without a size limit.

use actix_web::web;

use crate::inbound::http::health::health;
use crate::inbound::http::users::{create_user, get_user, list_users, users_method_not_allowed};

/// Register every API route on `cfg`.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use demo_api::inbound::http::router::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::route().to(health))
        .route("/api/health", web::route().to(health))
        .service(
            web::resource("/api/users")
                .app_data(web::PayloadConfig::new(usize::MAX))
                .route(web::get().to(list_users))
                .route(web::post().to(create_user))
                .default_service(web::to(users_method_not_allowed)),
        )
        .route("/api/users/{id:.*}", web::route().to(get_user));
}
