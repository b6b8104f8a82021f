//! HTTP routing configuration.
//!
//! Defines the three endpoints clients and operators talk to.

use actix_web::web;
use crate::server::handlers::{post_lobby_id, post_reset, get_status};

/// Configure the application's HTTP routes.
///
/// `/lobby_id` and `/reset` are used by the pc1 / pc2 clients,
/// `/status` is a human-facing page.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/lobby_id")
            .route(web::post().to(post_lobby_id))
    )
    .service(
        web::resource("/reset")
            .route(web::post().to(post_reset))
    )
    .service(
        web::resource("/status")
            .route(web::get().to(get_status))
    );
}
