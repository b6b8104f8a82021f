/// Centralized helpers for HTTP error responses.
///
/// Business outcomes (including an unknown slot) are normal JSON answers built by the
/// handlers. These helpers cover infrastructure failures only, so every such error
/// carries the same `{"error":{"code","message","context"}}` shape.
use actix_web::{HttpResponse, http::StatusCode};
use log::error;
use serde_json::json;

/// Returns an HTTP error response with a JSON body.
///
/// # Arguments
/// - `code`: Unique error code (e.g. "LOBBY_UNAVAILABLE").
/// - `message`: Human-readable error message.
/// - `context`: Optional context string.
/// - `status`: HTTP status code.
pub fn http_error_response(
    code: &str,
    message: &str,
    context: Option<&str>,
    status: StatusCode,
) -> HttpResponse {
    let body = json!({
        "error": {
            "code": code,
            "message": message,
            "context": context.unwrap_or(""),
        }
    });
    HttpResponse::build(status).json(body)
}

/// The lobby actor could not be reached.
pub fn lobby_unavailable(err: &actix::MailboxError) -> HttpResponse {
    error!("[Http] Lobby server unreachable: {}", err);
    http_error_response(
        "LOBBY_UNAVAILABLE",
        "The lobby server is not available.",
        Some(&err.to_string()),
        StatusCode::INTERNAL_SERVER_ERROR,
    )
}

/// The status page template failed to render.
pub fn render_failed(err: &minijinja::Error) -> HttpResponse {
    error!("[Http] Status page rendering failed: {:#}", err);
    http_error_response(
        "RENDER_FAILED",
        "The status page could not be rendered.",
        None,
        StatusCode::INTERNAL_SERVER_ERROR,
    )
}
