/// HTTP request handlers.
///
/// Each handler turns a request into a message for the lobby server actor
/// and formats the actor's answer for the client.
use actix_web::{web, HttpResponse};
use log::debug;
use serde::Serialize;
use serde_json::Value;

use crate::lobby::messages::{GetLobbySnapshot, ReportLobbyId, ResetLobby};
use crate::lobby::types::{Decision, LobbyError};
use crate::server::http_error::{lobby_unavailable, render_failed};
use crate::server::state::AppState;

/// Body of a `/lobby_id` answer.
#[derive(Serialize, Debug, PartialEq)]
#[serde(untagged)]
pub enum LobbyIdResponse {
    /// `null` while waiting, otherwise the decision for the client.
    Decision { status: Option<Decision> },
    Error { status: &'static str, message: String },
}

impl From<LobbyError> for LobbyIdResponse {
    fn from(err: LobbyError) -> Self {
        LobbyIdResponse::Error {
            status: "error",
            message: err.to_string(),
        }
    }
}

/// Read `pc` and `lobby_id` out of a request body.
///
/// Anything that is not a JSON object, and any field that is missing or of the wrong
/// type, is treated as absent. Lobby ids are opaque strings: a number (even `0`)
/// is not a report.
pub fn parse_report(body: &[u8]) -> ReportLobbyId {
    let value: Value = serde_json::from_slice(body).unwrap_or(Value::Null);
    let lobby_id = match value.get("lobby_id") {
        Some(Value::String(s)) => Some(s.clone()),
        _ => None,
    };
    ReportLobbyId {
        pc: value.get("pc").and_then(Value::as_str).map(str::to_owned),
        lobby_id,
    }
}

/// `POST /lobby_id`: record a client's lobby id and answer with the current decision.
pub async fn post_lobby_id(body: web::Bytes, data: web::Data<AppState>) -> HttpResponse {
    let report = parse_report(&body);
    debug!("[Http] /lobby_id pc={:?} lobby_id={:?}", report.pc, report.lobby_id);

    let response = match data.lobby_addr.send(report).await {
        Ok(Ok(status)) => LobbyIdResponse::Decision { status: status.decision() },
        Ok(Err(err)) => LobbyIdResponse::from(err),
        Err(e) => return lobby_unavailable(&e),
    };
    HttpResponse::Ok().json(response)
}

/// `POST /reset`: clear both slots. Always answers `OK`.
pub async fn post_reset(data: web::Data<AppState>) -> HttpResponse {
    if let Err(e) = data.lobby_addr.send(ResetLobby).await {
        return lobby_unavailable(&e);
    }
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("OK")
}

/// `GET /status`: human-readable page with the current slots and history.
pub async fn get_status(data: web::Data<AppState>) -> HttpResponse {
    let window = data.presenter.history_window();
    let snapshot = match data.lobby_addr.send(GetLobbySnapshot { window }).await {
        Ok(snapshot) => snapshot,
        Err(e) => return lobby_unavailable(&e),
    };

    match data.presenter.render(&snapshot) {
        Ok(html) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html),
        Err(e) => render_failed(&e),
    }
}
