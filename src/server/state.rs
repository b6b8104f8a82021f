// src/server/state.rs

//! Application state for the backend server.
//!
//! Holds the lobby server actor address and the status page presenter.
//! Used to share state between HTTP handlers and the actor system.

use actix::Addr;
use crate::lobby::server::LobbyServer;
use crate::server::status_page::StatusPresenter;

/// Shared application state, injected into HTTP handlers.
pub struct AppState {
    /// Address of the lobby server actor (owns slots and history).
    pub lobby_addr: Addr<LobbyServer>,
    /// Renders the `/status` page in the configured layout.
    pub presenter: StatusPresenter,
}

impl AppState {
    /// Create a new AppState with the given actor address and presenter.
    pub fn new(lobby_addr: Addr<LobbyServer>, presenter: StatusPresenter) -> Self {
        AppState {
            lobby_addr,
            presenter,
        }
    }
}
