use actix::prelude::*;

use super::book::{HistoryWindow, LobbySnapshot};
use super::types::{LobbyError, MatchStatus};

/// A client reports the lobby id it currently sees.
///
/// Fields are kept raw: slot validation and empty-id handling happen inside the actor.
#[derive(Message, Debug, Clone)]
#[rtype(result = "Result<MatchStatus, LobbyError>")]
pub struct ReportLobbyId {
    pub pc: Option<String>,
    pub lobby_id: Option<String>,
}

/// Clear both slots.
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "()")]
pub struct ResetLobby;

/// Read the current slots and a window of the history.
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "LobbySnapshot")]
pub struct GetLobbySnapshot {
    pub window: HistoryWindow,
}
