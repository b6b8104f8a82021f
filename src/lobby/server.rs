/// Lobby server actor.
///
/// Owns the single `LobbyBook` of the process. Reports, resets and status reads
/// all go through this actor's mailbox, so they never interleave.

use actix::prelude::*;
use actix::MessageResult;
use log::info;

use super::book::LobbyBook;
use super::messages::{GetLobbySnapshot, ReportLobbyId, ResetLobby};
use super::types::{LobbyError, MatchStatus};

pub struct LobbyServer {
    book: LobbyBook,
}

impl LobbyServer {
    /// Create a lobby server with both slots empty and no history.
    pub fn new() -> Self {
        Self { book: LobbyBook::new() }
    }
}

impl Actor for LobbyServer {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        info!("[Lobby] Lobby server started");
    }
}

impl Handler<ReportLobbyId> for LobbyServer {
    type Result = Result<MatchStatus, LobbyError>;

    fn handle(&mut self, msg: ReportLobbyId, _: &mut Context<Self>) -> Self::Result {
        self.book.report_named(msg.pc.as_deref(), msg.lobby_id)
    }
}

impl Handler<ResetLobby> for LobbyServer {
    type Result = ();

    fn handle(&mut self, _: ResetLobby, _: &mut Context<Self>) -> Self::Result {
        self.book.reset();
    }
}

impl Handler<GetLobbySnapshot> for LobbyServer {
    type Result = MessageResult<GetLobbySnapshot>;

    fn handle(&mut self, msg: GetLobbySnapshot, _: &mut Context<Self>) -> Self::Result {
        MessageResult(self.book.snapshot(msg.window))
    }
}
