/// Lobby module: two-slot lobby id table, comparison rule and history.

pub mod types;
pub mod book;
pub mod messages;
pub mod server;
