use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local};
use serde::Serialize;
use thiserror::Error;

/// One of the two fixed client identities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    Pc1,
    Pc2,
}

impl Slot {
    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::Pc1 => "pc1",
            Slot::Pc2 => "pc2",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Slot {
    type Err = LobbyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pc1" => Ok(Slot::Pc1),
            "pc2" => Ok(Slot::Pc2),
            other => Err(LobbyError::UnknownSlot(other.to_string())),
        }
    }
}

/// A reported lobby identifier. Never empty: an empty report is "no report".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LobbyId(String);

impl LobbyId {
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() { None } else { Some(LobbyId(raw)) }
    }

}

impl fmt::Display for LobbyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of one comparison, as recorded in the history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Match,
    NoMatch,
    Waiting,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Match => "match",
            MatchStatus::NoMatch => "no_match",
            MatchStatus::Waiting => "waiting",
        }
    }

    /// What the reporting client is told to do. `None` means keep polling.
    pub fn decision(&self) -> Option<Decision> {
        match self {
            MatchStatus::Match => Some(Decision::GameAccepted),
            MatchStatus::NoMatch => Some(Decision::SearchAgain),
            MatchStatus::Waiting => None,
        }
    }
}

/// Terminal instruction sent back to a client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    GameAccepted,
    SearchAgain,
}

/// Immutable record of one accepted report.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Local>,
    pub pc1_id: Option<LobbyId>,
    pub pc2_id: Option<LobbyId>,
    pub status: MatchStatus,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LobbyError {
    /// The report named a slot outside {pc1, pc2}.
    #[error("Unknown PC name")]
    UnknownSlot(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_parsing_is_exact() {
        assert_eq!("pc1".parse::<Slot>(), Ok(Slot::Pc1));
        assert_eq!("pc2".parse::<Slot>(), Ok(Slot::Pc2));
        assert_eq!("PC1".parse::<Slot>(), Err(LobbyError::UnknownSlot("PC1".into())));
        assert!("pc3".parse::<Slot>().is_err());
        assert!("".parse::<Slot>().is_err());
    }

    #[test]
    fn test_empty_lobby_id_is_absent() {
        assert_eq!(LobbyId::new(""), None);
        assert_eq!(LobbyId::new("100").map(|id| id.to_string()), Some("100".to_string()));
    }

    #[test]
    fn test_decision_wire_names() {
        assert_eq!(serde_json::to_value(Decision::GameAccepted).unwrap(), "game_accepted");
        assert_eq!(serde_json::to_value(Decision::SearchAgain).unwrap(), "search_again");
        assert_eq!(MatchStatus::Waiting.decision(), None);
        assert_eq!(serde_json::to_value(MatchStatus::NoMatch).unwrap(), "no_match");
    }

    #[test]
    fn test_unknown_slot_message() {
        assert_eq!(LobbyError::UnknownSlot("pc3".into()).to_string(), "Unknown PC name");
    }
}
