//! Lobby book: the two-slot state table and its comparison history.
//!
//! The book is a plain value with no locking of its own. It is owned by the
//! `LobbyServer` actor, whose mailbox serializes every report, reset and read.

use chrono::Local;
use log::{debug, info, warn};

use super::types::{HistoryEntry, LobbyError, LobbyId, MatchStatus, Slot};

/// How much of the history a snapshot should carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryWindow {
    /// The last `n` entries, oldest first.
    Recent(usize),
    /// Every entry, oldest first.
    All,
}

/// Read-only copy of the book at one point in time.
#[derive(Clone, Debug, PartialEq)]
pub struct LobbySnapshot {
    pub pc1_id: Option<LobbyId>,
    pub pc2_id: Option<LobbyId>,
    pub history: Vec<HistoryEntry>,
    /// Length of the full history, independent of the window.
    pub total_entries: usize,
}

#[derive(Debug, Default)]
pub struct LobbyBook {
    pc1_id: Option<LobbyId>,
    pc2_id: Option<LobbyId>,
    history: Vec<HistoryEntry>,
}

impl LobbyBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a raw slot name, then record the report.
    ///
    /// A missing or unknown name leaves both slots and the history untouched.
    pub fn report_named(
        &mut self,
        slot_name: Option<&str>,
        raw_id: Option<String>,
    ) -> Result<MatchStatus, LobbyError> {
        let slot = match slot_name {
            Some(name) => name.parse::<Slot>(),
            None => Err(LobbyError::UnknownSlot(String::new())),
        };
        let slot = slot.inspect_err(|LobbyError::UnknownSlot(name)| {
            warn!("[Lobby] Rejected report for unknown slot {:?}", name);
        })?;
        Ok(self.report(slot, raw_id.and_then(LobbyId::new)))
    }

    /// Overwrite `slot`, compare both slots and append one history entry.
    pub fn report(&mut self, slot: Slot, lobby_id: Option<LobbyId>) -> MatchStatus {
        *self.slot_mut(slot) = lobby_id;

        let status = match (&self.pc1_id, &self.pc2_id) {
            (Some(pc1), Some(pc2)) if pc1 == pc2 => MatchStatus::Match,
            (Some(_), Some(_)) => MatchStatus::NoMatch,
            _ => MatchStatus::Waiting,
        };

        self.history.push(HistoryEntry {
            timestamp: Local::now(),
            pc1_id: self.pc1_id.clone(),
            pc2_id: self.pc2_id.clone(),
            status,
        });

        match status {
            MatchStatus::Waiting => debug!(
                "[Lobby] {} reported, waiting (pc1={:?} pc2={:?})",
                slot, self.pc1_id, self.pc2_id
            ),
            _ => info!(
                "[Lobby] {} reported, status={} (pc1={:?} pc2={:?})",
                slot,
                status.as_str(),
                self.pc1_id,
                self.pc2_id
            ),
        }
        status
    }

    /// Clear both slots. The history is kept.
    pub fn reset(&mut self) {
        self.pc1_id = None;
        self.pc2_id = None;
        info!("[Lobby] Slots reset ({} history entries kept)", self.history.len());
    }

    #[cfg(test)]
    pub fn slot(&self, slot: Slot) -> Option<&LobbyId> {
        match slot {
            Slot::Pc1 => self.pc1_id.as_ref(),
            Slot::Pc2 => self.pc2_id.as_ref(),
        }
    }

    #[cfg(test)]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn snapshot(&self, window: HistoryWindow) -> LobbySnapshot {
        let start = match window {
            HistoryWindow::Recent(n) => self.history.len().saturating_sub(n),
            HistoryWindow::All => 0,
        };
        LobbySnapshot {
            pc1_id: self.pc1_id.clone(),
            pc2_id: self.pc2_id.clone(),
            history: self.history[start..].to_vec(),
            total_entries: self.history.len(),
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Option<LobbyId> {
        match slot {
            Slot::Pc1 => &mut self.pc1_id,
            Slot::Pc2 => &mut self.pc2_id,
        }
    }
}
