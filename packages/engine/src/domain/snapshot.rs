//! Public snapshot API for observing a game without touching engine internals.

use serde::Serialize;

use crate::domain::log::LogEntry;
use crate::domain::player::PlayerState;
use crate::domain::request::HumanActionRequest;
use crate::domain::roles::Alignment;
use crate::domain::state::Phase;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineSnapshot {
    pub day: u32,
    pub phase: Phase,
    pub players: Vec<PlayerState>,
    pub logs: Vec<LogEntry>,
    pub pending_request: Option<HumanActionRequest>,
    pub winner: Option<Alignment>,
}

impl EngineSnapshot {
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn player(&self, id: &str) -> Option<&PlayerState> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn living(&self) -> impl Iterator<Item = &PlayerState> {
        self.players.iter().filter(|p| p.is_alive())
    }

    /// Log lines safe to show every observer.
    pub fn public_logs(&self) -> impl Iterator<Item = &LogEntry> {
        self.logs.iter().filter(|e| !e.is_private())
    }
}
