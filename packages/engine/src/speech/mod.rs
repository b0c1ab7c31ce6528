//! Speech provider seam.
//!
//! AI speakers get their lines from a [`SpeechProvider`]. The engine treats
//! every provider failure as recoverable and substitutes a canned line from
//! [`fallback`], so nothing here can stall or fail a game.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::domain::log::LogEntry;
use crate::domain::player::{PlayerId, PlayerState};
use crate::domain::roles::{Alignment, RoleName};
use crate::domain::state::Phase;
use crate::domain::Language;

pub mod config;
pub mod fallback;
pub mod http;
pub mod offline;
pub mod prompt;
pub mod registry;

pub use config::SpeechConfig;
pub use http::HttpSpeechProvider;
pub use offline::OfflineSpeech;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpeechError {
    #[error("speech provider is not configured")]
    Unconfigured,
    #[error("speech request failed: {0}")]
    RequestFailed(String),
    #[error("invalid speech response: {0}")]
    InvalidResponse(String),
    #[error("speech provider returned no text")]
    EmptyResponse,
    #[error("speech provider timed out")]
    Timeout,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpeechTopic {
    Discussion,
    Vote,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Speaker {
    pub id: PlayerId,
    pub name: String,
    pub role: RoleName,
    pub alignment: Alignment,
}

/// A living player as the speaker sees them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisiblePlayer {
    pub id: PlayerId,
    pub name: String,
    pub is_human: bool,
    /// Only set for the speaker themselves.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechContext {
    pub day: u32,
    pub phase: Phase,
    pub topic: SpeechTopic,
    pub speaker: Speaker,
    pub alive_players: Vec<VisiblePlayer>,
    pub recent_logs: Vec<LogEntry>,
    pub language: Language,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_target_id: Option<PlayerId>,
}

impl SpeechContext {
    /// Builds the context for `speaker`, hiding every other player's alignment.
    pub fn for_speaker(
        speaker: &PlayerState,
        players: &[PlayerState],
        day: u32,
        topic: SpeechTopic,
        recent_logs: Vec<LogEntry>,
        language: Language,
    ) -> Self {
        let phase = match topic {
            SpeechTopic::Discussion => Phase::DayDiscussion,
            SpeechTopic::Vote => Phase::DayVote,
        };
        let alive_players = players
            .iter()
            .filter(|p| p.is_alive())
            .map(|p| VisiblePlayer {
                id: p.id.clone(),
                name: p.display_name.clone(),
                is_human: p.is_human,
                alignment: (p.id == speaker.id).then(|| p.alignment()),
            })
            .collect();

        Self {
            day,
            phase,
            topic,
            speaker: Speaker {
                id: speaker.id.clone(),
                name: speaker.display_name.clone(),
                role: speaker.role.name,
                alignment: speaker.alignment(),
            },
            alive_players,
            recent_logs,
            language,
            suggested_target_id: None,
        }
    }

    pub fn with_suggested_target(mut self, target: impl Into<PlayerId>) -> Self {
        self.suggested_target_id = Some(target.into());
        self
    }

    /// Display name of the suggested vote target, if it is among the living.
    pub fn suggested_target_name(&self) -> Option<&str> {
        let id = self.suggested_target_id.as_deref()?;
        self.alive_players
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.name.as_str())
    }
}

/// Produces in-character speech for an AI player.
#[async_trait]
pub trait SpeechProvider: Send + Sync {
    async fn generate_speech(&self, ctx: &SpeechContext) -> Result<String, SpeechError>;

    /// Stable identifier used in logs.
    fn name(&self) -> &'static str;
}
