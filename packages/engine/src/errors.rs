use thiserror::Error;

/// Configuration problems detected when a game is started.
///
/// Runtime protocol mismatches and provider failures are never surfaced as
/// errors; they are absorbed by the engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("no roles are defined for a {total_players}-player table")]
    EmptyRoleBag { total_players: usize },
    #[error("invalid game config: {0}")]
    InvalidConfig(String),
}
