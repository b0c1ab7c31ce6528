//! Shared types for the simulator.

use clap::ValueEnum;
use thiserror::Error;
use werewolf_engine::{EngineError, HumanActionType};

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Jsonl,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MetricsLevel {
    /// Verdict and event counts only.
    Basic,
    /// Adds per-seat outcomes and the full game log.
    Detailed,
}

#[derive(Debug, Error)]
pub enum SimulatorError {
    #[error("engine rejected the configuration: {0}")]
    Engine(#[from] EngineError),
    #[error("unknown speech provider `{0}`")]
    UnknownProvider(String),
    #[error("unknown language `{0}`")]
    UnknownLanguage(String),
    /// All seats are AI, so the engine should never wait on a human.
    #[error("game suspended on a {0} request with no human at the table")]
    UnexpectedRequest(HumanActionType),
    #[error("game did not finish within {0} steps")]
    Stalled(usize),
}
