//! Runs one all-AI game in memory and records what happened.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;
use werewolf_engine::domain::{LogEntry, PlayerId};
use werewolf_engine::{Alignment, GameConfig, GameEngine, PlayerState, SpeechProvider, StepOutcome};

use crate::types::SimulatorError;

/// Hard stop for a single game. Real games finish in a few dozen steps.
pub const MAX_STEPS: usize = 10_000;

/// Result of simulating a complete game.
#[derive(Debug, Clone)]
pub struct GameResult {
    pub winner: Alignment,
    /// Day number on which the game ended.
    pub days: u32,
    /// Number of `step` calls it took.
    pub steps: usize,
    pub players: Vec<PlayerState>,
    /// Day each eliminated seat fell on.
    pub deaths: BTreeMap<PlayerId, u32>,
    pub logs: Vec<LogEntry>,
}

/// Drives a [`GameEngine`] to its verdict without any human seats.
pub struct Simulator {
    engine: GameEngine,
    config: GameConfig,
}

impl Simulator {
    pub fn new(speech: Arc<dyn SpeechProvider>, config: GameConfig) -> Self {
        Self {
            engine: GameEngine::new(speech),
            config: GameConfig {
                human_players: Vec::new(),
                ..config
            },
        }
    }

    pub async fn simulate_game(mut self) -> Result<GameResult, SimulatorError> {
        self.engine.start(self.config.clone())?;

        let mut deaths = BTreeMap::new();
        for steps in 1..=MAX_STEPS {
            let outcome = self.engine.step().await;

            let day = self.engine.day();
            for p in self.engine.players().iter().filter(|p| !p.is_alive()) {
                deaths.entry(p.id.clone()).or_insert(day);
            }

            match outcome {
                StepOutcome::Continue => {}
                StepOutcome::Terminal(winner) => {
                    debug!(%winner, day, steps, "Simulated game finished");
                    let snapshot = self.engine.snapshot();
                    return Ok(GameResult {
                        winner,
                        days: day,
                        steps,
                        players: snapshot.players,
                        deaths,
                        logs: snapshot.logs,
                    });
                }
                StepOutcome::Suspended(request) => {
                    return Err(SimulatorError::UnexpectedRequest(request.action_type));
                }
                StepOutcome::NotStarted => return Err(SimulatorError::Stalled(steps)),
            }
        }
        Err(SimulatorError::Stalled(MAX_STEPS))
    }
}
