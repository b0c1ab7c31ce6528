//! Game orchestrator.
//!
//! [`GameEngine`] owns every piece of mutable game state and advances it one
//! atomic step per [`GameEngine::step`] call. Phase resolvers live in the
//! sibling modules as further `impl GameEngine` blocks.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::domain::log::GameLog;
use crate::domain::player::{self, PlayerState};
use crate::domain::request::{HumanActionRequest, HumanActionSubmission};
use crate::domain::rng::GameRng;
use crate::domain::roles::Alignment;
use crate::domain::roster::build_roster;
use crate::domain::snapshot::EngineSnapshot;
use crate::domain::state::{DiscussionContext, HunterPending, NightContext, Phase, VoteContext};
use crate::domain::GameConfig;
use crate::errors::EngineError;
use crate::speech::{fallback, SpeechContext, SpeechError, SpeechProvider, SpeechTopic};

mod broker;
mod discussion;
mod elimination;
mod night;
pub mod policy;
mod resume;
mod vote;

#[cfg(test)]
mod test_helpers;
#[cfg(test)]
mod tests_night;
#[cfg(test)]
mod tests_vote;

pub use broker::SKIP_OPTION;
use broker::RequestBroker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Longest wait for one generated line before falling back.
    pub speech_timeout: Duration,
    /// Public log entries handed to the speech provider.
    pub recent_log_window: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            speech_timeout: Duration::from_secs(15),
            recent_log_window: 8,
        }
    }
}

/// Result of one [`GameEngine::step`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// `start` has not been called.
    NotStarted,
    Continue,
    /// Waiting on a human; resume with `submit_human_action`.
    Suspended(HumanActionRequest),
    Terminal(Alignment),
}

pub struct GameEngine {
    speech: Arc<dyn SpeechProvider>,
    options: EngineOptions,
    rng: GameRng,
    config: GameConfig,
    phase: Phase,
    day: u32,
    players: Vec<PlayerState>,
    log: GameLog,
    broker: RequestBroker,
    winner: Option<Alignment>,
    night: Option<NightContext>,
    discussion: Option<DiscussionContext>,
    vote: Option<VoteContext>,
    hunters: VecDeque<HunterPending>,
}

impl GameEngine {
    pub fn new(speech: Arc<dyn SpeechProvider>) -> Self {
        Self::with_options(speech, EngineOptions::default())
    }

    pub fn with_options(speech: Arc<dyn SpeechProvider>, options: EngineOptions) -> Self {
        Self {
            speech,
            options,
            rng: GameRng::new(None),
            config: GameConfig::default(),
            phase: Phase::Idle,
            day: 0,
            players: Vec::new(),
            log: GameLog::new(),
            broker: RequestBroker::default(),
            winner: None,
            night: None,
            discussion: None,
            vote: None,
            hunters: VecDeque::new(),
        }
    }

    /// Deals a fresh game and parks it at the first nightfall.
    ///
    /// Any game in progress is discarded.
    pub fn start(&mut self, config: GameConfig) -> Result<EngineSnapshot, EngineError> {
        let mut rng = GameRng::new(config.seed);
        let players = build_roster(&config, &mut rng)?;

        info!(
            players = players.len(),
            humans = players.iter().filter(|p| p.is_human).count(),
            seed = ?config.seed,
            provider = self.speech.name(),
            "Starting game"
        );

        self.rng = rng;
        self.reset(config, players);
        Ok(self.snapshot())
    }

    fn reset(&mut self, config: GameConfig, players: Vec<PlayerState>) {
        self.config = config;
        self.players = players;
        self.phase = Phase::Night;
        self.day = 0;
        self.log = GameLog::new();
        self.broker = RequestBroker::default();
        self.winner = None;
        self.night = None;
        self.discussion = None;
        self.vote = None;
        self.hunters.clear();
        self.log("The game begins and roles have been dealt. Night is falling...");
    }

    /// Seats a prepared roster instead of dealing one.
    #[cfg(test)]
    pub(crate) fn start_with_players(&mut self, config: GameConfig, players: Vec<PlayerState>) {
        self.rng = GameRng::new(config.seed);
        self.reset(config, players);
    }

    /// Advances one atomic step. No-op while a request is pending.
    pub async fn step(&mut self) -> StepOutcome {
        if !self.broker.is_waiting() {
            match self.phase {
                Phase::Night => self.run_night(),
                Phase::DayDiscussion => self.run_discussion().await,
                Phase::DayVote => self.run_vote().await,
                Phase::Idle | Phase::GameOver => {}
            }
        }
        self.outcome()
    }

    pub async fn progress(&mut self) -> EngineSnapshot {
        self.step().await;
        self.snapshot()
    }

    /// Resumes a suspended resolver with a human's answer.
    ///
    /// Submissions that do not answer the live request are ignored and the
    /// unchanged snapshot is returned.
    pub async fn submit_human_action(&mut self, submission: HumanActionSubmission) -> EngineSnapshot {
        let Some(accepted) = self.broker.accept(&submission) else {
            return self.snapshot();
        };
        debug!(
            request_id = %accepted.request.request_id,
            action = %accepted.request.action_type,
            player = %accepted.request.player_id,
            "Human action accepted"
        );
        self.apply(accepted);
        self.progress().await
    }

    /// Steps until a human must act, the game ends, or nothing is running.
    pub async fn run_until_decision(&mut self) -> EngineSnapshot {
        while self.step().await == StepOutcome::Continue && self.phase != Phase::GameOver {}
        self.snapshot()
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            day: self.day,
            phase: self.phase,
            players: self.players.clone(),
            logs: self.log.entries().to_vec(),
            pending_request: self.broker.pending().cloned(),
            winner: self.winner,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn winner(&self) -> Option<Alignment> {
        self.winner
    }

    pub fn players(&self) -> &[PlayerState] {
        &self.players
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn pending_request(&self) -> Option<&HumanActionRequest> {
        self.broker.pending()
    }

    fn outcome(&self) -> StepOutcome {
        if let Some(request) = self.broker.pending() {
            return StepOutcome::Suspended(request.clone());
        }
        match (self.phase, self.winner) {
            (Phase::Idle, _) => StepOutcome::NotStarted,
            (Phase::GameOver, Some(winner)) => StepOutcome::Terminal(winner),
            _ => StepOutcome::Continue,
        }
    }

    fn enter(&mut self, phase: Phase) {
        info!(day = self.day, from = %self.phase, to = %phase, "Phase transition");
        self.phase = phase;
    }

    fn log(&mut self, message: impl Into<String>) {
        self.log.append(self.day, self.phase, message);
    }

    fn log_private(&mut self, message: impl Into<String>) {
        self.log.append_private(self.day, self.phase, message);
    }

    fn name_of(&self, id: &str) -> String {
        player::display_name(&self.players, id)
    }

    /// Asks the provider for a line, degrading to a canned one on any failure.
    async fn speak(&mut self, ctx: SpeechContext) -> String {
        let speech = Arc::clone(&self.speech);
        let pending = tokio::time::timeout(self.options.speech_timeout, speech.generate_speech(&ctx));
        let result = match pending.await {
            Ok(Ok(text)) if !text.trim().is_empty() => Ok(text.trim().to_string()),
            Ok(Ok(_)) => Err(SpeechError::EmptyResponse),
            Ok(Err(e)) => Err(e),
            Err(_) => Err(SpeechError::Timeout),
        };

        match result {
            Ok(text) => text,
            Err(error) => {
                warn!(
                    provider = speech.name(),
                    speaker = %ctx.speaker.id,
                    %error,
                    "Speech provider failed, using fallback line"
                );
                let lines = fallback::lines(ctx.speaker.role, ctx.language);
                self.rng.choose(lines).copied().unwrap_or_default().to_string()
            }
        }
    }

    fn speech_context(&self, speaker: &PlayerState, topic: SpeechTopic) -> SpeechContext {
        SpeechContext::for_speaker(
            speaker,
            &self.players,
            self.day,
            topic,
            self.log.public_tail(self.options.recent_log_window),
            self.config.language,
        )
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("provider", &self.speech.name())
            .field("phase", &self.phase)
            .field("day", &self.day)
            .field("winner", &self.winner)
            .finish_non_exhaustive()
    }
}
