//! Fixtures for engine unit tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use super::{EngineOptions, GameEngine};
use crate::domain::player::PlayerState;
use crate::domain::request::{HumanActionSubmission, HumanActionType};
use crate::domain::roles::RoleName;
use crate::domain::snapshot::EngineSnapshot;
use crate::domain::state::{DiscussionContext, Phase};
use crate::domain::GameConfig;
use crate::speech::{SpeechContext, SpeechError, SpeechProvider};

/// Answers `"<name> speaks."` and remembers every context it saw.
#[derive(Default)]
pub struct EchoSpeech {
    pub seen: Mutex<Vec<SpeechContext>>,
}

#[async_trait]
impl SpeechProvider for EchoSpeech {
    async fn generate_speech(&self, ctx: &SpeechContext) -> Result<String, SpeechError> {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(ctx.clone());
        }
        Ok(format!("{} speaks.", ctx.speaker.name))
    }

    fn name(&self) -> &'static str {
        "echo"
    }
}

pub struct FailingSpeech;

#[async_trait]
impl SpeechProvider for FailingSpeech {
    async fn generate_speech(&self, _ctx: &SpeechContext) -> Result<String, SpeechError> {
        Err(SpeechError::RequestFailed("connection refused".into()))
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

pub struct SlowSpeech(pub Duration);

#[async_trait]
impl SpeechProvider for SlowSpeech {
    async fn generate_speech(&self, _ctx: &SpeechContext) -> Result<String, SpeechError> {
        tokio::time::sleep(self.0).await;
        Ok("too late".into())
    }

    fn name(&self) -> &'static str {
        "slow"
    }
}

pub fn seat(id: &str, role: RoleName, human: bool) -> PlayerState {
    PlayerState::new(id, format!("P{id}"), role.definition(), human)
}

pub fn engine_with(speech: Arc<dyn SpeechProvider>, players: Vec<PlayerState>) -> GameEngine {
    let mut engine = GameEngine::with_options(
        speech,
        EngineOptions {
            speech_timeout: Duration::from_millis(200),
            ..EngineOptions::default()
        },
    );
    engine.start_with_players(GameConfig::default().with_seed(7), players);
    engine
}

/// An engine whose first night is already over, sitting at the vote.
pub fn at_vote(players: Vec<PlayerState>) -> GameEngine {
    let mut engine = engine_with(Arc::new(EchoSpeech::default()), players);
    engine.day = 1;
    engine.phase = Phase::DayVote;
    engine
}

pub fn at_discussion(speech: Arc<dyn SpeechProvider>, players: Vec<PlayerState>) -> GameEngine {
    let mut engine = engine_with(speech, players);
    engine.day = 1;
    engine.phase = Phase::DayDiscussion;
    engine.discussion = Some(DiscussionContext::begin(&engine.players));
    engine
}

/// Answers the pending request, which must be of `kind`, with `option`.
pub async fn answer(engine: &mut GameEngine, kind: HumanActionType, option: &str) -> EngineSnapshot {
    let request = engine
        .pending_request()
        .cloned()
        .unwrap_or_else(|| panic!("expected a pending {kind} request"));
    assert_eq!(request.action_type, kind);
    engine
        .submit_human_action(HumanActionSubmission::choose(request.request_id, option))
        .await
}

pub fn messages(snapshot: &EngineSnapshot) -> Vec<&str> {
    snapshot.logs.iter().map(|e| e.message.as_str()).collect()
}
