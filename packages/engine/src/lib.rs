//! Turn-by-turn engine for a Werewolf/Mafia social-deduction game played by a
//! mix of AI and human participants.
//!
//! The [`GameEngine`] is driven by repeated [`GameEngine::progress`] calls and
//! resumed with [`GameEngine::submit_human_action`] whenever a human decision
//! is pending. Everything a presentation layer needs is in [`EngineSnapshot`].

pub mod domain;
pub mod engine;
pub mod errors;
pub mod speech;
pub mod telemetry;


pub use domain::{
    Alignment, EngineSnapshot, GameConfig, HumanActionRequest, HumanActionSubmission,
    HumanActionType, HumanParticipant, Language, LogEntry, Phase, PlayerState, RoleName,
};
pub use engine::{EngineOptions, GameEngine, StepOutcome, SKIP_OPTION};
pub use errors::EngineError;
pub use speech::{SpeechContext, SpeechError, SpeechProvider};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
