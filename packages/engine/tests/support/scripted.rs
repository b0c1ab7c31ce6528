//! Speech providers with predictable output.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use werewolf_engine::{SpeechContext, SpeechError, SpeechProvider};

/// Always says the same line and counts how often it was asked.
pub struct ScriptedSpeech {
    line: String,
    calls: AtomicUsize,
}

impl ScriptedSpeech {
    pub fn new(line: impl Into<String>) -> Self {
        Self {
            line: line.into(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SpeechProvider for ScriptedSpeech {
    async fn generate_speech(&self, _ctx: &SpeechContext) -> Result<String, SpeechError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.line.clone())
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

/// Answers with whitespace only, which the engine must treat as no answer.
pub struct BlankSpeech;

#[async_trait]
impl SpeechProvider for BlankSpeech {
    async fn generate_speech(&self, _ctx: &SpeechContext) -> Result<String, SpeechError> {
        Ok("   ".to_string())
    }

    fn name(&self) -> &'static str {
        "blank"
    }
}
