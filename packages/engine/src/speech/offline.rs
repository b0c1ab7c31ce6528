use async_trait::async_trait;

use crate::speech::{SpeechContext, SpeechError, SpeechProvider};

/// Provider with no backend. Every call degrades to a fallback line.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineSpeech;

impl OfflineSpeech {
    pub const NAME: &'static str = "offline";
}

#[async_trait]
impl SpeechProvider for OfflineSpeech {
    async fn generate_speech(&self, _ctx: &SpeechContext) -> Result<String, SpeechError> {
        Err(SpeechError::Unconfigured)
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}
