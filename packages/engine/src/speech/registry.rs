//! Speech provider lookup by identifier.
//!
//! `GameConfig::ai_providers` carries opaque identifiers; hosts resolve them
//! here. Factories read their own settings and have no other side effects.

use std::sync::Arc;

use crate::speech::{HttpSpeechProvider, OfflineSpeech, SpeechProvider};

pub struct SpeechFactory {
    pub name: &'static str,
    pub make: fn() -> Arc<dyn SpeechProvider>,
}

static SPEECH_FACTORIES: &[SpeechFactory] = &[
    SpeechFactory {
        name: HttpSpeechProvider::NAME,
        make: make_http,
    },
    SpeechFactory {
        name: "openai",
        make: make_http,
    },
    SpeechFactory {
        name: OfflineSpeech::NAME,
        make: make_offline,
    },
];

pub fn registered_providers() -> &'static [SpeechFactory] {
    SPEECH_FACTORIES
}

/// Finds a provider factory by identifier (case-insensitive).
pub fn by_name(name: &str) -> Option<&'static SpeechFactory> {
    let name = name.trim();
    registered_providers()
        .iter()
        .find(|factory| factory.name.eq_ignore_ascii_case(name))
}

fn make_http() -> Arc<dyn SpeechProvider> {
    Arc::new(HttpSpeechProvider::from_env())
}

fn make_offline() -> Arc<dyn SpeechProvider> {
    Arc::new(OfflineSpeech)
}
