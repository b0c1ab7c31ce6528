use serde::{Deserialize, Serialize};

use crate::domain::catalogue::DEFAULT_PLAYERS;
use crate::errors::EngineError;

/// Language used for generated speech and fallback lines.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "zh-Hant")]
    ZhHant,
    #[default]
    #[serde(rename = "en")]
    En,
}

impl Language {
    pub const fn tag(self) -> &'static str {
        match self {
            Language::ZhHant => "zh-Hant",
            Language::En => "en",
        }
    }

    /// Parses a language tag; accepts the common aliases used by clients.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" | "english" => Some(Language::En),
            "zh-hant" | "zh-tw" | "zh" => Some(Language::ZhHant),
            _ => None,
        }
    }
}

/// A seat taken over by a human.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HumanParticipant {
    /// 1-based seat id.
    pub id: String,
    pub display_name: String,
}

impl HumanParticipant {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameConfig {
    pub total_players: usize,
    pub allow_hunter: bool,
    pub human_players: Vec<HumanParticipant>,
    /// Opaque to the engine; recorded for the presentation layer.
    pub ai_providers: Vec<String>,
    pub seed: Option<u64>,
    pub language: Language,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            total_players: DEFAULT_PLAYERS,
            allow_hunter: true,
            human_players: Vec::new(),
            ai_providers: vec!["gpt".to_string()],
            seed: None,
            language: Language::En,
        }
    }
}

impl GameConfig {
    pub fn from_json(value: serde_json::Value) -> Result<Self, EngineError> {
        serde_json::from_value(value).map_err(|e| EngineError::InvalidConfig(e.to_string()))
    }

    pub fn with_players(mut self, total_players: usize) -> Self {
        self.total_players = total_players;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_hunter(mut self, allow: bool) -> Self {
        self.allow_hunter = allow;
        self
    }

    pub fn with_human(mut self, seat: impl Into<String>, name: impl Into<String>) -> Self {
        self.human_players.push(HumanParticipant::new(seat, name));
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}
