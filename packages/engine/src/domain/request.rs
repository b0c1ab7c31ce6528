//! Wire shapes for the human action protocol.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::player::PlayerId;
use crate::domain::roles::RoleName;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HumanActionType {
    WerewolfTarget,
    SeerCheck,
    WitchHeal,
    WitchPoison,
    DaySpeech,
    DayVote,
    HunterShoot,
}

impl HumanActionType {
    pub const fn as_str(self) -> &'static str {
        match self {
            HumanActionType::WerewolfTarget => "werewolf-target",
            HumanActionType::SeerCheck => "seer-check",
            HumanActionType::WitchHeal => "witch-heal",
            HumanActionType::WitchPoison => "witch-poison",
            HumanActionType::DaySpeech => "day-speech",
            HumanActionType::DayVote => "day-vote",
            HumanActionType::HunterShoot => "hunter-shoot",
        }
    }
}

impl fmt::Display for HumanActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionOption {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
}

impl ActionOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            disabled: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextInputSpec {
    pub placeholder: String,
    pub multiline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HumanActionRequest {
    pub request_id: String,
    pub player_id: PlayerId,
    pub role: RoleName,
    #[serde(rename = "type")]
    pub action_type: HumanActionType,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub options: Vec<ActionOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_input: Option<TextInputSpec>,
}

impl HumanActionRequest {
    /// The offered option with `id`, if it exists and is selectable.
    pub fn selectable(&self, id: &str) -> Option<&ActionOption> {
        self.options.iter().find(|o| o.id == id && !o.disabled)
    }
}

/// What a human sends back to resume a suspended resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HumanActionSubmission {
    pub request_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chosen_option_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl HumanActionSubmission {
    pub fn choose(request_id: impl Into<String>, option_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            chosen_option_id: Some(option_id.into()),
            text: None,
        }
    }

    pub fn speak(request_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            chosen_option_id: None,
            text: Some(text.into()),
        }
    }
}
