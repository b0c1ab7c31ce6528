//! Human action broker: at most one outstanding request per game.

use tracing::warn;

use crate::domain::player::PlayerState;
use crate::domain::request::{
    ActionOption, HumanActionRequest, HumanActionSubmission, HumanActionType, TextInputSpec,
};

/// Option id used by requests that may be declined.
pub const SKIP_OPTION: &str = "skip";

/// Fields of a request that vary per action.
pub(crate) struct RequestSpec {
    pub title: String,
    pub description: String,
    pub options: Vec<ActionOption>,
    pub text_input: Option<TextInputSpec>,
}

impl RequestSpec {
    pub fn choice(title: impl Into<String>, description: impl Into<String>, options: Vec<ActionOption>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            options,
            text_input: None,
        }
    }
}

/// A submission that matched the live request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Accepted {
    pub request: HumanActionRequest,
    pub answer: Answer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Answer {
    Option(String),
    Text(String),
}

impl Answer {
    /// Chosen option id, unless the human declined.
    pub fn target(&self) -> Option<&str> {
        match self {
            Answer::Option(id) if id != SKIP_OPTION => Some(id),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct RequestBroker {
    pending: Option<HumanActionRequest>,
    issued: u64,
}

impl RequestBroker {
    pub fn pending(&self) -> Option<&HumanActionRequest> {
        self.pending.as_ref()
    }

    pub fn is_waiting(&self) -> bool {
        self.pending.is_some()
    }

    /// Parks the game on a fresh request for `player`.
    pub fn issue(&mut self, action_type: HumanActionType, player: &PlayerState, spec: RequestSpec) {
        self.issued += 1;
        self.pending = Some(HumanActionRequest {
            request_id: format!("req-{}", self.issued),
            player_id: player.id.clone(),
            role: player.role.name,
            action_type,
            title: spec.title,
            description: spec.description,
            options: spec.options,
            text_input: spec.text_input,
        });
    }

    /// Takes the live request if `submission` answers it; otherwise leaves it pending.
    pub fn accept(&mut self, submission: &HumanActionSubmission) -> Option<Accepted> {
        let Some(request) = self.pending.as_ref() else {
            warn!(request_id = %submission.request_id, "Ignoring submission: nothing pending");
            return None;
        };
        if request.request_id != submission.request_id {
            warn!(
                request_id = %submission.request_id,
                expected = %request.request_id,
                "Ignoring submission for stale request"
            );
            return None;
        }

        let answer = match request.action_type {
            HumanActionType::DaySpeech => submission.text.clone().map(Answer::Text),
            _ => submission
                .chosen_option_id
                .as_deref()
                .and_then(|id| request.selectable(id))
                .map(|o| Answer::Option(o.id.clone())),
        };
        let Some(answer) = answer else {
            warn!(
                request_id = %submission.request_id,
                action = %request.action_type,
                "Ignoring submission without a valid answer"
            );
            return None;
        };

        let request = self.pending.take()?;
        Some(Accepted { request, answer })
    }
}
