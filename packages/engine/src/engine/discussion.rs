//! Day discussion: one speaker per step, in seat order.

use super::broker::RequestSpec;
use super::GameEngine;
use crate::domain::player;
use crate::domain::request::{HumanActionType, TextInputSpec};
use crate::domain::state::{DiscussionContext, Phase, VoteContext};
use crate::speech::SpeechTopic;

impl GameEngine {
    pub(super) async fn run_discussion(&mut self) {
        let ctx = self
            .discussion
            .get_or_insert_with(|| DiscussionContext::begin(&self.players));

        let Some(speaker_id) = ctx.next_speaker() else {
            self.discussion = None;
            self.enter(Phase::DayVote);
            self.vote = Some(VoteContext::begin(&self.players));
            self.log("Discussion is over. Time to vote on who to banish.");
            return;
        };

        // The speaker list is fixed at daybreak; whoever was on it gets a turn.
        let Some(speaker) = player::find(&self.players, &speaker_id).cloned() else {
            return;
        };

        if speaker.is_human {
            self.broker.issue(
                HumanActionType::DaySpeech,
                &speaker,
                RequestSpec {
                    title: "Your turn to speak".to_string(),
                    description: "Say something to everyone at the table.".to_string(),
                    options: Vec::new(),
                    text_input: Some(TextInputSpec {
                        placeholder: "Type what you want to say...".to_string(),
                        multiline: true,
                    }),
                },
            );
            return;
        }

        let ctx = self.speech_context(&speaker, SpeechTopic::Discussion);
        let line = self.speak(ctx).await;
        self.log(format!("{}: {line}", speaker.display_name));
    }

    pub(super) fn record_speech(&mut self, speaker_id: &str, text: &str) {
        let name = self.name_of(speaker_id);
        let text = text.trim();
        if text.is_empty() {
            self.log(format!("{name} stays silent."));
        } else {
            self.log(format!("{name}: {text}"));
        }
    }
}
