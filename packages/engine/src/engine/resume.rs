//! Applies an accepted human answer to the resolver that asked for it.

use tracing::warn;

use super::broker::{Accepted, Answer};
use super::GameEngine;
use crate::domain::player;
use crate::domain::request::HumanActionType;
use crate::domain::state::NightStep;

impl GameEngine {
    pub(super) fn apply(&mut self, accepted: Accepted) {
        let Accepted { request, answer } = accepted;
        let actor = request.player_id.as_str();
        if player::find(&self.players, actor).is_none() {
            warn!(player = actor, "Dropping answer from unknown player");
            return;
        }

        match request.action_type {
            HumanActionType::WerewolfTarget => {
                let Some(target) = answer.target() else {
                    return;
                };
                if let Some(night) = self.night.as_mut() {
                    night.werewolf_target = Some(target.to_string());
                    night.step = NightStep::Seer;
                }
                let message = format!(
                    "{} marks {} for tonight's attack.",
                    self.name_of(actor),
                    self.name_of(target)
                );
                self.log_private(message);
            }
            HumanActionType::SeerCheck => {
                if let Some(target) = answer.target() {
                    self.inspect(actor, target);
                }
            }
            HumanActionType::WitchHeal => {
                let Some(target) = answer.target() else {
                    return;
                };
                if let Some(mut night) = self.night.take() {
                    self.heal(&mut night, actor, target);
                    self.night = Some(night);
                }
            }
            HumanActionType::WitchPoison => {
                if let Some(mut night) = self.night.take() {
                    if let Some(target) = answer.target() {
                        self.poison(&mut night, actor, target);
                    }
                    night.step = NightStep::Resolution;
                    self.night = Some(night);
                }
            }
            HumanActionType::DaySpeech => {
                if let Answer::Text(text) = &answer {
                    self.record_speech(actor, text);
                }
            }
            HumanActionType::DayVote => {
                if let Some(target) = answer.target() {
                    self.cast_vote(actor, target);
                }
            }
            HumanActionType::HunterShoot => self.settle_hunter(actor, answer.target()),
        }
    }
}
