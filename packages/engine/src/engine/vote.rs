//! Day vote: pending Hunter shots first, then one voter per step, then the tally.

use std::collections::BTreeMap;

use tracing::debug;

use super::broker::{RequestSpec, SKIP_OPTION};
use super::night::others;
use super::policy::choose_vote;
use super::GameEngine;
use crate::domain::player::{self, PlayerState};
use crate::domain::request::{ActionOption, HumanActionType};
use crate::domain::state::{Phase, VoteContext};
use crate::speech::SpeechTopic;

impl GameEngine {
    pub(super) async fn run_vote(&mut self) {
        if !self.hunters.is_empty() {
            self.resolve_hunter();
            return;
        }

        let ctx = self
            .vote
            .get_or_insert_with(|| VoteContext::begin(&self.players));
        let Some(voter_id) = ctx.next_voter() else {
            self.tally_votes();
            return;
        };

        let Some(voter) = player::find_alive(&self.players, &voter_id).cloned() else {
            return;
        };
        let options = others(&self.players, &voter_id);
        if options.is_empty() {
            return;
        }

        if voter.is_human {
            self.broker.issue(
                HumanActionType::DayVote,
                &voter,
                RequestSpec::choice("Cast your vote", "Choose who you want to banish.", options),
            );
            return;
        }

        let candidates: Vec<PlayerState> = options
            .iter()
            .filter_map(|o| player::find(&self.players, &o.id).cloned())
            .collect();
        let Some(target_id) = choose_vote(&voter, &candidates, &mut self.rng) else {
            return;
        };
        self.cast_vote(&voter_id, &target_id);

        let ctx = self
            .speech_context(&voter, SpeechTopic::Vote)
            .with_suggested_target(target_id);
        let reasoning = self.speak(ctx).await;
        self.log(format!("{}: {reasoning}", voter.display_name));
    }

    pub(super) fn cast_vote(&mut self, voter_id: &str, target_id: &str) {
        if let Some(ctx) = self.vote.as_mut() {
            ctx.cast(voter_id, target_id);
        }
        let message = format!("{} votes for {}.", self.name_of(voter_id), self.name_of(target_id));
        self.log(message);
    }

    /// Resolves the oldest pending revenge shot, or asks its human owner.
    fn resolve_hunter(&mut self) {
        let Some(pending) = self.hunters.front().cloned() else {
            return;
        };
        let Some(hunter) = player::find(&self.players, &pending.player_id).cloned() else {
            self.hunters.pop_front();
            return;
        };
        let targets = others(&self.players, &hunter.id);

        if hunter.is_human && !targets.is_empty() {
            let mut options = vec![ActionOption::new(SKIP_OPTION, "Hold your fire")];
            options.extend(targets);
            self.broker.issue(
                HumanActionType::HunterShoot,
                &hunter,
                RequestSpec::choice(
                    "Hunter's last shot",
                    format!("You fell to {}. You may take one player down with you.", pending.cause),
                    options,
                ),
            );
            return;
        }

        self.hunters.pop_front();
        if let Some(target) = self.rng.choose(&targets) {
            let target_id = target.id.clone();
            self.fire(&hunter.id, &target_id);
        }
        self.check_winner();
    }

    /// Drops the pending shot owned by `hunter_id` and fires it at `target`, if any.
    pub(super) fn settle_hunter(&mut self, hunter_id: &str, target: Option<&str>) {
        if let Some(at) = self.hunters.iter().position(|h| h.player_id == hunter_id) {
            self.hunters.remove(at);
        }
        match target {
            Some(target_id) => self.fire(hunter_id, target_id),
            None => {
                let message = format!("{} lowers the gun without firing.", self.name_of(hunter_id));
                self.log(message);
            }
        }
        self.check_winner();
    }

    fn fire(&mut self, hunter_id: &str, target_id: &str) {
        let hunter = self.name_of(hunter_id);
        debug!(hunter = hunter_id, target = target_id, "Hunter fires");
        self.log(format!("{hunter} fires a final shot at {}.", self.name_of(target_id)));
        self.eliminate(target_id, &format!("{hunter}'s revenge shot"));
    }

    /// Strict plurality banishes; any tie at the top, or no ballots, banishes nobody.
    fn tally_votes(&mut self) {
        let votes = self.vote.take().map(|ctx| ctx.votes).unwrap_or_default();

        let mut tally: BTreeMap<&str, usize> = BTreeMap::new();
        for target in votes.values() {
            *tally.entry(target.as_str()).or_default() += 1;
        }
        let top = tally.values().copied().max().unwrap_or(0);
        let leaders: Vec<(&str, usize)> = tally
            .iter()
            .filter(|(_, count)| **count == top)
            .map(|(&id, &count)| (id, count))
            .collect();

        debug!(day = self.day, ?tally, "Votes tallied");

        match leaders.as_slice() {
            [(target_id, count)] => {
                let message = format!("{} is banished with {count} votes.", self.name_of(target_id));
                self.log(message);
                self.eliminate(target_id, "the day vote");
            }
            _ => self.log("The vote is inconclusive. Nobody is banished today."),
        }

        if !self.check_winner() {
            self.enter(Phase::Night);
            self.night = None;
            self.log("Night falls once more.");
        }
    }
}
