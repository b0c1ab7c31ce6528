//! Night resolver: wolves, then seers, then the witch, then dawn.

use tracing::debug;

use super::broker::{RequestSpec, SKIP_OPTION};
use super::policy::{AI_HEAL_CHANCE, AI_POISON_CHANCE};
use super::GameEngine;
use crate::domain::player::{self, alive, PlayerState};
use crate::domain::request::{ActionOption, HumanActionType};
use crate::domain::state::{DiscussionContext, NightContext, NightStep, Phase};
use crate::domain::Alignment;

pub(super) fn option_for(p: &PlayerState) -> ActionOption {
    ActionOption::new(p.id.clone(), p.display_name.clone())
}

/// Living players other than `id`, as selectable options.
pub(super) fn others(players: &[PlayerState], id: &str) -> Vec<ActionOption> {
    alive(players).filter(|p| p.id != id).map(option_for).collect()
}

impl GameEngine {
    /// Runs night steps until a human must act or the night is over.
    pub(super) fn run_night(&mut self) {
        let mut ctx = match self.night.take() {
            Some(ctx) => ctx,
            None => NightContext::begin(&self.players),
        };

        while !self.broker.is_waiting() && ctx.step != NightStep::Complete {
            debug!(day = self.day, step = ?ctx.step, "Night step");
            match ctx.step {
                NightStep::Intro => {
                    self.day += 1;
                    self.log(format!("Night {} falls over the village.", self.day));
                    ctx.step = NightStep::Werewolf;
                }
                NightStep::Werewolf => self.resolve_werewolves(&mut ctx),
                NightStep::Seer => self.resolve_seer(&mut ctx),
                NightStep::WitchHeal => self.resolve_witch_heal(&mut ctx),
                NightStep::WitchPoison => self.resolve_witch_poison(&mut ctx),
                NightStep::Resolution => {
                    self.resolve_dawn(&ctx);
                    ctx.step = NightStep::Complete;
                }
                NightStep::Complete => {}
            }
        }

        if self.broker.is_waiting() {
            self.night = Some(ctx);
            return;
        }

        if self.phase != Phase::GameOver {
            self.enter(Phase::DayDiscussion);
            self.discussion = Some(DiscussionContext::begin(&self.players));
            self.log("Day breaks. The villagers gather in the square to talk.");
        }
    }

    fn resolve_werewolves(&mut self, ctx: &mut NightContext) {
        let prey: Vec<ActionOption> = alive(&self.players)
            .filter(|p| p.alignment() != Alignment::Werewolf)
            .map(option_for)
            .collect();
        let wolves: Vec<&PlayerState> = alive(&self.players)
            .filter(|p| p.role.capabilities.hunts)
            .collect();

        if wolves.is_empty() || prey.is_empty() {
            ctx.step = NightStep::Seer;
            return;
        }

        if ctx.werewolf_target.is_none() {
            if let Some(human) = wolves.iter().copied().find(|p| p.is_human) {
                self.broker.issue(
                    HumanActionType::WerewolfTarget,
                    human,
                    RequestSpec::choice(
                        "Choose tonight's target",
                        "Pick a player outside the pack for the werewolves to attack tonight.",
                        prey,
                    ),
                );
                return;
            }

            if let Some(target) = self.rng.choose(&prey) {
                let message = format!("The pack gathers in the dark and sets its eyes on {}.", target.label);
                ctx.werewolf_target = Some(target.id.clone());
                self.log_private(message);
            }
        }

        ctx.step = NightStep::Seer;
    }

    fn resolve_seer(&mut self, ctx: &mut NightContext) {
        let Some(seer_id) = ctx.seer_queue.pop_front() else {
            ctx.step = NightStep::WitchHeal;
            return;
        };
        let Some(seer) = player::find_alive(&self.players, &seer_id) else {
            return;
        };
        let candidates = others(&self.players, &seer_id);
        if candidates.is_empty() {
            return;
        }

        if seer.is_human {
            self.broker.issue(
                HumanActionType::SeerCheck,
                seer,
                RequestSpec::choice(
                    "Seer's vision",
                    "Choose a player to learn which side they are on.",
                    candidates,
                ),
            );
            return;
        }

        if let Some(target) = self.rng.choose(&candidates) {
            let target_id = target.id.clone();
            self.inspect(&seer_id, &target_id);
        }
    }

    /// Records what `seer_id` learns about `target_id`.
    pub(super) fn inspect(&mut self, seer_id: &str, target_id: &str) {
        let Some(alignment) = player::find(&self.players, target_id).map(PlayerState::alignment) else {
            return;
        };
        let target_name = self.name_of(target_id);
        let Some(seer) = player::find_mut(&mut self.players, seer_id) else {
            return;
        };
        seer.notes.record_inspection(target_id, alignment);
        let message = format!(
            "{} peers into the true nature of {target_name}: {alignment}.",
            seer.display_name
        );
        self.log_private(message);
    }

    fn resolve_witch_heal(&mut self, ctx: &mut NightContext) {
        let Some(witch_id) = ctx.witch_queue.pop_front() else {
            ctx.step = NightStep::WitchPoison;
            return;
        };
        let Some(witch) = player::find_alive(&self.players, &witch_id) else {
            return;
        };
        let Some(target_id) = ctx.werewolf_target.clone() else {
            return;
        };
        if !witch.notes.heal_available() {
            return;
        }

        if witch.is_human {
            let target_name = self.name_of(&target_id);
            self.broker.issue(
                HumanActionType::WitchHeal,
                witch,
                RequestSpec::choice(
                    "Use the healing potion?",
                    format!("{target_name} was attacked by the werewolves tonight. Will you save them?"),
                    vec![
                        ActionOption::new(target_id, format!("Save {target_name}")),
                        ActionOption::new(SKIP_OPTION, "Keep the potion"),
                    ],
                ),
            );
            return;
        }

        if self.rng.chance(AI_HEAL_CHANCE) {
            self.heal(ctx, &witch_id, &target_id);
        }
    }

    pub(super) fn heal(&mut self, ctx: &mut NightContext, witch_id: &str, target_id: &str) {
        let target_name = self.name_of(target_id);
        let Some(witch) = player::find_mut(&mut self.players, witch_id) else {
            return;
        };
        if !witch.notes.consume_heal() {
            return;
        }
        let message = format!("{} uses the healing potion on {target_name}.", witch.display_name);
        ctx.healed_target = Some(target_id.to_string());
        self.log_private(message);
    }

    fn resolve_witch_poison(&mut self, ctx: &mut NightContext) {
        if ctx.poison_asked {
            ctx.step = NightStep::Resolution;
            return;
        }
        let Some(witch) =
            alive(&self.players).find(|p| p.role.capabilities.poisons && p.notes.poison_available())
        else {
            ctx.step = NightStep::Resolution;
            return;
        };
        let targets = others(&self.players, &witch.id);
        if targets.is_empty() {
            ctx.step = NightStep::Resolution;
            return;
        }

        ctx.poison_asked = true;

        if witch.is_human {
            let mut options = vec![ActionOption::new(SKIP_OPTION, "Keep the poison")];
            options.extend(targets);
            self.broker.issue(
                HumanActionType::WitchPoison,
                witch,
                RequestSpec::choice(
                    "Use the poison?",
                    "Choose a player to poison, or skip.",
                    options,
                ),
            );
            return;
        }

        let witch_id = witch.id.clone();
        if self.rng.chance(AI_POISON_CHANCE) {
            if let Some(target) = self.rng.choose(&targets) {
                let target_id = target.id.clone();
                self.poison(ctx, &witch_id, &target_id);
            }
        }
        ctx.step = NightStep::Resolution;
    }

    pub(super) fn poison(&mut self, ctx: &mut NightContext, witch_id: &str, target_id: &str) {
        let target_name = self.name_of(target_id);
        let Some(witch) = player::find_mut(&mut self.players, witch_id) else {
            return;
        };
        if !witch.notes.consume_poison() {
            return;
        }
        let message = format!("{} secretly poisons {target_name}.", witch.display_name);
        ctx.poisoned_target = Some(target_id.to_string());
        self.log_private(message);
    }

    /// Applies the night's deaths. A healed target can still die to poison.
    fn resolve_dawn(&mut self, ctx: &NightContext) {
        let mut casualties: Vec<(&str, &str)> = Vec::new();
        if let Some(target) = ctx.werewolf_target.as_deref() {
            if ctx.healed_target.as_deref() != Some(target) {
                casualties.push((target, "the werewolf attack"));
            }
        }
        if let Some(target) = ctx.poisoned_target.as_deref() {
            casualties.push((target, "the witch's poison"));
        }

        if casualties.is_empty() {
            self.log("The night passes peacefully. Nobody died.");
        }
        for (id, cause) in casualties {
            self.eliminate(id, cause);
        }
        self.check_winner();
    }
}
