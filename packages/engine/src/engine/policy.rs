//! Decision policy for AI-controlled players.

use crate::domain::player::{PlayerId, PlayerState};
use crate::domain::rng::GameRng;
use crate::domain::roles::Alignment;

/// Probability that an AI Witch spends her healing potion on the wolves' target.
pub const AI_HEAL_CHANCE: f64 = 0.5;
/// Probability that an AI Witch spends her poison on a night she is asked.
pub const AI_POISON_CHANCE: f64 = 0.25;

/// Picks the ballot of an AI voter. `candidates` are in option order.
///
/// Werewolves take the first good candidate, a Seer takes the first candidate
/// she has seen to be a werewolf, and everyone else votes at random.
pub fn choose_vote(voter: &PlayerState, candidates: &[PlayerState], rng: &mut GameRng) -> Option<PlayerId> {
    if voter.alignment() == Alignment::Werewolf {
        if let Some(target) = candidates.iter().find(|c| c.alignment() == Alignment::Good) {
            return Some(target.id.clone());
        }
    }

    if voter.role.capabilities.inspects {
        let known_wolf = candidates
            .iter()
            .find(|c| voter.notes.seer_results().get(&c.id) == Some(&Alignment::Werewolf));
        if let Some(target) = known_wolf {
            return Some(target.id.clone());
        }
    }

    rng.choose(candidates).map(|c| c.id.clone())
}
