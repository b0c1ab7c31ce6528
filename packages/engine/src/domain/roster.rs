//! Seats, roles and human overrides for a new game.

use tracing::warn;

use crate::domain::catalogue::{default_display_name, role_bag};
use crate::domain::config::GameConfig;
use crate::domain::player::PlayerState;
use crate::domain::rng::GameRng;
use crate::errors::EngineError;

/// Deals a shuffled role bag to seats `1..=N`.
///
/// Seats named by a human override take that display name and are marked human;
/// every other seat is AI-controlled with a pooled default name.
pub fn build_roster(config: &GameConfig, rng: &mut GameRng) -> Result<Vec<PlayerState>, EngineError> {
    let bag = role_bag(config.total_players, config.allow_hunter);
    if bag.is_empty() {
        return Err(EngineError::EmptyRoleBag {
            total_players: config.total_players,
        });
    }

    let dealt = rng.shuffled(&bag);
    let seats = dealt.len();

    for human in &config.human_players {
        let in_range = human
            .id
            .parse::<usize>()
            .is_ok_and(|seat| (1..=seats).contains(&seat));
        if !in_range {
            warn!(seat = %human.id, seats, "Ignoring human override for unknown seat");
        }
    }

    let players = dealt
        .into_iter()
        .enumerate()
        .map(|(index, role)| {
            let id = (index + 1).to_string();
            match config.human_players.iter().find(|h| h.id == id) {
                Some(human) => PlayerState::new(id, human.display_name.clone(), role.definition(), true),
                None => PlayerState::new(id, default_display_name(index), role.definition(), false),
            }
        })
        .collect();

    Ok(players)
}
