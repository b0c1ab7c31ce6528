//! Property tests for dealing and win evaluation (pure domain, no engine).

use std::env;

use proptest::prelude::*;

use crate::domain::catalogue::role_bag;
use crate::domain::config::GameConfig;
use crate::domain::player::PlayerState;
use crate::domain::rng::GameRng;
use crate::domain::roles::{Alignment, RoleName};
use crate::domain::roster::build_roster;
use crate::domain::win::evaluate_winner;

fn proptest_config() -> ProptestConfig {
    let cases = env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(32);

    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}

fn sorted(mut roles: Vec<RoleName>) -> Vec<RoleName> {
    roles.sort();
    roles
}

proptest! {
    #![proptest_config(proptest_config())]

    /// Property: the dealt roles are a permutation of the table's bag.
    #[test]
    fn prop_roster_is_permutation_of_bag(
        players in 6usize..=8,
        allow_hunter in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let cfg = GameConfig::default()
            .with_players(players)
            .with_hunter(allow_hunter)
            .with_seed(seed);
        let roster = build_roster(&cfg, &mut GameRng::new(cfg.seed)).unwrap();
        let dealt: Vec<RoleName> = roster.iter().map(|p| p.role.name).collect();

        prop_assert_eq!(sorted(dealt), sorted(role_bag(players, allow_hunter)));
    }

    /// Property: the evaluator agrees with a direct count of living players.
    #[test]
    fn prop_winner_matches_counts(
        seats in prop::collection::vec((any::<bool>(), any::<bool>()), 0..12),
    ) {
        let players: Vec<PlayerState> = seats
            .iter()
            .enumerate()
            .map(|(i, &(wolf, living))| {
                let role = if wolf { RoleName::Werewolf } else { RoleName::Villager };
                let mut p = PlayerState::new((i + 1).to_string(), "p", role.definition(), false);
                if !living {
                    p.kill();
                }
                p
            })
            .collect();

        let wolves = seats.iter().filter(|&&(w, l)| w && l).count();
        let good = seats.iter().filter(|&&(w, l)| !w && l).count();
        let expected = if wolves == 0 {
            Some(Alignment::Good)
        } else if wolves >= good {
            Some(Alignment::Werewolf)
        } else {
            None
        };

        prop_assert_eq!(evaluate_winner(&players), expected);
    }
}
