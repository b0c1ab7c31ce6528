use std::ops::RangeInclusive;

use crate::domain::roles::RoleName;

pub const SUPPORTED_PLAYERS: RangeInclusive<usize> = 6..=8;
pub const DEFAULT_PLAYERS: usize = 6;
pub const NAME_POOL_SIZE: usize = 12;

const BAG_6: [RoleName; 6] = [
    RoleName::Werewolf,
    RoleName::Werewolf,
    RoleName::Seer,
    RoleName::Witch,
    RoleName::Villager,
    RoleName::Villager,
];

const BAG_7: [RoleName; 7] = [
    RoleName::Werewolf,
    RoleName::Werewolf,
    RoleName::Seer,
    RoleName::Witch,
    RoleName::Hunter,
    RoleName::Villager,
    RoleName::Villager,
];

const BAG_8: [RoleName; 8] = [
    RoleName::Werewolf,
    RoleName::Werewolf,
    RoleName::Werewolf,
    RoleName::Seer,
    RoleName::Witch,
    RoleName::Hunter,
    RoleName::Villager,
    RoleName::Villager,
];

/// Ordered role bag for a table size. Unknown sizes use the 6-player bag.
pub fn base_bag(total_players: usize) -> &'static [RoleName] {
    match total_players {
        7 => &BAG_7,
        8 => &BAG_8,
        _ => &BAG_6,
    }
}

/// Role bag actually dealt: the base bag with Hunters swapped for Villagers
/// when the table disables the Hunter.
pub fn role_bag(total_players: usize, allow_hunter: bool) -> Vec<RoleName> {
    base_bag(total_players)
        .iter()
        .map(|&role| match role {
            RoleName::Hunter if !allow_hunter => RoleName::Villager,
            other => other,
        })
        .collect()
}

/// Default name for a 0-based seat index.
pub fn default_display_name(index: usize) -> String {
    if index < NAME_POOL_SIZE {
        format!("AI Player {}", index + 1)
    } else {
        format!("Player {}", index + 1)
    }
}
