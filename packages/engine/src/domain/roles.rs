//! Role identifiers, alignments and the static role library.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Team a player belongs to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Alignment {
    Good,
    Werewolf,
}

impl Alignment {
    /// Short label used in log lines and prompts.
    pub const fn label(self) -> &'static str {
        match self {
            Alignment::Good => "Good",
            Alignment::Werewolf => "Werewolf",
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum RoleName {
    Werewolf,
    Seer,
    Witch,
    Hunter,
    Villager,
}

impl RoleName {
    pub const ALL: [RoleName; 5] = [
        RoleName::Werewolf,
        RoleName::Seer,
        RoleName::Witch,
        RoleName::Hunter,
        RoleName::Villager,
    ];

    /// Shared definition for this role.
    pub fn definition(self) -> &'static RoleDefinition {
        match self {
            RoleName::Werewolf => &WEREWOLF,
            RoleName::Seer => &SEER,
            RoleName::Witch => &WITCH,
            RoleName::Hunter => &HUNTER,
            RoleName::Villager => &VILLAGER,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            RoleName::Werewolf => "Werewolf",
            RoleName::Seer => "Seer",
            RoleName::Witch => "Witch",
            RoleName::Hunter => "Hunter",
            RoleName::Villager => "Villager",
        }
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a role is allowed to do. Resolvers branch on these flags, never on names.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleCapabilities {
    /// Takes part in choosing the nightly kill.
    pub hunts: bool,
    /// Learns one player's alignment per night.
    pub inspects: bool,
    /// Owns a single-use healing potion.
    pub heals: bool,
    /// Owns a single-use poison.
    pub poisons: bool,
    /// Fires one revenge shot when eliminated.
    pub revenge_shot: bool,
}

/// Immutable role card shared by every player holding the role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDefinition {
    pub name: RoleName,
    pub alignment: Alignment,
    pub description: &'static str,
    #[serde(skip)]
    pub capabilities: RoleCapabilities,
}

const NONE: RoleCapabilities = RoleCapabilities {
    hunts: false,
    inspects: false,
    heals: false,
    poisons: false,
    revenge_shot: false,
};

static WEREWOLF: RoleDefinition = RoleDefinition {
    name: RoleName::Werewolf,
    alignment: Alignment::Werewolf,
    description: "Chooses a player to kill each night; wins once the village is overrun.",
    capabilities: RoleCapabilities { hunts: true, ..NONE },
};

static SEER: RoleDefinition = RoleDefinition {
    name: RoleName::Seer,
    alignment: Alignment::Good,
    description: "Learns the alignment of one player every night.",
    capabilities: RoleCapabilities {
        inspects: true,
        ..NONE
    },
};

static WITCH: RoleDefinition = RoleDefinition {
    name: RoleName::Witch,
    alignment: Alignment::Good,
    description: "Holds one healing potion and one poison; each can be used once per game.",
    capabilities: RoleCapabilities {
        heals: true,
        poisons: true,
        ..NONE
    },
};

static HUNTER: RoleDefinition = RoleDefinition {
    name: RoleName::Hunter,
    alignment: Alignment::Good,
    description: "When eliminated, may take one other player down with them.",
    capabilities: RoleCapabilities {
        revenge_shot: true,
        ..NONE
    },
};

static VILLAGER: RoleDefinition = RoleDefinition {
    name: RoleName::Villager,
    alignment: Alignment::Good,
    description: "No special ability; helps the village through reasoning.",
    capabilities: NONE,
};
