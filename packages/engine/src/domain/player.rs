use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::roles::{Alignment, RoleDefinition};

pub type PlayerId = String;

/// Role-specific working memory. Potions can only go from available to spent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerNotes {
    #[serde(skip_serializing_if = "Option::is_none")]
    heal_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    poison_available: Option<bool>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    seer_results: BTreeMap<PlayerId, Alignment>,
}

impl PlayerNotes {
    /// Notes for a fresh player holding `role`.
    pub fn for_role(role: &RoleDefinition) -> Self {
        Self {
            heal_available: role.capabilities.heals.then_some(true),
            poison_available: role.capabilities.poisons.then_some(true),
            seer_results: BTreeMap::new(),
        }
    }

    pub fn heal_available(&self) -> bool {
        self.heal_available.unwrap_or(false)
    }

    pub fn poison_available(&self) -> bool {
        self.poison_available.unwrap_or(false)
    }

    pub fn seer_results(&self) -> &BTreeMap<PlayerId, Alignment> {
        &self.seer_results
    }

    /// Spends the healing potion. Returns false if it was already gone.
    pub(crate) fn consume_heal(&mut self) -> bool {
        if self.heal_available() {
            self.heal_available = Some(false);
            true
        } else {
            false
        }
    }

    /// Spends the poison. Returns false if it was already gone.
    pub(crate) fn consume_poison(&mut self) -> bool {
        if self.poison_available() {
            self.poison_available = Some(false);
            true
        } else {
            false
        }
    }

    pub(crate) fn record_inspection(&mut self, target: &str, alignment: Alignment) {
        self.seer_results.insert(target.to_string(), alignment);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerState {
    /// 1-based seat number as a string.
    pub id: PlayerId,
    pub display_name: String,
    pub role: &'static RoleDefinition,
    is_alive: bool,
    pub is_human: bool,
    pub notes: PlayerNotes,
}

impl PlayerState {
    pub fn new(
        id: impl Into<PlayerId>,
        display_name: impl Into<String>,
        role: &'static RoleDefinition,
        is_human: bool,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            role,
            is_alive: true,
            is_human,
            notes: PlayerNotes::for_role(role),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.is_alive
    }

    pub fn alignment(&self) -> Alignment {
        self.role.alignment
    }

    /// Flips the player to dead. Returns false if they were already dead.
    pub(crate) fn kill(&mut self) -> bool {
        std::mem::replace(&mut self.is_alive, false)
    }
}

pub fn alive(players: &[PlayerState]) -> impl Iterator<Item = &PlayerState> {
    players.iter().filter(|p| p.is_alive())
}

pub fn find<'a>(players: &'a [PlayerState], id: &str) -> Option<&'a PlayerState> {
    players.iter().find(|p| p.id == id)
}

pub fn find_alive<'a>(players: &'a [PlayerState], id: &str) -> Option<&'a PlayerState> {
    find(players, id).filter(|p| p.is_alive())
}

pub fn find_mut<'a>(players: &'a mut [PlayerState], id: &str) -> Option<&'a mut PlayerState> {
    players.iter_mut().find(|p| p.id == id)
}

/// Display name for an id, or a neutral placeholder when the id is unknown.
pub fn display_name(players: &[PlayerState], id: &str) -> String {
    find(players, id)
        .map(|p| p.display_name.clone())
        .unwrap_or_else(|| format!("Player {id}"))
}
