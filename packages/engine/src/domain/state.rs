use std::collections::{BTreeMap, VecDeque};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::player::{alive, PlayerId, PlayerState};

/// Top-level game phase.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    /// No game has been started.
    Idle,
    Night,
    DayDiscussion,
    DayVote,
    /// Terminal; a winner is recorded.
    GameOver,
}

impl Phase {
    pub const fn as_str(self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Night => "night",
            Phase::DayDiscussion => "day-discussion",
            Phase::DayVote => "day-vote",
            Phase::GameOver => "game-over",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sub-steps of a night, resolved strictly in declaration order.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum NightStep {
    Intro,
    Werewolf,
    Seer,
    WitchHeal,
    WitchPoison,
    Resolution,
    Complete,
}

/// Resolution state for one night. Dropped when the day begins.
#[derive(Debug, Clone)]
pub struct NightContext {
    pub step: NightStep,
    pub werewolf_target: Option<PlayerId>,
    pub seer_queue: VecDeque<PlayerId>,
    pub witch_queue: VecDeque<PlayerId>,
    pub healed_target: Option<PlayerId>,
    pub poisoned_target: Option<PlayerId>,
    pub poison_asked: bool,
}

impl NightContext {
    /// Captures the living inspectors and healers at nightfall.
    pub fn begin(players: &[PlayerState]) -> Self {
        let seer_queue = alive(players)
            .filter(|p| p.role.capabilities.inspects)
            .map(|p| p.id.clone())
            .collect();
        let witch_queue = alive(players)
            .filter(|p| p.role.capabilities.heals)
            .map(|p| p.id.clone())
            .collect();
        Self {
            step: NightStep::Intro,
            werewolf_target: None,
            seer_queue,
            witch_queue,
            healed_target: None,
            poisoned_target: None,
            poison_asked: false,
        }
    }
}

/// Speaker order captured once at the start of the discussion.
#[derive(Debug, Clone)]
pub struct DiscussionContext {
    pub speakers: Vec<PlayerId>,
    pub index: usize,
}

impl DiscussionContext {
    pub fn begin(players: &[PlayerState]) -> Self {
        Self {
            speakers: alive(players).map(|p| p.id.clone()).collect(),
            index: 0,
        }
    }

    /// Returns the next speaker id and advances the cursor.
    pub fn next_speaker(&mut self) -> Option<PlayerId> {
        let id = self.speakers.get(self.index).cloned()?;
        self.index += 1;
        Some(id)
    }
}

#[derive(Debug, Clone)]
pub struct VoteContext {
    pub voters: Vec<PlayerId>,
    pub index: usize,
    /// voter id -> target id
    pub votes: BTreeMap<PlayerId, PlayerId>,
}

impl VoteContext {
    pub fn begin(players: &[PlayerState]) -> Self {
        Self {
            voters: alive(players).map(|p| p.id.clone()).collect(),
            index: 0,
            votes: BTreeMap::new(),
        }
    }

    pub fn next_voter(&mut self) -> Option<PlayerId> {
        let id = self.voters.get(self.index).cloned()?;
        self.index += 1;
        Some(id)
    }

    pub fn cast(&mut self, voter: &str, target: &str) {
        self.votes.insert(voter.to_string(), target.to_string());
    }
}

/// A Hunter who has just been eliminated and still owes a revenge shot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HunterPending {
    pub player_id: PlayerId,
    pub cause: String,
}
