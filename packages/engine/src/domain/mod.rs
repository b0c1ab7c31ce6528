//! Game data model: roles, players, phases, log, requests and snapshots.

pub mod catalogue;
pub mod config;
pub mod log;
pub mod player;
pub mod request;
pub mod rng;
pub mod roles;
pub mod roster;
pub mod snapshot;
pub mod state;
pub mod win;

#[cfg(test)]
mod tests_props;

pub use catalogue::{role_bag, DEFAULT_PLAYERS, SUPPORTED_PLAYERS};
pub use config::{GameConfig, HumanParticipant, Language};
pub use log::{GameLog, LogEntry, LogTag};
pub use player::{PlayerId, PlayerNotes, PlayerState};
pub use request::{
    ActionOption, HumanActionRequest, HumanActionSubmission, HumanActionType, TextInputSpec,
};
pub use rng::GameRng;
pub use roles::{Alignment, RoleCapabilities, RoleDefinition, RoleName};
pub use roster::build_roster;
pub use snapshot::EngineSnapshot;
pub use state::Phase;
pub use win::evaluate_winner;
