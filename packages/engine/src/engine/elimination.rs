use tracing::{debug, info};

use super::GameEngine;
use crate::domain::player;
use crate::domain::state::{HunterPending, Phase};
use crate::domain::win::evaluate_winner;
use crate::domain::Alignment;

impl GameEngine {
    /// Removes a living player. Unknown or already-dead ids are ignored.
    ///
    /// A Hunter who falls is queued for a revenge shot.
    pub(super) fn eliminate(&mut self, id: &str, cause: &str) -> bool {
        let Some(victim) = player::find_mut(&mut self.players, id) else {
            debug!(player = id, "Elimination of unknown player ignored");
            return false;
        };
        if !victim.kill() {
            return false;
        }

        let name = victim.display_name.clone();
        let role = victim.role.name;
        let revenge = victim.role.capabilities.revenge_shot;

        debug!(player = id, %role, cause, "Player eliminated");
        self.log(format!("{name} ({role}) is eliminated by {cause}."));

        if revenge {
            self.hunters.push_back(HunterPending {
                player_id: id.to_string(),
                cause: cause.to_string(),
            });
        }
        true
    }

    /// Ends the game if one side has won. Returns true once the game is over.
    pub(super) fn check_winner(&mut self) -> bool {
        if self.phase == Phase::GameOver {
            return true;
        }
        let Some(winner) = evaluate_winner(&self.players) else {
            return false;
        };

        self.winner = Some(winner);
        self.night = None;
        self.discussion = None;
        self.vote = None;
        self.hunters.clear();
        self.enter(Phase::GameOver);
        self.log(match winner {
            Alignment::Good => "The village has hunted down every werewolf. Good wins!",
            Alignment::Werewolf => "The werewolves have taken over the village. The game is over.",
        });
        info!(day = self.day, %winner, "Game over");
        true
    }
}
