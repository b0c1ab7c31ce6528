use crate::domain::player::{alive, PlayerState};
use crate::domain::roles::Alignment;

/// Winner among the living players, if the game is decided.
///
/// Good wins when no werewolf is left; werewolves win once they are at least
/// as many as the good players still standing.
pub fn evaluate_winner(players: &[PlayerState]) -> Option<Alignment> {
    let (wolves, good) = alive(players).fold((0usize, 0usize), |(w, g), p| {
        match p.alignment() {
            Alignment::Werewolf => (w + 1, g),
            Alignment::Good => (w, g + 1),
        }
    });

    if wolves == 0 {
        Some(Alignment::Good)
    } else if wolves >= good {
        Some(Alignment::Werewolf)
    } else {
        None
    }
}
