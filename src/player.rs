use crate::{common::MoveResult, game::GameEngine};
use rand::rngs::SmallRng;

/// Interface implemented by anything that chooses moves for a seat.
pub trait Participant {
    /// Choose the next cell for the player to move. `None` abandons the match.
    fn select_move(&mut self, rng: &mut SmallRng, engine: &GameEngine) -> Option<(usize, usize)>;

    /// Called just before the engine plays a computer move.
    fn computer_thinking(&mut self, _engine: &GameEngine) {}

    /// Inform the participant of a move attempt and its outcome.
    fn observe(&mut self, _engine: &GameEngine, _coord: (usize, usize), _result: MoveResult) {}
}
