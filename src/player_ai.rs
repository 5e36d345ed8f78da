use crate::{ai, game::GameEngine, mode::Difficulty};
use rand::rngs::SmallRng;

use crate::player::Participant;

/// Computer participant playing whichever mark is to move.
#[derive(Debug, Clone, Copy)]
pub struct ComputerPlayer {
    difficulty: Difficulty,
}

impl ComputerPlayer {
    pub fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl Participant for ComputerPlayer {
    fn select_move(&mut self, rng: &mut SmallRng, engine: &GameEngine) -> Option<(usize, usize)> {
        if engine.is_game_over() {
            return None;
        }
        ai::select_move(engine.board(), self.difficulty, engine.current_player(), rng)
    }
}
