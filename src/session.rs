//! Drives one match between a human participant and the engine.

use crate::{
    common::{MatchResult, MoveResult},
    game::GameEngine,
    player::Participant,
};
use log::{debug, info};
use rand::rngs::SmallRng;

/// Play `engine` to completion.
///
/// Computer turns are played by the engine itself after `human` is told the
/// computer is thinking; every other turn is requested from `human`, which
/// also observes each outcome. Rejected moves are reported and requested
/// again. Returns the final result, or `None` if the human abandoned the
/// match.
pub fn run_match(
    engine: &mut GameEngine,
    human: &mut dyn Participant,
    rng: &mut SmallRng,
) -> Option<MatchResult> {
    info!("match started: {}", engine.mode());
    while !engine.is_game_over() {
        if engine.is_computer_turn() {
            human.computer_thinking(engine);
            let result = engine.play_computer_move(rng);
            match engine.history().last() {
                Some(&coord) if result != MoveResult::Invalid => human.observe(engine, coord, result),
                _ => {
                    debug!("computer could not move");
                    return None;
                }
            }
            continue;
        }
        let Some((r, c)) = human.select_move(rng, engine) else {
            info!("match abandoned after {} moves", engine.move_count());
            return None;
        };
        let result = engine.attempt_move(r, c);
        human.observe(engine, (r, c), result);
    }
    let result = engine.result();
    info!("match finished: {:?} after {} moves", result, engine.move_count());
    Some(result)
}
