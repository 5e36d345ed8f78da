use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use tictactoe::{
    init_logging, ComputerPlayer, Difficulty, GameEngine, GameMode, MatchResult, MoveResult,
    Participant, Player,
};

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 5 {
        eprintln!(
            "Usage: {} <seed> [x-difficulty] [o-difficulty] [first-player]",
            args.first().map_or("sim", String::as_str)
        );
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let x_level: Difficulty = args.get(2).map(|s| s.parse()).transpose()?.unwrap_or(Difficulty::Hard);
    let o_level: Difficulty = args.get(3).map(|s| s.parse()).transpose()?.unwrap_or(Difficulty::Easy);
    let first: Player = args.get(4).map(|s| s.parse()).transpose()?.unwrap_or(Player::X);

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut x = ComputerPlayer::new(x_level);
    let mut o = ComputerPlayer::new(o_level);
    // Both seats are driven from here, so the engine itself controls neither.
    let mut engine = GameEngine::new(GameMode::HumanVsHuman, first);

    while !engine.is_game_over() {
        let seat: &mut dyn Participant = match engine.current_player() {
            Player::X => &mut x,
            Player::O => &mut o,
        };
        let (r, c) = seat
            .select_move(&mut rng, &engine)
            .ok_or_else(|| anyhow::anyhow!("no move available"))?;
        if engine.attempt_move(r, c) == MoveResult::Invalid {
            anyhow::bail!("computer chose an unavailable cell ({}, {})", r, c);
        }
    }

    let winner = match engine.result() {
        MatchResult::Win(p) => Some(p.to_string()),
        _ => None,
    };
    let result = json!({
        "x": x.difficulty().name(),
        "o": o.difficulty().name(),
        "first": engine.first_player(),
        "winner": winner,
        "draw": engine.result() == MatchResult::Draw,
        "moves": engine.history(),
        "state": engine.state(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
