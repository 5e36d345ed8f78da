use rand::rngs::SmallRng;
use rand::SeedableRng;
use tictactoe::{
    best_move, random_move, Board, ComputerPlayer, Difficulty, GameEngine, GameMode, MatchResult,
    MoveResult, Participant, Player, FULL_SEARCH_DEPTH,
};

/// Play every possible human line against the engine's computer and report
/// (computer wins, draws, computer losses).
fn explore(engine: &GameEngine, rng: &mut SmallRng, tally: &mut (usize, usize, usize)) {
    let computer = engine.mode().computer().unwrap();
    match engine.result() {
        MatchResult::Win(p) if p == computer => tally.0 += 1,
        MatchResult::Win(_) => tally.2 += 1,
        MatchResult::Draw => tally.1 += 1,
        MatchResult::InProgress if engine.is_computer_turn() => {
            let mut next = engine.clone();
            assert_ne!(next.play_computer_move(rng), MoveResult::Invalid);
            explore(&next, rng, tally);
        }
        MatchResult::InProgress => {
            for (r, c) in engine.board().empty_cells() {
                let mut next = engine.clone();
                assert_ne!(next.attempt_move(r, c), MoveResult::Invalid);
                explore(&next, rng, tally);
            }
        }
    }
}

#[test]
fn test_hard_never_loses_moving_second() {
    let mut rng = SmallRng::seed_from_u64(0);
    let engine = GameEngine::new(GameMode::vs_computer(Difficulty::Hard, Player::O), Player::X);
    let mut tally = (0, 0, 0);
    explore(&engine, &mut rng, &mut tally);
    assert_eq!(tally.2, 0, "hard tier lost {} lines", tally.2);
    assert!(tally.0 > 0 && tally.1 > 0);
}

#[test]
fn test_hard_never_loses_moving_first() {
    let mut rng = SmallRng::seed_from_u64(0);
    let engine = GameEngine::new(GameMode::vs_computer(Difficulty::Hard, Player::X), Player::X);
    let mut tally = (0, 0, 0);
    explore(&engine, &mut rng, &mut tally);
    assert_eq!(tally.2, 0, "hard tier lost {} lines", tally.2);
    assert!(tally.0 > 0);
}

fn board_from(rows: [&str; 3]) -> Board {
    let mut board = Board::new();
    for (r, row) in rows.iter().enumerate() {
        for (c, ch) in row.chars().enumerate() {
            match ch {
                'X' => board.place(r, c, Player::X).unwrap(),
                'O' => board.place(r, c, Player::O).unwrap(),
                _ => {}
            }
        }
    }
    board
}

#[test]
fn test_hard_takes_win_over_block() {
    let board = board_from(["XX.", "OO.", "..."]);
    assert_eq!(best_move(&board, Player::O, FULL_SEARCH_DEPTH), Some((1, 2)));
    assert_eq!(best_move(&board, Player::X, FULL_SEARCH_DEPTH), Some((0, 2)));
}

#[test]
fn test_medium_blocks_immediate_loss() {
    let mut rng = SmallRng::seed_from_u64(3);
    let board = board_from(["X..", ".X.", "O.."]);
    let pick = tictactoe::select_move(&board, Difficulty::Medium, Player::O, &mut rng);
    assert_eq!(pick, Some((2, 2)));
}

#[test]
fn test_medium_takes_immediate_win() {
    let mut rng = SmallRng::seed_from_u64(3);
    let board = board_from(["X.O", "XO.", "..."]);
    let pick = tictactoe::select_move(&board, Difficulty::Medium, Player::X, &mut rng);
    assert_eq!(pick, Some((2, 0)));
}

#[test]
fn test_ties_break_to_lowest_cell() {
    // every reply to an empty board is a draw under perfect play
    assert_eq!(best_move(&Board::new(), Player::X, FULL_SEARCH_DEPTH), Some((0, 0)));
}

#[test]
fn test_full_board_has_no_move() {
    let board = board_from(["XOX", "XOO", "OXX"]);
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(best_move(&board, Player::O, FULL_SEARCH_DEPTH), None);
    assert_eq!(random_move(&board, &mut rng), None);
}

#[test]
fn test_easy_is_reproducible_with_seed() {
    let board = board_from(["X..", "...", "..O"]);
    let picks = |seed| {
        let mut rng = SmallRng::seed_from_u64(seed);
        (0..10)
            .map(|_| random_move(&board, &mut rng).unwrap())
            .collect::<Vec<_>>()
    };
    assert_eq!(picks(42), picks(42));
    for (r, c) in picks(42) {
        assert!(board.is_empty_cell(r, c));
    }
}

#[test]
fn test_easy_reaches_every_empty_cell() {
    let board = board_from(["X..", "...", "..O"]);
    let mut rng = SmallRng::seed_from_u64(9);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..500 {
        seen.insert(random_move(&board, &mut rng).unwrap());
    }
    assert_eq!(seen.len(), board.empty_count());
}

#[test]
fn test_hard_never_loses_to_easy() {
    for seed in 0..50u64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut hard = ComputerPlayer::new(Difficulty::Hard);
        let mut easy = ComputerPlayer::new(Difficulty::Easy);
        let mut engine = GameEngine::new(GameMode::HumanVsHuman, Player::X);
        let hard_mark = if seed % 2 == 0 { Player::X } else { Player::O };
        while !engine.is_game_over() {
            let seat: &mut dyn Participant = if engine.current_player() == hard_mark {
                &mut hard
            } else {
                &mut easy
            };
            let (r, c) = seat.select_move(&mut rng, &engine).unwrap();
            assert_ne!(engine.attempt_move(r, c), MoveResult::Invalid);
        }
        assert_ne!(engine.winner(), Some(hard_mark.opponent()), "seed {}", seed);
    }
}

#[test]
fn test_computer_player_declines_finished_game() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut engine = GameEngine::new(GameMode::HumanVsHuman, Player::X);
    for (r, c) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        engine.attempt_move(r, c);
    }
    let mut player = ComputerPlayer::new(Difficulty::Hard);
    assert_eq!(player.difficulty(), Difficulty::Hard);
    assert_eq!(player.select_move(&mut rng, &engine), None);
}
