// Move selection for the computer opponent.
// Uses no_std and avoids heap allocations: positions are copied, not undone.

use crate::{
    board::Board,
    common::Player,
    config::{FULL_SEARCH_DEPTH, MEDIUM_SEARCH_DEPTH, WIN_SCORE},
    mode::Difficulty,
};
use log::trace;
use rand::Rng;

const INF: i32 = WIN_SCORE + 1;

/// Uniformly random empty cell, or `None` on a full board.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<(usize, usize)> {
    let open = board.empty_count();
    if open == 0 {
        return None;
    }
    let pick = rng.random_range(0..open);
    board.empty_cells().nth(pick)
}

/// Best move for `me` found by negamax with alpha-beta pruning, looking at
/// most `max_depth` plies ahead.
///
/// Wins score `WIN_SCORE - ply` and losses `ply - WIN_SCORE`, so quicker
/// wins and slower losses are preferred. Among equal scores the first cell
/// in row-major order wins, which makes the result a pure function of the
/// board.
pub fn best_move(board: &Board, me: Player, max_depth: u8) -> Option<(usize, usize)> {
    let mut best: Option<((usize, usize), i32)> = None;
    let mut alpha = -INF;
    for (r, c) in board.empty_cells() {
        let mut child = *board;
        if child.place(r, c, me).is_err() {
            continue;
        }
        let score = -negamax(&child, me.opponent(), 1, max_depth, -INF, -alpha);
        trace!("candidate ({}, {}) for {} scores {}", r, c, me, score);
        if best.map_or(true, |(_, s)| score > s) {
            best = Some(((r, c), score));
        }
        alpha = alpha.max(score);
    }
    best.map(|(pos, _)| pos)
}

/// Score of `board` from the point of view of `to_move`, who is about to play
/// at ply `ply`.
fn negamax(board: &Board, to_move: Player, ply: u8, max_depth: u8, mut alpha: i32, beta: i32) -> i32 {
    if let Some(winner) = board.winner() {
        let score = WIN_SCORE - ply as i32;
        return if winner == to_move { score } else { -score };
    }
    if board.is_full() || ply >= max_depth {
        return 0;
    }
    let mut best = -INF;
    for (r, c) in board.empty_cells() {
        let mut child = *board;
        if child.place(r, c, to_move).is_err() {
            continue;
        }
        let score = -negamax(&child, to_move.opponent(), ply + 1, max_depth, -beta, -alpha);
        best = best.max(score);
        alpha = alpha.max(score);
        if alpha >= beta {
            break;
        }
    }
    best
}

/// Pick a move for `me` according to `difficulty`.
///
/// Only the easy tier consumes randomness.
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    difficulty: Difficulty,
    me: Player,
    rng: &mut R,
) -> Option<(usize, usize)> {
    match difficulty {
        Difficulty::Easy => random_move(board, rng),
        Difficulty::Medium => best_move(board, me, MEDIUM_SEARCH_DEPTH),
        Difficulty::Hard => best_move(board, me, FULL_SEARCH_DEPTH),
    }
}
