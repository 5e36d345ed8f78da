use crate::{
    ai,
    board::{Board, BoardState},
    common::{ConfigError, MatchResult, MoveResult, Player},
    config::{BOARD_SIZE, CELL_COUNT},
    mode::{Difficulty, GameMode, ModeKind},
};
use log::debug;
use rand::Rng;

/// Fixed-capacity record of the cells played, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct History {
    moves: [(usize, usize); CELL_COUNT],
    len: usize,
}

impl History {
    const fn new() -> Self {
        Self {
            moves: [(0, 0); CELL_COUNT],
            len: 0,
        }
    }

    fn push(&mut self, pos: (usize, usize)) {
        if self.len < CELL_COUNT {
            self.moves[self.len] = pos;
            self.len += 1;
        }
    }

    fn as_slice(&self) -> &[(usize, usize)] {
        &self.moves[..self.len]
    }
}

/// Serializable snapshot of a match.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameState {
    pub mode: GameMode,
    pub first: Player,
    pub current: Player,
    pub result: MatchResult,
    pub board: BoardState,
    pub moves: [Option<(usize, usize)>; CELL_COUNT],
}

/// Rules engine for a single match.
///
/// The board is only ever changed through [`GameEngine::attempt_move`]; a
/// new game means a new engine (see [`GameEngine::rematch`]).
#[derive(Clone, Debug)]
pub struct GameEngine {
    board: Board,
    mode: GameMode,
    first: Player,
    current: Player,
    history: History,
}

impl GameEngine {
    /// Create a match with an empty board where `first` moves first.
    pub fn new(mode: GameMode, first: Player) -> Self {
        debug!("new match: {}, {} moves first", mode, first);
        Self {
            board: Board::new(),
            mode,
            first,
            current: first,
            history: History::new(),
        }
    }

    /// Create a match from independently chosen setup values.
    ///
    /// Fails with [`ConfigError::MissingDifficulty`] when a computer match
    /// is requested without a difficulty.
    pub fn configure(
        kind: ModeKind,
        difficulty: Option<Difficulty>,
        first: Player,
    ) -> Result<Self, ConfigError> {
        let mode = GameMode::from_parts(kind, difficulty, first)?;
        Ok(Self::new(mode, first))
    }

    /// Fresh match with the same mode and starting player.
    pub fn rematch(&self) -> Self {
        Self::new(self.mode, self.first)
    }

    /// Try to place the current player's mark at (row, col).
    pub fn attempt_move(&mut self, row: usize, col: usize) -> MoveResult {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            debug!("rejected ({}, {}): outside the board", row, col);
            return MoveResult::Invalid;
        }
        if self.is_game_over() {
            debug!("rejected ({}, {}): game is over", row, col);
            return MoveResult::Invalid;
        }
        if let Err(e) = self.board.place(row, col, self.current) {
            debug!("rejected ({}, {}) for {}: {}", row, col, self.current, e);
            return MoveResult::Invalid;
        }
        self.history.push((row, col));
        debug!("{} plays ({}, {})", self.current, row, col);

        match self.result() {
            MatchResult::Win(p) => {
                debug!("{} wins after {} moves", p, self.move_count());
                MoveResult::Win
            }
            MatchResult::Draw => {
                debug!("draw");
                MoveResult::Draw
            }
            MatchResult::InProgress => {
                self.current = self.current.opponent();
                MoveResult::Valid
            }
        }
    }

    /// Let the computer choose and play a move on its turn.
    ///
    /// Returns `Invalid` without touching the board when the match has no
    /// computer, is over, or it is a human's turn.
    pub fn play_computer_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> MoveResult {
        let GameMode::HumanVsComputer {
            difficulty,
            computer,
        } = self.mode
        else {
            return MoveResult::Invalid;
        };
        if self.is_game_over() || self.current != computer {
            return MoveResult::Invalid;
        }
        match ai::select_move(&self.board, difficulty, computer, rng) {
            Some((r, c)) => {
                debug!("computer ({}) chose ({}, {})", difficulty, r, c);
                self.attempt_move(r, c)
            }
            None => MoveResult::Invalid,
        }
    }

    /// True when the computer is expected to move next.
    pub fn is_computer_turn(&self) -> bool {
        !self.is_game_over() && self.mode.computer() == Some(self.current)
    }

    /// Result derived from the board. A completed line beats a full board.
    pub fn result(&self) -> MatchResult {
        if let Some(p) = self.board.winner() {
            MatchResult::Win(p)
        } else if self.board.is_full() {
            MatchResult::Draw
        } else {
            MatchResult::InProgress
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.result() != MatchResult::InProgress
    }

    /// Winner of a finished match; `None` while in progress or on a draw.
    pub fn winner(&self) -> Option<Player> {
        match self.result() {
            MatchResult::Win(p) => Some(p),
            _ => None,
        }
    }

    /// Player to move, or the player who made the final move.
    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn first_player(&self) -> Player {
        self.first
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Option<Player> {
        self.board.cell(row, col)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn move_count(&self) -> usize {
        self.board.move_count()
    }

    /// Cells played so far, oldest first.
    pub fn history(&self) -> &[(usize, usize)] {
        self.history.as_slice()
    }

    /// Generate a serializable snapshot of the current state.
    pub fn state(&self) -> GameState {
        let played = self.history.as_slice();
        GameState {
            mode: self.mode,
            first: self.first,
            current: self.current,
            result: self.result(),
            board: BoardState::from(&self.board),
            moves: core::array::from_fn(|i| played.get(i).copied()),
        }
    }
}
