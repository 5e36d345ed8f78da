//! Common types: player marks, move outcomes and error enums.

use core::fmt;
use core::str::FromStr;

use crate::bitboard::BitBoardError;

/// One of the two marks a player places on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The other mark.
    #[inline]
    pub const fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Single-character symbol drawn on the board.
    pub const fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Player {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" => Ok(Player::X),
            "o" | "O" => Ok(Player::O),
            _ => Err(ConfigError::UnknownPlayer),
        }
    }
}

/// Outcome of a single move attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveResult {
    /// Move rejected: out of bounds, cell occupied or game already over.
    Invalid,
    /// Move applied and the game continues.
    Valid,
    /// Move applied and completed a line for the mover.
    Win,
    /// Move applied and filled the board without a winner.
    Draw,
}

impl MoveResult {
    /// True for `Win` and `Draw`.
    pub fn is_terminal(self) -> bool {
        matches!(self, MoveResult::Win | MoveResult::Draw)
    }
}

/// State of a match derived from the board contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchResult {
    InProgress,
    Win(Player),
    Draw,
}

/// Errors returned by `Board` operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (index outside the grid).
    BitBoardError(BitBoardError),
    /// Target cell already holds a mark.
    Occupied { row: usize, col: usize },
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::Occupied { row, col } => {
                write!(f, "cell ({}, {}) is already occupied", row, col)
            }
        }
    }
}

impl core::error::Error for BoardError {}

/// Errors raised while configuring a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A computer match was requested without a difficulty.
    MissingDifficulty,
    /// Difficulty name not recognised.
    UnknownDifficulty,
    /// Player mark not recognised.
    UnknownPlayer,
    /// Theme name not recognised.
    UnknownTheme,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingDifficulty => {
                write!(f, "a match against the computer requires a difficulty")
            }
            ConfigError::UnknownDifficulty => {
                write!(f, "unknown difficulty (expected easy, medium or hard)")
            }
            ConfigError::UnknownPlayer => write!(f, "unknown player (expected X or O)"),
            ConfigError::UnknownTheme => write!(f, "unknown theme (expected dark or light)"),
        }
    }
}

impl core::error::Error for ConfigError {}
