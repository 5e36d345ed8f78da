//! Commonly used types and utilities for ease of import.

pub use crate::{
    run_match, ComputerPlayer, Difficulty, GameEngine, GameMode, MatchResult, ModeKind,
    MoveResult, Participant, Player, Settings, Theme,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, run_menu, Console};
