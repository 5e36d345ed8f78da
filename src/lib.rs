#![cfg_attr(not(feature = "std"), no_std)]
//! Tic-tac-toe rules engine with a tiered computer opponent.
//!
//! The core (`board`, `game`, `ai`, `mode`) is `no_std` and allocation free;
//! the text front end, menu and logger need the default `std` feature.

mod ai;
mod bitboard;
mod board;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod menu;
mod mode;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
pub mod prelude;
mod session;
mod theme;

pub use ai::*;
pub use bitboard::{BitBoard, BitBoardError, SetBits};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from};
#[cfg(feature = "std")]
pub use menu::{run_menu, Screen};
pub use mode::*;
pub use player::*;
pub use player_ai::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use session::run_match;
pub use theme::*;
