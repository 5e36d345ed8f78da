//! Match configuration: who plays and how strong the computer is.

use core::fmt;
use core::str::FromStr;

use crate::common::{ConfigError, Player};

/// Strength tier of the computer opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Difficulty {
    /// Uniformly random legal move.
    Easy,
    /// Shallow search: wins when it can, blocks when it must.
    Medium,
    /// Exhaustive alpha-beta search; never loses.
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .ok_or(ConfigError::UnknownDifficulty)
    }
}

/// Mode selector without its payload, as chosen on a setup screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeKind {
    HumanVsHuman,
    HumanVsComputer,
}

/// How the two marks are controlled. Fixed for the lifetime of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameMode {
    HumanVsHuman,
    HumanVsComputer {
        difficulty: Difficulty,
        /// Mark played by the computer.
        computer: Player,
    },
}

impl GameMode {
    /// Computer opponent playing `computer` at `difficulty`.
    pub const fn vs_computer(difficulty: Difficulty, computer: Player) -> Self {
        GameMode::HumanVsComputer {
            difficulty,
            computer,
        }
    }

    /// Build a mode from independently chosen setup values.
    ///
    /// The human moves first, so the computer takes the other mark. A
    /// difficulty is required for a computer match and ignored otherwise.
    pub fn from_parts(
        kind: ModeKind,
        difficulty: Option<Difficulty>,
        first: Player,
    ) -> Result<Self, ConfigError> {
        match kind {
            ModeKind::HumanVsHuman => Ok(GameMode::HumanVsHuman),
            ModeKind::HumanVsComputer => {
                let difficulty = difficulty.ok_or(ConfigError::MissingDifficulty)?;
                Ok(GameMode::vs_computer(difficulty, first.opponent()))
            }
        }
    }

    pub fn kind(&self) -> ModeKind {
        match self {
            GameMode::HumanVsHuman => ModeKind::HumanVsHuman,
            GameMode::HumanVsComputer { .. } => ModeKind::HumanVsComputer,
        }
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        match self {
            GameMode::HumanVsHuman => None,
            GameMode::HumanVsComputer { difficulty, .. } => Some(*difficulty),
        }
    }

    /// Mark controlled by the computer, if any.
    pub fn computer(&self) -> Option<Player> {
        match self {
            GameMode::HumanVsHuman => None,
            GameMode::HumanVsComputer { computer, .. } => Some(*computer),
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::HumanVsHuman => write!(f, "human vs human"),
            GameMode::HumanVsComputer {
                difficulty,
                computer,
            } => write!(f, "human vs computer ({}, computer plays {})", difficulty, computer),
        }
    }
}
