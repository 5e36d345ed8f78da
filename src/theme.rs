//! Visual themes for the text front end and the settings that select one.

use core::fmt;
use core::str::FromStr;

use crate::common::{ConfigError, Player};
use log::info;

/// ANSI colour codes used when drawing the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub x: &'static str,
    pub o: &'static str,
    pub grid: &'static str,
    pub status: &'static str,
}

/// Reset sequence appended after every coloured span.
pub const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Dark, Theme::Light];

    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                x: "\x1b[1;96m",
                o: "\x1b[1;95m",
                grid: "\x1b[90m",
                status: "\x1b[97m",
            },
            Theme::Light => Palette {
                x: "\x1b[1;34m",
                o: "\x1b[1;31m",
                grid: "\x1b[37m",
                status: "\x1b[30m",
            },
        }
    }

    /// Colour sequence for a mark.
    pub fn mark_color(self, player: Player) -> &'static str {
        let palette = self.palette();
        match player {
            Player::X => palette.x,
            Player::O => palette.o,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Theme::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s))
            .ok_or(ConfigError::UnknownTheme)
    }
}

/// Front-end settings. Created once at start-up and passed to whatever
/// needs them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    theme: Theme,
}

impl Settings {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Switch the active theme.
    pub fn apply_theme(&mut self, theme: Theme) {
        self.theme = theme;
        info!("theme '{}' applied", theme);
    }
}
