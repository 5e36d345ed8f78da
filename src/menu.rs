#![cfg(feature = "std")]
//! Text menu: main menu, match setup, board and settings screens.

use std::io::{self, BufRead, Write};

use crate::{
    common::{MatchResult, Player},
    game::GameEngine,
    mode::{Difficulty, ModeKind},
    player_cli::{seat_label, Console},
    session::run_match,
    theme::{Settings, Theme},
};
use log::{info, warn};
use rand::rngs::SmallRng;

/// Screen currently shown by the menu loop.
#[derive(Debug)]
pub enum Screen {
    MainMenu,
    Setup,
    Board(GameEngine),
    Settings,
    Exit,
}

/// Run the menu until the user exits or input ends.
pub fn run_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    settings: &mut Settings,
    rng: &mut SmallRng,
) -> io::Result<()> {
    let mut screen = Screen::MainMenu;
    loop {
        screen = match screen {
            Screen::MainMenu => main_menu(console)?,
            Screen::Setup => setup(console)?,
            Screen::Board(engine) => board(console, engine, rng)?,
            Screen::Settings => settings_screen(console, settings)?,
            Screen::Exit => {
                console.say("Goodbye!")?;
                return Ok(());
            }
        };
    }
}

fn main_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<Screen> {
    let choice = console.choose("== Tic-Tac-Toe ==", &["Play", "Settings", "Exit"], 0)?;
    Ok(match choice {
        Some(0) => Screen::Setup,
        Some(1) => Screen::Settings,
        _ => Screen::Exit,
    })
}

fn setup<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<Screen> {
    let Some(mode) = console.choose("Game mode:", &["Human vs human", "Human vs computer"], 1)? else {
        return Ok(Screen::Exit);
    };
    let kind = if mode == 0 {
        ModeKind::HumanVsHuman
    } else {
        ModeKind::HumanVsComputer
    };

    let difficulty = if kind == ModeKind::HumanVsComputer {
        let names: Vec<&str> = Difficulty::ALL.iter().map(|d| d.name()).collect();
        match console.choose("Difficulty:", &names, 0)? {
            Some(i) => Some(Difficulty::ALL[i]),
            None => return Ok(Screen::Exit),
        }
    } else {
        None
    };

    let Some(first) = console.choose("Who moves first?", &["X", "O"], 0)? else {
        return Ok(Screen::Exit);
    };
    let first = if first == 0 { Player::X } else { Player::O };

    match GameEngine::configure(kind, difficulty, first) {
        Ok(engine) => Ok(Screen::Board(engine)),
        Err(e) => {
            warn!("setup rejected: {}", e);
            console.say(&format!("Cannot start the game: {}", e))?;
            Ok(Screen::Setup)
        }
    }
}

fn board<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    mut engine: GameEngine,
    rng: &mut SmallRng,
) -> io::Result<Screen> {
    console.say(&format!(
        "X: {}, O: {}",
        seat_label(&engine, Player::X),
        seat_label(&engine, Player::O)
    ))?;
    if run_match(&mut engine, &mut *console, rng).is_none() {
        return Ok(Screen::MainMenu);
    }
    match engine.result() {
        MatchResult::Win(p) => console.say(&format!("Game over: {} wins.", p))?,
        MatchResult::Draw => console.say("Game over: draw.")?,
        MatchResult::InProgress => {}
    }
    Ok(match console.choose("What next?", &["Restart", "Main menu"], 0)? {
        Some(0) => {
            info!("restarting match");
            Screen::Board(engine.rematch())
        }
        Some(_) => Screen::MainMenu,
        None => Screen::Exit,
    })
}

fn settings_screen<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    settings: &mut Settings,
) -> io::Result<Screen> {
    let current = Theme::ALL
        .iter()
        .position(|t| *t == settings.theme())
        .unwrap_or(0);
    let names: Vec<&str> = Theme::ALL.iter().map(|t| t.name()).collect();
    match console.choose("Theme:", &names, current)? {
        Some(i) => {
            let theme = Theme::ALL[i];
            settings.apply_theme(theme);
            console.set_theme(theme);
            Ok(Screen::MainMenu)
        }
        None => Ok(Screen::Exit),
    }
}
