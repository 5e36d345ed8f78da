#![cfg(feature = "std")]

use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::string::String;

use crate::{
    common::{MatchResult, MoveResult, Player},
    config::BOARD_SIZE,
    game::GameEngine,
    theme::{Theme, RESET},
};
use log::warn;
use rand::rngs::SmallRng;

use crate::player::Participant;

/// Line-oriented text front end. Serves every human seat of a match.
pub struct Console<R, W> {
    input: R,
    output: W,
    theme: Theme,
    color: bool,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio(theme: Theme) -> Self {
        Console::new(io::stdin().lock(), io::stdout(), theme)
    }
}

/// Name a cell the way players type it, e.g. (2, 1) is `B3`.
pub fn coord_to_string(r: usize, c: usize) -> String {
    let col = u32::try_from(c)
        .ok()
        .and_then(|c| c.checked_add(u32::from(b'A')))
        .and_then(char::from_u32)
        .unwrap_or('?');
    std::format!("{}{}", col, r.saturating_add(1))
}

/// Parse `B3`-style input (column letter, then 1-based row) into (row, col).
/// Range checking is left to the engine.
pub fn parse_coord(input: &str) -> Option<(usize, usize)> {
    let input = input.trim();
    if input.len() < 2 {
        return None;
    }
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row_str: String = chars.collect();
    let row: usize = row_str.trim().parse().ok()?;
    if row == 0 {
        return None;
    }
    Some((row - 1, col))
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, theme: Theme) -> Self {
        Self {
            input,
            output,
            theme,
            color: true,
        }
    }

    /// Disable ANSI colours.
    pub fn plain(mut self) -> Self {
        self.color = false;
        self
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Consume the console and hand back its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            std::format!("{}{}{}", code, text, RESET)
        } else {
            String::from(text)
        }
    }

    /// Print one line.
    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    /// Print `prompt` and read one trimmed line; `None` at end of input.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from(line.trim())))
    }

    /// Numbered menu. Empty input picks `default`; `None` at end of input.
    pub fn choose(&mut self, title: &str, options: &[&str], default: usize) -> io::Result<Option<usize>> {
        loop {
            self.say(title)?;
            for (i, opt) in options.iter().enumerate() {
                let marker = if i == default { "*" } else { " " };
                writeln!(self.output, " {}{}) {}", marker, i + 1, opt)?;
            }
            let Some(line) = self.prompt("> ")? else {
                return Ok(None);
            };
            if line.is_empty() {
                return Ok(Some(default));
            }
            match line.parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => return Ok(Some(n - 1)),
                _ => self.say("Please pick one of the listed numbers.")?,
            }
        }
    }

    /// Status line for the current state of `engine`.
    pub fn status_line(engine: &GameEngine) -> String {
        match engine.result() {
            MatchResult::Win(p) => std::format!("Player {} wins!", p),
            MatchResult::Draw => String::from("It's a draw!"),
            MatchResult::InProgress if engine.is_computer_turn() => {
                std::format!("Computer ({}) is thinking...", engine.current_player())
            }
            MatchResult::InProgress => std::format!("Player {} to move", engine.current_player()),
        }
    }

    /// Draw the board with column letters and row numbers.
    pub fn render(&mut self, engine: &GameEngine) -> io::Result<()> {
        let palette = self.theme.palette();
        let mut header = String::from("   ");
        for c in 0..BOARD_SIZE {
            header.push(' ');
            header.push((b'A' + c as u8) as char);
            header.push(' ');
        }
        let separator = self.paint(palette.grid, "   ---+---+---");
        let bar = self.paint(palette.grid, "|");
        writeln!(self.output, "{}", header)?;
        for r in 0..BOARD_SIZE {
            let mut line = std::format!("{:2} ", r + 1);
            for c in 0..BOARD_SIZE {
                if c > 0 {
                    line.push_str(&bar);
                }
                let cell = match engine.cell_at(r, c) {
                    Some(p) => {
                        let text = std::format!(" {} ", p.symbol());
                        self.paint(self.theme.mark_color(p), &text)
                    }
                    None => String::from("   "),
                };
                line.push_str(&cell);
            }
            writeln!(self.output, "{}", line)?;
            if r + 1 < BOARD_SIZE {
                writeln!(self.output, "{}", separator)?;
            }
        }
        let status = self.paint(palette.status, &Self::status_line(engine));
        writeln!(self.output, "{}", status)
    }

    fn read_move(&mut self, engine: &GameEngine) -> io::Result<Option<(usize, usize)>> {
        self.render(engine)?;
        let prompt = std::format!(
            "Player {}, enter a cell (A1-C3, q to quit): ",
            engine.current_player()
        );
        loop {
            let Some(line) = self.prompt(&prompt)? else {
                return Ok(None);
            };
            if line.eq_ignore_ascii_case("q") {
                return Ok(None);
            }
            match parse_coord(&line) {
                Some(coord) => return Ok(Some(coord)),
                None => self.say("Invalid coordinate")?,
            }
        }
    }

    fn report(&mut self, engine: &GameEngine, coord: (usize, usize), result: MoveResult) -> io::Result<()> {
        let cell = coord_to_string(coord.0, coord.1);
        match result {
            MoveResult::Invalid => self.say(&std::format!("{} is not available.", cell)),
            _ => {
                let mover = engine.cell_at(coord.0, coord.1).unwrap_or(engine.current_player());
                if engine.mode().computer() == Some(mover) {
                    self.say(&std::format!("Computer plays {}", cell))?;
                }
                if result.is_terminal() {
                    self.render(engine)?;
                }
                Ok(())
            }
        }
    }
}

impl<R: BufRead, W: Write> Participant for Console<R, W> {
    fn select_move(&mut self, _rng: &mut SmallRng, engine: &GameEngine) -> Option<(usize, usize)> {
        match self.read_move(engine) {
            Ok(choice) => choice,
            Err(e) => {
                warn!("console input failed: {}", e);
                None
            }
        }
    }

    fn computer_thinking(&mut self, engine: &GameEngine) {
        let status = self.paint(self.theme.palette().status, &Self::status_line(engine));
        if let Err(e) = self.say(&status) {
            warn!("console output failed: {}", e);
        }
    }

    fn observe(&mut self, engine: &GameEngine, coord: (usize, usize), result: MoveResult) {
        if let Err(e) = self.report(engine, coord, result) {
            warn!("console output failed: {}", e);
        }
    }
}

/// Human-readable name for a mark's controller.
pub fn seat_label(engine: &GameEngine, player: Player) -> &'static str {
    if engine.mode().computer() == Some(player) {
        "computer"
    } else {
        "human"
    }
}
