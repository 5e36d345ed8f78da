#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use tictactoe::{
    init_logging, run_match, run_menu, Console, Difficulty, GameEngine, GameMode, MatchResult,
    ModeKind, Player, Settings, Theme,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    #[arg(long, global = true, default_value_t = Theme::Dark, help = "Colour theme: dark or light")]
    theme: Theme,
    #[arg(long, global = true, help = "Disable ANSI colours")]
    plain: bool,
    #[arg(long, global = true, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum ModeArg {
    /// Two humans sharing the terminal.
    Pvp,
    /// Human against the computer.
    Pvc,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum PlayerArg {
    X,
    O,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Interactive menu with setup and settings screens (default).
    Menu,
    /// Start a single match directly.
    Play {
        #[arg(long, value_enum, default_value_t = ModeArg::Pvc)]
        mode: ModeArg,
        #[arg(long, value_enum, help = "Required for --mode pvc")]
        difficulty: Option<DifficultyArg>,
        #[arg(long, value_enum, default_value_t = PlayerArg::X)]
        first: PlayerArg,
        #[arg(long, help = "Let the computer take the first move")]
        computer_first: bool,
    },
}

#[cfg(feature = "std")]
impl From<DifficultyArg> for Difficulty {
    fn from(d: DifficultyArg) -> Self {
        match d {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[cfg(feature = "std")]
impl From<PlayerArg> for Player {
    fn from(p: PlayerArg) -> Self {
        match p {
            PlayerArg::X => Player::X,
            PlayerArg::O => Player::O,
        }
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = if let Some(s) = cli.seed {
        log::info!("using fixed seed {}", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    let mut settings = Settings::new(cli.theme);
    let mut console = Console::stdio(settings.theme());
    if cli.plain {
        console = console.plain();
    }

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => run_menu(&mut console, &mut settings, &mut rng)?,
        Commands::Play {
            mode,
            difficulty,
            first,
            computer_first,
        } => {
            let kind = match mode {
                ModeArg::Pvp => ModeKind::HumanVsHuman,
                ModeArg::Pvc => ModeKind::HumanVsComputer,
            };
            let first = Player::from(first);
            let mut engine = GameEngine::configure(kind, difficulty.map(Difficulty::from), first)?;
            if computer_first {
                match engine.mode().difficulty() {
                    Some(difficulty) => {
                        engine = GameEngine::new(GameMode::vs_computer(difficulty, first), first);
                    }
                    None => log::warn!(
                        "--computer-first ignored for a {:?} match",
                        engine.mode().kind()
                    ),
                }
            }
            match run_match(&mut engine, &mut console, &mut rng) {
                Some(MatchResult::Win(p)) => println!("Player {} wins!", p),
                Some(MatchResult::Draw) => println!("It's a draw!"),
                Some(MatchResult::InProgress) | None => println!("Match abandoned."),
            }
        }
    }
    Ok(())
}
