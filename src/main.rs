//! Wordle IT - CLI
//!
//! Italian Wordle in the terminal: TUI by default, plus a line-based mode and
//! a few one-shot commands.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use wordle_it::{
    commands::{evaluate, run_simple, saved_share, saved_stats, start_game, today_line},
    config::{Config, default_state_path},
    game::{GameMode, daily, messages},
    output::{print_evaluation, print_stats},
};

#[derive(Parser)]
#[command(
    name = "wordle_it",
    about = "Wordle in italiano: indovina la parola di 5 lettere in 6 tentativi",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Starting mode
    #[arg(short, long, global = true, value_enum, default_value_t = ModeArg::Daily)]
    mode: ModeArg,

    /// Solution word list (one word per line); defaults to the built-in list
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Extra accepted guesses, used together with --wordlist
    #[arg(short, long, global = true, requires = "wordlist")]
    allowed: Option<PathBuf>,

    /// Save file [default: $WORDLE_IT_STATE or ~/.wordle-it.json]
    #[arg(long, global = true, conflicts_with = "no_save")]
    state_file: Option<PathBuf>,

    /// Play without reading or writing the save file
    #[arg(long, global = true)]
    no_save: bool,

    /// Accept any five-letter guess, not only listed words
    #[arg(long, global = true)]
    any_word: bool,

    /// Seed for random mode
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write log output to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Parola del giorno
    Daily,
    /// Parola casuale
    Random,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Daily => Self::Daily,
            ModeArg::Random => Self::Random,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-based game without TUI
    Simple,

    /// Evaluate a guess against a solution
    Evaluate {
        guess: String,
        solution: String,
    },

    /// Show saved statistics
    Stats,

    /// Print today's result if the daily game is finished
    Share,

    /// Show today's game number and the time to the next word
    Today,
}

impl Cli {
    fn config(&self) -> Config {
        let state_path = if self.no_save {
            None
        } else {
            self.state_file.clone().or_else(default_state_path)
        };

        Config {
            mode: self.mode.into(),
            answers_path: self.wordlist.clone(),
            allowed_path: self.allowed.clone(),
            state_path,
            check_words: !self.any_word,
            seed: self.seed,
        }
    }
}

/// Logs go to stderr, or to `log_file` when given; the TUI stays quiet otherwise
fn init_logging(log_file: Option<&Path>, tui: bool) -> Result<()> {
    let default_filter = if tui && log_file.is_none() { "off" } else { "warn" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("cannot open log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);
    init_logging(cli.log_file.as_deref(), matches!(command, Commands::Play))?;

    let config = cli.config();
    log::debug!("{config:?}");

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Evaluate { guess, solution } => run_evaluate_command(&guess, &solution),
        Commands::Stats => {
            print_stats(&saved_stats(&config)?);
            Ok(())
        }
        Commands::Share => run_share_command(&config),
        Commands::Today => {
            println!("{}", today_line(SystemTime::now()));
            Ok(())
        }
    }
}

fn run_play_command(config: &Config) -> Result<()> {
    use wordle_it::interactive::{App, run_tui};

    let words = config.word_bank().context("cannot load word lists")?;
    let (game, store) = start_game(config, &words)?;

    let shared = run_tui(App::new(game, store))?;
    for text in shared {
        println!("{text}");
    }
    Ok(())
}

fn run_simple_command(config: &Config) -> Result<()> {
    let words = config.word_bank().context("cannot load word lists")?;
    let (mut game, store) = start_game(config, &words)?;
    run_simple(&mut game, store.as_ref())
}

fn run_evaluate_command(guess: &str, solution: &str) -> Result<()> {
    let (guess, evaluation) = evaluate(guess, solution).context("invalid word")?;
    print_evaluation(&guess, &evaluation);
    Ok(())
}

fn run_share_command(config: &Config) -> Result<()> {
    match saved_share(config, daily::today())? {
        Some(text) => print!("{text}"),
        None => println!("{}", "La partita di oggi non è ancora finita.".yellow()),
    }
    println!(
        "{} {}",
        messages::NEXT_WORD,
        daily::format_countdown(daily::time_until_next(SystemTime::now()))
    );
    Ok(())
}
