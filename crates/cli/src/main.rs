mod game;
mod parse;
mod text;
mod tui;

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use animal_chess_core::Side;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_LOG_DIRECTIVES: &str = "animal_chess=info,animal_chess_core=info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FirstSide {
    Upper,
    Lower,
}

impl From<FirstSide> for Side {
    fn from(side: FirstSide) -> Self {
        match side {
            FirstSide::Upper => Side::Upper,
            FirstSide::Lower => Side::Lower,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Animal chess on a 3x4 board")]
struct Cli {
    #[command(subcommand)]
    command: Option<SubCommands>,

    /// Side that moves first
    #[arg(long, value_enum, default_value_t = FirstSide::Upper, global = true)]
    first: FirstSide,

    /// Append logs to this file (the TUI only logs when this is set)
    #[arg(long = "log-file", value_name = "FILE", value_hint = clap::ValueHint::FilePath, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum SubCommands {
    /// Line-mode play: type a square such as `b2` to click it
    Text,
    /// Apply a click string such as "b2b3b4b3" to a new game and print the result
    Replay {
        #[arg()]
        clicks: String,
    },
}

fn main() {
    let args = Cli::parse();
    let first = Side::from(args.first);

    // The TUI owns the terminal, so it only logs to a file.
    let log_to_stderr = args.command.is_some();
    if let Err(err) = init_logging(args.log_file.as_deref(), log_to_stderr) {
        eprintln!("Failed to initialize logging: {err}");
        std::process::exit(1);
    }

    match args.command {
        Some(SubCommands::Text) => text::text_loop(first).unwrap_or_else(|err| {
            eprintln!("Error in line mode: {err}");
        }),
        Some(SubCommands::Replay { clicks }) => {
            if let Err(err) = text::replay(&clicks, first) {
                eprintln!("Error replaying clicks: {err}");
                std::process::exit(1);
            }
        }
        None => tui::run(first).unwrap_or_else(|err| {
            eprintln!("Failed to initialize UI: {err}");
        }),
    }
}

fn init_logging(log_file: Option<&Path>, log_to_stderr: bool) -> Result<(), String> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_DIRECTIVES))
        .map_err(|e| e.to_string())?;

    match log_file {
        Some(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| format!("{}: {e}", path.display()))?;
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
                .with(filter)
                .init();
        }
        None if log_to_stderr => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
        None => {}
    }

    Ok(())
}
