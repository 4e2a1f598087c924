//! Command-line frontend for the Spielwerk toolkit.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sw",
    about = "Spielwerk — dice, chance, and table helpers for text games",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll dice from notation like 2d6+3
    Roll {
        /// Dice notation (e.g. d20, 3d6, 2d8+1)
        notation: String,

        /// Repeat the roll this many times
        #[arg(short, long, default_value = "1")]
        times: u32,

        /// RNG seed for reproducible rolls (default: OS entropy)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Check a percentage chance with a d100 roll
    Chance {
        /// Success threshold in percent (0-100)
        percentage: u32,

        /// RNG seed for reproducible rolls (default: OS entropy)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Pick one of the given items at random
    Pick {
        /// Candidate items
        #[arg(required = true)]
        items: Vec<String>,

        /// RNG seed for reproducible picks (default: OS entropy)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Start an interactive dice table
    Table {
        /// RNG seed for a reproducible session (default: OS entropy)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Append to or display the activity log
    Log {
        #[command(subcommand)]
        action: LogAction,
    },
}

#[derive(Subcommand)]
enum LogAction {
    /// Append a timestamped entry
    Add {
        /// Message to record
        message: String,

        /// Log file to append to
        #[arg(short, long, default_value = "activity.log")]
        file: PathBuf,
    },

    /// Display recorded entries
    Show {
        /// Only the last N entries
        #[arg(short, long)]
        tail: Option<usize>,

        /// Log file to read
        #[arg(short, long, default_value = "activity.log")]
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Roll {
            notation,
            times,
            seed,
        } => commands::roll::run(&notation, times, seed),
        Commands::Chance { percentage, seed } => commands::chance::run(percentage, seed),
        Commands::Pick { items, seed } => commands::pick::run(&items, seed),
        Commands::Table { seed } => commands::table::run(seed),
        Commands::Log { action } => match action {
            LogAction::Add { message, file } => commands::log::add(&file, &message),
            LogAction::Show { tail, file } => commands::log::show(&file, tail),
        },
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
