//! CLI frontend for the Dirac Dice race game.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use dirac_core::config::{DEFAULT_PRACTICE_TARGET, DEFAULT_WIN_THRESHOLD};

#[derive(Parser)]
#[command(
    name = "dirac",
    about = "Dirac Dice: a two-player race game played across the multiverse",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve one task for an input file and print a one-line result
    Run {
        /// Input file with both players' starting positions
        file: PathBuf,

        /// Task number: 1 = practice game, 2 = Dirac dice
        #[arg(short, long, default_value = "2", value_parser = clap::value_parser!(u8).range(1..=2))]
        task: u8,

        /// Score needed to win with the Dirac die
        #[arg(long, default_value_t = DEFAULT_WIN_THRESHOLD)]
        threshold: u32,

        /// Score needed to win the practice game
        #[arg(long, default_value_t = DEFAULT_PRACTICE_TARGET)]
        target: u32,
    },

    /// Count the universes each player wins in
    Universes {
        /// Input file with both players' starting positions
        file: PathBuf,

        /// Score needed to win
        #[arg(long, default_value_t = DEFAULT_WIN_THRESHOLD)]
        threshold: u32,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Cross-check the result with the layer-by-layer sweep
        #[arg(long)]
        verify: bool,
    },

    /// Play the deterministic practice game
    Practice {
        /// Input file with both players' starting positions
        file: PathBuf,

        /// Score needed to win
        #[arg(long, default_value_t = DEFAULT_PRACTICE_TARGET)]
        target: u32,
    },

    /// Play out one random universe with the Dirac die
    Sample {
        /// Input file with both players' starting positions
        file: PathBuf,

        /// RNG seed for a reproducible universe
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Score needed to win
        #[arg(long, default_value_t = DEFAULT_WIN_THRESHOLD)]
        threshold: u32,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            file,
            task,
            threshold,
            target,
        } => commands::run::run(&file, task, threshold, target),
        Commands::Universes {
            file,
            threshold,
            json,
            verify,
        } => commands::universes::run(&file, threshold, json, verify),
        Commands::Practice { file, target } => commands::practice::run(&file, target),
        Commands::Sample {
            file,
            seed,
            threshold,
        } => commands::sample::run(&file, seed, threshold),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
