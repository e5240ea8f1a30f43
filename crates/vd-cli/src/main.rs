//! CLI frontend for the Verdacht deduction game.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "vd",
    about = "Verdacht — a text-driven deduction game",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game on stdin/stdout
    Play {
        /// RNG seed for a reproducible game (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Clues dealt to each participant
        #[arg(long, default_value = "3")]
        clues: usize,

        /// Sides on the turn die
        #[arg(long, default_value = "6")]
        die: u32,

        /// Print every participant's clue sheet before the first turn
        #[arg(long)]
        show_clues: bool,
    },

    /// List the standard participant, hideout, and chamber catalogs
    Catalog,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            seed,
            clues,
            die,
            show_clues,
        } => commands::play::run(seed, clues, die, show_clues),
        Commands::Catalog => commands::catalog::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
