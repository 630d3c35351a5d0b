//! Tic-tac-toe against a computer that learns from every finished game
//!
//! Subcommands:
//! - play against the computer in the terminal
//! - train it through self-play against scripted opponents
//! - inspect what a saved snapshot has learned
//! - convert snapshots between JSON and MessagePack

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Tic-tac-toe against a self-learning computer", long_about = None)]
struct Cli {
    /// Log engine decisions to stderr (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively against the computer
    Play(tictactoe_learner::cli::commands::play::PlayArgs),

    /// Train the computer through self-play
    Train(tictactoe_learner::cli::commands::train::TrainArgs),

    /// Summarize a learned snapshot
    Inspect(tictactoe_learner::cli::commands::inspect::InspectArgs),

    /// Convert a snapshot between JSON and MessagePack
    Convert(tictactoe_learner::cli::commands::convert::ConvertArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Play(args) => tictactoe_learner::cli::commands::play::execute(args),
        Commands::Train(args) => tictactoe_learner::cli::commands::train::execute(args),
        Commands::Inspect(args) => tictactoe_learner::cli::commands::inspect::execute(args),
        Commands::Convert(args) => tictactoe_learner::cli::commands::convert::execute(args),
    }
}
