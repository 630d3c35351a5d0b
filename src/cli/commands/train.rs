//! Train command - warm up an experience store through self-play

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use super::{SnapshotFormat, resolve_format};
use crate::{
    app::EngineConfig,
    cli::{
        config::{CommonConfig, TrainingConfig as TrainingDefaults},
        output::{format_number, print_kv, print_section},
    },
    pipeline::{Opponent, TrainingConfig, TrainingSession},
};

#[derive(Parser, Debug)]
#[command(about = "Train the computer player against a scripted opponent")]
pub struct TrainArgs {
    /// Number of training games
    #[arg(long, short = 'g')]
    pub games: Option<usize>,

    /// Opponent playing the human side (random, first-open, tactical)
    #[arg(long, short = 'o')]
    pub opponent: Option<Opponent>,

    /// Snapshot to continue training from
    #[arg(long, short = 'b')]
    pub bootstrap: Option<PathBuf>,

    /// Where to write the trained snapshot
    #[arg(long, short = 'O')]
    pub output: Option<PathBuf>,

    /// Snapshot encoding; inferred from the output extension when omitted
    #[arg(long, value_enum)]
    pub format: Option<SnapshotFormat>,

    /// Optional path for writing a summary JSON file
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Hide the progress bar
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
}

pub fn execute(args: TrainArgs) -> Result<()> {
    let defaults = TrainingDefaults::default();
    let common = CommonConfig {
        seed: args.seed,
        progress: !args.no_progress,
    };

    let mut engine_config = EngineConfig::new();
    if let Some(path) = &args.bootstrap {
        engine_config = engine_config.with_bootstrap(path);
    }

    // The bootstrap file is read with its own format, independent of the output.
    let load_format = args
        .bootstrap
        .as_deref()
        .map(SnapshotFormat::from_path)
        .unwrap_or(SnapshotFormat::Json);
    let engine = load_format
        .app(common.seed)
        .create_engine(engine_config)
        .context("Failed to prepare engine")?;

    let config = TrainingConfig {
        num_games: args.games.unwrap_or(defaults.games),
        opponent: args.opponent.unwrap_or(defaults.opponent),
        seed: common.seed,
        progress: common.progress,
    };

    print_section("Training");
    print_kv("Opponent", config.opponent.name());
    print_kv("Games", &format_number(config.num_games));
    if let Some(path) = &args.bootstrap {
        print_kv("Bootstrap", &path.display().to_string());
    }

    let mut session = TrainingSession::new(engine, config)?;
    let result = session.run().context("Training failed")?;

    print_section("Results");
    print_kv(
        "Computer wins",
        &format!("{} ({:.1}%)", result.wins, result.win_rate * 100.0),
    );
    print_kv(
        "Draws",
        &format!("{} ({:.1}%)", result.draws, result.draw_rate * 100.0),
    );
    print_kv(
        "Computer losses",
        &format!("{} ({:.1}%)", result.losses, result.loss_rate * 100.0),
    );
    print_kv("Known boards", &format_number(result.table_size));

    if let Some(summary) = &args.summary {
        result
            .save(summary)
            .with_context(|| format!("Failed to write summary to {}", summary.display()))?;
        print_kv("Summary", &summary.display().to_string());
    }

    if let Some(output) = &args.output {
        let format = resolve_format(args.format, output);
        let engine = session.into_engine();
        format
            .app(None)
            .save_store(engine.learner(), output)
            .with_context(|| format!("Failed to save snapshot to {}", output.display()))?;
        print_kv("Saved to", &output.display().to_string());
    }

    Ok(())
}
