//! Inspect command - summarize a snapshot and show what it would play

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use super::{SnapshotFormat, resolve_format};
use crate::{
    cli::output::{format_number, print_kv, print_section, render_board},
    experience::ExperienceStore,
    tictactoe::Board,
    types::Score,
};

#[derive(Parser, Debug)]
#[command(about = "Summarize a learned snapshot")]
pub struct InspectArgs {
    /// Snapshot file to inspect
    pub snapshot: PathBuf,

    /// Snapshot encoding; inferred from the extension when omitted
    #[arg(long, value_enum)]
    pub format: Option<SnapshotFormat>,

    /// Board key (9 characters of ' ', 'X', 'O') to evaluate
    #[arg(long)]
    pub board: Option<String>,

    /// Number of top-scored boards to list
    #[arg(long, default_value_t = 5)]
    pub top: usize,
}

pub fn execute(args: InspectArgs) -> Result<()> {
    let format = resolve_format(args.format, &args.snapshot);
    let store: ExperienceStore = format
        .app(None)
        .load_store(&args.snapshot)
        .with_context(|| format!("Failed to load {}", args.snapshot.display()))?;
    let snapshot = store.export_snapshot();

    print_section("Snapshot");
    print_kv("File", &args.snapshot.display().to_string());
    print_kv("Entries", &format_number(snapshot.len()));
    match snapshot.score_range() {
        Some((min, max)) => print_kv("Score range", &format!("{min} .. {max}")),
        None => print_kv("Score range", "empty"),
    }

    if args.top > 0 && !snapshot.is_empty() {
        let mut ranked: Vec<(&String, &Score)> = snapshot.0.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        println!("\n  Highest scored boards:");
        for (key, score) in ranked.into_iter().take(args.top) {
            println!("    {:>6}  {:?}", score, key);
        }
    }

    if let Some(key) = &args.board {
        let board = Board::from_key(key)?;
        print_section("Position");
        println!("{}\n", render_board(&board));
        for (pos, score) in store.candidates(&board) {
            print_kv(&format!("Cell {pos}"), &score.to_string());
        }
        match store.best_move(&board) {
            Ok(pos) => print_kv("Recommended", &pos.to_string()),
            Err(err) => print_kv("Recommended", &err.to_string()),
        }
    }

    Ok(())
}
