//! Convert command - re-encode a snapshot between JSON and MessagePack

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use super::{SnapshotFormat, resolve_format};
use crate::cli::output::{format_number, print_kv};

#[derive(Parser, Debug)]
#[command(about = "Convert a snapshot between JSON and MessagePack")]
pub struct ConvertArgs {
    /// Snapshot to read
    pub input: PathBuf,

    /// File to write
    pub output: PathBuf,

    /// Input encoding; inferred from the extension when omitted
    #[arg(long, value_enum)]
    pub from: Option<SnapshotFormat>,

    /// Output encoding; inferred from the extension when omitted
    #[arg(long, value_enum)]
    pub to: Option<SnapshotFormat>,
}

pub fn execute(args: ConvertArgs) -> Result<()> {
    if args.input == args.output {
        bail!("Input and output must be different files");
    }

    let from = resolve_format(args.from, &args.input);
    let to = resolve_format(args.to, &args.output);

    let snapshot = from
        .app(None)
        .snapshot_repository()
        .load(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    to.app(None)
        .snapshot_repository()
        .save(&snapshot, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    print_kv("Entries", &format_number(snapshot.len()));
    print_kv("Written", &format!("{} ({to:?})", args.output.display()));
    Ok(())
}
