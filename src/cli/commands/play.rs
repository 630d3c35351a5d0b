//! Play command - interactive games against the learning computer

use std::{
    cell::RefCell,
    io::{self, BufRead, Write},
    path::PathBuf,
    rc::Rc,
    thread,
    time::Duration,
};

use anyhow::{Context, Result};
use clap::Parser;

use super::{SnapshotFormat, resolve_format};
use crate::{
    Error,
    app::EngineConfig,
    cli::{
        config::PlayConfig,
        output::{print_kv, print_section, render_board},
    },
    pipeline::OutcomeTally,
    tictactoe::Winner,
};

#[derive(Parser, Debug)]
#[command(about = "Play tic-tac-toe against the learning computer")]
pub struct PlayArgs {
    /// Snapshot to bootstrap the computer's experience from
    #[arg(long, short = 's')]
    pub snapshot: Option<PathBuf>,

    /// Where to save the computer's experience on exit
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Snapshot encoding; inferred from the file extension when omitted
    #[arg(long, value_enum)]
    pub format: Option<SnapshotFormat>,

    /// Pause before the next game starts, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Stop after this many games
    #[arg(long, short = 'g')]
    pub games: Option<usize>,

    /// Random seed for the opening coin flip
    #[arg(long)]
    pub seed: Option<u64>,
}

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Move(usize),
    Export,
    Quit,
    Blank,
    Unknown(String),
}

fn parse_input(line: &str) -> Input {
    match line.trim().to_ascii_lowercase().as_str() {
        "" => Input::Blank,
        "q" | "quit" | "exit" => Input::Quit,
        "e" | "export" => Input::Export,
        other => other
            .parse()
            .map(Input::Move)
            .unwrap_or_else(|_| Input::Unknown(other.to_string())),
    }
}

fn game_over_message(winner: Winner) -> &'static str {
    match winner {
        Winner::Human => "You win!",
        Winner::Computer => "Computer wins.",
        Winner::Draw => "Draw.",
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let defaults = PlayConfig::default();
    let delay = Duration::from_millis(args.delay_ms.unwrap_or(defaults.delay_ms));

    let path_hint = args.snapshot.as_ref().or(args.save.as_ref());
    let format = match path_hint {
        Some(path) => resolve_format(args.format, path),
        None => args.format.unwrap_or(SnapshotFormat::Json),
    };
    let app = format.app(args.seed);

    let mut config = EngineConfig::new();
    if let Some(path) = &args.snapshot {
        config = config.with_bootstrap(path);
    }
    let mut engine = app
        .create_engine(config)
        .context("Failed to prepare engine")?;

    let tally = Rc::new(RefCell::new(OutcomeTally::new()));
    engine.on_state_changed(|board| println!("\n{}\n", render_board(board)));
    engine.subscribe(Rc::clone(&tally));
    let scoreboard = Rc::clone(&tally);
    engine.on_game_over(move |winner, _| {
        println!("{}  [{}]", game_over_message(winner), scoreboard.borrow().summary());
    });

    println!("You are X, the computer is O. Type a cell 0-8, 'e' to export, 'q' to quit.");
    engine.reset();
    engine.start_game()?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if engine.winner().is_some() {
            if args.games.is_some_and(|limit| tally.borrow().total() >= limit) {
                break;
            }
            thread::sleep(delay);
            engine.reset();
            engine.start_game()?;
            continue;
        }

        print!("Your move: ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };

        match parse_input(&line.context("Failed to read input")?) {
            Input::Blank => {}
            Input::Quit => break,
            Input::Export => println!("{}", engine.learner().export_snapshot().to_json_pretty()?),
            Input::Unknown(text) => eprintln!("Not a cell: '{text}'"),
            Input::Move(position) => match engine.human_move(position) {
                Ok(_) => {}
                Err(err @ (Error::CellOccupied { .. } | Error::InvalidPosition { .. })) => {
                    eprintln!("{err}");
                }
                Err(err) => return Err(err.into()),
            },
        }
    }

    print_section("Session");
    let final_tally = *tally.borrow();
    print_kv("Games", &final_tally.total().to_string());
    print_kv("Score", &final_tally.summary());

    if let Some(path) = &args.save {
        app.save_store(engine.learner(), path)
            .with_context(|| format!("Failed to save snapshot to {}", path.display()))?;
        print_kv("Saved to", &path.display().to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input(" 4 \n"), Input::Move(4));
        assert_eq!(parse_input("12"), Input::Move(12));
        assert_eq!(parse_input("Q"), Input::Quit);
        assert_eq!(parse_input("export"), Input::Export);
        assert_eq!(parse_input("   "), Input::Blank);
        assert_eq!(parse_input("x"), Input::Unknown("x".to_string()));
    }

    #[test]
    fn test_game_over_message() {
        assert_eq!(game_over_message(Winner::Draw), "Draw.");
        assert_eq!(game_over_message(Winner::Human), "You win!");
    }
}
