//! Output formatting for the CLI

use crate::tictactoe::{Board, Cell};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Draw the board as a grid; empty cells show their index so the player
/// knows what to type.
pub fn render_board(board: &Board) -> String {
    let rows: Vec<String> = board
        .cells
        .chunks(3)
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, &cell)| match cell {
                    Cell::Empty => (row * 3 + col).to_string(),
                    other => other.to_char().to_string(),
                })
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .map(|line| format!(" {line}"))
        .collect();
    rows.join("\n---+---+---\n")
}
