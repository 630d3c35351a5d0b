//! Winning line analysis for Tic-Tac-Toe

use std::collections::BTreeSet;

use super::{Cell, Player};

/// Winning line indices on the 3x3 board, in scan order
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// The first line in scan order whose three cells hold the same mark.
    pub fn winning_line(cells: &[Cell; 9]) -> Option<[usize; 3]> {
        WINNING_LINES.iter().copied().find(|line| {
            let first = cells[line[0]];
            first != Cell::Empty && line.iter().all(|&idx| cells[idx] == first)
        })
    }

    /// Owner of the first completed line, if any
    pub fn winner(cells: &[Cell; 9]) -> Option<Player> {
        Self::winning_line(cells).and_then(|line| cells[line[0]].player())
    }

    /// Find all positions that would immediately win for the player
    pub fn winning_moves(cells: &[Cell; 9], player: Player) -> BTreeSet<usize> {
        WINNING_LINES
            .iter()
            .filter_map(|line| Self::winning_move_in_line(cells, player, line))
            .collect()
    }

    /// Find the winning move position in a specific line, if one exists
    fn winning_move_in_line(cells: &[Cell; 9], player: Player, line: &[usize; 3]) -> Option<usize> {
        let target = player.to_cell();
        let mut count = 0;
        let mut empty_pos = None;

        for &idx in line {
            match cells[idx] {
                Cell::Empty => {
                    if empty_pos.is_some() {
                        return None;
                    }
                    empty_pos = Some(idx);
                }
                c if c == target => count += 1,
                _ => return None,
            }
        }

        if count == 2 { empty_pos } else { None }
    }
}
