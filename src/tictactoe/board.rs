//! Board representation and the canonical board key

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::BOARD_SIZE;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Human,
    Computer,
}

impl Cell {
    /// Character used for this cell in board keys.
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Human => 'X',
            Cell::Computer => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            ' ' | '.' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::Human),
            'O' | 'o' => Some(Cell::Computer),
            _ => None,
        }
    }

    /// The player owning this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Human => Some(Player::Human),
            Cell::Computer => Some(Player::Computer),
            Cell::Empty => None,
        }
    }

    /// Swap human and computer marks; empty stays empty.
    pub fn inverted(self) -> Cell {
        match self {
            Cell::Human => Cell::Computer,
            Cell::Computer => Cell::Human,
            Cell::Empty => Cell::Empty,
        }
    }
}

/// A participant in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Human => Cell::Human,
            Player::Computer => Cell::Computer,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Human => write!(f, "human"),
            Player::Computer => write!(f, "computer"),
        }
    }
}

/// The nine cells of a board, row by row.
///
/// Boards are small `Copy` values; every placed mark yields a new snapshot
/// that the learner keeps in its trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// Parse a board from its 9-character key.
    ///
    /// `' '` and `'.'` are empty cells, `'X'` the human and `'O'` the computer.
    ///
    /// # Errors
    ///
    /// Returns error if the key does not have exactly 9 characters or any
    /// character is not a valid cell representation.
    pub fn from_key(key: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = key.chars().collect();
        if chars.len() != BOARD_SIZE {
            return Err(crate::Error::InvalidBoardLength {
                expected: BOARD_SIZE,
                got: chars.len(),
                context: key.to_string(),
            });
        }

        let mut cells = [Cell::Empty; BOARD_SIZE];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: key.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// The canonical lookup key: one character per cell in order 0..8
    pub fn key(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }

    /// Get cell at position (0-8)
    ///
    /// # Panics
    ///
    /// Panics if `pos` is 9 or more.
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    ///
    /// # Panics
    ///
    /// Panics if `pos` is 9 or more.
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// True when no cell holds a mark
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|&c| c == Cell::Empty)
    }

    /// True when every cell holds a mark
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Get all empty positions in ascending order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Lowest index holding an empty cell
    pub fn first_open_cell(&self) -> Option<usize> {
        self.cells.iter().position(|&c| c == Cell::Empty)
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Copy of this board with `cell` written at `pos`, no legality checks.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is 9 or more; callers validate through
    /// [`Position`](crate::types::Position) first.
    #[must_use = "with_cell returns a new board; the original is unchanged"]
    pub fn with_cell(&self, pos: usize, cell: Cell) -> Board {
        let mut next = *self;
        next.cells[pos] = cell;
        next
    }

    /// Swap human and computer marks on every cell.
    ///
    /// Inverting twice yields the original board.
    ///
    /// # Examples
    ///
    /// ```
    /// use tictactoe_learner::tictactoe::Board;
    ///
    /// let board = Board::from_key("X O      ").unwrap();
    /// assert_eq!(board.inverted().key(), "O X      ");
    /// assert_eq!(board.inverted().inverted(), board);
    /// ```
    #[must_use = "inverted returns a new board; the original is unchanged"]
    pub fn inverted(&self) -> Board {
        let mut swapped = *self;
        for cell in &mut swapped.cells {
            *cell = cell.inverted();
        }
        swapped
    }

    /// The player holding a complete line, first line in scan order wins.
    pub fn winner(&self) -> Option<Player> {
        super::lines::LineAnalyzer::winner(&self.cells)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            let c = match cell {
                Cell::Empty => '.',
                other => other.to_char(),
            };
            write!(f, "{c}")?;
            if (i + 1) % 3 == 0 && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
