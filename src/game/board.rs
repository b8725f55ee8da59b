use std::fmt;

use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::error::MoveError;

/// Side length of the standard board.
pub const SIZE: usize = 10;
/// Number of consecutive cells needed to win on the standard board.
pub const WIN_CONDITION: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Human,
    Machine,
}

impl Cell {
    /// Numeric encoding used by board files: -1 human, 0 empty, 1 machine.
    pub fn value(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::Human => -1,
            Cell::Machine => 1,
        }
    }

    pub fn from_value(value: i64) -> Option<Cell> {
        match value {
            0 => Some(Cell::Empty),
            -1 => Some(Cell::Human),
            1 => Some(Cell::Machine),
            _ => None,
        }
    }

    /// The player owning this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Human => Some(Player::Human),
            Cell::Machine => Some(Player::Machine),
        }
    }
}

/// A cell to claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }

    /// 1-based number of this cell in row-major order, as typed by players.
    pub fn number(self, size: usize) -> usize {
        self.row * size + self.col + 1
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Square grid of cells. Size and win length are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    win_length: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty 10x10 board with a win length of 5
    pub fn new() -> Self {
        Self::with_rules(SIZE, WIN_CONDITION)
    }

    /// Create an empty board of any geometry.
    ///
    /// Panics if `size` is zero or `win_length` is not in `1..=size`.
    pub fn with_rules(size: usize, win_length: usize) -> Self {
        assert!(size > 0, "board size must be positive");
        assert!(
            (1..=size).contains(&win_length),
            "win length {win_length} does not fit a {size}x{size} board"
        );
        Board {
            size,
            win_length,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Build a board from row-major cells. `cells` must hold `size * size` entries.
    pub(crate) fn from_cells(size: usize, win_length: usize, cells: Vec<Cell>) -> Self {
        let mut board = Self::with_rules(size, win_length);
        debug_assert_eq!(cells.len(), size * size);
        board.cells = cells;
        board
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, column 0 is the left
    pub fn get(&self, row: usize, col: usize) -> Cell {
        debug_assert!(self.contains(row, col), "({row}, {col}) off the board");
        self.cells[row * self.size + col]
    }

    /// Checked read.
    pub fn try_get(&self, row: usize, col: usize) -> Result<Cell, MoveError> {
        if !self.contains(row, col) {
            return Err(self.out_of_range(row, col));
        }
        Ok(self.get(row, col))
    }

    /// Claim an empty cell for `player`.
    pub fn set(&mut self, row: usize, col: usize, player: Player) -> Result<(), MoveError> {
        if !self.contains(row, col) {
            return Err(self.out_of_range(row, col));
        }
        if self.get(row, col) != Cell::Empty {
            return Err(MoveError::InvalidMove { row, col });
        }
        self.cells[row * self.size + col] = player.to_cell();
        Ok(())
    }

    /// Write a cell without the occupancy check. Search uses this for
    /// speculative placement and undo.
    pub(crate) fn put(&mut self, mv: Move, cell: Cell) {
        self.cells[mv.row * self.size + mv.col] = cell;
    }

    /// Every empty cell, in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &cell)| cell == Cell::Empty)
            .map(move |(i, _)| Move::new(i / size, i % size))
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Empty).count()
    }

    /// True when no piece has been placed yet.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&c| c == Cell::Empty)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    fn out_of_range(&self, row: usize, col: usize) -> MoveError {
        MoveError::OutOfRange {
            row,
            col,
            size: self.size,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats the board in the comma-separated file format, one row per line.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let values: Vec<String> = row.iter().map(|c| c.value().to_string()).collect();
            writeln!(f, "{}", values.join(","))?;
        }
        Ok(())
    }
}
