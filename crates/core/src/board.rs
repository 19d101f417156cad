//! Board module - manages the game grid
//!
//! The board is a 10x20 grid of cell-kind ids (0 = empty, 1-7 = piece kind).
//! Rows are stored top to bottom in a fixed array, so removing a row is an
//! in-place `copy_within` and never allocates.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use crate::pieces::Shape;
use crate::types::{COLS, EMPTY, ROWS};

/// One board row
pub type Row = [u8; COLS];

/// The game board - 10 columns x 20 rows
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: [Row; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            rows: [[EMPTY; COLS]; ROWS],
        }
    }

    #[inline(always)]
    fn index(x: i32, y: i32) -> Option<(usize, usize)> {
        if x < 0 || x >= COLS as i32 || y < 0 || y >= ROWS as i32 {
            return None;
        }
        Some((x as usize, y as usize))
    }

    pub fn width(&self) -> usize {
        COLS
    }

    pub fn height(&self) -> usize {
        ROWS
    }

    /// Get the cell-kind id at (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<u8> {
        Self::index(x, y).map(|(x, y)| self.rows[y][x])
    }

    /// Set the cell-kind id at (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, id: u8) -> bool {
        match Self::index(x, y) {
            Some((x, y)) => {
                self.rows[y][x] = id;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(id) if id != EMPTY)
    }

    pub fn row(&self, y: usize) -> Option<&Row> {
        self.rows.get(y)
    }

    /// All rows, top to bottom
    pub fn rows(&self) -> &[Row; ROWS] {
        &self.rows
    }

    /// Whether `shape` placed with its top-left cell at (x, y) collides.
    ///
    /// Columns outside `[0, COLS)` and rows at or below `ROWS` collide. Rows
    /// above the board never collide on their own; only in-range rows are
    /// checked against stored cells.
    pub fn collides(&self, shape: &Shape, x: i32, y: i32) -> bool {
        shape.cells().any(|(r, c, _)| {
            let bx = x + c as i32;
            let by = y + r as i32;
            bx < 0 || bx >= COLS as i32 || by >= ROWS as i32 || self.is_occupied(bx, by)
        })
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        match self.rows.get(y) {
            Some(row) => row.iter().all(|&id| id != EMPTY),
            None => false,
        }
    }

    /// Remove row `y`, shift every row above it down by one and insert an
    /// empty row at the top. Returns false if `y` is out of range.
    pub fn remove_row(&mut self, y: usize) -> bool {
        if y >= ROWS {
            return false;
        }
        // copy_within handles the overlapping ranges.
        self.rows.copy_within(0..y, 1);
        self.rows[0] = [EMPTY; COLS];
        true
    }

    /// Number of non-empty cells on the board
    pub fn filled_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&id| id != EMPTY)
            .count()
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.rows = [[EMPTY; COLS]; ROWS];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
