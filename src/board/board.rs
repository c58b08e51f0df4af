//! Board structure for the 3x3 grid

use std::fmt;

use super::{Cell, Pos, BOARD_SIZE, TOTAL_CELLS};

/// Game board
///
/// The same instance is shared by the game loop and the search; the search
/// borrows it mutably and restores every cell it touches before returning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Place a mark. The caller guarantees the cell is empty.
    #[inline]
    pub fn place(&mut self, pos: Pos, mark: Cell) {
        debug_assert!(self.is_empty(pos), "placing on occupied cell {pos:?}");
        self.cells[pos.row as usize][pos.col as usize] = mark;
    }

    /// Remove a mark
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        self.cells[pos.row as usize][pos.col as usize] = Cell::Empty;
    }

    /// Clear every cell for a new game
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
    }

    /// Every empty cell in row-major order.
    ///
    /// The order decides which of several equally scored moves the search
    /// picks, so it must stay stable.
    pub fn legal_moves(&self) -> Vec<Pos> {
        (0..TOTAL_CELLS)
            .map(Pos::from_index)
            .filter(|&pos| self.is_empty(pos))
            .collect()
    }

    /// Total marks on board
    #[inline]
    pub fn mark_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.mark_count() == TOTAL_CELLS
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.mark_count() == 0
    }

    /// Build a board from three rows of `X`, `O` and `-` (test helper)
    #[cfg(test)]
    pub(crate) fn from_rows(rows: [&str; BOARD_SIZE]) -> Self {
        let mut board = Self::new();
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                let mark = match ch {
                    'X' => Cell::Player,
                    'O' => Cell::Ai,
                    _ => continue,
                };
                board.place(Pos::new(r as u8, c as u8), mark);
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}
