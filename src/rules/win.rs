//! Win condition checking
//!
//! A mark wins by occupying all three cells of a row, column or diagonal.

use crate::board::{Board, Cell, Pos};

/// The 8 winning lines: rows, columns, then diagonals
pub const WIN_LINES: [[Pos; 3]; 8] = [
    // Rows
    [Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2)],
    [Pos::new(1, 0), Pos::new(1, 1), Pos::new(1, 2)],
    [Pos::new(2, 0), Pos::new(2, 1), Pos::new(2, 2)],
    // Columns
    [Pos::new(0, 0), Pos::new(1, 0), Pos::new(2, 0)],
    [Pos::new(0, 1), Pos::new(1, 1), Pos::new(2, 1)],
    [Pos::new(0, 2), Pos::new(1, 2), Pos::new(2, 2)],
    // Diagonals
    [Pos::new(0, 0), Pos::new(1, 1), Pos::new(2, 2)],
    [Pos::new(0, 2), Pos::new(1, 1), Pos::new(2, 0)],
];

/// Check if `mark` occupies all three cells of any line
#[inline]
pub fn is_win_for(board: &Board, mark: Cell) -> bool {
    find_win_line(board, mark).is_some()
}

/// Find the first line fully occupied by `mark`
pub fn find_win_line(board: &Board, mark: Cell) -> Option<[Pos; 3]> {
    if mark == Cell::Empty {
        return None;
    }
    WIN_LINES
        .iter()
        .find(|line| line.iter().all(|&pos| board.get(pos) == mark))
        .copied()
}
