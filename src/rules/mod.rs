//! Game rules for tic-tac-toe
//!
//! This module implements:
//! - Win-line detection over the 8 fixed lines
//! - Position classification (ongoing, win, draw)

pub mod outcome;
pub mod win;

// Re-exports for convenient access
pub use outcome::{classify, GameOutcome};
pub use win::{find_win_line, is_win_for, WIN_LINES};
