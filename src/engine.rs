//! Main AI engine
//!
//! Thin layer over the alpha-beta searcher: it always searches for the AI's
//! mark from the root with a full window, times the search and reports the
//! result with statistics.
//!
//! # Example
//!
//! ```
//! use tictactoe::{AIEngine, Board, Cell, Pos};
//!
//! let mut engine = AIEngine::new();
//! let mut board = Board::new();
//! board.place(Pos::new(1, 1), Cell::Player);
//!
//! let result = engine.get_move_with_stats(&mut board);
//! println!("Best move: {:?}", result.best_move);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use tracing::{debug, instrument};

use crate::board::{Board, Cell, Pos};
use crate::search::{SearchResult, Searcher};

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Score of the chosen move (positive favours the AI)
    pub score: i32,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
    /// Number of alpha-beta cutoffs
    pub cutoffs: u64,
}

impl MoveResult {
    /// Create a result from alpha-beta search
    #[inline]
    fn from_alphabeta(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            time_ms,
            nodes: result.nodes,
            cutoffs: result.stats.cutoffs,
        }
    }
}

/// AI engine for tic-tac-toe.
///
/// The engine plays the [`Cell::Ai`] mark. It borrows the live game board
/// for the duration of one call and hands it back unchanged.
#[derive(Debug, Default)]
pub struct AIEngine {
    searcher: Searcher,
}

impl AIEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the best move for the AI.
    ///
    /// Returns `None` if the board is already decided.
    #[must_use]
    pub fn get_move(&mut self, board: &mut Board) -> Option<Pos> {
        self.get_move_with_stats(board).best_move
    }

    /// Get the best move with search statistics.
    #[must_use]
    #[instrument(skip_all, fields(marks = board.mark_count()))]
    pub fn get_move_with_stats(&mut self, board: &mut Board) -> MoveResult {
        let start = Instant::now();

        let result = self.searcher.best_move(board, Cell::Ai);
        let result = MoveResult::from_alphabeta(result, start.elapsed().as_millis() as u64);

        debug!(
            best_move = ?result.best_move,
            score = result.score,
            nodes = result.nodes,
            cutoffs = result.cutoffs,
            time_ms = result.time_ms,
            "search finished"
        );

        result
    }
}
