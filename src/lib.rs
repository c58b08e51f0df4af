//! Tic-tac-toe against a minimax AI
//!
//! The computer opponent searches the complete game tree with minimax and
//! alpha-beta pruning, so it never loses.
//!
//! # Architecture
//!
//! - [`board`]: 3x3 board representation
//! - [`rules`]: Win-lines and position classification
//! - [`search`]: Minimax with alpha-beta pruning
//! - [`engine`]: AI entry point with timing and statistics
//! - [`ui`]: Turn loop, score counters and the egui front end
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{AIEngine, Board, Cell, Pos};
//!
//! let mut board = Board::new();
//! let mut engine = AIEngine::new();
//!
//! board.place(Pos::new(1, 1), Cell::Player);
//!
//! // AI responds as O
//! if let Some(pos) = engine.get_move(&mut board) {
//!     board.place(pos, Cell::Ai);
//!     println!("AI plays at ({}, {})", pos.row, pos.col);
//! }
//! ```
//!
//! # Scoring
//!
//! Terminal positions score +1000 for an AI line, -1000 for a human line
//! and +1 for a draw. Each ply between the root and the result moves the
//! propagated score by 10 so that faster wins are preferred.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Pos, BOARD_SIZE};
pub use engine::{AIEngine, MoveResult};
pub use error::MoveError;
pub use rules::{classify, GameOutcome};
