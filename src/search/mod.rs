//! Search module for the tic-tac-toe AI
//!
//! Contains:
//! - Exhaustive minimax with alpha-beta pruning
//! - Node and cutoff statistics

pub mod alphabeta;

pub use alphabeta::{
    MoveCandidate, SearchResult, SearchStats, Searcher, AI_WIN_SCORE, DEPTH_WEIGHT, DRAW_SCORE,
    INF, PLAYER_WIN_SCORE,
};
