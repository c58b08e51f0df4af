//! Minimax search with alpha-beta pruning
//!
//! The whole game tree fits in reach, so the search always runs to terminal
//! positions; there is no evaluation heuristic and no depth limit.
//!
//! Scores are signed from the AI's side: the AI maximizes, the human
//! minimizes. Values propagated upward are nudged by `DEPTH_WEIGHT` per ply
//! so quicker wins and slower losses are preferred among equal outcomes.
//!
//! # Example
//!
//! ```
//! use tictactoe::board::{Board, Cell, Pos};
//! use tictactoe::search::{Searcher, INF};
//!
//! let mut board = Board::new();
//! board.place(Pos::new(0, 0), Cell::Player);
//!
//! let mut searcher = Searcher::new();
//! let best = searcher.search(&mut board, Cell::Ai, 0, -INF, INF);
//! assert_eq!(best.target, Some(Pos::new(1, 1)));
//! ```

use std::ops::{Deref, DerefMut};

use crate::board::{Board, Cell, Pos};
use crate::rules::{classify, GameOutcome};

/// Bound used for the initial alpha-beta window and running best
pub const INF: i32 = 10_000;

/// Terminal score when the AI completes a line
pub const AI_WIN_SCORE: i32 = 1000;

/// Terminal score when the human completes a line
pub const PLAYER_WIN_SCORE: i32 = -1000;

/// Terminal score for a full board with no line
pub const DRAW_SCORE: i32 = 1;

/// Score adjustment per ply of depth
pub const DEPTH_WEIGHT: i32 = 10;

/// Result of a search node: score and the move producing it.
///
/// `target` is `None` when the position was already terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveCandidate {
    pub score: i32,
    pub target: Option<Pos>,
}

impl MoveCandidate {
    #[inline]
    fn terminal(score: i32) -> Self {
        Self {
            score,
            target: None,
        }
    }
}

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Total alpha-beta cutoffs
    pub cutoffs: u64,
}

/// Search result containing the best move and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Score of the best move
    pub score: i32,
    /// Total nodes searched
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// A mark placed for the duration of one child search.
///
/// Dropping the guard clears the cell again, so the board is restored on
/// every exit path out of the recursive step.
struct Placed<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl<'a> Placed<'a> {
    #[inline]
    fn new(board: &'a mut Board, pos: Pos, mark: Cell) -> Self {
        board.place(pos, mark);
        Self { board, pos }
    }
}

impl Deref for Placed<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placed<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placed<'_> {
    fn drop(&mut self) {
        self.board.clear(self.pos);
    }
}

/// Exhaustive alpha-beta searcher.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes visited since the last `best_move` call (or creation)
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Search from the root for `to_move` with a full window.
    #[must_use]
    pub fn best_move(&mut self, board: &mut Board, to_move: Cell) -> SearchResult {
        self.nodes = 0;
        self.stats = SearchStats::default();

        let best = self.search(board, to_move, 0, -INF, INF);

        SearchResult {
            best_move: best.target,
            score: best.score,
            nodes: self.nodes,
            stats: self.stats.clone(),
        }
    }

    /// Minimax with alpha-beta pruning.
    ///
    /// `depth` counts plies from the entry point. The board is mutated while
    /// children are explored and is identical to the input on return.
    pub fn search(
        &mut self,
        board: &mut Board,
        to_move: Cell,
        depth: i32,
        mut alpha: i32,
        mut beta: i32,
    ) -> MoveCandidate {
        self.nodes += 1;

        match classify(board) {
            GameOutcome::PlayerWin => return MoveCandidate::terminal(PLAYER_WIN_SCORE),
            GameOutcome::AiWin => return MoveCandidate::terminal(AI_WIN_SCORE),
            GameOutcome::Draw => return MoveCandidate::terminal(DRAW_SCORE),
            GameOutcome::Ongoing => {}
        }

        let maximizing = to_move == Cell::Ai;
        let opponent = to_move.opponent();

        let mut best = MoveCandidate {
            score: if maximizing { -INF } else { INF },
            target: None,
        };

        for pos in board.legal_moves() {
            let score = {
                let mut placed = Placed::new(board, pos, to_move);
                self.search(&mut placed, opponent, depth + 1, alpha, beta)
                    .score
            };

            // The running best holds adjusted scores, the child's is raw.
            if maximizing {
                if score > best.score {
                    best = MoveCandidate {
                        score: score - depth * DEPTH_WEIGHT,
                        target: Some(pos),
                    };
                    alpha = alpha.max(best.score);
                }
            } else if score < best.score {
                best = MoveCandidate {
                    score: score + depth * DEPTH_WEIGHT,
                    target: Some(pos),
                };
                beta = beta.min(best.score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}
