//! Position classification

use crate::board::{Board, Cell};

use super::win::is_win_for;

/// State of a game derived from the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    Ongoing,
    PlayerWin,
    AiWin,
    Draw,
}

impl GameOutcome {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::Ongoing
    }

    /// Announcement for a finished game
    pub fn message(self) -> &'static str {
        match self {
            GameOutcome::PlayerWin => "You Win!",
            GameOutcome::AiWin => "AI Wins!",
            GameOutcome::Draw => "Draw!",
            GameOutcome::Ongoing => "",
        }
    }
}

/// Classify the board.
///
/// The human's line is checked before the AI's. Both cannot be complete in
/// a legal game, but the order is fixed anyway.
pub fn classify(board: &Board) -> GameOutcome {
    if is_win_for(board, Cell::Player) {
        GameOutcome::PlayerWin
    } else if is_win_for(board, Cell::Ai) {
        GameOutcome::AiWin
    } else if board.legal_moves().is_empty() {
        GameOutcome::Draw
    } else {
        GameOutcome::Ongoing
    }
}
