//! Game state management for the tic-tac-toe GUI
//!
//! Drives the turn loop: one human move, then one AI move, with the board
//! classified after every half-turn. A finished game bumps one counter and
//! the board is cleared straight away.

use std::fmt;

use tracing::{debug, info};

use crate::board::{Board, Cell, Pos};
use crate::config::GameSettings;
use crate::error::MoveError;
use crate::rules::{classify, find_win_line, GameOutcome};
use crate::{AIEngine, MoveResult};

/// Win/draw counters for the lifetime of the process
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub player_wins: u32,
    pub ai_wins: u32,
    pub draws: u32,
}

impl Scoreboard {
    /// Count a finished game. Ongoing positions are ignored.
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::PlayerWin => self.player_wins += 1,
            GameOutcome::AiWin => self.ai_wins += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::Ongoing => {}
        }
    }

    pub fn games(&self) -> u32 {
        self.player_wins + self.ai_wins + self.draws
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "You: {}  AI: {}  Draws: {}",
            self.player_wins, self.ai_wins, self.draws
        )
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub current_turn: Cell,
    pub scores: Scoreboard,
    /// Result of the most recently finished game
    pub last_outcome: Option<GameOutcome>,
    pub last_ai_result: Option<MoveResult>,
    pub message: Option<String>,
    engine: AIEngine,
    ai_first: bool,
}

impl GameState {
    pub fn new(settings: &GameSettings) -> Self {
        let ai_first = settings.ai_first;
        Self {
            board: Board::new(),
            current_turn: Self::opening_turn(ai_first),
            scores: Scoreboard::default(),
            last_outcome: None,
            last_ai_result: None,
            message: None,
            engine: AIEngine::new(),
            ai_first,
        }
    }

    fn opening_turn(ai_first: bool) -> Cell {
        if ai_first {
            Cell::Ai
        } else {
            Cell::Player
        }
    }

    /// Clear the board and start over; counters are kept.
    pub fn new_game(&mut self) {
        self.board.reset();
        self.current_turn = Self::opening_turn(self.ai_first);
        self.message = None;
    }

    /// Zero the counters
    pub fn reset_scores(&mut self) {
        self.scores = Scoreboard::default();
        self.last_outcome = None;
        info!("scores reset");
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        self.current_turn == Cell::Player
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        self.current_turn == Cell::Ai
    }

    /// Status line shown under the board
    pub fn status(&self) -> &'static str {
        if self.is_human_turn() {
            "Your Turn (X)"
        } else {
            "AI's Turn (O)"
        }
    }

    /// Attempt to place the human's mark.
    ///
    /// `row` and `col` come straight from the pixel mapping and may lie
    /// outside the grid.
    pub fn try_place_mark(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        if !self.is_human_turn() {
            return Err(MoveError::NotPlayerTurn);
        }

        let pos = Pos::try_new(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        if !self.board.is_empty(pos) {
            return Err(MoveError::Occupied { row, col });
        }

        self.execute_move(pos);
        Ok(())
    }

    /// Let the AI move if it is its turn.
    pub fn play_ai_turn(&mut self) {
        if !self.is_ai_turn() {
            return;
        }

        let result = self.engine.get_move_with_stats(&mut self.board);
        let best_move = result.best_move;
        self.last_ai_result = Some(result);

        match best_move {
            Some(pos) => self.execute_move(pos),
            None => {
                // Only reachable on a decided board, which `finish_if_over`
                // clears before the AI is asked.
                self.current_turn = Cell::Player;
                self.message = Some("AI could not find a move".to_string());
            }
        }
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, pos: Pos) {
        let mark = self.current_turn;
        self.board.place(pos, mark);
        debug!(mark = %mark.symbol(), row = pos.row, col = pos.col, "move");

        self.current_turn = mark.opponent();
        self.message = None;

        self.finish_if_over();
    }

    /// Record and clear a finished game. Returns the outcome if it ended.
    fn finish_if_over(&mut self) -> Option<GameOutcome> {
        let outcome = classify(&self.board);
        if !outcome.is_terminal() {
            return None;
        }

        let line = match outcome {
            GameOutcome::PlayerWin => find_win_line(&self.board, Cell::Player),
            GameOutcome::AiWin => find_win_line(&self.board, Cell::Ai),
            _ => None,
        };
        self.scores.record(outcome);
        info!(
            board = %self.board,
            line = ?line,
            scores = %self.scores,
            "{}",
            outcome.message()
        );

        self.last_outcome = Some(outcome);
        self.new_game();
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(ai_first: bool) -> GameState {
        GameState::new(&GameSettings {
            ai_first,
            ..GameSettings::default()
        })
    }

    #[test]
    fn test_human_moves_first_by_default() {
        let state = state(false);
        assert!(state.is_human_turn());
        assert_eq!(state.status(), "Your Turn (X)");
    }

    #[test]
    fn test_ai_first() {
        let mut state = state(true);
        assert!(state.is_ai_turn());
        assert_eq!(state.status(), "AI's Turn (O)");
        assert_eq!(state.try_place_mark(0, 0), Err(MoveError::NotPlayerTurn));

        state.play_ai_turn();
        assert_eq!(state.board.get(Pos::new(0, 0)), Cell::Ai);
        assert!(state.is_human_turn());
    }

    #[test]
    fn test_rejects_invalid_clicks() {
        let mut state = state(false);
        assert_eq!(
            state.try_place_mark(3, 0),
            Err(MoveError::OutOfBounds { row: 3, col: 0 })
        );
        assert_eq!(
            state.try_place_mark(1, 7),
            Err(MoveError::OutOfBounds { row: 1, col: 7 })
        );

        state.try_place_mark(1, 1).unwrap();
        assert_eq!(state.try_place_mark(1, 1), Err(MoveError::NotPlayerTurn));

        state.play_ai_turn();
        assert_eq!(
            state.try_place_mark(1, 1),
            Err(MoveError::Occupied { row: 1, col: 1 })
        );
        assert_eq!(state.board.mark_count(), 2);
    }

    #[test]
    fn test_turns_alternate() {
        let mut state = state(false);
        state.try_place_mark(0, 0).unwrap();
        assert!(state.is_ai_turn());

        state.play_ai_turn();
        assert!(state.is_human_turn());
        assert_eq!(state.board.get(Pos::new(1, 1)), Cell::Ai);
        assert_eq!(
            state.last_ai_result.as_ref().and_then(|r| r.best_move),
            Some(Pos::new(1, 1))
        );
    }

    #[test]
    fn test_ai_turn_ignored_on_human_turn() {
        let mut state = state(false);
        state.play_ai_turn();
        assert!(state.board.is_board_empty());
        assert!(state.last_ai_result.is_none());
    }

    #[test]
    fn test_player_win_counted_and_board_reset() {
        let mut state = state(false);
        state.board = Board::from_rows(["XX-", "OO-", "---"]);

        state.try_place_mark(0, 2).unwrap();

        assert_eq!(state.last_outcome, Some(GameOutcome::PlayerWin));
        assert_eq!(
            state.scores,
            Scoreboard {
                player_wins: 1,
                ai_wins: 0,
                draws: 0
            }
        );
        assert!(state.board.is_board_empty());
        assert!(state.is_human_turn());
    }

    #[test]
    fn test_ai_win_counted() {
        let mut state = state(false);
        state.board = Board::from_rows(["OO-", "XX-", "X--"]);
        state.current_turn = Cell::Ai;

        state.play_ai_turn();

        assert_eq!(state.last_outcome, Some(GameOutcome::AiWin));
        assert_eq!(state.scores.ai_wins, 1);
        assert_eq!(state.scores.games(), 1);
        assert!(state.board.is_board_empty());
    }

    #[test]
    fn test_draw_counted_once() {
        let mut state = state(false);
        state.board = Board::from_rows(["XOX", "XOO", "O-X"]);
        // X to fill the last cell without completing a line
        state.try_place_mark(2, 1).unwrap();

        assert_eq!(state.last_outcome, Some(GameOutcome::Draw));
        assert_eq!(state.scores.draws, 1);
        assert_eq!(state.scores.games(), 1);

        // The next game starts clean and nothing else is counted.
        state.play_ai_turn();
        assert_eq!(state.scores.games(), 1);
        assert!(state.board.is_board_empty());
    }

    #[test]
    fn test_full_game_never_lost() {
        let mut state = state(false);
        // Human always takes the first free cell.
        while state.scores.games() == 0 {
            let pos = state.board.legal_moves()[0];
            state
                .try_place_mark(pos.row as usize, pos.col as usize)
                .unwrap();
            state.play_ai_turn();
        }
        assert_eq!(state.scores.player_wins, 0);
    }

    #[test]
    fn test_new_game_keeps_scores() {
        let mut state = state(false);
        state.scores.record(GameOutcome::Draw);
        state.try_place_mark(2, 2).unwrap();

        state.new_game();
        assert!(state.board.is_board_empty());
        assert!(state.is_human_turn());
        assert_eq!(state.scores.draws, 1);

        state.reset_scores();
        assert_eq!(state.scores, Scoreboard::default());
        assert_eq!(state.last_outcome, None);
    }

    #[test]
    fn test_scoreboard_display() {
        let mut scores = Scoreboard::default();
        scores.record(GameOutcome::PlayerWin);
        scores.record(GameOutcome::Draw);
        scores.record(GameOutcome::Draw);
        scores.record(GameOutcome::Ongoing);
        assert_eq!(scores.to_string(), "You: 1  AI: 0  Draws: 2");
        assert_eq!(scores.games(), 3);
    }
}
