//! Input validation errors for the game driver.

use derive_more::{Display, Error};

/// Reason a human move was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The AI is to move
    #[display("Not your turn")]
    NotPlayerTurn,
    /// Click landed outside the 3x3 grid
    #[display("Cell ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },
    /// Cell already holds a mark
    #[display("Cell ({row}, {col}) is already taken")]
    Occupied { row: usize, col: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(MoveError::NotPlayerTurn.to_string(), "Not your turn");
        assert_eq!(
            MoveError::OutOfBounds { row: 3, col: 1 }.to_string(),
            "Cell (3, 1) is outside the board"
        );
        assert_eq!(
            MoveError::Occupied { row: 0, col: 2 }.to_string(),
            "Cell (0, 2) is already taken"
        );
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(MoveError::NotPlayerTurn);
        assert!(err.source().is_none());
    }
}
