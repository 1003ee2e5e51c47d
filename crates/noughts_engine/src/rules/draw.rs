//! Full-board detection for tic-tac-toe.

use super::super::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner is a tie.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::super::{Marker, Position};
    use super::super::win::check_winner;
    use super::*;

    fn is_tie(board: &Board) -> bool {
        is_full(board) && check_winner(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Marker::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_tie_detection() {
        let mut board = Board::new();
        // X O X / O X X / O X O
        let layout = [
            Marker::X,
            Marker::O,
            Marker::X,
            Marker::O,
            Marker::X,
            Marker::X,
            Marker::O,
            Marker::X,
            Marker::O,
        ];
        for (pos, marker) in Position::ALL.into_iter().zip(layout) {
            board.set(pos, Square::Occupied(marker));
        }

        assert!(is_tie(&board));
    }

    #[test]
    fn test_not_tie_if_winner() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Marker::X));
        board.set(Position::TopCenter, Square::Occupied(Marker::X));
        board.set(Position::TopRight, Square::Occupied(Marker::X));
        board.set(Position::MiddleLeft, Square::Occupied(Marker::O));
        board.set(Position::Center, Square::Occupied(Marker::O));

        assert!(!is_tie(&board));
    }
}
