//! Win detection logic for tic-tac-toe.

use super::super::{Board, Marker, Position, Square};
use tracing::instrument;

/// The 8 winning triples: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first line in [`LINES`] order held entirely by one marker.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<[Position; 3]> {
    LINES.into_iter().find(|&[a, b, c]| {
        let sq = board.get(a);
        sq != Square::Empty && sq == board.get(b) && sq == board.get(c)
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(marker)` if a marker holds three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Marker> {
    winning_line(board).and_then(|[a, _, _]| board.get(a).marker())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Marker::X));
        board.set(Position::TopCenter, Square::Occupied(Marker::X));
        board.set(Position::TopRight, Square::Occupied(Marker::X));
        assert_eq!(check_winner(&board), Some(Marker::X));
        assert_eq!(winning_line(&board), Some(LINES[0]));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopRight, Square::Occupied(Marker::O));
        board.set(Position::Center, Square::Occupied(Marker::O));
        board.set(Position::BottomLeft, Square::Occupied(Marker::O));
        assert_eq!(check_winner(&board), Some(Marker::O));
        assert_eq!(winning_line(&board), Some(LINES[7]));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Marker::X));
        board.set(Position::TopCenter, Square::Occupied(Marker::O));
        board.set(Position::TopRight, Square::Occupied(Marker::X));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Marker::X));
        board.set(Position::TopCenter, Square::Occupied(Marker::X));
        assert_eq!(check_winner(&board), None);
    }
}
