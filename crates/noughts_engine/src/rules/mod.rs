//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board. Rules are
//! separated from turn and marker bookkeeping so win/tie detection can be
//! tested on bare boards.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, winning_line};

use super::{Board, Outcome};
use tracing::instrument;

/// Evaluates the outcome of `board`.
///
/// The first winning triple in [`LINES`] order decides a win; otherwise a
/// full board is a tie and anything else is in progress.
#[instrument(skip(board))]
pub fn evaluate_outcome(board: &Board) -> Outcome {
    if let Some(marker) = check_winner(board) {
        Outcome::Win(marker)
    } else if is_full(board) {
        Outcome::Tie
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Marker, Square};

    fn board_of(cells: &str) -> Board {
        let mut squares = [Square::Empty; 9];
        for (square, c) in squares.iter_mut().zip(cells.chars()) {
            *square = match c {
                'X' => Square::Occupied(Marker::X),
                'O' => Square::Occupied(Marker::O),
                _ => Square::Empty,
            };
        }
        Board::from_squares(squares)
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate_outcome(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_full_board_without_line_is_tie() {
        assert_eq!(evaluate_outcome(&board_of("XOXOXOOXO")), Outcome::Tie);
    }

    #[test]
    fn test_full_board_with_line_is_win() {
        assert_eq!(evaluate_outcome(&board_of("XXXOOXOXO")), Outcome::Win(Marker::X));
    }

    #[test]
    fn test_column_win() {
        assert_eq!(evaluate_outcome(&board_of(".O..O..O.")), Outcome::Win(Marker::O));
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Unreachable in play, but the order must still be fixed.
        assert_eq!(evaluate_outcome(&board_of("OOO...XXX")), Outcome::Win(Marker::O));
        assert_eq!(evaluate_outcome(&board_of("...XXXOOO")), Outcome::Win(Marker::X));
    }
}
