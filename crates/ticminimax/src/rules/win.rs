//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Mark, Square};
use tracing::instrument;

/// The eight index triples that win the game.
pub static WINNING_COMBOS: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Marks in the order they are checked for a win.
const CHECK_ORDER: [Mark; 2] = [Mark::X, Mark::O];

/// Returns true if `mark` owns every cell of some winning combo.
pub fn has_line(board: &Board, mark: Mark) -> bool {
    let owned = Some(Square::Occupied(mark));
    WINNING_COMBOS
        .iter()
        .any(|combo| combo.iter().all(|&cell| board.get(cell) == owned))
}

/// Checks if there is a winner on the board.
///
/// X is checked before O, so a board where both marks own a line
/// reports X.
#[instrument(level = "trace", skip(board), ret)]
pub fn check_winner(board: &Board) -> Option<Mark> {
    CHECK_ORDER.into_iter().find(|&mark| has_line(board, mark))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark::{O, X};

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_combo_wins() {
        for combo in WINNING_COMBOS {
            let mut cells = [None; 9];
            for cell in combo {
                cells[cell] = Some(O);
            }
            assert_eq!(check_winner(&Board::from_cells(cells)), Some(O), "{combo:?}");
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = Board::from_cells([Some(X), Some(X), None, None, None, None, None, None, None]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_both_lines_reports_x() {
        let board = Board::from_cells([
            Some(O),
            Some(O),
            Some(O),
            Some(X),
            Some(X),
            Some(X),
            None,
            None,
            None,
        ]);
        assert_eq!(check_winner(&board), Some(X));
    }
}
