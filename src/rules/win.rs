//! Win detection: a localized scan around the most recent drop.

use super::ResolutionStrategy;
use crate::board::{Board, Chip, Position};
use crate::state::GameData;

/// Axis pairs scanned for a line: horizontal, vertical and both diagonals.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Detects a contiguous same-color line through the last taken position.
///
/// Only lines through the just-dropped chip can be new, so scanning
/// outward from it in the four axis pairs keeps the check O(in-a-row)
/// per axis instead of rescanning the whole board every turn.
#[derive(Debug, Clone)]
pub struct WinResolution {
    in_a_row: usize,
}

impl WinResolution {
    /// Creates a win detector for the given in-a-row value.
    pub fn new(in_a_row: usize) -> Self {
        Self { in_a_row }
    }
}

impl ResolutionStrategy for WinResolution {
    fn is_resolved(&self, data: &GameData) -> bool {
        let Some(board) = data.board() else {
            return false;
        };
        let Some(last) = data.last_taken_position() else {
            return false;
        };
        has_line_through(board, last, self.in_a_row)
    }
}

/// True when a contiguous same-color line of at least `in_a_row` chips
/// passes through `origin` on any of the four axes.
pub(crate) fn has_line_through(board: &Board, origin: Position, in_a_row: usize) -> bool {
    let chip = board.chip_at(origin);
    if chip == Chip::no_chip() {
        return false;
    }

    AXES.iter().any(|&(row_step, column_step)| {
        let total = 1
            + contiguous_count(board, origin, chip, row_step, column_step)
            + contiguous_count(board, origin, chip, -row_step, -column_step);
        total >= in_a_row
    })
}

/// Counts same-color chips extending from `origin` in one direction,
/// excluding `origin` itself. Stops at the first mismatch; out-of-range
/// probes read the sentinel chip and terminate the walk.
fn contiguous_count(
    board: &Board,
    origin: Position,
    chip: Chip,
    row_step: isize,
    column_step: isize,
) -> usize {
    let mut count = 0;
    let mut row = origin.row as isize + row_step;
    let mut column = origin.column as isize + column_step;

    while row >= 0 && column >= 0 {
        let position = Position {
            row: row as usize,
            column: column as usize,
        };
        if board.chip_at(position) != chip {
            break;
        }
        count += 1;
        row += row_step;
        column += column_step;
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ChipColor;

    fn board_with(chips: &[(usize, usize, ChipColor)]) -> Board {
        // Cells are filled column by column so every chip rests on the
        // previous one, matching how drops actually land.
        let mut board = Board::new(6, 7);
        for column in 0..7 {
            let mut stack: Vec<_> = chips
                .iter()
                .filter(|(_, c, _)| *c == column)
                .collect();
            stack.sort_by_key(|(row, _, _)| *row);
            for (row, _, color) in stack {
                let landed = board.drop_chip(Chip::new(*color), column).unwrap();
                assert_eq!(landed.row, *row);
            }
        }
        board
    }

    #[test]
    fn test_no_line_on_empty_origin() {
        let board = Board::new(6, 7);
        assert!(!has_line_through(&board, Position { row: 0, column: 0 }, 4));
    }

    #[test]
    fn test_vertical_line() {
        let board = board_with(&[
            (0, 0, ChipColor::Red),
            (1, 0, ChipColor::Red),
            (2, 0, ChipColor::Red),
            (3, 0, ChipColor::Red),
        ]);
        assert!(has_line_through(&board, Position { row: 3, column: 0 }, 4));
    }

    #[test]
    fn test_horizontal_line_through_middle() {
        let board = board_with(&[
            (0, 1, ChipColor::Blue),
            (0, 2, ChipColor::Blue),
            (0, 3, ChipColor::Blue),
            (0, 4, ChipColor::Blue),
        ]);
        // The origin sits inside the line, not at its end.
        assert!(has_line_through(&board, Position { row: 0, column: 2 }, 4));
    }

    #[test]
    fn test_ascending_diagonal_line() {
        let board = board_with(&[
            (0, 0, ChipColor::Red),
            (0, 1, ChipColor::Blue),
            (1, 1, ChipColor::Red),
            (0, 2, ChipColor::Blue),
            (1, 2, ChipColor::Blue),
            (2, 2, ChipColor::Red),
            (0, 3, ChipColor::Blue),
            (1, 3, ChipColor::Blue),
            (2, 3, ChipColor::Blue),
            (3, 3, ChipColor::Red),
        ]);
        assert!(has_line_through(&board, Position { row: 3, column: 3 }, 4));
    }

    #[test]
    fn test_descending_diagonal_line() {
        let board = board_with(&[
            (0, 3, ChipColor::Red),
            (0, 2, ChipColor::Blue),
            (1, 2, ChipColor::Red),
            (0, 1, ChipColor::Blue),
            (1, 1, ChipColor::Blue),
            (2, 1, ChipColor::Red),
            (0, 0, ChipColor::Blue),
            (1, 0, ChipColor::Blue),
            (2, 0, ChipColor::Blue),
            (3, 0, ChipColor::Red),
        ]);
        assert!(has_line_through(&board, Position { row: 3, column: 0 }, 4));
    }

    #[test]
    fn test_three_is_not_enough_for_four() {
        let board = board_with(&[
            (0, 0, ChipColor::Red),
            (1, 0, ChipColor::Red),
            (2, 0, ChipColor::Red),
        ]);
        assert!(!has_line_through(&board, Position { row: 2, column: 0 }, 4));
    }

    #[test]
    fn test_opponent_chip_breaks_the_line() {
        let board = board_with(&[
            (0, 0, ChipColor::Red),
            (0, 1, ChipColor::Red),
            (0, 2, ChipColor::Blue),
            (0, 3, ChipColor::Red),
            (0, 4, ChipColor::Red),
        ]);
        assert!(!has_line_through(&board, Position { row: 0, column: 4 }, 4));
    }

    #[test]
    fn test_longer_in_a_row_values_are_honored() {
        let board = board_with(&[
            (0, 0, ChipColor::Red),
            (1, 0, ChipColor::Red),
            (2, 0, ChipColor::Red),
            (3, 0, ChipColor::Red),
        ]);
        assert!(has_line_through(&board, Position { row: 3, column: 0 }, 4));
        assert!(!has_line_through(&board, Position { row: 3, column: 0 }, 5));
    }
}
