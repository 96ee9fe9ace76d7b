//! Tie detection: the full-board rule.

use super::ResolutionStrategy;
use crate::state::GameData;

/// Declares a tie exactly when every cell of the board is taken.
///
/// A reachability-based detector could resolve ties earlier, as soon as
/// no player can still complete a line. The full-board rule is the one
/// in effect; switching requires test coverage of the reachability scan
/// on non-trivial player counts.
#[derive(Debug, Clone, Default)]
pub struct TieResolution;

impl TieResolution {
    /// Creates the tie detector.
    pub fn new() -> Self {
        Self
    }
}

impl ResolutionStrategy for TieResolution {
    fn is_resolved(&self, data: &GameData) -> bool {
        let Some(board) = data.board() else {
            return false;
        };
        data.taken_positions().len() >= board.position_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Chip, ChipColor};

    #[test]
    fn test_no_board_is_not_a_tie() {
        let data = GameData::default();
        assert!(!TieResolution::new().is_resolved(&data));
    }

    #[test]
    fn test_partially_filled_board_is_not_a_tie() {
        let mut data = GameData::default();
        let mut board = Board::new(2, 2);
        data.taken_positions
            .push(board.drop_chip(Chip::new(ChipColor::Red), 0).unwrap());
        data.board = Some(board);

        assert!(!TieResolution::new().is_resolved(&data));
    }

    #[test]
    fn test_full_board_is_a_tie() {
        let mut data = GameData::default();
        let mut board = Board::new(2, 2);
        let colors = [ChipColor::Red, ChipColor::Blue, ChipColor::Blue, ChipColor::Red];
        for (index, color) in colors.into_iter().enumerate() {
            data.taken_positions
                .push(board.drop_chip(Chip::new(color), index % 2).unwrap());
        }
        data.board = Some(board);

        assert!(TieResolution::new().is_resolved(&data));
    }
}
