//! History invariant: the taken record matches the chips on the board.

use super::Invariant;
use crate::board::{Chip, Position};
use crate::state::GameData;

/// Invariant: every recorded taken position is occupied on the board,
/// and the record accounts for every occupied cell. Without a board the
/// record must be empty.
pub struct HistoryConsistentInvariant;

impl Invariant<GameData> for HistoryConsistentInvariant {
    fn holds(data: &GameData) -> bool {
        let Some(board) = data.board() else {
            return data.taken_positions().is_empty();
        };

        let occupied = (0..board.rows())
            .flat_map(|row| (0..board.columns()).map(move |column| Position { row, column }))
            .filter(|&position| board.chip_at(position) != Chip::no_chip())
            .count();

        data.taken_positions().len() == occupied
            && data
                .taken_positions()
                .iter()
                .all(|&position| board.chip_at(position) != Chip::no_chip())
    }

    fn description() -> &'static str {
        "Taken positions correspond one to one with occupied cells"
    }
}
