//! Command that drops a chip into a column.

use super::Command;
use crate::board::{Chip, Position};
use crate::observer::NotificationContext;
use crate::state::GameData;
use tracing::{instrument, warn};

/// Drops a chip into a column, appends the landing position to the taken
/// record and rotates the turn indices forward. The landing position is
/// kept so the drop can be reversed cell for cell.
#[derive(Debug)]
pub struct DropChipCommand {
    chip: Chip,
    column: usize,
    dropped: Option<Position>,
}

impl DropChipCommand {
    /// Creates the command for a drop the model has already validated.
    #[instrument]
    pub fn new(chip: Chip, column: usize) -> Self {
        Self {
            chip,
            column,
            dropped: None,
        }
    }
}

impl Command for DropChipCommand {
    fn execute(&mut self, data: &mut GameData) -> NotificationContext {
        match data.board.as_mut().map(|board| board.drop_chip(self.chip, self.column)) {
            Some(Ok(position)) => {
                data.taken_positions.push(position);
                data.roster.rotate_forward();
                self.dropped = Some(position);
            }
            Some(Err(error)) => {
                // The model checks column range and fullness first.
                warn!(%error, "chip drop rejected by the board");
                debug_assert!(false, "unvalidated chip drop: {error}");
            }
            None => {
                warn!("chip drop with no board in play");
                debug_assert!(false, "chip drop with no board in play");
            }
        }

        NotificationContext::ChipDropped
    }

    fn undo(&mut self, data: &mut GameData) {
        let Some(position) = self.dropped.take() else {
            warn!("drop-chip command undone before it was executed");
            return;
        };

        if let Some(board) = data.board.as_mut() {
            board.remove_chip(position);
        }
        let recorded = data.taken_positions.pop();
        debug_assert_eq!(recorded, Some(position));
        data.roster.rotate_back();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, ChipColor};
    use crate::player::{Player, PlayerRoster};

    fn game_in_play() -> GameData {
        let mut data = GameData::default();
        data.board = Some(Board::new(6, 7));
        data.roster = PlayerRoster::new(vec![
            Player::new("John Doe", ChipColor::Red),
            Player::new("Mary Foo", ChipColor::Blue),
        ]);
        data
    }

    #[test]
    fn test_execute_places_chip_and_rotates_turn() {
        let mut data = game_in_play();
        let mut command = DropChipCommand::new(Chip::new(ChipColor::Red), 3);

        let context = command.execute(&mut data);

        assert_eq!(context, NotificationContext::ChipDropped);
        assert_eq!(data.last_taken_position(), Some(Position { row: 0, column: 3 }));
        assert_eq!(data.roster().active_index(), 1);
        assert_eq!(
            data.board().unwrap().chip_at(Position { row: 0, column: 3 }),
            Chip::new(ChipColor::Red)
        );
    }

    #[test]
    fn test_undo_reverses_the_drop() {
        let mut data = game_in_play();
        let mut command = DropChipCommand::new(Chip::new(ChipColor::Red), 3);

        command.execute(&mut data);
        command.undo(&mut data);

        assert!(data.taken_positions().is_empty());
        assert_eq!(data.roster().active_index(), 0);
        assert_eq!(
            data.board().unwrap().chip_at(Position { row: 0, column: 3 }),
            Chip::no_chip()
        );
    }

    #[test]
    fn test_execute_undo_execute_lands_on_same_cell() {
        let mut data = game_in_play();
        let mut command = DropChipCommand::new(Chip::new(ChipColor::Red), 0);

        command.execute(&mut data);
        command.undo(&mut data);
        command.execute(&mut data);

        assert_eq!(data.taken_positions(), &[Position { row: 0, column: 0 }]);
        assert_eq!(data.roster().active_index(), 1);
    }
}
