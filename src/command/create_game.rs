//! Command that starts a new game.

use super::Command;
use crate::board::{Board, Position};
use crate::new_game::NewGameInformation;
use crate::observer::NotificationContext;
use crate::player::PlayerRoster;
use crate::state::GameData;
use tracing::{instrument, warn};

/// Configuration in place before the command ran, restored on undo.
#[derive(Debug)]
struct PriorConfiguration {
    board: Option<Board>,
    roster: PlayerRoster,
    in_a_row: usize,
    taken_positions: Vec<Position>,
}

/// Replaces the board, roster and in-a-row value with the requested
/// configuration, snapshotting the previous state so the creation can be
/// undone back to whatever was in place before.
#[derive(Debug)]
pub struct CreateGameCommand {
    information: NewGameInformation,
    previous: Option<PriorConfiguration>,
}

impl CreateGameCommand {
    /// Creates the command from validated new-game information.
    #[instrument]
    pub fn new(information: NewGameInformation) -> Self {
        Self {
            information,
            previous: None,
        }
    }
}

impl Command for CreateGameCommand {
    fn execute(&mut self, data: &mut GameData) -> NotificationContext {
        self.previous = Some(PriorConfiguration {
            board: data.board.take(),
            roster: std::mem::take(&mut data.roster),
            in_a_row: data.in_a_row,
            taken_positions: std::mem::take(&mut data.taken_positions),
        });

        data.board = Some(Board::new(
            self.information.grid_height,
            self.information.grid_width,
        ));
        data.roster = PlayerRoster::new(self.information.players().to_vec());
        data.in_a_row = self.information.in_a_row;

        NotificationContext::CreateNewGame
    }

    fn undo(&mut self, data: &mut GameData) {
        let Some(previous) = self.previous.take() else {
            warn!("create-game command undone before it was executed");
            return;
        };

        data.board = previous.board;
        data.roster = previous.roster;
        data.in_a_row = previous.in_a_row;
        data.taken_positions = previous.taken_positions;
    }
}
