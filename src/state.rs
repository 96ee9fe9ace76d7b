//! Model-owned mutable game data, the target of every command.

use crate::board::{Board, Position};
use crate::player::PlayerRoster;
use serde::{Deserialize, Serialize};

/// In-a-row value restored when a game ends.
pub(crate) const DEFAULT_IN_A_ROW: usize = 4;

/// The mutable core of the engine: the board (while a game is in play),
/// the player roster, the in-a-row value and the chronological record of
/// taken positions.
///
/// Owned exclusively by the [`crate::Model`]; commands receive a mutable
/// borrow for the duration of one execute or undo call and hold no
/// references in between.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameData {
    pub(crate) board: Option<Board>,
    pub(crate) roster: PlayerRoster,
    pub(crate) in_a_row: usize,
    pub(crate) taken_positions: Vec<Position>,
}

impl Default for GameData {
    fn default() -> Self {
        Self {
            board: None,
            roster: PlayerRoster::default(),
            in_a_row: DEFAULT_IN_A_ROW,
            taken_positions: Vec::new(),
        }
    }
}

impl GameData {
    /// The board, while a game is in play.
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// The player roster.
    pub fn roster(&self) -> &PlayerRoster {
        &self.roster
    }

    /// The in-a-row value of the current game.
    pub fn in_a_row(&self) -> usize {
        self.in_a_row
    }

    /// Occupied positions in chronological drop order.
    pub fn taken_positions(&self) -> &[Position] {
        &self.taken_positions
    }

    /// The most recently taken position, if any chip has been dropped.
    pub fn last_taken_position(&self) -> Option<Position> {
        self.taken_positions.last().copied()
    }
}
