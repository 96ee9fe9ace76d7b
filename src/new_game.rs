//! Parameters supplied by the caller to start a game.

use crate::player::Player;
use serde::{Deserialize, Serialize};

/// Everything needed to create a new game: grid dimensions, the in-a-row
/// value and the ordered list of players.
///
/// Transient; consumed by [`crate::Model::create_new_game`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGameInformation {
    /// Number of columns in the grid.
    pub grid_width: usize,
    /// Number of rows in the grid.
    pub grid_height: usize,
    /// Count of contiguous same-color chips required to win.
    pub in_a_row: usize,
    players: Vec<Player>,
}

impl NewGameInformation {
    /// Creates new-game information with an empty player list.
    pub fn new(grid_width: usize, grid_height: usize, in_a_row: usize) -> Self {
        Self {
            grid_width,
            grid_height,
            in_a_row,
            players: Vec::new(),
        }
    }

    /// Appends a player and returns the running player count.
    pub fn add_player(&mut self, player: Player) -> usize {
        self.players.push(player);
        self.players.len()
    }

    /// The players, in seating order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }
}
