//! Player identity and turn rotation.

use crate::board::{Chip, ChipColor};
use serde::{Deserialize, Serialize};

/// A participant in the game: a display name plus a chip color.
///
/// Equality is by (name, color); two players with the same name but
/// different colors are distinct. Immutable once a game is created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    name: String,
    color: ChipColor,
}

impl Player {
    /// Creates a new player.
    pub fn new(name: impl Into<String>, color: ChipColor) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    /// Returns the player's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's chip color.
    pub fn color(&self) -> ChipColor {
        self.color
    }

    /// Returns the chip this player drops.
    pub fn chip(&self) -> Chip {
        Chip::new(self.color)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Ordered players plus the cyclic active/next turn indices.
///
/// Whenever at least two players are present, both indices reference
/// valid entries and `next` stays one step ahead of `active`. A
/// successful drop rotates both forward by one position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRoster {
    players: Vec<Player>,
    active_index: usize,
    next_index: usize,
}

impl Default for PlayerRoster {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            active_index: 0,
            next_index: 1,
        }
    }
}

impl PlayerRoster {
    /// Creates a roster with the first player active.
    pub fn new(players: Vec<Player>) -> Self {
        Self {
            players,
            active_index: 0,
            next_index: 1,
        }
    }

    /// The players, in seating order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Index of the player whose turn it is.
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Index of the player whose turn comes next.
    pub fn next_index(&self) -> usize {
        self.next_index
    }

    /// The player whose turn it is, if the roster is populated.
    pub fn active(&self) -> Option<&Player> {
        self.players.get(self.active_index)
    }

    /// The player whose turn comes next, if the roster is populated.
    pub fn next(&self) -> Option<&Player> {
        self.players.get(self.next_index)
    }

    /// Advances both indices by one seat.
    pub(crate) fn rotate_forward(&mut self) {
        let count = self.players.len();
        if count < 2 {
            return;
        }
        self.active_index = (self.active_index + 1) % count;
        self.next_index = (self.next_index + 1) % count;
    }

    /// Steps both indices back by one seat. Undo support.
    pub(crate) fn rotate_back(&mut self) {
        let count = self.players.len();
        if count < 2 {
            return;
        }
        self.active_index = (self.active_index + count - 1) % count;
        self.next_index = (self.next_index + count - 1) % count;
    }

    /// Restores indices captured before a drop.
    pub(crate) fn restore_indices(&mut self, active_index: usize, next_index: usize) {
        self.active_index = active_index;
        self.next_index = next_index;
    }

    /// Puts the first player back in the active seat.
    pub(crate) fn reset_rotation(&mut self) {
        self.active_index = 0;
        self.next_index = 1;
    }
}
