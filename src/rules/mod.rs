//! Game-ending resolution strategies.

pub mod tie;
pub mod win;

pub use tie::TieResolution;
pub use win::WinResolution;

use crate::state::GameData;
use tracing::instrument;

/// Which game-ending condition a strategy detects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResolution {
    /// The active player completed a winning line.
    Win,
    /// No winner and no further play possible.
    Tie,
}

/// A board-scanning algorithm deciding whether the game has ended.
///
/// Strategies are stateless beyond the configuration captured at
/// construction; they read the live game data passed to each call, so a
/// replaced board never leaves a strategy pointing at stale state. The
/// model still rebuilds them whenever a game is created or
/// reinitialized, binding the in-a-row value of the new game.
pub trait ResolutionStrategy: std::fmt::Debug {
    /// True when this strategy's game-ending condition holds.
    fn is_resolved(&self, data: &GameData) -> bool;
}

/// Builds the strategy for the requested resolution.
#[instrument]
pub fn make_strategy(resolution: GameResolution, in_a_row: usize) -> Box<dyn ResolutionStrategy> {
    match resolution {
        GameResolution::Win => Box::new(WinResolution::new(in_a_row)),
        GameResolution::Tie => Box::new(TieResolution::new()),
    }
}
