//! Connect-K game-state engine.
//!
//! A generalized Connect-Four model: configurable grid size, in-a-row
//! win length and 2 to 10 players. Presentation layers call the action
//! surface, observe notifications and read state back through queries;
//! this crate owns the rules, the reversible command history and the
//! win/tie resolution, nothing else.
//!
//! # Architecture
//!
//! - [`Board`], [`Player`], [`Chip`]: value types for the grid and the
//!   participants
//! - [`Command`] / [`CommandStack`]: reversible actions with a bounded
//!   undo/redo history
//! - [`ResolutionStrategy`]: win/tie scanning algorithms
//! - [`Model`]: orchestrator enforcing preconditions, executing
//!   commands and fanning out notifications
//!
//! # Example
//!
//! ```
//! use connect_k::{Chip, ChipColor, CommandStack, Model, NewGameInformation, Player};
//!
//! let mut model = Model::new(CommandStack::new(200));
//!
//! let mut information = NewGameInformation::new(7, 6, 4);
//! information.add_player(Player::new("John Doe", ChipColor::Red));
//! information.add_player(Player::new("Mary Foo", ChipColor::Blue));
//! model.create_new_game(information);
//!
//! model.drop_chip(Chip::new(ChipColor::Red), 0);
//! assert_eq!(model.active_player().name(), "Mary Foo");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod command;
mod invariants;
mod model;
mod new_game;
mod observer;
mod player;
mod rules;
mod state;

pub use board::{Board, BoardError, Chip, ChipColor, Position};
pub use command::{Command, CommandStack, CreateGameCommand, DropChipCommand};
pub use invariants::{
    EngineInvariants, HistoryConsistentInvariant, Invariant, InvariantSet, InvariantViolation,
    TurnRotationInvariant,
};
pub use model::Model;
pub use new_game::NewGameInformation;
pub use observer::{NotificationContext, Subject, Subscription};
pub use player::{Player, PlayerRoster};
pub use rules::{GameResolution, ResolutionStrategy, TieResolution, WinResolution, make_strategy};
pub use state::GameData;
