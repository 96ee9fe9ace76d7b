//! Game model orchestrator: actions, queries and notifications.

use crate::board::{Board, Chip, ChipColor, Position};
use crate::command::{CommandStack, CreateGameCommand, DropChipCommand};
use crate::invariants::{EngineInvariants, InvariantSet};
use crate::new_game::NewGameInformation;
use crate::observer::{NotificationContext, Subject, Subscription};
use crate::player::{Player, PlayerRoster};
use crate::rules::{self, GameResolution, ResolutionStrategy};
use crate::state::{DEFAULT_IN_A_ROW, GameData};
use tracing::{debug, instrument, warn};

const NAME: &str = "Connect K";

const GRID_MIN_HEIGHT: usize = 6;
const GRID_MAX_HEIGHT: usize = 64;
const GRID_MIN_WIDTH: usize = 7;
const GRID_MAX_WIDTH: usize = 64;

const IN_A_ROW_MIN: usize = 3;
const IN_A_ROW_MAX: usize = 8;

const NUMBER_OF_PLAYERS_MIN: usize = 2;
const NUMBER_OF_PLAYERS_MAX: usize = 10;

fn placeholder_active_player() -> Player {
    Player::new("Woops (active)!", ChipColor::Transparent)
}

fn placeholder_next_player() -> Player {
    Player::new("Woops! (next)", ChipColor::Transparent)
}

/// Logs a failed precondition and tells the caller whether to proceed.
///
/// Contract violations indicate a caller bug: the operation aborts
/// gracefully in production builds instead of crashing.
fn precondition(condition: bool, message: &str) -> bool {
    if !condition {
        warn!("precondition violated: {message}");
    }
    condition
}

/// The game-state engine.
///
/// Owns the board, the player roster, the taken-position record, the
/// command history and both resolution strategies. External collaborators
/// call the action surface, observe notifications through
/// [`Model::attach`] and read state back through the query surface.
///
/// Single-threaded and synchronous: every operation, including observer
/// fan-out, runs to completion before returning.
#[derive(Debug)]
pub struct Model {
    command_stack: CommandStack,
    data: GameData,
    win_resolution: Option<Box<dyn ResolutionStrategy>>,
    tie_resolution: Option<Box<dyn ResolutionStrategy>>,
    subject: Subject,
}

impl Model {
    /// Creates a model with no game in play, backed by `command_stack`.
    #[instrument]
    pub fn new(command_stack: CommandStack) -> Self {
        debug_assert!(command_stack.is_empty(), "command stack must start empty");

        Self {
            command_stack,
            data: GameData::default(),
            win_resolution: None,
            tie_resolution: None,
            subject: Subject::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Identity and limits
    // ─────────────────────────────────────────────────────────────

    /// The engine's display name.
    pub fn name(&self) -> &'static str {
        NAME
    }

    /// The engine's version string, e.g. `v0.1.0`.
    pub fn version(&self) -> String {
        format!("v{}", env!("CARGO_PKG_VERSION"))
    }

    /// Smallest accepted grid height.
    pub fn minimum_grid_height(&self) -> usize {
        GRID_MIN_HEIGHT
    }

    /// Largest accepted grid height.
    pub fn maximum_grid_height(&self) -> usize {
        GRID_MAX_HEIGHT
    }

    /// Smallest accepted grid width.
    pub fn minimum_grid_width(&self) -> usize {
        GRID_MIN_WIDTH
    }

    /// Largest accepted grid width.
    pub fn maximum_grid_width(&self) -> usize {
        GRID_MAX_WIDTH
    }

    /// Smallest accepted in-a-row value.
    pub fn minimum_in_a_row(&self) -> usize {
        IN_A_ROW_MIN
    }

    /// Largest accepted in-a-row value.
    pub fn maximum_in_a_row(&self) -> usize {
        IN_A_ROW_MAX
    }

    /// Smallest accepted player count.
    pub fn minimum_number_of_players(&self) -> usize {
        NUMBER_OF_PLAYERS_MIN
    }

    /// Largest accepted player count.
    pub fn maximum_number_of_players(&self) -> usize {
        NUMBER_OF_PLAYERS_MAX
    }

    // ─────────────────────────────────────────────────────────────
    //  Observers
    // ─────────────────────────────────────────────────────────────

    /// Registers an observer for every subsequent notification.
    pub fn attach(
        &mut self,
        observer: impl FnMut(NotificationContext) + 'static,
    ) -> Subscription {
        self.subject.attach(observer)
    }

    /// Removes a previously attached observer.
    pub fn detach(&mut self, subscription: Subscription) {
        self.subject.detach(subscription);
    }

    // ─────────────────────────────────────────────────────────────
    //  Actions
    // ─────────────────────────────────────────────────────────────

    /// Starts a new game from `information`.
    ///
    /// Preconditions: positive grid dimensions, an in-a-row value above
    /// one, at least two players, and no empty player name. Violations
    /// are logged and the call returns without mutating state.
    ///
    /// Notifies [`NotificationContext::CreateNewGame`] on success.
    #[instrument(skip(self))]
    pub fn create_new_game(&mut self, information: NewGameInformation) {
        if !precondition(information.grid_width > 0, "grid width must be positive") {
            return;
        }
        if !precondition(information.grid_height > 0, "grid height must be positive") {
            return;
        }
        if !precondition(information.in_a_row > 1, "in-a-row value must be above one") {
            return;
        }
        if !precondition(
            information.players().len() >= NUMBER_OF_PLAYERS_MIN,
            "at least two players are required",
        ) {
            return;
        }
        if !precondition(
            information.players().iter().all(|p| !p.name().is_empty()),
            "player names must not be empty",
        ) {
            return;
        }

        let command = Box::new(CreateGameCommand::new(information));
        let context = self.command_stack.execute(command, &mut self.data);

        self.rebuild_resolution_strategies();
        self.subject.notify(context);

        if let Some(board) = self.data.board() {
            debug!(
                in_a_row = self.data.in_a_row(),
                grid_width = board.columns(),
                grid_height = board.rows(),
                players = self.data.roster().players().len(),
                "New game created"
            );
        }

        self.check_invariants();
    }

    /// Drops `chip` into `column` on behalf of the active player.
    ///
    /// A chip whose color does not match the active player's, or a drop
    /// into a full column, is rejected: logged at debug level, no state
    /// change, no notification. Otherwise the drop executes through the
    /// command stack, [`NotificationContext::ChipDropped`] fires, and the
    /// win/tie checks may follow with [`NotificationContext::GameWon`]
    /// or [`NotificationContext::GameTied`].
    #[instrument(skip(self))]
    pub fn drop_chip(&mut self, chip: Chip, column: usize) {
        let Some(width) = self.data.board().map(Board::columns) else {
            warn!("precondition violated: no game in progress");
            return;
        };
        if !precondition(column < width, "column out of range") {
            return;
        }

        // Index snapshot taken up front: a win or tie must leave the
        // winner in the active seat, so the rotation gets reverted.
        let active_index_before = self.data.roster().active_index();
        let next_index_before = self.data.roster().next_index();

        let Some(active_player) = self.data.roster().active().cloned() else {
            warn!("precondition violated: no active player configured");
            return;
        };

        if active_player.chip() != chip {
            debug!(
                active_color = %active_player.color(),
                dropped_color = %chip.color(),
                "Dropped chip does not belong to the active player; drop ignored"
            );
            return;
        }

        if self.data.board().is_some_and(|board| board.is_column_full(column)) {
            debug!(column, "Chip drop failed for {active_player}");
            return;
        }

        let command = Box::new(DropChipCommand::new(chip, column));
        let context = self.command_stack.execute(command, &mut self.data);
        self.subject.notify(context);

        if let Some(position) = self.data.last_taken_position() {
            debug!("{active_player}'s chip dropped at {position}");
        }

        if self.is_won() {
            // The next player never gets to play; keep the winner active.
            self.data
                .roster
                .restore_indices(active_index_before, next_index_before);

            self.subject.notify(NotificationContext::GameWon);
            debug!("Game won by {}", self.active_player());

            self.check_invariants();
            return;
        }

        if self.is_tie() {
            self.data
                .roster
                .restore_indices(active_index_before, next_index_before);

            self.subject.notify(NotificationContext::GameTied);
            debug!("Game tied");

            self.check_invariants();
            return;
        }

        self.check_invariants();
    }

    /// Ends the current game and returns the model to its no-game state:
    /// empty command history, no board, default roster and in-a-row
    /// value, empty taken record.
    ///
    /// Notifies [`NotificationContext::GameEnded`].
    #[instrument(skip(self))]
    pub fn end_current_game(&mut self) {
        self.command_stack.clear();

        if !precondition(self.data.board().is_some(), "no game in progress") {
            return;
        }

        self.data.board = None;
        self.data.roster = PlayerRoster::default();
        self.data.in_a_row = DEFAULT_IN_A_ROW;
        self.data.taken_positions.clear();

        // The strategies were bound to the destroyed game.
        self.win_resolution = None;
        self.tie_resolution = None;

        self.subject.notify(NotificationContext::GameEnded);
        debug!("Game ended");

        self.check_invariants();
    }

    /// Restarts the current game: same players and dimensions, fresh
    /// board, empty history, first player active again.
    ///
    /// Notifies [`NotificationContext::GameReinitialized`].
    #[instrument(skip(self))]
    pub fn reinitialize_current_game(&mut self) {
        self.command_stack.clear();

        let Some(board) = self.data.board() else {
            warn!("precondition violated: no game in progress");
            return;
        };
        let rows = board.rows();
        let columns = board.columns();

        self.data.board = Some(Board::new(rows, columns));
        self.data.taken_positions.clear();
        self.data.roster.reset_rotation();

        // The old strategies were bound to the replaced board.
        self.rebuild_resolution_strategies();

        self.subject.notify(NotificationContext::GameReinitialized);
        debug!("Game reinitialized");

        self.check_invariants();
    }

    /// Reverts the most recent command, if any.
    #[instrument(skip(self))]
    pub fn undo(&mut self) {
        self.command_stack.undo(&mut self.data);
        debug!("Last action undone");

        self.check_invariants();
    }

    /// Re-applies the most recently undone command, if any, re-emitting
    /// its notification.
    #[instrument(skip(self))]
    pub fn redo(&mut self) {
        if let Some(context) = self.command_stack.redo(&mut self.data) {
            self.subject.notify(context);
        }
        debug!("Last action redone");

        self.check_invariants();
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// Rows of the current grid, or 0 when no game is in play.
    pub fn current_grid_height(&self) -> usize {
        self.data.board().map_or(0, Board::rows)
    }

    /// Columns of the current grid, or 0 when no game is in play.
    pub fn current_grid_width(&self) -> usize {
        self.data.board().map_or(0, Board::columns)
    }

    /// The in-a-row value of the current game.
    pub fn current_in_a_row(&self) -> usize {
        self.data.in_a_row()
    }

    /// The player whose turn it is.
    ///
    /// Returns a placeholder player when fewer than two players are
    /// configured, so display code never has to handle absence.
    pub fn active_player(&self) -> Player {
        if self.data.roster().players().len() < NUMBER_OF_PLAYERS_MIN {
            warn!("active player queried with no game in progress");
            return placeholder_active_player();
        }

        self.data
            .roster()
            .active()
            .cloned()
            .unwrap_or_else(placeholder_active_player)
    }

    /// The player whose turn comes next. Placeholder below two players.
    pub fn next_player(&self) -> Player {
        if self.data.roster().players().len() < NUMBER_OF_PLAYERS_MIN {
            warn!("next player queried with no game in progress");
            return placeholder_next_player();
        }

        self.data
            .roster()
            .next()
            .cloned()
            .unwrap_or_else(placeholder_next_player)
    }

    /// The chip at (`row`, `column`), or the transparent sentinel for
    /// empty and out-of-range cells. Row 0 is the bottom row.
    pub fn chip_at(&self, row: usize, column: usize) -> Chip {
        if row >= self.current_grid_height() || column >= self.current_grid_width() {
            return Chip::no_chip();
        }

        self.data
            .board()
            .map_or(Chip::no_chip(), |board| board.chip_at(Position { row, column }))
    }

    /// True when the most recent drop completed a winning line.
    /// False when no game is in play.
    pub fn is_won(&self) -> bool {
        let Some(strategy) = self.win_resolution.as_ref() else {
            warn!("win status queried with no game in progress");
            return false;
        };

        strategy.is_resolved(&self.data)
    }

    /// True when the game can no longer be won by anyone.
    ///
    /// # Panics
    ///
    /// Querying tie status before any game exists is a caller logic
    /// error and panics.
    pub fn is_tie(&self) -> bool {
        let (Some(_), Some(strategy)) = (self.data.board(), self.tie_resolution.as_ref()) else {
            panic!("tie status queried before any game was created");
        };

        strategy.is_resolved(&self.data)
    }

    /// True when at least one command can be undone.
    pub fn can_undo(&self) -> bool {
        self.command_stack.can_undo()
    }

    /// True when at least one undone command can be re-executed.
    pub fn can_redo(&self) -> bool {
        self.command_stack.can_redo()
    }

    // ─────────────────────────────────────────────────────────────
    //  Internals
    // ─────────────────────────────────────────────────────────────

    /// Binds fresh win/tie strategies to the current game configuration.
    fn rebuild_resolution_strategies(&mut self) {
        let in_a_row = self.data.in_a_row();
        self.win_resolution = Some(rules::make_strategy(GameResolution::Win, in_a_row));
        self.tie_resolution = Some(rules::make_strategy(GameResolution::Tie, in_a_row));
    }

    /// Rechecks the engine invariants after a mutating operation.
    /// Violations halt debug builds and are logged in release builds.
    fn check_invariants(&self) {
        if let Err(violations) = EngineInvariants::check_all(&self.data) {
            for violation in &violations {
                warn!(violation = %violation.description, "engine invariant violated");
            }
            debug_assert!(false, "engine invariants violated");
        }
    }
}
