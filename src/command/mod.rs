//! Reversible commands and the bounded undo/redo stack.

mod create_game;
mod drop_chip;

pub use create_game::CreateGameCommand;
pub use drop_chip::DropChipCommand;

use crate::observer::NotificationContext;
use crate::state::GameData;
use std::collections::VecDeque;
use tracing::instrument;

/// A reversible action against the game data.
///
/// Each command captures everything needed to reverse its own effect.
/// Commands are expected to never fail once the model has checked the
/// operation's preconditions; a violation inside a command is a caller
/// bug, reported as an assertion-style contract failure rather than a
/// recoverable error.
pub trait Command: std::fmt::Debug {
    /// Applies the command and returns the notification context observers
    /// should receive for it.
    fn execute(&mut self, data: &mut GameData) -> NotificationContext;

    /// Reverts the effect of the most recent `execute`.
    fn undo(&mut self, data: &mut GameData);
}

/// Bounded-depth command history with undo/redo.
///
/// A cursor separates undoable commands (before it) from redoable ones
/// (at and after it, previously undone). Executing a new command discards
/// the redoable tail. When the history exceeds its fixed capacity the
/// oldest command is dropped without being undone: committed history
/// beyond the window is irrecoverable.
#[derive(Debug)]
pub struct CommandStack {
    commands: VecDeque<Box<dyn Command>>,
    cursor: usize,
    capacity: usize,
}

impl CommandStack {
    /// Creates an empty stack holding at most `capacity` commands.
    #[instrument]
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "a command stack needs room for at least one command");
        Self {
            commands: VecDeque::new(),
            cursor: 0,
            capacity: capacity.max(1),
        }
    }

    /// Runs `command` against `data`, records it at the cursor and
    /// returns its notification context.
    pub fn execute(
        &mut self,
        mut command: Box<dyn Command>,
        data: &mut GameData,
    ) -> NotificationContext {
        let context = command.execute(data);

        // A new action invalidates whatever was redoable.
        self.commands.truncate(self.cursor);
        self.commands.push_back(command);
        if self.commands.len() > self.capacity {
            self.commands.pop_front();
        }
        self.cursor = self.commands.len();

        context
    }

    /// Reverts the most recent command. No-op when nothing is undoable.
    pub fn undo(&mut self, data: &mut GameData) {
        if !self.can_undo() {
            return;
        }
        self.cursor -= 1;
        self.commands[self.cursor].undo(data);
    }

    /// Re-runs the most recently undone command and returns its
    /// notification context. No-op when nothing is redoable.
    pub fn redo(&mut self, data: &mut GameData) -> Option<NotificationContext> {
        if !self.can_redo() {
            return None;
        }
        let context = self.commands[self.cursor].execute(data);
        self.cursor += 1;
        Some(context)
    }

    /// True when at least one command can be undone.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// True when at least one undone command can be re-executed.
    pub fn can_redo(&self) -> bool {
        self.cursor < self.commands.len()
    }

    /// Empties the history and resets the cursor.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.cursor = 0;
    }

    /// True when no command is recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Maximum number of commands retained.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Bumps the in-a-row value by one; trivially reversible.
    #[derive(Debug)]
    struct BumpInARow;

    impl Command for BumpInARow {
        fn execute(&mut self, data: &mut GameData) -> NotificationContext {
            data.in_a_row += 1;
            NotificationContext::ChipDropped
        }

        fn undo(&mut self, data: &mut GameData) {
            data.in_a_row -= 1;
        }
    }

    #[test]
    fn test_new_stack_has_nothing_to_undo_or_redo() {
        let stack = CommandStack::new(200);
        assert!(stack.is_empty());
        assert!(!stack.can_undo());
        assert!(!stack.can_redo());
    }

    #[test]
    fn test_execute_then_undo_restores_data() {
        let mut stack = CommandStack::new(200);
        let mut data = GameData::default();
        let before = data.in_a_row();

        stack.execute(Box::new(BumpInARow), &mut data);
        assert_eq!(data.in_a_row(), before + 1);
        assert!(stack.can_undo());

        stack.undo(&mut data);
        assert_eq!(data.in_a_row(), before);
        assert!(!stack.can_undo());
        assert!(stack.can_redo());
    }

    #[test]
    fn test_redo_reapplies_undone_command() {
        let mut stack = CommandStack::new(200);
        let mut data = GameData::default();
        let before = data.in_a_row();

        stack.execute(Box::new(BumpInARow), &mut data);
        stack.undo(&mut data);

        let context = stack.redo(&mut data);
        assert_eq!(context, Some(NotificationContext::ChipDropped));
        assert_eq!(data.in_a_row(), before + 1);
        assert!(!stack.can_redo());
    }

    #[test]
    fn test_undo_at_start_and_redo_at_end_are_no_ops() {
        let mut stack = CommandStack::new(200);
        let mut data = GameData::default();
        let before = data.in_a_row();

        stack.undo(&mut data);
        assert_eq!(stack.redo(&mut data), None);
        assert_eq!(data.in_a_row(), before);
    }

    #[test]
    fn test_execute_discards_redoable_tail() {
        let mut stack = CommandStack::new(200);
        let mut data = GameData::default();

        stack.execute(Box::new(BumpInARow), &mut data);
        stack.execute(Box::new(BumpInARow), &mut data);
        stack.undo(&mut data);
        assert!(stack.can_redo());

        stack.execute(Box::new(BumpInARow), &mut data);
        assert!(!stack.can_redo());
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_capacity_overflow_evicts_oldest_without_undoing() {
        let mut stack = CommandStack::new(2);
        let mut data = GameData::default();
        let before = data.in_a_row();

        stack.execute(Box::new(BumpInARow), &mut data);
        stack.execute(Box::new(BumpInARow), &mut data);
        stack.execute(Box::new(BumpInARow), &mut data);

        // All three executions took effect; only two remain undoable.
        assert_eq!(data.in_a_row(), before + 3);
        assert_eq!(stack.len(), 2);

        stack.undo(&mut data);
        stack.undo(&mut data);
        assert!(!stack.can_undo());
        assert_eq!(data.in_a_row(), before + 1);
    }

    #[test]
    fn test_clear_empties_history() {
        let mut stack = CommandStack::new(200);
        let mut data = GameData::default();

        stack.execute(Box::new(BumpInARow), &mut data);
        stack.undo(&mut data);
        stack.clear();

        assert!(stack.is_empty());
        assert!(!stack.can_undo());
        assert!(!stack.can_redo());
    }
}
