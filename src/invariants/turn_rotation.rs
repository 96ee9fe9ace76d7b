//! Turn rotation invariant: the active and next indices stay adjacent.

use super::Invariant;
use crate::state::GameData;

/// Invariant: with at least two players, both turn indices reference
/// valid roster entries and `next` is exactly one seat after `active`.
///
/// Holds trivially below two players, where rotation is meaningless.
pub struct TurnRotationInvariant;

impl Invariant<GameData> for TurnRotationInvariant {
    fn holds(data: &GameData) -> bool {
        let roster = data.roster();
        let count = roster.players().len();

        if count < 2 {
            return true;
        }

        roster.active_index() < count
            && roster.next_index() < count
            && roster.next_index() == (roster.active_index() + 1) % count
    }

    fn description() -> &'static str {
        "Active and next player indices are in range and one seat apart"
    }
}
