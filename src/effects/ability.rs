//! Special abilities granted by wonder stages.

use serde::{Deserialize, Serialize};

use crate::boards::{RelativeBoardPosition, Table};
use crate::cards::Color;

/// A lasting ability recorded on a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialAbility {
    /// Play the last card of each age instead of discarding it.
    PlayLastCardOfAge,
    /// Build one card for free once per age.
    OneFreeCardPerAge,
    /// At the end of the game, copy the best guild of a neighbour.
    CopyGuild,
    /// Build one card from the discard pile for free. Used up when played.
    PlayDiscarded,
}

impl SpecialAbility {
    /// End-of-game points granted by the ability itself.
    #[must_use]
    pub fn compute_points(self, table: &Table, player: usize) -> i32 {
        match self {
            SpecialAbility::CopyGuild => best_neighbour_guild(table, player),
            SpecialAbility::PlayLastCardOfAge
            | SpecialAbility::OneFreeCardPerAge
            | SpecialAbility::PlayDiscarded => 0,
        }
    }
}

/// Points the best neighbouring guild would score if `player` owned it.
fn best_neighbour_guild(table: &Table, player: usize) -> i32 {
    [RelativeBoardPosition::Left, RelativeBoardPosition::Right]
        .into_iter()
        .flat_map(|position| table.neighbour(player, position).cards())
        .filter(|card| card.color == Color::Purple)
        .map(|guild| {
            guild
                .effects
                .iter()
                .map(|effect| effect.compute_points(table, player))
                .sum::<i32>()
        })
        .max()
        .unwrap_or(0)
}
