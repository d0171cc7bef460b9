//! Seating arrangement of all boards.
//!
//! Boards are stored in an `im::Vector` in seat order, so snapshotting a
//! running game is a cheap clone. Neighbours wrap around the table.

use serde::{Deserialize, Serialize};

use super::{Board, BoardSnapshot};
use crate::core::Settings;
use crate::resources::Provider;
use crate::rules::{GameError, GameResult};

/// A board position relative to a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelativeBoardPosition {
    Left,
    SelfBoard,
    Right,
}

impl RelativeBoardPosition {
    /// Absolute seat of this position relative to `seat`, for `count` seats.
    #[must_use]
    pub fn index_from(self, seat: usize, count: usize) -> usize {
        match self {
            RelativeBoardPosition::Left => (seat + count - 1) % count,
            RelativeBoardPosition::SelfBoard => seat,
            RelativeBoardPosition::Right => (seat + 1) % count,
        }
    }
}

impl From<Provider> for RelativeBoardPosition {
    fn from(provider: Provider) -> Self {
        match provider {
            Provider::LeftNeighbour => RelativeBoardPosition::Left,
            Provider::RightNeighbour => RelativeBoardPosition::Right,
        }
    }
}

/// All boards of a game, in seat order, plus the current age.
///
/// Indexing a seat that does not exist is a programming error and panics.
#[derive(Clone, Debug)]
pub struct Table {
    boards: im::Vector<Board>,
    age: u8,
}

impl Table {
    /// Create a table starting at age 1.
    #[must_use]
    pub fn new(boards: impl IntoIterator<Item = Board>) -> Self {
        let boards: im::Vector<Board> = boards.into_iter().collect();
        assert!(!boards.is_empty(), "A table needs at least one board");
        Self { boards, age: 1 }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    #[must_use]
    pub fn age(&self) -> u8 {
        self.age
    }

    pub fn advance_age(&mut self) {
        self.age += 1;
    }

    #[must_use]
    pub fn board(&self, seat: usize) -> &Board {
        &self.boards[seat]
    }

    pub fn board_mut(&mut self, seat: usize) -> &mut Board {
        &mut self.boards[seat]
    }

    pub fn boards(&self) -> impl Iterator<Item = &Board> {
        self.boards.iter()
    }

    #[must_use]
    pub fn neighbour_index(&self, seat: usize, position: RelativeBoardPosition) -> usize {
        position.index_from(seat, self.len())
    }

    #[must_use]
    pub fn neighbour(&self, seat: usize, position: RelativeBoardPosition) -> &Board {
        self.board(self.neighbour_index(seat, position))
    }

    /// Every board fights its right neighbour once for the current age.
    ///
    /// The side with more shields wins the age's victory points, the other
    /// takes a defeat token. Ties change nothing.
    pub fn resolve_military_conflicts(&mut self, settings: &Settings) -> GameResult<()> {
        let points = settings
            .victory_points(self.age)
            .ok_or(GameError::UnknownAge(self.age))?;

        if self.len() < 2 {
            return Ok(());
        }
        for seat in 0..self.len() {
            let opponent = self.neighbour_index(seat, RelativeBoardPosition::Right);
            let own = self.board(seat).military().shields();
            let theirs = self.board(opponent).military().shields();

            let (winner, loser) = match own.cmp(&theirs) {
                std::cmp::Ordering::Greater => (seat, opponent),
                std::cmp::Ordering::Less => (opponent, seat),
                std::cmp::Ordering::Equal => continue,
            };
            self.board_mut(winner).military_mut().victory(points);
            self.board_mut(loser).military_mut().defeat();
        }
        tracing::debug!(age = self.age, "military conflicts resolved");
        Ok(())
    }

    #[must_use]
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            age: self.age,
            boards: self.boards.iter().map(Board::snapshot).collect(),
        }
    }
}

/// Public view of the whole table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub age: u8,
    pub boards: Vec<BoardSnapshot>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::ResourceType;
    use crate::wonders::{Wonder, WonderSide};

    fn table(count: usize) -> Table {
        let settings = Settings::default();
        Table::new((0..count).map(|seat| {
            let wonder = Wonder::new(format!("W{}", seat), WonderSide::A, ResourceType::Wood, "w.png", Vec::new());
            Board::new(seat, wonder, &settings)
        }))
    }

    #[test]
    fn test_circular_neighbours() {
        let table = table(3);
        assert_eq!(table.neighbour_index(0, RelativeBoardPosition::Left), 2);
        assert_eq!(table.neighbour_index(0, RelativeBoardPosition::Right), 1);
        assert_eq!(table.neighbour_index(2, RelativeBoardPosition::Right), 0);
        assert_eq!(table.neighbour_index(1, RelativeBoardPosition::SelfBoard), 1);
        assert_eq!(table.neighbour(1, RelativeBoardPosition::Left).seat(), 0);
    }

    #[test]
    fn test_provider_positions() {
        assert_eq!(RelativeBoardPosition::from(Provider::LeftNeighbour), RelativeBoardPosition::Left);
        assert_eq!(RelativeBoardPosition::from(Provider::RightNeighbour), RelativeBoardPosition::Right);
    }

    #[test]
    fn test_military_conflicts() {
        let mut table = table(3);
        table.board_mut(0).military_mut().add_shields(2);
        table.board_mut(1).military_mut().add_shields(1);
        table.board_mut(2).military_mut().add_shields(1);

        table.resolve_military_conflicts(&Settings::default()).unwrap();

        // seat 0 beats both neighbours, 1 and 2 tie with each other
        assert_eq!(table.board(0).military().victory_points(), 2);
        assert_eq!(table.board(1).military().defeat_tokens(), 1);
        assert_eq!(table.board(2).military().defeat_tokens(), 1);
        assert_eq!(table.board(1).military().victory_points(), 0);
    }

    #[test]
    fn test_military_conflicts_unknown_age() {
        let mut table = table(3);
        for _ in 0..3 {
            table.advance_age();
        }
        assert_eq!(
            table.resolve_military_conflicts(&Settings::default()),
            Err(GameError::UnknownAge(4))
        );
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut table = table(3);
        let before = table.snapshot();
        table.board_mut(1).add_gold(4);

        assert_eq!(before.boards[1].gold, 3);
        assert_eq!(table.snapshot().boards[1].gold, 7);
    }
}
