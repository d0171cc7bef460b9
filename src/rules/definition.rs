//! The game definition catalog.
//!
//! Loaded once at startup and shared read-only through `Arc` by every lobby
//! and game. Nothing in the engine mutates it after construction.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{Game, GameError, GameResult};
use crate::boards::{Board, Table};
use crate::cards::{Card, CardId, CardRegistry};
use crate::core::{GameRng, Player, Settings, WonderSidePickMethod};
use crate::wonders::{WonderDefinition, WonderSide};

/// Player count bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalRules {
    pub min_players: usize,
    pub max_players: usize,
}

impl Default for GlobalRules {
    fn default() -> Self {
        Self {
            min_players: 3,
            max_players: 7,
        }
    }
}

/// Static game data: rules, wonders and cards.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GameDefinition {
    #[serde(default)]
    pub rules: GlobalRules,
    pub wonders: Vec<WonderDefinition>,
    #[serde(default)]
    pub cards: CardRegistry,
}

impl GameDefinition {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_rules(mut self, rules: GlobalRules) -> Self {
        self.rules = rules;
        self
    }

    #[must_use]
    pub fn with_wonder(mut self, wonder: WonderDefinition) -> Self {
        self.wonders.push(wonder);
        self
    }

    #[must_use]
    pub fn with_card(mut self, card: Card) -> Self {
        self.cards.register(card);
        self
    }

    #[must_use]
    pub fn min_players(&self) -> usize {
        self.rules.min_players
    }

    #[must_use]
    pub fn max_players(&self) -> usize {
        self.rules.max_players
    }

    pub fn card(&self, id: CardId) -> GameResult<&Arc<Card>> {
        self.cards.get(id).ok_or(GameError::UnknownCard(id))
    }

    #[must_use]
    pub fn card_by_name(&self, name: &str) -> Option<&Arc<Card>> {
        self.cards.find_by_name(name)
    }

    /// Seat `players` in the given order and deal each a wonder.
    ///
    /// Wonders and sides are drawn from the settings' seed, or from the game
    /// id when no seed is set, so the same inputs always deal the same table.
    pub fn create_game(
        self: &Arc<Self>,
        id: u64,
        players: Vec<Player>,
        settings: Settings,
    ) -> GameResult<Game> {
        if self.wonders.len() < players.len() {
            return Err(GameError::NotEnoughWonders {
                available: self.wonders.len(),
                required: players.len(),
            });
        }

        let mut rng = GameRng::new(settings.random_seed.unwrap_or(id)).for_context("wonders");
        let mut order: Vec<usize> = (0..self.wonders.len()).collect();
        rng.shuffle(&mut order);

        let shared_side = random_side(&mut rng);
        let boards: Vec<Board> = (0..players.len())
            .map(|seat| {
                let side = match settings.wonder_side_pick {
                    WonderSidePickMethod::AllA => WonderSide::A,
                    WonderSidePickMethod::AllB => WonderSide::B,
                    WonderSidePickMethod::EachRandom => random_side(&mut rng),
                    WonderSidePickMethod::SameRandomForAll => shared_side,
                };
                let wonder = self.wonders[order[seat]].create(side);
                Board::new(seat, wonder, &settings)
            })
            .collect();

        Ok(Game::new(id, players, settings, Table::new(boards), Arc::clone(self)))
    }
}

fn random_side(rng: &mut GameRng) -> WonderSide {
    if rng.gen_bool(0.5) {
        WonderSide::A
    } else {
        WonderSide::B
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::ResourceType;
    use crate::wonders::WonderSideDefinition;

    fn definition(wonders: usize) -> Arc<GameDefinition> {
        let mut definition = GameDefinition::new();
        for i in 0..wonders {
            let side = WonderSideDefinition::new(ResourceType::Wood, format!("w{}.png", i));
            definition = definition.with_wonder(WonderDefinition::new(format!("Wonder{}", i), side.clone(), side));
        }
        Arc::new(definition)
    }

    fn players(count: usize) -> Vec<Player> {
        (0..count)
            .map(|i| Player::new(format!("user{}", i), format!("User {}", i)))
            .collect()
    }

    #[test]
    fn test_default_rules() {
        let definition = GameDefinition::new();
        assert_eq!(definition.min_players(), 3);
        assert_eq!(definition.max_players(), 7);
    }

    #[test]
    fn test_create_game_is_deterministic() {
        let definition = definition(7);
        let settings = Settings::default().with_random_seed(11);

        let a = definition.create_game(1, players(4), settings.clone()).unwrap();
        let b = definition.create_game(2, players(4), settings).unwrap();

        let names = |game: &Game| -> Vec<String> {
            game.table().boards().map(|b| b.wonder().name().to_string()).collect()
        };
        assert_eq!(names(&a), names(&b));
    }

    #[test]
    fn test_create_game_assigns_distinct_wonders() {
        let game = definition(5).create_game(9, players(5), Settings::default()).unwrap();
        let mut names: Vec<&str> = game.table().boards().map(|b| b.wonder().name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 5);
        assert!(game.table().boards().all(|b| b.wonder().side() == WonderSide::A));
    }

    #[test]
    fn test_create_game_side_pick() {
        let settings = Settings::default().with_wonder_side_pick(WonderSidePickMethod::AllB);
        let game = definition(3).create_game(1, players(3), settings).unwrap();
        assert!(game.table().boards().all(|b| b.wonder().side() == WonderSide::B));

        let settings = Settings::default().with_wonder_side_pick(WonderSidePickMethod::SameRandomForAll);
        let game = definition(3).create_game(1, players(3), settings).unwrap();
        let first = game.table().board(0).wonder().side();
        assert!(game.table().boards().all(|b| b.wonder().side() == first));
    }

    #[test]
    fn test_create_game_not_enough_wonders() {
        let result = definition(2).create_game(1, players(3), Settings::default());
        assert!(matches!(
            result,
            Err(GameError::NotEnoughWonders {
                available: 2,
                required: 3
            })
        ));
    }
}
