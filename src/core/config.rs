//! Game settings.
//!
//! Lobby owners customise a game through `Settings` before starting it.
//! Settings are replaced wholesale and only validated when the game starts,
//! so a lobby may hold a half-edited configuration in the meantime.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of ages in a game. Ages are numbered from 1.
pub const LAST_AGE: u8 = 3;

/// How wonder sides are picked when a game starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WonderSidePickMethod {
    /// Every player plays side A.
    #[default]
    AllA,
    /// Every player plays side B.
    AllB,
    /// Each player gets a random side.
    EachRandom,
    /// One random side, shared by every player.
    SameRandomForAll,
}

/// Settings validation failures.
#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("no victory points configured for age {0}")]
    MissingVictoryPoints(u8),
    #[error("trade cost must be at least 1")]
    ZeroTradeCost,
}

/// Customisable game settings.
///
/// ## Example
///
/// ```
/// use wonders_engine::core::Settings;
///
/// let settings = Settings::default()
///     .with_random_seed(42)
///     .with_initial_gold(5);
///
/// assert_eq!(settings.initial_gold, 5);
/// assert_eq!(settings.victory_points(3), Some(5));
/// assert!(settings.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Seed for wonder assignment. `None` derives one from the game id.
    pub random_seed: Option<u64>,

    /// Gold each board starts with.
    pub initial_gold: u32,

    /// Gold received for discarding a card.
    pub discarded_card_gold: u32,

    /// Price of one resource unit bought from a neighbour, before discounts.
    pub default_trade_cost: u32,

    /// Points lost per military defeat token.
    pub lost_points_per_defeat: i32,

    /// Points won per military victory, by age.
    pub won_points_per_victory_per_age: FxHashMap<u8, i32>,

    pub wonder_side_pick: WonderSidePickMethod,
}

impl Settings {
    #[must_use]
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_initial_gold(mut self, gold: u32) -> Self {
        self.initial_gold = gold;
        self
    }

    #[must_use]
    pub fn with_discarded_card_gold(mut self, gold: u32) -> Self {
        self.discarded_card_gold = gold;
        self
    }

    #[must_use]
    pub fn with_default_trade_cost(mut self, cost: u32) -> Self {
        self.default_trade_cost = cost;
        self
    }

    #[must_use]
    pub fn with_wonder_side_pick(mut self, method: WonderSidePickMethod) -> Self {
        self.wonder_side_pick = method;
        self
    }

    /// Points for a military victory during `age`.
    #[must_use]
    pub fn victory_points(&self, age: u8) -> Option<i32> {
        self.won_points_per_victory_per_age.get(&age).copied()
    }

    /// Check the settings can run a full game.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.default_trade_cost == 0 {
            return Err(SettingsError::ZeroTradeCost);
        }
        for age in 1..=LAST_AGE {
            if self.victory_points(age).is_none() {
                return Err(SettingsError::MissingVictoryPoints(age));
            }
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        let mut won_points = FxHashMap::default();
        won_points.insert(1, 1);
        won_points.insert(2, 3);
        won_points.insert(3, 5);

        Self {
            random_seed: None,
            initial_gold: 3,
            discarded_card_gold: 3,
            default_trade_cost: 2,
            lost_points_per_defeat: 1,
            won_points_per_victory_per_age: won_points,
            wonder_side_pick: WonderSidePickMethod::default(),
        }
    }
}
