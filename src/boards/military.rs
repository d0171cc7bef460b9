//! Military strength and conflict results.

use serde::{Deserialize, Serialize};

/// Shields and conflict tokens of one board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Military {
    shields: u32,
    victory_points: i32,
    defeat_tokens: u32,
    lost_points_per_defeat: i32,
}

impl Military {
    #[must_use]
    pub fn new(lost_points_per_defeat: i32) -> Self {
        Self {
            shields: 0,
            victory_points: 0,
            defeat_tokens: 0,
            lost_points_per_defeat,
        }
    }

    #[must_use]
    pub fn shields(&self) -> u32 {
        self.shields
    }

    #[must_use]
    pub fn victory_points(&self) -> i32 {
        self.victory_points
    }

    #[must_use]
    pub fn defeat_tokens(&self) -> u32 {
        self.defeat_tokens
    }

    pub fn add_shields(&mut self, count: u32) {
        self.shields += count;
    }

    /// Record a won conflict worth `points`.
    pub fn victory(&mut self, points: i32) {
        self.victory_points += points;
    }

    /// Record a lost conflict.
    pub fn defeat(&mut self) {
        self.defeat_tokens += 1;
    }

    /// Victory points minus the penalty of every defeat token.
    #[must_use]
    pub fn total_points(&self) -> i32 {
        self.victory_points - self.lost_points_per_defeat * self.defeat_tokens as i32
    }
}
