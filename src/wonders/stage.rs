//! A single buildable level of a wonder.

use serde::{Deserialize, Serialize};

use super::{WonderError, WonderResult};
use crate::boards::Table;
use crate::cards::{CardBack, Requirements};
use crate::effects::Effect;
use crate::resources::ResourceTransactions;

/// One wonder level: a cost, effects applied once, and the card spent on it.
///
/// A stage goes from unbuilt to built exactly once. The card placed face
/// down under it is what marks it as built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WonderStage {
    pub requirements: Requirements,
    pub effects: Vec<Effect>,
    card_back: Option<CardBack>,
}

impl WonderStage {
    #[must_use]
    pub fn new(requirements: Requirements, effects: Vec<Effect>) -> Self {
        Self {
            requirements,
            effects,
            card_back: None,
        }
    }

    #[must_use]
    pub fn is_built(&self) -> bool {
        self.card_back.is_some()
    }

    /// Back of the card spent on this stage, once built.
    #[must_use]
    pub fn card_back(&self) -> Option<&CardBack> {
        self.card_back.as_ref()
    }

    /// Whether `player` could pay for this stage with these purchases.
    #[must_use]
    pub fn is_buildable(
        &self,
        table: &Table,
        player: usize,
        transactions: &ResourceTransactions,
    ) -> bool {
        !self.is_built() && self.requirements.is_affordable_by(table, player, transactions)
    }

    /// Mark the stage as built with `card_back`. Only succeeds once.
    pub fn build(&mut self, card_back: CardBack) -> WonderResult<()> {
        if self.is_built() {
            return Err(WonderError::StageAlreadyBuilt);
        }
        self.card_back = Some(card_back);
        Ok(())
    }

    /// Apply every effect of the stage for `player`, in declaration order.
    pub fn activate(&self, table: &mut Table, player: usize) {
        for effect in &self.effects {
            effect.apply(table, player);
        }
    }

    /// End-of-game points of the stage's effects.
    #[must_use]
    pub fn compute_points(&self, table: &Table, player: usize) -> i32 {
        self.effects
            .iter()
            .map(|effect| effect.compute_points(table, player))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_once() {
        let mut stage = WonderStage::new(Requirements::free(), vec![Effect::RawPointsIncrease(3)]);
        assert!(!stage.is_built());

        assert!(stage.build(CardBack::new("age1")).is_ok());
        assert!(stage.is_built());
        assert_eq!(stage.card_back(), Some(&CardBack::new("age1")));

        assert_eq!(stage.build(CardBack::new("age2")), Err(WonderError::StageAlreadyBuilt));
        assert_eq!(stage.card_back(), Some(&CardBack::new("age1")));
    }
}
