//! A player's wonder and its stages.

use serde::{Deserialize, Serialize};

use super::{WonderError, WonderResult, WonderSide, WonderStage};
use crate::boards::Table;
use crate::cards::CardBack;
use crate::resources::{ResourceTransactions, ResourceType};

/// The wonder on a board. Stages are built strictly in order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wonder {
    name: String,
    side: WonderSide,
    initial_resource: ResourceType,
    image: String,
    stages: Vec<WonderStage>,
}

impl Wonder {
    pub fn new(
        name: impl Into<String>,
        side: WonderSide,
        initial_resource: ResourceType,
        image: impl Into<String>,
        stages: Vec<WonderStage>,
    ) -> Self {
        Self {
            name: name.into(),
            side,
            initial_resource,
            image: image.into(),
            stages,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn side(&self) -> WonderSide {
        self.side
    }

    /// Resource the board produces from the start.
    #[must_use]
    pub fn initial_resource(&self) -> ResourceType {
        self.initial_resource
    }

    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    #[must_use]
    pub fn stages(&self) -> &[WonderStage] {
        &self.stages
    }

    #[must_use]
    pub fn nb_built_stages(&self) -> usize {
        self.stages.iter().filter(|stage| stage.is_built()).count()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.nb_built_stages() == self.stages.len()
    }

    /// The first unbuilt stage.
    pub fn next_stage(&self) -> WonderResult<&WonderStage> {
        self.stages
            .get(self.nb_built_stages())
            .ok_or(WonderError::MaxLevelReached)
    }

    /// The most recently built stage.
    pub fn last_built_stage(&self) -> WonderResult<&WonderStage> {
        match self.nb_built_stages() {
            0 => Err(WonderError::NoStageBuilt),
            built => Ok(&self.stages[built - 1]),
        }
    }

    #[must_use]
    pub fn is_next_stage_buildable(
        &self,
        table: &Table,
        player: usize,
        transactions: &ResourceTransactions,
    ) -> bool {
        self.next_stage()
            .is_ok_and(|stage| stage.is_buildable(table, player, transactions))
    }

    /// Build the next stage by placing `card_back` under it.
    pub fn place_card(&mut self, card_back: CardBack) -> WonderResult<()> {
        let next = self.nb_built_stages();
        let stage = self
            .stages
            .get_mut(next)
            .ok_or(WonderError::MaxLevelReached)?;
        stage.build(card_back)
    }

    /// Build the next stage without spending a card. The wonder's own
    /// image stands in for the card back.
    pub fn unlock_next_stage(&mut self) -> WonderResult<()> {
        let back = CardBack::new(self.image.clone());
        self.place_card(back)
    }

    /// Apply the effects of the last built stage of `player`'s wonder.
    ///
    /// The stage is cloned out of the table first, since its effects may
    /// mutate any board, including the one holding the wonder.
    pub fn activate_last_built_stage(table: &mut Table, player: usize) -> WonderResult<()> {
        let stage = table.board(player).wonder().last_built_stage()?.clone();
        stage.activate(table, player);
        Ok(())
    }

    /// End-of-game points of every built stage.
    #[must_use]
    pub fn compute_points(&self, table: &Table, player: usize) -> i32 {
        self.stages
            .iter()
            .filter(|stage| stage.is_built())
            .map(|stage| stage.compute_points(table, player))
            .sum()
    }
}
