//! Effect definitions.
//!
//! Effects are what building a card or a wonder stage does. Each variant
//! carries only its own parameters and is resolved by exhaustive matching.
//! Some effects only touch the owner's board; others look at neighbours or
//! at the whole table.

use serde::{Deserialize, Serialize};

use super::SpecialAbility;
use crate::boards::{Board, RelativeBoardPosition, Science, Table};
use crate::cards::Color;
use crate::resources::{Production, Provider, ResourceType};
use crate::wonders::Wonder;

/// Something on a board that bonus effects count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardElementType {
    /// Built cards of a colour.
    Cards(Color),
    /// Built wonder stages.
    BuiltWonderStages,
    /// Military defeat tokens.
    DefeatTokens,
}

impl BoardElementType {
    fn count_on(self, board: &Board) -> u32 {
        match self {
            BoardElementType::Cards(color) => board.cards_of_color(color),
            BoardElementType::BuiltWonderStages => board.wonder().nb_built_stages() as u32,
            BoardElementType::DefeatTokens => board.military().defeat_tokens(),
        }
    }
}

/// An atomic game effect.
///
/// ## Own-board effects
///
/// - `ProductionIncrease`, `GoldIncrease`, `MilitaryReinforcements`,
///   `ScienceProgress`, `Discount`, `SpecialAbilityActivation`
///
/// ## Table effects
///
/// - `BonusPerBoardElement`: counts elements on the player's and/or the
///   neighbours' boards
/// - `WonderStageUnlock`: builds the next stage of the player's wonder
///
/// ## Scoring
///
/// `RawPointsIncrease` and `BonusPerBoardElement` score at the end of the
/// game, as do some special abilities. Everything else scores 0 by itself.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    /// Add production. Sellable production can be bought by neighbours.
    ProductionIncrease {
        production: Production,
        sellable: bool,
    },

    GoldIncrease(u32),

    RawPointsIncrease(i32),

    /// Add shields.
    MilitaryReinforcements(u32),

    ScienceProgress(Science),

    /// Lower the unit price of some resources bought from some neighbours.
    Discount {
        resource_types: Vec<ResourceType>,
        providers: Vec<Provider>,
        discounted_price: u32,
    },

    /// Gold now and points at the end, per element found on some boards.
    BonusPerBoardElement {
        boards: Vec<RelativeBoardPosition>,
        element: BoardElementType,
        gold: u32,
        points: i32,
    },

    SpecialAbilityActivation(SpecialAbility),

    /// Build the next wonder stage for free and apply its effects.
    WonderStageUnlock,
}

impl Effect {
    /// Add a fixed amount of one resource, sellable to neighbours.
    pub fn produce(resource: ResourceType, quantity: u32) -> Self {
        Self::ProductionIncrease {
            production: Production::fixed(resource, quantity),
            sellable: true,
        }
    }

    /// Add one unit of one of `choices`, sellable to neighbours.
    pub fn produce_one_of(choices: impl IntoIterator<Item = ResourceType>) -> Self {
        Self::ProductionIncrease {
            production: Production::choice(choices),
            sellable: true,
        }
    }

    /// Whether the effect only needs the owner's board to apply.
    #[must_use]
    pub fn is_own_board(&self) -> bool {
        !matches!(
            self,
            Effect::BonusPerBoardElement { .. } | Effect::WonderStageUnlock
        )
    }

    /// Apply the effect for `player`.
    pub fn apply(&self, table: &mut Table, player: usize) {
        match self {
            Effect::BonusPerBoardElement {
                boards,
                element,
                gold,
                ..
            } => {
                let count = count_elements(table, player, boards, *element);
                table.board_mut(player).add_gold(gold * count);
            }
            Effect::WonderStageUnlock => unlock_next_stage(table, player),
            _ => {
                self.apply_to_board(table.board_mut(player));
            }
        }
    }

    /// Apply an own-board effect. Returns `false` (and does nothing) for
    /// effects that need the whole table.
    pub fn apply_to_board(&self, board: &mut Board) -> bool {
        match self {
            Effect::ProductionIncrease {
                production,
                sellable,
            } => board.add_production(production, *sellable),
            Effect::GoldIncrease(gold) => board.add_gold(*gold),
            Effect::RawPointsIncrease(_) => {}
            Effect::MilitaryReinforcements(count) => board.military_mut().add_shields(*count),
            Effect::ScienceProgress(science) => board.science_mut().add_all(science),
            Effect::Discount {
                resource_types,
                providers,
                discounted_price,
            } => {
                let rules = board.trading_rules_mut();
                for &resource in resource_types {
                    for &provider in providers {
                        rules.set_cost(resource, provider, *discounted_price);
                    }
                }
            }
            Effect::SpecialAbilityActivation(ability) => board.activate_special(*ability),
            Effect::BonusPerBoardElement { .. } | Effect::WonderStageUnlock => return false,
        }
        true
    }

    /// End-of-game points this effect is worth to `player`.
    #[must_use]
    pub fn compute_points(&self, table: &Table, player: usize) -> i32 {
        match self {
            Effect::RawPointsIncrease(points) => *points,
            Effect::BonusPerBoardElement {
                boards,
                element,
                points,
                ..
            } => count_elements(table, player, boards, *element) as i32 * points,
            Effect::SpecialAbilityActivation(ability) => ability.compute_points(table, player),
            Effect::ProductionIncrease { .. }
            | Effect::GoldIncrease(_)
            | Effect::MilitaryReinforcements(_)
            | Effect::ScienceProgress(_)
            | Effect::Discount { .. }
            | Effect::WonderStageUnlock => 0,
        }
    }
}

fn count_elements(
    table: &Table,
    player: usize,
    boards: &[RelativeBoardPosition],
    element: BoardElementType,
) -> u32 {
    boards
        .iter()
        .map(|&position| element.count_on(table.neighbour(player, position)))
        .sum()
}

fn unlock_next_stage(table: &mut Table, player: usize) {
    let wonder = table.board_mut(player).wonder_mut();
    if let Err(err) = wonder.unlock_next_stage() {
        tracing::warn!(player, %err, "no wonder stage left to unlock");
        return;
    }
    if let Err(err) = Wonder::activate_last_built_stage(table, player) {
        tracing::warn!(player, %err, "unlocked stage could not be activated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boards::ScienceType;

    #[test]
    fn test_effect_equality_by_parameters() {
        assert_eq!(Effect::MilitaryReinforcements(2), Effect::MilitaryReinforcements(2));
        assert_ne!(Effect::MilitaryReinforcements(2), Effect::MilitaryReinforcements(3));
        assert_ne!(Effect::GoldIncrease(2), Effect::RawPointsIncrease(2));
        assert_eq!(
            Effect::produce_one_of([ResourceType::Ore, ResourceType::Clay]),
            Effect::produce_one_of([ResourceType::Clay, ResourceType::Ore]),
        );
    }

    #[test]
    fn test_own_board_classification() {
        assert!(Effect::GoldIncrease(3).is_own_board());
        assert!(Effect::SpecialAbilityActivation(SpecialAbility::CopyGuild).is_own_board());
        assert!(!Effect::WonderStageUnlock.is_own_board());
        assert!(!Effect::BonusPerBoardElement {
            boards: vec![RelativeBoardPosition::SelfBoard],
            element: BoardElementType::Cards(Color::Brown),
            gold: 1,
            points: 0,
        }
        .is_own_board());
    }

    #[test]
    fn test_effect_serialization() {
        let effect = Effect::ScienceProgress(Science::of(ScienceType::Wheel));
        let json = serde_json::to_string(&effect).unwrap();
        let deserialized: Effect = serde_json::from_str(&json).unwrap();
        assert_eq!(effect, deserialized);

        let discount = Effect::Discount {
            resource_types: vec![ResourceType::Wood, ResourceType::Stone],
            providers: vec![Provider::LeftNeighbour],
            discounted_price: 1,
        };
        let json = serde_json::to_string(&discount).unwrap();
        assert_eq!(serde_json::from_str::<Effect>(&json).unwrap(), discount);
    }
}
