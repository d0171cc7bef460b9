//! A single player's board.
//!
//! The board owns everything a player accumulates during a game: gold,
//! production, military and science progress, built cards and the wonder.
//! It is mutated only by paying for actions and by applying effects.

use std::sync::Arc;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::{Military, Science};
use crate::cards::{Card, CardId, Color};
use crate::core::Settings;
use crate::effects::SpecialAbility;
use crate::resources::{Production, Resources, TradingRules};
use crate::rules::{ActionError, ActionResult};
use crate::wonders::{Wonder, WonderSide};

/// Per-player mutable game state.
#[derive(Clone, Debug)]
pub struct Board {
    seat: usize,
    wonder: Wonder,

    // === Economy ===
    production: Production,
    /// Subset of `production` neighbours may buy from.
    sellable_production: Production,
    gold: u32,
    trading_rules: TradingRules,

    // === Progress ===
    military: Military,
    science: Science,
    /// Built cards, in build order.
    cards: Vec<Arc<Card>>,

    // === Abilities ===
    special_abilities: FxHashSet<SpecialAbility>,
    /// Age in which the once-per-age free build was used.
    free_card_age: Option<u8>,
}

impl Board {
    /// Create the board of seat `seat`, producing one unit of the wonder's
    /// initial resource.
    #[must_use]
    pub fn new(seat: usize, wonder: Wonder, settings: &Settings) -> Self {
        let initial = Production::fixed(wonder.initial_resource(), 1);
        Self {
            seat,
            wonder,
            production: initial.clone(),
            sellable_production: initial,
            gold: settings.initial_gold,
            trading_rules: TradingRules::new(settings.default_trade_cost),
            military: Military::new(settings.lost_points_per_defeat),
            science: Science::new(),
            cards: Vec::new(),
            special_abilities: FxHashSet::default(),
            free_card_age: None,
        }
    }

    #[must_use]
    pub fn seat(&self) -> usize {
        self.seat
    }

    #[must_use]
    pub fn wonder(&self) -> &Wonder {
        &self.wonder
    }

    pub fn wonder_mut(&mut self) -> &mut Wonder {
        &mut self.wonder
    }

    // === Economy ===

    #[must_use]
    pub fn production(&self) -> &Production {
        &self.production
    }

    #[must_use]
    pub fn sellable_production(&self) -> &Production {
        &self.sellable_production
    }

    /// Resources the board produces without any choice involved.
    #[must_use]
    pub fn owned_resources(&self) -> &Resources {
        self.production.fixed_resources()
    }

    pub fn add_production(&mut self, production: &Production, sellable: bool) {
        self.production.add_all(production);
        if sellable {
            self.sellable_production.add_all(production);
        }
    }

    #[must_use]
    pub fn gold(&self) -> u32 {
        self.gold
    }

    pub fn add_gold(&mut self, amount: u32) {
        self.gold += amount;
    }

    /// Spend gold. Fails without touching the board when short.
    pub fn remove_gold(&mut self, amount: u32) -> ActionResult<()> {
        if amount > self.gold {
            return Err(ActionError::NotEnoughGold {
                required: amount,
                available: self.gold,
            });
        }
        self.gold -= amount;
        Ok(())
    }

    #[must_use]
    pub fn trading_rules(&self) -> &TradingRules {
        &self.trading_rules
    }

    pub fn trading_rules_mut(&mut self) -> &mut TradingRules {
        &mut self.trading_rules
    }

    // === Progress ===

    #[must_use]
    pub fn military(&self) -> &Military {
        &self.military
    }

    pub fn military_mut(&mut self) -> &mut Military {
        &mut self.military
    }

    #[must_use]
    pub fn science(&self) -> &Science {
        &self.science
    }

    pub fn science_mut(&mut self) -> &mut Science {
        &mut self.science
    }

    // === Cards ===

    #[must_use]
    pub fn cards(&self) -> &[Arc<Card>] {
        &self.cards
    }

    /// Record a built card. Its effects are applied separately.
    pub fn add_card(&mut self, card: Arc<Card>) {
        self.cards.push(card);
    }

    #[must_use]
    pub fn cards_of_color(&self, color: Color) -> u32 {
        self.cards.iter().filter(|card| card.color == color).count() as u32
    }

    #[must_use]
    pub fn has_card_named(&self, name: &str) -> bool {
        self.cards.iter().any(|card| card.name == name)
    }

    /// Whether `card` is free because its chain parent is already built.
    #[must_use]
    pub fn is_chained(&self, card: &Card) -> bool {
        card.chain_parent
            .as_deref()
            .is_some_and(|parent| self.has_card_named(parent))
    }

    // === Abilities ===

    #[must_use]
    pub fn has_special(&self, ability: SpecialAbility) -> bool {
        self.special_abilities.contains(&ability)
    }

    pub fn activate_special(&mut self, ability: SpecialAbility) {
        self.special_abilities.insert(ability);
    }

    /// Use up a one-shot ability. Returns `false` if it was not active.
    pub fn consume_special(&mut self, ability: SpecialAbility) -> bool {
        self.special_abilities.remove(&ability)
    }

    /// Whether the once-per-age free build is available during `age`.
    #[must_use]
    pub fn can_play_free(&self, age: u8) -> bool {
        self.has_special(SpecialAbility::OneFreeCardPerAge) && self.free_card_age != Some(age)
    }

    /// Use the free build of `age`. Returns `false` if it is not available.
    pub fn consume_free_play(&mut self, age: u8) -> bool {
        if !self.can_play_free(age) {
            return false;
        }
        self.free_card_age = Some(age);
        true
    }

    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            seat: self.seat,
            wonder: self.wonder.name().to_string(),
            wonder_side: self.wonder.side(),
            built_stages: self.wonder.nb_built_stages(),
            gold: self.gold,
            production: self.production.clone(),
            shields: self.military.shields(),
            military_points: self.military.total_points(),
            defeat_tokens: self.military.defeat_tokens(),
            science: self.science,
            cards: self.cards.iter().map(|card| card.id).collect(),
        }
    }
}

/// Public view of a board, sent to every player after each action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub seat: usize,
    pub wonder: String,
    pub wonder_side: WonderSide,
    pub built_stages: usize,
    pub gold: u32,
    pub production: Production,
    pub shields: u32,
    pub military_points: i32,
    pub defeat_tokens: u32,
    pub science: Science,
    pub cards: Vec<CardId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardBack;
    use crate::resources::ResourceType;

    fn wonder() -> Wonder {
        Wonder::new("Gizah", WonderSide::A, ResourceType::Stone, "gizah-a.png", Vec::new())
    }

    fn board() -> Board {
        Board::new(0, wonder(), &Settings::default())
    }

    #[test]
    fn test_new_board() {
        let board = board();
        assert_eq!(board.gold(), 3);
        assert_eq!(board.owned_resources().get(ResourceType::Stone), 1);
        assert!(board.sellable_production().contains(&Resources::of(ResourceType::Stone, 1)));
        assert_eq!(board.trading_rules().cost(ResourceType::Wood, crate::resources::Provider::LeftNeighbour), 2);
    }

    #[test]
    fn test_remove_gold() {
        let mut board = board();
        assert!(board.remove_gold(2).is_ok());
        assert_eq!(board.gold(), 1);
        assert_eq!(
            board.remove_gold(2),
            Err(ActionError::NotEnoughGold {
                required: 2,
                available: 1
            })
        );
        assert_eq!(board.gold(), 1);
    }

    #[test]
    fn test_unsellable_production() {
        let mut board = board();
        board.add_production(&Production::choice([ResourceType::Wood, ResourceType::Ore]), false);

        let ore = Resources::of(ResourceType::Ore, 1);
        assert!(board.production().contains(&ore));
        assert!(!board.sellable_production().contains(&ore));
    }

    #[test]
    fn test_cards_and_chaining() {
        let mut board = board();
        board.add_card(Arc::new(Card::new("Altar", Color::Blue, CardBack::new("age1"))));
        board.add_card(Arc::new(Card::new("Baths", Color::Blue, CardBack::new("age1"))));

        assert_eq!(board.cards_of_color(Color::Blue), 2);
        assert_eq!(board.cards_of_color(Color::Red), 0);

        let temple = Card::new("Temple", Color::Blue, CardBack::new("age2")).with_chain_parent("Altar");
        let senate = Card::new("Senate", Color::Blue, CardBack::new("age3")).with_chain_parent("Library");
        assert!(board.is_chained(&temple));
        assert!(!board.is_chained(&senate));
    }

    #[test]
    fn test_free_play_once_per_age() {
        let mut board = board();
        assert!(!board.can_play_free(1));

        board.activate_special(SpecialAbility::OneFreeCardPerAge);
        assert!(board.consume_free_play(1));
        assert!(!board.consume_free_play(1));
        assert!(board.can_play_free(2));
    }
}
