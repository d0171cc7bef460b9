//! Action costs.
//!
//! `Requirements` lists alternative ways to pay for an action. Each
//! `PaymentOption` asks for some gold and some resources; the player picks
//! one option and says which neighbour sells which missing resources.
//!
//! Validation and payment are separate steps: `check_option` never mutates,
//! and `pay` only touches the table once `check_option` has succeeded.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::boards::{Board, Table};
use crate::resources::{Provider, ResourceTransactions, Resources};
use crate::rules::{ActionError, ActionResult};

/// One way of paying for an action.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaymentOption {
    #[serde(default)]
    pub gold: u32,
    #[serde(default)]
    pub resources: Resources,
}

impl PaymentOption {
    #[must_use]
    pub fn new(gold: u32, resources: Resources) -> Self {
        Self { gold, resources }
    }

    #[must_use]
    pub fn is_free(&self) -> bool {
        self.gold == 0 && self.resources.is_empty()
    }
}

/// Alternative payment options for an action. Never empty: a free action
/// has a single option asking for nothing.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<PaymentOption>", into = "Vec<PaymentOption>")]
pub struct Requirements {
    options: Vec<PaymentOption>,
}

impl Requirements {
    /// Nothing to pay.
    #[must_use]
    pub fn free() -> Self {
        Self {
            options: vec![PaymentOption::default()],
        }
    }

    /// A single option costing only gold.
    #[must_use]
    pub fn gold(gold: u32) -> Self {
        Self::single(PaymentOption::new(gold, Resources::new()))
    }

    /// A single option costing only resources.
    #[must_use]
    pub fn resources(resources: Resources) -> Self {
        Self::single(PaymentOption::new(0, resources))
    }

    #[must_use]
    pub fn single(option: PaymentOption) -> Self {
        Self {
            options: vec![option],
        }
    }

    /// Add an alternative option (builder pattern).
    #[must_use]
    pub fn or(mut self, option: PaymentOption) -> Self {
        self.options.push(option);
        self
    }

    #[must_use]
    pub fn options(&self) -> &[PaymentOption] {
        &self.options
    }

    /// Whether some option costs nothing at all.
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.options.iter().any(PaymentOption::is_free)
    }

    fn option(&self, index: usize) -> ActionResult<&PaymentOption> {
        self.options.get(index).ok_or(ActionError::UnknownPaymentOption {
            index,
            count: self.options.len(),
        })
    }

    /// Resources of `option` the board cannot produce by itself.
    pub fn missing_resources(&self, option: usize, board: &Board) -> ActionResult<Resources> {
        let option = self.option(option)?;
        Ok(board.production().shortfall(&option.resources))
    }

    /// Validate paying with `option`, buying `transactions` from neighbours.
    ///
    /// Returns the total gold the player would spend (option gold plus the
    /// price of the purchases). Never mutates the table.
    pub fn check_option(
        &self,
        table: &Table,
        player: usize,
        option: usize,
        transactions: &ResourceTransactions,
    ) -> ActionResult<u32> {
        let payment = self.option(option)?;
        let board = table.board(player);

        for provider in Provider::ALL {
            let bought = transactions.from_provider(provider)?;
            if bought.is_empty() {
                continue;
            }
            let seller = table.neighbour(player, provider.into());
            if !seller.sellable_production().contains(&bought) {
                return Err(ActionError::NeighbourCannotProvide {
                    provider,
                    resources: bought,
                });
            }
        }

        let remaining = payment.resources.minus(&transactions.total_resources()?);
        let missing = board.production().shortfall(&remaining);
        if !missing.is_empty() {
            return Err(ActionError::MissingResources { missing });
        }

        let required = board
            .trading_rules()
            .cost_of(transactions)
            .and_then(|price| price.checked_add(payment.gold))
            .ok_or(ActionError::PriceOverflow)?;
        if board.gold() < required {
            return Err(ActionError::NotEnoughGold {
                required,
                available: board.gold(),
            });
        }
        Ok(required)
    }

    /// Indices of the options the player can pay with these purchases.
    #[must_use]
    pub fn affordable_options(
        &self,
        table: &Table,
        player: usize,
        transactions: &ResourceTransactions,
    ) -> Vec<usize> {
        (0..self.options.len())
            .filter(|&option| self.check_option(table, player, option, transactions).is_ok())
            .collect()
    }

    /// Whether at least one option can be paid with these purchases.
    #[must_use]
    pub fn is_affordable_by(
        &self,
        table: &Table,
        player: usize,
        transactions: &ResourceTransactions,
    ) -> bool {
        !self.affordable_options(table, player, transactions).is_empty()
    }

    /// The affordable option costing the least gold with these purchases.
    pub fn cheapest_option(
        &self,
        table: &Table,
        player: usize,
        transactions: &ResourceTransactions,
    ) -> ActionResult<usize> {
        (0..self.options.len())
            .filter_map(|option| {
                self.check_option(table, player, option, transactions)
                    .ok()
                    .map(|gold| (gold, option))
            })
            .min()
            .map(|(_, option)| option)
            .ok_or(ActionError::NoPaymentOption)
    }

    /// Pay with `option`: the player loses the option's gold and the price
    /// of its purchases, each neighbour gains what it sold for.
    ///
    /// Returns the gold spent. Nothing is deducted if validation fails.
    pub fn pay(
        &self,
        table: &mut Table,
        player: usize,
        option: usize,
        transactions: &ResourceTransactions,
    ) -> ActionResult<u32> {
        let spent = self.check_option(table, player, option, transactions)?;

        let rules = table.board(player).trading_rules();
        let mut payouts: SmallVec<[(usize, u32); 2]> = SmallVec::new();
        for provider in Provider::ALL {
            let price = rules
                .cost_of_resources(&transactions.from_provider(provider)?, provider)
                .ok_or(ActionError::PriceOverflow)?;
            if price > 0 {
                payouts.push((table.neighbour_index(player, provider.into()), price));
            }
        }

        table.board_mut(player).remove_gold(spent)?;
        for (seller, price) in payouts {
            table.board_mut(seller).add_gold(price);
        }

        tracing::debug!(player, option, spent, "requirements paid");
        Ok(spent)
    }
}

impl Default for Requirements {
    fn default() -> Self {
        Self::free()
    }
}

impl From<Vec<PaymentOption>> for Requirements {
    fn from(options: Vec<PaymentOption>) -> Self {
        if options.is_empty() {
            Self::free()
        } else {
            Self { options }
        }
    }
}

impl From<Requirements> for Vec<PaymentOption> {
    fn from(requirements: Requirements) -> Self {
        requirements.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Settings;
    use crate::resources::{Production, ResourceType};
    use crate::wonders::{Wonder, WonderSide};

    /// Three boards producing one wood each, with 3 gold.
    fn table() -> Table {
        let settings = Settings::default();
        Table::new((0..3).map(|seat| {
            let wonder = Wonder::new(format!("W{}", seat), WonderSide::A, ResourceType::Wood, "w.png", Vec::new());
            Board::new(seat, wonder, &settings)
        }))
    }

    #[test]
    fn test_missing_resources_with_choice_groups() {
        let mut table = table();
        let mut flexible = Production::new();
        flexible.add_choice([ResourceType::Clay, ResourceType::Stone]);
        table.board_mut(0).add_production(&flexible, false);
        let board = table.board(0);

        let covered: Resources = [(ResourceType::Wood, 1), (ResourceType::Clay, 1)].into_iter().collect();
        let short: Resources = [(ResourceType::Wood, 2), (ResourceType::Stone, 1)].into_iter().collect();
        let requirements = Requirements::resources(covered)
            .or(PaymentOption::new(0, short))
            .or(PaymentOption::new(1, Resources::new()));

        assert_eq!(requirements.missing_resources(0, board), Ok(Resources::new()));
        assert_eq!(
            requirements.missing_resources(1, board),
            Ok(Resources::of(ResourceType::Wood, 1))
        );
        assert_eq!(requirements.missing_resources(2, board), Ok(Resources::new()));
        assert_eq!(
            requirements.missing_resources(5, board),
            Err(ActionError::UnknownPaymentOption { index: 5, count: 3 })
        );
    }

    #[test]
    fn test_cheapest_option() {
        let table = table();
        let none = ResourceTransactions::none();

        // too expensive, then paid with own wood
        let requirements = Requirements::gold(5)
            .or(PaymentOption::new(2, Resources::new()))
            .or(PaymentOption::new(0, Resources::of(ResourceType::Wood, 1)));
        assert_eq!(requirements.cheapest_option(&table, 0, &none), Ok(2));

        // purchases are priced into every option
        let buy_wood = ResourceTransactions::single(Provider::LeftNeighbour, Resources::of(ResourceType::Wood, 1));
        let requirements = Requirements::gold(1).or(PaymentOption::new(0, Resources::of(ResourceType::Wood, 2)));
        assert_eq!(requirements.affordable_options(&table, 0, &buy_wood), vec![0, 1]);
        assert_eq!(requirements.cheapest_option(&table, 0, &buy_wood), Ok(1));

        let requirements = Requirements::gold(4).or(PaymentOption::new(0, Resources::of(ResourceType::Ore, 1)));
        assert_eq!(
            requirements.cheapest_option(&table, 0, &none),
            Err(ActionError::NoPaymentOption)
        );
    }

    #[test]
    fn test_free() {
        assert!(Requirements::free().is_free());
        assert!(Requirements::default().is_free());
        assert!(!Requirements::gold(1).is_free());
        assert!(Requirements::gold(1).or(PaymentOption::default()).is_free());
    }

    #[test]
    fn test_empty_options_deserialize_as_free() {
        let requirements: Requirements = serde_json::from_str("[]").unwrap();
        assert_eq!(requirements, Requirements::free());
    }

    #[test]
    fn test_deserialize_alternatives() {
        let json = r#"[{"gold":3},{"resources":{"Wood":1,"Clay":1}}]"#;
        let requirements: Requirements = serde_json::from_str(json).unwrap();

        assert_eq!(requirements.options().len(), 2);
        assert_eq!(requirements.options()[0].gold, 3);
        assert_eq!(requirements.options()[1].resources.get(ResourceType::Clay), 1);
    }
}
