//! Buying resources from neighbours.
//!
//! A player short of resources may buy units from the left or right
//! neighbour's sellable production. Which neighbour supplies what is always
//! an explicit player choice, carried as `ResourceTransactions`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{ResourceResult, ResourceType, Resources};

/// The neighbour a resource is bought from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    LeftNeighbour,
    RightNeighbour,
}

impl Provider {
    pub const ALL: [Provider; 2] = [Provider::LeftNeighbour, Provider::RightNeighbour];
}

/// Resources bought from a single neighbour.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceTransaction {
    pub provider: Provider,
    pub resources: Resources,
}

impl ResourceTransaction {
    #[must_use]
    pub fn new(provider: Provider, resources: Resources) -> Self {
        Self { provider, resources }
    }
}

/// All purchases attached to one action.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceTransactions {
    transactions: SmallVec<[ResourceTransaction; 2]>,
}

impl ResourceTransactions {
    /// No purchases.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Buy `resources` from one neighbour.
    #[must_use]
    pub fn single(provider: Provider, resources: Resources) -> Self {
        let mut transactions = Self::none();
        transactions.push(ResourceTransaction::new(provider, resources));
        transactions
    }

    /// Add a purchase (builder pattern).
    #[must_use]
    pub fn with(mut self, provider: Provider, resources: Resources) -> Self {
        self.push(ResourceTransaction::new(provider, resources));
        self
    }

    pub fn push(&mut self, transaction: ResourceTransaction) {
        if !transaction.resources.is_empty() {
            self.transactions.push(transaction);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResourceTransaction> {
        self.transactions.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Everything bought, from any neighbour.
    ///
    /// Fails with `ResourceError::Overflow` if the quantities do not add up
    /// in a `u32`.
    pub fn total_resources(&self) -> ResourceResult<Resources> {
        let mut total = Resources::new();
        for transaction in &self.transactions {
            total.try_add_all(&transaction.resources)?;
        }
        Ok(total)
    }

    /// Everything bought from one neighbour.
    pub fn from_provider(&self, provider: Provider) -> ResourceResult<Resources> {
        let mut total = Resources::new();
        for transaction in self.transactions.iter().filter(|t| t.provider == provider) {
            total.try_add_all(&transaction.resources)?;
        }
        Ok(total)
    }
}

impl FromIterator<ResourceTransaction> for ResourceTransactions {
    fn from_iter<I: IntoIterator<Item = ResourceTransaction>>(iter: I) -> Self {
        let mut transactions = Self::none();
        for transaction in iter {
            transactions.push(transaction);
        }
        transactions
    }
}

/// Unit prices a board pays its neighbours.
///
/// Every unit costs `default_cost` unless a discount set a specific price
/// for that neighbour and resource type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradingRules {
    default_cost: u32,
    costs: FxHashMap<Provider, FxHashMap<ResourceType, u32>>,
}

impl TradingRules {
    #[must_use]
    pub fn new(default_cost: u32) -> Self {
        Self {
            default_cost,
            costs: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn default_cost(&self) -> u32 {
        self.default_cost
    }

    /// Unit price of `resource` bought from `provider`.
    #[must_use]
    pub fn cost(&self, resource: ResourceType, provider: Provider) -> u32 {
        self.costs
            .get(&provider)
            .and_then(|costs| costs.get(&resource))
            .copied()
            .unwrap_or(self.default_cost)
    }

    pub fn set_cost(&mut self, resource: ResourceType, provider: Provider, cost: u32) {
        self.costs.entry(provider).or_default().insert(resource, cost);
    }

    /// Price of buying `resources` from `provider`, or `None` if it does
    /// not fit in a `u32`.
    #[must_use]
    pub fn cost_of_resources(&self, resources: &Resources, provider: Provider) -> Option<u32> {
        resources.iter().try_fold(0u32, |total, (resource, quantity)| {
            self.cost(resource, provider)
                .checked_mul(quantity)
                .and_then(|price| total.checked_add(price))
        })
    }

    /// Price of a single transaction.
    #[must_use]
    pub fn cost_of_transaction(&self, transaction: &ResourceTransaction) -> Option<u32> {
        self.cost_of_resources(&transaction.resources, transaction.provider)
    }

    /// Total price of all transactions.
    #[must_use]
    pub fn cost_of(&self, transactions: &ResourceTransactions) -> Option<u32> {
        transactions.iter().try_fold(0u32, |total, transaction| {
            self.cost_of_transaction(transaction)
                .and_then(|price| total.checked_add(price))
        })
    }
}

impl Default for TradingRules {
    fn default() -> Self {
        Self::new(2)
    }
}
