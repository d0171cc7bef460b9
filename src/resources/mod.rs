//! Resource accounting: resource kinds, multisets, production and trading.
//!
//! ## Key Types
//!
//! - `ResourceType`: Closed set of raw goods
//! - `Resources`: Multiset of resource types (zero quantity ≡ absent)
//! - `Production`: What a board generates, including "one of" choice groups
//! - `ResourceTransactions`: Resources a player buys from neighbours
//! - `TradingRules`: Per-board price list for buying from neighbours

mod production;
mod resource_type;
mod set;
mod trading;

use thiserror::Error;

pub use production::{ChoiceGroup, Production};
pub use resource_type::ResourceType;
pub use set::Resources;
pub use trading::{Provider, ResourceTransaction, ResourceTransactions, TradingRules};

/// Errors raised by the resource multiset.
#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
pub enum ResourceError {
    /// Attempted to remove more of a resource than is held.
    #[error("cannot remove {requested} {resource}, only {available} held")]
    Underflow {
        resource: ResourceType,
        requested: u32,
        available: u32,
    },
    /// A sum of quantities does not fit in a `u32`.
    #[error("too many {resource} to count")]
    Overflow { resource: ResourceType },
}

/// Errors raised when resolving a `Production` into concrete resources.
#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
pub enum ProductionError {
    #[error("expected {expected} choices, got {actual}")]
    ChoiceCountMismatch { expected: usize, actual: usize },
    #[error("{resource} is not an option of choice group {group}")]
    InvalidChoice { group: usize, resource: ResourceType },
}

pub type ResourceResult<T> = Result<T, ResourceError>;
