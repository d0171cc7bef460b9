//! Card system: definitions, costs and the catalog registry.
//!
//! ## Key Types
//!
//! - `CardId`: Index of a card in the catalog
//! - `Card`: Immutable catalog record (colour, cost, effects, chaining)
//! - `Requirements`: Alternative payment options for an action
//! - `CardRegistry`: Arena of `Arc<Card>` records

pub mod definition;
pub mod registry;
pub mod requirements;

use thiserror::Error;

pub use definition::{Card, CardBack, CardId, Color};
pub use registry::CardRegistry;
pub use requirements::{PaymentOption, Requirements};

/// Errors raised while loading a card catalog.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("card named {0:?} already registered")]
    DuplicateCardName(String),
}
