//! Card registry for definition lookup.
//!
//! The `CardRegistry` is an arena of immutable card records. Ids are
//! assigned sequentially on registration, so `CardId` doubles as an index.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::definition::{Card, CardId, Color};
use super::CatalogError;

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use wonders_engine::cards::{Card, CardBack, CardId, CardRegistry, Color};
///
/// let mut registry = CardRegistry::new();
/// let id = registry.register(Card::new("Altar", Color::Blue, CardBack::new("age1")));
///
/// assert_eq!(id, CardId::new(0));
/// assert_eq!(registry.get(id).unwrap().name, "Altar");
/// assert_eq!(registry.find_by_name("Altar").unwrap().id, id);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct CardRegistry {
    cards: Vec<Arc<Card>>,
    by_name: FxHashMap<String, CardId>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition and return its assigned ID.
    ///
    /// Panics if a card with the same name already exists. Use
    /// `try_register` for catalogs that come from outside the program.
    pub fn register(&mut self, card: Card) -> CardId {
        match self.try_register(card) {
            Ok(id) => id,
            Err(err) => panic!("{}", err),
        }
    }

    /// Register a card definition, rejecting duplicate names.
    pub fn try_register(&mut self, mut card: Card) -> Result<CardId, CatalogError> {
        if self.by_name.contains_key(&card.name) {
            return Err(CatalogError::DuplicateCardName(card.name));
        }
        let id = CardId::new(self.cards.len() as u32);
        card.id = id;
        self.by_name.insert(card.name.clone(), id);
        self.cards.push(Arc::new(card));
        Ok(id)
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Arc<Card>> {
        self.cards.get(id.index())
    }

    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Arc<Card>> {
        self.by_name.get(name).and_then(|&id| self.get(id))
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        id.index() < self.cards.len()
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions, in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Card>> {
        self.cards.iter()
    }

    /// Find cards by colour.
    pub fn find_by_color(&self, color: Color) -> impl Iterator<Item = &Arc<Card>> {
        self.cards.iter().filter(move |c| c.color == color)
    }
}

impl TryFrom<Vec<Card>> for CardRegistry {
    type Error = CatalogError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        let mut registry = CardRegistry::new();
        for card in cards {
            registry.try_register(card)?;
        }
        Ok(registry)
    }
}

impl From<CardRegistry> for Vec<Card> {
    fn from(registry: CardRegistry) -> Self {
        registry.cards.iter().map(|card| Card::clone(card)).collect()
    }
}
