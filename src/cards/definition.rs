//! Card definitions - static catalog data.
//!
//! A `Card` is immutable once registered. Boards keep `Arc<Card>` handles to
//! the catalog records they built, never copies they could mutate.

use serde::{Deserialize, Serialize};

use super::Requirements;
use crate::effects::Effect;

/// Identifier of a card in the catalog (its index in the registry).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Index of the card in the registry.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// The back of a card. Cards spent on wonder stages are placed face down,
/// so the back is all that remains of them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardBack {
    pub image: String,
}

impl CardBack {
    pub fn new(image: impl Into<String>) -> Self {
        Self { image: image.into() }
    }
}

/// Card colour, which doubles as its family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Raw materials.
    Brown,
    /// Manufactured goods.
    Grey,
    /// Commercial buildings.
    Yellow,
    /// Civilian buildings.
    Blue,
    /// Scientific buildings.
    Green,
    /// Military buildings.
    Red,
    /// Guilds.
    Purple,
}

impl Color {
    /// Whether cards of this colour produce sellable resources.
    #[must_use]
    pub const fn is_resource(self) -> bool {
        matches!(self, Color::Brown | Color::Grey)
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use wonders_engine::cards::{Card, CardBack, Color, Requirements};
/// use wonders_engine::effects::Effect;
///
/// let barracks = Card::new("Barracks", Color::Red, CardBack::new("age1"))
///     .with_requirements(Requirements::gold(1))
///     .with_effect(Effect::MilitaryReinforcements(1));
///
/// assert_eq!(barracks.effects.len(), 1);
/// assert!(!barracks.requirements.is_free());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Assigned by the registry on registration.
    #[serde(default)]
    pub id: CardId,

    pub name: String,

    pub color: Color,

    #[serde(default)]
    pub requirements: Requirements,

    /// Applied in declaration order when the card is built.
    #[serde(default)]
    pub effects: Vec<Effect>,

    /// Name of a card that makes this one free when already built.
    #[serde(default)]
    pub chain_parent: Option<String>,

    /// Names of cards this one makes free.
    #[serde(default)]
    pub chain_children: Vec<String>,

    pub back: CardBack,
}

impl Card {
    /// Create a free card with no effects.
    #[must_use]
    pub fn new(name: impl Into<String>, color: Color, back: CardBack) -> Self {
        Self {
            id: CardId::default(),
            name: name.into(),
            color,
            requirements: Requirements::free(),
            effects: Vec::new(),
            chain_parent: None,
            chain_children: Vec::new(),
            back,
        }
    }

    #[must_use]
    pub fn with_requirements(mut self, requirements: Requirements) -> Self {
        self.requirements = requirements;
        self
    }

    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    #[must_use]
    pub fn with_chain_parent(mut self, parent: impl Into<String>) -> Self {
        self.chain_parent = Some(parent.into());
        self
    }

    #[must_use]
    pub fn with_chain_child(mut self, child: impl Into<String>) -> Self {
        self.chain_children.push(child.into());
        self
    }
}
