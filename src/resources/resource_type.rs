use serde::{Deserialize, Serialize};

/// A raw or manufactured good.
///
/// The set is closed: catalogs can only reference these kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ResourceType {
    Wood,
    Stone,
    Ore,
    Clay,
    Glass,
    Papyrus,
    Loom,
}

impl ResourceType {
    /// Every resource type, in canonical order.
    pub const ALL: [ResourceType; 7] = [
        ResourceType::Wood,
        ResourceType::Stone,
        ResourceType::Ore,
        ResourceType::Clay,
        ResourceType::Glass,
        ResourceType::Papyrus,
        ResourceType::Loom,
    ];

    /// Single-letter symbol used in compact notations ("3W 1S").
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            ResourceType::Wood => 'W',
            ResourceType::Stone => 'S',
            ResourceType::Ore => 'O',
            ResourceType::Clay => 'C',
            ResourceType::Glass => 'G',
            ResourceType::Papyrus => 'P',
            ResourceType::Loom => 'L',
        }
    }

    /// Parse a symbol produced by [`ResourceType::symbol`].
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.symbol() == symbol)
    }

    /// Whether this is a manufactured good (glass, papyrus, loom).
    #[must_use]
    pub const fn is_manufactured(self) -> bool {
        matches!(
            self,
            ResourceType::Glass | ResourceType::Papyrus | ResourceType::Loom
        )
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ResourceType::Wood => "wood",
            ResourceType::Stone => "stone",
            ResourceType::Ore => "ore",
            ResourceType::Clay => "clay",
            ResourceType::Glass => "glass",
            ResourceType::Papyrus => "papyrus",
            ResourceType::Loom => "loom",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_round_trip() {
        for t in ResourceType::ALL {
            assert_eq!(ResourceType::from_symbol(t.symbol()), Some(t));
        }
        assert_eq!(ResourceType::from_symbol('X'), None);
    }

    #[test]
    fn test_manufactured() {
        assert!(ResourceType::Glass.is_manufactured());
        assert!(ResourceType::Loom.is_manufactured());
        assert!(!ResourceType::Wood.is_manufactured());
        assert!(!ResourceType::Ore.is_manufactured());
    }

    #[test]
    fn test_display() {
        assert_eq!(ResourceType::Papyrus.to_string(), "papyrus");
    }
}
