//! Resource production.
//!
//! A `Production` is a declaration: fixed outputs that are always available,
//! plus choice groups ("glass OR stone") each yielding one unit of one of
//! its types. The owner picks a type per group when spending.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{ProductionError, ResourceType, Resources};

/// Alternative resource types; exactly one unit of one of them is produced.
pub type ChoiceGroup = SmallVec<[ResourceType; 4]>;

/// What a board (or a card) generates every turn.
///
/// ## Example
///
/// ```
/// use wonders_engine::resources::{Production, ResourceType, Resources};
///
/// let mut production = Production::new();
/// production.add_fixed(ResourceType::Wood, 1);
/// production.add_choice([ResourceType::Glass, ResourceType::Stone]);
///
/// let mut cost = Resources::of(ResourceType::Wood, 1);
/// cost.add(ResourceType::Stone, 1);
/// assert!(production.contains(&cost));
///
/// cost.add(ResourceType::Glass, 1);
/// assert!(!production.contains(&cost));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Production {
    fixed: Resources,
    alternatives: Vec<ChoiceGroup>,
}

impl Production {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Production of a fixed amount of a single type.
    #[must_use]
    pub fn fixed(resource: ResourceType, quantity: u32) -> Self {
        let mut production = Self::new();
        production.add_fixed(resource, quantity);
        production
    }

    /// Production of one unit chosen among `choices`.
    #[must_use]
    pub fn choice(choices: impl IntoIterator<Item = ResourceType>) -> Self {
        let mut production = Self::new();
        production.add_choice(choices);
        production
    }

    pub fn add_fixed(&mut self, resource: ResourceType, quantity: u32) {
        self.fixed.add(resource, quantity);
    }

    /// Add a choice group. Empty groups are ignored, single-type groups are
    /// stored as fixed production.
    pub fn add_choice(&mut self, choices: impl IntoIterator<Item = ResourceType>) {
        let mut group: ChoiceGroup = choices.into_iter().collect();
        group.sort_unstable();
        group.dedup();
        match group.len() {
            0 => {}
            1 => self.fixed.add(group[0], 1),
            _ => self.alternatives.push(group),
        }
    }

    pub fn add_all(&mut self, other: &Production) {
        self.fixed.add_all(&other.fixed);
        self.alternatives.extend(other.alternatives.iter().cloned());
    }

    #[must_use]
    pub fn fixed_resources(&self) -> &Resources {
        &self.fixed
    }

    #[must_use]
    pub fn alternatives(&self) -> &[ChoiceGroup] {
        &self.alternatives
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fixed.is_empty() && self.alternatives.is_empty()
    }

    /// Resolve into concrete resources, picking `choices[i]` from group `i`.
    pub fn resolve(&self, choices: &[ResourceType]) -> Result<Resources, ProductionError> {
        if choices.len() != self.alternatives.len() {
            return Err(ProductionError::ChoiceCountMismatch {
                expected: self.alternatives.len(),
                actual: choices.len(),
            });
        }
        let mut resources = self.fixed.clone();
        for (group, (options, &choice)) in self.alternatives.iter().zip(choices).enumerate() {
            if !options.contains(&choice) {
                return Err(ProductionError::InvalidChoice {
                    group,
                    resource: choice,
                });
            }
            resources.add(choice, 1);
        }
        Ok(resources)
    }

    /// The smallest part of `required` this production cannot cover,
    /// over every way of resolving the choice groups.
    #[must_use]
    pub fn shortfall(&self, required: &Resources) -> Resources {
        let remaining = required.minus(&self.fixed);
        let mut best = remaining.clone();
        best_shortfall(&self.alternatives, remaining, &mut best);
        best
    }

    /// True iff some resolution of this production covers `required`.
    #[must_use]
    pub fn contains(&self, required: &Resources) -> bool {
        self.shortfall(required).is_empty()
    }
}

fn best_shortfall(groups: &[ChoiceGroup], remaining: Resources, best: &mut Resources) {
    if remaining.size() < best.size() {
        *best = remaining.clone();
    }
    if remaining.is_empty() {
        return;
    }
    let Some((group, rest)) = groups.split_first() else {
        return;
    };

    let mut useful = false;
    for &resource in group {
        if remaining.get(resource) == 0 {
            continue;
        }
        useful = true;
        let next = remaining.minus(&Resources::of(resource, 1));
        best_shortfall(rest, next, best);
        if best.is_empty() {
            return;
        }
    }
    // a group that cannot help anything still must not block the rest
    if !useful {
        best_shortfall(rest, remaining, best);
    }
}
