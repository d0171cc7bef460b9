//! Resource multiset.
//!
//! `Resources` maps each `ResourceType` to a non-negative quantity. Zero
//! quantities are never stored, so a set holding "0 wood" is the same value
//! as one that never mentioned wood: equality, hashing and emptiness all
//! depend on content only.

use std::hash::{Hash, Hasher};
use std::ops::AddAssign;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::{ResourceError, ResourceResult, ResourceType};

/// A multiset of resources.
///
/// ## Example
///
/// ```
/// use wonders_engine::resources::{Resources, ResourceType};
///
/// let mut resources = Resources::new();
/// resources.add(ResourceType::Glass, 3);
/// resources.add(ResourceType::Wood, 4);
/// resources.add(ResourceType::Glass, 2);
///
/// assert_eq!(resources.get(ResourceType::Glass), 5);
/// assert_eq!(resources.size(), 9);
/// assert!(resources.remove(ResourceType::Wood, 5).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "FxHashMap<ResourceType, u32>",
    into = "FxHashMap<ResourceType, u32>"
)]
pub struct Resources {
    quantities: FxHashMap<ResourceType, u32>,
}

impl Resources {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set holding `quantity` of a single type.
    #[must_use]
    pub fn of(resource: ResourceType, quantity: u32) -> Self {
        let mut resources = Self::new();
        resources.add(resource, quantity);
        resources
    }

    /// Quantity held for a type (0 when absent).
    #[must_use]
    pub fn get(&self, resource: ResourceType) -> u32 {
        self.quantities.get(&resource).copied().unwrap_or(0)
    }

    /// Add `quantity` of a type. Adding zero is a no-op.
    pub fn add(&mut self, resource: ResourceType, quantity: u32) {
        if quantity == 0 {
            return;
        }
        *self.quantities.entry(resource).or_insert(0) += quantity;
    }

    /// Remove `quantity` of a type.
    ///
    /// Fails with `ResourceError::Underflow` if fewer are held, in which
    /// case the set is left unchanged.
    pub fn remove(&mut self, resource: ResourceType, quantity: u32) -> ResourceResult<()> {
        let available = self.get(resource);
        if quantity > available {
            return Err(ResourceError::Underflow {
                resource,
                requested: quantity,
                available,
            });
        }
        self.set(resource, available - quantity);
        Ok(())
    }

    /// Pointwise sum with another set.
    pub fn add_all(&mut self, other: &Resources) {
        for (resource, quantity) in other.iter() {
            self.add(resource, quantity);
        }
    }

    /// Add every quantity of `other`, failing instead of overflowing.
    ///
    /// The set is left unchanged on error.
    pub fn try_add_all(&mut self, other: &Resources) -> ResourceResult<()> {
        for (resource, quantity) in other.iter() {
            if self.get(resource).checked_add(quantity).is_none() {
                return Err(ResourceError::Overflow { resource });
            }
        }
        self.add_all(other);
        Ok(())
    }

    /// True iff every quantity of `other` is covered by this set.
    #[must_use]
    pub fn contains(&self, other: &Resources) -> bool {
        other.iter().all(|(resource, quantity)| self.get(resource) >= quantity)
    }

    /// Pointwise difference, clamped at zero for each type.
    #[must_use]
    pub fn minus(&self, other: &Resources) -> Resources {
        self.iter()
            .map(|(resource, quantity)| (resource, quantity.saturating_sub(other.get(resource))))
            .collect()
    }

    /// Total number of resource units.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.quantities.values().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Iterate over held `(type, quantity)` pairs in canonical type order.
    pub fn iter(&self) -> impl Iterator<Item = (ResourceType, u32)> + '_ {
        ResourceType::ALL
            .into_iter()
            .filter_map(move |resource| self.quantities.get(&resource).map(|&q| (resource, q)))
    }

    fn set(&mut self, resource: ResourceType, quantity: u32) {
        if quantity == 0 {
            self.quantities.remove(&resource);
        } else {
            self.quantities.insert(resource, quantity);
        }
    }
}

impl Hash for Resources {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for (resource, quantity) in self.iter() {
            resource.hash(state);
            quantity.hash(state);
        }
    }
}

impl From<FxHashMap<ResourceType, u32>> for Resources {
    fn from(quantities: FxHashMap<ResourceType, u32>) -> Self {
        quantities.into_iter().collect()
    }
}

impl From<Resources> for FxHashMap<ResourceType, u32> {
    fn from(resources: Resources) -> Self {
        resources.quantities
    }
}

impl FromIterator<(ResourceType, u32)> for Resources {
    fn from_iter<I: IntoIterator<Item = (ResourceType, u32)>>(iter: I) -> Self {
        let mut resources = Resources::new();
        resources.extend(iter);
        resources
    }
}

impl Extend<(ResourceType, u32)> for Resources {
    fn extend<I: IntoIterator<Item = (ResourceType, u32)>>(&mut self, iter: I) {
        for (resource, quantity) in iter {
            self.add(resource, quantity);
        }
    }
}

impl AddAssign<&Resources> for Resources {
    fn add_assign(&mut self, rhs: &Resources) {
        self.add_all(rhs);
    }
}

impl std::fmt::Display for Resources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        let mut first = true;
        for (resource, quantity) in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}{}", quantity, resource.symbol())?;
            first = false;
        }
        Ok(())
    }
}
