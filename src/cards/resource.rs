//! Tradable resources.
//!
//! A `Resource` is a plain value: two resources with the same name and
//! category are the same good and are interchangeable in any pool.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Broad category of a resource. Commercial cards discount by category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceCategory {
    /// Raw materials (wood, stone, ore, clay).
    Material,
    /// Finished goods (glass, papyrus, loom).
    Goods,
}

impl std::fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceCategory::Material => f.write_str("material"),
            ResourceCategory::Goods => f.write_str("goods"),
        }
    }
}

/// A tradable good.
///
/// ```
/// use wonders_trade::cards::{Resource, ResourceCategory};
///
/// let wood = Resource::material("wood");
/// assert_eq!(wood, Resource::new("wood", ResourceCategory::Material));
/// assert_ne!(wood, Resource::goods("wood"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resource {
    /// Resource name.
    pub name: String,
    /// Resource category.
    pub category: ResourceCategory,
}

impl Resource {
    /// Create a resource.
    pub fn new(name: impl Into<String>, category: ResourceCategory) -> Self {
        Self {
            name: name.into(),
            category,
        }
    }

    /// Create a raw material.
    pub fn material(name: impl Into<String>) -> Self {
        Self::new(name, ResourceCategory::Material)
    }

    /// Create a finished good.
    pub fn goods(name: impl Into<String>) -> Self {
        Self::new(name, ResourceCategory::Goods)
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Quantity of each resource, as produced per turn or held in a pool.
pub type ResourceCounts = FxHashMap<Resource, u32>;
