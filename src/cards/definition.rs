//! Card definitions - immutable buildable units.
//!
//! A `Card` carries what it costs (`required_resources`), an optional
//! chaining predecessor that makes it free, and a `CardKind` deciding what
//! it yields once built. Card kinds are a closed set, so `production` and
//! `has_discount_for` are exhaustive matches rather than trait objects.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::resource::{Resource, ResourceCategory, ResourceCounts};

/// A neighbor's position relative to the player trading with them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Neighbor on the left.
    Left,
    /// Neighbor on the right.
    Right,
}

impl Side {
    /// Both sides, left first.
    pub const ALL: [Side; 2] = [Side::Left, Side::Right];
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// A subset of {Left, Right}.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideSet {
    /// Includes the left neighbor.
    pub left: bool,
    /// Includes the right neighbor.
    pub right: bool,
}

impl SideSet {
    /// No side.
    pub const NONE: SideSet = SideSet { left: false, right: false };
    /// Left neighbor only.
    pub const LEFT: SideSet = SideSet { left: true, right: false };
    /// Right neighbor only.
    pub const RIGHT: SideSet = SideSet { left: false, right: true };
    /// Both neighbors.
    pub const BOTH: SideSet = SideSet { left: true, right: true };

    /// Check whether `side` is in the set.
    #[must_use]
    pub const fn contains(self, side: Side) -> bool {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Check whether the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        !self.left && !self.right
    }
}

impl FromIterator<Side> for SideSet {
    fn from_iter<I: IntoIterator<Item = Side>>(iter: I) -> Self {
        iter.into_iter().fold(SideSet::NONE, |mut set, side| {
            match side {
                Side::Left => set.left = true,
                Side::Right => set.right = true,
            }
            set
        })
    }
}

/// What a card does once built.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CardKind {
    /// Neither produces nor discounts.
    #[default]
    Basic,
    /// Produces `amount` units of `resource` every turn.
    Production {
        /// The produced resource.
        resource: Resource,
        /// Units produced.
        amount: u32,
    },
    /// Changes the price of trading `category` with neighbors on `sides`.
    Commercial {
        /// Discounted category.
        category: ResourceCategory,
        /// Sides the discount applies to.
        sides: SideSet,
    },
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use wonders_trade::cards::{Card, Resource};
///
/// let wood = Resource::material("wood");
/// let sawmill = Card::producer("Sawmill", wood.clone(), 2)
///     .with_requirement(Resource::material("ore"))
///     .with_chain("Lumber Yard");
///
/// assert_eq!(sawmill.production()[&wood], 2);
/// assert_eq!(sawmill.chained_from(), Some("Lumber Yard"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    name: String,

    #[serde(default)]
    required_resources: SmallVec<[Resource; 4]>,

    #[serde(default)]
    chained_from: Option<String>,

    #[serde(default)]
    kind: CardKind,
}

impl Card {
    /// Create a card of the given kind with no requirements.
    pub fn new(name: impl Into<String>, kind: CardKind) -> Self {
        Self {
            name: name.into(),
            required_resources: SmallVec::new(),
            chained_from: None,
            kind,
        }
    }

    /// A card that neither produces nor discounts.
    pub fn basic(name: impl Into<String>) -> Self {
        Self::new(name, CardKind::Basic)
    }

    /// A card producing `amount` units of `resource`.
    pub fn producer(name: impl Into<String>, resource: Resource, amount: u32) -> Self {
        Self::new(name, CardKind::Production { resource, amount })
    }

    /// A commercial card for `category` on `sides`.
    pub fn commercial(name: impl Into<String>, category: ResourceCategory, sides: SideSet) -> Self {
        Self::new(name, CardKind::Commercial { category, sides })
    }

    /// Add one required unit of `resource` (builder pattern).
    #[must_use]
    pub fn with_requirement(mut self, resource: Resource) -> Self {
        self.required_resources.push(resource);
        self
    }

    /// Add several required units (builder pattern). Duplicates mean
    /// several units of the same resource.
    #[must_use]
    pub fn with_requirements(mut self, resources: impl IntoIterator<Item = Resource>) -> Self {
        self.required_resources.extend(resources);
        self
    }

    /// Make this card free once `predecessor` is built (builder pattern).
    #[must_use]
    pub fn with_chain(mut self, predecessor: impl Into<String>) -> Self {
        self.chained_from = Some(predecessor.into());
        self
    }

    /// Card name, unique within a registry.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Required resources, in payment order.
    #[must_use]
    pub fn required_resources(&self) -> &[Resource] {
        &self.required_resources
    }

    /// Name of the card that makes this one free, if any.
    #[must_use]
    pub fn chained_from(&self) -> Option<&str> {
        self.chained_from.as_deref()
    }

    /// What this card does once built.
    #[must_use]
    pub fn kind(&self) -> &CardKind {
        &self.kind
    }

    /// Resources this card yields per turn. Empty for non-producing cards.
    #[must_use]
    pub fn production(&self) -> ResourceCounts {
        let mut counts = ResourceCounts::default();
        if let CardKind::Production { resource, amount } = &self.kind {
            counts.insert(resource.clone(), *amount);
        }
        counts
    }

    /// Whether this card changes the price of `category` bought from `side`.
    #[must_use]
    pub fn has_discount_for(&self, category: ResourceCategory, side: Side) -> bool {
        match &self.kind {
            CardKind::Commercial {
                category: own,
                sides,
            } => *own == category && sides.contains(side),
            CardKind::Basic | CardKind::Production { .. } => false,
        }
    }
}
