//! Production pools - ephemeral, priced multisets of resource units.
//!
//! A pool is seeded from one player's production snapshot when a build
//! attempt starts and dropped when it ends. Its counts are private; the
//! only mutation is `consume`, which takes exactly one unit.

use crate::cards::{Card, Resource, ResourceCounts, Side};
use crate::core::TradeRules;

/// Where a unit of resource came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Source {
    /// The buyer's own production.
    Own,
    /// A neighbor's production.
    Neighbor(Side),
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Own => f.write_str("own"),
            Source::Neighbor(side) => write!(f, "{side} neighbor"),
        }
    }
}

/// How a pool prices its units.
#[derive(Clone, Copy, Debug)]
pub enum Pricing<'a> {
    /// The buyer's own production.
    Own,
    /// A neighbor's production. `buyer_cards` are the cards of the player
    /// buying, which decide whether the discounted price applies.
    Neighbor {
        /// Which neighbor this pool belongs to.
        side: Side,
        /// Cards built by the buyer.
        buyer_cards: &'a [Card],
    },
}

/// A priced multiset of resource units available to one build attempt.
///
/// ## Example
///
/// ```
/// use wonders_trade::cards::{Resource, ResourceCounts};
/// use wonders_trade::core::TradeRules;
/// use wonders_trade::production::ProductionPool;
///
/// let wood = Resource::material("wood");
/// let mut counts = ResourceCounts::default();
/// counts.insert(wood.clone(), 1);
///
/// let mut pool = ProductionPool::own(counts, TradeRules::default());
/// assert!(pool.has(&wood));
/// pool.consume(&wood);
/// assert!(!pool.has(&wood));
/// ```
#[derive(Clone, Debug)]
pub struct ProductionPool<'a> {
    remaining: ResourceCounts,
    pricing: Pricing<'a>,
    rules: TradeRules,
    consumed: u32,
}

impl<'a> ProductionPool<'a> {
    /// Create a pool seeded with `production`.
    pub fn new(production: ResourceCounts, pricing: Pricing<'a>, rules: TradeRules) -> Self {
        Self {
            remaining: production,
            pricing,
            rules,
            consumed: 0,
        }
    }

    /// A pool over the buyer's own production.
    pub fn own(production: ResourceCounts, rules: TradeRules) -> Self {
        Self::new(production, Pricing::Own, rules)
    }

    /// A pool over the production of the neighbor on `side`.
    pub fn neighbor(
        production: ResourceCounts,
        side: Side,
        buyer_cards: &'a [Card],
        rules: TradeRules,
    ) -> Self {
        Self::new(production, Pricing::Neighbor { side, buyer_cards }, rules)
    }

    /// Check whether at least one unit of `resource` remains.
    #[must_use]
    pub fn has(&self, resource: &Resource) -> bool {
        self.available(resource) > 0
    }

    /// Units of `resource` still available.
    #[must_use]
    pub fn available(&self, resource: &Resource) -> u32 {
        self.remaining.get(resource).copied().unwrap_or(0)
    }

    /// Price of one unit of `resource` from this pool.
    #[must_use]
    pub fn cost_for(&self, resource: &Resource) -> u32 {
        match self.pricing {
            Pricing::Own => self.rules.own_price,
            Pricing::Neighbor { side, buyer_cards } => {
                let discounted = buyer_cards
                    .iter()
                    .any(|card| card.has_discount_for(resource.category, side));
                if discounted {
                    self.rules.discounted_neighbor_price
                } else {
                    self.rules.neighbor_price
                }
            }
        }
    }

    /// Where units from this pool come from.
    #[must_use]
    pub fn source(&self) -> Source {
        match self.pricing {
            Pricing::Own => Source::Own,
            Pricing::Neighbor { side, .. } => Source::Neighbor(side),
        }
    }

    /// Take one unit of `resource`.
    ///
    /// # Panics
    ///
    /// Panics if the pool has no unit left. Callers must check `has` first.
    pub fn consume(&mut self, resource: &Resource) {
        assert!(
            self.has(resource),
            "pool underflow: no {resource} left in {} pool",
            self.source()
        );
        if let Some(count) = self.remaining.get_mut(resource) {
            *count -= 1;
        }
        self.consumed += 1;
    }

    /// Units taken from this pool so far.
    #[must_use]
    pub fn consumed(&self) -> u32 {
        self.consumed
    }
}
