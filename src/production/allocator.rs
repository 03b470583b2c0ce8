//! Greedy resource allocation across candidate pools.
//!
//! Each required unit is bought from the cheapest pool that still holds
//! it, one unit at a time. Choices are never revisited: once a unit is
//! taken, later units only see what is left.

use crate::cards::Resource;

use super::pool::{ProductionPool, Source};

/// One unit of resource taken from a pool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Payment {
    /// The resource bought.
    pub resource: Resource,
    /// Pool it was taken from.
    pub source: Source,
    /// Price paid for it.
    pub cost: u32,
}

/// Take one unit of `resource` from the cheapest pool that has it.
///
/// Pools without the resource are skipped. Among equally cheap pools the
/// earliest in `pools` wins. Returns `None`, leaving every pool untouched,
/// when no pool holds the resource.
pub fn take_cheapest(resource: &Resource, pools: &mut [ProductionPool<'_>]) -> Option<Payment> {
    let (index, cost) = pools
        .iter()
        .enumerate()
        .filter(|(_, pool)| pool.has(resource))
        .map(|(index, pool)| (index, pool.cost_for(resource)))
        .min_by_key(|&(_, cost)| cost)?;

    let pool = &mut pools[index];
    pool.consume(resource);

    let source = pool.source();
    tracing::trace!(%resource, %source, cost, "consumed resource");

    Some(Payment {
        resource: resource.clone(),
        source,
        cost,
    })
}

/// Take one unit of `resource` from the cheapest pool and return its price.
///
/// ```
/// use wonders_trade::cards::{Resource, ResourceCounts};
/// use wonders_trade::core::TradeRules;
/// use wonders_trade::production::{try_consume_resource, ProductionPool};
///
/// let stone = Resource::material("stone");
/// let mut counts = ResourceCounts::default();
/// counts.insert(stone.clone(), 1);
///
/// let mut pools = [ProductionPool::own(counts, TradeRules::default())];
/// assert_eq!(try_consume_resource(&stone, &mut pools), Some(0));
/// assert_eq!(try_consume_resource(&stone, &mut pools), None);
/// ```
pub fn try_consume_resource(resource: &Resource, pools: &mut [ProductionPool<'_>]) -> Option<u32> {
    take_cheapest(resource, pools).map(|payment| payment.cost)
}
