//! Production pools and the greedy allocator that buys from them.
//!
//! - `ProductionPool`: one trading partner's remaining units and their price
//! - `try_consume_resource` / `take_cheapest`: buy one unit at the best price

pub mod allocator;
pub mod pool;

pub use allocator::{take_cheapest, try_consume_resource, Payment};
pub use pool::{Pricing, ProductionPool, Source};
