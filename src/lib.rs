//! # wonders-trade
//!
//! The economic core of a card-drafting civilization game: what does it
//! cost a player to build a card, given their own production and what
//! their two neighbors can sell them?
//!
//! ## Resolution
//!
//! 1. If the player already built the card's chaining predecessor, the
//!    card is free.
//! 2. Otherwise three pools are snapshotted: the player's own production
//!    and each neighbor's. Each required unit is bought from the cheapest
//!    pool that still has it; a unit no pool has makes the card
//!    unbuildable.
//!
//! The per-unit choice is greedy and never revisited. Pool counts are kept
//! per resource and prices depend only on pool and category, so buying the
//! cheapest unit first is also the cheapest total for the card.
//!
//! ## Modules
//!
//! - `core`: Seating and trade pricing rules
//! - `cards`: Resources, card definitions, and the card registry
//! - `production`: Production pools and the greedy allocator
//! - `players`: Civilizations, players, build quotes, and the table
//! - `error`: Error type for authoring, configuration, and table actions

pub mod cards;
pub mod core;
pub mod error;
pub mod players;
pub mod production;

// Re-export commonly used types
pub use crate::core::{SeatId, SeatMap, TradeRules};

pub use crate::cards::{
    Card, CardKind, CardRegistry, Resource, ResourceCategory, ResourceCounts, Side, SideSet,
};

pub use crate::production::{
    take_cheapest, try_consume_resource, Payment, Pricing, ProductionPool, Source,
};

pub use crate::players::{BuildQuote, Civilization, Player, Table};

pub use crate::error::TradeError;
