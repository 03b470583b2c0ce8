//! Players, their civilizations, build quotes and the table they sit at.
//!
//! ## Key Types
//!
//! - `Civilization`: fixed one-unit baseline production
//! - `Player`: built cards, derived production, build-cost resolution
//! - `BuildQuote`: itemized outcome of a successful resolution
//! - `Table`: ring seating that pairs each player with its neighbors

pub mod civilization;
pub mod player;
pub mod quote;
pub mod table;

pub use civilization::Civilization;
pub use player::Player;
pub use quote::BuildQuote;
pub use table::Table;
