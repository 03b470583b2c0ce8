//! Error types for the crate.
//!
//! An unbuildable card is a normal game outcome and is reported as `None`
//! by the cost resolver. `TradeError` covers the surfaces around it: card
//! authoring, rules loading, table seating and committing builds.

use crate::core::SeatId;

/// Errors returned by card registration, configuration loading and the table.
#[derive(Debug, thiserror::Error)]
pub enum TradeError {
    /// A card with this name is already registered.
    #[error("card {0:?} is already registered")]
    DuplicateCard(String),

    /// A card names itself as its chaining predecessor.
    #[error("card {0:?} cannot be chained from itself")]
    SelfChain(String),

    /// A production card yields nothing.
    #[error("production card {0:?} has a zero amount")]
    EmptyProduction(String),

    /// A commercial card grants its discount on no side.
    #[error("commercial card {0:?} grants no discount side")]
    NoDiscountSide(String),

    /// A table needs a neighbor on each side.
    #[error("a table needs at least 2 seats, got {0}")]
    TooFewSeats(usize),

    /// Seat ids are `u8`, so a table holds at most 255 seats.
    #[error("a table holds at most 255 seats, got {0}")]
    TooManySeats(usize),

    /// The seat does not exist at this table.
    #[error("{seat} is not at a table of {seat_count}")]
    UnknownSeat {
        /// The requested seat.
        seat: SeatId,
        /// Number of seats at the table.
        seat_count: usize,
    },

    /// At least one required resource could not be obtained.
    #[error("{seat} cannot build {card:?}: a required resource is unobtainable")]
    Unbuildable {
        /// The seat attempting the build.
        seat: SeatId,
        /// The card that could not be built.
        card: String,
    },

    /// Card or rules data failed to parse.
    #[error("invalid trade data: {0}")]
    Parse(#[from] serde_json::Error),
}
