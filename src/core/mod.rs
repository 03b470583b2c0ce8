//! Core types shared by every module: seating and trade configuration.

pub mod config;
pub mod seat;

pub use config::TradeRules;
pub use seat::{SeatId, SeatMap};
