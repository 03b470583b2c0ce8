//! Trade pricing configuration.
//!
//! `TradeRules` sets the price of one resource unit per source. The
//! defaults give the flat 0/1 scale: own production and plain neighbor
//! trades are free, and a neighbor trade costs 1 when the buyer holds a
//! commercial card for that category and side.

use serde::{Deserialize, Serialize};

use crate::error::TradeError;

/// Per-unit prices used while resolving a build cost.
///
/// ## Example
///
/// ```
/// use wonders_trade::core::TradeRules;
///
/// let rules = TradeRules::from_json(r#"{ "neighbor_price": 2 }"#).unwrap();
/// assert_eq!(rules.neighbor_price, 2);
/// assert_eq!(rules.discounted_neighbor_price, 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradeRules {
    /// Price of a unit from the buyer's own production.
    pub own_price: u32,

    /// Price of a unit bought from a neighbor with no matching commercial card.
    pub neighbor_price: u32,

    /// Price of a unit bought from a neighbor when the buyer holds a
    /// commercial card for the resource's category on that side.
    pub discounted_neighbor_price: u32,
}

impl Default for TradeRules {
    fn default() -> Self {
        Self {
            own_price: 0,
            neighbor_price: 0,
            discounted_neighbor_price: 1,
        }
    }
}

impl TradeRules {
    /// Parse rules from JSON. Missing fields keep their default.
    pub fn from_json(json: &str) -> Result<Self, TradeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the plain neighbor price.
    #[must_use]
    pub fn with_neighbor_price(mut self, price: u32) -> Self {
        self.neighbor_price = price;
        self
    }

    /// Set the discounted neighbor price.
    #[must_use]
    pub fn with_discounted_neighbor_price(mut self, price: u32) -> Self {
        self.discounted_neighbor_price = price;
        self
    }
}
