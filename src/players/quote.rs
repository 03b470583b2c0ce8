//! Build quotes - the itemized result of a successful cost resolution.

use smallvec::SmallVec;

use crate::cards::Side;
use crate::production::{Payment, Source};

/// How a card can be built, and what it costs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuildQuote {
    /// Free, because `predecessor` is already built. Nothing is consumed.
    Chained {
        /// Name of the already-built card.
        predecessor: String,
    },
    /// Every required unit bought, in requirement order.
    Purchased {
        /// One payment per required unit.
        payments: SmallVec<[Payment; 4]>,
    },
}

impl BuildQuote {
    /// Total price of the build. Saturates at `u32::MAX`.
    #[must_use]
    pub fn total_cost(&self) -> u32 {
        saturating_total(self.payments().iter())
    }

    /// Units bought. Empty for chained builds.
    #[must_use]
    pub fn payments(&self) -> &[Payment] {
        match self {
            BuildQuote::Chained { .. } => &[],
            BuildQuote::Purchased { payments } => payments.as_slice(),
        }
    }

    /// Whether the build is free through chaining.
    #[must_use]
    pub fn is_chained(&self) -> bool {
        matches!(self, BuildQuote::Chained { .. })
    }

    /// Amount owed to the neighbor on `side`. Saturates at `u32::MAX`.
    #[must_use]
    pub fn paid_to(&self, side: Side) -> u32 {
        saturating_total(
            self.payments()
                .iter()
                .filter(|p| p.source == Source::Neighbor(side)),
        )
    }

    /// Units taken from `source`, whatever they cost.
    #[must_use]
    pub fn units_from(&self, source: Source) -> usize {
        self.payments().iter().filter(|p| p.source == source).count()
    }
}

fn saturating_total<'a>(payments: impl Iterator<Item = &'a Payment>) -> u32 {
    payments.fold(0, |total, p| total.saturating_add(p.cost))
}
