//! Players and build-cost resolution.
//!
//! A player's production is derived on demand from its civilization and
//! built cards. Resolving a build cost never changes the player: the
//! pools it buys from are snapshots dropped at the end of the call.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::civilization::Civilization;
use super::quote::BuildQuote;
use crate::cards::{Card, ResourceCounts, Side};
use crate::core::TradeRules;
use crate::production::{take_cheapest, ProductionPool};

/// A player: a fixed civilization and the cards built so far.
///
/// ## Example
///
/// ```
/// use wonders_trade::cards::{Card, Resource};
/// use wonders_trade::players::{Civilization, Player};
///
/// let wood = Resource::material("wood");
/// let stone = Resource::material("stone");
///
/// let me = Player::new(Civilization::new("Rhodos", wood.clone()));
/// let left = Player::new(Civilization::new("Giza", stone.clone()));
/// let right = Player::new(Civilization::new("Ephesos", Resource::goods("papyrus")));
///
/// let wall = Card::basic("Wall").with_requirements([wood, stone]);
/// assert_eq!(me.build_cost(&wall, &left, &right), Some(0));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    civilization: Civilization,
    built_cards: Vec<Card>,
}

impl Player {
    /// Create a player with no built cards.
    #[must_use]
    pub fn new(civilization: Civilization) -> Self {
        Self {
            civilization,
            built_cards: Vec::new(),
        }
    }

    /// The player's civilization.
    #[must_use]
    pub fn civilization(&self) -> &Civilization {
        &self.civilization
    }

    /// Cards built so far, in build order.
    #[must_use]
    pub fn built_cards(&self) -> &[Card] {
        &self.built_cards
    }

    /// Check whether a card named `name` has been built.
    #[must_use]
    pub fn has_built(&self, name: &str) -> bool {
        self.built_cards.iter().any(|c| c.name() == name)
    }

    /// Resources produced per turn: one unit from the civilization plus
    /// everything the built cards produce. Counts saturate at `u32::MAX`.
    #[must_use]
    pub fn production(&self) -> ResourceCounts {
        let mut result = ResourceCounts::default();
        result.insert(self.civilization.produced_resource.clone(), 1);

        for card in &self.built_cards {
            for (resource, amount) in card.production() {
                let count = result.entry(resource).or_insert(0);
                *count = count.saturating_add(amount);
            }
        }
        result
    }

    /// Record `card` as built. Does not check affordability.
    pub fn commit_build(&mut self, card: Card) {
        self.built_cards.push(card);
    }

    /// Cost of building `card` with the default trade rules, or `None` if
    /// some required resource cannot be obtained.
    #[must_use]
    pub fn build_cost(
        &self,
        card: &Card,
        left_neighbor: &Player,
        right_neighbor: &Player,
    ) -> Option<u32> {
        self.quote(card, left_neighbor, right_neighbor)
            .map(|quote| quote.total_cost())
    }

    /// Itemized build with the default trade rules.
    #[must_use]
    pub fn quote(
        &self,
        card: &Card,
        left_neighbor: &Player,
        right_neighbor: &Player,
    ) -> Option<BuildQuote> {
        self.quote_with_rules(&TradeRules::default(), card, left_neighbor, right_neighbor)
    }

    /// Itemized build under `rules`.
    ///
    /// A built chaining predecessor makes the card free without touching
    /// any production. Otherwise each required unit is bought greedily,
    /// in order, from own production first among equal prices, then left,
    /// then right.
    #[must_use]
    pub fn quote_with_rules(
        &self,
        rules: &TradeRules,
        card: &Card,
        left_neighbor: &Player,
        right_neighbor: &Player,
    ) -> Option<BuildQuote> {
        if let Some(predecessor) = self.chaining_predecessor(card) {
            tracing::debug!(card = card.name(), predecessor, "build is free through chaining");
            return Some(BuildQuote::Chained {
                predecessor: predecessor.to_string(),
            });
        }

        let buyer_cards = &self.built_cards;
        let mut pools = [
            ProductionPool::own(self.production(), *rules),
            ProductionPool::neighbor(left_neighbor.production(), Side::Left, buyer_cards, *rules),
            ProductionPool::neighbor(right_neighbor.production(), Side::Right, buyer_cards, *rules),
        ];

        let mut payments = SmallVec::with_capacity(card.required_resources().len());
        for resource in card.required_resources() {
            let Some(payment) = take_cheapest(resource, &mut pools) else {
                tracing::debug!(card = card.name(), %resource, "required resource is unobtainable");
                return None;
            };
            payments.push(payment);
        }

        let quote = BuildQuote::Purchased { payments };
        tracing::debug!(card = card.name(), cost = quote.total_cost(), "resolved build cost");
        Some(quote)
    }

    fn chaining_predecessor<'a>(&self, card: &'a Card) -> Option<&'a str> {
        card.chained_from().filter(|name| self.has_built(name))
    }
}
