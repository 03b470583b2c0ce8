//! Seating players around a table.
//!
//! Players sit in a ring. Each seat trades with the previous seat (left)
//! and the next seat (right). The table resolves costs against the right
//! neighbors and commits successful builds, which is the only place a
//! player's built cards grow.

use super::player::Player;
use super::quote::BuildQuote;
use crate::cards::{Card, Side};
use crate::core::{SeatId, SeatMap, TradeRules};
use crate::error::TradeError;

/// Most seats a table can hold.
pub const MAX_SEATS: usize = u8::MAX as usize;

/// Players seated in a ring, with the trade rules they play under.
///
/// ## Example
///
/// ```
/// use wonders_trade::cards::{Card, Resource};
/// use wonders_trade::core::{SeatId, TradeRules};
/// use wonders_trade::players::{Civilization, Player, Table};
///
/// let players = vec![
///     Player::new(Civilization::new("Rhodos", Resource::material("ore"))),
///     Player::new(Civilization::new("Giza", Resource::material("stone"))),
///     Player::new(Civilization::new("Babylon", Resource::material("clay"))),
/// ];
/// let mut table = Table::new(players, TradeRules::default()).unwrap();
///
/// let wall = Card::basic("Wall").with_requirement(Resource::material("stone"));
/// let quote = table.try_build(SeatId::new(0), wall).unwrap();
/// assert_eq!(quote.total_cost(), 0);
/// assert!(table.player(SeatId::new(0)).unwrap().has_built("Wall"));
/// ```
#[derive(Clone, Debug)]
pub struct Table {
    seats: SeatMap<Player>,
    rules: TradeRules,
}

impl Table {
    /// Seat `players` in order. Needs between 2 and 255 players.
    pub fn new(players: Vec<Player>, rules: TradeRules) -> Result<Self, TradeError> {
        if players.len() < 2 {
            return Err(TradeError::TooFewSeats(players.len()));
        }
        if players.len() > MAX_SEATS {
            return Err(TradeError::TooManySeats(players.len()));
        }
        Ok(Self {
            seats: SeatMap::from_vec(players),
            rules,
        })
    }

    /// Number of seats.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.seats.seat_count()
    }

    /// Trade rules in force.
    #[must_use]
    pub fn rules(&self) -> &TradeRules {
        &self.rules
    }

    /// The player at `seat`.
    #[must_use]
    pub fn player(&self, seat: SeatId) -> Option<&Player> {
        self.seats.get(seat)
    }

    /// Iterate over seats and their players.
    pub fn players(&self) -> impl Iterator<Item = (SeatId, &Player)> {
        self.seats.iter()
    }

    /// Seat to the left of `seat`.
    #[must_use]
    pub fn left_of(&self, seat: SeatId) -> SeatId {
        seat.neighbor(Side::Left, self.seat_count())
    }

    /// Seat to the right of `seat`.
    #[must_use]
    pub fn right_of(&self, seat: SeatId) -> SeatId {
        seat.neighbor(Side::Right, self.seat_count())
    }

    /// Itemized cost for `seat` to build `card`. `Ok(None)` means the card
    /// cannot be built.
    pub fn quote(&self, seat: SeatId, card: &Card) -> Result<Option<BuildQuote>, TradeError> {
        let player = self.checked(seat)?;
        let left = self.seats.neighbor(seat, Side::Left);
        let right = self.seats.neighbor(seat, Side::Right);
        Ok(player.quote_with_rules(&self.rules, card, left, right))
    }

    /// Cost for `seat` to build `card`. `Ok(None)` means the card cannot
    /// be built.
    pub fn build_cost(&self, seat: SeatId, card: &Card) -> Result<Option<u32>, TradeError> {
        Ok(self.quote(seat, card)?.map(|quote| quote.total_cost()))
    }

    /// Resolve the cost for `seat` and, if the card can be built, add it to
    /// that player's built cards.
    pub fn try_build(&mut self, seat: SeatId, card: Card) -> Result<BuildQuote, TradeError> {
        let Some(quote) = self.quote(seat, &card)? else {
            return Err(TradeError::Unbuildable {
                seat,
                card: card.name().to_string(),
            });
        };

        let seat_count = self.seat_count();
        let player = self
            .seats
            .get_mut(seat)
            .ok_or(TradeError::UnknownSeat { seat, seat_count })?;

        tracing::info!(
            %seat,
            card = card.name(),
            cost = quote.total_cost(),
            chained = quote.is_chained(),
            "committed build"
        );
        player.commit_build(card);
        Ok(quote)
    }

    fn checked(&self, seat: SeatId) -> Result<&Player, TradeError> {
        self.seats.get(seat).ok_or(TradeError::UnknownSeat {
            seat,
            seat_count: self.seat_count(),
        })
    }
}
