//! Seat identification and per-seat data storage.
//!
//! ## SeatId
//!
//! Type-safe seat identifier supporting 2-255 seats around a table.
//!
//! ## SeatMap
//!
//! Per-seat storage backed by `Vec` for O(1) access, with ring-aware
//! neighbor lookup.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::cards::Side;

/// Seat identifier supporting up to 255 seats.
///
/// Seat indices are 0-based: the first seat is `SeatId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatId(pub u8);

impl SeatId {
    /// Create a new seat ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat next to this one on `side`, in a ring of `seat_count` seats.
    ///
    /// The left neighbor is the previous seat, the right neighbor the next.
    ///
    /// ```
    /// use wonders_trade::cards::Side;
    /// use wonders_trade::core::SeatId;
    ///
    /// assert_eq!(SeatId::new(0).neighbor(Side::Left, 4), SeatId::new(3));
    /// assert_eq!(SeatId::new(3).neighbor(Side::Right, 4), SeatId::new(0));
    /// ```
    #[must_use]
    pub fn neighbor(self, side: Side, seat_count: usize) -> SeatId {
        let index = self.index();
        let next = match side {
            Side::Left => (index + seat_count - 1) % seat_count,
            Side::Right => (index + 1) % seat_count,
        };
        SeatId(next as u8)
    }
}

impl std::fmt::Display for SeatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per seat.
///
/// ## Example
///
/// ```
/// use wonders_trade::core::{SeatId, SeatMap};
///
/// let mut coins = SeatMap::from_vec(vec![3, 3, 3]);
/// if let Some(purse) = coins.get_mut(SeatId::new(1)) {
///     *purse += 2;
/// }
/// assert_eq!(coins[SeatId::new(1)], 5);
/// assert_eq!(coins.get(SeatId::new(3)), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: Vec<T>,
}

impl<T> SeatMap<T> {
    /// Take ownership of one value per seat, in seat order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 seat");
        assert!(data.len() <= 255, "At most 255 seats supported");
        Self { data }
    }

    /// Get the number of seats.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.data.len()
    }

    /// Get a seat's data, if the seat exists.
    #[must_use]
    pub fn get(&self, seat: SeatId) -> Option<&T> {
        self.data.get(seat.index())
    }

    /// Get a mutable reference to a seat's data, if the seat exists.
    pub fn get_mut(&mut self, seat: SeatId) -> Option<&mut T> {
        self.data.get_mut(seat.index())
    }

    /// The data of the seat next to `seat` on `side`.
    #[must_use]
    pub fn neighbor(&self, seat: SeatId, side: Side) -> &T {
        &self[seat.neighbor(side, self.seat_count())]
    }

    /// Iterate over (SeatId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (SeatId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (SeatId(i as u8), v))
    }
}

impl<T> Index<SeatId> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: SeatId) -> &Self::Output {
        &self.data[seat.index()]
    }
}
