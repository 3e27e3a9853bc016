//! Seats at the table.
//!
//! A game seats 2 to 4 players. `PlayerId` is the seat index and
//! `PlayerMap` keeps one value per seat (a kingdom, a score) in seat order.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat index, starting at `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Every seat of a `player_count` table, in order.
    ///
    /// ```
    /// use kingdomino_engine::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(seats, vec![PlayerId(0), PlayerId(1), PlayerId(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One value per seat.
///
/// ```
/// use kingdomino_engine::core::{PlayerId, PlayerMap};
///
/// let mut scores: PlayerMap<u32> = PlayerMap::new(2, |_| 0);
/// scores[PlayerId::new(1)] = 14;
///
/// let doubled = scores.map(|_, score| score * 2);
/// assert_eq!(doubled[PlayerId::new(1)], 28);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    seats: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Fill every seat from `factory`, called once per seat in order.
    pub fn new(player_count: usize, factory: impl FnMut(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "A table needs at least one seat");
        assert!(player_count <= usize::from(u8::MAX), "At most 255 seats supported");

        Self {
            seats: PlayerId::all(player_count).map(factory).collect(),
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.len()
    }

    /// Is `player` seated here?
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.index() < self.seats.len()
    }

    /// Panics if `player` is not seated here.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        self.seats
            .get(player.index())
            .unwrap_or_else(|| panic!("{} is not seated at this table", player))
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        let seats = self.seats.len();
        self.seats
            .get_mut(player.index())
            .unwrap_or_else(|| panic!("{} is not seated at a {} seat table", player, seats))
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.seats
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// A new map holding `f(seat, value)` for every seat.
    pub fn map<U>(&self, mut f: impl FnMut(PlayerId, &T) -> U) -> PlayerMap<U> {
        PlayerMap {
            seats: self.iter().map(|(id, value)| f(id, value)).collect(),
        }
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
