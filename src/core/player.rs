//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! The two seats of a Kuba game. Each is bound to one marble color for the
//! whole game: PlayerA plays White, PlayerB plays Black.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `Player`, used for capture tallies and
//! other per-player counters.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::cell::Cell;

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Plays the White marbles.
    A,
    /// Plays the Black marbles.
    B,
}

impl Player {
    /// Both players, in seat order.
    pub const ALL: [Player; 2] = [Player::A, Player::B];

    /// Get the seat index (0 for PlayerA, 1 for PlayerB).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }

    /// Get the other player.
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// The marble color this player owns.
    ///
    /// ```
    /// use kuba::{Cell, Player};
    ///
    /// assert_eq!(Player::A.marble(), Cell::White);
    /// assert_eq!(Player::B.marble(), Cell::Black);
    /// ```
    #[must_use]
    pub const fn marble(self) -> Cell {
        match self {
            Player::A => Cell::White,
            Player::B => Cell::Black,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::A => write!(f, "PlayerA"),
            Player::B => write!(f, "PlayerB"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use kuba::{Player, PlayerMap};
///
/// let mut captures: PlayerMap<u32> = PlayerMap::default();
/// captures[Player::B] += 1;
///
/// assert_eq!(captures[Player::A], 0);
/// assert_eq!(captures[Player::B], 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::A), factory(Player::B)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
