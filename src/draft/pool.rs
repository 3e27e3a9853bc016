//! The domino pool.
//!
//! Holds the undrafted dominoes of a game. The standard set is 48 pieces,
//! ranked 1-48 by the number on their backs; every piece is drawn at most
//! once per game.

use serde::{Deserialize, Serialize};

use crate::board::Landscape::{self, Bog, Forest, Mine, Pasture, Water, Wheat};
use crate::board::{Domino, Tile};
use crate::core::GameRng;

/// Number of pieces in the standard set.
pub const STANDARD_SET_SIZE: usize = 48;

/// Printed faces of one domino.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DominoFace {
    pub rank: u8,
    pub left: (Landscape, u8),
    pub right: (Landscape, u8),
}

impl DominoFace {
    /// Build the playable piece, at 0 degrees.
    #[must_use]
    pub fn to_domino(&self) -> Domino {
        Domino::new(
            Tile::new(self.left.0, self.left.1),
            Tile::new(self.right.0, self.right.1),
            self.rank,
        )
    }
}

const fn face(
    rank: u8,
    left: Landscape,
    left_crowns: u8,
    right: Landscape,
    right_crowns: u8,
) -> DominoFace {
    DominoFace {
        rank,
        left: (left, left_crowns),
        right: (right, right_crowns),
    }
}

/// The standard set, in rank order.
pub const STANDARD_SET: [DominoFace; STANDARD_SET_SIZE] = [
    face(1, Wheat, 0, Wheat, 0),
    face(2, Wheat, 0, Wheat, 0),
    face(3, Forest, 0, Forest, 0),
    face(4, Forest, 0, Forest, 0),
    face(5, Forest, 0, Forest, 0),
    face(6, Forest, 0, Forest, 0),
    face(7, Water, 0, Water, 0),
    face(8, Water, 0, Water, 0),
    face(9, Water, 0, Water, 0),
    face(10, Pasture, 0, Pasture, 0),
    face(11, Pasture, 0, Pasture, 0),
    face(12, Bog, 0, Bog, 0),
    face(13, Wheat, 0, Forest, 0),
    face(14, Wheat, 0, Water, 0),
    face(15, Wheat, 0, Pasture, 0),
    face(16, Wheat, 0, Bog, 0),
    face(17, Forest, 0, Water, 0),
    face(18, Forest, 0, Pasture, 0),
    face(19, Wheat, 1, Forest, 0),
    face(20, Wheat, 1, Water, 0),
    face(21, Wheat, 1, Pasture, 0),
    face(22, Wheat, 1, Bog, 0),
    face(23, Wheat, 1, Mine, 0),
    face(24, Forest, 1, Wheat, 0),
    face(25, Forest, 1, Wheat, 0),
    face(26, Forest, 1, Wheat, 0),
    face(27, Forest, 1, Wheat, 0),
    face(28, Forest, 1, Water, 0),
    face(29, Forest, 1, Pasture, 0),
    face(30, Water, 1, Wheat, 0),
    face(31, Water, 1, Wheat, 0),
    face(32, Water, 1, Forest, 0),
    face(33, Water, 1, Forest, 0),
    face(34, Water, 1, Forest, 0),
    face(35, Water, 1, Forest, 0),
    face(36, Wheat, 0, Pasture, 1),
    face(37, Water, 0, Pasture, 1),
    face(38, Wheat, 0, Bog, 1),
    face(39, Pasture, 0, Bog, 1),
    face(40, Mine, 1, Wheat, 0),
    face(41, Wheat, 0, Pasture, 2),
    face(42, Water, 0, Pasture, 2),
    face(43, Wheat, 0, Bog, 2),
    face(44, Pasture, 0, Bog, 2),
    face(45, Mine, 2, Wheat, 0),
    face(46, Bog, 0, Mine, 2),
    face(47, Bog, 0, Mine, 2),
    face(48, Wheat, 0, Mine, 3),
];

/// Undrafted dominoes. The top of the pool is the front.
#[derive(Clone, Debug, Default)]
pub struct DominoPool {
    dominoes: Vec<Domino>,
}

impl DominoPool {
    /// The 48-piece standard set in rank order, unshuffled.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_dominoes(STANDARD_SET.iter().map(DominoFace::to_domino).collect())
    }

    /// The standard set shuffled with `rng`.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut pool = Self::standard();
        pool.shuffle(rng);
        pool
    }

    /// A pool of exactly these pieces, drawn front first.
    #[must_use]
    pub fn from_dominoes(dominoes: Vec<Domino>) -> Self {
        Self { dominoes }
    }

    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.dominoes);
    }

    /// Take up to `count` pieces from the top.
    pub fn draw(&mut self, count: usize) -> Vec<Domino> {
        let count = count.min(self.dominoes.len());
        self.dominoes.drain(..count).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dominoes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dominoes.is_empty()
    }

    /// Remaining pieces, top first.
    #[must_use]
    pub fn dominoes(&self) -> &[Domino] {
        &self.dominoes
    }
}
