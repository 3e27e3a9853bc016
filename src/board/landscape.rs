//! Landscape and compass vocabulary.
//!
//! Coordinates are castle-relative: the castle is always at `(0, 0)`,
//! `x` grows to the east and `y` grows to the north.

use serde::{Deserialize, Serialize};

/// The kind of land depicted on a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Landscape {
    /// The starting tile. Matches every landscape for placement purposes
    /// and never forms part of a scoring region.
    Castle,
    Wheat,
    Forest,
    Water,
    Pasture,
    Bog,
    Mine,
}

impl Landscape {
    /// Every landscape that can appear on a domino.
    pub const TERRAINS: [Landscape; 6] = [
        Landscape::Wheat,
        Landscape::Forest,
        Landscape::Water,
        Landscape::Pasture,
        Landscape::Bog,
        Landscape::Mine,
    ];

    #[must_use]
    pub const fn is_castle(self) -> bool {
        matches!(self, Landscape::Castle)
    }
}

impl std::fmt::Display for Landscape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Landscape::Castle => "castle",
            Landscape::Wheat => "wheat",
            Landscape::Forest => "forest",
            Landscape::Water => "water",
            Landscape::Pasture => "pasture",
            Landscape::Bog => "bog",
            Landscape::Mine => "mine",
        };
        f.write_str(name)
    }
}

/// One of the four sides of a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    North,
    East,
    South,
    West,
}

impl Edge {
    /// All edges, clockwise from north.
    pub const ALL: [Edge; 4] = [Edge::North, Edge::East, Edge::South, Edge::West];

    /// Slot of this edge in a tile's link array.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Edge::North => 0,
            Edge::East => 1,
            Edge::South => 2,
            Edge::West => 3,
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Edge {
        match self {
            Edge::North => Edge::South,
            Edge::East => Edge::West,
            Edge::South => Edge::North,
            Edge::West => Edge::East,
        }
    }

    /// The edge this one becomes after a quarter turn clockwise.
    #[must_use]
    pub const fn clockwise(self) -> Edge {
        match self {
            Edge::North => Edge::East,
            Edge::East => Edge::South,
            Edge::South => Edge::West,
            Edge::West => Edge::North,
        }
    }

    /// Coordinate delta `(dx, dy)` of the neighbor across this edge.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Edge::North => (0, 1),
            Edge::East => (1, 0),
            Edge::South => (0, -1),
            Edge::West => (-1, 0),
        }
    }
}

/// Castle-relative grid coordinate.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    /// Where the castle stands.
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighboring coordinate across `edge`.
    #[must_use]
    pub const fn step(self, edge: Edge) -> Coord {
        let (dx, dy) = edge.offset();
        Coord {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}
