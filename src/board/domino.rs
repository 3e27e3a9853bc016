//! Dominoes: two tiles rigidly joined along one edge.

use serde::{Deserialize, Serialize};

use super::landscape::Edge;
use super::tile::{Tile, TileGraph, TileId};

/// Logical end of a domino, named for its position at 0 degrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DominoEnd {
    Left,
    Right,
}

impl DominoEnd {
    #[must_use]
    pub const fn opposite(self) -> DominoEnd {
        match self {
            DominoEnd::Left => DominoEnd::Right,
            DominoEnd::Right => DominoEnd::Left,
        }
    }

    /// Id of this end inside the domino's own two-tile graph.
    #[must_use]
    pub(crate) const fn local_id(self) -> TileId {
        match self {
            DominoEnd::Left => TileId(0),
            DominoEnd::Right => TileId(1),
        }
    }
}

/// A free-standing pair of tiles with a draft rank.
///
/// At 0 degrees the right end sits east of the left end. Each `rotate`
/// turns the pair a quarter turn clockwise.
#[derive(Clone, Debug, PartialEq)]
pub struct Domino {
    tiles: TileGraph,
    orientation: u16,
    rank: u8,
}

impl Domino {
    /// Join `left` and `right` into a domino at 0 degrees.
    #[must_use]
    pub fn new(left: Tile, right: Tile, rank: u8) -> Self {
        let mut tiles = TileGraph::new();
        let left = tiles.push(left);
        let right = tiles.push(right);
        tiles.connect(left, right, Edge::East);

        Self {
            tiles,
            orientation: 0,
            rank,
        }
    }

    /// The number printed on the back, used to order the face-up draft.
    #[must_use]
    pub fn rank(&self) -> u8 {
        self.rank
    }

    /// Clockwise rotation in degrees: 0, 90, 180 or 270.
    #[must_use]
    pub fn orientation(&self) -> u16 {
        self.orientation
    }

    /// Turn the domino a quarter turn clockwise.
    pub fn rotate(&mut self) {
        self.tiles.rotate(DominoEnd::Left.local_id());
        self.orientation = (self.orientation + 90) % 360;
    }

    #[must_use]
    pub fn tile_at(&self, end: DominoEnd) -> &Tile {
        self.tiles.tile(end.local_id())
    }

    #[must_use]
    pub fn opposite_tile_at(&self, end: DominoEnd) -> &Tile {
        self.tile_at(end.opposite())
    }

    /// The edge of `end` that currently faces the other end.
    ///
    /// ```
    /// use kingdomino_engine::board::{Domino, DominoEnd, Edge, Landscape, Tile};
    ///
    /// let mut domino = Domino::new(
    ///     Tile::new(Landscape::Wheat, 0),
    ///     Tile::new(Landscape::Forest, 1),
    ///     7,
    /// );
    /// assert_eq!(domino.connected_edge(DominoEnd::Left), Edge::East);
    ///
    /// domino.rotate();
    /// assert_eq!(domino.connected_edge(DominoEnd::Left), Edge::South);
    /// assert_eq!(domino.connected_edge(DominoEnd::Right), Edge::North);
    /// ```
    #[must_use]
    pub fn connected_edge(&self, end: DominoEnd) -> Edge {
        let opposite = end.opposite().local_id();
        let tile = self.tile_at(end);
        match Edge::ALL
            .into_iter()
            .find(|&edge| tile.neighbor(edge) == Some(opposite))
        {
            Some(edge) => edge,
            None => panic!("Domino {} ends are not linked to each other", self.rank),
        }
    }

    /// The two-tile graph, left end first.
    pub(crate) fn graph(&self) -> &TileGraph {
        &self.tiles
    }
}

impl std::fmt::Display for Domino {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let left = self.tile_at(DominoEnd::Left);
        let right = self.tile_at(DominoEnd::Right);
        write!(
            f,
            "#{} [{}x{} | {}x{}]",
            self.rank,
            left.landscape(),
            left.crowns(),
            right.landscape(),
            right.crowns()
        )
    }
}
