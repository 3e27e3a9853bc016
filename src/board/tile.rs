//! Tiles and the graph that links them.
//!
//! ## Arena layout
//!
//! Tiles live in a `TileGraph`, a `Vec<Tile>` arena. A tile's four edge
//! links are `Option<TileId>` indices into that arena, so cycles (several
//! dominoes closing around an area) never involve ownership. A free-standing
//! domino owns a two-tile graph; placing it copies both tiles into the
//! board's graph.
//!
//! ## Traversal marker
//!
//! Every tile carries a `visited` flag used by `rotate` and `score` to touch
//! each node exactly once despite cycles. The flag is `false` everywhere at
//! rest: the public traversals clear it on every tile they marked before
//! returning. Traversals are not reentrant.

use std::cell::Cell;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::landscape::{Coord, Edge, Landscape};

/// Most crowns a single tile can show.
pub const MAX_CROWNS: u8 = 3;

/// Index of a tile within its `TileGraph`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// One grid cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
    landscape: Landscape,
    crowns: u8,
    /// Neighbor links, indexed by `Edge::index`.
    edges: [Option<TileId>; 4],
    coord: Coord,
    visited: Cell<bool>,
}

impl Tile {
    /// Create an unplaced, unlinked tile.
    ///
    /// Panics if `crowns` exceeds `MAX_CROWNS`.
    #[must_use]
    pub fn new(landscape: Landscape, crowns: u8) -> Self {
        assert!(
            crowns <= MAX_CROWNS,
            "A tile shows at most {} crowns, got {}",
            MAX_CROWNS,
            crowns
        );

        Self {
            landscape,
            crowns,
            edges: [None; 4],
            coord: Coord::ORIGIN,
            visited: Cell::new(false),
        }
    }

    /// The castle tile every board starts with.
    #[must_use]
    pub fn castle() -> Self {
        Self::new(Landscape::Castle, 0)
    }

    #[must_use]
    pub fn landscape(&self) -> Landscape {
        self.landscape
    }

    #[must_use]
    pub fn crowns(&self) -> u8 {
        self.crowns
    }

    /// Board coordinate. Meaningless until the tile is placed.
    #[must_use]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub(crate) fn set_coord(&mut self, coord: Coord) {
        self.coord = coord;
    }

    /// The tile linked across `edge`, if any.
    #[must_use]
    pub fn neighbor(&self, edge: Edge) -> Option<TileId> {
        self.edges[edge.index()]
    }

    /// All live links as `(edge, tile)` pairs, clockwise from north.
    pub fn neighbors(&self) -> impl Iterator<Item = (Edge, TileId)> + '_ {
        Edge::ALL
            .into_iter()
            .filter_map(|edge| self.neighbor(edge).map(|id| (edge, id)))
    }

    #[must_use]
    pub fn is_visited(&self) -> bool {
        self.visited.get()
    }

    /// Does this tile count as a legal neighbor for `landscape`?
    #[must_use]
    pub fn accepts(&self, landscape: Landscape) -> bool {
        self.landscape.is_castle() || self.landscape == landscape
    }
}

/// Arena of linked tiles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TileGraph {
    tiles: Vec<Tile>,
}

impl TileGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tile to the arena and return its id.
    pub fn push(&mut self, tile: Tile) -> TileId {
        let id = TileId(self.tiles.len() as u32);
        self.tiles.push(tile);
        id
    }

    #[must_use]
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.index())
    }

    /// Get a tile that is known to exist.
    ///
    /// Panics if `id` does not belong to this graph.
    #[must_use]
    pub fn tile(&self, id: TileId) -> &Tile {
        &self.tiles[id.index()]
    }

    pub(crate) fn tile_mut(&mut self, id: TileId) -> &mut Tile {
        &mut self.tiles[id.index()]
    }

    #[must_use]
    pub fn contains(&self, id: TileId) -> bool {
        id.index() < self.tiles.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TileId, &Tile)> {
        self.tiles
            .iter()
            .enumerate()
            .map(|(i, tile)| (TileId(i as u32), tile))
    }

    /// Link `from` to `to` across `edge`, and `to` back to `from` across the
    /// opposite edge.
    ///
    /// No legality checks; that is the board's job.
    pub fn connect(&mut self, from: TileId, to: TileId, edge: Edge) {
        self.tile_mut(from).edges[edge.index()] = Some(to);
        self.tile_mut(to).edges[edge.opposite().index()] = Some(from);
    }

    /// Rotate every tile attached to `root` a quarter turn clockwise.
    ///
    /// Only links turn; coordinates are left alone, so this is meant for
    /// free-standing dominoes.
    pub fn rotate(&mut self, root: TileId) {
        self.rotate_unmarked(root);
        self.reset_visited(root);
    }

    fn rotate_unmarked(&mut self, id: TileId) {
        let tile = self.tile_mut(id);
        if tile.visited.get() {
            return;
        }
        tile.visited.set(true);

        let old = tile.edges;
        for edge in Edge::ALL {
            tile.edges[edge.clockwise().index()] = old[edge.index()];
        }

        for next in old.into_iter().flatten() {
            if !self.tile(next).is_visited() {
                self.rotate_unmarked(next);
            }
        }
    }

    /// Score of every region reachable from `root`.
    ///
    /// Each region contributes `tiles * crowns`. Marker flags are cleared
    /// before returning.
    #[must_use]
    pub fn score(&self, root: TileId) -> u32 {
        let score = self.score_unmarked(root);
        self.reset_visited(root);
        score
    }

    /// Flood the region containing `start`, then score each bordering region
    /// that has not been visited yet.
    fn score_unmarked(&self, start: TileId) -> u32 {
        let first = self.tile(start);
        if first.is_visited() {
            return 0;
        }
        first.visited.set(true);

        let mut tiles = 1;
        let mut crowns = u32::from(first.crowns);
        let (mut same, mut border) = self.partition_neighbors(start);

        while let Some(id) = same.pop() {
            let tile = self.tile(id);
            if tile.is_visited() {
                continue;
            }
            tile.visited.set(true);
            tiles += 1;
            crowns += u32::from(tile.crowns);

            let (more_same, more_border) = self.partition_neighbors(id);
            same.extend(more_same);
            border.extend(more_border);
        }

        let mut score = tiles * crowns;
        while let Some(id) = border.pop() {
            score += self.score_unmarked(id);
        }
        score
    }

    /// Split the unvisited neighbors of `id` by whether they share its
    /// landscape.
    fn partition_neighbors(
        &self,
        id: TileId,
    ) -> (SmallVec<[TileId; 4]>, SmallVec<[TileId; 4]>) {
        let tile = self.tile(id);
        let mut same = SmallVec::new();
        let mut different = SmallVec::new();

        for (_, next) in tile.neighbors() {
            let neighbor = self.tile(next);
            if neighbor.is_visited() {
                continue;
            }
            if neighbor.landscape == tile.landscape {
                same.push(next);
            } else {
                different.push(next);
            }
        }

        (same, different)
    }

    /// Clear the marker on `root` and on every still-marked tile reachable
    /// through marked tiles.
    pub fn reset_visited(&self, root: TileId) {
        let tile = self.tile(root);
        tile.visited.set(false);
        for (_, next) in tile.neighbors() {
            if self.tile(next).is_visited() {
                self.reset_visited(next);
            }
        }
    }

    /// True when no tile carries a traversal marker.
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.tiles.iter().all(|tile| !tile.is_visited())
    }

    /// Copy every tile of `other` into this graph, keeping their links.
    ///
    /// Returns the id offset: tile `TileId(n)` of `other` becomes
    /// `TileId(offset + n)` here.
    pub(crate) fn absorb(&mut self, other: &TileGraph) -> u32 {
        let offset = self.tiles.len() as u32;
        self.tiles.extend(other.tiles.iter().map(|tile| {
            let mut copy = tile.clone();
            for link in copy.edges.iter_mut().flatten() {
                link.0 += offset;
            }
            copy.visited.set(false);
            copy
        }));
        offset
    }
}
