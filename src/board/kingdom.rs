//! A player's kingdom: placement rules and scoring.
//!
//! ## Placement
//!
//! A domino is placed by naming a tile already on the board (the anchor),
//! the side of that tile to build on, and which end of the domino goes
//! there. The other end lands wherever the domino's current orientation
//! puts it. A placement is accepted when:
//!
//! 1. neither target cell is occupied,
//! 2. the kingdom still fits within `max_board_size` on both axes,
//! 3. at least one tile bordering either end is the castle or shares that
//!    end's landscape.
//!
//! Rejected placements leave the board untouched.
//!
//! ## Scoring
//!
//! Each region of connected same-landscape tiles scores
//! `tiles * crowns`. With the middle kingdom rule, a castle centered in the
//! occupied extent adds `MIDDLE_CASTLE_BONUS`.
//!
//! ```
//! use kingdomino_engine::board::{Board, Domino, DominoEnd, Edge, Landscape, Tile};
//! use kingdomino_engine::core::GameConfiguration;
//!
//! let mut board = Board::new(&GameConfiguration::default());
//! let domino = Domino::new(Tile::new(Landscape::Forest, 1), Tile::new(Landscape::Wheat, 0), 24);
//!
//! board.place_domino(&domino, board.castle(), Edge::East, DominoEnd::Left).unwrap();
//! assert_eq!(board.score(), 1);
//! ```

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::{debug, trace};

use super::domino::{Domino, DominoEnd};
use super::extent::BoardExtent;
use super::landscape::{Coord, Edge};
use super::placement::{DiscoveredEdges, DominoCoordinates, Placement, PlacementError};
use super::tile::{Tile, TileGraph, TileId};
use crate::core::{GameConfiguration, MIDDLE_CASTLE_BONUS};

/// Id of the castle on every board.
pub const CASTLE: TileId = TileId(0);

/// A checked placement, ready to commit.
struct PlacementPlan {
    coords: DominoCoordinates,
    edges: DiscoveredEdges,
}

/// One player's kingdom.
///
/// Owns every placed tile. The coordinate map is a persistent `im` map so
/// snapshots are O(1) and never alias the live board.
#[derive(Clone, Debug)]
pub struct Board {
    tiles: TileGraph,
    coordinates: im::HashMap<Coord, TileId>,
    extent: BoardExtent,
    config: GameConfiguration,
}

impl Board {
    /// Create a board holding only the castle at the origin.
    #[must_use]
    pub fn new(config: &GameConfiguration) -> Self {
        let mut tiles = TileGraph::new();
        let castle = tiles.push(Tile::castle());
        debug_assert_eq!(castle, CASTLE);

        let mut coordinates = im::HashMap::new();
        coordinates.insert(Coord::ORIGIN, castle);

        Self {
            tiles,
            coordinates,
            extent: BoardExtent::new(),
            config: *config,
        }
    }

    #[must_use]
    pub fn castle(&self) -> TileId {
        CASTLE
    }

    #[must_use]
    pub fn config(&self) -> &GameConfiguration {
        &self.config
    }

    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id)
    }

    #[must_use]
    pub fn tile_at(&self, coord: Coord) -> Option<TileId> {
        self.coordinates.get(&coord).copied()
    }

    /// Number of tiles on the board, castle included.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// The linked tiles.
    #[must_use]
    pub fn graph(&self) -> &TileGraph {
        &self.tiles
    }

    /// Snapshot of coordinate to tile id.
    ///
    /// Changing the snapshot never affects the board. Ids stay valid for
    /// `Board::tile` on this board.
    #[must_use]
    pub fn coordinate_map(&self) -> im::HashMap<Coord, TileId> {
        self.coordinates.clone()
    }

    /// Placed tiles with their coordinates, in placement order.
    pub fn tiles(&self) -> impl Iterator<Item = (Coord, &Tile)> {
        self.tiles.iter().map(|(_, tile)| (tile.coord(), tile))
    }

    #[must_use]
    pub fn extent(&self) -> BoardExtent {
        self.extent
    }

    /// Largest span allowed along either axis.
    #[must_use]
    pub fn max_board_size(&self) -> i32 {
        self.config.max_board_size()
    }

    /// Is the castle exactly in the middle of the occupied area?
    #[must_use]
    pub fn is_castle_centered(&self) -> bool {
        self.extent.is_centered()
    }

    /// Middle kingdom points currently earned, if the rule is on.
    #[must_use]
    pub fn castle_bonus(&self) -> u32 {
        if self.config.middle_castle_bonus() && self.is_castle_centered() {
            MIDDLE_CASTLE_BONUS
        } else {
            0
        }
    }

    /// Total score of the kingdom.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.tiles.score(CASTLE) + self.castle_bonus()
    }

    /// Where the tiles of `domino` would land.
    ///
    /// The `end` tile goes across `edge` from `anchor`; the other tile
    /// follows the domino's internal link.
    pub fn domino_coordinates(
        &self,
        domino: &Domino,
        anchor: TileId,
        edge: Edge,
        end: DominoEnd,
    ) -> Result<DominoCoordinates, PlacementError> {
        let anchor_tile = self
            .tiles
            .get(anchor)
            .ok_or(PlacementError::UnknownAnchor(anchor))?;

        let connected = anchor_tile.coord().step(edge);
        let attached = connected.step(domino.connected_edge(end));
        Ok(DominoCoordinates {
            connected,
            attached,
        })
    }

    /// Board tiles bordering each target cell.
    #[must_use]
    pub fn discovered_edges(&self, coords: &DominoCoordinates) -> DiscoveredEdges {
        DiscoveredEdges {
            connected: self.occupied_neighbors(coords.connected),
            attached: self.occupied_neighbors(coords.attached),
        }
    }

    fn occupied_neighbors(&self, coord: Coord) -> SmallVec<[(Edge, TileId); 4]> {
        Edge::ALL
            .into_iter()
            .filter_map(|edge| self.tile_at(coord.step(edge)).map(|id| (edge, id)))
            .collect()
    }

    /// Run every placement rule without touching the board.
    ///
    /// Returns where the tiles would land, or the first rule broken.
    pub fn check_placement(
        &self,
        domino: &Domino,
        anchor: TileId,
        edge: Edge,
        end: DominoEnd,
    ) -> Result<DominoCoordinates, PlacementError> {
        self.plan(domino, anchor, edge, end).map(|plan| plan.coords)
    }

    #[must_use]
    pub fn is_valid_placement(
        &self,
        domino: &Domino,
        anchor: TileId,
        edge: Edge,
        end: DominoEnd,
    ) -> bool {
        self.plan(domino, anchor, edge, end).is_ok()
    }

    fn plan(
        &self,
        domino: &Domino,
        anchor: TileId,
        edge: Edge,
        end: DominoEnd,
    ) -> Result<PlacementPlan, PlacementError> {
        let coords = self.domino_coordinates(domino, anchor, edge, end)?;

        for coord in [coords.connected, coords.attached] {
            if self.coordinates.contains_key(&coord) {
                return Err(PlacementError::Overlap { coord });
            }
        }

        let max_size = self.max_board_size();
        for coord in [coords.connected, coords.attached] {
            if !self.extent.including(coord).fits(max_size) {
                return Err(PlacementError::OutOfBounds { coord, max_size });
            }
        }

        let edges = self.discovered_edges(&coords);
        let connected = domino.tile_at(end).landscape();
        let attached = domino.opposite_tile_at(end).landscape();

        // One matching edge on either end is enough.
        let connected_ok = edges
            .connected
            .iter()
            .any(|&(_, id)| self.tiles.tile(id).accepts(connected));
        let attached_ok = edges
            .attached
            .iter()
            .any(|&(_, id)| self.tiles.tile(id).accepts(attached));

        if edges.connected.is_empty() || !(connected_ok || attached_ok) {
            return Err(PlacementError::NoMatchingEdge);
        }

        Ok(PlacementPlan { coords, edges })
    }

    /// Place `domino` with its `end` tile across `edge` from `anchor`.
    ///
    /// Returns the id of the tile now touching the anchor. On rejection the
    /// board is unchanged.
    pub fn place_domino(
        &mut self,
        domino: &Domino,
        anchor: TileId,
        edge: Edge,
        end: DominoEnd,
    ) -> Result<TileId, PlacementError> {
        let plan = match self.plan(domino, anchor, edge, end) {
            Ok(plan) => plan,
            Err(err) => {
                trace!(rank = domino.rank(), %anchor, ?edge, ?end, %err, "placement rejected");
                return Err(err);
            }
        };

        let offset = self.tiles.absorb(domino.graph());
        let connected = TileId(offset + end.local_id().0);
        let attached = TileId(offset + end.opposite().local_id().0);

        for (id, coord, links) in [
            (connected, plan.coords.connected, &plan.edges.connected),
            (attached, plan.coords.attached, &plan.edges.attached),
        ] {
            self.tiles.tile_mut(id).set_coord(coord);
            for &(edge, neighbor) in links {
                self.tiles.connect(id, neighbor, edge);
            }
            self.coordinates.insert(coord, id);
            self.extent.expand(coord);
        }

        debug!(
            rank = domino.rank(),
            connected = %plan.coords.connected,
            attached = %plan.coords.attached,
            tiles = self.tiles.len(),
            "domino placed"
        );

        Ok(connected)
    }

    /// Every accepted placement for `domino` at its current orientation.
    ///
    /// Moves that put the same end on the same cell are listed once.
    #[must_use]
    pub fn legal_placements(&self, domino: &Domino) -> Vec<Placement> {
        let mut seen = FxHashSet::default();
        let mut placements = Vec::new();

        for (_, &anchor) in self.coordinates.iter() {
            for edge in Edge::ALL {
                for end in [DominoEnd::Left, DominoEnd::Right] {
                    let Ok(coords) = self.check_placement(domino, anchor, edge, end) else {
                        continue;
                    };
                    if seen.insert((coords.connected, end)) {
                        placements.push(Placement {
                            anchor,
                            edge,
                            end,
                            coords,
                        });
                    }
                }
            }
        }

        placements.sort_by_key(|p| {
            (
                p.coords.connected,
                p.coords.attached,
                p.end == DominoEnd::Right,
            )
        });
        placements
    }

    /// Can `domino` go anywhere, in any orientation?
    #[must_use]
    pub fn has_legal_placement(&self, domino: &Domino) -> bool {
        let mut probe = domino.clone();
        for _ in 0..4 {
            if !self.legal_placements(&probe).is_empty() {
                return true;
            }
            probe.rotate();
        }
        false
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(&GameConfiguration::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Landscape;

    fn domino(left: (Landscape, u8), right: (Landscape, u8)) -> Domino {
        Domino::new(Tile::new(left.0, left.1), Tile::new(right.0, right.1), 1)
    }

    #[test]
    fn test_new_board_has_castle() {
        let board = Board::default();

        assert_eq!(board.tile_count(), 1);
        let castle = board.tile(board.castle()).unwrap();
        assert_eq!(castle.landscape(), Landscape::Castle);
        assert_eq!(castle.coord(), Coord::ORIGIN);
        assert_eq!(board.tile_at(Coord::ORIGIN), Some(CASTLE));
        assert_eq!(board.extent(), BoardExtent::new());
    }

    #[test]
    fn test_max_board_size() {
        assert_eq!(Board::default().max_board_size(), 5);
        let expanded = GameConfiguration::new(2).with_expanded_board();
        assert_eq!(Board::new(&expanded).max_board_size(), 7);
    }

    #[test]
    fn test_domino_coordinates_at_zero_degrees() {
        let board = Board::default();
        let d = domino((Landscape::Forest, 0), (Landscape::Forest, 0));

        let cases = [
            (Edge::East, DominoEnd::Left, (1, 0), (2, 0)),
            (Edge::West, DominoEnd::Right, (-1, 0), (-2, 0)),
            (Edge::North, DominoEnd::Left, (0, 1), (1, 1)),
            (Edge::South, DominoEnd::Left, (0, -1), (1, -1)),
        ];
        for (edge, end, connected, attached) in cases {
            let coords = board.domino_coordinates(&d, CASTLE, edge, end).unwrap();
            assert_eq!(coords.connected, Coord::new(connected.0, connected.1));
            assert_eq!(coords.attached, Coord::new(attached.0, attached.1));
        }
    }

    #[test]
    fn test_domino_coordinates_at_ninety_degrees() {
        let board = Board::default();
        let mut d = domino((Landscape::Forest, 0), (Landscape::Forest, 0));
        d.rotate();

        let cases = [
            (Edge::East, DominoEnd::Left, (1, 0), (1, -1)),
            (Edge::West, DominoEnd::Left, (-1, 0), (-1, -1)),
            (Edge::North, DominoEnd::Right, (0, 1), (0, 2)),
            (Edge::South, DominoEnd::Left, (0, -1), (0, -2)),
        ];
        for (edge, end, connected, attached) in cases {
            let coords = board.domino_coordinates(&d, CASTLE, edge, end).unwrap();
            assert_eq!(coords.connected, Coord::new(connected.0, connected.1));
            assert_eq!(coords.attached, Coord::new(attached.0, attached.1));
        }
    }

    #[test]
    fn test_unknown_anchor() {
        let board = Board::default();
        let d = domino((Landscape::Forest, 0), (Landscape::Forest, 0));

        assert_eq!(
            board.check_placement(&d, TileId(7), Edge::East, DominoEnd::Left),
            Err(PlacementError::UnknownAnchor(TileId(7)))
        );
    }

    #[test]
    fn test_place_links_neighbors() {
        let mut board = Board::default();
        let d = domino((Landscape::Forest, 1), (Landscape::Wheat, 0));

        let placed = board
            .place_domino(&d, CASTLE, Edge::East, DominoEnd::Left)
            .unwrap();

        let forest = board.tile(placed).unwrap();
        assert_eq!(forest.coord(), Coord::new(1, 0));
        assert_eq!(forest.neighbor(Edge::West), Some(CASTLE));
        assert_eq!(board.tile(CASTLE).unwrap().neighbor(Edge::East), Some(placed));

        let wheat_id = board.tile_at(Coord::new(2, 0)).unwrap();
        assert_eq!(forest.neighbor(Edge::East), Some(wheat_id));
        assert_eq!(board.tile(wheat_id).unwrap().neighbor(Edge::West), Some(placed));
        assert_eq!(board.extent().x_max, 2);
    }

    #[test]
    fn test_overlap_rejected() {
        let mut board = Board::default();
        let d = domino((Landscape::Forest, 0), (Landscape::Forest, 0));
        board
            .place_domino(&d, CASTLE, Edge::East, DominoEnd::Left)
            .unwrap();

        let err = board.place_domino(&d, CASTLE, Edge::East, DominoEnd::Left);
        assert_eq!(
            err,
            Err(PlacementError::Overlap {
                coord: Coord::new(1, 0)
            })
        );

        // Left end at (-1,0) puts its partner on the castle.
        let err = board.check_placement(&d, CASTLE, Edge::West, DominoEnd::Left);
        assert_eq!(err, Err(PlacementError::Overlap { coord: Coord::ORIGIN }));
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut board = Board::default();
        let d = domino((Landscape::Forest, 0), (Landscape::Forest, 0));

        // Chain east: (1,0)-(2,0), (3,0)-(4,0). A third domino would put
        // its far end at (6,0), a span of 6.
        let first = board
            .place_domino(&d, CASTLE, Edge::East, DominoEnd::Left)
            .unwrap();
        let east = board.tile_at(Coord::new(2, 0)).unwrap();
        board
            .place_domino(&d, east, Edge::East, DominoEnd::Left)
            .unwrap();
        assert_ne!(first, east);

        let far = board.tile_at(Coord::new(4, 0)).unwrap();
        let before = board.tile_count();
        let err = board.place_domino(&d, far, Edge::East, DominoEnd::Left);
        assert_eq!(
            err,
            Err(PlacementError::OutOfBounds {
                coord: Coord::new(6, 0),
                max_size: 5
            })
        );
        assert_eq!(board.tile_count(), before);
    }

    #[test]
    fn test_mismatched_landscape_rejected() {
        let mut board = Board::default();
        let forest = domino((Landscape::Forest, 0), (Landscape::Forest, 0));
        board
            .place_domino(&forest, CASTLE, Edge::East, DominoEnd::Left)
            .unwrap();

        // Water on both ends, touching only forest.
        let water = domino((Landscape::Water, 0), (Landscape::Water, 0));
        let anchor = board.tile_at(Coord::new(2, 0)).unwrap();
        let err = board.place_domino(&water, anchor, Edge::North, DominoEnd::Left);
        assert_eq!(err, Err(PlacementError::NoMatchingEdge));
    }

    #[test]
    fn test_attached_end_can_carry_the_match() {
        let mut board = Board::default();
        let forest = domino((Landscape::Forest, 0), (Landscape::Forest, 0));
        board
            .place_domino(&forest, CASTLE, Edge::East, DominoEnd::Left)
            .unwrap();

        // The connected water end touches only forest at (2,0); the attached
        // forest end lands at (1,1), above forest at (1,0).
        let mixed = domino((Landscape::Forest, 0), (Landscape::Water, 0));
        let anchor = board.tile_at(Coord::new(2, 0)).unwrap();

        let coords = board
            .check_placement(&mixed, anchor, Edge::North, DominoEnd::Right)
            .unwrap();
        assert_eq!(coords.connected, Coord::new(2, 1));
        assert_eq!(coords.attached, Coord::new(1, 1));
    }

    #[test]
    fn test_legal_placements_from_empty_board() {
        let board = Board::default();
        let d = domino((Landscape::Wheat, 0), (Landscape::Bog, 0));

        let placements = board.legal_placements(&d);

        // Either end north or south of the castle; east and west only with
        // the partner pointing away from it.
        assert_eq!(placements.len(), 6);
        for p in &placements {
            assert!(board.is_valid_placement(&d, p.anchor, p.edge, p.end));
        }
        assert!(board.has_legal_placement(&d));
    }

    #[test]
    fn test_score_is_repeatable() {
        let mut board = Board::default();
        let d = domino((Landscape::Forest, 1), (Landscape::Forest, 1));
        board
            .place_domino(&d, CASTLE, Edge::South, DominoEnd::Right)
            .unwrap();

        assert_eq!(board.score(), 4);
        assert_eq!(board.score(), 4);
        assert!(board.graph().is_at_rest());
    }

    #[test]
    fn test_castle_bonus() {
        let config = GameConfiguration::new(2).with_middle_castle_bonus();
        let mut board = Board::new(&config);
        assert_eq!(board.score(), 10);

        let d = domino((Landscape::Forest, 0), (Landscape::Forest, 0));
        board
            .place_domino(&d, CASTLE, Edge::East, DominoEnd::Left)
            .unwrap();
        assert_eq!(board.score(), 0);

        board
            .place_domino(&d, CASTLE, Edge::West, DominoEnd::Right)
            .unwrap();
        assert_eq!(board.extent().x_min, -2);
        assert_eq!(board.score(), 10);
    }
}
