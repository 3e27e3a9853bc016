//! Placement requests, probes and rejections.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use super::domino::DominoEnd;
use super::landscape::{Coord, Edge};
use super::tile::TileId;

/// Where both tiles of a domino would land.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DominoCoordinates {
    /// The end touching the anchor tile.
    pub connected: Coord,
    /// The other end.
    pub attached: Coord,
}

/// Existing board tiles bordering each end of a domino, as `(edge, tile)`
/// pairs seen from the new tile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiscoveredEdges {
    pub connected: SmallVec<[(Edge, TileId); 4]>,
    pub attached: SmallVec<[(Edge, TileId); 4]>,
}

/// A fully specified move: which end of the domino goes against which side
/// of which board tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub anchor: TileId,
    pub edge: Edge,
    pub end: DominoEnd,
    /// Where the tiles land.
    pub coords: DominoCoordinates,
}

/// Why a placement was refused. The board is unchanged in every case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("{0} is not on this board")]
    UnknownAnchor(TileId),

    #[error("cell {coord} is already occupied")]
    Overlap { coord: Coord },

    #[error("cell {coord} would stretch the kingdom past {max_size} tiles")]
    OutOfBounds { coord: Coord, max_size: i32 },

    #[error("no edge meets the castle or a matching landscape")]
    NoMatchingEdge,
}
