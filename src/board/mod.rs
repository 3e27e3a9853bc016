//! Board graph, placement rules and scoring.
//!
//! - `landscape`: `Landscape`, `Edge` and `Coord` vocabulary
//! - `tile`: `Tile` cells linked in a `TileGraph` arena
//! - `domino`: two joined tiles, rotatable in quarter turns
//! - `extent`: bounding rectangle of a kingdom
//! - `kingdom`: one player's kingdom, placement validation and scoring
//! - `region`: per-region score breakdown

pub mod landscape;
pub mod tile;
pub mod domino;
pub mod extent;
pub mod placement;
mod kingdom;
mod region;

pub use kingdom::{Board, CASTLE};
pub use domino::{Domino, DominoEnd};
pub use extent::BoardExtent;
pub use landscape::{Coord, Edge, Landscape};
pub use placement::{DiscoveredEdges, DominoCoordinates, Placement, PlacementError};
pub use region::Region;
pub use tile::{Tile, TileGraph, TileId, MAX_CROWNS};
