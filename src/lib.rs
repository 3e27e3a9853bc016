//! # kingdomino-engine
//!
//! Rules engine for a domino-drafting kingdom-building game.
//!
//! ## Design Principles
//!
//! 1. **Arena Graph**: Tiles live in a per-board arena and link to their
//!    neighbors by `TileId`, so the board graph may contain cycles without
//!    shared ownership.
//!
//! 2. **N-Player First**: Player-count dependent rules (turn order, draft
//!    size) derive from `GameConfiguration`; nothing assumes 2 players.
//!
//! 3. **Reproducible**: All shuffling goes through a seeded `GameRng`, so a
//!    game replays from its seed on any toolchain, given the same `rand`
//!    and `rand_chacha` versions.
//!
//! ## Modules
//!
//! - `core`: Configuration, players, RNG
//! - `board`: Tiles, dominoes, placement rules, scoring
//! - `draft`: Domino pool and the draft state machine
//! - `game`: A full session with one board per player

pub mod core;
pub mod board;
pub mod draft;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    GameConfiguration, GameRng, GameRngState, PlayerId, PlayerMap, MIDDLE_CASTLE_BONUS,
};

pub use crate::board::{
    Board, BoardExtent, Coord, Domino, DominoEnd, Edge, Landscape, Placement, PlacementError,
    Region, Tile, TileGraph, TileId, CASTLE,
};

pub use crate::draft::{DominoPool, DraftError, DraftEvent, DraftManager, DraftPhase, DraftedTile};

pub use crate::game::{Game, GameError, GameResult, Player, Standing};
