//! Domino pool and the draft state machine.
//!
//! - `pool`: the standard 48-piece set and the undrafted pool
//! - `manager`: face-up draft sets, turn order and round transitions

pub mod manager;
pub mod pool;

pub use manager::{DraftError, DraftEvent, DraftManager, DraftPhase, DraftedTile};
pub use pool::{DominoFace, DominoPool, STANDARD_SET, STANDARD_SET_SIZE};
