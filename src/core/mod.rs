//! Core engine types: configuration, players, RNG.
//!
//! These are shared by the board and draft modules and carry no game rules
//! of their own.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{
    GameConfiguration, DEFAULT_BOARD_SIZE, EXPANDED_BOARD_SIZE, MAX_PLAYERS, MIDDLE_CASTLE_BONUS,
    MIN_PLAYERS,
};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
