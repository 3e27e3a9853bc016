//! Game sessions.
//!
//! `Game` seats the players, deals the draft from a seed and routes each
//! claimed domino to its claimant's board.

mod session;

pub use session::{Game, GameError, GameResult, PendingDomino, Player, Standing};
