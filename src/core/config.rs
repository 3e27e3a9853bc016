//! Game configuration.
//!
//! A `GameConfiguration` is built once per game and handed to every `Board`
//! and to the `DraftManager`. It never changes afterwards.
//!
//! ```
//! use kingdomino_engine::core::GameConfiguration;
//!
//! let config = GameConfiguration::new(4)
//!     .with_middle_castle_bonus()
//!     .with_expanded_board();
//!
//! assert_eq!(config.player_count(), 4);
//! assert_eq!(config.max_board_size(), 7);
//! ```

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Points awarded when the castle sits exactly in the middle of the kingdom.
pub const MIDDLE_CASTLE_BONUS: u32 = 10;

/// Largest span along either axis on a standard board.
pub const DEFAULT_BOARD_SIZE: i32 = 5;

/// Largest span along either axis when playing with the expanded board.
pub const EXPANDED_BOARD_SIZE: i32 = 7;

/// Fewest players a game supports.
pub const MIN_PLAYERS: usize = 2;

/// Most players a game supports.
pub const MAX_PLAYERS: usize = 4;

/// Per-game ruleset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameConfiguration {
    player_count: u8,
    middle_castle_bonus: bool,
    expanded_board: bool,
}

impl GameConfiguration {
    /// Create a configuration for `player_count` players.
    ///
    /// Counts outside `2..=4` are clamped into range rather than rejected.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        let clamped = player_count.clamp(MIN_PLAYERS, MAX_PLAYERS);
        if clamped != player_count {
            warn!(requested = player_count, clamped, "player count out of range, clamping");
        }

        Self {
            player_count: clamped as u8,
            middle_castle_bonus: false,
            expanded_board: false,
        }
    }

    /// Enable the middle kingdom rule.
    #[must_use]
    pub fn with_middle_castle_bonus(mut self) -> Self {
        self.middle_castle_bonus = true;
        self
    }

    /// Play on a 7x7 kingdom instead of 5x5.
    #[must_use]
    pub fn with_expanded_board(mut self) -> Self {
        self.expanded_board = true;
        self
    }

    /// Number of players, always within `2..=4`.
    #[must_use]
    pub const fn player_count(&self) -> usize {
        self.player_count as usize
    }

    #[must_use]
    pub const fn middle_castle_bonus(&self) -> bool {
        self.middle_castle_bonus
    }

    #[must_use]
    pub const fn expanded_board(&self) -> bool {
        self.expanded_board
    }

    /// Largest allowed span along either axis, measured as `|min| + |max|`.
    #[must_use]
    pub const fn max_board_size(&self) -> i32 {
        if self.expanded_board {
            EXPANDED_BOARD_SIZE
        } else {
            DEFAULT_BOARD_SIZE
        }
    }

    /// Number of face-up dominoes in each draft round.
    ///
    /// Three players claim one domino each per round; two and four player
    /// games draft four.
    #[must_use]
    pub const fn draft_size(&self) -> usize {
        if self.player_count == 3 {
            3
        } else {
            4
        }
    }
}

impl Default for GameConfiguration {
    fn default() -> Self {
        Self::new(MIN_PLAYERS)
    }
}
