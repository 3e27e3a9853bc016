//! Shared setup for integration tests.

#![allow(dead_code)]

use kingdomino_engine::board::{Domino, Landscape, Tile};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once per test binary.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `"warn"`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Build a domino from `(landscape, crowns)` pairs.
pub fn domino(left: (Landscape, u8), right: (Landscape, u8), rank: u8) -> Domino {
    Domino::new(Tile::new(left.0, left.1), Tile::new(right.0, right.1), rank)
}
