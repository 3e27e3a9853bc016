//! Per-region score breakdown.
//!
//! `Board::score` walks the tile graph with marker flags. This module walks
//! it again with an explicit visited set and reports each region on its own,
//! which is what a score sheet or a tiebreak needs.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::kingdom::Board;
use super::landscape::Landscape;
use super::tile::TileId;

/// A maximal connected set of same-landscape tiles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub landscape: Landscape,
    /// Member tiles, starting from the earliest placed.
    pub tiles: Vec<TileId>,
    pub crowns: u32,
}

impl Region {
    #[must_use]
    pub fn size(&self) -> u32 {
        self.tiles.len() as u32
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.size() * self.crowns
    }
}

impl Board {
    /// Every terrain region on the board, castle excluded, in order of each
    /// region's earliest placed tile.
    #[must_use]
    pub fn regions(&self) -> Vec<Region> {
        let graph = self.graph();
        let mut seen: FxHashSet<TileId> = FxHashSet::default();
        let mut regions = Vec::new();

        for (start, tile) in graph.iter() {
            if tile.landscape().is_castle() || !seen.insert(start) {
                continue;
            }

            let mut region = Region {
                landscape: tile.landscape(),
                tiles: Vec::new(),
                crowns: 0,
            };
            let mut pending = vec![start];

            while let Some(id) = pending.pop() {
                let member = graph.tile(id);
                region.tiles.push(id);
                region.crowns += u32::from(member.crowns());

                for (_, next) in member.neighbors() {
                    if graph.tile(next).landscape() == region.landscape && seen.insert(next) {
                        pending.push(next);
                    }
                }
            }

            regions.push(region);
        }

        regions
    }

    /// The region with the most tiles, if any terrain is placed.
    #[must_use]
    pub fn largest_region(&self) -> Option<Region> {
        self.regions().into_iter().max_by_key(Region::size)
    }

    /// Crowns across the whole kingdom.
    #[must_use]
    pub fn total_crowns(&self) -> u32 {
        self.tiles().map(|(_, tile)| u32::from(tile.crowns())).sum()
    }
}
