//! Draft turn order and round transitions.
//!
//! ## Round lifecycle
//!
//! ```text
//! Drafting(n) --all slots claimed--> pool can refill? --yes--> Drafting(n + 1)
//!                                                    --no---> Finished
//! ```
//!
//! Each round lays out a face-up draft set sorted by rank. Players claim
//! slots in turn order; once every slot is claimed, the claimants read in
//! slot order become the next round's turn order, so whoever takes the
//! lowest-ranked domino picks first next round.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

use super::pool::DominoPool;
use crate::board::Domino;
use crate::core::{GameConfiguration, GameRng, PlayerId};

/// One face-up domino and who claimed it.
#[derive(Clone, Debug, PartialEq)]
pub struct DraftedTile {
    pub domino: Domino,
    pub player: Option<PlayerId>,
}

impl DraftedTile {
    #[must_use]
    pub fn new(domino: Domino) -> Self {
        Self {
            domino,
            player: None,
        }
    }

    #[must_use]
    pub fn is_claimed(&self) -> bool {
        self.player.is_some()
    }
}

/// Where the draft stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DraftPhase {
    /// Slots of round `round` (1-based) are being claimed.
    Drafting { round: u32 },
    /// The pool could not refill the draft; no further claims.
    Finished,
}

/// What a successful claim set in motion.
#[derive(Clone, Debug, PartialEq)]
pub enum DraftEvent {
    /// A slot was claimed and the round goes on.
    Claimed { slot: usize, player: PlayerId },
    /// The last slot was claimed and a fresh set is face up. `draft` holds
    /// the completed round, ready for placement.
    RoundComplete { round: u32, draft: Vec<DraftedTile> },
    /// The last slot was claimed and the pool cannot fill another round.
    /// `draft` is the final round; the game ends after it is placed.
    PoolExhausted { round: u32, draft: Vec<DraftedTile> },
}

/// Why a claim was refused. The draft is unchanged in every case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("slot {slot} does not exist, the draft has {len} slots")]
    NoSuchSlot { slot: usize, len: usize },

    #[error("slot {slot} is already claimed by {player}")]
    SlotClaimed { slot: usize, player: PlayerId },

    #[error("the draft is finished")]
    Finished,
}

/// Owns the undrafted pool, the face-up set and the turn order.
#[derive(Clone, Debug)]
pub struct DraftManager {
    pool: DominoPool,
    draft_size: usize,
    current_draft: Vec<DraftedTile>,
    turn_order: Vec<PlayerId>,
    cursor: usize,
    phase: DraftPhase,
}

impl DraftManager {
    /// Lay out the first round from `pool` with a random opening turn order.
    ///
    /// The pool is drawn as given; shuffle it first for a random game.
    #[must_use]
    pub fn new(mut pool: DominoPool, config: &GameConfiguration, rng: &mut GameRng) -> Self {
        let draft_size = config.draft_size();
        let turn_order = opening_order(config, rng);
        let current_draft = draw_round(&mut pool, draft_size);
        let phase = if current_draft.is_empty() {
            DraftPhase::Finished
        } else {
            DraftPhase::Drafting { round: 1 }
        };

        debug!(?turn_order, pool = pool.len(), "draft opened");

        Self {
            pool,
            draft_size,
            current_draft,
            turn_order,
            cursor: 0,
            phase,
        }
    }

    /// Claim `slot` for the player whose turn it is.
    ///
    /// Claiming the last open slot resolves the round: the returned event is
    /// then `RoundComplete` or `PoolExhausted` rather than `Claimed`.
    pub fn draft_tile(&mut self, slot: usize) -> Result<DraftEvent, DraftError> {
        let DraftPhase::Drafting { round } = self.phase else {
            return Err(DraftError::Finished);
        };

        let len = self.current_draft.len();
        let entry = self
            .current_draft
            .get_mut(slot)
            .ok_or(DraftError::NoSuchSlot { slot, len })?;
        if let Some(player) = entry.player {
            return Err(DraftError::SlotClaimed { slot, player });
        }

        let player = self.turn_order[self.cursor];
        entry.player = Some(player);
        self.cursor += 1;
        trace!(round, slot, %player, rank = entry.domino.rank(), "slot claimed");

        if self.current_draft.iter().all(DraftedTile::is_claimed) {
            Ok(self.resolve_round(round))
        } else {
            Ok(DraftEvent::Claimed { slot, player })
        }
    }

    fn resolve_round(&mut self, round: u32) -> DraftEvent {
        let next_order: Vec<PlayerId> = self
            .current_draft
            .iter()
            .filter_map(|entry| entry.player)
            .collect();

        if self.pool.len() < self.draft_size {
            self.phase = DraftPhase::Finished;
            debug!(round, remaining = self.pool.len(), "pool exhausted");
            return DraftEvent::PoolExhausted {
                round,
                draft: self.current_draft.clone(),
            };
        }

        let incoming = draw_round(&mut self.pool, self.draft_size);
        let draft = std::mem::replace(&mut self.current_draft, incoming);
        self.turn_order = next_order;
        self.cursor = 0;
        self.phase = DraftPhase::Drafting { round: round + 1 };

        debug!(round, next_order = ?self.turn_order, remaining = self.pool.len(), "round complete");
        DraftEvent::RoundComplete { round, draft }
    }

    /// The face-up set, one entry per slot.
    ///
    /// After the draft finishes this is the final claimed round.
    #[must_use]
    pub fn current_draft_set(&self) -> &[DraftedTile] {
        &self.current_draft
    }

    /// Whose turn it is, or `None` once the draft is finished.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        match self.phase {
            DraftPhase::Drafting { .. } => self.turn_order.get(self.cursor).copied(),
            DraftPhase::Finished => None,
        }
    }

    /// Position of the current player within `turn_order`.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn turn_order(&self) -> &[PlayerId] {
        &self.turn_order
    }

    #[must_use]
    pub fn phase(&self) -> DraftPhase {
        self.phase
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == DraftPhase::Finished
    }

    /// Dominoes still in the pool.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    /// Slots nobody has claimed yet this round.
    pub fn open_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.current_draft
            .iter()
            .enumerate()
            .filter(|(_, entry)| !entry.is_claimed())
            .map(|(slot, _)| slot)
    }
}

/// Each player once per round for 3 or 4 players; both players twice for 2.
fn opening_order(config: &GameConfiguration, rng: &mut GameRng) -> Vec<PlayerId> {
    let players = config.player_count();
    let mut order: Vec<PlayerId> = (0..config.draft_size())
        .map(|seat| PlayerId::new((seat % players) as u8))
        .collect();
    rng.shuffle(&mut order);
    order
}

fn draw_round(pool: &mut DominoPool, draft_size: usize) -> Vec<DraftedTile> {
    let mut dominoes = pool.draw(draft_size);
    dominoes.sort_by_key(Domino::rank);
    dominoes.into_iter().map(DraftedTile::new).collect()
}
