//! A game session: one draft feeding one kingdom per player.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::board::{Board, Domino, DominoEnd, Edge, PlacementError, TileId};
use crate::core::{GameConfiguration, GameRng, PlayerId, PlayerMap};
use crate::draft::{DominoPool, DraftError, DraftEvent, DraftManager, DraftedTile};

/// A seated player and their kingdom.
#[derive(Clone, Debug)]
pub struct Player {
    id: PlayerId,
    name: String,
    board: Board,
}

impl Player {
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }
}

/// A claimed domino waiting to be placed.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingDomino {
    pub player: PlayerId,
    pub domino: Domino,
}

/// Outcome of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Winner(PlayerId),
    /// Players still level after every tiebreak.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
        }
    }
}

/// One row of the final ranking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player: PlayerId,
    pub score: u32,
    /// Tiles in the player's largest region.
    pub largest_region: u32,
    pub crowns: u32,
}

impl Standing {
    fn rank_key(&self) -> (u32, u32, u32) {
        (self.score, self.largest_region, self.crowns)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Draft(#[from] DraftError),

    #[error(transparent)]
    Placement(#[from] PlacementError),

    #[error("{0} has no domino waiting to be placed")]
    NothingToPlace(PlayerId),

    #[error("{0} can still place their domino")]
    StillPlaceable(PlayerId),
}

/// A full game: the shared draft and every player's kingdom.
///
/// Drafting and placing are independent. Each completed draft round queues
/// its claimed dominoes for their claimants, who place (or, when nothing
/// fits, discard) them in claim order.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfiguration,
    players: PlayerMap<Player>,
    draft: DraftManager,
    pending: Vec<PendingDomino>,
}

impl Game {
    /// Seat `names.len()` players and open the draft.
    ///
    /// The pool and the opening turn order come from separate streams of
    /// `seed`, so the same seed always deals the same game.
    ///
    /// # Panics
    ///
    /// Panics if the number of names differs from `config.player_count()`.
    #[must_use]
    pub fn new(config: GameConfiguration, names: &[&str], seed: u64) -> Self {
        assert_eq!(
            names.len(),
            config.player_count(),
            "Expected {} player names, got {}",
            config.player_count(),
            names.len()
        );

        let rng = GameRng::new(seed);
        let pool = DominoPool::shuffled(&mut rng.for_context("pool"));
        let draft = DraftManager::new(pool, &config, &mut rng.for_context("turn-order"));

        let players = PlayerMap::new(config.player_count(), |id| Player {
            id,
            name: names[id.index()].to_string(),
            board: Board::new(&config),
        });

        debug!(players = config.player_count(), seed, "game created");

        Self {
            config,
            players,
            draft,
            pending: Vec::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfiguration {
        &self.config
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        assert!(self.players.contains(id), "{} is not seated in this game", id);
        &self.players[id]
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().map(|(_, player)| player)
    }

    #[must_use]
    pub fn draft_manager(&self) -> &DraftManager {
        &self.draft
    }

    /// Claim `slot` for the player on turn.
    ///
    /// When the claim completes a round, the round's dominoes are queued
    /// for placement.
    pub fn draft(&mut self, slot: usize) -> Result<DraftEvent, DraftError> {
        let event = self.draft.draft_tile(slot)?;

        if let DraftEvent::RoundComplete { draft, .. } | DraftEvent::PoolExhausted { draft, .. } =
            &event
        {
            self.queue(draft);
        }

        Ok(event)
    }

    fn queue(&mut self, draft: &[DraftedTile]) {
        self.pending
            .extend(draft.iter().filter_map(|entry| {
                entry.player.map(|player| PendingDomino {
                    player,
                    domino: entry.domino.clone(),
                })
            }));
    }

    /// The next domino `player` has to place, if any.
    #[must_use]
    pub fn next_pending(&self, player: PlayerId) -> Option<&Domino> {
        self.pending
            .iter()
            .find(|p| p.player == player)
            .map(|p| &p.domino)
    }

    /// Every queued domino, oldest first.
    #[must_use]
    pub fn pending(&self) -> &[PendingDomino] {
        &self.pending
    }

    fn pending_index(&self, player: PlayerId) -> Result<usize, GameError> {
        self.pending
            .iter()
            .position(|p| p.player == player)
            .ok_or(GameError::NothingToPlace(player))
    }

    /// Turn `player`'s next domino a quarter clockwise.
    pub fn rotate_pending(&mut self, player: PlayerId) -> Result<(), GameError> {
        let index = self.pending_index(player)?;
        self.pending[index].domino.rotate();
        Ok(())
    }

    /// Place `player`'s next domino on their board.
    ///
    /// The domino leaves the queue only when the board accepts it.
    pub fn place(
        &mut self,
        player: PlayerId,
        anchor: TileId,
        edge: Edge,
        end: DominoEnd,
    ) -> Result<TileId, GameError> {
        let index = self.pending_index(player)?;
        let placed = self.players[player].board.place_domino(
            &self.pending[index].domino,
            anchor,
            edge,
            end,
        )?;
        self.pending.remove(index);
        Ok(placed)
    }

    /// Drop `player`'s next domino because it fits nowhere.
    pub fn discard(&mut self, player: PlayerId) -> Result<Domino, GameError> {
        let index = self.pending_index(player)?;
        if self.players[player]
            .board
            .has_legal_placement(&self.pending[index].domino)
        {
            return Err(GameError::StillPlaceable(player));
        }

        let discarded = self.pending.remove(index);
        debug!(%player, rank = discarded.domino.rank(), "domino discarded");
        Ok(discarded.domino)
    }

    /// The draft is over and every claimed domino is placed or discarded.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.draft.is_finished() && self.pending.is_empty()
    }

    #[must_use]
    pub fn scores(&self) -> PlayerMap<u32> {
        self.players.map(|_, seat| seat.board.score())
    }

    /// Players from first to last: score, then largest region, then crowns.
    #[must_use]
    pub fn standings(&self) -> Vec<Standing> {
        let mut standings: Vec<Standing> = self
            .players
            .iter()
            .map(|(player, seat)| Standing {
                player,
                score: seat.board.score(),
                largest_region: seat.board.largest_region().map_or(0, |r| r.size()),
                crowns: seat.board.total_crowns(),
            })
            .collect();

        standings.sort_by(|a, b| b.rank_key().cmp(&a.rank_key()).then(a.player.cmp(&b.player)));
        standings
    }

    /// Who won, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.is_over() {
            return None;
        }

        let standings = self.standings();
        let best = standings.first()?.rank_key();
        let winners: Vec<PlayerId> = standings
            .iter()
            .take_while(|s| s.rank_key() == best)
            .map(|s| s.player)
            .collect();

        match winners.as_slice() {
            [only] => Some(GameResult::Winner(*only)),
            _ => Some(GameResult::Winners(winners)),
        }
    }
}
