//! Per-player turn state.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::BTreeSet;

use crate::board::TileId;
use crate::core::{DiceRoll, PlayerId};
use crate::economy::{Money, Wallet};

/// Rolls kept before the history empties.
pub const ROLL_WINDOW: usize = 3;

/// The last up-to-3 rolls of a player.
///
/// Not a sliding window: the history empties every time it reaches
/// `ROLL_WINDOW` entries, whether or not those were all doubles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollHistory {
    rolls: SmallVec<[DiceRoll; ROLL_WINDOW]>,
}

impl RollHistory {
    /// Append a roll.
    ///
    /// Returns true when this roll completed a window of three doubles. The
    /// history is empty again after any third roll.
    pub fn record(&mut self, roll: DiceRoll) -> bool {
        self.rolls.push(roll);
        if self.rolls.len() < ROLL_WINDOW {
            return false;
        }

        let all_doubles = self.rolls.iter().all(|r| r.is_double());
        self.rolls.clear();
        all_doubles
    }

    /// Rolls currently held, oldest first.
    #[must_use]
    pub fn rolls(&self) -> &[DiceRoll] {
        &self.rolls
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rolls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }

    pub fn clear(&mut self) {
        self.rolls.clear();
    }
}

/// A player and everything that changes about them during a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    nickname: String,
    /// Cash and bankruptcy.
    pub wallet: Wallet,
    /// Tile the player stands on.
    pub position: TileId,
    in_jail: bool,
    jail_wait_count: u8,
    portfolio: BTreeSet<TileId>,
    /// Recent rolls for triple-double detection.
    pub recent_rolls: RollHistory,
}

impl Player {
    /// A fresh player standing on `start` with `cash`.
    pub fn new(id: PlayerId, nickname: impl Into<String>, start: TileId, cash: Money) -> Self {
        Self {
            id,
            nickname: nickname.into(),
            wallet: Wallet::new(cash),
            position: start,
            in_jail: false,
            jail_wait_count: 0,
            portfolio: BTreeSet::new(),
            recent_rolls: RollHistory::default(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    #[must_use]
    pub fn cash(&self) -> Money {
        self.wallet.cash()
    }

    #[must_use]
    pub fn is_bankrupt(&self) -> bool {
        self.wallet.is_bankrupt()
    }

    #[must_use]
    pub fn in_jail(&self) -> bool {
        self.in_jail
    }

    /// Failed attempts to roll out of jail so far.
    #[must_use]
    pub fn jail_wait_count(&self) -> u8 {
        self.jail_wait_count
    }

    /// Owned tiles in step order.
    #[must_use]
    pub fn portfolio(&self) -> &BTreeSet<TileId> {
        &self.portfolio
    }

    /// Record ownership of a tile.
    pub fn acquire(&mut self, tile: TileId) {
        self.portfolio.insert(tile);
    }

    /// Put the player in jail at `jail`, with no waits used.
    pub fn imprison(&mut self, jail: TileId) {
        self.position = jail;
        self.in_jail = true;
        self.jail_wait_count = 0;
    }

    /// Let the player out of jail.
    pub fn release(&mut self) {
        self.in_jail = false;
        self.jail_wait_count = 0;
    }

    /// Count one more failed wait. Returns the new count.
    pub fn record_failed_wait(&mut self) -> u8 {
        self.jail_wait_count += 1;
        self.jail_wait_count
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.nickname, self.id)
    }
}
