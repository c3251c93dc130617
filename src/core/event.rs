//! Game events: the observable side effects of play.
//!
//! Every state change the engine makes to a player or tile is also reported
//! as a `GameEvent`, recorded with the round it happened in. The log is an
//! `im::Vector`, so snapshots of it are O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::dice::DiceRoll;
use super::player::PlayerId;
use crate::board::TileId;
use crate::economy::{Money, UpgradeLevel};

/// Why a player went to jail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum JailReason {
    /// Landed on the Go-To-Jail tile.
    GoToJailTile,
    /// Third double in a row.
    TripleDouble,
}

/// How a player left jail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum JailRelease {
    /// Chose to pay the fine.
    PaidFine,
    /// Rolled a double while waiting.
    RolledDouble,
    /// Ran out of waits and had to pay.
    ForcedFine,
}

/// Something that happened during a turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Rolled { player: PlayerId, roll: DiceRoll },
    Moved { player: PlayerId, from: TileId, to: TileId },
    PassedGo { player: PlayerId, bonus: Money },
    Taxed { player: PlayerId, tile: TileId, amount: Money },
    Purchased { player: PlayerId, tile: TileId, price: Money },
    Upgraded { player: PlayerId, tile: TileId, level: UpgradeLevel, price: Money },
    RentPaid { payer: PlayerId, owner: PlayerId, tile: TileId, amount: Money },
    SentToJail { player: PlayerId, reason: JailReason },
    JailWait { player: PlayerId, wait_count: u8 },
    LeftJail { player: PlayerId, release: JailRelease },
    Bankrupt { player: PlayerId },
}

impl GameEvent {
    /// The player the event is about (the payer, for rent).
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match *self {
            GameEvent::Rolled { player, .. }
            | GameEvent::Moved { player, .. }
            | GameEvent::PassedGo { player, .. }
            | GameEvent::Taxed { player, .. }
            | GameEvent::Purchased { player, .. }
            | GameEvent::Upgraded { player, .. }
            | GameEvent::SentToJail { player, .. }
            | GameEvent::JailWait { player, .. }
            | GameEvent::LeftJail { player, .. }
            | GameEvent::Bankrupt { player } => player,
            GameEvent::RentPaid { payer, .. } => payer,
        }
    }
}

/// An event stamped with the round it happened in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Round number (starts at 1).
    pub round: u32,
    /// What happened.
    pub event: GameEvent,
}

/// Append-only event history.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    enabled: bool,
    round: u32,
    records: Vector<EventRecord>,
}

impl EventLog {
    /// Create a log. A disabled log drops everything pushed to it.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            round: 1,
            records: Vector::new(),
        }
    }

    /// Set the round stamped on subsequent events.
    pub fn set_round(&mut self, round: u32) {
        self.round = round;
    }

    /// Record an event.
    pub fn push(&mut self, event: GameEvent) {
        if self.enabled {
            self.records.push_back(EventRecord {
                round: self.round,
                event,
            });
        }
    }

    /// All recorded events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &EventRecord> {
        self.records.iter()
    }

    /// Events about one player.
    pub fn for_player(&self, player: PlayerId) -> impl Iterator<Item = &GameEvent> {
        self.records
            .iter()
            .map(|r| &r.event)
            .filter(move |e| e.player() == player)
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// O(1) copy of the history so far.
    #[must_use]
    pub fn snapshot(&self) -> Vector<EventRecord> {
        self.records.clone()
    }
}
