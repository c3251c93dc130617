//! Decision policies: the AI boundary.
//!
//! The engine asks a player's `DecisionPolicy` three questions and treats
//! the answers as opaque. Every method has a default, so a policy only
//! overrides what it cares about.

use serde::{Deserialize, Serialize};

use super::state::Player;
use crate::board::Tile;
use crate::economy::{Money, UpgradeLevel};

/// Answer to "buy this tile?".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PurchaseChoice {
    Buy,
    Skip,
}

/// Answer to "build on this tile?".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpgradeChoice {
    Build,
    Skip,
}

/// Answer to "how do you leave jail?".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum JailExit {
    /// Pay the fine now.
    Pay,
    /// Try to roll a double.
    Wait,
}

/// Strategy answering a player's decisions.
///
/// Defaults: always buy, always build, always wait in jail.
pub trait DecisionPolicy: Send + std::fmt::Debug {
    /// Called on landing on an unowned tile the player can afford.
    fn choose_purchase(&mut self, _player: &Player, _tile: &Tile, _price: Money) -> PurchaseChoice {
        PurchaseChoice::Buy
    }

    /// Called on landing on an own property with an affordable upgrade.
    fn choose_upgrade(
        &mut self,
        _player: &Player,
        _tile: &Tile,
        _level: UpgradeLevel,
        _price: Money,
    ) -> UpgradeChoice {
        UpgradeChoice::Build
    }

    /// Called at the start of every jailed turn.
    fn choose_jail_exit(&mut self, _player: &Player, _fine: Money) -> JailExit {
        JailExit::Wait
    }
}

/// Reference policy: always buys, always builds, always waits.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysAct;

impl DecisionPolicy for AlwaysAct {}

/// Never buys or builds; waits in jail.
#[derive(Clone, Copy, Debug, Default)]
pub struct Passive;

impl DecisionPolicy for Passive {
    fn choose_purchase(&mut self, _player: &Player, _tile: &Tile, _price: Money) -> PurchaseChoice {
        PurchaseChoice::Skip
    }

    fn choose_upgrade(
        &mut self,
        _player: &Player,
        _tile: &Tile,
        _level: UpgradeLevel,
        _price: Money,
    ) -> UpgradeChoice {
        UpgradeChoice::Skip
    }
}

/// Acts only while it keeps `reserve` cash in hand.
///
/// Pays its way out of jail when the fine leaves the reserve intact.
#[derive(Clone, Copy, Debug)]
pub struct CashReserve {
    pub reserve: Money,
}

impl CashReserve {
    #[must_use]
    pub const fn new(reserve: Money) -> Self {
        Self { reserve }
    }

    fn keeps_reserve(&self, player: &Player, cost: Money) -> bool {
        player.cash().saturating_sub(cost) >= self.reserve && player.cash() >= cost
    }
}

impl DecisionPolicy for CashReserve {
    fn choose_purchase(&mut self, player: &Player, _tile: &Tile, price: Money) -> PurchaseChoice {
        if self.keeps_reserve(player, price) {
            PurchaseChoice::Buy
        } else {
            PurchaseChoice::Skip
        }
    }

    fn choose_upgrade(
        &mut self,
        player: &Player,
        _tile: &Tile,
        _level: UpgradeLevel,
        price: Money,
    ) -> UpgradeChoice {
        if self.keeps_reserve(player, price) {
            UpgradeChoice::Build
        } else {
            UpgradeChoice::Skip
        }
    }

    fn choose_jail_exit(&mut self, player: &Player, fine: Money) -> JailExit {
        if self.keeps_reserve(player, fine) {
            JailExit::Pay
        } else {
            JailExit::Wait
        }
    }
}
