//! Game rule configuration.
//!
//! `RulesConfig` carries every tunable constant of the engine. It can be
//! built in code with the `with_*` builder methods or deserialized from JSON;
//! missing fields fall back to the reference rules.

use serde::{Deserialize, Serialize};

use crate::economy::Money;

/// Reference starting cash.
pub const DEFAULT_STARTING_CASH: Money = 2500;

/// Reference bonus for passing GO.
pub const DEFAULT_GO_BONUS: Money = 200;

/// Reference fine for leaving jail.
pub const DEFAULT_JAIL_FINE: Money = 50;

/// Failed waits allowed before the exit is forced.
pub const DEFAULT_MAX_JAIL_WAITS: u8 = 3;

/// Houses the bank holds at the start.
pub const DEFAULT_HOUSE_SUPPLY: u32 = 32;

/// Hotels the bank holds at the start.
pub const DEFAULT_HOTEL_SUPPLY: u32 = 12;

/// How the seating order becomes the turn order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnOrder {
    /// Players act in seat order.
    Seating,
    /// Every player rolls; highest pips first, ties roll again.
    #[default]
    Rolled,
}

/// Tunable rules of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Cash each player starts with.
    pub starting_cash: Money,

    /// Paid to a player passing (not landing on) GO.
    pub go_bonus: Money,

    /// Fine paid to leave jail, voluntarily or forced.
    pub jail_fine: Money,

    /// Failed waits before the next jail turn forces the fine.
    pub max_jail_waits: u8,

    /// Houses available to build across the whole board.
    pub house_supply: u32,

    /// Hotels available to build across the whole board.
    pub hotel_supply: u32,

    /// Turn order policy.
    pub turn_order: TurnOrder,

    /// Stop after this many full rounds. `None` plays until a winner.
    pub max_rounds: Option<u32>,

    /// Record `GameEvent`s into the event log.
    pub record_events: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            starting_cash: DEFAULT_STARTING_CASH,
            go_bonus: DEFAULT_GO_BONUS,
            jail_fine: DEFAULT_JAIL_FINE,
            max_jail_waits: DEFAULT_MAX_JAIL_WAITS,
            house_supply: DEFAULT_HOUSE_SUPPLY,
            hotel_supply: DEFAULT_HOTEL_SUPPLY,
            turn_order: TurnOrder::default(),
            max_rounds: None,
            record_events: true,
        }
    }
}

impl RulesConfig {
    /// Reference rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting cash.
    #[must_use]
    pub fn with_starting_cash(mut self, cash: Money) -> Self {
        self.starting_cash = cash;
        self
    }

    /// Set the GO bonus.
    #[must_use]
    pub fn with_go_bonus(mut self, bonus: Money) -> Self {
        self.go_bonus = bonus;
        self
    }

    /// Set the jail fine.
    #[must_use]
    pub fn with_jail_fine(mut self, fine: Money) -> Self {
        self.jail_fine = fine;
        self
    }

    /// Set the building supply.
    #[must_use]
    pub fn with_building_supply(mut self, houses: u32, hotels: u32) -> Self {
        self.house_supply = houses;
        self.hotel_supply = hotels;
        self
    }

    /// Set the turn order policy.
    #[must_use]
    pub fn with_turn_order(mut self, order: TurnOrder) -> Self {
        self.turn_order = order;
        self
    }

    /// Cap the game length in rounds.
    #[must_use]
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = Some(rounds);
        self
    }

    /// Turn event recording on or off.
    #[must_use]
    pub fn with_events(mut self, record: bool) -> Self {
        self.record_events = record;
        self
    }
}
