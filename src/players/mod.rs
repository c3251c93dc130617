//! Players: turn state and decision policies.

pub mod policy;
pub mod state;

pub use policy::{
    AlwaysAct, CashReserve, DecisionPolicy, JailExit, Passive, PurchaseChoice, UpgradeChoice,
};
pub use state::{Player, RollHistory, ROLL_WINDOW};

/// Default nicknames, handed out in seat order.
pub const DEFAULT_NICKNAMES: &[&str] = &[
    "Oliver", "Amelia", "Jack", "Olivia", "Harry", "Isla", "Jacob", "Emily", "Charlie", "Poppy",
    "Thomas", "Ava", "George", "Isabella", "Oscar", "Jessica", "James", "Lily", "William", "Sophie",
];
