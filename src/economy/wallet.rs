//! Cash and bankruptcy.
//!
//! A `Wallet` never goes negative: a withdrawal it cannot cover empties it
//! and marks it bankrupt. Bankruptcy is permanent.

use serde::{Deserialize, Serialize};

/// Amount of cash.
pub type Money = u32;

/// Result of taking money out of a wallet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum Withdrawal {
    /// The full amount was paid.
    Paid,
    /// The wallet could not cover it and is now bankrupt with 0 cash.
    Bankrupt,
}

/// A player's cash reserve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    cash: Money,
    bankrupt: bool,
}

impl Wallet {
    /// A solvent wallet holding `cash`.
    #[must_use]
    pub const fn new(cash: Money) -> Self {
        Self {
            cash,
            bankrupt: false,
        }
    }

    /// Current cash.
    #[must_use]
    pub const fn cash(&self) -> Money {
        self.cash
    }

    /// True once the wallet has gone bankrupt.
    #[must_use]
    pub const fn is_bankrupt(&self) -> bool {
        self.bankrupt
    }

    /// True when a solvent wallet holds at least `amount`.
    #[must_use]
    pub const fn can_afford(&self, amount: Money) -> bool {
        !self.bankrupt && self.cash >= amount
    }

    /// Add cash.
    pub fn deposit(&mut self, amount: Money) {
        self.cash = self.cash.saturating_add(amount);
    }

    /// Take cash out, going bankrupt if there is not enough.
    pub fn withdraw(&mut self, amount: Money) -> Withdrawal {
        if self.cash >= amount {
            self.cash -= amount;
            Withdrawal::Paid
        } else {
            self.declare_bankrupt();
            Withdrawal::Bankrupt
        }
    }

    /// Empty the wallet and mark it bankrupt.
    pub fn declare_bankrupt(&mut self) {
        self.cash = 0;
        self.bankrupt = true;
    }

    /// Move `amount` from `from` to `to`.
    ///
    /// All or nothing: if `from` cannot cover the amount it goes bankrupt and
    /// `to` receives nothing.
    pub fn transfer(from: &mut Wallet, to: &mut Wallet, amount: Money) -> Withdrawal {
        let result = from.withdraw(amount);
        if result == Withdrawal::Paid {
            to.deposit(amount);
        }
        result
    }
}
