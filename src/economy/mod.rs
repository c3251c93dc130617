//! Money, buildings and property holdings.

pub mod portfolio;
pub mod property;
pub mod supply;
pub mod wallet;

pub use portfolio::{get_portfolio, Portfolio, PortfolioKey};
pub use property::{get_rent_cost, get_upgrade_price, resolve_landing, LandingOutcome, UpgradeLevel};
pub use supply::BuildingSupply;
pub use wallet::{Money, Wallet, Withdrawal};
