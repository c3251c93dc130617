//! # monopoly-sim
//!
//! A turn-resolution engine for property-trading board games played by AI
//! players.
//!
//! ## Design Principles
//!
//! 1. **Data-Driven Boards**: The board is a JSON template of tiles. The
//!    `en-gb` locale ships with the crate; any other layout can be loaded.
//!
//! 2. **N-Player First**: 2 to 8 players, addressed by `PlayerId` handles.
//!    Tiles refer to owners and players refer to tiles by index, never by
//!    reference.
//!
//! 3. **Policies Decide, the Engine Resolves**: Purchases, upgrades and jail
//!    exits are questions put to a `DecisionPolicy`. Everything else is rules.
//!
//! 4. **Deterministic**: All randomness comes from a seeded `GameRng` (or a
//!    scripted `Dice` source), so a seed replays a game exactly.
//!
//! ## Modules
//!
//! - `core`: Player handles, dice, RNG, configuration, events, errors, state
//! - `board`: Tiles, board templates and the board loop
//! - `economy`: Wallets, building supply, portfolios, purchase/rent/upgrade
//! - `players`: Per-player state and decision policies
//! - `rules`: Movement, tile effects, jail and turn resolution
//! - `game`: `GameBuilder`, the `Game` driver and final standings
//!
//! ## Example
//!
//! ```
//! use monopoly_sim::{GameBuilder, RulesConfig};
//!
//! let mut game = GameBuilder::new()
//!     .player_count(4)
//!     .rules(RulesConfig::default().with_max_rounds(50))
//!     .seed(7)
//!     .build()?;
//!
//! game.run()?;
//! let report = game.report();
//! assert_eq!(report.standings.len(), 4);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod board;
pub mod core;
pub mod economy;
pub mod game;
pub mod players;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    BoardError, Dice, DiceRoll, EngineError, EventLog, GameEvent, GameRng, GameState,
    PlayerId, PlayerMap, RulesConfig, ScriptedDice, SetupError, TurnOrder,
};

pub use crate::board::{Board, BoardTemplate, Tile, TileData, TileId, TileKind, TileSpec};

pub use crate::economy::{
    get_portfolio, get_rent_cost, get_upgrade_price, resolve_landing, LandingOutcome, Money,
    Portfolio, PortfolioKey, UpgradeLevel,
};

pub use crate::players::{
    AlwaysAct, CashReserve, DecisionPolicy, JailExit, Passive, Player, PurchaseChoice,
    UpgradeChoice,
};

pub use crate::rules::GameResult;

pub use crate::game::{Game, GameBuilder, GameReport, Standing};
