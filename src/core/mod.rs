//! Core engine types: player handles, dice, RNG, configuration, events,
//! errors and the game state that ties them together.

pub mod config;
pub mod dice;
pub mod error;
pub mod event;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{RulesConfig, TurnOrder};
pub use dice::{Dice, DiceRoll, ScriptedDice};
pub use error::{BoardError, EngineError, SetupError};
pub use event::{EventLog, EventRecord, GameEvent, JailReason, JailRelease};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use state::GameState;
