//! Turn rules: movement, tile effects, jail and the turn engine.
//!
//! All functions here act on a `GameState` and take the dice and the acting
//! player's `DecisionPolicy` as arguments. The engine asks policies
//! questions but never interprets strategy itself.

pub mod effects;
pub mod engine;
pub mod jail;
pub mod movement;

pub use effects::{on_land, on_transit, send_to_jail};
pub use engine::{
    is_terminal, play_jail_turn, play_normal_turn, play_turn, resolve_movement, GameResult,
};
pub use jail::{pay_fine, serve_jail_turn, JailTurn};
pub use movement::{destination, journey, Journey};
