//! Turn resolution.
//!
//! A player's turn is either a normal turn or a jailed turn:
//! - normal: roll, check for capture, move, and roll again on a double
//! - jailed: run the jail state machine, then a normal turn if released
//!
//! The doubles chain is a loop, not recursion. It ends on a non-double, or
//! as soon as the player is jailed or bankrupt.

use serde::{Deserialize, Serialize};

use super::effects::{on_land, on_transit, send_to_jail};
use super::jail::{serve_jail_turn, JailTurn};
use super::movement::journey;
use crate::core::{Dice, DiceRoll, EngineError, GameEvent, GameState, JailReason, PlayerId};
use crate::players::DecisionPolicy;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Last solvent player.
    Winner(PlayerId),
    /// No solvent player left.
    Draw,
    /// Round limit hit; solvent players, richest first.
    RoundLimit(Vec<PlayerId>),
    /// Stopped from outside between turns.
    Cancelled,
}

impl GameResult {
    /// Check if a player won outright.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// The outright winner, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            _ => None,
        }
    }
}

/// Result once at most one player is solvent, `None` while play continues.
#[must_use]
pub fn is_terminal(state: &GameState) -> Option<GameResult> {
    let mut solvent = state.solvent_players();
    match (solvent.next(), solvent.next()) {
        (Some(winner), None) => Some(GameResult::Winner(winner)),
        (None, _) => Some(GameResult::Draw),
        _ => None,
    }
}

/// Play one player's full turn, jailed or not.
pub fn play_turn(
    state: &mut GameState,
    dice: &mut dyn Dice,
    policy: &mut dyn DecisionPolicy,
    player: PlayerId,
) -> Result<(), EngineError> {
    if state.players[player].is_bankrupt() {
        return Ok(());
    }

    if state.players[player].in_jail() {
        play_jail_turn(state, dice, policy, player)
    } else {
        play_normal_turn(state, dice, policy, player, None)
    }
}

/// A jailed turn, followed by a normal turn if the player gets out.
pub fn play_jail_turn(
    state: &mut GameState,
    dice: &mut dyn Dice,
    policy: &mut dyn DecisionPolicy,
    player: PlayerId,
) -> Result<(), EngineError> {
    match serve_jail_turn(state, dice, policy, player) {
        JailTurn::Paid => play_normal_turn(state, dice, policy, player, None),
        JailTurn::RolledOut(roll) | JailTurn::ForcedOut(roll) => {
            play_normal_turn(state, dice, policy, player, Some(roll))
        }
        JailTurn::Stayed(_) | JailTurn::Bankrupt => Ok(()),
    }
}

/// A normal turn, including every re-roll earned by doubles.
///
/// `first_roll` is a roll already thrown (and recorded) by the jail state
/// machine; it is used for the first move instead of a fresh throw.
pub fn play_normal_turn(
    state: &mut GameState,
    dice: &mut dyn Dice,
    policy: &mut dyn DecisionPolicy,
    player: PlayerId,
    mut first_roll: Option<DiceRoll>,
) -> Result<(), EngineError> {
    loop {
        let roll = match first_roll.take() {
            Some(roll) => roll,
            None => {
                let roll = dice.roll();
                state.emit(GameEvent::Rolled { player, roll });
                let captured = state.players[player].recent_rolls.record(roll);
                if captured && !state.players[player].in_jail() {
                    log::debug!("{} rolled a third double", state.players[player]);
                    send_to_jail(state, player, JailReason::TripleDouble);
                    return Ok(());
                }
                roll
            }
        };

        resolve_movement(state, policy, player, roll)?;

        let mover = &state.players[player];
        if !roll.is_double() || mover.in_jail() || mover.is_bankrupt() {
            return Ok(());
        }
        log::trace!("{} rolled a double and goes again", mover);
    }
}

/// Move a player by a roll: transit effects along the way, then the
/// landing effect on the destination.
pub fn resolve_movement(
    state: &mut GameState,
    policy: &mut dyn DecisionPolicy,
    player: PlayerId,
    roll: DiceRoll,
) -> Result<(), EngineError> {
    let from = state.players[player].position;
    let path = journey(from, roll.pips(), state.board.len());
    let Some((&to, crossed)) = path.split_last() else {
        return Ok(());
    };

    for &tile in crossed {
        on_transit(state, player, tile);
    }

    state.place(player, to);
    log::trace!("{} rolled {} and moved {} -> {}", state.players[player], roll, from, to);
    state.emit(GameEvent::Moved { player, from, to });

    on_land(state, policy, player, to, roll)
}
