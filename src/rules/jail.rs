//! The jail state machine.
//!
//! ```text
//! FREE ──(go-to-jail tile | triple double)──> IN_JAIL(0)
//! IN_JAIL(n) ──pay──────────────> FREE, fresh roll
//! IN_JAIL(n) ──wait, double─────> FREE, moves with that roll
//! IN_JAIL(n<3) ──wait, no double> IN_JAIL(n+1)
//! IN_JAIL(3) ──wait, no double──> pay fine, FREE, moves with that roll
//! ```

use crate::core::{Dice, DiceRoll, GameEvent, GameState, JailRelease, PlayerId};
use crate::economy::Withdrawal;
use crate::players::{DecisionPolicy, JailExit};

/// Result of one jailed turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JailTurn {
    /// Paid the fine; the player takes a normal turn with a fresh roll.
    Paid,
    /// Rolled a double; the player moves with this roll.
    RolledOut(DiceRoll),
    /// Out of waits; the fine was taken and the player moves with this roll.
    ForcedOut(DiceRoll),
    /// Still in jail after this many failed waits.
    Stayed(u8),
    /// The fine bankrupted the player.
    Bankrupt,
}

/// Pay the jail fine and leave jail.
///
/// Leaving happens even when the fine bankrupts the player.
pub fn pay_fine(state: &mut GameState, player: PlayerId, release: JailRelease) -> Withdrawal {
    let fine = state.rules.jail_fine;
    let prisoner = &mut state.players[player];
    let withdrawal = prisoner.wallet.withdraw(fine);
    prisoner.release();

    log::debug!("{} paid {} to leave jail ({:?})", prisoner, fine, release);
    state.emit(GameEvent::LeftJail { player, release });
    if withdrawal == Withdrawal::Bankrupt {
        state.emit(GameEvent::Bankrupt { player });
    }

    withdrawal
}

/// Run one jailed turn up to the point where the player would move.
pub fn serve_jail_turn(
    state: &mut GameState,
    dice: &mut dyn Dice,
    policy: &mut dyn DecisionPolicy,
    player: PlayerId,
) -> JailTurn {
    let fine = state.rules.jail_fine;

    if policy.choose_jail_exit(&state.players[player], fine) == JailExit::Pay {
        return match pay_fine(state, player, JailRelease::PaidFine) {
            Withdrawal::Paid => JailTurn::Paid,
            Withdrawal::Bankrupt => JailTurn::Bankrupt,
        };
    }

    let roll = dice.roll();
    state.emit(GameEvent::Rolled { player, roll });
    // Recorded for history only; jail rolls never trigger capture.
    let _ = state.players[player].recent_rolls.record(roll);

    if roll.is_double() {
        state.players[player].release();
        log::debug!("{} rolled {} and left jail", state.players[player], roll);
        state.emit(GameEvent::LeftJail {
            player,
            release: JailRelease::RolledDouble,
        });
        return JailTurn::RolledOut(roll);
    }

    if state.players[player].jail_wait_count() < state.rules.max_jail_waits {
        let wait_count = state.players[player].record_failed_wait();
        log::trace!("{} stays in jail ({} waits)", state.players[player], wait_count);
        state.emit(GameEvent::JailWait { player, wait_count });
        return JailTurn::Stayed(wait_count);
    }

    match pay_fine(state, player, JailRelease::ForcedFine) {
        Withdrawal::Paid => JailTurn::ForcedOut(roll),
        Withdrawal::Bankrupt => JailTurn::Bankrupt,
    }
}
