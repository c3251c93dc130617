//! Per-tile effects.
//!
//! Every tile kind reacts to two things:
//! - `on_transit`: the token crosses the tile without stopping
//! - `on_land`: the move ends on the tile
//!
//! Both are no-ops unless listed below.
//!
//! | Kind                         | Transit        | Land                    |
//! |------------------------------|----------------|-------------------------|
//! | GO                           | pay GO bonus   | nothing                 |
//! | Tax                          |                | withdraw the tax        |
//! | Go-To-Jail                   |                | send to jail            |
//! | Property / Station / Utility |                | `resolve_landing`       |

use crate::board::{TileData, TileId};
use crate::core::{DiceRoll, EngineError, GameEvent, GameState, JailReason, PlayerId};
use crate::economy::{resolve_landing, Money, Withdrawal};
use crate::players::DecisionPolicy;

/// Effect of crossing a tile mid-move.
pub fn on_transit(state: &mut GameState, player: PlayerId, tile: TileId) {
    if let TileData::Go = state.board.tile(tile).data() {
        let bonus = state.rules.go_bonus;
        state.players[player].wallet.deposit(bonus);
        log::trace!("{} passed GO and collected {}", state.players[player], bonus);
        state.emit(GameEvent::PassedGo { player, bonus });
    }
}

/// Effect of ending a move on a tile.
pub fn on_land(
    state: &mut GameState,
    policy: &mut dyn DecisionPolicy,
    player: PlayerId,
    tile: TileId,
    roll: DiceRoll,
) -> Result<(), EngineError> {
    match *state.board.tile(tile).data() {
        TileData::Tax { amount } => {
            charge_tax(state, player, tile, amount);
            Ok(())
        }
        TileData::GoToJail => {
            send_to_jail(state, player, JailReason::GoToJailTile);
            Ok(())
        }
        TileData::Property(_) | TileData::Station(_) | TileData::Utility(_) => {
            let outcome = resolve_landing(state, policy, player, tile, roll)?;
            log::trace!(
                "{} landed on {}: {:?}",
                state.players[player],
                state.board.tile(tile),
                outcome
            );
            Ok(())
        }
        TileData::Go
        | TileData::Jail
        | TileData::Chance
        | TileData::CommunityChest
        | TileData::FreeParking => Ok(()),
    }
}

/// Put a player in jail, clearing their roll history.
pub fn send_to_jail(state: &mut GameState, player: PlayerId, reason: JailReason) {
    state.imprison(player);
    state.players[player].recent_rolls.clear();
    log::debug!("{} was sent to jail ({:?})", state.players[player], reason);
    state.emit(GameEvent::SentToJail { player, reason });
}

fn charge_tax(state: &mut GameState, player: PlayerId, tile: TileId, amount: Money) {
    let withdrawal = state.players[player].wallet.withdraw(amount);
    state.emit(GameEvent::Taxed { player, tile, amount });

    if withdrawal == Withdrawal::Bankrupt {
        log::debug!("{} could not pay {} tax and is bankrupt", state.players[player], amount);
        state.emit(GameEvent::Bankrupt { player });
    }
}
