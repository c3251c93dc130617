//! Final standings.

use serde::{Deserialize, Serialize};

use crate::board::TileId;
use crate::core::{GameState, PlayerId};
use crate::economy::Money;
use crate::rules::GameResult;

/// One player's position at the end (or any point) of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player: PlayerId,
    pub nickname: String,
    pub cash: Money,
    pub bankrupt: bool,
    pub position: TileId,
    /// Names of owned tiles in board order.
    pub properties: Vec<String>,
}

/// Summary of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameReport {
    pub seed: u64,
    /// Rounds started, counting the last one.
    pub rounds: u32,
    pub turn_order: Vec<PlayerId>,
    pub result: Option<GameResult>,
    pub standings: Vec<Standing>,
}

impl GameReport {
    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Standings ranked: solvent players first, then by cash, then by seat.
#[must_use]
pub fn standings(state: &GameState) -> Vec<Standing> {
    let mut standings: Vec<Standing> = state
        .players
        .iter()
        .map(|(id, player)| Standing {
            player: id,
            nickname: player.nickname().to_string(),
            cash: player.cash(),
            bankrupt: player.is_bankrupt(),
            position: player.position,
            properties: player
                .portfolio()
                .iter()
                .map(|&tile| state.board.tile(tile).name().to_string())
                .collect(),
        })
        .collect();

    standings.sort_by(|a, b| {
        a.bankrupt
            .cmp(&b.bankrupt)
            .then(b.cash.cmp(&a.cash))
            .then(a.player.cmp(&b.player))
    });
    standings
}
