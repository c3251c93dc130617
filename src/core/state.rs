//! Game state: board, players, building supply, rules and event log.
//!
//! Everything a turn mutates lives here. Decision policies and dice are
//! kept outside so the state can be cloned and inspected freely.

use super::config::RulesConfig;
use super::event::{EventLog, GameEvent};
use super::player::{PlayerId, PlayerMap};
use crate::board::{Board, Tile, TileId};
use crate::economy::{get_portfolio, BuildingSupply, Portfolio};
use crate::players::Player;

/// Full mutable state of one game.
#[derive(Clone, Debug)]
pub struct GameState {
    /// The tile loop.
    pub board: Board,

    /// Players in seat order.
    pub players: PlayerMap<Player>,

    /// Buildings still in the bank.
    pub supply: BuildingSupply,

    /// Rules in force.
    pub rules: RulesConfig,

    /// Observable side effects.
    pub events: EventLog,

    /// Current round (starts at 1).
    pub round: u32,
}

impl GameState {
    /// Seat players on GO with the starting cash.
    pub fn new(board: Board, nicknames: &[String], rules: RulesConfig) -> Self {
        let go = board.go();
        let players = PlayerMap::new(nicknames.len(), |id| {
            Player::new(id, nicknames[id.index()].clone(), go, rules.starting_cash)
        });

        Self {
            supply: BuildingSupply::new(rules.house_supply, rules.hotel_supply),
            events: EventLog::new(rules.record_events),
            board,
            players,
            rules,
            round: 1,
        }
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Immutable player lookup.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// Mutable player lookup.
    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    /// Tile a player stands on.
    #[must_use]
    pub fn position_of(&self, id: PlayerId) -> &Tile {
        self.board.tile(self.players[id].position)
    }

    /// Players not yet bankrupt, in seat order.
    pub fn solvent_players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players
            .iter()
            .filter(|(_, p)| !p.is_bankrupt())
            .map(|(id, _)| id)
    }

    /// Grouped holdings of a player.
    #[must_use]
    pub fn portfolio(&self, id: PlayerId) -> Portfolio {
        get_portfolio(&self.board, id)
    }

    /// Jail a player on the jail tile.
    pub fn imprison(&mut self, id: PlayerId) {
        let jail = self.board.jail();
        self.players[id].imprison(jail);
    }

    /// Record an event.
    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Move a player onto a tile without triggering anything.
    pub fn place(&mut self, id: PlayerId, tile: TileId) {
        self.players[id].position = tile;
    }
}
