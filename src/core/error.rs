//! Error types.
//!
//! - `BoardError`: bad or missing board template (configuration)
//! - `SetupError`: the game cannot be assembled
//! - `EngineError`: an engine invariant was breached during play
//!
//! Running out of money is not an error; it is a bankruptcy.

use thiserror::Error;

use super::player::PlayerId;
use crate::board::TileId;

/// A board template could not be turned into a board.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("the {0} locale does not have a board template")]
    UnknownLocale(String),

    #[error("failed to read board template: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse board template: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("board template has no tiles")]
    Empty,

    #[error("board template has {0} tiles, at most 65535 are supported")]
    TooLarge(usize),

    #[error("board needs exactly one {kind} tile, found {count}")]
    TileCount { kind: &'static str, count: usize },

    #[error("tile name `{0}` appears more than once")]
    DuplicateName(String),

    #[error("{kind} tile `{tile}` is missing `{field}`")]
    MissingField {
        tile: String,
        kind: &'static str,
        field: &'static str,
    },

    #[error("tile `{tile}` has no rent for tiers {missing:?}")]
    RentTiers { tile: String, missing: Vec<u8> },
}

/// A game could not be assembled.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("a game needs 2 to 8 players, got {0}")]
    PlayerCount(usize),

    #[error("{names} nicknames given for {players} players")]
    NicknameCount { names: usize, players: usize },

    #[error("{policies} policies given for {players} players")]
    PolicyCount { policies: usize, players: usize },
}

/// An engine invariant was breached. Never a play-time outcome.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("{owner} holds {count} utilities, rent is only defined for 1 or 2")]
    UtilityCount { owner: PlayerId, count: usize },

    #[error("tile {tile} has no rent tier {tier}")]
    MissingRentTier { tile: TileId, tier: u8 },

    #[error("tile {0} cannot be owned")]
    NotPurchasable(TileId),

    #[error("tile {0} has no owner")]
    Unowned(TileId),
}
