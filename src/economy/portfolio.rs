//! Portfolio grouping.
//!
//! A player's tiles grouped by colour group (properties) or by kind
//! (stations, utilities). Station and utility rent depend on these counts.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::board::{Board, TileData, TileId};
use crate::core::PlayerId;

/// Grouping key of an owned tile.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PortfolioKey {
    /// A colour group of properties.
    Group(String),
    Stations,
    Utilities,
}

impl std::fmt::Display for PortfolioKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PortfolioKey::Group(group) => f.write_str(group),
            PortfolioKey::Stations => f.write_str("stations"),
            PortfolioKey::Utilities => f.write_str("utilities"),
        }
    }
}

/// Owned tiles by group, each group in step order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Portfolio {
    groups: FxHashMap<PortfolioKey, Vec<TileId>>,
}

impl Portfolio {
    /// Tiles in a group.
    #[must_use]
    pub fn get(&self, key: &PortfolioKey) -> &[TileId] {
        self.groups.get(key).map_or(&[], Vec::as_slice)
    }

    /// Number of tiles in a group.
    #[must_use]
    pub fn count(&self, key: &PortfolioKey) -> usize {
        self.get(key).len()
    }

    /// Groups with at least one tile.
    pub fn iter(&self) -> impl Iterator<Item = (&PortfolioKey, &[TileId])> {
        self.groups.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Total tiles held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// True when nothing is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Group everything `player` owns on `board`.
pub fn get_portfolio(board: &Board, player: PlayerId) -> Portfolio {
    let mut groups: FxHashMap<PortfolioKey, Vec<TileId>> = FxHashMap::default();

    for tile in board.owned_by(player) {
        let key = match tile.data() {
            TileData::Property(street) => PortfolioKey::Group(street.group.clone()),
            TileData::Station(_) => PortfolioKey::Stations,
            TileData::Utility(_) => PortfolioKey::Utilities,
            _ => continue,
        };
        groups.entry(key).or_default().push(tile.id());
    }

    Portfolio { groups }
}
