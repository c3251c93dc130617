//! The board: a closed loop of tiles.
//!
//! A `Board` is built once from a `BoardTemplate` and keeps its tile list
//! fixed afterwards; only the ownership and building fields of purchasable
//! tiles change during play.
//!
//! ```
//! use monopoly_sim::board::{Board, BoardTemplate, TileKind};
//!
//! let board = Board::from_template(&BoardTemplate::for_locale("en-gb")?)?;
//! assert_eq!(board.len(), 40);
//! assert_eq!(board.tile(board.jail()).kind(), TileKind::Jail);
//! # Ok::<(), monopoly_sim::core::BoardError>(())
//! ```

pub mod template;
pub mod tile;

pub use template::{BoardTemplate, TileSpec, LOCALES};
pub use tile::{Deed, RentTable, Street, Tile, TileData, TileId, TileKind, HOTEL_TIER};

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{BoardError, PlayerId};

/// Ordered, fixed-size tile loop.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    tiles: Vec<Tile>,
    go: TileId,
    jail: TileId,
}

impl Board {
    /// Build and validate a board.
    ///
    /// The template must be non-empty, hold exactly one `go` and one `jail`
    /// tile, and use every name once. Every rent tier play can reach must be
    /// priced: `0..=HOTEL_TIER` on properties, and one tier per station on
    /// the board for stations.
    pub fn from_template(template: &BoardTemplate) -> Result<Self, BoardError> {
        if template.is_empty() {
            return Err(BoardError::Empty);
        }
        if template.len() > u16::MAX as usize {
            return Err(BoardError::TooLarge(template.len()));
        }

        let mut names = FxHashSet::default();
        let mut tiles = Vec::with_capacity(template.len());

        for (index, spec) in template.tiles().iter().enumerate() {
            if !names.insert(spec.name.as_str()) {
                return Err(BoardError::DuplicateName(spec.name.clone()));
            }
            let id = TileId::new(index as u16 + 1);
            tiles.push(Tile::new(id, spec.name.clone(), spec.to_data()?));
        }

        let go = Self::single(&tiles, TileKind::Go)?;
        let jail = Self::single(&tiles, TileKind::Jail)?;

        let stations = tiles.iter().filter(|t| t.kind() == TileKind::Station).count();
        for tile in &tiles {
            Self::check_rent_tiers(tile, stations)?;
        }

        log::debug!("Built a board of {} tiles", tiles.len());

        Ok(Self { tiles, go, jail })
    }

    fn single(tiles: &[Tile], kind: TileKind) -> Result<TileId, BoardError> {
        let mut found = tiles.iter().filter(|t| t.kind() == kind);
        match (found.next(), found.count()) {
            (Some(tile), 0) => Ok(tile.id()),
            (first, rest) => Err(BoardError::TileCount {
                kind: kind.as_str(),
                count: first.map_or(0, |_| 1 + rest),
            }),
        }
    }

    fn check_rent_tiers(tile: &Tile, stations: usize) -> Result<(), BoardError> {
        let (deed, tiers) = match tile.data() {
            TileData::Property(street) => (&street.deed, 0..=HOTEL_TIER),
            TileData::Station(deed) => (deed, 1..=u8::try_from(stations).unwrap_or(u8::MAX)),
            _ => return Ok(()),
        };

        let missing: Vec<u8> = tiers.filter(|&tier| deed.rent.get(tier).is_none()).collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(BoardError::RentTiers {
                tile: tile.name().to_string(),
                missing,
            })
        }
    }

    /// Number of tiles (N).
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false; a board has at least one tile.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The GO tile.
    #[must_use]
    pub fn go(&self) -> TileId {
        self.go
    }

    /// The jail tile.
    #[must_use]
    pub fn jail(&self) -> TileId {
        self.jail
    }

    /// Tile at a step.
    ///
    /// Panics if the handle is not on this board.
    #[must_use]
    pub fn tile(&self, id: TileId) -> &Tile {
        &self.tiles[id.index()]
    }

    /// Mutable tile at a step.
    pub fn tile_mut(&mut self, id: TileId) -> &mut Tile {
        &mut self.tiles[id.index()]
    }

    /// All tiles in step order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Look a tile up by name.
    #[must_use]
    pub fn tile_by_name(&self, name: &str) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.name() == name)
    }

    /// Handle of a named tile.
    #[must_use]
    pub fn id_of(&self, name: &str) -> Option<TileId> {
        self.tile_by_name(name).map(Tile::id)
    }

    /// Tiles owned by a player, in step order.
    pub fn owned_by(&self, player: PlayerId) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(move |t| t.owner() == Some(player))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_template() -> Vec<TileSpec> {
        vec![
            TileSpec::plain(TileKind::Go, "GO"),
            TileSpec::property("Brown 1", "brown", 60, 50, &[2, 10, 30, 90, 160, 250]),
            TileSpec::plain(TileKind::Jail, "Jail"),
            TileSpec::tax("Tax", 100),
        ]
    }

    #[test]
    fn test_en_gb_board() {
        let board = Board::from_template(&BoardTemplate::for_locale("en-gb").unwrap()).unwrap();

        assert_eq!(board.len(), 40);
        assert_eq!(board.go(), TileId(1));
        assert_eq!(board.jail(), TileId(11));
        assert_eq!(board.tile(TileId(31)).kind(), TileKind::GoToJail);

        for (i, tile) in board.tiles().enumerate() {
            assert_eq!(tile.id().step(), i + 1);
        }
    }

    #[test]
    fn test_lookup_by_name() {
        let board = Board::from_template(&BoardTemplate::for_locale("en-gb").unwrap()).unwrap();

        let mayfair = board.tile_by_name("Mayfair").unwrap();
        assert_eq!(mayfair.id(), TileId(40));
        assert!(!mayfair.is_owned());
        assert_eq!(board.id_of("Income Tax"), Some(TileId(5)));
        assert!(board.tile_by_name("Boardwalk").is_none());
    }

    #[test]
    fn test_empty_template() {
        let err = Board::from_template(&BoardTemplate::from_tiles(vec![])).unwrap_err();
        assert!(matches!(err, BoardError::Empty));
    }

    #[test]
    fn test_missing_jail() {
        let mut tiles = small_template();
        tiles.remove(2);
        let err = Board::from_template(&BoardTemplate::from_tiles(tiles)).unwrap_err();
        assert!(matches!(err, BoardError::TileCount { kind: "jail", count: 0 }));
    }

    #[test]
    fn test_two_go_tiles() {
        let mut tiles = small_template();
        tiles.push(TileSpec::plain(TileKind::Go, "GO again"));
        let err = Board::from_template(&BoardTemplate::from_tiles(tiles)).unwrap_err();
        assert!(matches!(err, BoardError::TileCount { kind: "go", count: 2 }));
    }

    #[test]
    fn test_duplicate_name() {
        let mut tiles = small_template();
        tiles.push(TileSpec::tax("Tax", 50));
        let err = Board::from_template(&BoardTemplate::from_tiles(tiles)).unwrap_err();
        assert!(matches!(err, BoardError::DuplicateName(ref n) if n == "Tax"));
    }

    #[test]
    fn test_property_without_every_rent_tier() {
        let template = BoardTemplate::from_json(
            r#"[
                { "type": "go", "name": "GO" },
                { "type": "property", "name": "Lane", "group": "red", "price": 100,
                  "build_price": 50, "rent": { "0": 10 } },
                { "type": "jail", "name": "Jail" },
                { "type": "free_parking", "name": "Free Parking" }
            ]"#,
        )
        .unwrap();

        let err = Board::from_template(&template).unwrap_err();
        assert!(matches!(
            err,
            BoardError::RentTiers { ref tile, ref missing }
                if tile == "Lane" && missing == &[1, 2, 3, 4, 5]
        ));
        assert_eq!(err.to_string(), "tile `Lane` has no rent for tiers [1, 2, 3, 4, 5]");
    }

    #[test]
    fn test_station_table_covers_every_station() {
        let mut tiles = small_template();
        tiles.push(TileSpec::station("North", 200, &[25, 50]));
        tiles.push(TileSpec::station("South", 200, &[25, 50, 100]));
        assert!(Board::from_template(&BoardTemplate::from_tiles(tiles.clone())).is_ok());

        tiles.push(TileSpec::station("East", 200, &[25, 50, 100]));
        let err = Board::from_template(&BoardTemplate::from_tiles(tiles)).unwrap_err();
        assert!(matches!(
            err,
            BoardError::RentTiers { ref tile, ref missing } if tile == "North" && missing == &[3]
        ));
    }

    #[test]
    fn test_owned_by() {
        let mut board = Board::from_template(&BoardTemplate::from_tiles(small_template())).unwrap();
        board.tile_mut(TileId(2)).deed_mut().unwrap().owner = Some(PlayerId(1));

        let owned: Vec<_> = board.owned_by(PlayerId(1)).map(Tile::id).collect();
        assert_eq!(owned, vec![TileId(2)]);
        assert_eq!(board.owned_by(PlayerId(0)).count(), 0);
    }
}
