//! Board templates: the ordered tile list a board is built from.
//!
//! A template is a JSON array of tile descriptors tagged by `type`:
//!
//! ```json
//! [
//!   { "type": "go", "name": "GO" },
//!   { "type": "property", "name": "Old Kent Road", "group": "brown",
//!     "price": 60, "build_price": 50,
//!     "rent": { "0": 2, "1": 10, "2": 30, "3": 90, "4": 160, "5": 250 } },
//!   { "type": "tax", "name": "Income Tax", "tax": 200 },
//!   { "type": "station", "name": "King's Cross Station", "price": 200,
//!     "rent": { "1": 25, "2": 50, "3": 100, "4": 200 } },
//!   { "type": "utility", "name": "Electric Company", "price": 150 },
//!   { "type": "jail", "name": "Jail" }
//! ]
//! ```
//!
//! Steps are assigned by position, starting at 1.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::tile::{Deed, RentTable, Street, TileData, TileKind};
use crate::core::BoardError;
use crate::economy::Money;

/// Locales with an embedded template.
pub const LOCALES: &[&str] = &["en-gb"];

const EN_GB: &str = include_str!("../../locales/board_en-gb.json");

/// One tile descriptor of a template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSpec {
    #[serde(rename = "type")]
    pub kind: TileKind,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rent: Option<RentTable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_price: Option<Money>,
}

impl TileSpec {
    /// A tile with no kind-specific fields (go, jail, chance, ...).
    pub fn plain(kind: TileKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            tax: None,
            price: None,
            rent: None,
            group: None,
            build_price: None,
        }
    }

    /// A tax tile.
    pub fn tax(name: impl Into<String>, amount: Money) -> Self {
        Self {
            tax: Some(amount),
            ..Self::plain(TileKind::Tax, name)
        }
    }

    /// A colour property; `rents` are tiers 0 to 5.
    pub fn property(
        name: impl Into<String>,
        group: impl Into<String>,
        price: Money,
        build_price: Money,
        rents: &[Money],
    ) -> Self {
        Self {
            price: Some(price),
            rent: Some(RentTable::from_tiers(0, rents)),
            group: Some(group.into()),
            build_price: Some(build_price),
            ..Self::plain(TileKind::Property, name)
        }
    }

    /// A station; `rents` are for owning 1, 2, ... stations.
    pub fn station(name: impl Into<String>, price: Money, rents: &[Money]) -> Self {
        Self {
            price: Some(price),
            rent: Some(RentTable::from_tiers(1, rents)),
            ..Self::plain(TileKind::Station, name)
        }
    }

    /// A utility.
    pub fn utility(name: impl Into<String>, price: Money) -> Self {
        Self {
            price: Some(price),
            ..Self::plain(TileKind::Utility, name)
        }
    }

    /// Build the tile data selected by the kind tag.
    pub fn to_data(&self) -> Result<TileData, BoardError> {
        let data = match self.kind {
            TileKind::Go => TileData::Go,
            TileKind::Jail => TileData::Jail,
            TileKind::Chance => TileData::Chance,
            TileKind::CommunityChest => TileData::CommunityChest,
            TileKind::FreeParking => TileData::FreeParking,
            TileKind::GoToJail => TileData::GoToJail,
            TileKind::Tax => TileData::Tax {
                amount: self.required(self.tax, "tax")?,
            },
            TileKind::Property => TileData::Property(Street {
                deed: self.deed()?,
                group: self.required(self.group.clone(), "group")?,
                build_price: self.required(self.build_price, "build_price")?,
                houses: 0,
                hotel: false,
            }),
            TileKind::Station => TileData::Station(self.deed()?),
            TileKind::Utility => TileData::Utility(Deed::new(
                self.required(self.price, "price")?,
                self.rent.clone().unwrap_or_default(),
            )),
        };

        Ok(data)
    }

    fn deed(&self) -> Result<Deed, BoardError> {
        Ok(Deed::new(
            self.required(self.price, "price")?,
            self.required(self.rent.clone(), "rent")?,
        ))
    }

    fn required<T>(&self, value: Option<T>, field: &'static str) -> Result<T, BoardError> {
        value.ok_or_else(|| BoardError::MissingField {
            tile: self.name.clone(),
            kind: self.kind.as_str(),
            field,
        })
    }
}

/// An ordered list of tile descriptors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardTemplate {
    tiles: Vec<TileSpec>,
}

impl BoardTemplate {
    /// Wrap descriptors already in board order.
    pub fn from_tiles(tiles: Vec<TileSpec>) -> Self {
        Self { tiles }
    }

    /// Parse a JSON template.
    pub fn from_json(json: &str) -> Result<Self, BoardError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON template file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, BoardError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The embedded template of a locale.
    pub fn for_locale(locale: &str) -> Result<Self, BoardError> {
        match locale {
            "en-gb" => Self::from_json(EN_GB),
            other => Err(BoardError::UnknownLocale(other.to_string())),
        }
    }

    /// Descriptors in board order.
    #[must_use]
    pub fn tiles(&self) -> &[TileSpec] {
        &self.tiles
    }

    /// Number of descriptors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// True when the template has no tiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
