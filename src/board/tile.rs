//! Tile records.
//!
//! A `Tile` is a name, a step on the loop and a `TileData` variant carrying
//! only the fields its kind needs. Purchasable tiles carry a `Deed`; colour
//! properties wrap it in a `Street` with building state.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::PlayerId;
use crate::economy::Money;

/// Handle to a tile: its 1-based step on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16")]
pub struct TileId(pub(crate) u16);

impl TileId {
    /// Create a handle from a 1-based step.
    ///
    /// Panics on step 0.
    #[must_use]
    pub const fn new(step: u16) -> Self {
        assert!(step >= 1, "tile steps start at 1");
        Self(step)
    }

    /// 1-based step.
    #[must_use]
    pub const fn step(self) -> usize {
        self.0 as usize
    }

    /// 0-based index into the board's tile list.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }
}

impl TryFrom<u16> for TileId {
    type Error = &'static str;

    fn try_from(step: u16) -> Result<Self, Self::Error> {
        if step == 0 {
            Err("tile steps start at 1")
        } else {
            Ok(Self(step))
        }
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind tag of a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileKind {
    Go,
    Tax,
    Jail,
    Chance,
    CommunityChest,
    Property,
    Station,
    Utility,
    GoToJail,
    FreeParking,
}

impl TileKind {
    /// Template tag of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TileKind::Go => "go",
            TileKind::Tax => "tax",
            TileKind::Jail => "jail",
            TileKind::Chance => "chance",
            TileKind::CommunityChest => "community_chest",
            TileKind::Property => "property",
            TileKind::Station => "station",
            TileKind::Utility => "utility",
            TileKind::GoToJail => "go_to_jail",
            TileKind::FreeParking => "free_parking",
        }
    }
}

impl std::fmt::Display for TileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rent tier of a street with a hotel.
pub const HOTEL_TIER: u8 = 5;

/// Rent by tier.
///
/// Properties use tiers `0..=4` for house counts and `HOTEL_TIER` for a hotel.
/// Stations use the number of stations the owner holds (`1..=4`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RentTable(BTreeMap<u8, Money>);

impl RentTable {
    /// Build from `(tier, rent)` pairs.
    pub fn new(tiers: impl IntoIterator<Item = (u8, Money)>) -> Self {
        Self(tiers.into_iter().collect())
    }

    /// Build from consecutive tiers starting at `first`.
    pub fn from_tiers(first: u8, rents: &[Money]) -> Self {
        Self::new((first..).zip(rents.iter().copied()))
    }

    /// Rent at a tier, if the table defines it.
    #[must_use]
    pub fn get(&self, tier: u8) -> Option<Money> {
        self.0.get(&tier).copied()
    }

    /// True when no tier is defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Ownership record of a purchasable tile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deed {
    /// Purchase price.
    pub price: Money,
    /// Rent by tier.
    pub rent: RentTable,
    /// Current owner, if bought.
    pub owner: Option<PlayerId>,
}

impl Deed {
    /// An unowned deed.
    #[must_use]
    pub fn new(price: Money, rent: RentTable) -> Self {
        Self {
            price,
            rent,
            owner: None,
        }
    }
}

/// A colour-group property with building state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Street {
    pub deed: Deed,
    /// Colour group key.
    pub group: String,
    /// Flat price of one house or the hotel.
    pub build_price: Money,
    /// Houses built, `0..=4`.
    pub houses: u8,
    /// Hotel built. Requires 4 houses first.
    pub hotel: bool,
}

impl Street {
    /// Rent tier for the current buildings.
    #[must_use]
    pub fn rent_tier(&self) -> u8 {
        if self.hotel {
            HOTEL_TIER
        } else {
            self.houses
        }
    }
}

/// Kind-specific data of a tile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileData {
    Go,
    Tax { amount: Money },
    Jail,
    Chance,
    CommunityChest,
    FreeParking,
    GoToJail,
    Property(Street),
    Station(Deed),
    Utility(Deed),
}

/// One tile of the board loop.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    name: String,
    id: TileId,
    data: TileData,
}

impl Tile {
    /// Create a tile at a step.
    pub fn new(id: TileId, name: impl Into<String>, data: TileData) -> Self {
        Self {
            name: name.into(),
            id,
            data,
        }
    }

    /// Unique tile name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Step handle.
    #[must_use]
    pub fn id(&self) -> TileId {
        self.id
    }

    /// Kind-specific data.
    #[must_use]
    pub fn data(&self) -> &TileData {
        &self.data
    }

    /// Kind tag.
    #[must_use]
    pub fn kind(&self) -> TileKind {
        match self.data {
            TileData::Go => TileKind::Go,
            TileData::Tax { .. } => TileKind::Tax,
            TileData::Jail => TileKind::Jail,
            TileData::Chance => TileKind::Chance,
            TileData::CommunityChest => TileKind::CommunityChest,
            TileData::FreeParking => TileKind::FreeParking,
            TileData::GoToJail => TileKind::GoToJail,
            TileData::Property(_) => TileKind::Property,
            TileData::Station(_) => TileKind::Station,
            TileData::Utility(_) => TileKind::Utility,
        }
    }

    /// Deed of a purchasable tile.
    #[must_use]
    pub fn deed(&self) -> Option<&Deed> {
        match &self.data {
            TileData::Property(street) => Some(&street.deed),
            TileData::Station(deed) | TileData::Utility(deed) => Some(deed),
            _ => None,
        }
    }

    /// Mutable deed of a purchasable tile.
    pub fn deed_mut(&mut self) -> Option<&mut Deed> {
        match &mut self.data {
            TileData::Property(street) => Some(&mut street.deed),
            TileData::Station(deed) | TileData::Utility(deed) => Some(deed),
            _ => None,
        }
    }

    /// Street data of a colour property.
    #[must_use]
    pub fn street(&self) -> Option<&Street> {
        match &self.data {
            TileData::Property(street) => Some(street),
            _ => None,
        }
    }

    /// Mutable street data of a colour property.
    pub fn street_mut(&mut self) -> Option<&mut Street> {
        match &mut self.data {
            TileData::Property(street) => Some(street),
            _ => None,
        }
    }

    /// True for properties, stations and utilities.
    #[must_use]
    pub fn is_purchasable(&self) -> bool {
        self.deed().is_some()
    }

    /// Current owner, if any.
    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        self.deed().and_then(|d| d.owner)
    }

    /// True when a player owns this tile.
    #[must_use]
    pub fn is_owned(&self) -> bool {
        self.owner().is_some()
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.kind(), self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mayfair() -> Tile {
        Tile::new(
            TileId(40),
            "Mayfair",
            TileData::Property(Street {
                deed: Deed::new(400, RentTable::from_tiers(0, &[50, 200, 600, 1400, 1700, 2000])),
                group: "dark_blue".into(),
                build_price: 200,
                houses: 0,
                hotel: false,
            }),
        )
    }

    #[test]
    fn test_tile_id_step_and_index() {
        let id = TileId::new(1);
        assert_eq!(id.step(), 1);
        assert_eq!(id.index(), 0);
        assert_eq!(format!("{}", TileId(12)), "#12");
    }

    #[test]
    #[should_panic(expected = "tile steps start at 1")]
    fn test_tile_id_rejects_step_zero() {
        let _ = TileId::new(0);
    }

    #[test]
    fn test_tile_id_json_rejects_step_zero() {
        assert_eq!(serde_json::from_str::<TileId>("12").unwrap(), TileId(12));
        assert!(serde_json::from_str::<TileId>("0").is_err());
        assert_eq!(serde_json::to_string(&TileId(7)).unwrap(), "7");
    }

    #[test]
    fn test_unowned_then_owned() {
        let mut tile = mayfair();
        assert!(tile.is_purchasable());
        assert!(!tile.is_owned());

        tile.deed_mut().unwrap().owner = Some(PlayerId(0));
        assert!(tile.is_owned());
        assert_eq!(tile.owner(), Some(PlayerId(0)));
    }

    #[test]
    fn test_rent_tier_uses_hotel_tier() {
        let mut tile = mayfair();
        let street = tile.street_mut().unwrap();
        street.houses = 3;
        assert_eq!(street.rent_tier(), 3);

        street.houses = 4;
        street.hotel = true;
        assert_eq!(street.rent_tier(), 5);
    }

    #[test]
    fn test_non_purchasable_has_no_deed() {
        let tile = Tile::new(TileId(5), "Income Tax", TileData::Tax { amount: 200 });
        assert_eq!(tile.kind(), TileKind::Tax);
        assert!(tile.deed().is_none());
        assert!(tile.owner().is_none());
        assert_eq!(format!("{}", tile), "Income Tax (tax, #5)");
    }

    #[test]
    fn test_rent_table_json_keys() {
        let table: RentTable = serde_json::from_str(r#"{ "1": 25, "2": 50 }"#).unwrap();
        assert_eq!(table.get(1), Some(25));
        assert_eq!(table.get(2), Some(50));
        assert_eq!(table.get(3), None);
        assert_eq!(table, RentTable::from_tiers(1, &[25, 50]));
    }
}
