//! Buildings left in the bank.

use serde::{Deserialize, Serialize};

/// Houses and hotels not yet placed on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingSupply {
    houses: u32,
    hotels: u32,
}

impl BuildingSupply {
    #[must_use]
    pub const fn new(houses: u32, hotels: u32) -> Self {
        Self { houses, hotels }
    }

    #[must_use]
    pub const fn houses(&self) -> u32 {
        self.houses
    }

    #[must_use]
    pub const fn hotels(&self) -> u32 {
        self.hotels
    }

    /// Take one house. Returns false when none are left.
    pub fn take_house(&mut self) -> bool {
        if self.houses == 0 {
            return false;
        }
        self.houses -= 1;
        true
    }

    /// Take one hotel, returning the 4 houses it replaces.
    pub fn take_hotel(&mut self) -> bool {
        if self.hotels == 0 {
            return false;
        }
        self.hotels -= 1;
        self.houses += 4;
        true
    }
}
