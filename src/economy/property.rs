//! Property economy: purchase, upgrades and rent.
//!
//! `resolve_landing` is the decision tree run when a move ends on a
//! purchasable tile:
//!
//! - unowned: offer it to the player if they can afford it
//! - owned by the player: offer the next building on a colour property
//! - owned by someone else: charge rent, or bankrupt the payer
//!
//! Purchase and building money leaves the game; only rent changes hands.

use serde::{Deserialize, Serialize};

use super::portfolio::{get_portfolio, PortfolioKey};
use super::wallet::{Money, Wallet, Withdrawal};
use crate::board::{Board, Tile, TileData, TileId};
use crate::core::{DiceRoll, EngineError, GameEvent, GameState, PlayerId};
use crate::players::{DecisionPolicy, PurchaseChoice, UpgradeChoice};

/// Houses a street holds before it can take a hotel.
pub const MAX_HOUSES: u8 = 4;

/// Utility rent multiplier with one utility owned.
pub const ONE_UTILITY_MULTIPLIER: Money = 4;

/// Utility rent multiplier with both utilities owned.
pub const TWO_UTILITY_MULTIPLIER: Money = 10;

/// The next building on a street.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeLevel {
    House,
    Hotel,
}

impl std::fmt::Display for UpgradeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpgradeLevel::House => f.write_str("house"),
            UpgradeLevel::Hotel => f.write_str("hotel"),
        }
    }
}

/// What happened when a player landed on a purchasable tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LandingOutcome {
    /// Bought the tile.
    Purchased { price: Money },
    /// Could afford it, policy said no.
    PurchaseDeclined,
    /// Not enough cash to buy.
    CannotAffordPurchase,
    /// Built a house or hotel.
    Upgraded { level: UpgradeLevel, price: Money },
    /// Own tile with nothing to build, or the build was declined.
    NoUpgrade,
    /// Paid rent to the owner.
    RentPaid { owner: PlayerId, amount: Money },
    /// Could not pay rent and went bankrupt.
    Bankrupted { owner: PlayerId, rent: Money },
    /// Owner is bankrupt; no rent is due.
    OwnerBankrupt { owner: PlayerId },
}

/// Next building and its price, if the tile can take one.
///
/// Hotels come after exactly 4 houses. Prices are flat per street. Fully
/// built streets, stations and utilities return `None`.
#[must_use]
pub fn get_upgrade_price(tile: &Tile) -> Option<(UpgradeLevel, Money)> {
    let street = tile.street()?;

    if street.hotel {
        None
    } else if street.houses >= MAX_HOUSES {
        Some((UpgradeLevel::Hotel, street.build_price))
    } else {
        Some((UpgradeLevel::House, street.build_price))
    }
}

/// Rent due on a tile for a given roll.
///
/// - property: tier = house count, or 5 with a hotel
/// - station: tier = number of stations the owner holds
/// - utility: 4× or 10× the pips for 1 or 2 utilities owned
pub fn get_rent_cost(board: &Board, tile_id: TileId, roll: DiceRoll) -> Result<Money, EngineError> {
    let tile = board.tile(tile_id);

    match tile.data() {
        TileData::Property(street) => {
            let tier = street.rent_tier();
            street
                .deed
                .rent
                .get(tier)
                .ok_or(EngineError::MissingRentTier { tile: tile_id, tier })
        }
        TileData::Station(deed) => {
            let owner = deed.owner.ok_or(EngineError::Unowned(tile_id))?;
            let stations = get_portfolio(board, owner).count(&PortfolioKey::Stations);
            let tier = u8::try_from(stations).unwrap_or(u8::MAX);
            deed.rent
                .get(tier)
                .ok_or(EngineError::MissingRentTier { tile: tile_id, tier })
        }
        TileData::Utility(deed) => {
            let owner = deed.owner.ok_or(EngineError::Unowned(tile_id))?;
            let pips = Money::from(roll.pips());
            match get_portfolio(board, owner).count(&PortfolioKey::Utilities) {
                1 => Ok(ONE_UTILITY_MULTIPLIER * pips),
                2 => Ok(TWO_UTILITY_MULTIPLIER * pips),
                count => Err(EngineError::UtilityCount { owner, count }),
            }
        }
        _ => Err(EngineError::NotPurchasable(tile_id)),
    }
}

/// Run the purchase / upgrade / rent decision tree.
pub fn resolve_landing(
    state: &mut GameState,
    policy: &mut dyn DecisionPolicy,
    player: PlayerId,
    tile_id: TileId,
    roll: DiceRoll,
) -> Result<LandingOutcome, EngineError> {
    let (owner, price) = state
        .board
        .tile(tile_id)
        .deed()
        .map(|deed| (deed.owner, deed.price))
        .ok_or(EngineError::NotPurchasable(tile_id))?;

    match owner {
        None => Ok(offer_purchase(state, policy, player, tile_id, price)),
        Some(owner) if owner == player => Ok(offer_upgrade(state, policy, player, tile_id)),
        Some(owner) => charge_rent(state, player, owner, tile_id, roll),
    }
}

fn offer_purchase(
    state: &mut GameState,
    policy: &mut dyn DecisionPolicy,
    player: PlayerId,
    tile_id: TileId,
    price: Money,
) -> LandingOutcome {
    let buyer = &state.players[player];
    if !buyer.wallet.can_afford(price) {
        log::trace!("{} cannot afford {} at {}", buyer, state.board.tile(tile_id), price);
        return LandingOutcome::CannotAffordPurchase;
    }

    let tile = state.board.tile(tile_id);
    if policy.choose_purchase(buyer, tile, price) == PurchaseChoice::Skip {
        log::trace!("{} declined to buy {}", buyer, tile);
        return LandingOutcome::PurchaseDeclined;
    }

    let buyer = &mut state.players[player];
    let paid = buyer.wallet.withdraw(price);
    debug_assert_eq!(paid, Withdrawal::Paid, "affordability checked above");
    buyer.acquire(tile_id);
    if let Some(deed) = state.board.tile_mut(tile_id).deed_mut() {
        deed.owner = Some(player);
    }

    log::debug!(
        "{} bought {} for {}",
        state.players[player],
        state.board.tile(tile_id),
        price
    );
    state.emit(GameEvent::Purchased {
        player,
        tile: tile_id,
        price,
    });

    LandingOutcome::Purchased { price }
}

fn offer_upgrade(
    state: &mut GameState,
    policy: &mut dyn DecisionPolicy,
    player: PlayerId,
    tile_id: TileId,
) -> LandingOutcome {
    let tile = state.board.tile(tile_id);
    let Some((level, price)) = get_upgrade_price(tile) else {
        return LandingOutcome::NoUpgrade;
    };

    let owner = &state.players[player];
    let in_supply = match level {
        UpgradeLevel::House => state.supply.houses() > 0,
        UpgradeLevel::Hotel => state.supply.hotels() > 0,
    };
    if !owner.wallet.can_afford(price) || !in_supply {
        return LandingOutcome::NoUpgrade;
    }

    if policy.choose_upgrade(owner, tile, level, price) == UpgradeChoice::Skip {
        return LandingOutcome::NoUpgrade;
    }

    let taken = match level {
        UpgradeLevel::House => state.supply.take_house(),
        UpgradeLevel::Hotel => state.supply.take_hotel(),
    };
    debug_assert!(taken, "supply checked above");

    if let Some(street) = state.board.tile_mut(tile_id).street_mut() {
        match level {
            UpgradeLevel::House => street.houses += 1,
            UpgradeLevel::Hotel => street.hotel = true,
        }
    }
    let paid = state.players[player].wallet.withdraw(price);
    debug_assert_eq!(paid, Withdrawal::Paid, "affordability checked above");

    log::debug!(
        "{} built a {} on {} for {}",
        state.players[player],
        level,
        state.board.tile(tile_id),
        price
    );
    state.emit(GameEvent::Upgraded {
        player,
        tile: tile_id,
        level,
        price,
    });

    LandingOutcome::Upgraded { level, price }
}

fn charge_rent(
    state: &mut GameState,
    payer: PlayerId,
    owner: PlayerId,
    tile_id: TileId,
    roll: DiceRoll,
) -> Result<LandingOutcome, EngineError> {
    if state.players[owner].is_bankrupt() {
        return Ok(LandingOutcome::OwnerBankrupt { owner });
    }

    let rent = get_rent_cost(&state.board, tile_id, roll)?;

    let (payer_state, owner_state) = state.players.pair_mut(payer, owner);
    let outcome = match Wallet::transfer(&mut payer_state.wallet, &mut owner_state.wallet, rent) {
        Withdrawal::Paid => {
            log::debug!("{} paid {} rent to {}", payer_state, rent, owner_state);
            LandingOutcome::RentPaid { owner, amount: rent }
        }
        Withdrawal::Bankrupt => {
            log::debug!(
                "{} cannot pay {} rent to {} and is bankrupt",
                payer_state,
                rent,
                owner_state
            );
            LandingOutcome::Bankrupted { owner, rent }
        }
    };

    match outcome {
        LandingOutcome::RentPaid { amount, .. } => state.emit(GameEvent::RentPaid {
            payer,
            owner,
            tile: tile_id,
            amount,
        }),
        _ => state.emit(GameEvent::Bankrupt { player: payer }),
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardTemplate;
    use crate::core::RulesConfig;
    use crate::players::{AlwaysAct, Passive};

    fn game_state() -> GameState {
        let board = Board::from_template(&BoardTemplate::for_locale("en-gb").unwrap()).unwrap();
        let names = vec!["Oliver".to_string(), "Amelia".to_string()];
        GameState::new(board, &names, RulesConfig::default())
    }

    fn id(state: &GameState, name: &str) -> TileId {
        state.board.id_of(name).unwrap()
    }

    fn give(state: &mut GameState, name: &str, player: PlayerId) -> TileId {
        let tile = id(state, name);
        state.board.tile_mut(tile).deed_mut().unwrap().owner = Some(player);
        state.players[player].acquire(tile);
        tile
    }

    #[test]
    fn test_house_upgrade_price() {
        let state = game_state();
        let mayfair = state.board.tile_by_name("Mayfair").unwrap();
        assert_eq!(get_upgrade_price(mayfair), Some((UpgradeLevel::House, 200)));
    }

    #[test]
    fn test_hotel_upgrade_price() {
        let mut state = game_state();
        let tile = id(&state, "Mayfair");
        state.board.tile_mut(tile).street_mut().unwrap().houses = 4;
        assert_eq!(
            get_upgrade_price(state.board.tile(tile)),
            Some((UpgradeLevel::Hotel, 200))
        );

        state.board.tile_mut(tile).street_mut().unwrap().hotel = true;
        assert_eq!(get_upgrade_price(state.board.tile(tile)), None);
    }

    #[test]
    fn test_stations_never_upgrade() {
        let state = game_state();
        let station = state.board.tile_by_name("Marylebone Station").unwrap();
        assert_eq!(get_upgrade_price(station), None);
    }

    #[test]
    fn test_property_rent_scales_with_houses() {
        let mut state = game_state();
        let tile = id(&state, "Mayfair");

        assert_eq!(get_rent_cost(&state.board, tile, DiceRoll(1, 1)), Ok(50));

        state.board.tile_mut(tile).street_mut().unwrap().houses = 3;
        assert_eq!(get_rent_cost(&state.board, tile, DiceRoll(1, 1)), Ok(1400));
    }

    #[test]
    fn test_hotel_rent_uses_fifth_tier() {
        let mut state = game_state();
        let tile = id(&state, "Mayfair");
        {
            let street = state.board.tile_mut(tile).street_mut().unwrap();
            street.houses = 4;
            street.hotel = true;
        }

        // Not 4 × the one-house rent.
        assert_eq!(get_rent_cost(&state.board, tile, DiceRoll(1, 1)), Ok(2000));
    }

    #[test]
    fn test_station_rent_by_count() {
        let mut state = game_state();
        let owner = PlayerId(0);
        let marylebone = give(&mut state, "Marylebone Station", owner);
        assert_eq!(get_rent_cost(&state.board, marylebone, DiceRoll(1, 1)), Ok(25));

        give(&mut state, "Fenchurch St Station", owner);
        assert_eq!(get_rent_cost(&state.board, marylebone, DiceRoll(1, 1)), Ok(50));
    }

    #[test]
    fn test_utility_rent() {
        let mut state = game_state();
        let owner = PlayerId(0);
        let water = give(&mut state, "Water Works", owner);
        assert_eq!(get_rent_cost(&state.board, water, DiceRoll(5, 5)), Ok(40));

        give(&mut state, "Electric Company", owner);
        assert_eq!(get_rent_cost(&state.board, water, DiceRoll(3, 6)), Ok(90));
    }

    #[test]
    fn test_impossible_utility_count_is_an_engine_error() {
        let template = BoardTemplate::from_tiles(vec![
            crate::board::TileSpec::plain(crate::board::TileKind::Go, "GO"),
            crate::board::TileSpec::utility("Water", 150),
            crate::board::TileSpec::utility("Power", 150),
            crate::board::TileSpec::utility("Gas", 150),
            crate::board::TileSpec::plain(crate::board::TileKind::Jail, "Jail"),
        ]);
        let mut board = Board::from_template(&template).unwrap();
        for step in 2..=4 {
            board.tile_mut(TileId(step)).deed_mut().unwrap().owner = Some(PlayerId(1));
        }

        let err = get_rent_cost(&board, TileId(2), DiceRoll(2, 3)).unwrap_err();
        assert_eq!(err, EngineError::UtilityCount { owner: PlayerId(1), count: 3 });
    }

    #[test]
    fn test_rent_on_non_purchasable_tile() {
        let state = game_state();
        let err = get_rent_cost(&state.board, TileId(1), DiceRoll(1, 2)).unwrap_err();
        assert_eq!(err, EngineError::NotPurchasable(TileId(1)));
    }

    #[test]
    fn test_buy_unowned_tile() {
        let mut state = game_state();
        let tile = id(&state, "Old Kent Road");
        let p = PlayerId(0);

        let outcome = resolve_landing(&mut state, &mut AlwaysAct, p, tile, DiceRoll(1, 2)).unwrap();

        assert_eq!(outcome, LandingOutcome::Purchased { price: 60 });
        assert_eq!(state.players[p].cash(), 2440);
        assert_eq!(state.board.tile(tile).owner(), Some(p));
        assert!(state.players[p].portfolio().contains(&tile));
    }

    #[test]
    fn test_declined_purchase_changes_nothing() {
        let mut state = game_state();
        let tile = id(&state, "Old Kent Road");

        let outcome =
            resolve_landing(&mut state, &mut Passive, PlayerId(0), tile, DiceRoll(1, 2)).unwrap();

        assert_eq!(outcome, LandingOutcome::PurchaseDeclined);
        assert_eq!(state.players[PlayerId(0)].cash(), 2500);
        assert!(!state.board.tile(tile).is_owned());
    }

    #[test]
    fn test_cannot_afford_purchase() {
        let mut state = game_state();
        let tile = id(&state, "Mayfair");
        let p = PlayerId(0);
        let _ = state.players[p].wallet.withdraw(2101);

        let outcome = resolve_landing(&mut state, &mut AlwaysAct, p, tile, DiceRoll(1, 2)).unwrap();

        assert_eq!(outcome, LandingOutcome::CannotAffordPurchase);
        assert_eq!(state.players[p].cash(), 399);
        assert!(!state.players[p].is_bankrupt());
    }

    #[test]
    fn test_upgrade_own_property() {
        let mut state = game_state();
        let p = PlayerId(0);
        let tile = give(&mut state, "Mayfair", p);

        let outcome = resolve_landing(&mut state, &mut AlwaysAct, p, tile, DiceRoll(1, 2)).unwrap();

        assert_eq!(outcome, LandingOutcome::Upgraded { level: UpgradeLevel::House, price: 200 });
        assert_eq!(state.board.tile(tile).street().unwrap().houses, 1);
        assert_eq!(state.players[p].cash(), 2300);
        assert_eq!(state.supply.houses(), 31);
    }

    #[test]
    fn test_hotel_upgrade_keeps_house_count() {
        let mut state = game_state();
        let p = PlayerId(0);
        let tile = give(&mut state, "Mayfair", p);
        state.board.tile_mut(tile).street_mut().unwrap().houses = 4;

        let outcome = resolve_landing(&mut state, &mut AlwaysAct, p, tile, DiceRoll(1, 2)).unwrap();

        assert_eq!(outcome, LandingOutcome::Upgraded { level: UpgradeLevel::Hotel, price: 200 });
        let street = state.board.tile(tile).street().unwrap();
        assert!(street.hotel);
        assert_eq!(street.houses, 4);
        assert_eq!(state.supply.hotels(), 11);
        assert_eq!(state.supply.houses(), 36);
    }

    #[test]
    fn test_no_upgrade_when_supply_is_empty() {
        let mut state = game_state();
        state.supply = crate::economy::BuildingSupply::new(0, 0);
        let p = PlayerId(0);
        let tile = give(&mut state, "Mayfair", p);

        let outcome = resolve_landing(&mut state, &mut AlwaysAct, p, tile, DiceRoll(1, 2)).unwrap();

        assert_eq!(outcome, LandingOutcome::NoUpgrade);
        assert_eq!(state.players[p].cash(), 2500);
    }

    #[test]
    fn test_declined_upgrade_changes_nothing() {
        let mut state = game_state();
        let p = PlayerId(0);
        let tile = give(&mut state, "Mayfair", p);

        let outcome = resolve_landing(&mut state, &mut Passive, p, tile, DiceRoll(1, 2)).unwrap();

        assert_eq!(outcome, LandingOutcome::NoUpgrade);
        assert_eq!(state.board.tile(tile).street().unwrap().houses, 0);
        assert_eq!(state.players[p].cash(), 2500);
        assert_eq!(state.supply.houses(), 32);
    }

    #[test]
    fn test_unaffordable_upgrade_changes_nothing() {
        let mut state = game_state();
        let p = PlayerId(0);
        let tile = give(&mut state, "Mayfair", p);
        state.board.tile_mut(tile).street_mut().unwrap().houses = 2;
        let _ = state.players[p].wallet.withdraw(2301);

        let outcome = resolve_landing(&mut state, &mut AlwaysAct, p, tile, DiceRoll(1, 2)).unwrap();

        assert_eq!(outcome, LandingOutcome::NoUpgrade);
        assert_eq!(state.board.tile(tile).street().unwrap().houses, 2);
        assert_eq!(state.players[p].cash(), 199);
        assert!(!state.players[p].is_bankrupt());
        assert_eq!(state.supply.houses(), 32);
    }

    #[test]
    fn test_own_station_is_a_no_op() {
        let mut state = game_state();
        let p = PlayerId(0);
        let tile = give(&mut state, "King's Cross Station", p);

        let outcome = resolve_landing(&mut state, &mut AlwaysAct, p, tile, DiceRoll(1, 2)).unwrap();
        assert_eq!(outcome, LandingOutcome::NoUpgrade);
    }

    #[test]
    fn test_rent_moves_to_owner() {
        let mut state = game_state();
        let (owner, payer) = (PlayerId(0), PlayerId(1));
        let tile = give(&mut state, "Mayfair", owner);
        state.board.tile_mut(tile).street_mut().unwrap().houses = 2;

        let outcome =
            resolve_landing(&mut state, &mut AlwaysAct, payer, tile, DiceRoll(1, 2)).unwrap();

        assert_eq!(outcome, LandingOutcome::RentPaid { owner, amount: 600 });
        assert_eq!(state.players[payer].cash(), 1900);
        assert_eq!(state.players[owner].cash(), 3100);
    }

    #[test]
    fn test_unaffordable_rent_bankrupts_without_partial_payment() {
        let mut state = game_state();
        let (owner, payer) = (PlayerId(0), PlayerId(1));
        let tile = give(&mut state, "Mayfair", owner);
        state.board.tile_mut(tile).street_mut().unwrap().hotel = true;
        let _ = state.players[payer].wallet.withdraw(1000);

        let outcome =
            resolve_landing(&mut state, &mut AlwaysAct, payer, tile, DiceRoll(1, 2)).unwrap();

        assert_eq!(outcome, LandingOutcome::Bankrupted { owner, rent: 2000 });
        assert!(state.players[payer].is_bankrupt());
        assert_eq!(state.players[payer].cash(), 0);
        assert_eq!(state.players[owner].cash(), 2500);
        assert!(state
            .events
            .iter()
            .any(|r| r.event == GameEvent::Bankrupt { player: payer }));
    }

    #[test]
    fn test_bankrupt_owner_collects_nothing() {
        let mut state = game_state();
        let (owner, payer) = (PlayerId(0), PlayerId(1));
        let tile = give(&mut state, "Mayfair", owner);
        state.players[owner].wallet.declare_bankrupt();

        let outcome =
            resolve_landing(&mut state, &mut AlwaysAct, payer, tile, DiceRoll(1, 2)).unwrap();

        assert_eq!(outcome, LandingOutcome::OwnerBankrupt { owner });
        assert_eq!(state.players[payer].cash(), 2500);
    }

    #[test]
    fn test_landing_on_non_purchasable_tile() {
        let mut state = game_state();
        let income_tax = TileId(5);
        let roll = DiceRoll(1, 2);
        let err =
            resolve_landing(&mut state, &mut AlwaysAct, PlayerId(0), income_tax, roll).unwrap_err();
        assert_eq!(err, EngineError::NotPurchasable(income_tax));
    }
}
