//! Deciding who goes first.

use crate::core::{Dice, PlayerId, TurnOrder};

/// Turn order for `players` under `order`.
///
/// `Rolled` throws the dice once per player, sorts by pips (highest first)
/// and throws again within every tied group until all ties are broken.
pub fn decide_turn_order(
    order: TurnOrder,
    players: &[PlayerId],
    dice: &mut dyn Dice,
) -> Vec<PlayerId> {
    match order {
        TurnOrder::Seating => players.to_vec(),
        TurnOrder::Rolled => roll_for_order(players, dice),
    }
}

fn roll_for_order(players: &[PlayerId], dice: &mut dyn Dice) -> Vec<PlayerId> {
    if players.len() < 2 {
        return players.to_vec();
    }

    let mut rolled: Vec<(u8, PlayerId)> =
        players.iter().map(|&p| (dice.roll().pips(), p)).collect();
    // Stable sort keeps seat order inside a tie until the re-roll.
    rolled.sort_by(|a, b| b.0.cmp(&a.0));

    let mut order = Vec::with_capacity(players.len());
    for tied in rolled.chunk_by(|a, b| a.0 == b.0) {
        let group: Vec<PlayerId> = tied.iter().map(|&(_, p)| p).collect();
        if group.len() > 1 {
            log::trace!("{} players tied on {} pips, rolling again", group.len(), tied[0].0);
        }
        order.extend(roll_for_order(&group, dice));
    }
    order
}
