//! Board arithmetic: where a roll takes a player and what it passes.

use smallvec::SmallVec;

use crate::board::TileId;

/// Tiles visited by one move. Two dice never exceed 12 pips.
pub type Journey = SmallVec<[TileId; 12]>;

/// Destination of a move of `pips` steps on a board of `board_len` tiles.
///
/// Steps are 1-based: `((from - 1 + pips) mod N) + 1`.
#[must_use]
pub fn destination(from: TileId, pips: u8, board_len: usize) -> TileId {
    step_after(from, usize::from(pips), board_len)
}

/// Every tile after `from` up to and including the destination, in the
/// order the token crosses them. Wraps through step 1.
#[must_use]
pub fn journey(from: TileId, pips: u8, board_len: usize) -> Journey {
    (1..=usize::from(pips))
        .map(|offset| step_after(from, offset, board_len))
        .collect()
}

fn step_after(from: TileId, offset: usize, board_len: usize) -> TileId {
    debug_assert!(board_len > 0, "empty board");
    let step = (from.index() + offset) % board_len + 1;
    // Board length is capped at u16::MAX when the board is built.
    TileId(step as u16)
}
