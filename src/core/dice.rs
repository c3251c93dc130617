//! Dice rolls and the dice source seam.
//!
//! The engine only ever asks a `Dice` for the next `DiceRoll`. `GameRng`
//! is the real source; `ScriptedDice` replays a fixed sequence so tests and
//! replays can drive exact scenarios.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::rng::GameRng;

/// One throw of the two dice. Both faces are always in `1..=6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)")]
pub struct DiceRoll(pub(crate) u8, pub(crate) u8);

impl DiceRoll {
    /// Create a roll, checking both faces are in `1..=6`.
    #[must_use]
    pub fn new(first: u8, second: u8) -> Self {
        assert!((1..=6).contains(&first), "die face out of range: {first}");
        assert!((1..=6).contains(&second), "die face out of range: {second}");
        Self(first, second)
    }

    /// The two faces.
    #[must_use]
    pub const fn faces(self) -> (u8, u8) {
        (self.0, self.1)
    }

    /// Sum of the two faces.
    #[must_use]
    pub const fn pips(self) -> u8 {
        self.0 + self.1
    }

    /// Both dice show the same face.
    #[must_use]
    pub const fn is_double(self) -> bool {
        self.0 == self.1
    }
}

impl TryFrom<(u8, u8)> for DiceRoll {
    type Error = &'static str;

    fn try_from((first, second): (u8, u8)) -> Result<Self, Self::Error> {
        if (1..=6).contains(&first) && (1..=6).contains(&second) {
            Ok(Self(first, second))
        } else {
            Err("die face out of range")
        }
    }
}

impl std::fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}+{}", self.0, self.1)
    }
}

/// Source of dice rolls for a game.
pub trait Dice: Send {
    /// Throw both dice.
    fn roll(&mut self) -> DiceRoll;
}

impl Dice for GameRng {
    fn roll(&mut self) -> DiceRoll {
        let first = self.roll_die();
        let second = self.roll_die();
        DiceRoll(first, second)
    }
}

/// Replays a fixed list of rolls in order.
///
/// Panics when asked for more rolls than were scripted.
///
/// ```
/// use monopoly_sim::core::{Dice, DiceRoll, ScriptedDice};
///
/// let mut dice = ScriptedDice::new([(1, 2), (4, 4)]);
/// assert_eq!(dice.roll(), DiceRoll::new(1, 2));
/// assert!(dice.roll().is_double());
/// assert_eq!(dice.remaining(), 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    rolls: VecDeque<DiceRoll>,
}

impl ScriptedDice {
    /// Script the given rolls.
    pub fn new(rolls: impl IntoIterator<Item = (u8, u8)>) -> Self {
        Self {
            rolls: rolls.into_iter().map(|(a, b)| DiceRoll::new(a, b)).collect(),
        }
    }

    /// Append more rolls to the end of the script.
    pub fn extend(&mut self, rolls: impl IntoIterator<Item = (u8, u8)>) {
        self.rolls
            .extend(rolls.into_iter().map(|(a, b)| DiceRoll::new(a, b)));
    }

    /// Rolls not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self) -> DiceRoll {
        self.rolls.pop_front().expect("scripted dice exhausted")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pips_and_double() {
        assert_eq!(DiceRoll(3, 4).pips(), 7);
        assert!(!DiceRoll(3, 4).is_double());
        assert!(DiceRoll(6, 6).is_double());
        assert_eq!(format!("{}", DiceRoll(2, 5)), "2+5");
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_roll_rejects_bad_face() {
        let _ = DiceRoll::new(0, 3);
    }

    #[test]
    fn test_roll_json_checks_faces() {
        let roll: DiceRoll = serde_json::from_str("[2, 5]").unwrap();
        assert_eq!(roll.faces(), (2, 5));
        assert_eq!(serde_json::to_string(&roll).unwrap(), "[2,5]");
        assert!(serde_json::from_str::<DiceRoll>("[200, 200]").is_err());
        assert!(DiceRoll::try_from((0, 1)).is_err());
    }

    #[test]
    fn test_game_rng_rolls_valid_pairs() {
        let mut rng = GameRng::new(3);
        for _ in 0..200 {
            let roll = Dice::roll(&mut rng);
            assert!((2..=12).contains(&roll.pips()));
        }
    }

    #[test]
    fn test_scripted_dice_in_order() {
        let mut dice = ScriptedDice::new([(1, 1)]);
        dice.extend([(2, 3)]);

        assert_eq!(dice.roll(), DiceRoll(1, 1));
        assert_eq!(dice.roll(), DiceRoll(2, 3));
    }

    #[test]
    #[should_panic(expected = "scripted dice exhausted")]
    fn test_scripted_dice_exhausted() {
        let mut dice = ScriptedDice::default();
        dice.roll();
    }
}
