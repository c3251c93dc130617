//! The game driver.
//!
//! A `Game` owns everything one game needs: state, dice, one policy per
//! player and the turn order. It advances one player turn at a time, so a
//! caller can stop between any two turns and always find a fully resolved
//! board.

pub mod builder;
pub mod order;
pub mod report;

pub use builder::{GameBuilder, MAX_PLAYERS, MIN_PLAYERS};
pub use order::decide_turn_order;
pub use report::{standings, GameReport, Standing};

use std::sync::atomic::{AtomicBool, Ordering};

use crate::core::{Dice, DiceRoll, EngineError, GameRng, GameState, PlayerId, PlayerMap};
use crate::players::DecisionPolicy;
use crate::rules::{self, GameResult};

/// One game in progress.
#[derive(Debug)]
pub struct Game<D: Dice = GameRng> {
    state: GameState,
    dice: D,
    policies: PlayerMap<Box<dyn DecisionPolicy>>,
    order: Vec<PlayerId>,
    cursor: usize,
    seed: u64,
    result: Option<GameResult>,
}

impl<D: Dice> Game<D> {
    pub(crate) fn new(
        state: GameState,
        dice: D,
        policies: PlayerMap<Box<dyn DecisionPolicy>>,
        order: Vec<PlayerId>,
        seed: u64,
    ) -> Self {
        let result = rules::is_terminal(&state);
        Self {
            state,
            dice,
            policies,
            order,
            cursor: 0,
            seed,
            result,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable state access, for setting up scenarios.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn dice_mut(&mut self) -> &mut D {
        &mut self.dice
    }

    #[must_use]
    pub fn turn_order(&self) -> &[PlayerId] {
        &self.order
    }

    /// Player whose turn is next.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.order[self.cursor]
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Play the next player's turn.
    ///
    /// Returns the result once the game is over; further calls keep
    /// returning it without playing.
    pub fn step(&mut self) -> Result<Option<GameResult>, EngineError> {
        if self.result.is_some() {
            return Ok(self.result.clone());
        }

        let player = self.current_player();
        let policy = self.policies[player].as_mut();
        rules::play_turn(&mut self.state, &mut self.dice, policy, player)?;

        self.result = rules::is_terminal(&self.state);
        if self.result.is_none() {
            self.advance();
        }

        if let Some(result) = &self.result {
            log::info!("Game over after {} rounds: {:?}", self.state.round, result);
        }
        Ok(self.result.clone())
    }

    /// Play until there is a winner or the round limit is hit.
    pub fn run(&mut self) -> Result<GameResult, EngineError> {
        loop {
            if let Some(result) = self.step()? {
                return Ok(result);
            }
        }
    }

    /// Like `run`, but stops with `GameResult::Cancelled` once `cancel` is
    /// set. The flag is checked between turns only.
    pub fn run_until(&mut self, cancel: &AtomicBool) -> Result<GameResult, EngineError> {
        loop {
            if self.result.is_none() && cancel.load(Ordering::Relaxed) {
                log::info!("Game cancelled in round {}", self.state.round);
                self.result = Some(GameResult::Cancelled);
            }
            if let Some(result) = self.step()? {
                return Ok(result);
            }
        }
    }

    /// A normal turn for `player`, optionally starting from a given roll.
    pub fn play_normal_turn(
        &mut self,
        player: PlayerId,
        roll: Option<DiceRoll>,
    ) -> Result<(), EngineError> {
        let policy = self.policies[player].as_mut();
        rules::play_normal_turn(&mut self.state, &mut self.dice, policy, player, roll)
    }

    /// A jailed turn for `player`.
    pub fn play_jail_turn(&mut self, player: PlayerId) -> Result<(), EngineError> {
        let policy = self.policies[player].as_mut();
        rules::play_jail_turn(&mut self.state, &mut self.dice, policy, player)
    }

    /// Move `player` by `roll` and resolve transit and landing effects.
    pub fn resolve_movement(
        &mut self,
        player: PlayerId,
        roll: DiceRoll,
    ) -> Result<(), EngineError> {
        let policy = self.policies[player].as_mut();
        rules::resolve_movement(&mut self.state, policy, player, roll)
    }

    /// Current standings, best first.
    #[must_use]
    pub fn standings(&self) -> Vec<Standing> {
        standings(&self.state)
    }

    /// Summary of the game so far.
    #[must_use]
    pub fn report(&self) -> GameReport {
        GameReport {
            seed: self.seed,
            rounds: self.state.round,
            turn_order: self.order.clone(),
            result: self.result.clone(),
            standings: self.standings(),
        }
    }

    fn advance(&mut self) {
        self.cursor += 1;
        if self.cursor < self.order.len() {
            return;
        }

        self.cursor = 0;
        if let Some(limit) = self.state.rules.max_rounds {
            if self.state.round >= limit {
                let leaders = self
                    .standings()
                    .into_iter()
                    .filter(|s| !s.bankrupt)
                    .map(|s| s.player)
                    .collect();
                self.result = Some(GameResult::RoundLimit(leaders));
                return;
            }
        }

        self.state.round += 1;
        self.state.events.set_round(self.state.round);
        log::trace!("Round {}", self.state.round);
    }
}
