//! Assembling a game.

use crate::board::{Board, BoardTemplate};
use crate::core::{
    Dice, GameRng, GameState, PlayerId, PlayerMap, RulesConfig, SetupError, TurnOrder,
};
use crate::players::{AlwaysAct, DecisionPolicy, DEFAULT_NICKNAMES};

use super::order::decide_turn_order;
use super::Game;

/// Fewest players a game seats.
pub const MIN_PLAYERS: usize = 2;

/// Most players a game seats.
pub const MAX_PLAYERS: usize = 8;

#[derive(Debug)]
enum BoardSource {
    Locale(String),
    Template(BoardTemplate),
}

/// Builder for creating a `Game`.
///
/// ```
/// use monopoly_sim::game::GameBuilder;
/// use monopoly_sim::core::RulesConfig;
///
/// let mut game = GameBuilder::new()
///     .player_count(3)
///     .rules(RulesConfig::default().with_max_rounds(20))
///     .seed(42)
///     .build()?;
/// let result = game.run()?;
/// assert!(game.is_over());
/// # let _ = result;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct GameBuilder {
    player_count: usize,
    nicknames: Option<Vec<String>>,
    board: BoardSource,
    rules: RulesConfig,
    policies: Vec<Box<dyn DecisionPolicy>>,
    seed: u64,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            player_count: 2,
            nicknames: None,
            board: BoardSource::Locale("en-gb".to_string()),
            rules: RulesConfig::default(),
            policies: Vec::new(),
            seed: 0,
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of players (2 to 8).
    pub fn player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    /// Nicknames in seat order; one per player. Defaults to the built-in list.
    pub fn nicknames<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.nicknames = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Use an embedded board locale.
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.board = BoardSource::Locale(locale.into());
        self
    }

    /// Use an explicit board template.
    pub fn template(mut self, template: BoardTemplate) -> Self {
        self.board = BoardSource::Template(template);
        self
    }

    pub fn rules(mut self, rules: RulesConfig) -> Self {
        self.rules = rules;
        self
    }

    pub fn turn_order(mut self, order: TurnOrder) -> Self {
        self.rules.turn_order = order;
        self
    }

    /// Add the policy for the next seat.
    ///
    /// Give one per player, or none to seat `AlwaysAct` everywhere.
    pub fn policy(mut self, policy: impl DecisionPolicy + 'static) -> Self {
        self.policies.push(Box::new(policy));
        self
    }

    /// Seed for dice and turn order.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Build the game with seeded dice.
    pub fn build(self) -> Result<Game<GameRng>, SetupError> {
        let dice = GameRng::new(self.seed).for_context("dice");
        self.build_with_dice(dice)
    }

    /// Build the game with a custom dice source.
    ///
    /// Turn order is always rolled on its own seeded stream, so scripted
    /// dice only ever drive play.
    pub fn build_with_dice<D: Dice>(self, dice: D) -> Result<Game<D>, SetupError> {
        let count = self.player_count;
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(SetupError::PlayerCount(count));
        }

        let nicknames = match self.nicknames {
            Some(names) if names.len() != count => {
                return Err(SetupError::NicknameCount {
                    names: names.len(),
                    players: count,
                })
            }
            Some(names) => names,
            None => DEFAULT_NICKNAMES[..count].iter().map(|s| s.to_string()).collect(),
        };

        let policies = match self.policies.len() {
            0 => PlayerMap::new(count, |_| Box::new(AlwaysAct) as Box<dyn DecisionPolicy>),
            n if n == count => PlayerMap::from_vec(self.policies),
            n => {
                return Err(SetupError::PolicyCount {
                    policies: n,
                    players: count,
                })
            }
        };

        let template = match self.board {
            BoardSource::Locale(locale) => BoardTemplate::for_locale(&locale)?,
            BoardSource::Template(template) => template,
        };
        let board = Board::from_template(&template)?;

        let seats: Vec<PlayerId> = PlayerId::all(count).collect();
        let mut order_rng = GameRng::new(self.seed).for_context("turn_order");
        let order = decide_turn_order(self.rules.turn_order, &seats, &mut order_rng);

        let state = GameState::new(board, &nicknames, self.rules);

        log::info!(
            "New game: {} players on {} tiles, seed {}, order {:?}",
            count,
            state.board.len(),
            self.seed,
            order
        );

        Ok(Game::new(state, dice, policies, order, self.seed))
    }
}
