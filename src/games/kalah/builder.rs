//! Builder for creating a `KalahGame`.

use crate::board::{Board, POSITION_COUNT};
use crate::core::{EngineConfig, GameState, Player};
use crate::pacing::{NoDelay, Pacer};

use super::KalahGame;

/// Builder for creating a `KalahGame`.
///
/// Besides seed and delay, the builder can place the engine in an arbitrary
/// position (board contents, active player, last position, lifecycle state),
/// which is how puzzles and regression scenarios are set up.
#[derive(Clone, Debug, Default)]
pub struct KalahGameBuilder {
    config: EngineConfig,
    board: Option<Board>,
    turn: Option<Player>,
    last_position: Option<usize>,
    game_state: GameState,
}

impl KalahGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn delay(mut self, ms: u64) -> Self {
        self.config.delay_ms = ms;
        self
    }

    /// Start from this board instead of dealing a random one.
    pub fn board(mut self, board: Board) -> Self {
        self.board = Some(board);
        self
    }

    pub fn turn(mut self, player: Player) -> Self {
        self.turn = Some(player);
        self
    }

    pub fn last_position(mut self, position: usize) -> Self {
        assert!(position < POSITION_COUNT, "Position must be 0-13");
        self.last_position = Some(position);
        self
    }

    pub fn game_state(mut self, state: GameState) -> Self {
        self.game_state = state;
        self
    }

    /// Build a game without pacing.
    pub fn build(self) -> KalahGame {
        self.build_with_pacer(NoDelay)
    }

    /// Build a game that pauses through `pacer`.
    pub fn build_with_pacer<P: Pacer>(self, pacer: P) -> KalahGame<P> {
        let mut game = KalahGame::from_parts(self.config, pacer, self.board);
        game.set_position_state(
            self.turn.unwrap_or(Player::One),
            self.last_position,
            self.game_state,
        );
        game
    }
}
