//! Kalah game engine.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::board::{is_pit, is_store, opposite_pit, Board, Pit, ALL_PITS, POSITION_COUNT};
use crate::core::{
    is_valid_delay, EngineConfig, GameRng, GameState, MarbleColor, Player, AUTOPLAY_DELAY_MS,
    MAX_AUTOPLAY_TURNS,
};
use crate::events::{EventJournal, GameEvent};
use crate::pacing::{Frame, NoDelay, Pacer};
use crate::policy::{MovePolicy, UniformRandom};
use crate::rules::{GameResult, RulesEngine, TurnOutcome};

/// Plain-data view of an engine, for rendering or shipping to a UI.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub board: Board,
    pub turn: Player,
    pub last_position: Option<usize>,
    pub game_state: GameState,
    pub delay_ms: u64,
}

/// The Kalah rules engine.
///
/// Owns the board and is its only writer. Every action runs to completion
/// before returning; pauses between marble placements go through the `P`
/// pacer and never affect the result.
///
/// ## Example
///
/// ```
/// use mancala_engine::games::kalah::KalahGame;
/// use mancala_engine::rules::TurnOutcome;
/// use mancala_engine::core::Player;
///
/// let mut game = KalahGame::with_seed(42);
/// game.start();
///
/// // Four marbles from pit 2 end in Player One's store
/// assert_eq!(game.take_turn(2), TurnOutcome::ExtraTurn);
/// assert_eq!(game.active_player(), Player::One);
/// assert_eq!(game.p1_store().len(), 1);
/// ```
pub struct KalahGame<P: Pacer = NoDelay> {
    config: EngineConfig,
    board: Board,
    game_state: GameState,
    turn: Player,
    /// Last position filled by the running distribution. `None` at a turn
    /// boundary.
    last_position: Option<usize>,
    delay_ms: u64,
    marble_rng: GameRng,
    autoplay: UniformRandom,
    pacer: P,
    events: EventJournal,
}

impl KalahGame<NoDelay> {
    /// Create a game with a random seed and no pacing.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default(), NoDelay)
    }

    /// Create a game with a fixed seed and no pacing.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_config(EngineConfig::default().with_seed(seed), NoDelay)
    }
}

impl Default for KalahGame<NoDelay> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Pacer> KalahGame<P> {
    /// Create a game from a config and pacer.
    pub fn with_config(config: EngineConfig, pacer: P) -> Self {
        Self::from_parts(config, pacer, None)
    }

    /// Create a game, dealing a random board unless one is supplied.
    pub(super) fn from_parts(config: EngineConfig, pacer: P, board: Option<Board>) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let mut marble_rng = rng.for_context("marbles");
        let autoplay = UniformRandom::new(rng.for_context("autoplay"));
        let board = board.unwrap_or_else(|| Board::new_random(&mut marble_rng));

        Self {
            delay_ms: config.initial_delay(),
            config,
            board,
            game_state: GameState::NotStarted,
            turn: Player::One,
            last_position: None,
            marble_rng,
            autoplay,
            pacer,
            events: EventJournal::new(),
        }
    }

    /// Override turn bookkeeping. Used by the builder for scenario setup.
    pub(super) fn set_position_state(
        &mut self,
        turn: Player,
        last_position: Option<usize>,
        game_state: GameState,
    ) {
        self.turn = turn;
        self.last_position = last_position;
        self.game_state = game_state;
    }

    // === Accessors ===

    /// The full board, stores included.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Marbles in a pit. Stores and out-of-range indices give an empty slice.
    #[must_use]
    pub fn slot(&self, index: usize) -> &[MarbleColor] {
        self.board.pit(index)
    }

    /// Player One's store.
    #[must_use]
    pub fn p1_store(&self) -> &[MarbleColor] {
        self.board.store(Player::One)
    }

    /// Player Two's store.
    #[must_use]
    pub fn p2_store(&self) -> &[MarbleColor] {
        self.board.store(Player::Two)
    }

    /// Compare the stores. Only meaningful once the game is done.
    #[must_use]
    pub fn winner(&self) -> GameResult {
        GameResult::from_scores(self.p1_store().len(), self.p2_store().len())
    }

    /// Player whose move it is.
    #[must_use]
    pub fn active_player(&self) -> Player {
        self.turn
    }

    /// Pit indices owned by the active player.
    pub fn active_player_pits(&self) -> impl Iterator<Item = usize> {
        self.turn.pits()
    }

    #[must_use]
    pub fn game_state(&self) -> GameState {
        self.game_state
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_state.is_done()
    }

    /// Last position filled in the current distribution.
    #[must_use]
    pub fn last_position(&self) -> Option<usize> {
        self.last_position
    }

    /// Current pacing delay in milliseconds.
    #[must_use]
    pub fn delay(&self) -> u64 {
        self.delay_ms
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    /// The last marble landed alone on a pit, so the turn ends here.
    #[must_use]
    pub fn is_turn_over(&self) -> bool {
        matches!(self.last_position, Some(lp) if !is_store(lp) && self.board.count(lp) <= 1)
    }

    /// The last marble landed in the active player's own store.
    #[must_use]
    pub fn finished_in_own_store(&self) -> bool {
        self.game_state == GameState::InProgress && self.last_position == Some(self.turn.store())
    }

    /// Check if the active player may pick `space`.
    ///
    /// At the start of a turn (or after ending in their own store) any of the
    /// player's non-empty pits is allowed. Mid-relay only the pit the last
    /// marble landed on is allowed.
    #[must_use]
    pub fn is_valid_space(&self, space: usize) -> bool {
        if is_store(space) || space >= POSITION_COUNT {
            return false;
        }

        let fresh = match self.last_position {
            None => true,
            Some(lp) => lp == self.turn.store(),
        };
        if fresh && self.turn.owns_pit(space) && !self.board.pit(space).is_empty() {
            return true;
        }

        self.last_position == Some(space)
    }

    /// Every pit the active player may pick.
    #[must_use]
    pub fn valid_spaces(&self) -> Vec<usize> {
        ALL_PITS
            .into_iter()
            .filter(|&space| self.is_valid_space(space))
            .collect()
    }

    /// Plain-data copy of the observable state.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            board: self.board.clone(),
            turn: self.turn,
            last_position: self.last_position,
            game_state: self.game_state,
            delay_ms: self.delay_ms,
        }
    }

    /// Events recorded since the last drain.
    #[must_use]
    pub fn pending_events(&self) -> &[GameEvent] {
        self.events.pending()
    }

    /// Take every event recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    // === Actions ===

    /// Deal a fresh board and return to `NotStarted`.
    ///
    /// Colours keep drawing from the same stream, so consecutive resets deal
    /// different boards.
    pub fn reset(&mut self) {
        self.board = Board::new_random(&mut self.marble_rng);
        self.game_state = GameState::NotStarted;
        self.turn = Player::One;
        self.last_position = None;
        self.delay_ms = self.config.initial_delay();
        self.events.clear();
        self.events.record(GameEvent::Reset);
    }

    /// Move from `NotStarted` to `InProgress`. No effect in any other state.
    pub fn start(&mut self) {
        if self.game_state == GameState::NotStarted {
            self.game_state = GameState::InProgress;
            self.events.record(GameEvent::Started);
        }
    }

    /// Set the pacing delay. Values above the engine maximum are ignored.
    ///
    /// Returns whether the value was applied.
    pub fn set_delay(&mut self, ms: u64) -> bool {
        if !is_valid_delay(ms) {
            return false;
        }
        self.delay_ms = ms;
        self.events.record(GameEvent::DelayChanged { ms });
        true
    }

    /// Pick `pod` for the active player and resolve the move.
    ///
    /// Illegal spaces are dropped without touching the board.
    pub fn take_turn(&mut self, pod: usize) -> TurnOutcome {
        if !self.is_valid_space(pod) {
            return TurnOutcome::Rejected;
        }
        let Some(position) = self.pick(pod) else {
            return TurnOutcome::Rejected;
        };

        let captured = if self.is_turn_over() {
            Some(self.next_turn())
        } else {
            None
        };

        if self.check_end_game() {
            return TurnOutcome::GameOver(self.winner());
        }

        match captured {
            Some(captured) => TurnOutcome::Passed { captured },
            None if position == self.turn.store() => TurnOutcome::ExtraTurn,
            None => TurnOutcome::Relay { position },
        }
    }

    /// Empty `pod` and sow its marbles one by one, skipping the opponent's
    /// store.
    ///
    /// Does not check legality. Returns the final placement index, or `None`
    /// (and changes nothing) when `pod` is not a pit or the game is done.
    pub fn pick(&mut self, pod: usize) -> Option<usize> {
        if !is_pit(pod) || self.game_state.is_done() {
            return None;
        }

        let mut hand = self.board.take(pod);
        self.events.record(GameEvent::Picked {
            pit: pod,
            count: hand.len(),
        });
        self.last_position = Some(pod);
        self.game_state = GameState::PlacingMarbles;

        let before_opponent_store = self.turn.opponent().store() - 1;
        let mut position = pod;

        while let Some(marble) = hand.pop() {
            if position == before_opponent_store {
                position += 1;
            }
            position = (position + 1) % POSITION_COUNT;
            self.last_position = Some(position);
            self.place_marble(position, marble);
        }

        self.game_state = GameState::InProgress;
        Some(position)
    }

    /// End the active player's turn.
    ///
    /// If the last marble sits alone in one of the player's own pits, that pit
    /// and the pit across from it are banked into the player's store. Then the
    /// turn passes and the end of the game is checked.
    ///
    /// Returns the number of marbles captured. A finished game is left as is.
    pub fn next_turn(&mut self) -> usize {
        if self.game_state.is_done() {
            return 0;
        }

        let mut captured = 0;

        if let Some(lp) = self.last_position {
            if self.turn.owns_pit(lp) && self.board.count(lp) <= 1 {
                for pit in [lp, opposite_pit(lp)] {
                    let marbles = self.board.position(pit).iter().copied().collect();
                    captured += self.bank_marbles(self.turn, marbles);
                    self.clear_pit(pit);
                }
            }
        }

        self.last_position = None;
        self.turn = self.turn.opponent();
        self.events.record(GameEvent::TurnPassed { next: self.turn });

        self.check_end_game();
        captured
    }

    /// Finish the game if either side is empty.
    ///
    /// On finishing, both sides are swept into their owners' stores. Otherwise
    /// the game is (back) in progress. Returns whether the game is over.
    pub fn check_end_game(&mut self) -> bool {
        if self.game_state.is_done() {
            return true;
        }

        let over = Player::ALL.iter().any(|&p| self.board.side_is_empty(p));
        if !over {
            self.game_state = GameState::InProgress;
            return false;
        }

        for player in Player::ALL {
            self.collect_remaining(player);
        }
        self.last_position = None;
        self.game_state = GameState::Done;
        let result = self.winner();
        self.events.record(GameEvent::GameOver { result });
        true
    }

    /// Bank every marble left on `player`'s side. Returns how many moved.
    pub fn collect_remaining(&mut self, player: Player) -> usize {
        let mut remaining = Pit::new();

        for pit in player.pits() {
            let marbles = self.board.take(pit);
            if !marbles.is_empty() {
                remaining.extend(marbles);
                self.events.record(GameEvent::PitCleared { pit });
            }
        }

        self.bank_marbles(player, remaining)
    }

    /// Play uniformly random legal spaces until the game ends.
    ///
    /// Sets the delay to [`AUTOPLAY_DELAY_MS`] first. Returns the number of
    /// picks made.
    pub fn auto_play(&mut self) -> usize {
        let mut policy = self.autoplay.clone();
        let turns = self.auto_play_with(&mut policy);
        self.autoplay = policy;
        turns
    }

    /// Like [`auto_play`](Self::auto_play), with a caller-supplied policy.
    pub fn auto_play_with<M: MovePolicy + ?Sized>(&mut self, policy: &mut M) -> usize {
        self.set_delay(AUTOPLAY_DELAY_MS);
        self.play_out(policy, MAX_AUTOPLAY_TURNS)
    }

    // === Internals ===

    fn place_marble(&mut self, position: usize, color: MarbleColor) {
        self.board.push(position, color);
        self.events.record(GameEvent::Placed { position, color });
        self.pace();
    }

    /// Append marbles to a player's store after a pause.
    fn bank_marbles(&mut self, player: Player, marbles: Pit) -> usize {
        let count = marbles.len();
        if count == 0 {
            return 0;
        }

        self.pace();
        self.board.extend(player.store(), marbles);
        self.events.record(GameEvent::Banked { player, count });
        count
    }

    fn clear_pit(&mut self, pit: usize) {
        self.board.clear(pit);
        self.events.record(GameEvent::PitCleared { pit });
    }

    fn pace(&mut self) {
        let frame = Frame {
            board: &self.board,
            state: self.game_state,
            turn: self.turn,
            last_position: self.last_position,
            events: self.events.pending(),
        };
        self.pacer.pause(Duration::from_millis(self.delay_ms), &frame);
    }
}

impl<P: Pacer> RulesEngine for KalahGame<P> {
    fn active_player(&self) -> Player {
        self.turn
    }

    fn legal_spaces(&self) -> Vec<usize> {
        if self.is_game_over() {
            return vec![];
        }
        self.valid_spaces()
    }

    fn apply_space(&mut self, space: usize) -> TurnOutcome {
        self.take_turn(space)
    }

    fn is_terminal(&self) -> Option<GameResult> {
        self.is_game_over().then(|| self.winner())
    }
}
