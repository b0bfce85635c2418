//! Pacing hooks.
//!
//! The engine calls [`Pacer::pause`] after every marble placement and before
//! every banking, passing its configured delay and a [`Frame`]: a read-only
//! view of the board at that step. An observer renders the frame while the
//! engine waits; no engine state depends on how long the pause takes, and the
//! order of placements is the same with any pacer.
//!
//! During a distribution the frame's state is `PlacingMarbles`, so an
//! animation can tell sowing steps from banking steps.

use std::time::Duration;

use crate::board::Board;
use crate::core::{GameState, Player};
use crate::events::GameEvent;

/// The engine as seen from inside a pause.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    pub board: &'a Board,
    pub state: GameState,
    pub turn: Player,
    pub last_position: Option<usize>,
    /// Events recorded since the last drain, newest last.
    pub events: &'a [GameEvent],
}

impl<'a> Frame<'a> {
    /// The most recent event, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&'a GameEvent> {
        self.events.last()
    }
}

/// Suspension hook invoked between animation steps.
pub trait Pacer {
    /// Suspend for (up to) `delay` while `frame` is on screen.
    fn pause(&mut self, delay: Duration, frame: &Frame<'_>);
}

/// Pacer that never waits. The default for engines and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDelay;

impl Pacer for NoDelay {
    fn pause(&mut self, _delay: Duration, _frame: &Frame<'_>) {}
}

/// Pacer that blocks the current thread for the full delay.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadSleep;

impl Pacer for ThreadSleep {
    fn pause(&mut self, delay: Duration, _frame: &Frame<'_>) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

impl<P: Pacer + ?Sized> Pacer for &mut P {
    fn pause(&mut self, delay: Duration, frame: &Frame<'_>) {
        (**self).pause(delay, frame);
    }
}

impl<P: Pacer + ?Sized> Pacer for Box<P> {
    fn pause(&mut self, delay: Duration, frame: &Frame<'_>) {
        (**self).pause(delay, frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[derive(Default)]
    struct Counting(Vec<(Duration, GameState)>);

    impl Pacer for Counting {
        fn pause(&mut self, delay: Duration, frame: &Frame<'_>) {
            self.0.push((delay, frame.state));
        }
    }

    fn frame(board: &Board) -> Frame<'_> {
        Frame {
            board,
            state: GameState::PlacingMarbles,
            turn: Player::One,
            last_position: Some(3),
            events: &[],
        }
    }

    #[test]
    fn test_no_delay_returns_immediately() {
        let board = Board::empty();
        let start = Instant::now();
        NoDelay.pause(Duration::from_secs(5), &frame(&board));
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_thread_sleep_waits() {
        let board = Board::empty();
        let start = Instant::now();
        ThreadSleep.pause(Duration::from_millis(20), &frame(&board));
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn test_forwarding_impls() {
        fn drive<P: Pacer>(mut pacer: P, ms: u64) {
            let board = Board::empty();
            pacer.pause(Duration::from_millis(ms), &frame(&board));
        }

        let mut counting = Counting::default();
        drive(&mut counting, 1);
        drive(&mut counting, 2);
        assert_eq!(
            counting.0,
            vec![
                (Duration::from_millis(1), GameState::PlacingMarbles),
                (Duration::from_millis(2), GameState::PlacingMarbles),
            ]
        );

        let boxed: Box<dyn Pacer> = Box::new(NoDelay);
        drive(boxed, 3);
    }

    #[test]
    fn test_latest_event() {
        let board = Board::empty();
        let events = [GameEvent::Started, GameEvent::Picked { pit: 2, count: 4 }];
        let view = Frame {
            events: &events,
            ..frame(&board)
        };
        assert_eq!(view.latest(), Some(&GameEvent::Picked { pit: 2, count: 4 }));
        assert_eq!(frame(&board).latest(), None);
    }
}
