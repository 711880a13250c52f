//! Cancellable animation timeline
//!
//! A [`Timeline`] holds one run: an ordered list of events, each waiting its own
//! delay after the previous one was delivered. The UI event loop calls
//! [`Timeline::poll`] on every tick; nothing ever sleeps.
//!
//! # Run guard
//!
//! Only one run may be scheduled at a time. [`Timeline::start`] rejects a second
//! run with [`VisualizerError::AlreadyRunning`] until the first finishes or is
//! cancelled.
//!
//! # Stale continuations
//!
//! Every run gets a fresh [`RunToken`] and every delivered event carries it.
//! [`Timeline::cancel`] drops whatever is still pending and retires the token, so
//! a consumer holding an event from a superseded run can detect it with
//! [`Timeline::is_current`] and discard it instead of mutating state.

use crate::errors::{Result, VisualizerError};
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tracing::debug;

/// Identifies one run of a timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunToken {
    generation: u64,
}

/// Scheduled events for a single run
#[derive(Debug)]
pub struct Timeline<E> {
    pending: VecDeque<(Duration, E)>,
    generation: u64,
    running: bool,
    next_due: Instant,
}

impl<E> Timeline<E> {
    pub fn new(now: Instant) -> Self {
        Timeline {
            pending: VecDeque::new(),
            generation: 0,
            running: false,
            next_due: now,
        }
    }

    /// Schedule a run; each entry is delivered `delay` after the previous one
    pub fn start<I>(&mut self, entries: I, now: Instant) -> Result<RunToken>
    where
        I: IntoIterator<Item = (Duration, E)>,
    {
        if self.running {
            debug!(generation = self.generation, "rejected start while running");
            return Err(VisualizerError::AlreadyRunning);
        }

        self.generation += 1;
        self.pending = entries.into_iter().collect();
        self.running = !self.pending.is_empty();
        self.next_due = now + self.pending.front().map_or(Duration::ZERO, |(d, _)| *d);
        debug!(
            generation = self.generation,
            events = self.pending.len(),
            "timeline started"
        );
        Ok(self.token())
    }

    /// Deliver the next event if its delay has elapsed.
    ///
    /// Returns at most one event per call; the run ends after its last event.
    pub fn poll(&mut self, now: Instant) -> Option<(RunToken, E)> {
        if !self.running || now < self.next_due {
            return None;
        }

        let (_, event) = self.pending.pop_front()?;
        match self.pending.front() {
            Some((delay, _)) => self.next_due = now + *delay,
            None => self.running = false,
        }
        Some((self.token(), event))
    }

    /// Drop pending events and retire the current token
    pub fn cancel(&mut self) {
        if self.running {
            debug!(
                generation = self.generation,
                dropped = self.pending.len(),
                "timeline cancelled"
            );
        }
        self.pending.clear();
        self.running = false;
        self.generation += 1;
    }

    /// Whether `token` belongs to the run that is current now
    pub fn is_current(&self, token: RunToken) -> bool {
        token.generation == self.generation
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Events still waiting to be delivered
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    fn token(&self) -> RunToken {
        RunToken {
            generation: self.generation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_events_wait_their_delay() {
        let t0 = Instant::now();
        let mut timeline = Timeline::new(t0);
        timeline
            .start([(ms(0), 'a'), (ms(100), 'b'), (ms(200), 'c')], t0)
            .unwrap();

        assert_eq!(timeline.poll(t0).map(|(_, e)| e), Some('a'));
        assert!(timeline.poll(t0 + ms(50)).is_none());
        assert_eq!(timeline.poll(t0 + ms(100)).map(|(_, e)| e), Some('b'));
        assert!(timeline.poll(t0 + ms(250)).is_none());
        assert_eq!(timeline.poll(t0 + ms(300)).map(|(_, e)| e), Some('c'));
        assert!(!timeline.is_running());
    }

    #[test]
    fn test_second_start_rejected_while_running() {
        let t0 = Instant::now();
        let mut timeline = Timeline::new(t0);
        timeline.start([(ms(10), 1), (ms(10), 2)], t0).unwrap();
        assert_eq!(
            timeline.start([(ms(10), 3)], t0),
            Err(VisualizerError::AlreadyRunning)
        );
    }

    #[test]
    fn test_cancel_retires_token() {
        let t0 = Instant::now();
        let mut timeline = Timeline::new(t0);
        timeline.start([(ms(0), 1), (ms(10), 2)], t0).unwrap();

        let (token, _) = timeline.poll(t0).unwrap();
        timeline.cancel();

        assert!(!timeline.is_current(token));
        assert!(timeline.poll(t0 + ms(100)).is_none());
        assert_eq!(timeline.remaining(), 0);

        // A new run is accepted after cancel
        let fresh = timeline.start([(ms(0), 9)], t0).unwrap();
        assert!(timeline.is_current(fresh));
        assert_ne!(fresh, token);
    }
}
