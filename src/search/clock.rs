//! Time-left capability queried by the search.
//!
//! The search never reads a clock on its own. The caller hands it a
//! `TimeLeft` implementation and the search polls it at the start of every
//! node. All values are milliseconds.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Remaining time for the current turn, in milliseconds.
///
/// Must be monotonically non-increasing over one turn.
pub trait TimeLeft {
    fn time_left(&self) -> f64;
}

impl<F: Fn() -> f64> TimeLeft for F {
    fn time_left(&self) -> f64 {
        self()
    }
}

/// Wall-clock deadline backed by the monotonic `Instant` clock.
///
/// A budget too large to represent as an `Instant` never runs out.
#[derive(Clone, Copy, Debug)]
pub struct Deadline {
    at: Option<Instant>,
}

impl Deadline {
    /// A deadline `budget` from now.
    #[must_use]
    pub fn after(budget: Duration) -> Self {
        Self {
            at: Instant::now().checked_add(budget),
        }
    }

    /// A deadline `ms` milliseconds from now.
    #[must_use]
    pub fn after_millis(ms: u64) -> Self {
        Self::after(Duration::from_millis(ms))
    }
}

impl TimeLeft for Deadline {
    fn time_left(&self) -> f64 {
        let Some(at) = self.at else {
            return f64::INFINITY;
        };

        let now = Instant::now();
        if now >= at {
            -((now - at).as_secs_f64() * 1000.0)
        } else {
            (at - now).as_secs_f64() * 1000.0
        }
    }
}

/// Deterministic clock: starts at a fixed value and loses `step`
/// milliseconds on every query.
///
/// ```
/// use isolation_agent::search::{SimulatedClock, TimeLeft};
///
/// let clock = SimulatedClock::new(100.0, 10.0);
/// assert_eq!(clock.time_left(), 100.0);
/// assert_eq!(clock.time_left(), 90.0);
/// assert_eq!(clock.queries(), 2);
/// ```
#[derive(Debug)]
pub struct SimulatedClock {
    remaining: Cell<f64>,
    step: f64,
    queries: Cell<u64>,
}

impl SimulatedClock {
    #[must_use]
    pub fn new(start: f64, step: f64) -> Self {
        Self {
            remaining: Cell::new(start),
            step,
            queries: Cell::new(0),
        }
    }

    /// A clock that never runs out.
    #[must_use]
    pub fn unlimited() -> Self {
        Self::new(f64::INFINITY, 0.0)
    }

    /// A clock that is already out of time.
    #[must_use]
    pub fn expired() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Number of times the clock has been read.
    #[must_use]
    pub fn queries(&self) -> u64 {
        self.queries.get()
    }
}

impl TimeLeft for SimulatedClock {
    fn time_left(&self) -> f64 {
        let now = self.remaining.get();
        self.remaining.set(now - self.step);
        self.queries.set(self.queries.get() + 1);
        now
    }
}
