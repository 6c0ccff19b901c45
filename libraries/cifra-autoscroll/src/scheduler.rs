//! Repeating tick timers
//!
//! The controller asks a [`TickScheduler`] for one repeating timer at a time and
//! cancels it before asking for another. Deliveries come back to the controller
//! as [`TimerId`]s through `on_tick`.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Handle of one repeating timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerId(u64);

impl TimerId {
    /// Wrap a raw timer number
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw timer number
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer-{}", self.0)
    }
}

/// Source of repeating timers
pub trait TickScheduler {
    /// Start a timer that fires every `interval`, first after one interval
    fn schedule_repeating(&mut self, interval: Duration) -> TimerId;

    /// Stop a timer. Unknown or already cancelled ids are ignored.
    fn cancel(&mut self, timer: TimerId);
}

#[derive(Debug)]
struct VirtualTimer {
    interval: Duration,
    next_due: Duration,
}

#[derive(Debug, Default)]
struct VirtualClock {
    now: Duration,
    next_id: u64,
    timers: BTreeMap<TimerId, VirtualTimer>,
    created: usize,
    cancelled: usize,
    peak_active: usize,
}

/// Deterministic scheduler driven by explicit [`VirtualScheduler::advance`] calls
///
/// Clones share the same clock, so a test (or a host frame loop) can keep one
/// handle while the controller owns another. Counters make timer leaks visible.
#[derive(Debug, Clone, Default)]
pub struct VirtualScheduler {
    clock: Rc<RefCell<VirtualClock>>,
}

impl VirtualScheduler {
    /// New clock at time zero with no timers
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward and return every firing, in time order
    ///
    /// Timers due at the same instant fire in creation order. A timer due
    /// several times within `elapsed` appears once per period.
    pub fn advance(&self, elapsed: Duration) -> Vec<TimerId> {
        let mut clock = self.clock.borrow_mut();
        let target = clock.now + elapsed;
        let mut fired = Vec::new();

        loop {
            let due = clock
                .timers
                .iter()
                .filter(|(_, timer)| timer.next_due <= target)
                .min_by_key(|(id, timer)| (timer.next_due, **id))
                .map(|(id, timer)| (*id, timer.next_due));

            let Some((id, due_at)) = due else { break };
            clock.now = due_at;
            if let Some(timer) = clock.timers.get_mut(&id) {
                timer.next_due += timer.interval;
            }
            fired.push(id);
        }

        clock.now = target;
        fired
    }

    /// Time elapsed since the clock was created
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Timers currently scheduled
    pub fn active_timers(&self) -> usize {
        self.clock.borrow().timers.len()
    }

    /// Timers ever scheduled
    pub fn created_timers(&self) -> usize {
        self.clock.borrow().created
    }

    /// Timers cancelled while still active
    pub fn cancelled_timers(&self) -> usize {
        self.clock.borrow().cancelled
    }

    /// Highest number of simultaneously active timers seen so far
    pub fn peak_active_timers(&self) -> usize {
        self.clock.borrow().peak_active
    }

    /// Period of an active timer
    pub fn interval_of(&self, timer: TimerId) -> Option<Duration> {
        self.clock.borrow().timers.get(&timer).map(|t| t.interval)
    }
}

impl TickScheduler for VirtualScheduler {
    fn schedule_repeating(&mut self, interval: Duration) -> TimerId {
        let mut clock = self.clock.borrow_mut();
        // A zero period would never let `advance` finish
        let interval = interval.max(Duration::from_micros(1));
        let id = TimerId::new(clock.next_id);
        clock.next_id += 1;

        let next_due = clock.now + interval;
        clock.timers.insert(id, VirtualTimer { interval, next_due });
        clock.created += 1;
        clock.peak_active = clock.peak_active.max(clock.timers.len());
        id
    }

    fn cancel(&mut self, timer: TimerId) {
        let mut clock = self.clock.borrow_mut();
        if clock.timers.remove(&timer).is_some() {
            clock.cancelled += 1;
        }
    }
}
