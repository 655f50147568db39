//! Local countdown between authoritative snapshots.
//!
//! State flow: Hidden → Displaying(snapshot) → Hidden.
//! While displaying, the held copy loses one second of `timeLeft` per tick
//! and flips to ready when it reaches zero. Any new snapshot replaces the
//! copy wholesale. The timer runs only while there is time left to count.

pub mod ticker;

pub use ticker::{IntervalTicker, Ticker};

use crate::models::PlantSnapshot;
use crate::status::DisplayFacts;

/// Visibility state of the countdown.
#[derive(Debug, Clone, PartialEq)]
pub enum ClockState {
    Hidden,
    Displaying(PlantSnapshot),
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Nothing to count (hidden, already at zero, or a stale timer event).
    Idle,
    /// One second removed; `remaining` is still above zero.
    Counted { remaining: f64 },
    /// The countdown reached zero and the plant was marked ready.
    BecameReady,
}

/// Owns the displayed snapshot, its derived facts and the tick timer.
pub struct CountdownClock<T: Ticker> {
    state: ClockState,
    facts: Option<DisplayFacts>,
    ticker: T,
}

impl<T: Ticker> CountdownClock<T> {
    pub fn new(ticker: T) -> Self {
        Self {
            state: ClockState::Hidden,
            facts: None,
            ticker,
        }
    }

    /// Start displaying `snapshot`. Already displaying: same as `update`.
    pub fn show(&mut self, snapshot: PlantSnapshot) {
        if self.is_displaying() {
            self.update(snapshot);
            return;
        }
        self.facts = Some(DisplayFacts::derive(&snapshot));
        self.state = ClockState::Displaying(snapshot);
        self.sync_ticker();
    }

    /// Replace the held snapshot and re-derive. Ignored while hidden so a
    /// late update can never leak into the next show.
    pub fn update(&mut self, snapshot: PlantSnapshot) -> bool {
        let ClockState::Displaying(held) = &mut self.state else {
            return false;
        };
        self.facts = Some(DisplayFacts::derive(&snapshot));
        *held = snapshot;
        self.sync_ticker();
        true
    }

    /// Count one second down on the held copy.
    pub fn tick(&mut self) -> TickOutcome {
        let ClockState::Displaying(held) = &mut self.state else {
            return TickOutcome::Idle;
        };
        let left = held.seconds_left();
        if left <= 0.0 {
            return TickOutcome::Idle;
        }

        let remaining = (left - 1.0).max(0.0);
        held.time_left = Some(remaining);
        let outcome = if remaining <= 0.0 {
            held.is_ready = Some(true);
            TickOutcome::BecameReady
        } else {
            TickOutcome::Counted { remaining }
        };

        if let Some(facts) = self.facts.as_mut() {
            facts.refresh_time(held);
        }
        if outcome == TickOutcome::BecameReady {
            self.ticker.cancel();
        }
        outcome
    }

    /// Handle a timer event. Events from a cancelled or replaced timer are
    /// dropped.
    pub fn on_timer(&mut self, generation: u64) -> TickOutcome {
        if !self.ticker.is_running() || generation != self.ticker.generation() {
            return TickOutcome::Idle;
        }
        self.tick()
    }

    /// Stop ticking but keep the snapshot on display.
    pub fn pause(&mut self) -> bool {
        self.ticker.cancel()
    }

    /// Resume ticking after `pause` if there is time left.
    pub fn resume(&mut self) {
        self.sync_ticker();
    }

    /// Stop ticking and drop the snapshot. Returns `true` if something was
    /// on display.
    pub fn hide(&mut self) -> bool {
        self.ticker.cancel();
        self.facts = None;
        let was_displaying = self.is_displaying();
        self.state = ClockState::Hidden;
        was_displaying
    }

    pub fn state(&self) -> &ClockState {
        &self.state
    }

    pub fn snapshot(&self) -> Option<&PlantSnapshot> {
        match &self.state {
            ClockState::Displaying(s) => Some(s),
            ClockState::Hidden => None,
        }
    }

    pub fn facts(&self) -> Option<&DisplayFacts> {
        self.facts.as_ref()
    }

    pub fn is_displaying(&self) -> bool {
        matches!(self.state, ClockState::Displaying(_))
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.is_running()
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    /// Timer runs iff displaying with time left.
    fn sync_ticker(&mut self) {
        let has_time = self
            .snapshot()
            .and_then(|s| s.time_left)
            .is_some_and(|t| t > 0.0);
        if has_time && !self.ticker.is_running() {
            self.ticker.start();
        } else if !has_time && self.ticker.is_running() {
            self.ticker.cancel();
        }
    }
}

/// Scripted ticker for state-machine tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct ManualTicker {
    pub running: bool,
    pub generation: u64,
    pub starts: u32,
    pub cancels: u32,
}

#[cfg(test)]
impl Ticker for ManualTicker {
    fn start(&mut self) -> u64 {
        self.cancel();
        self.running = true;
        self.generation += 1;
        self.starts += 1;
        self.generation
    }

    fn cancel(&mut self) -> bool {
        if self.running {
            self.running = false;
            self.cancels += 1;
            true
        } else {
            false
        }
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn generation(&self) -> u64 {
        self.generation
    }
}
