//! The countdown's periodic timer.
//!
//! At most one timer runs per ticker. Every start bumps a generation number
//! that travels with each tick, so ticks queued by a cancelled timer can be
//! told apart from live ones.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

/// A restartable, cancellable periodic timer.
pub trait Ticker {
    /// Start ticking, cancelling any running timer first. Returns the new
    /// generation.
    fn start(&mut self) -> u64;
    /// Stop the running timer. Returns `true` only if one was running.
    fn cancel(&mut self) -> bool;
    fn is_running(&self) -> bool;
    /// Generation of the most recently started timer.
    fn generation(&self) -> u64;
}

/// Tokio-backed ticker: one spawned task per generation, sending the
/// generation number on every period.
pub struct IntervalTicker {
    period: Duration,
    tx: mpsc::UnboundedSender<u64>,
    handle: Option<JoinHandle<()>>,
    generation: u64,
}

impl IntervalTicker {
    /// Create a stopped ticker and the receiving end of its tick channel.
    pub fn new(period: Duration) -> (Self, mpsc::UnboundedReceiver<u64>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                period,
                tx,
                handle: None,
                generation: 0,
            },
            rx,
        )
    }
}

impl Ticker for IntervalTicker {
    fn start(&mut self) -> u64 {
        self.cancel();
        self.generation += 1;

        let generation = self.generation;
        let period = self.period;
        let tx = self.tx.clone();
        self.handle = Some(tokio::spawn(async move {
            let mut interval = time::interval_at(time::Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(generation).is_err() {
                    break;
                }
            }
        }));
        tracing::debug!(generation, "countdown timer started");
        generation
    }

    fn cancel(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                handle.abort();
                tracing::debug!(generation = self.generation, "countdown timer cancelled");
                true
            }
            None => false,
        }
    }

    fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for IntervalTicker {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_secs(1);

    #[tokio::test(start_paused = true)]
    async fn ticks_carry_generation() {
        let (mut ticker, mut rx) = IntervalTicker::new(PERIOD);
        let gen = ticker.start();
        assert_eq!(gen, 1);
        assert!(ticker.is_running());

        let first = time::timeout(Duration::from_secs(5), rx.recv()).await;
        assert_eq!(first.unwrap(), Some(1));
        let second = time::timeout(Duration::from_secs(5), rx.recv()).await;
        assert_eq!(second.unwrap(), Some(1));
    }

    #[tokio::test(start_paused = true)]
    async fn first_tick_waits_one_period() {
        let (mut ticker, mut rx) = IntervalTicker::new(PERIOD);
        let started = time::Instant::now();
        ticker.start();
        rx.recv().await;
        assert!(started.elapsed() >= PERIOD);
    }

    #[tokio::test(start_paused = true)]
    async fn restart_replaces_running_timer() {
        let (mut ticker, mut rx) = IntervalTicker::new(PERIOD);
        ticker.start();
        let gen = ticker.start();
        assert_eq!(gen, 2);

        for _ in 0..3 {
            let got = time::timeout(Duration::from_secs(5), rx.recv()).await;
            assert_eq!(got.unwrap(), Some(2));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_ticks() {
        let (mut ticker, mut rx) = IntervalTicker::new(PERIOD);
        ticker.start();
        assert!(ticker.cancel());
        assert!(!ticker.is_running());

        let got = time::timeout(Duration::from_secs(5), rx.recv()).await;
        assert!(got.is_err(), "no tick expected after cancel");
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_is_idempotent() {
        let (mut ticker, _rx) = IntervalTicker::new(PERIOD);
        assert!(!ticker.cancel());
        ticker.start();
        assert!(ticker.cancel());
        assert!(!ticker.cancel());
        assert_eq!(ticker.generation(), 1);
    }
}
