//! Widget visibility and inbound message dispatch.
//!
//! State flow: Hidden → Visible → FadingOut(until) → Hidden.
//! A hide request stops the countdown at once and only clears the card
//! after the fade-out window. A show during the fade brings the card back.

use std::time::{Duration, Instant};

use crate::clock::{CountdownClock, TickOutcome, Ticker};
use crate::models::{ControlMessage, PlantSnapshot};
use crate::status::DisplayFacts;

/// Widget visibility as seen by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Visible,
    /// Hide requested; state is cleared once `until` passes.
    FadingOut { until: Instant },
}

/// Result of dispatching one control message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Card became visible (or came back from a fade-out).
    Shown,
    /// Snapshot replaced on a visible card.
    Updated,
    /// Fade-out started.
    HideStarted,
    /// Message had no effect in the current state.
    Ignored,
}

pub struct StatusWidgetController<T: Ticker> {
    clock: CountdownClock<T>,
    visibility: Visibility,
    hide_transition: Duration,
}

impl<T: Ticker> StatusWidgetController<T> {
    pub fn new(ticker: T, hide_transition: Duration) -> Self {
        Self {
            clock: CountdownClock::new(ticker),
            visibility: Visibility::Hidden,
            hide_transition,
        }
    }

    /// Single entry point for inbound messages.
    pub fn handle(&mut self, msg: ControlMessage, now: Instant) -> Transition {
        let action = msg.action_name();
        let transition = match msg {
            ControlMessage::Show(snapshot) => self.show(snapshot),
            ControlMessage::Update(snapshot) => self.update(snapshot),
            ControlMessage::Hide => self.hide(now),
        };
        match transition {
            Transition::Ignored => tracing::debug!(action, "message ignored"),
            _ => tracing::info!(action, ?transition, "widget transition"),
        }
        if matches!(transition, Transition::Shown | Transition::Updated) {
            if let Some(facts) = self.facts() {
                tracing::debug!(notes = %facts.note_text(), "notes");
            }
        }
        transition
    }

    pub fn show(&mut self, snapshot: PlantSnapshot) -> Transition {
        match self.visibility {
            Visibility::Hidden => {
                self.clock.show(snapshot);
                self.visibility = Visibility::Visible;
                Transition::Shown
            }
            Visibility::Visible => {
                self.clock.update(snapshot);
                Transition::Updated
            }
            Visibility::FadingOut { .. } => {
                self.clock.show(snapshot);
                self.clock.resume();
                self.visibility = Visibility::Visible;
                Transition::Shown
            }
        }
    }

    /// Only a visible card accepts updates.
    pub fn update(&mut self, snapshot: PlantSnapshot) -> Transition {
        if self.visibility != Visibility::Visible {
            return Transition::Ignored;
        }
        self.clock.update(snapshot);
        Transition::Updated
    }

    /// Start the fade-out. Ticking stops now; the snapshot is discarded
    /// when `poll` sees the window expire.
    pub fn hide(&mut self, now: Instant) -> Transition {
        if self.visibility != Visibility::Visible {
            return Transition::Ignored;
        }
        self.clock.pause();
        self.visibility = Visibility::FadingOut {
            until: now + self.hide_transition,
        };
        Transition::HideStarted
    }

    /// Complete an expired fade-out. Returns `true` when the card was cleared.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.visibility {
            Visibility::FadingOut { until } if now >= until => {
                self.clock.hide();
                self.visibility = Visibility::Hidden;
                tracing::info!("widget hidden");
                true
            }
            _ => false,
        }
    }

    /// Forward a timer event to the countdown.
    pub fn on_timer(&mut self, generation: u64) -> TickOutcome {
        let outcome = self.clock.on_timer(generation);
        if outcome == TickOutcome::BecameReady {
            tracing::info!("countdown finished, plant marked ready");
        }
        outcome
    }

    /// Tear everything down immediately (application exit).
    pub fn shutdown(&mut self) {
        self.clock.hide();
        self.visibility = Visibility::Hidden;
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility != Visibility::Hidden
    }

    pub fn is_fading(&self) -> bool {
        matches!(self.visibility, Visibility::FadingOut { .. })
    }

    pub fn facts(&self) -> Option<&DisplayFacts> {
        self.clock.facts()
    }

    pub fn clock(&self) -> &CountdownClock<T> {
        &self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualTicker;

    const FADE: Duration = Duration::from_millis(300);

    fn controller() -> StatusWidgetController<ManualTicker> {
        StatusWidgetController::new(ManualTicker::default(), FADE)
    }

    fn plant(left: f64) -> PlantSnapshot {
        PlantSnapshot {
            plant_name: Some("Wheat".to_string()),
            time_left: Some(left),
            time_to_grow: Some(100.0),
            ..Default::default()
        }
    }

    #[test]
    fn show_from_hidden() {
        let mut c = controller();
        let t = c.handle(ControlMessage::Show(plant(10.0)), Instant::now());
        assert_eq!(t, Transition::Shown);
        assert_eq!(c.visibility(), Visibility::Visible);
        assert!(c.clock().is_ticking());
        assert_eq!(
            c.facts().unwrap().plant_name.as_deref(),
            Some("Wheat")
        );
    }

    #[test]
    fn show_while_visible_installs_snapshot() {
        let mut c = controller();
        c.show(plant(10.0));
        assert_eq!(c.show(plant(50.0)), Transition::Updated);
        assert_eq!(c.clock().snapshot().unwrap().time_left, Some(50.0));
        assert_eq!(c.clock().ticker().starts, 1);
    }

    #[test]
    fn update_only_when_visible() {
        let mut c = controller();
        let now = Instant::now();
        assert_eq!(
            c.handle(ControlMessage::Update(plant(1.0)), now),
            Transition::Ignored
        );
        assert!(c.facts().is_none());

        c.show(plant(10.0));
        assert_eq!(
            c.handle(ControlMessage::Update(plant(20.0)), now),
            Transition::Updated
        );
        assert_eq!(c.clock().snapshot().unwrap().time_left, Some(20.0));
    }

    #[test]
    fn update_while_hidden_does_not_leak_into_next_show() {
        let mut c = controller();
        c.update(plant(1.0));
        c.show(plant(30.0));
        assert_eq!(c.clock().snapshot().unwrap().time_left, Some(30.0));
    }

    #[test]
    fn hide_stops_ticking_immediately_and_clears_after_fade() {
        let mut c = controller();
        let now = Instant::now();
        c.show(plant(10.0));

        assert_eq!(c.hide(now), Transition::HideStarted);
        assert!(!c.clock().is_ticking());
        assert!(c.is_fading());
        assert!(c.facts().is_some());

        let gen = c.clock().ticker().generation();
        assert_eq!(c.on_timer(gen), TickOutcome::Idle);
        assert_eq!(c.clock().snapshot().unwrap().time_left, Some(10.0));

        assert!(!c.poll(now + Duration::from_millis(100)));
        assert!(c.poll(now + FADE));
        assert_eq!(c.visibility(), Visibility::Hidden);
        assert!(c.facts().is_none());
        assert!(c.clock().snapshot().is_none());
    }

    #[test]
    fn repeated_hide_cancels_timer_once() {
        let mut c = controller();
        let now = Instant::now();
        c.show(plant(10.0));

        assert_eq!(c.hide(now), Transition::HideStarted);
        assert_eq!(c.hide(now), Transition::Ignored);
        c.poll(now + FADE);
        assert_eq!(c.hide(now + FADE), Transition::Ignored);
        assert_eq!(c.clock().ticker().cancels, 1);
    }

    #[test]
    fn hide_while_hidden_is_noop() {
        let mut c = controller();
        let now = Instant::now();
        assert_eq!(c.handle(ControlMessage::Hide, now), Transition::Ignored);
        assert!(!c.poll(now + FADE));
        assert_eq!(c.clock().ticker().cancels, 0);
    }

    #[test]
    fn update_during_fade_is_ignored() {
        let mut c = controller();
        let now = Instant::now();
        c.show(plant(10.0));
        c.hide(now);
        assert_eq!(c.update(plant(99.0)), Transition::Ignored);
        assert_eq!(c.clock().snapshot().unwrap().time_left, Some(10.0));
    }

    #[test]
    fn show_during_fade_revives_card() {
        let mut c = controller();
        let now = Instant::now();
        c.show(plant(10.0));
        c.hide(now);

        assert_eq!(c.show(plant(40.0)), Transition::Shown);
        assert_eq!(c.visibility(), Visibility::Visible);
        assert!(c.clock().is_ticking());
        assert_eq!(c.clock().snapshot().unwrap().time_left, Some(40.0));

        // the abandoned fade must not hide the revived card
        assert!(!c.poll(now + FADE * 2));
        assert!(c.is_visible());
    }

    #[test]
    fn countdown_through_controller() {
        let mut c = controller();
        c.show(plant(2.0));
        let gen = c.clock().ticker().generation();
        assert_eq!(c.on_timer(gen), TickOutcome::Counted { remaining: 1.0 });
        assert_eq!(c.on_timer(gen), TickOutcome::BecameReady);
        assert_eq!(c.on_timer(gen), TickOutcome::Idle);
        assert!(c.is_visible());
        assert_eq!(c.clock().snapshot().unwrap().is_ready, Some(true));
    }

    #[test]
    fn shutdown_clears_everything() {
        let mut c = controller();
        c.show(plant(10.0));
        c.shutdown();
        assert_eq!(c.visibility(), Visibility::Hidden);
        assert!(!c.clock().is_ticking());
        assert_eq!(c.clock().ticker().cancels, 1);
    }
}
