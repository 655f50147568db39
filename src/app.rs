//! Application struct and event loop.
//!
//! Owns the terminal, the widget controller and the two inbound channels
//! (control messages and countdown ticks). Everything that mutates widget
//! state runs on this loop.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::clock::IntervalTicker;
use crate::config::Config;
use crate::constants::{EVENT_POLL_MS, TICK_PERIOD_MS};
use crate::controller::{StatusWidgetController, Transition};
use crate::models::{ControlMessage, PlantSnapshot};
use crate::transport::{self, Source};
use crate::ui::{self, AppState, CardView, Theme};

/// Main application struct.
pub struct App {
    state: AppState,
    controller: StatusWidgetController<IntervalTicker>,

    // Channels
    msg_rx: mpsc::UnboundedReceiver<ControlMessage>,
    tick_rx: mpsc::UnboundedReceiver<u64>,

    /// Background reader feeding `msg_rx`, if any.
    reader: Option<JoinHandle<()>>,
    /// Held open when nothing else feeds `msg_rx` (demo without input).
    _idle_tx: Option<mpsc::UnboundedSender<ControlMessage>>,
}

impl App {
    /// Create the app and start reading control messages from `source`.
    ///
    /// With `demo`, the sample plant is shown before anything is read.
    pub fn new(config: &Config, source: Option<Source>, demo: bool) -> Result<Self> {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();

        if demo {
            msg_tx.send(ControlMessage::Show(PlantSnapshot::sample()))?;
        }

        let (reader, idle_tx) = match source {
            Some(source) => {
                tracing::info!(?source, "reading control messages");
                (Some(transport::spawn_reader(source, msg_tx)), None)
            }
            None => (None, Some(msg_tx)),
        };

        let mut app = Self::with_receiver(config, msg_rx);
        app.reader = reader;
        app._idle_tx = idle_tx;
        Ok(app)
    }

    /// Build an app around an existing message channel. No reader is spawned.
    pub fn with_receiver(config: &Config, msg_rx: mpsc::UnboundedReceiver<ControlMessage>) -> Self {
        let (ticker, tick_rx) = IntervalTicker::new(Duration::from_millis(TICK_PERIOD_MS));
        let controller =
            StatusWidgetController::new(ticker, Duration::from_millis(config.hide_transition_ms));
        let state = AppState::new(Theme::resolve(&config.theme), config.asset_base_url.clone());

        Self {
            state,
            controller,
            msg_rx,
            tick_rx,
            reader: None,
            _idle_tx: None,
        }
    }

    /// Run the main event loop until the user quits.
    pub async fn run(&mut self) -> Result<()> {
        // Terminal init
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        // Main loop
        loop {
            let card = CardView::build(&self.controller, &self.state);
            terminal.draw(|frame| ui::render(frame, &self.state, card.as_ref()))?;

            self.drain_messages(Instant::now());
            self.drain_ticks();

            if event::poll(Duration::from_millis(EVENT_POLL_MS))? {
                if let Event::Key(key) = event::read()? {
                    if self.handle_key(key) {
                        break; // quit requested
                    }
                }
            }

            self.controller.poll(Instant::now());
        }

        // Cleanup
        self.controller.shutdown();
        if let Some(reader) = self.reader.take() {
            reader.abort();
        }
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        println!("\n{}\n", t!("app.stopped"));
        Ok(())
    }

    // ── Channel draining ─────────────────────────────────────────

    fn drain_messages(&mut self, now: Instant) {
        loop {
            match self.msg_rx.try_recv() {
                Ok(msg) => {
                    let transition = self.controller.handle(msg, now);
                    if matches!(transition, Transition::Shown | Transition::Updated) {
                        self.state.mark_synced();
                    }
                }
                Err(mpsc::error::TryRecvError::Empty) => break,
                Err(mpsc::error::TryRecvError::Disconnected) => {
                    if !self.state.source_closed {
                        tracing::info!("control message channel closed");
                        self.state.source_closed = true;
                    }
                    break;
                }
            }
        }
    }

    fn drain_ticks(&mut self) {
        while let Ok(generation) = self.tick_rx.try_recv() {
            self.controller.on_timer(generation);
        }
    }

    // ── Input ────────────────────────────────────────────────────

    /// Handle one key press. Returns `true` when the app should quit.
    fn handle_key(&mut self, key: crossterm::event::KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
            KeyCode::Char('T') => {
                self.state.cycle_theme();
                tracing::debug!(theme = %self.state.theme.name, "theme changed");
                false
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEvent;

    use super::*;
    use crate::controller::Visibility;

    fn app() -> (App, mpsc::UnboundedSender<ControlMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (App::with_receiver(&Config::default(), rx), tx)
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[tokio::test]
    async fn show_marks_sync_and_displays() {
        let (mut app, tx) = app();
        tx.send(ControlMessage::Show(PlantSnapshot::sample())).unwrap();
        app.drain_messages(Instant::now());

        assert_eq!(app.controller.visibility(), Visibility::Visible);
        assert!(app.state.last_sync.is_some());
        assert!(!app.state.source_closed);
    }

    #[tokio::test]
    async fn hide_fades_then_clears() {
        let (mut app, tx) = app();
        let now = Instant::now();
        tx.send(ControlMessage::Show(PlantSnapshot::sample())).unwrap();
        tx.send(ControlMessage::Hide).unwrap();
        app.drain_messages(now);
        assert!(app.controller.is_fading());

        app.controller.poll(now + Duration::from_millis(299));
        assert!(app.controller.is_fading());
        app.controller.poll(now + Duration::from_millis(300));
        assert_eq!(app.controller.visibility(), Visibility::Hidden);
    }

    #[tokio::test]
    async fn ignored_update_does_not_sync() {
        let (mut app, tx) = app();
        tx.send(ControlMessage::Update(PlantSnapshot::sample())).unwrap();
        app.drain_messages(Instant::now());
        assert!(app.state.last_sync.is_none());
        assert!(!app.controller.is_visible());
    }

    #[tokio::test]
    async fn closed_channel_is_flagged() {
        let (mut app, tx) = app();
        drop(tx);
        app.drain_messages(Instant::now());
        assert!(app.state.source_closed);
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_count_down_the_displayed_plant() {
        let (mut app, tx) = app();
        tx.send(ControlMessage::Show(PlantSnapshot::sample())).unwrap();
        app.drain_messages(Instant::now());

        tokio::time::sleep(Duration::from_millis(2500)).await;
        app.drain_ticks();

        let snapshot = app.controller.clock().snapshot().unwrap();
        assert_eq!(snapshot.time_left, Some(848.0));
    }

    #[tokio::test(start_paused = true)]
    async fn one_second_of_wall_clock_removes_one_second() {
        let (mut app, tx) = app();
        tx.send(ControlMessage::Show(PlantSnapshot::sample())).unwrap();
        app.drain_messages(Instant::now());

        tokio::time::sleep(Duration::from_millis(1050)).await;
        app.drain_ticks();

        let snapshot = app.controller.clock().snapshot().unwrap();
        assert_eq!(snapshot.time_left, Some(849.0));
    }

    #[tokio::test]
    async fn quit_keys() {
        let (mut app, _tx) = app();
        assert!(app.handle_key(key(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(app.handle_key(key(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(app.handle_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!app.handle_key(key(KeyCode::Char('c'), KeyModifiers::NONE)));
    }

    #[tokio::test]
    async fn theme_key_cycles() {
        let (mut app, _tx) = app();
        let before = app.state.theme.name.clone();
        assert!(!app.handle_key(key(KeyCode::Char('T'), KeyModifiers::SHIFT)));
        assert_ne!(app.state.theme.name, before);
    }

    #[tokio::test]
    async fn demo_shows_sample_without_reader() {
        let mut app = App::new(&Config::default(), None, true).unwrap();
        app.drain_messages(Instant::now());
        assert!(app.controller.is_visible());
        assert!(app.reader.is_none());
        // the idle sender keeps the channel open
        assert!(!app.state.source_closed);
    }
}
