//! Renderer module: split into focused submodules.
//!
//! - `card`: The crop notebook card and the waiting placeholder
//! - `status_bar`: Bottom status bar with keybinds and countdown state
//! - `helpers`: Shared rendering utilities

mod card;
pub mod helpers;
mod status_bar;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use super::state::{AppState, CardView};

/// Top-level render function. Paints the card (or the waiting hint) above
/// the status bar.
pub fn render(frame: &mut Frame, state: &AppState, card: Option<&CardView>) {
    let size = frame.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Card area
            Constraint::Length(1), // Status bar
        ])
        .split(size);

    match card {
        Some(card) => card::render_card(frame, main_chunks[0], state, card),
        None => card::render_waiting(frame, main_chunks[0], state),
    }
    status_bar::render_status_bar(frame, main_chunks[1], state, card);
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    use super::*;
    use crate::clock::ManualTicker;
    use crate::controller::StatusWidgetController;
    use crate::models::PlantSnapshot;
    use crate::ui::theme::Theme;

    fn screen_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn draw(state: &AppState, controller: &StatusWidgetController<ManualTicker>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let card = CardView::build(controller, state);
        terminal
            .draw(|f| render(f, state, card.as_ref()))
            .unwrap();
        screen_text(terminal.backend().buffer())
    }

    #[test]
    fn hidden_widget_shows_waiting_hint() {
        let state = AppState::new(Theme::default(), "img".into());
        let controller = StatusWidgetController::new(ManualTicker::default(), Duration::ZERO);
        let text = draw(&state, &controller);
        assert!(text.contains("Waiting for plant data"));
        assert!(!text.contains("[x]"));
    }

    #[test]
    fn sample_plant_card_is_painted() {
        let state = AppState::new(Theme::default(), "img".into());
        let mut controller =
            StatusWidgetController::new(ManualTicker::default(), Duration::from_millis(300));
        controller.show(PlantSnapshot::sample());

        let text = draw(&state, &controller);
        assert!(text.contains("Corn Field"));
        assert!(text.contains("Young Plant"));
        assert!(text.contains("img/corn.png"));
        assert!(text.contains("[x]"));
        assert!(text.contains("[ ]"));
        assert!(text.contains("needs water"));
        assert!(text.contains("live"));
    }

    #[test]
    fn fading_card_reads_paused() {
        let state = AppState::new(Theme::default(), "img".into());
        let mut controller =
            StatusWidgetController::new(ManualTicker::default(), Duration::from_millis(300));
        controller.show(PlantSnapshot::sample());
        controller.hide(Instant::now());

        let text = draw(&state, &controller);
        assert!(text.contains("Corn Field"));
        assert!(text.contains("paused"));
    }
}
