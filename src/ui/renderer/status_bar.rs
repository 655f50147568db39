//! Status bar at the bottom of the screen.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::state::{AppState, CardView};

pub fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, card: Option<&CardView>) {
    let t = &state.theme;

    // Helper to create a keybind badge
    let badge = |key: &str, color: ratatui::style::Color| -> Span {
        Span::styled(
            format!(" {} ", key),
            Style::default()
                .fg(t.bg_dark)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        )
    };
    let dim =
        |text: &str| -> Span { Span::styled(text.to_string(), Style::default().fg(t.text_dim)) };

    let keys = vec![
        Span::styled(" ", Style::default()),
        badge("q", t.accent),
        dim(&t!("status.quit").to_string()),
        badge("T", t.accent),
        dim(&t!("status.theme", name = t.name.as_str()).to_string()),
    ];

    // Countdown indicator, right-aligned
    let mut indicator = Vec::new();
    if let Some(card) = card {
        if card.ticking {
            indicator.push(Span::styled(
                format!("● {} ", t!("status.ticking")),
                Style::default().fg(t.success).add_modifier(Modifier::BOLD),
            ));
        } else {
            indicator.push(Span::styled(
                format!("○ {} ", t!("status.paused")),
                Style::default().fg(t.text_muted),
            ));
        }
    }
    if state.source_closed {
        indicator.push(Span::styled(
            format!("{} ", t!("status.input_closed")),
            Style::default().fg(t.warning),
        ));
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(24)])
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(keys)).style(Style::default().bg(t.bg_panel)),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(indicator))
            .alignment(Alignment::Right)
            .style(Style::default().bg(t.bg_panel)),
        chunks[1],
    );
}
