//! The crop notebook card and its "waiting" placeholder.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::helpers::{centered_rect, padded_label};
use crate::constants::{CARD_MIN_HEIGHT, CARD_WIDTH, GROWTH_STAGES, MAX_NAME_WIDTH, TIME_BUCKETS};
use crate::status::{DisplayFacts, Note};
use crate::ui::state::{AppState, CardView};
use crate::ui::theme::Theme;
use crate::ui::widgets::CheckboxRow;
use crate::utils::truncate_str;

const LABEL_WIDTH: usize = 13;

/// Rows besides the image line and the wrapped notes.
const FIXED_ROWS: u16 = 11;

pub fn render_card(frame: &mut Frame, area: Rect, state: &AppState, card: &CardView) {
    let t = &state.theme;
    let facts = card.facts;

    // borders + horizontal padding
    let text_width = CARD_WIDTH.saturating_sub(4) as usize;
    let notes = note_lines(facts, text_width, t);
    let note_rows = u16::try_from(notes.len()).unwrap_or(u16::MAX);
    let height = card_height(card.image.is_some(), note_rows);
    let rect = centered_rect(CARD_WIDTH, height, area);

    frame.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(t.border_style())
        .padding(Padding::horizontal(1))
        .title(Span::styled(format!(" {} ", t!("card.title")), t.title_style()))
        .style(Style::default().bg(t.bg_panel));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let mut constraints = vec![Constraint::Length(1)];
    if card.image.is_some() {
        constraints.push(Constraint::Length(1));
    }
    constraints.extend([
        Constraint::Length(1), // spacer
        Constraint::Length(1), // growth
        Constraint::Length(1), // time
        Constraint::Length(1), // fertilizer
        Constraint::Length(1), // water
        Constraint::Length(1), // spacer
        Constraint::Length(1), // harvest
        Constraint::Length(1), // spacer
        Constraint::Length(1), // notes label
        Constraint::Length(note_rows),
        Constraint::Min(0),
        Constraint::Length(1), // footer
    ]);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);
    let mut rows = chunks.iter().copied();
    let mut next = || rows.next().unwrap_or_default();

    // ── Header ───────────────────────────────────────────────
    let name = facts
        .plant_name
        .clone()
        .unwrap_or_else(|| t!("card.unknown_plant").to_string());
    let mut header = vec![Span::styled(truncate_str(&name, MAX_NAME_WIDTH), t.title_style())];
    if let Some(stage) = card.stage_name {
        let room = text_width.saturating_sub(name.width().min(MAX_NAME_WIDTH) + 3);
        if room > 3 {
            header.push(Span::styled(
                format!(" · {}", truncate_str(stage, room)),
                Style::default().fg(t.text_dim),
            ));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(header)), next());

    if let Some(image) = &card.image {
        let line = Line::from(vec![
            padded_label(&t!("card.image"), LABEL_WIDTH, t.label_style()),
            Span::styled(
                truncate_str(image, text_width.saturating_sub(LABEL_WIDTH)),
                Style::default().fg(t.text_muted),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), next());
    }
    next();

    // ── Checkbox rows ────────────────────────────────────────
    frame.render_widget(
        CheckboxRow::new(&t!("card.growth"), facts.growth_indicators, GROWTH_STAGES, t)
            .suffix(format!("{}/{}", facts.growth_stage, GROWTH_STAGES)),
        next(),
    );
    let pct = facts.time_progress_pct;
    frame.render_widget(
        CheckboxRow::new(&t!("card.time"), facts.time_buckets, TIME_BUCKETS, t)
            .suffix(format!("{}%", pct.floor() as u64))
            .check_color(t.progress_color(pct)),
        next(),
    );
    frame.render_widget(
        CheckboxRow::new(&t!("card.fertilizer"), u32::from(facts.fertilized), 1, t),
        next(),
    );
    frame.render_widget(
        CheckboxRow::new(&t!("card.water"), facts.water.count, facts.water.total, t)
            .suffix(format!("{}/{}", facts.water.count, facts.water.total))
            .check_color(t.water),
        next(),
    );
    next();

    // ── Harvest ──────────────────────────────────────────────
    let harvest = Line::from(vec![
        padded_label(&t!("card.harvest"), LABEL_WIDTH, t.label_style()),
        Span::styled(
            facts.harvest_label(),
            Style::default().fg(t.success).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(harvest), next());
    next();

    // ── Notes ────────────────────────────────────────────────
    frame.render_widget(
        Paragraph::new(Span::styled(t!("card.notes").to_string(), t.label_style())),
        next(),
    );
    frame.render_widget(Paragraph::new(notes), next());
    next();

    if let Some(time) = &card.last_sync {
        frame.render_widget(
            Paragraph::new(Span::styled(
                t!("card.synced", time = time.as_str()).to_string(),
                Style::default().fg(t.text_muted),
            ))
            .alignment(Alignment::Right),
            next(),
        );
    }

    if card.fading {
        frame.buffer_mut().set_style(rect, t.fading_style());
    }
}

/// Outer card height, borders included. Saturates instead of overflowing on
/// absurdly long notes; the layout clips to the screen anyway.
fn card_height(has_image: bool, note_rows: u16) -> u16 {
    FIXED_ROWS
        .saturating_add(u16::from(has_image))
        .saturating_add(note_rows)
        .saturating_add(2)
        .max(CARD_MIN_HEIGHT)
}

/// Placeholder shown while no plant is on display.
pub fn render_waiting(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let text = t!("card.waiting").to_string();
    let rect = centered_rect(text.width() as u16 + 4, 3, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(t.border_style());
    frame.render_widget(
        Paragraph::new(Span::styled(text, Style::default().fg(t.text_dim)))
            .alignment(Alignment::Center)
            .block(block),
        rect,
    );
}

/// Wrap every note to `width` columns, prefixed by its icon.
fn note_lines<'a>(facts: &DisplayFacts, width: usize, t: &Theme) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    for note in &facts.notes {
        let style = note_style(note, t);
        let text = format!("{} {}", note.icon(), note.text());
        for part in textwrap::wrap(&text, textwrap::Options::new(width).subsequent_indent("   ")) {
            lines.push(Line::from(Span::styled(part.into_owned(), style)));
        }
    }
    lines
}

fn note_style(note: &Note, t: &Theme) -> Style {
    match note {
        Note::ReadyForHarvest => Style::default().fg(t.success).add_modifier(Modifier::BOLD),
        Note::NeedsWater => Style::default().fg(t.water),
        Note::NeedsFertilizer => Style::default().fg(t.warning),
        _ => t.text_style(),
    }
}
