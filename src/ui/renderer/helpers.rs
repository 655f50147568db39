//! Shared rendering helpers: centered rect, fixed-width labels.

use ratatui::{layout::Rect, style::Style, text::Span};
use unicode_width::UnicodeWidthStr;

use crate::utils::truncate_str;

/// Return a `Rect` centered within `area` with the given dimensions.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

/// A label span padded (or cut) to exactly `width` columns.
pub fn padded_label<'a>(label: &str, width: usize, style: Style) -> Span<'a> {
    let text = truncate_str(label, width);
    let pad = width.saturating_sub(text.width());
    Span::styled(format!("{}{}", text, " ".repeat(pad)), style)
}
