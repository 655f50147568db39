use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};
use unicode_width::UnicodeWidthStr;

use super::theme::Theme;

const CHECKED: &str = "[x]";
const UNCHECKED: &str = "[ ]";

/// A labelled row of notebook checkboxes: `Label   [x] [x] [ ]  suffix`.
///
/// Exactly `total` boxes are drawn; the first `checked` are ticked.
pub struct CheckboxRow<'a> {
    pub label: String,
    pub checked: u32,
    pub total: u32,
    pub suffix: Option<String>,
    pub label_width: u16,
    pub theme: &'a Theme,
    pub check_color: Option<ratatui::style::Color>,
}

impl<'a> CheckboxRow<'a> {
    pub fn new(label: &str, checked: u32, total: u32, theme: &'a Theme) -> Self {
        Self {
            label: label.to_string(),
            checked: checked.min(total),
            total,
            suffix: None,
            label_width: 13,
            theme,
            check_color: None,
        }
    }

    pub fn suffix(mut self, suffix: String) -> Self {
        self.suffix = Some(suffix);
        self
    }

    pub fn check_color(mut self, color: ratatui::style::Color) -> Self {
        self.check_color = Some(color);
        self
    }
}

impl Widget for CheckboxRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 1 {
            return;
        }

        buf.set_stringn(
            area.x,
            area.y,
            &self.label,
            self.label_width as usize,
            self.theme.label_style(),
        );

        let mut x = area.x + self.label_width.min(area.width);
        let right = area.x + area.width;
        for i in 0..self.total {
            let width = CHECKED.width() as u16;
            if x + width > right {
                return;
            }
            let checked = i < self.checked;
            let mut style = self.theme.check_style(checked);
            if checked {
                if let Some(color) = self.check_color {
                    style = style.fg(color);
                }
            }
            buf.set_string(x, area.y, if checked { CHECKED } else { UNCHECKED }, style);
            x += width + 1;
        }

        if let Some(suffix) = &self.suffix {
            let x = x + 1;
            if x < right {
                buf.set_stringn(
                    x,
                    area.y,
                    suffix,
                    (right - x) as usize,
                    Style::default().fg(self.theme.text_dim),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, width: u16) -> String {
        (0..width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect::<String>()
    }

    #[test]
    fn draws_exactly_total_boxes() {
        let theme = Theme::default_dark();
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        CheckboxRow::new("Water", 2, 3, &theme).render(area, &mut buf);
        let text = row_text(&buf, 40);
        assert!(text.starts_with("Water"));
        assert_eq!(text.matches("[x]").count(), 2);
        assert_eq!(text.matches("[ ]").count(), 1);
    }

    #[test]
    fn checked_never_exceeds_total() {
        let theme = Theme::default_dark();
        let row = CheckboxRow::new("Water", 5, 3, &theme);
        assert_eq!(row.checked, 3);
    }

    #[test]
    fn suffix_follows_boxes() {
        let theme = Theme::default_dark();
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        CheckboxRow::new("Time", 1, 5, &theme)
            .suffix("29%".to_string())
            .render(area, &mut buf);
        assert!(row_text(&buf, 40).trim_end().ends_with("29%"));
    }

    #[test]
    fn tiny_area_draws_nothing() {
        let theme = Theme::default_dark();
        let area = Rect::new(0, 0, 3, 1);
        let mut buf = Buffer::empty(area);
        CheckboxRow::new("Growth", 1, 3, &theme).render(area, &mut buf);
        assert_eq!(row_text(&buf, 3), "   ");
    }
}
