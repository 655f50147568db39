//! Shared utility functions used across modules.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate a string to `max_width` display columns, appending "..." if
/// truncated. Wide characters (CJK, emoji) count as two columns.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return take_width(s, max_width);
    }
    format!("{}...", take_width(s, max_width - 3))
}

/// Longest prefix of `s` that fits in `max_width` columns.
fn take_width(s: &str, max_width: usize) -> String {
    let mut used = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── truncate_str ──────────────────────────────────────────────

    #[test]
    fn truncate_str_short_string_unchanged() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello", 5), "hello");
    }

    #[test]
    fn truncate_str_needs_truncation() {
        assert_eq!(truncate_str("hello world", 8), "hello...");
    }

    #[test]
    fn truncate_str_max_len_3_or_less() {
        // When max_width <= 3, no room for "...", just hard-cut
        assert_eq!(truncate_str("abcdef", 3), "abc");
        assert_eq!(truncate_str("abcdef", 1), "a");
        assert_eq!(truncate_str("abcdef", 0), "");
    }

    #[test]
    fn truncate_str_multibyte_is_safe() {
        assert_eq!(truncate_str("Plantação de Milho", 10), "Plantaç...");
    }

    #[test]
    fn truncate_str_wide_chars_count_double() {
        // each CJK char is two columns: 2 chars + "..." fits in 7
        assert_eq!(truncate_str("玉米田地块", 7), "玉米...");
    }
}
