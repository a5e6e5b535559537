//! Text helpers for render code.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates `text` to at most `max_width` display columns, appending an
/// ellipsis when content is dropped. Width-aware, so wide characters never
/// overflow the target column count.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_unchanged() {
        assert_eq!(truncate_with_ellipsis("hello", 10), "hello");
        assert_eq!(truncate_with_ellipsis("hello", 5), "hello");
    }

    #[test]
    fn test_truncates_with_ellipsis() {
        assert_eq!(truncate_with_ellipsis("hello world", 8), "hello w…");
    }

    /// Wide characters count as two columns.
    #[test]
    fn test_wide_characters() {
        assert_eq!(truncate_with_ellipsis("日本語テスト", 5), "日本…");
    }

    #[test]
    fn test_zero_width_budget() {
        assert_eq!(truncate_with_ellipsis("hello", 0), "");
    }
}
