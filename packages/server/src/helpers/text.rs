//! Text shaping for templates: line breaks and truncation.
//!
//! These functions contain no side effects and are safe to call from any
//! request handler or template.

use super::html::Html;

/// Convert plain line structure into markup.
///
/// Runs of spaces collapse to one space, `\r\n` and lone `\r` become `\n`,
/// and each `\n` is replaced by `<br />\n`. The input must already be
/// escaped, which the `Html` argument guarantees.
pub fn simple_format(text: &Html) -> Html {
    let mut out = String::with_capacity(text.as_str().len());
    let mut chars = text.as_str().chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ' ' => {
                out.push(' ');
                while chars.peek() == Some(&' ') {
                    chars.next();
                }
            }
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str("<br />\n");
            }
            '\n' => out.push_str("<br />\n"),
            _ => out.push(c),
        }
    }

    Html::from_trusted(out)
}

/// Options for [`truncate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruncateOptions {
    /// Maximum output length in characters, omission included.
    pub length: usize,
    /// Marker appended to truncated text.
    pub omission: String,
    /// Preferred cut boundary; the text is cut before its last occurrence
    /// that fits.
    pub separator: Option<String>,
}

impl Default for TruncateOptions {
    fn default() -> Self {
        Self {
            length: 30,
            omission: "...".to_string(),
            separator: None,
        }
    }
}

impl TruncateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    pub fn with_omission(mut self, omission: impl Into<String>) -> Self {
        self.omission = omission.into();
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }
}

/// Shorten `text` to at most `options.length` characters.
///
/// Returns `None` when there is no text. Text that already fits is returned
/// unchanged. Otherwise the text is cut at `length - omission length`, or at
/// the last separator starting at or before that point, and the omission is
/// appended. If no separator occurs in range the fixed cut point is used,
/// which may split a word.
///
/// An omission longer than `length` is still appended in full.
pub fn truncate(text: Option<&str>, options: &TruncateOptions) -> Option<String> {
    let text = text?;
    let chars: Vec<char> = text.chars().collect();

    if chars.len() <= options.length {
        return Some(text.to_string());
    }

    let stop = options
        .length
        .saturating_sub(options.omission.chars().count());

    let cut = match options.separator.as_deref() {
        Some(separator) => last_occurrence_at_or_before(&chars, separator, stop).unwrap_or(stop),
        None => stop,
    };

    let mut truncated: String = chars[..cut].iter().collect();
    truncated.push_str(&options.omission);
    Some(truncated)
}

/// Start index of the last occurrence of `needle` beginning at or before `start`.
fn last_occurrence_at_or_before(haystack: &[char], needle: &str, start: usize) -> Option<usize> {
    let needle: Vec<char> = needle.chars().collect();
    let start = start.min(haystack.len());

    if needle.is_empty() {
        return Some(start);
    }

    (0..=start)
        .rev()
        .find(|&i| haystack[i..].starts_with(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format(text: &str) -> String {
        simple_format(&Html::escape(text)).into_string()
    }

    #[test]
    fn test_simple_format_collapses_spaces() {
        assert_eq!(format("a    b  c"), "a b c");
    }

    #[test]
    fn test_simple_format_normalizes_line_endings() {
        assert_eq!(format("one\r\ntwo\rthree\nfour"), "one<br />\ntwo<br />\nthree<br />\nfour");
    }

    #[test]
    fn test_simple_format_keeps_blank_lines() {
        assert_eq!(format("a\n\nb"), "a<br />\n<br />\nb");
    }

    #[test]
    fn test_simple_format_does_not_touch_tabs() {
        assert_eq!(format("a\t\tb"), "a\t\tb");
    }

    #[test]
    fn test_simple_format_after_escape_neutralizes_markup() {
        assert_eq!(
            format("<script>\nalert(1)"),
            "&lt;script&gt;<br />\nalert(1)"
        );
    }

    #[test]
    fn test_truncate_none_input() {
        assert_eq!(truncate(None, &TruncateOptions::default()), None);
    }

    #[test]
    fn test_truncate_short_text_unchanged() {
        let options = TruncateOptions::default();
        assert_eq!(truncate(Some("Short message"), &options).as_deref(), Some("Short message"));
    }

    #[test]
    fn test_truncate_exact_length_unchanged() {
        let text = "a".repeat(30);
        let summary = truncate(Some(&text), &TruncateOptions::default()).unwrap();
        assert_eq!(summary, text);
        assert!(!summary.ends_with("..."));
    }

    #[test]
    fn test_truncate_one_over_length() {
        let text = "a".repeat(31);
        let summary = truncate(Some(&text), &TruncateOptions::default()).unwrap();
        assert_eq!(summary.chars().count(), 30);
        assert!(summary.ends_with("..."));
        assert_eq!(&summary[..27], "a".repeat(27).as_str());
    }

    #[test]
    fn test_truncate_short_length() {
        let options = TruncateOptions::new().with_length(5);
        assert_eq!(truncate(Some("abcdefghij"), &options).as_deref(), Some("ab..."));
    }

    #[test]
    fn test_truncate_custom_omission() {
        let options = TruncateOptions::new().with_length(6).with_omission("…");
        assert_eq!(truncate(Some("abcdefghij"), &options).as_deref(), Some("abcde…"));
    }

    #[test]
    fn test_truncate_cuts_at_last_separator() {
        let options = TruncateOptions::new().with_length(17).with_separator(" ");
        // stop = 14, which is itself a space
        assert_eq!(
            truncate(Some("Fix the parser for nested refs"), &options).as_deref(),
            Some("Fix the parser...")
        );
        let options = TruncateOptions::new().with_length(12).with_separator(" ");
        // stop = 9; last space at or before 9 is at 7
        assert_eq!(
            truncate(Some("Fix the parser for nested refs"), &options).as_deref(),
            Some("Fix the...")
        );
    }

    #[test]
    fn test_truncate_separator_exactly_at_stop() {
        let options = TruncateOptions::new().with_length(10).with_separator(" ");
        assert_eq!(
            truncate(Some("abc def ghi jkl"), &options).as_deref(),
            Some("abc def...")
        );
        let options = TruncateOptions::new().with_length(9).with_separator(" ");
        assert_eq!(
            truncate(Some("abc def ghi jkl"), &options).as_deref(),
            Some("abc...")
        );
    }

    #[test]
    fn test_truncate_missing_separator_falls_back_to_fixed_cut() {
        let options = TruncateOptions::new().with_length(8).with_separator(" ");
        assert_eq!(
            truncate(Some("abcdefghijklmnop"), &options).as_deref(),
            Some("abcde...")
        );
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        let options = TruncateOptions::new().with_length(5);
        assert_eq!(truncate(Some("ééééééé"), &options).as_deref(), Some("éé..."));
    }

    #[test]
    fn test_truncate_omission_longer_than_length() {
        let options = TruncateOptions::new().with_length(2);
        assert_eq!(truncate(Some("abcdef"), &options).as_deref(), Some("..."));
    }
}
