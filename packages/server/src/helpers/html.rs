//! HTML-safe fragments and escaping.

use std::fmt;

use serde::Serialize;

/// Escape the four characters that can break out of text or attribute
/// context: `&`, `<`, `>` and `"`.
///
/// Everything else passes through unchanged.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// A fragment of markup that is safe to interpolate into a page as-is.
///
/// The only ways to get one are [`Html::escape`], which neutralizes its
/// input, and [`Html::from_trusted`], for markup the caller built itself.
/// Helpers that insert raw tags (see `simple_format`) accept `&Html`, so
/// unescaped text cannot reach them by accident.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Html(String);

impl Html {
    /// Escape arbitrary text into a safe fragment.
    pub fn escape(text: &str) -> Self {
        Html(escape_html(text))
    }

    /// Wrap markup that is already known to be safe.
    pub fn from_trusted(markup: impl Into<String>) -> Self {
        Html(markup.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Html {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Html> for String {
    fn from(html: Html) -> Self {
        html.0
    }
}
