//! Changed-file list shown above a commit's diffs.

use serde::{Deserialize, Serialize};

use super::html::{escape_html, Html};

/// One file touched by a commit, in commit order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub path: String,
    #[serde(default)]
    pub added: bool,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub modified: bool,
}

/// How a file is displayed in the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeStatus {
    Added,
    Deleted,
    Changed,
}

impl ChangeStatus {
    pub fn css_class(self) -> &'static str {
        match self {
            ChangeStatus::Added => "added",
            ChangeStatus::Deleted => "deleted",
            ChangeStatus::Changed => "changed",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ChangeStatus::Added => "icon-ok",
            ChangeStatus::Deleted => "icon-remove",
            ChangeStatus::Changed => "icon-edit",
        }
    }
}

impl ChangeRecord {
    pub fn added(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            added: true,
            ..Default::default()
        }
    }

    pub fn deleted(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            deleted: true,
            ..Default::default()
        }
    }

    pub fn modified(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            modified: true,
            ..Default::default()
        }
    }

    /// Deleted wins over added; anything else counts as changed.
    pub fn status(&self) -> ChangeStatus {
        if self.deleted {
            ChangeStatus::Deleted
        } else if self.added {
            ChangeStatus::Added
        } else {
            ChangeStatus::Changed
        }
    }
}

/// Render the changes as a `<ul>` whose entries link to `#file-N`, N being
/// the 1-based position in `changes`.
pub fn file_listing(changes: &[ChangeRecord]) -> Html {
    let items: String = changes
        .iter()
        .enumerate()
        .map(|(index, change)| {
            let status = change.status();
            format!(
                r##"<li class="{}"><i class="{}"></i> <a href="#file-{}">{}</a></li>"##,
                status.css_class(),
                status.icon(),
                index + 1,
                escape_html(&change.path),
            )
        })
        .collect();

    Html::from_trusted(format!(r#"<ul class="unstyled">{}</ul>"#, items))
}
