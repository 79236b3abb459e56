//! Link construction for downloads, feeds and refs.
//!
//! Every generated href goes through [`prefix_url`] so the front-end can be
//! mounted below a sub-path.

use serde::{Deserialize, Serialize};

use super::html::{escape_html, Html};

/// Join the configured mount prefix and a relative path.
///
/// One trailing `/` is dropped from the prefix, so `"/git/"` and `"/git"`
/// behave the same. An empty prefix yields a root-relative path.
pub fn prefix_url(prefix: &str, path: &str) -> String {
    let prefix = prefix.strip_suffix('/').unwrap_or(prefix);
    format!("{}/{}", prefix, path)
}

/// Kind of a git ref, used as a CSS class on ref links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefKind {
    Branch,
    Tag,
    Remote,
}

impl RefKind {
    pub fn css_class(self) -> &'static str {
        match self {
            RefKind::Branch => "branch",
            RefKind::Tag => "tag",
            RefKind::Remote => "remote",
        }
    }
}

/// A named pointer to a commit, as handed over by the repository reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitRef {
    pub name: String,
    pub kind: RefKind,
}

impl GitRef {
    pub fn new(name: impl Into<String>, kind: RefKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn branch(name: impl Into<String>) -> Self {
        Self::new(name, RefKind::Branch)
    }

    pub fn tag(name: impl Into<String>) -> Self {
        Self::new(name, RefKind::Tag)
    }
}

/// Builds prefixed URLs and anchor tags for one mount prefix.
///
/// `repo` arguments are route-safe repository names; object ids are full or
/// abbreviated hashes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkBuilder {
    prefix: String,
}

impl LinkBuilder {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn url(&self, path: &str) -> String {
        prefix_url(&self.prefix, path)
    }

    pub fn archive_url(&self, repo: &str, tree_id: &str) -> String {
        self.url(&format!("{}/archive/{}.tar.gz", repo, tree_id))
    }

    /// Download link for a tarball of the given tree.
    pub fn archive_link(&self, repo: &str, tree_id: &str) -> Html {
        anchor(
            &self.archive_url(repo, tree_id),
            "Download a tar.gz snapshot of this tree",
            "Download .tar.gz",
        )
    }

    pub fn patch_url(&self, repo: &str, commit_id: &str) -> String {
        self.url(&format!("{}/commit/{}.patch", repo, commit_id))
    }

    /// Download link for a commit as a patch.
    pub fn patch_link(&self, repo: &str, commit_id: &str) -> Html {
        anchor(
            &self.patch_url(repo, commit_id),
            "Download a patch of this commit",
            "Download Patch",
        )
    }

    /// Feed for the whole repository, or for a single ref when given.
    pub fn atom_feed_url(&self, repo: &str, git_ref: Option<&str>) -> String {
        match git_ref {
            Some(name) => self.url(&format!("{}/{}.atom", repo, name)),
            None => self.url(&format!("{}.atom", repo)),
        }
    }

    pub fn atom_feed_link(&self, repo: &str, git_ref: Option<&str>) -> Html {
        Html::from_trusted(format!(
            r#"<a href="{}" title="Atom Feed" rel="alternate" type="application/atom+xml">Feed</a>"#,
            escape_html(&self.atom_feed_url(repo, git_ref)),
        ))
    }

    pub fn ref_link(&self, git_ref: &GitRef, repo: &str) -> Html {
        let href = self.url(&format!("{}/{}", repo, git_ref.name));
        Html::from_trusted(format!(
            r#"<a class="ref {}" href="{}">{}</a>"#,
            git_ref.kind.css_class(),
            escape_html(&href),
            escape_html(&git_ref.name),
        ))
    }

    /// One [`ref_link`](Self::ref_link) per ref, newline separated.
    pub fn ref_links<'a, I>(&self, refs: I, repo: &str) -> Html
    where
        I: IntoIterator<Item = &'a GitRef>,
    {
        let links: Vec<String> = refs
            .into_iter()
            .map(|git_ref| self.ref_link(git_ref, repo).into_string())
            .collect();
        Html::from_trusted(links.join("\n"))
    }
}

fn anchor(href: &str, title: &str, text: &str) -> Html {
    Html::from_trusted(format!(
        r#"<a href="{}" title="{}">{}</a>"#,
        escape_html(href),
        escape_html(title),
        escape_html(text),
    ))
}
