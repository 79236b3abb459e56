//! Timestamp formats used by commit pages and feeds.

use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};

use super::html::Html;

/// Short human date, e.g. `Dec 13, 2003 &ndash; 18:30`.
///
/// The dash is an entity, so the result is meant for markup.
pub fn nicetime<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    time.format("%b %d, %Y &ndash; %H:%M").to_string()
}

/// `<time>` element with a machine-readable `datetime` attribute (offset
/// included) and a full timestamp in `title`.
pub fn time_tag<Tz: TimeZone>(time: &DateTime<Tz>) -> Html
where
    Tz::Offset: Display,
{
    Html::from_trusted(format!(
        r#"<time datetime="{}" title="{}">{}</time>"#,
        time.format("%Y-%m-%dT%H:%M:%S%z"),
        time.format("%Y-%m-%d %H:%M:%S"),
        time.format("%B %d, %Y %H:%M"),
    ))
}

/// Atom `<updated>` timestamp, always in UTC with a `Z` suffix.
pub fn rfc_date(time: &DateTime<Utc>) -> String {
    time.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
