use super::html::{escape_html, Html};

const GRAVATAR_BASE: &str = "https://secure.gravatar.com/avatar";
const DEFAULT_SIZE: u32 = 40;

/// Gravatar URL for a commit author.
///
/// The hash is the MD5 of the email exactly as given; callers that want
/// case-insensitive matching must normalize first.
pub fn gravatar_url(email: &str, size: Option<u32>) -> String {
    let hash = md5::compute(email.as_bytes());
    format!(
        "{}/{:x}?s={}",
        GRAVATAR_BASE,
        hash,
        size.unwrap_or(DEFAULT_SIZE)
    )
}

/// `<img>` tag for [`gravatar_url`], square at the requested size.
pub fn gravatar_image_tag(email: &str, size: Option<u32>, alt: &str) -> Html {
    let size = size.unwrap_or(DEFAULT_SIZE);
    Html::from_trusted(format!(
        r#"<img src="{}" alt="{}" height="{}" width="{}">"#,
        escape_html(&gravatar_url(email, Some(size))),
        escape_html(alt),
        size,
        size,
    ))
}
