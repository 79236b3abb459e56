// View helpers for repository pages
//
// Pure functions: they take plain values (text, timestamps, change records,
// headers, the mount prefix) and return strings or `Html` fragments for
// templates. Nothing here touches the repository or global state.

pub mod avatar;
pub mod files;
pub mod html;
pub mod links;
pub mod request;
pub mod text;
pub mod time;

pub use avatar::*;
pub use files::*;
pub use html::*;
pub use links::*;
pub use request::*;
pub use text::*;
pub use time::*;
