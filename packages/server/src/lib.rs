// git-viewer - view helpers for a web front-end that browses Git repositories
//
// `helpers` holds the pure formatting functions templates call (escaping,
// dates, truncation, links, file listings). `server` is the thin axum host
// around them.

pub mod config;
pub mod helpers;
pub mod server;

pub use config::*;
