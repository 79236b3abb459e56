// HTTP server setup (Axum)
pub mod app;
pub mod routes;
pub mod view_request;

pub use app::*;
pub use view_request::*;
