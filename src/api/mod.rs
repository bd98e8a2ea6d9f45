//! API Module
//!
//! HTTP handlers and routing for the content API.
//!
//! Public reads (`/blogs`, `/careers`, `/banners`) are served through the
//! read-through cache; admin mutations invalidate the affected keys.

pub mod handlers;
pub mod routes;

pub use handlers::{AppState, ADMIN_TOKEN_HEADER};
pub use routes::create_router;
