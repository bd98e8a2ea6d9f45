//! Content Module
//!
//! Models, backend interface, and cached data-access functions for the
//! site's content: blog posts, career openings, promotional banners, and
//! contact-form submissions.

mod backend;
mod model;
mod service;

// Re-export public types
pub use backend::{ContentBackend, InMemoryBackend};
pub use model::{
    Banner, BlogPost, CachedContent, CareerOpening, ContactSubmission, EmploymentType,
};
pub use service::{keys, ttl, ContentService};
