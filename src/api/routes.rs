//! API Routes
//!
//! Configures the Axum router with all content API endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cache_clear_handler, cache_stats_handler, create_banner_handler, create_blog_handler,
    create_career_handler, delete_banner_handler, delete_blog_handler, delete_career_handler,
    delete_submission_handler, get_banner_handler, get_blog_handler, get_career_handler,
    health_handler, list_banners_handler, list_blogs_handler, list_careers_handler,
    list_submissions_handler, mark_submission_read_handler, submit_contact_handler,
    update_banner_handler, update_blog_handler, update_career_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /health` - Health check
/// - `GET /cache/stats` - Cache diagnostics
/// - `POST /cache/clear` - Drop all cached content (admin)
/// - `GET|POST /blogs`, `GET|PUT|DELETE /blogs/:id` - Blog posts
/// - `GET|POST /careers`, `GET|PUT|DELETE /careers/:id` - Career openings
/// - `GET|POST /banners`, `GET|PUT|DELETE /banners/:id` - Banners
/// - `POST /contact`, `GET /contact`, `PUT /contact/:id/read`,
///   `DELETE /contact/:id` - Contact submissions
///
/// Mutations and submission reads are admin-gated by a shared token
/// header; everything else is public.
///
/// # Middleware
/// - CORS: Allows any origin (the site frontend calls this directly)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/health", get(health_handler))
        .route("/cache/stats", get(cache_stats_handler))
        .route("/cache/clear", post(cache_clear_handler))
        .route("/blogs", get(list_blogs_handler).post(create_blog_handler))
        .route(
            "/blogs/:id",
            get(get_blog_handler)
                .put(update_blog_handler)
                .delete(delete_blog_handler),
        )
        .route(
            "/careers",
            get(list_careers_handler).post(create_career_handler),
        )
        .route(
            "/careers/:id",
            get(get_career_handler)
                .put(update_career_handler)
                .delete(delete_career_handler),
        )
        .route(
            "/banners",
            get(list_banners_handler).post(create_banner_handler),
        )
        .route(
            "/banners/:id",
            get(get_banner_handler)
                .put(update_banner_handler)
                .delete(delete_banner_handler),
        )
        .route(
            "/contact",
            post(submit_contact_handler).get(list_submissions_handler),
        )
        .route("/contact/:id/read", put(mark_submission_read_handler))
        .route("/contact/:id", delete(delete_submission_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
