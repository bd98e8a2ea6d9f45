//! API Handlers
//!
//! HTTP request handlers for the content API endpoints. Reads of blogs,
//! careers, and banners go through the content service's cache; mutations
//! are admin-gated and invalidate the affected cache keys.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use uuid::Uuid;

use crate::content::{
    Banner, BlogPost, CareerOpening, ContactSubmission, ContentService,
};
use crate::error::{AppError, Result};
use crate::models::{
    ClearResponse, ContactRequest, CreateBannerRequest, CreateBlogRequest, CreateCareerRequest,
    HealthResponse, MutationResponse, StatsResponse, UpdateBannerRequest, UpdateBlogRequest,
    UpdateCareerRequest,
};

/// Header carrying the shared admin token.
pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

// == App State ==
/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Cached content access
    pub service: ContentService,
    /// Shared token gating admin endpoints. A single string comparison,
    /// not a security system.
    pub admin_token: String,
}

impl AppState {
    /// Creates a new AppState.
    pub fn new(service: ContentService, admin_token: impl Into<String>) -> Self {
        Self {
            service,
            admin_token: admin_token.into(),
        }
    }

    fn require_admin(&self, headers: &HeaderMap) -> Result<()> {
        let token = headers
            .get(ADMIN_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok());
        match token {
            Some(token) if token == self.admin_token => Ok(()),
            _ => Err(AppError::Unauthorized(
                "missing or invalid admin token".to_string(),
            )),
        }
    }
}

// == Health & Cache Handlers ==

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Handler for GET /cache/stats
pub async fn cache_stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.service.cache().stats()))
}

/// Handler for POST /cache/clear (admin)
pub async fn cache_clear_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ClearResponse>> {
    state.require_admin(&headers)?;
    state.service.cache().clear();
    Ok(Json(ClearResponse::new()))
}

// == Blog Handlers ==

/// Handler for GET /blogs
pub async fn list_blogs_handler(State(state): State<AppState>) -> Result<Json<Vec<BlogPost>>> {
    Ok(Json(state.service.blogs().await?))
}

/// Handler for GET /blogs/:id
pub async fn get_blog_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BlogPost>> {
    Ok(Json(state.service.blog(id).await?))
}

/// Handler for POST /blogs (admin)
pub async fn create_blog_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreateBlogRequest>,
) -> Result<Json<MutationResponse>> {
    state.require_admin(&headers)?;
    if let Some(error_msg) = req.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }

    let blog = state.service.create_blog(req).await?;
    Ok(Json(MutationResponse::new("Blog created", blog.id)))
}

/// Handler for PUT /blogs/:id (admin)
pub async fn update_blog_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Json(req): Json<UpdateBlogRequest>,
) -> Result<Json<MutationResponse>> {
    state.require_admin(&headers)?;
    if let Some(error_msg) = req.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }

    let blog = state.service.update_blog(id, req).await?;
    Ok(Json(MutationResponse::new("Blog updated", blog.id)))
}

/// Handler for DELETE /blogs/:id (admin)
pub async fn delete_blog_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<MutationResponse>> {
    state.require_admin(&headers)?;

    state.service.delete_blog(id).await?;
    Ok(Json(MutationResponse::new("Blog deleted", id)))
}

// == Career Handlers ==

/// Handler for GET /careers
pub async fn list_careers_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CareerOpening>>> {
    Ok(Json(state.service.careers().await?))
}

/// Handler for GET /careers/:id
pub async fn get_career_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CareerOpening>> {
    Ok(Json(state.service.career(id).await?))
}

/// Handler for POST /careers (admin)
pub async fn create_career_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreateCareerRequest>,
) -> Result<Json<MutationResponse>> {
    state.require_admin(&headers)?;
    if let Some(error_msg) = req.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }

    let career = state.service.create_career(req).await?;
    Ok(Json(MutationResponse::new("Career created", career.id)))
}

/// Handler for PUT /careers/:id (admin)
pub async fn update_career_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Json(req): Json<UpdateCareerRequest>,
) -> Result<Json<MutationResponse>> {
    state.require_admin(&headers)?;
    if let Some(error_msg) = req.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }

    let career = state.service.update_career(id, req).await?;
    Ok(Json(MutationResponse::new("Career updated", career.id)))
}

/// Handler for DELETE /careers/:id (admin)
pub async fn delete_career_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<MutationResponse>> {
    state.require_admin(&headers)?;

    state.service.delete_career(id).await?;
    Ok(Json(MutationResponse::new("Career deleted", id)))
}

// == Banner Handlers ==

/// Handler for GET /banners
pub async fn list_banners_handler(State(state): State<AppState>) -> Result<Json<Vec<Banner>>> {
    Ok(Json(state.service.banners().await?))
}

/// Handler for GET /banners/:id
pub async fn get_banner_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Banner>> {
    Ok(Json(state.service.banner(id).await?))
}

/// Handler for POST /banners (admin)
pub async fn create_banner_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreateBannerRequest>,
) -> Result<Json<MutationResponse>> {
    state.require_admin(&headers)?;
    if let Some(error_msg) = req.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }

    let banner = state.service.create_banner(req).await?;
    Ok(Json(MutationResponse::new("Banner created", banner.id)))
}

/// Handler for PUT /banners/:id (admin)
pub async fn update_banner_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Json(req): Json<UpdateBannerRequest>,
) -> Result<Json<MutationResponse>> {
    state.require_admin(&headers)?;
    if let Some(error_msg) = req.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }

    let banner = state.service.update_banner(id, req).await?;
    Ok(Json(MutationResponse::new("Banner updated", banner.id)))
}

/// Handler for DELETE /banners/:id (admin)
pub async fn delete_banner_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<MutationResponse>> {
    state.require_admin(&headers)?;

    state.service.delete_banner(id).await?;
    Ok(Json(MutationResponse::new("Banner deleted", id)))
}

// == Contact Handlers ==

/// Handler for POST /contact (public)
pub async fn submit_contact_handler(
    State(state): State<AppState>,
    Json(req): Json<ContactRequest>,
) -> Result<Json<MutationResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }

    let submission = state.service.submit_contact(req).await?;
    Ok(Json(MutationResponse::new(
        "Submission received",
        submission.id,
    )))
}

/// Handler for GET /contact (admin)
pub async fn list_submissions_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<ContactSubmission>>> {
    state.require_admin(&headers)?;
    Ok(Json(state.service.submissions().await?))
}

/// Handler for PUT /contact/:id/read (admin)
pub async fn mark_submission_read_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<MutationResponse>> {
    state.require_admin(&headers)?;

    state.service.mark_submission_read(id).await?;
    Ok(Json(MutationResponse::new("Submission marked read", id)))
}

/// Handler for DELETE /contact/:id (admin)
pub async fn delete_submission_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<MutationResponse>> {
    state.require_admin(&headers)?;

    state.service.delete_submission(id).await?;
    Ok(Json(MutationResponse::new("Submission deleted", id)))
}
