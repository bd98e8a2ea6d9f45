//! Request and Response models for the content API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{
    ContactRequest, CreateBannerRequest, CreateBlogRequest, CreateCareerRequest,
    UpdateBannerRequest, UpdateBlogRequest, UpdateCareerRequest,
};
pub use responses::{
    ClearResponse, ErrorResponse, HealthResponse, MutationResponse, StatsResponse,
};
