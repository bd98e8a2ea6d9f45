//! Request DTOs for the content API
//!
//! Defines the structure of incoming HTTP request bodies. Update requests
//! carry only the fields being changed; `None` means "leave as is".

use serde::Deserialize;

use crate::content::EmploymentType;

// == Blog Requests ==
/// Request body for creating a blog post (POST /blogs)
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBlogRequest {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: String,
    pub content: String,
    #[serde(default)]
    pub category: String,
    pub author: String,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub cover_image: String,
}

impl CreateBlogRequest {
    /// Returns an error message if the request is invalid, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.title.trim().is_empty() {
            return Some("Title cannot be empty".to_string());
        }
        if self.slug.trim().is_empty() {
            return Some("Slug cannot be empty".to_string());
        }
        None
    }
}

/// Request body for updating a blog post (PUT /blogs/:id)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBlogRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub author: Option<String>,
    pub published: Option<bool>,
    pub cover_image: Option<String>,
}

impl UpdateBlogRequest {
    /// Returns an error message if the request is invalid, None if valid.
    /// Omitted fields are untouched, so only supplied fields are checked.
    pub fn validate(&self) -> Option<String> {
        if matches!(&self.title, Some(t) if t.trim().is_empty()) {
            return Some("Title cannot be empty".to_string());
        }
        if matches!(&self.slug, Some(s) if s.trim().is_empty()) {
            return Some("Slug cannot be empty".to_string());
        }
        None
    }
}

// == Career Requests ==
/// Request body for creating a career opening (POST /careers)
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCareerRequest {
    pub title: String,
    pub department: String,
    #[serde(rename = "type")]
    pub employment_type: EmploymentType,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
}

impl CreateCareerRequest {
    /// Returns an error message if the request is invalid, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.title.trim().is_empty() {
            return Some("Title cannot be empty".to_string());
        }
        None
    }
}

/// Request body for updating a career opening (PUT /careers/:id)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCareerRequest {
    pub title: Option<String>,
    pub department: Option<String>,
    #[serde(rename = "type")]
    pub employment_type: Option<EmploymentType>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<Vec<String>>,
}

impl UpdateCareerRequest {
    /// Returns an error message if the request is invalid, None if valid.
    pub fn validate(&self) -> Option<String> {
        if matches!(&self.title, Some(t) if t.trim().is_empty()) {
            return Some("Title cannot be empty".to_string());
        }
        None
    }
}

// == Banner Requests ==
/// Request body for creating a banner (POST /banners)
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBannerRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub link_url: Option<String>,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl CreateBannerRequest {
    /// Returns an error message if the request is invalid, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.title.trim().is_empty() {
            return Some("Title cannot be empty".to_string());
        }
        None
    }
}

/// Request body for updating a banner (PUT /banners/:id)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBannerRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

impl UpdateBannerRequest {
    /// Returns an error message if the request is invalid, None if valid.
    pub fn validate(&self) -> Option<String> {
        if matches!(&self.title, Some(t) if t.trim().is_empty()) {
            return Some("Title cannot be empty".to_string());
        }
        None
    }
}

// == Contact Request ==
/// Request body for a contact-form submission (POST /contact)
#[derive(Debug, Clone, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactRequest {
    /// Returns an error message if the request is invalid, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("Name cannot be empty".to_string());
        }
        if !self.email.contains('@') {
            return Some("Email is not valid".to_string());
        }
        if self.message.trim().is_empty() {
            return Some("Message cannot be empty".to_string());
        }
        None
    }
}
