//! Content Models
//!
//! Entities managed by the content backend: blog posts, career openings,
//! promotional banners, and contact-form submissions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// == Blog Post ==
/// A blog post. Only published posts appear in public listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub author: String,
    pub published: bool,
    pub cover_image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// == Employment Type ==
/// Employment type of a career opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentType {
    #[serde(rename = "Full-time")]
    FullTime,
    Contract,
    Internship,
}

// == Career Opening ==
/// An open position listed on the careers page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerOpening {
    pub id: Uuid,
    pub title: String,
    pub department: String,
    #[serde(rename = "type")]
    pub employment_type: EmploymentType,
    pub location: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// == Banner ==
/// A promotional banner. Only active banners appear in public listings,
/// ordered by `display_order`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Banner {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// == Contact Submission ==
/// A contact-form submission. Never cached; reads always hit the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

// == Cached Content ==
/// Payload stored in the cache. One enum covers every cacheable entity
/// kind so list and detail keys share a single cache namespace (which is
/// what pattern invalidation operates over).
#[derive(Debug, Clone)]
pub enum CachedContent {
    Blogs(Vec<BlogPost>),
    Blog(BlogPost),
    Careers(Vec<CareerOpening>),
    Career(CareerOpening),
    Banners(Vec<Banner>),
    Banner(Banner),
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employment_type_serialization() {
        let json = serde_json::to_string(&EmploymentType::FullTime).unwrap();
        assert_eq!(json, r#""Full-time""#);

        let parsed: EmploymentType = serde_json::from_str(r#""Internship""#).unwrap();
        assert_eq!(parsed, EmploymentType::Internship);
    }

    #[test]
    fn test_career_type_field_name() {
        let career = CareerOpening {
            id: Uuid::new_v4(),
            title: "Consultant".to_string(),
            department: "Strategy".to_string(),
            employment_type: EmploymentType::Contract,
            location: "Remote".to_string(),
            description: "..".to_string(),
            requirements: vec!["MBA".to_string()],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&career).unwrap();
        assert_eq!(json["type"], "Contract");
    }
}
