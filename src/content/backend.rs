//! Content Backend Module
//!
//! The narrow request/response interface to the hosted content store.
//! The store itself (persistence, row security) is an external
//! collaborator; this trait is the seam the rest of the server talks
//! through, and the in-memory implementation backs local runs and tests.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::content::model::{Banner, BlogPost, CareerOpening, ContactSubmission};
use crate::error::{AppError, Result};
use crate::models::{
    ContactRequest, CreateBannerRequest, CreateBlogRequest, CreateCareerRequest,
    UpdateBannerRequest, UpdateBlogRequest, UpdateCareerRequest,
};

// == Content Backend Trait ==
/// Operations against the backing content store.
///
/// `get_*` of a missing id is a `NotFound` error, never a silent null;
/// the cache layer relies on that to avoid caching absence.
#[async_trait]
pub trait ContentBackend: Send + Sync {
    // Blogs
    /// Published posts, newest first.
    async fn list_blogs(&self) -> Result<Vec<BlogPost>>;
    async fn get_blog(&self, id: Uuid) -> Result<BlogPost>;
    async fn insert_blog(&self, req: CreateBlogRequest) -> Result<BlogPost>;
    async fn update_blog(&self, id: Uuid, req: UpdateBlogRequest) -> Result<BlogPost>;
    async fn delete_blog(&self, id: Uuid) -> Result<()>;

    // Careers
    /// All openings, newest first.
    async fn list_careers(&self) -> Result<Vec<CareerOpening>>;
    async fn get_career(&self, id: Uuid) -> Result<CareerOpening>;
    async fn insert_career(&self, req: CreateCareerRequest) -> Result<CareerOpening>;
    async fn update_career(&self, id: Uuid, req: UpdateCareerRequest) -> Result<CareerOpening>;
    async fn delete_career(&self, id: Uuid) -> Result<()>;

    // Banners
    /// Active banners, by display order.
    async fn list_banners(&self) -> Result<Vec<Banner>>;
    async fn get_banner(&self, id: Uuid) -> Result<Banner>;
    async fn insert_banner(&self, req: CreateBannerRequest) -> Result<Banner>;
    async fn update_banner(&self, id: Uuid, req: UpdateBannerRequest) -> Result<Banner>;
    async fn delete_banner(&self, id: Uuid) -> Result<()>;

    // Contact submissions
    async fn insert_submission(&self, req: ContactRequest) -> Result<ContactSubmission>;
    /// All submissions, newest first.
    async fn list_submissions(&self) -> Result<Vec<ContactSubmission>>;
    async fn mark_submission_read(&self, id: Uuid) -> Result<()>;
    async fn delete_submission(&self, id: Uuid) -> Result<()>;
}

// == In-Memory Backend ==
/// In-memory `ContentBackend` implementation.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    blogs: RwLock<HashMap<Uuid, BlogPost>>,
    careers: RwLock<HashMap<Uuid, CareerOpening>>,
    banners: RwLock<HashMap<Uuid, Banner>>,
    submissions: RwLock<HashMap<Uuid, ContactSubmission>>,
}

impl InMemoryBackend {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContentBackend for InMemoryBackend {
    async fn list_blogs(&self) -> Result<Vec<BlogPost>> {
        let blogs = self.blogs.read().await;
        let mut published: Vec<BlogPost> =
            blogs.values().filter(|b| b.published).cloned().collect();
        published.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(published)
    }

    async fn get_blog(&self, id: Uuid) -> Result<BlogPost> {
        self.blogs
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("blog {id}")))
    }

    async fn insert_blog(&self, req: CreateBlogRequest) -> Result<BlogPost> {
        let now = Utc::now();
        let blog = BlogPost {
            id: Uuid::new_v4(),
            title: req.title,
            slug: req.slug,
            excerpt: req.excerpt,
            content: req.content,
            category: req.category,
            author: req.author,
            published: req.published,
            cover_image: req.cover_image,
            created_at: now,
            updated_at: now,
        };
        self.blogs.write().await.insert(blog.id, blog.clone());
        Ok(blog)
    }

    async fn update_blog(&self, id: Uuid, req: UpdateBlogRequest) -> Result<BlogPost> {
        let mut blogs = self.blogs.write().await;
        let blog = blogs
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("blog {id}")))?;

        if let Some(title) = req.title {
            blog.title = title;
        }
        if let Some(slug) = req.slug {
            blog.slug = slug;
        }
        if let Some(excerpt) = req.excerpt {
            blog.excerpt = excerpt;
        }
        if let Some(content) = req.content {
            blog.content = content;
        }
        if let Some(category) = req.category {
            blog.category = category;
        }
        if let Some(author) = req.author {
            blog.author = author;
        }
        if let Some(published) = req.published {
            blog.published = published;
        }
        if let Some(cover_image) = req.cover_image {
            blog.cover_image = cover_image;
        }
        blog.updated_at = Utc::now();
        Ok(blog.clone())
    }

    async fn delete_blog(&self, id: Uuid) -> Result<()> {
        self.blogs
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("blog {id}")))
    }

    async fn list_careers(&self) -> Result<Vec<CareerOpening>> {
        let careers = self.careers.read().await;
        let mut all: Vec<CareerOpening> = careers.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn get_career(&self, id: Uuid) -> Result<CareerOpening> {
        self.careers
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("career {id}")))
    }

    async fn insert_career(&self, req: CreateCareerRequest) -> Result<CareerOpening> {
        let now = Utc::now();
        let career = CareerOpening {
            id: Uuid::new_v4(),
            title: req.title,
            department: req.department,
            employment_type: req.employment_type,
            location: req.location,
            description: req.description,
            requirements: req.requirements,
            created_at: now,
            updated_at: now,
        };
        self.careers.write().await.insert(career.id, career.clone());
        Ok(career)
    }

    async fn update_career(&self, id: Uuid, req: UpdateCareerRequest) -> Result<CareerOpening> {
        let mut careers = self.careers.write().await;
        let career = careers
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("career {id}")))?;

        if let Some(title) = req.title {
            career.title = title;
        }
        if let Some(department) = req.department {
            career.department = department;
        }
        if let Some(employment_type) = req.employment_type {
            career.employment_type = employment_type;
        }
        if let Some(location) = req.location {
            career.location = location;
        }
        if let Some(description) = req.description {
            career.description = description;
        }
        if let Some(requirements) = req.requirements {
            career.requirements = requirements;
        }
        career.updated_at = Utc::now();
        Ok(career.clone())
    }

    async fn delete_career(&self, id: Uuid) -> Result<()> {
        self.careers
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("career {id}")))
    }

    async fn list_banners(&self) -> Result<Vec<Banner>> {
        let banners = self.banners.read().await;
        let mut active: Vec<Banner> =
            banners.values().filter(|b| b.is_active).cloned().collect();
        active.sort_by_key(|b| b.display_order);
        Ok(active)
    }

    async fn get_banner(&self, id: Uuid) -> Result<Banner> {
        self.banners
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("banner {id}")))
    }

    async fn insert_banner(&self, req: CreateBannerRequest) -> Result<Banner> {
        let now = Utc::now();
        let banner = Banner {
            id: Uuid::new_v4(),
            title: req.title,
            description: req.description,
            image_url: req.image_url,
            link_url: req.link_url,
            display_order: req.display_order,
            is_active: req.is_active,
            created_at: now,
            updated_at: now,
        };
        self.banners.write().await.insert(banner.id, banner.clone());
        Ok(banner)
    }

    async fn update_banner(&self, id: Uuid, req: UpdateBannerRequest) -> Result<Banner> {
        let mut banners = self.banners.write().await;
        let banner = banners
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("banner {id}")))?;

        if let Some(title) = req.title {
            banner.title = title;
        }
        if let Some(description) = req.description {
            banner.description = Some(description);
        }
        if let Some(image_url) = req.image_url {
            banner.image_url = Some(image_url);
        }
        if let Some(link_url) = req.link_url {
            banner.link_url = Some(link_url);
        }
        if let Some(display_order) = req.display_order {
            banner.display_order = display_order;
        }
        if let Some(is_active) = req.is_active {
            banner.is_active = is_active;
        }
        banner.updated_at = Utc::now();
        Ok(banner.clone())
    }

    async fn delete_banner(&self, id: Uuid) -> Result<()> {
        self.banners
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("banner {id}")))
    }

    async fn insert_submission(&self, req: ContactRequest) -> Result<ContactSubmission> {
        let submission = ContactSubmission {
            id: Uuid::new_v4(),
            name: req.name,
            email: req.email,
            phone: req.phone,
            subject: req.subject,
            message: req.message,
            is_read: false,
            created_at: Utc::now(),
        };
        self.submissions
            .write()
            .await
            .insert(submission.id, submission.clone());
        Ok(submission)
    }

    async fn list_submissions(&self) -> Result<Vec<ContactSubmission>> {
        let submissions = self.submissions.read().await;
        let mut all: Vec<ContactSubmission> = submissions.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn mark_submission_read(&self, id: Uuid) -> Result<()> {
        let mut submissions = self.submissions.write().await;
        let submission = submissions
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("submission {id}")))?;
        submission.is_read = true;
        Ok(())
    }

    async fn delete_submission(&self, id: Uuid) -> Result<()> {
        self.submissions
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("submission {id}")))
    }
}
