//! Content Service Module
//!
//! Data-access functions tying the content backend and the cache
//! together. Reads of cacheable content go through
//! [`CacheManager::get_or_fetch`]; mutations write to the backend and
//! then invalidate the affected keys. Invalidation is a cooperative
//! contract: nothing happens automatically.
//!
//! [`CacheManager::get_or_fetch`]: crate::cache::CacheManager::get_or_fetch

use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use crate::cache::CacheManager;
use crate::content::backend::ContentBackend;
use crate::content::model::{Banner, BlogPost, CachedContent, CareerOpening, ContactSubmission};
use crate::error::{AppError, Result};
use crate::models::{
    ContactRequest, CreateBannerRequest, CreateBlogRequest, CreateCareerRequest,
    UpdateBannerRequest, UpdateBlogRequest, UpdateCareerRequest,
};

// == Cache TTLs ==
/// Per-class TTLs. Rarely-changing content gets longer TTLs; the cache
/// itself is agnostic to what these values mean.
pub mod ttl {
    use std::time::Duration;

    /// Blogs rarely change
    pub const BLOGS: Duration = Duration::from_secs(10 * 60);
    /// Careers rarely change
    pub const CAREERS: Duration = Duration::from_secs(15 * 60);
    /// Banners might change more often
    pub const BANNERS: Duration = Duration::from_secs(5 * 60);
}

// == Cache Keys ==
/// Key naming convention: `"<entityType>:<scope>"`.
pub mod keys {
    use uuid::Uuid;

    pub const BLOGS_ALL: &str = "blogs:all";
    pub const CAREERS_ALL: &str = "careers:all";
    pub const BANNERS_ALL: &str = "banners:all";

    pub fn blog(id: Uuid) -> String {
        format!("blog:{id}")
    }

    pub fn career(id: Uuid) -> String {
        format!("career:{id}")
    }

    pub fn banner(id: Uuid) -> String {
        format!("banner:{id}")
    }
}

// == Content Service ==
/// Cached access to the content backend.
#[derive(Clone)]
pub struct ContentService {
    backend: Arc<dyn ContentBackend>,
    cache: CacheManager<CachedContent>,
}

impl ContentService {
    // == Constructor ==
    /// Creates a service over the given backend with an empty cache.
    pub fn new(backend: Arc<dyn ContentBackend>) -> Self {
        Self {
            backend,
            cache: CacheManager::new(),
        }
    }

    /// The cache manager shared by this service, for stats, manual
    /// invalidation, and the background cleanup task.
    pub fn cache(&self) -> &CacheManager<CachedContent> {
        &self.cache
    }

    async fn cached<F>(&self, key: &str, ttl: Duration, fetch: F) -> Result<CachedContent>
    where
        F: std::future::Future<Output = Result<CachedContent>> + Send + 'static,
    {
        self.cache.get_or_fetch(key, ttl, move || fetch).await
    }

    fn payload_mismatch(key: &str) -> AppError {
        AppError::Internal(format!("unexpected cache payload for '{key}'"))
    }

    // == Blogs ==
    /// Published blog posts, newest first.
    pub async fn blogs(&self) -> Result<Vec<BlogPost>> {
        let backend = Arc::clone(&self.backend);
        let cached = self
            .cached(keys::BLOGS_ALL, ttl::BLOGS, async move {
                backend.list_blogs().await.map(CachedContent::Blogs)
            })
            .await?;
        match cached {
            CachedContent::Blogs(blogs) => Ok(blogs),
            _ => Err(Self::payload_mismatch(keys::BLOGS_ALL)),
        }
    }

    /// A single blog post by id.
    pub async fn blog(&self, id: Uuid) -> Result<BlogPost> {
        let key = keys::blog(id);
        let backend = Arc::clone(&self.backend);
        let cached = self
            .cached(&key, ttl::BLOGS, async move {
                backend.get_blog(id).await.map(CachedContent::Blog)
            })
            .await?;
        match cached {
            CachedContent::Blog(blog) => Ok(blog),
            _ => Err(Self::payload_mismatch(&key)),
        }
    }

    /// Creates a blog post and invalidates the blog listing.
    pub async fn create_blog(&self, req: CreateBlogRequest) -> Result<BlogPost> {
        let blog = self.backend.insert_blog(req).await?;
        self.cache.invalidate(keys::BLOGS_ALL);
        Ok(blog)
    }

    /// Updates a blog post and invalidates its listing and detail keys.
    pub async fn update_blog(&self, id: Uuid, req: UpdateBlogRequest) -> Result<BlogPost> {
        let blog = self.backend.update_blog(id, req).await?;
        self.cache.invalidate(keys::BLOGS_ALL);
        self.cache.invalidate(&keys::blog(id));
        Ok(blog)
    }

    /// Deletes a blog post and invalidates its listing and detail keys.
    pub async fn delete_blog(&self, id: Uuid) -> Result<()> {
        self.backend.delete_blog(id).await?;
        self.cache.invalidate(keys::BLOGS_ALL);
        self.cache.invalidate(&keys::blog(id));
        Ok(())
    }

    // == Careers ==
    /// Career openings, newest first.
    pub async fn careers(&self) -> Result<Vec<CareerOpening>> {
        let backend = Arc::clone(&self.backend);
        let cached = self
            .cached(keys::CAREERS_ALL, ttl::CAREERS, async move {
                backend.list_careers().await.map(CachedContent::Careers)
            })
            .await?;
        match cached {
            CachedContent::Careers(careers) => Ok(careers),
            _ => Err(Self::payload_mismatch(keys::CAREERS_ALL)),
        }
    }

    /// A single career opening by id.
    pub async fn career(&self, id: Uuid) -> Result<CareerOpening> {
        let key = keys::career(id);
        let backend = Arc::clone(&self.backend);
        let cached = self
            .cached(&key, ttl::CAREERS, async move {
                backend.get_career(id).await.map(CachedContent::Career)
            })
            .await?;
        match cached {
            CachedContent::Career(career) => Ok(career),
            _ => Err(Self::payload_mismatch(&key)),
        }
    }

    /// Creates a career opening and invalidates the careers listing.
    pub async fn create_career(&self, req: CreateCareerRequest) -> Result<CareerOpening> {
        let career = self.backend.insert_career(req).await?;
        self.cache.invalidate(keys::CAREERS_ALL);
        Ok(career)
    }

    /// Updates a career opening and invalidates its listing and detail keys.
    pub async fn update_career(
        &self,
        id: Uuid,
        req: UpdateCareerRequest,
    ) -> Result<CareerOpening> {
        let career = self.backend.update_career(id, req).await?;
        self.cache.invalidate(keys::CAREERS_ALL);
        self.cache.invalidate(&keys::career(id));
        Ok(career)
    }

    /// Deletes a career opening and invalidates its listing and detail keys.
    pub async fn delete_career(&self, id: Uuid) -> Result<()> {
        self.backend.delete_career(id).await?;
        self.cache.invalidate(keys::CAREERS_ALL);
        self.cache.invalidate(&keys::career(id));
        Ok(())
    }

    // == Banners ==
    /// Active banners, by display order.
    pub async fn banners(&self) -> Result<Vec<Banner>> {
        let backend = Arc::clone(&self.backend);
        let cached = self
            .cached(keys::BANNERS_ALL, ttl::BANNERS, async move {
                backend.list_banners().await.map(CachedContent::Banners)
            })
            .await?;
        match cached {
            CachedContent::Banners(banners) => Ok(banners),
            _ => Err(Self::payload_mismatch(keys::BANNERS_ALL)),
        }
    }

    /// A single banner by id.
    pub async fn banner(&self, id: Uuid) -> Result<Banner> {
        let key = keys::banner(id);
        let backend = Arc::clone(&self.backend);
        let cached = self
            .cached(&key, ttl::BANNERS, async move {
                backend.get_banner(id).await.map(CachedContent::Banner)
            })
            .await?;
        match cached {
            CachedContent::Banner(banner) => Ok(banner),
            _ => Err(Self::payload_mismatch(&key)),
        }
    }

    /// Creates a banner and invalidates the banner listing.
    pub async fn create_banner(&self, req: CreateBannerRequest) -> Result<Banner> {
        let banner = self.backend.insert_banner(req).await?;
        self.cache.invalidate(keys::BANNERS_ALL);
        Ok(banner)
    }

    /// Updates a banner and invalidates its listing and detail keys.
    pub async fn update_banner(&self, id: Uuid, req: UpdateBannerRequest) -> Result<Banner> {
        let banner = self.backend.update_banner(id, req).await?;
        self.cache.invalidate(keys::BANNERS_ALL);
        self.cache.invalidate(&keys::banner(id));
        Ok(banner)
    }

    /// Deletes a banner and invalidates its listing and detail keys.
    pub async fn delete_banner(&self, id: Uuid) -> Result<()> {
        self.backend.delete_banner(id).await?;
        self.cache.invalidate(keys::BANNERS_ALL);
        self.cache.invalidate(&keys::banner(id));
        Ok(())
    }

    // == Contact Submissions ==
    // Submissions bypass the cache entirely.

    /// Records a contact-form submission.
    pub async fn submit_contact(&self, req: ContactRequest) -> Result<ContactSubmission> {
        self.backend.insert_submission(req).await
    }

    /// All submissions, newest first.
    pub async fn submissions(&self) -> Result<Vec<ContactSubmission>> {
        self.backend.list_submissions().await
    }

    /// Marks a submission as read.
    pub async fn mark_submission_read(&self, id: Uuid) -> Result<()> {
        self.backend.mark_submission_read(id).await
    }

    /// Deletes a submission.
    pub async fn delete_submission(&self, id: Uuid) -> Result<()> {
        self.backend.delete_submission(id).await
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::backend::InMemoryBackend;

    fn service() -> ContentService {
        ContentService::new(Arc::new(InMemoryBackend::new()))
    }

    fn blog_request(title: &str) -> CreateBlogRequest {
        CreateBlogRequest {
            title: title.to_string(),
            slug: title.to_lowercase(),
            excerpt: String::new(),
            content: "body".to_string(),
            category: "Strategy".to_string(),
            author: "Jordan".to_string(),
            published: true,
            cover_image: String::new(),
        }
    }

    #[tokio::test]
    async fn test_blogs_listing_is_cached() {
        let service = service();
        service.create_blog(blog_request("One")).await.unwrap();

        service.blogs().await.unwrap();
        assert!(service.cache().get(keys::BLOGS_ALL).is_some());

        // Second read is served from cache
        let hits_before = service.cache().stats().hits;
        service.blogs().await.unwrap();
        assert_eq!(service.cache().stats().hits, hits_before + 1);
    }

    #[tokio::test]
    async fn test_create_blog_invalidates_listing() {
        let service = service();
        service.create_blog(blog_request("One")).await.unwrap();
        service.blogs().await.unwrap();
        assert!(service.cache().get(keys::BLOGS_ALL).is_some());

        service.create_blog(blog_request("Two")).await.unwrap();
        assert!(service.cache().get(keys::BLOGS_ALL).is_none());

        // Next read sees the new post
        let blogs = service.blogs().await.unwrap();
        assert_eq!(blogs.len(), 2);
    }

    #[tokio::test]
    async fn test_update_blog_invalidates_detail_and_listing() {
        let service = service();
        let blog = service.create_blog(blog_request("One")).await.unwrap();

        service.blog(blog.id).await.unwrap();
        service.blogs().await.unwrap();
        assert!(service.cache().get(&keys::blog(blog.id)).is_some());

        service
            .update_blog(
                blog.id,
                UpdateBlogRequest {
                    title: Some("Revised".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(service.cache().get(&keys::blog(blog.id)).is_none());
        assert!(service.cache().get(keys::BLOGS_ALL).is_none());
        assert_eq!(service.blog(blog.id).await.unwrap().title, "Revised");
    }

    #[tokio::test]
    async fn test_delete_banner_invalidates_both_keys() {
        let service = service();
        let banner = service
            .create_banner(CreateBannerRequest {
                title: "Sale".to_string(),
                description: None,
                image_url: None,
                link_url: None,
                display_order: 0,
                is_active: true,
            })
            .await
            .unwrap();

        service.banners().await.unwrap();
        service.banner(banner.id).await.unwrap();

        service.delete_banner(banner.id).await.unwrap();

        assert!(service.cache().get(keys::BANNERS_ALL).is_none());
        assert!(service.cache().get(&keys::banner(banner.id)).is_none());
    }

    #[tokio::test]
    async fn test_missing_blog_is_not_negatively_cached() {
        let service = service();
        let id = Uuid::new_v4();

        let missing = service.blog(id).await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));
        assert!(service.cache().get(&keys::blog(id)).is_none());
    }

    #[tokio::test]
    async fn test_submissions_bypass_cache() {
        let service = service();
        service
            .submit_contact(ContactRequest {
                name: "N".to_string(),
                email: "n@example.com".to_string(),
                phone: String::new(),
                subject: "s".to_string(),
                message: "m".to_string(),
            })
            .await
            .unwrap();

        service.submissions().await.unwrap();
        assert_eq!(service.cache().stats().entries, 0);
    }
}
