use crate::error::Result;
use crate::models::{BlogPost, Property, Testimonial};
use async_trait::async_trait;

/// Common trait for fixture data sources.
/// A real listings backend can slot in here later without touching the stores.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Load every property listing
    async fn load_properties(&self) -> Result<Vec<Property>>;

    /// Load blog article teasers, newest first
    async fn load_blog_posts(&self) -> Result<Vec<BlogPost>>;

    /// Load client testimonials
    async fn load_testimonials(&self) -> Result<Vec<Testimonial>>;

    /// Get the name of the data source
    fn source_name(&self) -> &'static str;
}
