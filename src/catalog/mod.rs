pub mod fixtures;
pub mod traits;

pub use fixtures::{BundledFixtures, DirectoryFixtures};
pub use traits::DataSource;

use crate::error::Result;
use crate::models::{BlogPost, Property, Testimonial};
use tracing::info;

/// Everything the site shows, loaded once at startup
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub properties: Vec<Property>,
    pub blog_posts: Vec<BlogPost>,
    pub testimonials: Vec<Testimonial>,
}

impl Catalog {
    pub async fn load(source: &dyn DataSource) -> Result<Self> {
        let properties = source.load_properties().await?;
        let blog_posts = source.load_blog_posts().await?;
        let testimonials = source.load_testimonials().await?;

        info!(
            "Loaded {} properties, {} posts, {} testimonials from {} fixtures",
            properties.len(),
            blog_posts.len(),
            testimonials.len(),
            source.source_name()
        );

        Ok(Self {
            properties,
            blog_posts,
            testimonials,
        })
    }

    /// Properties carrying the "featured" badge, in fixture order
    pub fn featured_properties(&self, limit: usize) -> Vec<&Property> {
        self.properties
            .iter()
            .filter(|p| p.is_featured())
            .take(limit)
            .collect()
    }

    pub fn latest_posts(&self, limit: usize) -> &[BlogPost] {
        &self.blog_posts[..limit.min(self.blog_posts.len())]
    }

    /// Highest fixture price rounded up to the next million
    pub fn price_ceiling(&self) -> u64 {
        let max = self.properties.iter().map(|p| p.price).max().unwrap_or(0);
        max.div_ceil(1_000_000).saturating_mul(1_000_000)
    }
}
