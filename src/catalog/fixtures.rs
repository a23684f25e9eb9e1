use crate::catalog::traits::DataSource;
use crate::error::{HomefinderError, Result};
use crate::models::{BlogPost, Property, Testimonial};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use tracing::debug;

pub const PROPERTIES_FILE: &str = "properties.json";
pub const BLOGS_FILE: &str = "blogs.json";
pub const TESTIMONIALS_FILE: &str = "testimonials.json";

const BUNDLED_PROPERTIES: &str = include_str!("../../data/properties.json");
const BUNDLED_BLOGS: &str = include_str!("../../data/blogs.json");
const BUNDLED_TESTIMONIALS: &str = include_str!("../../data/testimonials.json");

fn parse<T: DeserializeOwned>(name: &str, json: &str) -> Result<Vec<T>> {
    serde_json::from_str(json).map_err(|source| HomefinderError::FixtureParse {
        name: name.to_string(),
        source,
    })
}

/// Fixtures compiled into the binary
#[derive(Debug, Default, Clone, Copy)]
pub struct BundledFixtures;

#[async_trait]
impl DataSource for BundledFixtures {
    async fn load_properties(&self) -> Result<Vec<Property>> {
        parse(PROPERTIES_FILE, BUNDLED_PROPERTIES)
    }

    async fn load_blog_posts(&self) -> Result<Vec<BlogPost>> {
        parse(BLOGS_FILE, BUNDLED_BLOGS)
    }

    async fn load_testimonials(&self) -> Result<Vec<Testimonial>> {
        parse(TESTIMONIALS_FILE, BUNDLED_TESTIMONIALS)
    }

    fn source_name(&self) -> &'static str {
        "bundled"
    }
}

/// Fixtures read from a directory holding the three JSON files
#[derive(Debug, Clone)]
pub struct DirectoryFixtures {
    root: PathBuf,
}

impl DirectoryFixtures {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    async fn read<T: DeserializeOwned>(&self, name: &str) -> Result<Vec<T>> {
        let path = self.root.join(name);
        debug!("Reading fixture {}", path.display());
        let json = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| HomefinderError::FixtureIo {
                path: path.display().to_string(),
                source,
            })?;
        parse(name, &json)
    }
}

#[async_trait]
impl DataSource for DirectoryFixtures {
    async fn load_properties(&self) -> Result<Vec<Property>> {
        self.read(PROPERTIES_FILE).await
    }

    async fn load_blog_posts(&self) -> Result<Vec<BlogPost>> {
        self.read(BLOGS_FILE).await
    }

    async fn load_testimonials(&self) -> Result<Vec<Testimonial>> {
        self.read(TESTIMONIALS_FILE).await
    }

    fn source_name(&self) -> &'static str {
        "directory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bundled_fixtures_parse() {
        let source = BundledFixtures;
        let properties = source.load_properties().await.unwrap();
        assert!(!properties.is_empty());
        assert!(!source.load_blog_posts().await.unwrap().is_empty());
        assert!(!source.load_testimonials().await.unwrap().is_empty());

        let mut ids: Vec<_> = properties.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), properties.len(), "property ids must be unique");
    }

    #[tokio::test]
    async fn directory_fixtures_report_missing_and_malformed_files() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirectoryFixtures::new(dir.path());

        let err = source.load_properties().await.unwrap_err();
        assert!(matches!(err, HomefinderError::FixtureIo { .. }));

        std::fs::write(dir.path().join(BLOGS_FILE), "{not json").unwrap();
        let err = source.load_blog_posts().await.unwrap_err();
        assert!(matches!(err, HomefinderError::FixtureParse { .. }));

        std::fs::write(dir.path().join(TESTIMONIALS_FILE), BUNDLED_TESTIMONIALS).unwrap();
        assert_eq!(source.load_testimonials().await.unwrap().len(), 3);
    }
}
