use crate::catalog::{BundledFixtures, DataSource, DirectoryFixtures};
use crate::favorites::FileStorage;
use crate::pagination::DEFAULT_PER_PAGE;
use crate::store::StoreTiming;
use clap::Args;
use std::path::PathBuf;
use std::time::Duration;

/// Runtime settings shared by every command
#[derive(Debug, Clone, Args)]
pub struct AppConfig {
    /// Directory with properties.json, blogs.json and testimonials.json
    /// (bundled fixtures when unset)
    #[arg(long, env = "HOMEFINDER_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Where favorites are persisted
    #[arg(long, env = "HOMEFINDER_STORAGE_DIR", default_value = ".homefinder", global = true)]
    pub storage_dir: PathBuf,

    /// Quiet period before a filter change is applied
    #[arg(long, default_value_t = 500, global = true)]
    pub debounce_ms: u64,

    /// Simulated backend latency for listing queries
    #[arg(long, default_value_t = 600, global = true)]
    pub latency_ms: u64,

    /// Listing page size
    #[arg(long, default_value_t = DEFAULT_PER_PAGE, global = true)]
    pub per_page: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            storage_dir: PathBuf::from(".homefinder"),
            debounce_ms: 500,
            latency_ms: 600,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl AppConfig {
    pub fn store_timing(&self) -> StoreTiming {
        StoreTiming {
            debounce: Duration::from_millis(self.debounce_ms),
            latency: Duration::from_millis(self.latency_ms),
        }
    }

    pub fn data_source(&self) -> Box<dyn DataSource> {
        match &self.data_dir {
            Some(dir) => Box::new(DirectoryFixtures::new(dir)),
            None => Box::new(BundledFixtures),
        }
    }

    pub fn storage(&self) -> FileStorage {
        FileStorage::new(&self.storage_dir)
    }
}
