use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigError;
use crate::queue::CrawlStrategy;

/// Snapshot of the crawl configuration a frontier is built from.
///
/// ```toml
/// seeds = ["https://example.com", "https://example.org/docs"]
/// filter_duplicate_requests = true
/// filter_offsite_requests = true
/// crawl_strategy = "breadth_first"
/// max_crawl_depth = 3
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontierConfig {
    pub seeds: Vec<Url>,
    pub filter_duplicate_requests: bool,
    pub filter_offsite_requests: bool,
    pub crawl_strategy: CrawlStrategy,
    /// `None` means no limit.
    pub max_crawl_depth: Option<u32>,
}

impl Default for FrontierConfig {
    fn default() -> Self {
        Self {
            seeds: Vec::new(),
            filter_duplicate_requests: true,
            filter_offsite_requests: false,
            crawl_strategy: CrawlStrategy::default(),
            max_crawl_depth: None,
        }
    }
}

impl FrontierConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    pub fn with_seed(mut self, seed: Url) -> Self {
        self.seeds.push(seed);
        self
    }

    pub fn with_seeds(mut self, seeds: impl IntoIterator<Item = Url>) -> Self {
        self.seeds.extend(seeds);
        self
    }

    pub fn filter_duplicate_requests(mut self, enabled: bool) -> Self {
        self.filter_duplicate_requests = enabled;
        self
    }

    pub fn filter_offsite_requests(mut self, enabled: bool) -> Self {
        self.filter_offsite_requests = enabled;
        self
    }

    pub fn crawl_strategy(mut self, strategy: CrawlStrategy) -> Self {
        self.crawl_strategy = strategy;
        self
    }

    pub fn max_crawl_depth(mut self, depth: Option<u32>) -> Self {
        self.max_crawl_depth = depth;
        self
    }
}
