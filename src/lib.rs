// Re-export modules
pub mod analysis;
pub mod collector;
pub mod config;
pub mod crawlers;
pub mod error;
pub mod filter;
pub mod lexicon;
pub mod parsers;
pub mod results;
pub mod store;

// Re-export commonly used types for convenience
pub use analysis::{PersonaProfile, PersonaSynthesizer, TextAnalyzer};
pub use collector::{CollectionSummary, Collector, SocialSource};
pub use config::PersonaConfig;
pub use error::{CollectError, ConfigError, CrawlError, FetchError, StoreError};
pub use results::{ContentItem, Page, TweetRecord};
pub use store::{ContentStore, MemoryStore};

use crawlers::{Fetcher, HttpFetcher};
use std::sync::Arc;

/// Main builder for a collector pointed at one seed URL
pub struct Footprint {
    seed: String,
    config: PersonaConfig,
    blog_mode: Option<bool>,
}

impl Footprint {
    /// Create a new builder for `seed` with the default configuration
    pub fn new(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            config: PersonaConfig::default(),
            blog_mode: None,
        }
    }

    pub fn with_config(mut self, config: PersonaConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a file
    pub fn with_config_file(self, path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let config = PersonaConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Load configuration from a string
    pub fn with_config_str(self, config_str: &str) -> Result<Self, ConfigError> {
        let config = PersonaConfig::from_json(config_str)?;
        Ok(self.with_config(config))
    }

    /// Set the page cap for a plain site crawl. Blog crawls use
    /// [`Footprint::with_max_posts`].
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.config.crawl.max_pages = max_pages;
        self
    }

    /// Set the post cap for a blog crawl
    pub fn with_max_posts(mut self, max_posts: usize) -> Self {
        self.config.crawl.max_posts = max_posts;
        self
    }

    /// Cap a plain crawl and a blog crawl alike
    pub fn with_page_limit(self, limit: usize) -> Self {
        self.with_max_pages(limit).with_max_posts(limit)
    }

    /// Force blog mode on or off; left unset it is guessed from the seed
    pub fn with_blog_mode(mut self, blog_mode: bool) -> Self {
        self.blog_mode = Some(blog_mode);
        self
    }

    pub fn with_politeness_delay_ms(mut self, delay_ms: u64) -> Self {
        self.config.crawl.politeness_delay_ms = delay_ms;
        self
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn config(&self) -> &PersonaConfig {
        &self.config
    }

    /// Build a collector that fetches over HTTP
    pub fn build(self, store: Arc<dyn ContentStore>) -> Result<Collector, CollectError> {
        let fetcher = HttpFetcher::new(&self.config.request)?;
        self.build_with_fetcher(Arc::new(fetcher), store)
    }

    /// Build a collector around any fetcher, crawling the seed
    pub fn build_with_fetcher(
        self,
        fetcher: Arc<dyn Fetcher>,
        store: Arc<dyn ContentStore>,
    ) -> Result<Collector, CollectError> {
        Ok(Collector::new(self.config, fetcher, store)?
            .with_seed(self.seed)
            .with_blog_mode(self.blog_mode))
    }
}
