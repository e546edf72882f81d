use crate::analysis::{PersonaProfile, PersonaSynthesizer, TextAnalyzer};
use crate::config::PersonaConfig;
use crate::crawlers::{Fetcher, WebCrawler};
use crate::error::CollectError;
use crate::results::{Page, TweetRecord};
use crate::store::ContentStore;
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

/// Social API collaborator
#[async_trait]
pub trait SocialSource: Send + Sync {
    async fn get_user_tweets(
        &self,
        handle: &str,
        count: usize,
        days_back: u32,
    ) -> Result<Vec<TweetRecord>, CollectError>;
}

/// Whether a URL points at a blog rather than a general site
pub fn is_blog_url(url: &str) -> bool {
    url.contains("/blog/") || url.contains("blog.")
}

/// Outcome of [`Collector::collect_all_data`]
#[derive(Debug, Clone, Default)]
pub struct CollectionSummary {
    /// Pages saved by this run
    pub pages_saved: usize,
    /// Valid posts pulled from the social source
    pub tweets: Vec<TweetRecord>,
    /// Stored pages for the owner plus the posts above
    pub total_items: usize,
}

/// Ties the crawler, the store and the synthesizer together for one owner
pub struct Collector {
    config: PersonaConfig,
    crawler: WebCrawler,
    synthesizer: PersonaSynthesizer,
    store: Arc<dyn ContentStore>,
    seed: Option<String>,
    blog_mode: Option<bool>,
}

impl Collector {
    /// Validates the configuration before anything is crawled
    pub fn new(
        config: PersonaConfig,
        fetcher: Arc<dyn Fetcher>,
        store: Arc<dyn ContentStore>,
    ) -> Result<Self, CollectError> {
        config.validate()?;

        let crawler = WebCrawler::new(fetcher, &config);
        let synthesizer = PersonaSynthesizer::new(
            TextAnalyzer::new(config.lexicons.clone()),
            config.analysis.clone(),
        );

        Ok(Self {
            config,
            crawler,
            synthesizer,
            store,
            seed: None,
            blog_mode: None,
        })
    }

    /// Website crawled by [`Collector::collect_all_data`]
    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    pub fn seed(&self) -> Option<&str> {
        self.seed.as_deref()
    }

    /// Force blog mode on or off instead of guessing from the URL
    pub fn with_blog_mode(mut self, blog_mode: Option<bool>) -> Self {
        self.blog_mode = blog_mode;
        self
    }

    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.crawler = self.crawler.with_cancel_flag(flag);
        self
    }

    pub fn config(&self) -> &PersonaConfig {
        &self.config
    }

    pub fn synthesizer(&self) -> &PersonaSynthesizer {
        &self.synthesizer
    }

    /// Crawl `url` as a blog or as a plain site
    pub async fn fetch_pages(&self, url: &str) -> Result<Vec<Page>, CollectError> {
        let blog = self.blog_mode.unwrap_or_else(|| is_blog_url(url));
        let pages = if blog {
            self.crawler
                .get_blog_posts(url, self.config.crawl.max_posts)
                .await?
        } else {
            self.crawler
                .crawl_website(url, self.config.crawl.max_pages)
                .await?
        };
        Ok(pages)
    }

    /// Crawl `url` and save every page for `owner_id`; returns the page count
    pub async fn collect_web_content(&self, url: &str, owner_id: &str) -> Result<usize, CollectError> {
        ::log::info!("Collecting web content from {} for {}", url, owner_id);

        let pages = self.fetch_pages(url).await?;
        if pages.is_empty() {
            ::log::warn!("No content found at {}", url);
            return Ok(0);
        }

        for page in &pages {
            self.store.save_page(page, owner_id)?;
        }

        ::log::info!("Collected {} pages from {}", pages.len(), url);
        Ok(pages.len())
    }

    /// Pull recent posts, dropping records that fail ingestion checks
    pub async fn collect_tweets(
        &self,
        source: &dyn SocialSource,
        handle: &str,
        count: usize,
        days_back: u32,
    ) -> Result<Vec<TweetRecord>, CollectError> {
        let tweets = source.get_user_tweets(handle, count, days_back).await?;
        let total = tweets.len();
        let valid: Vec<TweetRecord> = tweets.into_iter().filter(|t| t.is_valid()).collect();

        if valid.len() < total {
            ::log::debug!("Dropped {} invalid posts for {}", total - valid.len(), handle);
        }
        ::log::info!("Collected {} posts for {}", valid.len(), handle);
        Ok(valid)
    }

    /// Crawl the seed website and pull posts for `handle`, whichever are set
    pub async fn collect_all_data(
        &self,
        owner_id: &str,
        social: Option<(&dyn SocialSource, &str)>,
    ) -> Result<CollectionSummary, CollectError> {
        let mut summary = CollectionSummary::default();

        if let Some((source, handle)) = social {
            summary.tweets = self
                .collect_tweets(
                    source,
                    handle,
                    self.config.crawl.max_tweets,
                    self.config.crawl.max_content_age_days,
                )
                .await?;
        }

        if let Some(seed) = &self.seed {
            summary.pages_saved = self.collect_web_content(seed, owner_id).await?;
        }

        summary.total_items = self.store.get_pages(owner_id)?.len() + summary.tweets.len();
        Ok(summary)
    }

    /// Synthesize a profile from the owner's stored pages plus `tweets`
    /// and save it, replacing any previous one
    pub fn build_persona(
        &self,
        owner_id: &str,
        tweets: &[TweetRecord],
    ) -> Result<PersonaProfile, CollectError> {
        let pages = self.store.get_pages(owner_id)?;

        let texts: Vec<&str> = pages
            .iter()
            .map(|p| p.content.as_str())
            .chain(tweets.iter().map(|t| t.text.as_str()))
            .collect();

        let profile = self.synthesizer.synthesize(&texts);
        self.store.save_profile(&profile, owner_id)?;
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::SentimentLabel;
    use crate::crawlers::FetchResponse;
    use crate::error::{ConfigError, FetchError};
    use crate::store::MemoryStore;
    use std::collections::HashMap;

    struct SiteFetcher(HashMap<&'static str, &'static str>);

    #[async_trait]
    impl Fetcher for SiteFetcher {
        async fn get(&self, url: &str) -> Result<FetchResponse, FetchError> {
            match self.0.get(url) {
                Some(body) => Ok(FetchResponse {
                    status: 200,
                    body: body.to_string(),
                    content_type: Some("text/html".into()),
                    final_url: None,
                }),
                None => Err(FetchError::Status(404)),
            }
        }
    }

    struct FixedSource(Vec<TweetRecord>);

    #[async_trait]
    impl SocialSource for FixedSource {
        async fn get_user_tweets(
            &self,
            _handle: &str,
            count: usize,
            _days_back: u32,
        ) -> Result<Vec<TweetRecord>, CollectError> {
            Ok(self.0.iter().take(count).cloned().collect())
        }
    }

    fn tweet(id: &str, text: &str) -> TweetRecord {
        TweetRecord {
            id: id.into(),
            text: text.into(),
            created_at: "2024-01-01".into(),
            retweet_count: 0,
            favorite_count: 0,
            hashtags: vec![],
            urls: vec![],
            mentions: vec![],
            is_retweet: false,
            is_reply: false,
        }
    }

    fn site() -> Arc<SiteFetcher> {
        Arc::new(SiteFetcher(HashMap::from([
            (
                "https://example.com/",
                r#"<html><body><main>I love research. <a href="/blog/one">one</a></main></body></html>"#,
            ),
            (
                "https://example.com/blog/one",
                "<html><body><article>Great machine learning notes.</article></body></html>",
            ),
        ])))
    }

    fn config() -> PersonaConfig {
        let mut config = PersonaConfig::default();
        config.crawl.politeness_delay_ms = 0;
        config.request.retry_count = 0;
        config
    }

    #[test]
    fn test_is_blog_url() {
        assert!(is_blog_url("https://example.com/blog/"));
        assert!(is_blog_url("https://blog.example.com"));
        assert!(!is_blog_url("https://example.com/about"));
    }

    #[test]
    fn test_invalid_config_fails_before_crawl() {
        let mut config = config();
        config.lexicons.taxonomy.clear();
        let store: Arc<MemoryStore> = Arc::new(MemoryStore::new());
        let result = Collector::new(config, site(), store);
        assert!(matches!(
            result,
            Err(CollectError::Config(ConfigError::Invalid(_)))
        ));
    }

    #[tokio::test]
    async fn test_collect_then_build_persona() {
        let store = Arc::new(MemoryStore::new());
        let collector = Collector::new(config(), site(), store.clone()).unwrap();

        let saved = collector
            .collect_web_content("https://example.com/", "owner-1")
            .await
            .unwrap();
        assert_eq!(saved, 2);

        let profile = collector.build_persona("owner-1", &[]).unwrap();
        assert_eq!(profile.content_items, 2);
        assert_eq!(profile.sentiment.label, SentimentLabel::Positive);
        assert_eq!(store.profile("owner-1").unwrap(), Some(profile));
    }

    #[tokio::test]
    async fn test_blog_mode_override() {
        let store = Arc::new(MemoryStore::new());
        let collector = Collector::new(config(), site(), store)
            .unwrap()
            .with_blog_mode(Some(true));

        let pages = collector.fetch_pages("https://example.com/").await.unwrap();
        let urls: Vec<&str> = pages.iter().map(|p| p.url.as_str()).collect();
        assert_eq!(urls, vec!["https://example.com/blog/one"]);
    }

    #[tokio::test]
    async fn test_unreachable_site_saves_nothing() {
        let store = Arc::new(MemoryStore::new());
        let collector = Collector::new(config(), site(), store.clone()).unwrap();

        let saved = collector
            .collect_web_content("https://example.com/missing", "owner-2")
            .await
            .unwrap();
        assert_eq!(saved, 0);
        assert!(store.get_pages("owner-2").unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_collect_all_data_uses_seed_and_source() {
        let store = Arc::new(MemoryStore::new());
        let collector = Collector::new(config(), site(), store)
            .unwrap()
            .with_seed("https://example.com/");
        let source = FixedSource(vec![tweet("1", "Shipping today"), tweet("2", "")]);
        let social: (&dyn SocialSource, &str) = (&source, "someone");

        let summary = collector
            .collect_all_data("owner-3", Some(social))
            .await
            .unwrap();
        assert_eq!(summary.pages_saved, 2);
        assert_eq!(summary.tweets.len(), 1);
        assert_eq!(summary.total_items, 3);

        let profile = collector.build_persona("owner-3", &summary.tweets).unwrap();
        assert_eq!(profile.content_items, 3);
    }

    #[tokio::test]
    async fn test_collect_all_data_without_sources_is_empty() {
        let store = Arc::new(MemoryStore::new());
        let collector = Collector::new(config(), site(), store).unwrap();
        assert_eq!(collector.seed(), None);

        let summary = collector.collect_all_data("owner-4", None).await.unwrap();
        assert_eq!(summary.pages_saved, 0);
        assert_eq!(summary.total_items, 0);
    }

    #[tokio::test]
    async fn test_tweets_are_validated_and_analyzed() {
        let store = Arc::new(MemoryStore::new());
        let collector = Collector::new(config(), site(), store).unwrap();
        let source = FixedSource(vec![
            tweet("1", "Terrible awful day"),
            tweet("2", "   "),
            tweet("", "no id"),
        ]);

        let tweets = collector
            .collect_tweets(&source, "someone", 10, 30)
            .await
            .unwrap();
        assert_eq!(tweets.len(), 1);

        let profile = collector.build_persona("nobody", &tweets).unwrap();
        assert_eq!(profile.content_items, 1);
        assert_eq!(profile.sentiment.label, SentimentLabel::Negative);
    }
}
