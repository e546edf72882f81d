use crate::config::PersonaConfig;
use crate::crawlers::fetch::{Fetcher, RetryPolicy, fetch_with_retry};
use crate::error::CrawlError;
use crate::filter::{UrlFilter, normalize_url};
use crate::parsers::{Parser, ParserType};
use crate::results::Page;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use url::Url;

static POST_PATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/\d{4}/\d{2}/|/blog/|/post/|/article/").unwrap());

/// Frontier and visited set for one crawl
#[derive(Debug, Default)]
pub struct CrawlSession {
    frontier: VecDeque<String>,
    visited: HashSet<String>,
}

impl CrawlSession {
    pub fn new(seed: &str) -> Self {
        Self {
            frontier: VecDeque::from([seed.to_string()]),
            visited: HashSet::new(),
        }
    }

    /// Pops from the front until an unvisited URL is found, marking it visited
    pub fn next_unvisited(&mut self) -> Option<String> {
        while let Some(url) = self.frontier.pop_front() {
            if self.visited.insert(url.clone()) {
                return Some(url);
            }
            ::log::trace!("Skipping already visited: {}", url);
        }
        None
    }

    /// Queues a URL at the back unless it has already been fetched
    pub fn enqueue(&mut self, url: String) -> bool {
        if self.visited.contains(&url) {
            return false;
        }
        self.frontier.push_back(url);
        true
    }

    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    pub fn pending(&self) -> usize {
        self.frontier.len()
    }
}

/// Sequential, same-host, breadth-first crawler
pub struct WebCrawler {
    fetcher: Arc<dyn Fetcher>,
    retry: RetryPolicy,
    politeness_delay: Duration,
    exclude_patterns: Vec<String>,
    min_content_length: usize,
    cancel: Option<Arc<AtomicBool>>,
}

impl WebCrawler {
    pub fn new(fetcher: Arc<dyn Fetcher>, config: &PersonaConfig) -> Self {
        Self {
            fetcher,
            retry: RetryPolicy::from_config(&config.request),
            politeness_delay: config.crawl.politeness_delay(),
            exclude_patterns: config.crawl.exclude_patterns.clone(),
            min_content_length: config.crawl.min_content_length,
            cancel: None,
        }
    }

    /// Stop after the fetch in flight once `flag` is set
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }

    /// Crawl from `start_url`, collecting at most `max_pages` pages in
    /// breadth-first order. Fetch failures are skipped.
    pub async fn crawl_website(
        &self,
        start_url: &str,
        max_pages: usize,
    ) -> Result<Vec<Page>, CrawlError> {
        let seed = Url::parse(start_url)
            .map_err(|e| CrawlError::InvalidSeed(format!("{}: {}", start_url, e)))?;
        if !matches!(seed.scheme(), "http" | "https") || seed.host_str().is_none() {
            return Err(CrawlError::InvalidSeed(start_url.to_string()));
        }

        let url_filter = UrlFilter::for_seed(&seed, &self.exclude_patterns)?;
        let mut session = CrawlSession::new(normalize_url(&seed).as_str());
        let mut pages = Vec::new();
        let mut fetches = 0usize;

        ::log::info!("Starting crawl of {} (max {} pages)", seed, max_pages);

        while pages.len() < max_pages {
            if self.is_cancelled() {
                ::log::info!("Crawl of {} cancelled", seed);
                break;
            }

            let Some(url) = session.next_unvisited() else {
                break;
            };

            if fetches > 0 && !self.politeness_delay.is_zero() {
                tokio::time::sleep(self.politeness_delay).await;
            }
            fetches += 1;

            let Some((page, served_from)) = self.fetch_page(&url).await else {
                continue;
            };

            if !url_filter.is_in_host_scope(&served_from) {
                ::log::warn!("Skipping {}: served from off-host {}", url, served_from);
                continue;
            }

            queue_links(&page, &url_filter, &mut session);
            pages.push(page);
        }

        ::log::info!(
            "Crawl of {} complete: {} pages from {} fetches, {} urls left in frontier",
            seed,
            pages.len(),
            fetches,
            session.pending()
        );

        Ok(pages)
    }

    /// Crawl a blog and keep only post-shaped pages, in crawl order
    pub async fn get_blog_posts(
        &self,
        blog_url: &str,
        max_posts: usize,
    ) -> Result<Vec<Page>, CrawlError> {
        let pages = self
            .crawl_website(blog_url, max_posts.saturating_mul(2))
            .await?;

        let posts: Vec<Page> = pages
            .into_iter()
            .filter(|page| is_blog_post(page, self.min_content_length))
            .take(max_posts)
            .collect();

        ::log::info!("Found {} blog posts at {}", posts.len(), blog_url);
        Ok(posts)
    }

    /// Fetch and extract a single page; `None` on any fetch failure
    pub async fn get_page_content(&self, url: &str) -> Option<Page> {
        self.fetch_page(url).await.map(|(page, _)| page)
    }

    /// Links are resolved against the URL the body was actually served
    /// from, which is returned alongside the page
    async fn fetch_page(&self, url: &str) -> Option<(Page, Url)> {
        let response = match fetch_with_retry(self.fetcher.as_ref(), url, &self.retry).await {
            Ok(response) => response,
            Err(e) => {
                ::log::warn!("Failed to fetch {}: {}", url, e);
                return None;
            }
        };

        let served_from = response.final_url.as_deref().unwrap_or(url);
        let base = match Url::parse(served_from) {
            Ok(base) => base,
            Err(e) => {
                ::log::warn!("Cannot resolve links against {}: {}", served_from, e);
                return None;
            }
        };

        let parser_type = ParserType::detect(url, response.content_type.as_deref());
        let parsed = Parser::parse(&response.body, &base, parser_type);

        ::log::debug!(
            "Extracted {} chars, {} links, {} images from {}",
            parsed.content.chars().count(),
            parsed.links.len(),
            parsed.images.len(),
            url
        );

        let page = Page {
            url: url.to_string(),
            title: parsed.title,
            description: parsed.description,
            raw_html: response.body,
            content: parsed.content,
            links: parsed.links,
            images: parsed.images,
        };
        Some((page, base))
    }
}

/// Queue the page's in-scope links at the back of the frontier
fn queue_links(page: &Page, url_filter: &UrlFilter, session: &mut CrawlSession) {
    for link in &page.links {
        let Ok(resolved) = Url::parse(link) else {
            continue;
        };

        if !url_filter.should_crawl(&resolved) {
            ::log::debug!("URL filter rejected: {}", resolved);
            continue;
        }

        let normalized = normalize_url(&resolved).to_string();
        if session.enqueue(normalized) {
            ::log::debug!("Queued link: {}", resolved);
        }
    }
}

/// A page is a post when its path looks like one or its content is long enough
pub fn is_blog_post(page: &Page, min_content_length: usize) -> bool {
    let path_matches = Url::parse(&page.url)
        .map(|url| POST_PATH.is_match(url.path()))
        .unwrap_or(false);

    path_matches || page.content_len() > min_content_length
}
