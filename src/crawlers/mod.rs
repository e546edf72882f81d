pub mod fetch;
pub mod web;

pub use fetch::{FetchResponse, Fetcher, HttpFetcher, RetryPolicy, fetch_with_retry};
pub use web::{CrawlSession, WebCrawler, is_blog_post};
