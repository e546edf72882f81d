use crate::config::RequestConfig;
use crate::error::{CrawlError, FetchError};
use crate::filter::same_host;
use async_trait::async_trait;
use reqwest::redirect::Policy;
use std::time::Duration;

const MAX_REDIRECTS: usize = 10;

/// Status and body of one HTTP response
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
    pub content_type: Option<String>,
    /// Where the body was served from after redirects, if not the requested URL
    pub final_url: Option<String>,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The fetch primitive the crawler depends on.
///
/// Implementations report any HTTP status they receive; deciding what
/// counts as a failure is left to [`fetch_with_retry`].
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn get(&self, url: &str) -> Result<FetchResponse, FetchError>;
}

/// Fetcher backed by a shared reqwest client
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a client with the configured user agent and request timeout.
    /// Redirects are followed only while they stay on the requested host.
    pub fn new(config: &RequestConfig) -> Result<Self, CrawlError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .redirect(same_host_redirects())
            .build()
            .map_err(|e| CrawlError::Client(e.to_string()))?;

        Ok(Self { client })
    }
}

/// An off-host redirect is not followed; the 3xx response is returned as is
fn same_host_redirects() -> Policy {
    Policy::custom(|attempt| {
        if attempt.previous().len() >= MAX_REDIRECTS {
            return attempt.error("too many redirects");
        }

        let on_host = attempt
            .previous()
            .first()
            .is_some_and(|origin| same_host(origin, attempt.url()));
        if on_host {
            attempt.follow()
        } else {
            ::log::debug!("Not following off-host redirect to {}", attempt.url());
            attempt.stop()
        }
    })
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn get(&self, url: &str) -> Result<FetchResponse, FetchError> {
        let response = self.client.get(url).send().await?;

        let final_url = Some(response.url().to_string()).filter(|u| u != url);
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());
        let body = response.text().await?;

        Ok(FetchResponse {
            status,
            body,
            content_type,
            final_url,
        })
    }
}

/// Bounded retry settings for the fetch primitive
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Extra attempts after the first
    pub retry_count: u32,
    pub retry_delay: Duration,
}

impl RetryPolicy {
    pub fn from_config(config: &RequestConfig) -> Self {
        Self {
            retry_count: config.retry_count,
            retry_delay: config.retry_delay(),
        }
    }

    pub fn none() -> Self {
        Self {
            retry_count: 0,
            retry_delay: Duration::ZERO,
        }
    }
}

/// Fetch `url`, treating any non-2xx status as a failure and retrying
/// retryable failures up to `policy.retry_count` times
pub async fn fetch_with_retry(
    fetcher: &dyn Fetcher,
    url: &str,
    policy: &RetryPolicy,
) -> Result<FetchResponse, FetchError> {
    let mut attempt = 0;

    loop {
        let error = match fetcher.get(url).await {
            Ok(response) if response.is_success() => return Ok(response),
            Ok(response) => FetchError::Status(response.status),
            Err(e) => e,
        };

        if attempt >= policy.retry_count || !error.is_retryable() {
            return Err(error);
        }

        attempt += 1;
        ::log::warn!(
            "Fetch of {} failed ({}), retry {} of {}",
            url,
            error,
            attempt,
            policy.retry_count
        );
        if !policy.retry_delay.is_zero() {
            tokio::time::sleep(policy.retry_delay).await;
        }
    }
}
