use thiserror::Error;

/// Failure to fetch a single URL. Never fatal to a crawl.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out")]
    Timeout,

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

impl FetchError {
    /// Whether another attempt might succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Network(_) | FetchError::Timeout => true,
            FetchError::Status(code) => *code == 429 || (500..600).contains(code),
            FetchError::InvalidUrl(_) => false,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else if e.is_builder() {
            FetchError::InvalidUrl(e.to_string())
        } else if let Some(status) = e.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Network(e.to_string())
        }
    }
}

/// Missing or invalid configuration, surfaced before any crawl begins
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// A crawl that cannot start
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("invalid seed url: {0}")]
    InvalidSeed(String),

    #[error("invalid exclude pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("failed to build http client: {0}")]
    Client(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("no record for owner {0}")]
    NotFound(String),
}

/// Errors reported by the collection pipeline
#[derive(Debug, Error)]
pub enum CollectError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Crawl(#[from] CrawlError),

    #[error("social source failed: {0}")]
    Social(String),
}
