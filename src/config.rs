use crate::error::ConfigError;
use crate::lexicon::Lexicons;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

/// Crawl traversal settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlConfig {
    /// Maximum number of pages collected by a plain crawl
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,

    /// Maximum number of posts returned in blog mode
    #[serde(default = "default_max_pages")]
    pub max_posts: usize,

    /// Content length (in characters) above which a page counts as a post
    #[serde(default = "default_min_content_length")]
    pub min_content_length: usize,

    /// Pause between successive fetches
    #[serde(default = "default_politeness_delay_ms")]
    pub politeness_delay_ms: u64,

    /// Regex patterns for URLs that are never queued
    #[serde(default = "default_exclude_patterns")]
    pub exclude_patterns: Vec<String>,

    /// Most posts requested from a social source
    #[serde(default = "default_max_tweets")]
    pub max_tweets: usize,

    #[serde(default = "default_max_content_age_days")]
    pub max_content_age_days: u32,
}

/// HTTP fetch settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestConfig {
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Extra attempts after the first failed one
    #[serde(default = "default_retry_count")]
    pub retry_count: u32,

    #[serde(default = "default_retry_delay_secs")]
    pub retry_delay_secs: u64,
}

/// Persona analysis settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_max_topics")]
    pub max_topics: usize,

    #[serde(default = "default_max_values_items")]
    pub max_values_items: usize,

    /// Overall confidence a profile needs to be flagged reliable
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f64,

    #[serde(default = "default_min_content_items")]
    pub min_content_items: usize,

    /// Content items beyond this count are ignored
    #[serde(default = "default_max_content_items")]
    pub max_content_items: usize,
}

/// Complete configuration surface
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonaConfig {
    #[serde(default)]
    pub crawl: CrawlConfig,

    #[serde(default)]
    pub request: RequestConfig,

    #[serde(default)]
    pub analysis: AnalysisConfig,

    #[serde(default)]
    pub lexicons: Lexicons,
}

impl PersonaConfig {
    /// Load and validate configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load and validate configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every table and threshold
    pub fn validate(&self) -> Result<(), ConfigError> {
        let taxonomy = &self.lexicons.taxonomy;
        if taxonomy.is_empty() {
            return Err(ConfigError::Invalid("taxonomy has no domains".into()));
        }
        for domain in taxonomy {
            if domain.name.trim().is_empty() {
                return Err(ConfigError::Invalid("taxonomy domain without a name".into()));
            }
            if domain.keywords.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "domain '{}' has no keywords",
                    domain.name
                )));
            }
            if domain.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(ConfigError::Invalid(format!(
                    "domain '{}' has a blank keyword",
                    domain.name
                )));
            }
        }

        let threshold = self.analysis.confidence_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::Invalid(format!(
                "confidence_threshold {} outside [0, 1]",
                threshold
            )));
        }

        if self.request.timeout_secs == 0 {
            return Err(ConfigError::Invalid("timeout_secs must be positive".into()));
        }

        for pattern in &self.crawl.exclude_patterns {
            Regex::new(pattern)?;
        }

        Ok(())
    }
}

impl CrawlConfig {
    pub fn politeness_delay(&self) -> Duration {
        Duration::from_millis(self.politeness_delay_ms)
    }
}

impl RequestConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_secs(self.retry_delay_secs)
    }
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            max_pages: default_max_pages(),
            max_posts: default_max_pages(),
            min_content_length: default_min_content_length(),
            politeness_delay_ms: default_politeness_delay_ms(),
            exclude_patterns: default_exclude_patterns(),
            max_tweets: default_max_tweets(),
            max_content_age_days: default_max_content_age_days(),
        }
    }
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            retry_count: default_retry_count(),
            retry_delay_secs: default_retry_delay_secs(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_topics: default_max_topics(),
            max_values_items: default_max_values_items(),
            confidence_threshold: default_confidence_threshold(),
            min_content_items: default_min_content_items(),
            max_content_items: default_max_content_items(),
        }
    }
}

fn default_max_pages() -> usize {
    50
}

fn default_max_tweets() -> usize {
    1000
}

fn default_max_content_age_days() -> u32 {
    365
}

fn default_min_content_length() -> usize {
    50
}

fn default_politeness_delay_ms() -> u64 {
    1000
}

fn default_exclude_patterns() -> Vec<String> {
    vec![r"\.(jpg|jpeg|png|gif|css|js|ico|woff|woff2|ttf|eot|svg|pdf|zip)$".to_string()]
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; persona-footprint/0.1)".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_retry_count() -> u32 {
    3
}

fn default_retry_delay_secs() -> u64 {
    5
}

fn default_max_topics() -> usize {
    5
}

fn default_max_values_items() -> usize {
    10
}

fn default_confidence_threshold() -> f64 {
    0.6
}

fn default_min_content_items() -> usize {
    10
}

fn default_max_content_items() -> usize {
    1000
}
