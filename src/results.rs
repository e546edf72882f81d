use serde::{Deserialize, Serialize};

/// A fetched page, identified by its URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// URL of the page
    pub url: String,

    /// Text of the first title element (empty if none)
    pub title: String,

    /// Meta description (empty if none)
    pub description: String,

    /// Raw HTML as fetched
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub raw_html: String,

    /// Main content as plain text
    pub content: String,

    /// Absolute links found on the page, including off-domain ones
    pub links: Vec<String>,

    /// Absolute image URLs found on the page
    pub images: Vec<String>,
}

impl Page {
    /// Number of characters of extracted content
    pub fn content_len(&self) -> usize {
        self.content.chars().count()
    }
}

/// A post pulled from the social API collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TweetRecord {
    pub id: String,
    pub text: String,
    pub created_at: String,
    #[serde(default)]
    pub retweet_count: u64,
    #[serde(default)]
    pub favorite_count: u64,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub urls: Vec<String>,
    #[serde(default)]
    pub mentions: Vec<String>,
    #[serde(default)]
    pub is_retweet: bool,
    #[serde(default)]
    pub is_reply: bool,
}

impl TweetRecord {
    /// Ingestion check: a record without an id or text carries nothing to analyze
    pub fn is_valid(&self) -> bool {
        !self.id.trim().is_empty() && !self.text.trim().is_empty()
    }
}

/// Anything the analyzers can read
#[derive(Debug, Clone, PartialEq)]
pub enum ContentItem {
    Page(Page),
    Tweet(TweetRecord),
}

impl ContentItem {
    pub fn text(&self) -> &str {
        match self {
            ContentItem::Page(page) => &page.content,
            ContentItem::Tweet(tweet) => &tweet.text,
        }
    }
}
