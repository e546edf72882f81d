use crate::analysis::TextAnalyzer;
use crate::analysis::normalize::normalize;
use crate::analysis::tokenize::{WordFrequencies, split_sentences};
use crate::results::{Page, TweetRecord};
use serde::Serialize;

const KEY_SENTENCE_KEYWORDS: usize = 20;

/// A page with its cleaned text and extracted highlights
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedPage {
    pub url: String,
    pub title: String,
    pub description: String,
    pub clean_content: String,
    pub keywords: Vec<String>,
    pub key_sentences: Vec<String>,
    pub links: Vec<String>,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Engagement {
    pub retweets: u64,
    pub likes: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedTweet {
    pub id: String,
    pub text: String,
    pub clean_text: String,
    pub created_at: String,
    pub keywords: Vec<String>,
    pub engagement: Engagement,
    pub is_retweet: bool,
    pub is_reply: bool,
    pub hashtags: Vec<String>,
    pub urls: Vec<String>,
    pub mentions: Vec<String>,
}

impl TextAnalyzer {
    /// Most frequent filtered words; equal counts keep first-seen order
    pub fn extract_keywords(&self, text: &str, max_keywords: usize) -> Vec<String> {
        let tokens = self.tokenize(text);
        WordFrequencies::from_words(&tokens.words)
            .ranked()
            .into_iter()
            .take(max_keywords)
            .map(|(word, _)| word.to_string())
            .collect()
    }

    /// Sentences ranked by how many of the text's top keywords they contain
    pub fn key_sentences(&self, text: &str, max_sentences: usize) -> Vec<String> {
        let keywords = self.extract_keywords(text, KEY_SENTENCE_KEYWORDS);

        let mut scored: Vec<(String, usize)> = Vec::new();
        for sentence in split_sentences(text) {
            if scored.iter().any(|(seen, _)| *seen == sentence) {
                continue;
            }
            let lower = sentence.to_lowercase();
            let score = keywords
                .iter()
                .filter(|k| lower.contains(k.as_str()))
                .count();
            scored.push((sentence, score));
        }

        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored
            .into_iter()
            .take(max_sentences)
            .map(|(sentence, _)| sentence)
            .collect()
    }

    pub fn process_page(&self, page: &Page) -> ProcessedPage {
        ProcessedPage {
            url: page.url.clone(),
            title: page.title.clone(),
            description: page.description.clone(),
            clean_content: normalize(&page.content),
            keywords: self.extract_keywords(&page.content, 15),
            key_sentences: self.key_sentences(&page.content, 10),
            links: page.links.clone(),
            images: page.images.clone(),
        }
    }

    pub fn process_tweet(&self, tweet: &TweetRecord) -> ProcessedTweet {
        ProcessedTweet {
            id: tweet.id.clone(),
            text: tweet.text.clone(),
            clean_text: normalize(&tweet.text),
            created_at: tweet.created_at.clone(),
            keywords: self.extract_keywords(&tweet.text, 5),
            engagement: Engagement {
                retweets: tweet.retweet_count,
                likes: tweet.favorite_count,
            },
            is_retweet: tweet.is_retweet,
            is_reply: tweet.is_reply,
            hashtags: tweet.hashtags.clone(),
            urls: tweet.urls.clone(),
            mentions: tweet.mentions.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_keywords_by_frequency() {
        let analyzer = TextAnalyzer::default();
        let keywords = analyzer.extract_keywords(
            "Rust is fast. Rust is safe. Cargo builds Rust crates, cargo tests them.",
            3,
        );
        assert_eq!(keywords, vec!["rust", "cargo", "fast"]);
    }

    #[test]
    fn test_key_sentences_ranked() {
        let analyzer = TextAnalyzer::default();
        let text = "Gardening takes patience. Tomatoes love sun and tomatoes love water. \
                    Weather happens.";
        let sentences = analyzer.key_sentences(text, 2);
        assert_eq!(
            sentences[0],
            "Tomatoes love sun and tomatoes love water."
        );
        assert_eq!(sentences.len(), 2);
    }

    #[test]
    fn test_key_sentences_deduplicates() {
        let analyzer = TextAnalyzer::default();
        let sentences = analyzer.key_sentences("Same words. Same words. Other text.", 5);
        assert_eq!(sentences, vec!["Same words.", "Other text."]);
    }

    #[test]
    fn test_process_tweet() {
        let analyzer = TextAnalyzer::default();
        let tweet = TweetRecord {
            id: "42".into(),
            text: "Shipping a new release today! https://example.com #rust".into(),
            created_at: "2024-05-01T10:00:00Z".into(),
            retweet_count: 3,
            favorite_count: 10,
            hashtags: vec!["rust".into()],
            urls: vec!["https://example.com".into()],
            mentions: vec![],
            is_retweet: false,
            is_reply: false,
        };

        let processed = analyzer.process_tweet(&tweet);
        assert_eq!(processed.clean_text, "shipping a new release today rust");
        assert_eq!(processed.engagement, Engagement { retweets: 3, likes: 10 });
        assert!(processed.keywords.len() <= 5);
        assert_eq!(processed.keywords[0], "shipping");
    }

    #[test]
    fn test_process_page() {
        let analyzer = TextAnalyzer::default();
        let page = Page {
            url: "https://example.com/post".into(),
            title: "Post".into(),
            description: "About things".into(),
            raw_html: String::new(),
            content: "Design matters. Good design matters most.".into(),
            links: vec!["https://example.com/".into()],
            images: vec![],
        };

        let processed = analyzer.process_page(&page);
        assert_eq!(processed.clean_content, "design matters good design matters most");
        assert_eq!(processed.keywords[0], "design");
        assert_eq!(processed.key_sentences[0], "Good design matters most.");
        assert_eq!(processed.links, page.links);
    }
}
