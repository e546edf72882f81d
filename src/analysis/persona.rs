use crate::analysis::{
    SentimentResult, StyleProfile, TextAnalyzer, TopicScore, ValueInterestEntry, combine,
};
use crate::config::AnalysisConfig;
use crate::results::ContentItem;
use serde::{Deserialize, Serialize};

pub const PERSONA_MODEL_VERSION: &str = "0.1";

/// Persona signals synthesized from one content batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonaProfile {
    pub model_version: String,
    pub topics: Vec<TopicScore>,
    pub sentiment: SentimentResult,
    pub style: StyleProfile,
    pub values_interests: Vec<ValueInterestEntry>,
    /// Non-blank items the profile was built from
    pub content_items: usize,
    /// Mean of the sentiment confidence and every topic confidence
    pub confidence: f64,
    /// Enough content and enough confidence to rely on
    pub reliable: bool,
}

/// Runs all four analyzers over a batch and merges their output
#[derive(Debug, Clone)]
pub struct PersonaSynthesizer {
    analyzer: TextAnalyzer,
    settings: AnalysisConfig,
}

impl PersonaSynthesizer {
    pub fn new(analyzer: TextAnalyzer, settings: AnalysisConfig) -> Self {
        Self { analyzer, settings }
    }

    pub fn analyzer(&self) -> &TextAnalyzer {
        &self.analyzer
    }

    /// Build a profile from raw texts; blank texts are ignored and the
    /// batch is cut at `max_content_items`
    pub fn synthesize<S: AsRef<str>>(&self, texts: &[S]) -> PersonaProfile {
        let texts: Vec<&str> = texts
            .iter()
            .map(|t| t.as_ref())
            .filter(|t| !t.trim().is_empty())
            .take(self.settings.max_content_items)
            .collect();

        let topics = self.analyzer.score_topics(&texts, self.settings.max_topics);
        let sentiment = self.analyzer.score_sentiment(&combine(&texts));
        let style = self.analyzer.analyze_style(&texts);
        let values_interests = self
            .analyzer
            .extract_values_interests(&texts, self.settings.max_values_items);

        let confidences: Vec<f64> = std::iter::once(sentiment.confidence)
            .chain(topics.iter().map(|t| t.confidence))
            .collect();
        let confidence = confidences.iter().sum::<f64>() / confidences.len() as f64;

        let content_items = texts.len();
        let reliable = content_items >= self.settings.min_content_items
            && confidence >= self.settings.confidence_threshold;

        ::log::info!(
            "Synthesized persona from {} items: {} topics, {} values/interests, confidence {:.2}",
            content_items,
            topics.len(),
            values_interests.len(),
            confidence
        );

        PersonaProfile {
            model_version: PERSONA_MODEL_VERSION.to_string(),
            topics,
            sentiment,
            style,
            values_interests,
            content_items,
            confidence,
            reliable,
        }
    }

    pub fn synthesize_items(&self, items: &[ContentItem]) -> PersonaProfile {
        let texts: Vec<&str> = items.iter().map(|item| item.text()).collect();
        self.synthesize(&texts)
    }
}

impl Default for PersonaSynthesizer {
    fn default() -> Self {
        Self::new(TextAnalyzer::default(), AnalysisConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{Formality, SentimentLabel, Verbosity};
    use crate::results::TweetRecord;

    #[test]
    fn test_empty_batch_gives_neutral_profile() {
        let profile = PersonaSynthesizer::default().synthesize::<&str>(&[]);
        assert_eq!(profile.model_version, "0.1");
        assert!(profile.topics.is_empty());
        assert!(profile.values_interests.is_empty());
        assert_eq!(profile.sentiment.label, SentimentLabel::Neutral);
        assert_eq!(profile.style.formality, Formality::Neutral);
        assert_eq!(profile.style.verbosity, Verbosity::Moderate);
        assert_eq!(profile.content_items, 0);
        assert_eq!(profile.confidence, 0.5);
        assert!(!profile.reliable);
    }

    #[test]
    fn test_profile_combines_analyzers() {
        let texts = [
            "I love machine learning research and great algorithms!",
            "Research on neural model training is amazing.",
            "",
        ];
        let profile = PersonaSynthesizer::default().synthesize(&texts);

        assert_eq!(profile.content_items, 2);
        assert_eq!(profile.sentiment.label, SentimentLabel::Positive);
        assert_eq!(profile.topics[0].domain, "Artificial Intelligence");
        assert!(profile.topics.len() <= 5);
        assert!(profile.confidence >= 0.5 && profile.confidence <= 1.0);
        assert!(!profile.reliable, "two items are below the minimum");
    }

    #[test]
    fn test_reliable_with_enough_confident_content() {
        let settings = AnalysisConfig {
            min_content_items: 2,
            confidence_threshold: 0.6,
            ..AnalysisConfig::default()
        };
        let synthesizer = PersonaSynthesizer::new(TextAnalyzer::default(), settings);
        let profile = synthesizer.synthesize(&["Great research!", "Amazing research, love it."]);
        assert!(profile.confidence >= 0.6);
        assert!(profile.reliable);
    }

    #[test]
    fn test_max_content_items_truncates() {
        let settings = AnalysisConfig {
            max_content_items: 1,
            ..AnalysisConfig::default()
        };
        let synthesizer = PersonaSynthesizer::new(TextAnalyzer::default(), settings);
        let profile = synthesizer.synthesize(&["great", "terrible awful bad"]);
        assert_eq!(profile.content_items, 1);
        assert_eq!(profile.sentiment.label, SentimentLabel::Positive);
    }

    #[test]
    fn test_synthesize_items_reads_tweets() {
        let tweet = TweetRecord {
            id: "1".into(),
            text: "What a wonderful day".into(),
            created_at: "2024-01-01".into(),
            retweet_count: 0,
            favorite_count: 0,
            hashtags: vec![],
            urls: vec![],
            mentions: vec![],
            is_retweet: false,
            is_reply: false,
        };
        let profile = PersonaSynthesizer::default().synthesize_items(&[ContentItem::Tweet(tweet)]);
        assert_eq!(profile.sentiment.label, SentimentLabel::Positive);
        assert_eq!(profile.content_items, 1);
    }

    #[test]
    fn test_profile_serializes() {
        let profile = PersonaSynthesizer::default().synthesize(&["Therefore, research matters. Honesty is important."]);
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["model_version"], "0.1");
        assert_eq!(json["style"]["formality"], "formal");
        assert_eq!(json["sentiment"]["label"], "neutral");
        assert!(json["values_interests"][0]["type"].is_string());
    }
}
