use crate::analysis::TextAnalyzer;
use crate::analysis::tokenize::word_tokens;
use serde::{Deserialize, Serialize};

const LABEL_THRESHOLD: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// In [-1, 1]
    pub score: f64,
    pub label: SentimentLabel,
    pub positive_count: usize,
    pub negative_count: usize,
    /// In [0.5, 1]
    pub confidence: f64,
}

impl Default for SentimentResult {
    fn default() -> Self {
        Self {
            score: 0.0,
            label: SentimentLabel::Neutral,
            positive_count: 0,
            negative_count: 0,
            confidence: 0.5,
        }
    }
}

impl TextAnalyzer {
    /// Lexicon-count sentiment over every normalized word, stop words included
    pub fn score_sentiment(&self, text: &str) -> SentimentResult {
        let mut positive_count = 0;
        let mut negative_count = 0;

        for word in word_tokens(text) {
            if self.positive.contains(&word) {
                positive_count += 1;
            } else if self.negative.contains(&word) {
                negative_count += 1;
            }
        }

        let total = positive_count + negative_count;
        if total == 0 {
            return SentimentResult::default();
        }

        let score = (positive_count as f64 - negative_count as f64) / total as f64;
        let label = if score > LABEL_THRESHOLD {
            SentimentLabel::Positive
        } else if score < -LABEL_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        };

        SentimentResult {
            score,
            label,
            positive_count,
            negative_count,
            confidence: (score.abs() + 0.5).min(1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_sentence() {
        let result = TextAnalyzer::default().score_sentiment("I love this amazing AI research, it's great!");
        assert_eq!(result.label, SentimentLabel::Positive);
        assert!(result.score > 0.2);
        assert_eq!(result.positive_count, 3);
        assert_eq!(result.negative_count, 0);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_negative_sentence() {
        let result =
            TextAnalyzer::default().score_sentiment("A terrible, awful problem. Good grief.");
        assert_eq!(result.label, SentimentLabel::Negative);
        assert_eq!(result.negative_count, 3);
        assert_eq!(result.positive_count, 1);
        assert_eq!(result.score, -0.5);
    }

    #[test]
    fn test_balanced_is_neutral() {
        let result = TextAnalyzer::default().score_sentiment("good bad great awful");
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.confidence, 0.5);
    }

    #[test]
    fn test_no_hits_is_neutral_default() {
        let analyzer = TextAnalyzer::default();
        assert_eq!(analyzer.score_sentiment(""), SentimentResult::default());
        assert_eq!(
            analyzer.score_sentiment("the weather report for tuesday"),
            SentimentResult::default()
        );
    }

    #[test]
    fn test_repeated_words_each_count() {
        let result = TextAnalyzer::default().score_sentiment("Sad. So sad, so BAD!");
        assert_eq!(result.negative_count, 3);
        assert_eq!(result.label, SentimentLabel::Negative);
    }
}
