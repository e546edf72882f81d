use crate::analysis::tokenize::WordFrequencies;
use crate::analysis::{TextAnalyzer, combine};
use serde::{Deserialize, Serialize};

/// Weight of a word that merely contains a keyword
const PARTIAL_MATCH_WEIGHT: f64 = 0.5;
const MAX_MATCHED_KEYWORDS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicScore {
    pub domain: String,
    /// Raw weighted hits
    pub score: f64,
    /// `score / word_count`
    pub normalized_score: f64,
    /// In [0, 1]
    pub expertise_level: f64,
    /// In [0.5, 1]
    pub confidence: f64,
    pub matched_keywords: Vec<String>,
}

impl TextAnalyzer {
    /// Score the combined texts against every taxonomy domain and return
    /// the `max_topics` best, highest raw score first.
    ///
    /// A word that contains a keyword adds half weight for that keyword,
    /// so one word may count against several keywords and domains.
    pub fn score_topics<S: AsRef<str>>(&self, texts: &[S], max_topics: usize) -> Vec<TopicScore> {
        let tokens = self.tokenize(&combine(texts));
        if tokens.word_count == 0 {
            return Vec::new();
        }

        let freq = WordFrequencies::from_words(&tokens.words);
        let word_count = tokens.word_count as f64;
        let mut topics = Vec::new();

        for domain in &self.lexicons().taxonomy {
            let mut score = 0.0;
            let mut hits: Vec<String> = Vec::new();

            for keyword in &domain.keywords {
                if let Some(count) = freq.get(keyword) {
                    score += count as f64;
                    hits.push(keyword.clone());
                }

                for (word, count) in freq.iter() {
                    if word != keyword && word.contains(keyword.as_str()) {
                        score += count as f64 * PARTIAL_MATCH_WEIGHT;
                        hits.push(word.to_string());
                    }
                }
            }

            if score <= 0.0 {
                continue;
            }

            let normalized_score = score / word_count;
            hits.truncate(MAX_MATCHED_KEYWORDS);

            topics.push(TopicScore {
                domain: domain.name.clone(),
                score,
                normalized_score,
                expertise_level: (normalized_score * 10.0).min(1.0),
                confidence: (normalized_score * 5.0 + 0.5).min(1.0),
                matched_keywords: hits,
            });
        }

        topics.sort_by(|a, b| b.score.total_cmp(&a.score));
        topics.truncate(max_topics);

        ::log::debug!("Scored {} topic domains", topics.len());
        topics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{Domain, Lexicons};

    fn small_analyzer() -> TextAnalyzer {
        TextAnalyzer::new(Lexicons::default().with_taxonomy(vec![
            Domain::new("Rust", &["rust", "cargo", "crate"]),
            Domain::new("Cooking", &["bake", "recipe"]),
            Domain::new("Gardening", &["garden", "soil"]),
        ]))
    }

    fn find<'a>(topics: &'a [TopicScore], domain: &str) -> Option<&'a TopicScore> {
        topics.iter().find(|t| t.domain == domain)
    }

    #[test]
    fn test_ai_research_sentence_scores_ai_domain() {
        let analyzer = TextAnalyzer::default();
        let topics = analyzer.score_topics(&["I love this amazing AI research, it's great!"], 5);
        let ai = find(&topics, "Artificial Intelligence").expect("AI domain scored");
        assert!(ai.score > 0.0);
        assert!(ai.matched_keywords.contains(&"research".to_string()));
    }

    #[test]
    fn test_exact_and_partial_weights() {
        let analyzer = small_analyzer();
        // "rust" exact twice, "rustacean" contains "rust" once, "crates" contains "crate"
        let topics = analyzer.score_topics(&["rust rust rustacean crates recipe"], 5);

        let rust = find(&topics, "Rust").unwrap();
        assert_eq!(rust.score, 2.0 + 0.5 + 0.5);
        assert_eq!(rust.matched_keywords, vec!["rust", "rustacean", "crates"]);
        assert_eq!(rust.normalized_score, 3.0 / 5.0);

        let cooking = find(&topics, "Cooking").unwrap();
        assert_eq!(cooking.score, 1.0);
        assert!(find(&topics, "Gardening").is_none());
    }

    #[test]
    fn test_sorted_by_score_and_truncated() {
        let analyzer = small_analyzer();
        let topics = analyzer.score_topics(&["garden soil soil", "recipe"], 1);
        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].domain, "Gardening");
    }

    #[test]
    fn test_ties_keep_taxonomy_order() {
        let analyzer = small_analyzer();
        let topics = analyzer.score_topics(&["soil recipe cargo"], 5);
        let domains: Vec<&str> = topics.iter().map(|t| t.domain.as_str()).collect();
        assert_eq!(domains, vec!["Rust", "Cooking", "Gardening"]);
    }

    #[test]
    fn test_levels_are_clamped() {
        let analyzer = small_analyzer();
        let topics = analyzer.score_topics(&["rust rust rust rust"], 5);
        let rust = find(&topics, "Rust").unwrap();
        assert_eq!(rust.expertise_level, 1.0);
        assert_eq!(rust.confidence, 1.0);

        let diluted = analyzer.score_topics(&[format!("rust {}", "the ".repeat(200))], 5);
        let rust = find(&diluted, "Rust").unwrap();
        assert!(rust.expertise_level > 0.0 && rust.expertise_level < 1.0);
        assert!(rust.confidence >= 0.5 && rust.confidence < 1.0);
    }

    #[test]
    fn test_matched_keywords_capped() {
        let analyzer = small_analyzer();
        let text = (0..15)
            .map(|i| format!("rust{}", "x".repeat(i + 1)))
            .collect::<Vec<_>>()
            .join(" ");
        let topics = analyzer.score_topics(&[text], 5);
        assert_eq!(find(&topics, "Rust").unwrap().matched_keywords.len(), 10);
    }

    #[test]
    fn test_empty_input_yields_no_topics() {
        let analyzer = TextAnalyzer::default();
        assert!(analyzer.score_topics::<&str>(&[], 5).is_empty());
        assert!(analyzer.score_topics(&["", "   "], 5).is_empty());
        assert!(analyzer.score_topics(&["the and of"], 5).is_empty());
    }
}
