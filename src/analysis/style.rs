use crate::analysis::{TextAnalyzer, combine};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMOTICON: Lazy<Regex> = Lazy::new(|| Regex::new(r"[:;]-?[)(/]").unwrap());

const CONCISE_BELOW: f64 = 15.0;
const VERBOSE_ABOVE: f64 = 35.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Formality {
    Formal,
    Informal,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verbosity {
    Concise,
    Moderate,
    Verbose,
}

impl Verbosity {
    pub fn from_average(avg_words_per_sentence: f64) -> Self {
        if avg_words_per_sentence < CONCISE_BELOW {
            Verbosity::Concise
        } else if avg_words_per_sentence > VERBOSE_ABOVE {
            Verbosity::Verbose
        } else {
            Verbosity::Moderate
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expressiveness {
    HighlyExpressive,
    ModeratelyExpressive,
    Reserved,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleProfile {
    pub formality: Formality,
    /// In [0, 1], 0.5 without markers
    pub formality_score: f64,
    pub verbosity: Verbosity,
    pub avg_words_per_sentence: f64,
    pub expressiveness: Expressiveness,
    /// Exclamations, questions and emoticons per sentence
    pub expressiveness_score: f64,
}

impl Default for StyleProfile {
    fn default() -> Self {
        Self {
            formality: Formality::Neutral,
            formality_score: 0.5,
            verbosity: Verbosity::Moderate,
            avg_words_per_sentence: 0.0,
            expressiveness: Expressiveness::Reserved,
            expressiveness_score: 0.0,
        }
    }
}

impl TextAnalyzer {
    /// Classify formality, verbosity and expressiveness of the combined texts.
    /// Input without sentences yields [`StyleProfile::default`].
    pub fn analyze_style<S: AsRef<str>>(&self, texts: &[S]) -> StyleProfile {
        let combined = combine(texts);
        let tokens = self.tokenize(&combined);
        if tokens.sentence_count == 0 {
            return StyleProfile::default();
        }

        let mut formal = 0usize;
        let mut informal = 0usize;
        for word in &tokens.words {
            if self.formal.contains(word) {
                formal += 1;
            } else if self.informal.contains(word) {
                informal += 1;
            }
        }

        let formality_score = if formal + informal > 0 {
            formal as f64 / (formal + informal) as f64
        } else {
            0.5
        };
        let formality = if formality_score > 0.7 {
            Formality::Formal
        } else if formality_score < 0.3 {
            Formality::Informal
        } else {
            Formality::Neutral
        };

        let exclamations = combined.matches('!').count();
        let questions = combined.matches('?').count();
        let emoticons = EMOTICON.find_iter(&combined).count();
        let expressiveness_score =
            (exclamations + questions + emoticons) as f64 / tokens.sentence_count as f64;
        let expressiveness = if expressiveness_score > 0.3 {
            Expressiveness::HighlyExpressive
        } else if expressiveness_score > 0.1 {
            Expressiveness::ModeratelyExpressive
        } else {
            Expressiveness::Reserved
        };

        StyleProfile {
            formality,
            formality_score,
            verbosity: Verbosity::from_average(tokens.avg_words_per_sentence),
            avg_words_per_sentence: tokens.avg_words_per_sentence,
            expressiveness,
            expressiveness_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence_of(words: usize) -> String {
        format!("{}.", vec!["word"; words].join(" "))
    }

    #[test]
    fn test_empty_batch_is_default() {
        let analyzer = TextAnalyzer::default();
        let style = analyzer.analyze_style::<&str>(&[]);
        assert_eq!(style.formality, Formality::Neutral);
        assert_eq!(style.verbosity, Verbosity::Moderate);
        assert_eq!(style.formality_score, 0.5);
        assert_eq!(style, StyleProfile::default());
    }

    #[test]
    fn test_verbosity_bands() {
        let analyzer = TextAnalyzer::default();
        assert_eq!(
            analyzer.analyze_style(&[sentence_of(40)]).verbosity,
            Verbosity::Verbose
        );
        assert_eq!(
            analyzer.analyze_style(&[sentence_of(10)]).verbosity,
            Verbosity::Concise
        );
        assert_eq!(
            analyzer.analyze_style(&[sentence_of(20)]).verbosity,
            Verbosity::Moderate
        );
        assert_eq!(Verbosity::from_average(15.0), Verbosity::Moderate);
        assert_eq!(Verbosity::from_average(35.0), Verbosity::Moderate);
    }

    #[test]
    fn test_verbosity_counts_stop_words() {
        let analyzer = TextAnalyzer::default();
        let text = format!("{}.", vec!["the"; 40].join(" "));
        let style = analyzer.analyze_style(&[text]);
        assert_eq!(style.avg_words_per_sentence, 40.0);
        assert_eq!(style.verbosity, Verbosity::Verbose);
    }

    #[test]
    fn test_formality() {
        let analyzer = TextAnalyzer::default();

        let formal = analyzer.analyze_style(&["Therefore we proceed. Moreover, it works. Thus done."]);
        assert_eq!(formal.formality, Formality::Formal);
        assert_eq!(formal.formality_score, 1.0);

        let informal = analyzer.analyze_style(&["Yeah that was cool stuff, lol."]);
        assert_eq!(informal.formality, Formality::Informal);
        assert_eq!(informal.formality_score, 0.0);

        let mixed = analyzer.analyze_style(&["However, yeah."]);
        assert_eq!(mixed.formality, Formality::Neutral);
        assert_eq!(mixed.formality_score, 0.5);
    }

    #[test]
    fn test_expressiveness() {
        let analyzer = TextAnalyzer::default();

        let loud = analyzer.analyze_style(&["Wow! Really? Nice :)"]);
        assert_eq!(loud.expressiveness, Expressiveness::HighlyExpressive);
        assert_eq!(loud.expressiveness_score, 1.0);

        let quiet = analyzer.analyze_style(&["One. Two. Three. Four. Five. Six. Seven. Eight!"]);
        assert_eq!(quiet.expressiveness, Expressiveness::ModeratelyExpressive);

        let flat = analyzer.analyze_style(&["A plain statement. Another one."]);
        assert_eq!(flat.expressiveness, Expressiveness::Reserved);
        assert_eq!(flat.expressiveness_score, 0.0);
    }

    #[test]
    fn test_formality_score_in_range() {
        let analyzer = TextAnalyzer::default();
        for text in ["", "thus thus yeah", "cool cool cool however", "plain"] {
            let score = analyzer.analyze_style(&[text]).formality_score;
            assert!((0.0..=1.0).contains(&score));
        }
    }
}
