//! Heuristic text analysis: topics, sentiment, style and values.
//!
//! Every scorer is a pure function over its input and the [`Lexicons`]
//! the analyzer was built with. Empty input never fails; each scorer
//! returns its neutral default instead.

pub mod content;
pub mod normalize;
pub mod persona;
pub mod sentiment;
pub mod style;
pub mod tokenize;
pub mod topics;
pub mod values;

pub use normalize::normalize;
pub use persona::{PersonaProfile, PersonaSynthesizer};
pub use sentiment::{SentimentLabel, SentimentResult};
pub use style::{Expressiveness, Formality, StyleProfile, Verbosity};
pub use tokenize::{TokenBundle, Tokenizer};
pub use topics::TopicScore;
pub use values::{EntryKind, ValueInterestEntry};

use crate::lexicon::Lexicons;
use std::collections::HashSet;

/// Runs the scorers against one set of lexicons
#[derive(Debug, Clone)]
pub struct TextAnalyzer {
    lexicons: Lexicons,
    tokenizer: Tokenizer,
    positive: HashSet<String>,
    negative: HashSet<String>,
    formal: HashSet<String>,
    informal: HashSet<String>,
    value_indicators: HashSet<String>,
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new(Lexicons::default())
    }
}

impl TextAnalyzer {
    /// Build an analyzer; all table entries are matched in lowercase
    pub fn new(lexicons: Lexicons) -> Self {
        let mut lexicons = lexicons;
        for domain in &mut lexicons.taxonomy {
            lowercase_all(&mut domain.keywords);
        }
        lowercase_all(&mut lexicons.sentiment.positive);
        lowercase_all(&mut lexicons.sentiment.negative);
        lowercase_all(&mut lexicons.formality.formal);
        lowercase_all(&mut lexicons.formality.informal);
        lowercase_all(&mut lexicons.value_indicators);

        Self {
            tokenizer: Tokenizer::new(&lexicons.stop_words),
            positive: to_set(&lexicons.sentiment.positive),
            negative: to_set(&lexicons.sentiment.negative),
            formal: to_set(&lexicons.formality.formal),
            informal: to_set(&lexicons.formality.informal),
            value_indicators: to_set(&lexicons.value_indicators),
            lexicons,
        }
    }

    pub fn lexicons(&self) -> &Lexicons {
        &self.lexicons
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn tokenize(&self, text: &str) -> TokenBundle {
        self.tokenizer.tokenize(text)
    }
}

/// Concatenate a batch of texts the way every multi-text scorer reads them
pub(crate) fn combine<S: AsRef<str>>(texts: &[S]) -> String {
    texts
        .iter()
        .map(|t| t.as_ref())
        .collect::<Vec<_>>()
        .join(" ")
}

fn lowercase_all(words: &mut [String]) {
    for word in words {
        *word = word.to_lowercase();
    }
}

fn to_set(words: &[String]) -> HashSet<String> {
    words.iter().cloned().collect()
}
