use crate::analysis::tokenize::{WordFrequencies, split_sentences, word_tokens};
use crate::analysis::{TextAnalyzer, combine};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const VALUE_LEVEL: f64 = 0.7;
const VALUE_CONFIDENCE: f64 = 0.6;
const MIN_INTEREST_LEVEL: f64 = 0.3;
const MAX_RELATED_TERMS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Interest,
    Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueInterestEntry {
    pub term: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// In [0, 1]
    pub level: f64,
    /// At most five
    pub related_terms: Vec<String>,
    pub confidence: f64,
}

/// Entries keyed by term, in insertion order
#[derive(Debug, Default)]
struct EntryMap {
    entries: Vec<ValueInterestEntry>,
    index: HashMap<String, usize>,
}

impl EntryMap {
    /// Insert or replace; a replaced entry keeps its original position
    fn upsert(&mut self, entry: ValueInterestEntry) {
        match self.index.get(&entry.term) {
            Some(&slot) => self.entries[slot] = entry,
            None => {
                self.index.insert(entry.term.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    fn get_mut(&mut self, term: &str) -> Option<&mut ValueInterestEntry> {
        let slot = *self.index.get(term)?;
        self.entries.get_mut(slot)
    }
}

impl TextAnalyzer {
    /// Derive ranked interests (frequent taxonomy keywords) and values
    /// (content words of sentences carrying a value indicator).
    ///
    /// A term found both ways is reported as a value but keeps its
    /// interest level. Ties in level keep insertion order.
    pub fn extract_values_interests<S: AsRef<str>>(
        &self,
        texts: &[S],
        max_items: usize,
    ) -> Vec<ValueInterestEntry> {
        let combined = combine(texts);
        let tokens = self.tokenize(&combined);
        let freq = WordFrequencies::from_words(&tokens.words);
        let mut map = EntryMap::default();

        for domain in &self.lexicons().taxonomy {
            for keyword in &domain.keywords {
                let Some(count) = freq.get(keyword) else {
                    continue;
                };

                let level = (count as f64 / 10.0).min(1.0);
                if level <= MIN_INTEREST_LEVEL {
                    continue;
                }

                map.upsert(ValueInterestEntry {
                    term: keyword.clone(),
                    kind: EntryKind::Interest,
                    level,
                    related_terms: related_terms(&tokens.words, keyword),
                    confidence: level,
                });
            }
        }

        for sentence in self.value_sentences(&combined) {
            for word in word_tokens(&sentence) {
                if word.chars().count() <= 3
                    || self.tokenizer().is_stop_word(&word)
                    || self.value_indicators.contains(&word)
                {
                    continue;
                }

                match map.get_mut(&word) {
                    Some(existing) => existing.kind = EntryKind::Value,
                    None => map.upsert(ValueInterestEntry {
                        term: word,
                        kind: EntryKind::Value,
                        level: VALUE_LEVEL,
                        related_terms: Vec::new(),
                        confidence: VALUE_CONFIDENCE,
                    }),
                }
            }
        }

        let mut entries = map.entries;
        entries.sort_by(|a, b| b.level.total_cmp(&a.level));
        entries.truncate(max_items);
        entries
    }

    /// Sentences containing any value indicator as a substring
    fn value_sentences(&self, text: &str) -> Vec<String> {
        split_sentences(text)
            .into_iter()
            .filter(|sentence| {
                let lower = sentence.to_lowercase();
                self.lexicons()
                    .value_indicators
                    .iter()
                    .any(|indicator| lower.contains(indicator.as_str()))
            })
            .collect()
    }
}

/// Other words that contain, or are contained in, `keyword`; first-seen order
fn related_terms(words: &[String], keyword: &str) -> Vec<String> {
    let mut related: Vec<String> = Vec::new();
    for word in words {
        if related.len() == MAX_RELATED_TERMS {
            break;
        }
        if word != keyword
            && (keyword.contains(word.as_str()) || word.contains(keyword))
            && !related.contains(word)
        {
            related.push(word.clone());
        }
    }
    related
}
