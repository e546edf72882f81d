use crate::analysis::normalize::normalize;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Sentences, filtered words and length statistics for one text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenBundle {
    pub sentences: Vec<String>,
    /// Normalized words with stop words and tokens of two or fewer characters removed
    pub words: Vec<String>,
    /// Count of all normalized words, before filtering
    pub word_count: usize,
    pub sentence_count: usize,
    /// `word_count / sentence_count`, or 0 without sentences
    pub avg_words_per_sentence: f64,
}

/// Splits text into sentences and stop-word-filtered words
#[derive(Debug, Clone)]
pub struct Tokenizer {
    stop_words: HashSet<String>,
}

impl Tokenizer {
    pub fn new<I, S>(stop_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stop_words: stop_words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Sentence splitting runs on the original text, word splitting on
    /// the normalized text
    pub fn tokenize(&self, text: &str) -> TokenBundle {
        let sentences = split_sentences(text);
        let all_words = word_tokens(text);

        let words: Vec<String> = all_words
            .iter()
            .filter(|w| w.chars().count() > 2 && !self.is_stop_word(w))
            .cloned()
            .collect();

        let word_count = all_words.len();
        let sentence_count = sentences.len();
        let avg_words_per_sentence = if sentence_count > 0 {
            word_count as f64 / sentence_count as f64
        } else {
            0.0
        };

        TokenBundle {
            sentences,
            words,
            word_count,
            sentence_count,
            avg_words_per_sentence,
        }
    }
}

/// Every word of the normalized text, stop words included
pub fn word_tokens(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(|w| w.to_string())
        .collect()
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closing(c: char) -> bool {
    is_terminal(c) || matches!(c, '"' | '\'' | ')' | ']' | '\u{201d}' | '\u{2019}')
}

/// Splits on runs of `.`, `!` or `?` (plus closing quotes or brackets)
/// followed by whitespace or the end of the text
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_terminal(c) {
            continue;
        }

        let mut end = i + c.len_utf8();
        while let Some(&(j, next)) = chars.peek() {
            if !is_closing(next) {
                break;
            }
            end = j + next.len_utf8();
            chars.next();
        }

        if chars.peek().is_none_or(|&(_, next)| next.is_whitespace()) {
            push_sentence(&mut sentences, &text[start..end]);
            start = end;
        }
    }
    push_sentence(&mut sentences, &text[start..]);

    sentences
}

fn push_sentence(sentences: &mut Vec<String>, candidate: &str) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.split_whitespace().collect::<Vec<_>>().join(" "));
    }
}

/// Word counts that remember first-occurrence order
#[derive(Debug, Default)]
pub struct WordFrequencies<'a> {
    order: Vec<(&'a str, usize)>,
    index: HashMap<&'a str, usize>,
}

impl<'a> WordFrequencies<'a> {
    pub fn from_words(words: &'a [String]) -> Self {
        let mut freq = Self::default();
        for word in words {
            match freq.index.get(word.as_str()) {
                Some(&slot) => freq.order[slot].1 += 1,
                None => {
                    freq.index.insert(word.as_str(), freq.order.len());
                    freq.order.push((word.as_str(), 1));
                }
            }
        }
        freq
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.index.get(word).map(|&slot| self.order[slot].1)
    }

    /// Distinct words with their counts, in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, usize)> + '_ {
        self.order.iter().copied()
    }

    /// Distinct words ranked by count; ties keep first-occurrence order
    pub fn ranked(&self) -> Vec<(&'a str, usize)> {
        let mut ranked = self.order.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}
