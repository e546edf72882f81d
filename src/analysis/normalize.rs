use once_cell::sync::Lazy;
use regex::Regex;

static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+|www\.\S+").unwrap());
static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<.*?>").unwrap());

/// Lowercases and strips URLs, tags, punctuation and digits, leaving
/// letters separated by single spaces. Idempotent.
pub fn normalize(text: &str) -> String {
    let lower = text.to_lowercase();
    let without_urls = URL.replace_all(&lower, "");
    let without_tags = HTML_TAG.replace_all(&without_urls, "");

    let letters: String = without_tags
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace())
        .collect();

    letters.split_whitespace().collect::<Vec<_>>().join(" ")
}
