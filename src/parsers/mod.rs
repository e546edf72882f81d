pub mod html;


use url::Url;

/// Enum to represent the kinds of response bodies the crawler understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserType {
    /// HTML documents: full extraction
    Html,
    /// Plain text: content only, no links
    Text,
    /// Media and other binary payloads: nothing to extract
    Other,
}

impl ParserType {
    /// Classify a response by its content type, falling back to the URL
    pub fn detect(url: &str, content_type: Option<&str>) -> Self {
        if let Some(content_type) = content_type {
            let content_type = content_type.to_ascii_lowercase();
            if content_type.contains("html") || content_type.contains("xml") {
                return ParserType::Html;
            }
            if content_type.starts_with("text/") {
                return ParserType::Text;
            }
            if content_type.starts_with("image/")
                || content_type.starts_with("audio/")
                || content_type.starts_with("video/")
                || content_type.contains("pdf")
                || content_type.contains("octet-stream")
            {
                return ParserType::Other;
            }
        }
        Self::from_url(url)
    }

    /// Determines the parser type from the URL alone
    pub fn from_url(url: &str) -> Self {
        let path = url.split(['?', '#']).next().unwrap_or(url);
        if path.ends_with(".txt") || path.ends_with(".md") {
            ::log::debug!("Classifying as Text: {}", url);
            ParserType::Text
        } else if [".jpg", ".jpeg", ".png", ".gif", ".svg", ".pdf", ".css", ".js"]
            .iter()
            .any(|ext| path.ends_with(ext))
        {
            ::log::debug!("Classifying as Other: {}", url);
            ParserType::Other
        } else {
            ParserType::Html
        }
    }
}

/// Fields extracted from one response body
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseResult {
    pub title: String,
    pub description: String,
    pub content: String,
    pub links: Vec<String>,
    pub images: Vec<String>,
}

impl ParseResult {
    /// Creates a result carrying content only
    pub fn content_only(content: String) -> Self {
        Self {
            content,
            ..Self::default()
        }
    }
}

/// Main parser that delegates to specific format parsers
pub struct Parser;

impl Parser {
    /// Parse a response body fetched from `base`
    pub fn parse(body: &str, base: &Url, parser_type: ParserType) -> ParseResult {
        match parser_type {
            ParserType::Html => html::parse(body, base),
            ParserType::Text => {
                ParseResult::content_only(body.split_whitespace().collect::<Vec<_>>().join(" "))
            }
            ParserType::Other => ParseResult::default(),
        }
    }
}
