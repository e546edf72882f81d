use crate::filter::resolve_link;
use crate::parsers::ParseResult;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use url::Url;

static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("title").unwrap());
static META_DESCRIPTION: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"meta[name="description"]"#).unwrap());
static MAIN: Lazy<Selector> = Lazy::new(|| Selector::parse("main").unwrap());
static ARTICLE: Lazy<Selector> = Lazy::new(|| Selector::parse("article").unwrap());
static CLASSED_DIV: Lazy<Selector> = Lazy::new(|| Selector::parse("div[class]").unwrap());
static BODY: Lazy<Selector> = Lazy::new(|| Selector::parse("body").unwrap());
static LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").unwrap());
static IMAGE: Lazy<Selector> = Lazy::new(|| Selector::parse("img[src]").unwrap());

static CONTENT_CLASS: Lazy<Regex> = Lazy::new(|| Regex::new(r"content|main|post").unwrap());

/// Subtrees whose text never counts as page content
const STRIPPED_TAGS: [&str; 5] = ["script", "style", "nav", "footer", "header"];

/// Parses an HTML document fetched from `base`
pub fn parse(html: &str, base: &Url) -> ParseResult {
    let doc = Html::parse_document(html);

    let links = extract_urls(&doc, &LINK, "href", base);
    let images = extract_urls(&doc, &IMAGE, "src", base);

    ::log::debug!("HTML parser found {} links in {}", links.len(), base);

    ParseResult {
        title: extract_title(&doc).unwrap_or_default(),
        description: extract_description(&doc).unwrap_or_default(),
        content: extract_content(&doc),
        links,
        images,
    }
}

/// Text of the first `<title>` element
pub fn extract_title(doc: &Html) -> Option<String> {
    doc.select(&TITLE)
        .next()
        .map(|title| collapse_whitespace(&title.text().collect::<String>()))
}

/// `content` attribute of `<meta name="description">`
pub fn extract_description(doc: &Html) -> Option<String> {
    doc.select(&META_DESCRIPTION)
        .find_map(|meta| meta.value().attr("content"))
        .map(|content| content.trim().to_string())
}

/// Picks the main content container: `main`, then `article`, then a
/// content-like `div`, then `body`
pub fn find_content_root(doc: &Html) -> Option<ElementRef<'_>> {
    doc.select(&MAIN)
        .next()
        .or_else(|| doc.select(&ARTICLE).next())
        .or_else(|| {
            doc.select(&CLASSED_DIV).find(|div| {
                div.value()
                    .attr("class")
                    .is_some_and(|class| CONTENT_CLASS.is_match(class))
            })
        })
        .or_else(|| {
            ::log::debug!("No content container found, falling back to body");
            doc.select(&BODY).next()
        })
}

/// Main content as whitespace-collapsed text, empty when nothing is found
pub fn extract_content(doc: &Html) -> String {
    let Some(root) = find_content_root(doc) else {
        return String::new();
    };

    let mut pieces = Vec::new();
    collect_text(root, &mut pieces);
    collapse_whitespace(&pieces.join(" "))
}

fn collect_text(element: ElementRef<'_>, out: &mut Vec<String>) {
    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            if STRIPPED_TAGS.contains(&child_element.value().name()) {
                continue;
            }
            collect_text(child_element, out);
        } else if let Some(text) = child.value().as_text() {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                out.push(trimmed.to_string());
            }
        }
    }
}

fn extract_urls(doc: &Html, selector: &Selector, attr: &str, base: &Url) -> Vec<String> {
    doc.select(selector)
        .filter_map(|e| e.value().attr(attr))
        .filter_map(|value| resolve_link(base, value))
        .map(|url| url.to_string())
        .collect()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
