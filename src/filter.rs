use regex::Regex;
use url::Url;

/// Decides which discovered URLs may enter the frontier.
///
/// Only URLs on exactly the seed's host and port are accepted.
/// Subdomains count as different hosts.
#[derive(Debug)]
pub struct UrlFilter {
    seed: Url,
    exclude_regexes: Vec<Regex>,
}

impl UrlFilter {
    /// Create a filter scoped to the host of `seed`
    pub fn for_seed(seed: &Url, exclude_patterns: &[String]) -> Result<Self, regex::Error> {
        let mut exclude_regexes = Vec::with_capacity(exclude_patterns.len());
        for pattern in exclude_patterns {
            exclude_regexes.push(Regex::new(pattern)?);
        }

        Ok(Self {
            seed: seed.clone(),
            exclude_regexes,
        })
    }

    /// Determine if a URL should be queued
    pub fn should_crawl(&self, url: &Url) -> bool {
        if !self.is_in_host_scope(url) {
            return false;
        }

        let url_str = url.as_str();
        !self.exclude_regexes.iter().any(|re| re.is_match(url_str))
    }

    /// Check if a URL has exactly the seed's host and port
    pub fn is_in_host_scope(&self, url: &Url) -> bool {
        same_host(&self.seed, url)
    }
}

/// Host and explicit port match. The scheme is not compared, and a default
/// port written out (`https://a:443`) is the same as leaving it off.
pub fn same_host(a: &Url, b: &Url) -> bool {
    match (a.host_str(), b.host_str()) {
        (Some(x), Some(y)) => x == y && a.port() == b.port(),
        _ => false,
    }
}

/// Create a normalized version of the URL (fragment removed)
pub fn normalize_url(url: &Url) -> Url {
    let mut normalized = url.clone();
    normalized.set_fragment(None);
    normalized
}

/// Resolve an `href`/`src` value against the page it was found on.
///
/// Returns `None` for in-page anchors, `javascript:` pseudo links and
/// anything that cannot be parsed. A bare `www.` prefix is read as an
/// absolute http URL.
pub fn resolve_link(base: &Url, href: &str) -> Option<Url> {
    let href = href.trim();
    if href.is_empty() || href.starts_with('#') || href.starts_with("javascript:") {
        return None;
    }

    if href.starts_with("www.") {
        return Url::parse(&format!("http://{}", href)).ok();
    }

    base.join(href).ok()
}
