// src/page/html.rs
// =============================================================================
// This module extracts links from HTML pages.
//
// We use the `scraper` crate to find every <a> tag in document order, and the
// `url` crate to resolve root-relative hrefs ("/docs") against the page URL.
//
// Normalization rules, applied to each href:
//   ""                    -> skipped
//   "/docs"               -> joined onto the page URL
//   anything else         -> passed through unchanged
//
// No scheme or host filtering happens here: "mailto:x" and "docs/intro" are
// handed to the crawler exactly as written.
//
// Rust concepts:
// - Iterators: Links is a lazy iterator, each href is resolved only when the
//   crawler asks for the next one
// - Traits: LinkExtractor lets the crawler work with any extraction strategy
// =============================================================================

use crate::error::ParseError;
use scraper::{Html, Selector};
use url::Url;

/// Turns a page body into the URLs it links to.
pub trait LinkExtractor: Send + Sync {
    /// Extracts links from `html`, resolving root-relative ones against
    /// `base_url`. The returned sequence yields links in document order.
    fn extract_links(&self, base_url: &str, html: &str) -> Result<Links, ParseError>;
}

/// Link extractor backed by scraper's HTML5 parser.
#[derive(Debug, Clone, Default)]
pub struct HtmlLinkExtractor;

impl HtmlLinkExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl LinkExtractor for HtmlLinkExtractor {
    fn extract_links(&self, base_url: &str, html: &str) -> Result<Links, ParseError> {
        // "a" rather than "a[href]": anchors without an href are skipped while
        // iterating, like empty ones
        let selector = Selector::parse("a").map_err(|e| ParseError::Selector(e.to_string()))?;

        let document = Html::parse_document(html);

        // The parsed document is not Send, so only the raw hrefs leave this
        // function. Resolution happens lazily in Links.
        let hrefs = document
            .select(&selector)
            .filter_map(|element| element.value().attr("href"))
            .map(str::to_string)
            .collect();

        Ok(Links::new(base_url, hrefs))
    }
}

/// Lazy sequence of discovered URLs from one page.
///
/// Each item is either a normalized URL or the error hit while resolving it.
/// Items before an error have already been produced and stay valid.
#[derive(Debug)]
pub struct Links {
    base: String,
    hrefs: std::vec::IntoIter<String>,
}

impl Links {
    pub fn new(base_url: &str, hrefs: Vec<String>) -> Self {
        Self {
            base: base_url.to_string(),
            hrefs: hrefs.into_iter(),
        }
    }
}

impl Iterator for Links {
    type Item = Result<String, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        // Keep pulling hrefs until one produces a URL (or an error)
        for href in self.hrefs.by_ref() {
            match normalize_link(&self.base, &href) {
                Ok(Some(url)) => return Some(Ok(url)),
                Ok(None) => continue,
                Err(e) => return Some(Err(e)),
            }
        }
        None
    }
}

// Applies the normalization rules to a single href
//
// Returns:
//   Ok(Some(url)) - a URL to enqueue
//   Ok(None)      - nothing to enqueue (empty href, or a root-relative href
//                   that doesn't form a valid URL, like "//")
//   Err(_)        - the page URL itself can't be used as a base
//
// Examples:
//   base = "https://example.com/a/"
//   href = "/b"                  -> Some("https://example.com/b")
//   href = "https://other.com/c" -> Some("https://other.com/c")
//   href = "c"                   -> Some("c")
fn normalize_link(base: &str, href: &str) -> Result<Option<String>, ParseError> {
    if href.is_empty() {
        return Ok(None);
    }

    if !href.starts_with('/') {
        return Ok(Some(href.to_string()));
    }

    let base_url = Url::parse(base).map_err(|source| ParseError::InvalidBase {
        base: base.to_string(),
        source,
    })?;

    match base_url.join(href) {
        Ok(resolved) => Ok(Some(resolved.to_string())),
        Err(e) => {
            // One bad href shouldn't cost us the rest of the page
            tracing::debug!(%base, %href, error = %e, "skipping unresolvable link");
            Ok(None)
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does extract_links return Result<Links, ParseError>?
//    - The outer Result covers setting up extraction (the selector)
//    - Each item of Links is a Result too, so a problem with one link is
//      reported when the crawler reaches it, not before
//
// 2. What is self.hrefs.by_ref()?
//    - A for loop normally takes ownership of the iterator
//    - by_ref() lends it instead, so the remaining hrefs are still there the
//      next time next() is called
//
// 3. Why Url::join and not string concatenation?
//    - join follows the same rules a browser does: "/b" on
//      "https://example.com/a/" becomes "https://example.com/b"
//    - "//cdn.example.com/x" keeps the scheme and swaps the host
// -----------------------------------------------------------------------------
