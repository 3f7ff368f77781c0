// src/page/mod.rs
// =============================================================================
// Everything the crawler needs to know about a single page.
//
// Submodules:
// - http: downloads a page's text (Fetcher)
// - html: pulls the links out of that text (LinkExtractor)
//
// The crawl engine only talks to the two traits, so tests can swap in fakes.
// =============================================================================

mod html;
mod http;

pub use html::{HtmlLinkExtractor, LinkExtractor, Links};
pub use http::{Fetcher, HttpFetcher};
