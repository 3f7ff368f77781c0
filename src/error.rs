// src/error.rs
// =============================================================================
// Error types for the crawler.
//
// Three things can go wrong while crawling:
// - FetchError: the page could not be downloaded (DNS, timeout, refused...)
// - ParseError: links could not be pulled out of the page
// - SinkError: a visited URL could not be written to the output
//
// Fetch and parse errors only ever affect one URL; the crawl carries on.
// Sink errors stop the crawl.
//
// Rust concepts:
// - thiserror: derive macro that implements std::error::Error for us
// - #[source]: links an error to the lower-level error that caused it
// =============================================================================

use thiserror::Error;

// Boxed error so any transport can report its own failure type
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Retrieving a page failed.
#[derive(Debug, Error)]
#[error("failed to fetch {url}")]
pub struct FetchError {
    pub url: String,
    #[source]
    pub source: BoxError,
}

impl FetchError {
    pub fn new(url: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            url: url.into(),
            source: source.into(),
        }
    }
}

/// Extracting links from a page failed.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The CSS selector used to find anchors did not compile
    #[error("invalid link selector: {0}")]
    Selector(String),

    /// A root-relative link was found but the page URL itself is not absolute
    #[error("cannot resolve links against {base}")]
    InvalidBase {
        base: String,
        #[source]
        source: url::ParseError,
    },
}

/// Anything that can go wrong while visiting a single URL.
#[derive(Debug, Error)]
pub enum VisitError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Writing a visited URL to the output failed.
#[derive(Debug, Error)]
#[error("failed to write to crawl output")]
pub struct SinkError(#[from] pub std::io::Error);

// Renders an error followed by every cause in its source chain:
// "failed to fetch https://x: error sending request: connection refused"
pub fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_fetch_error_chain() {
        let err = FetchError::new(
            "https://example.com",
            io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused"),
        );
        assert_eq!(
            error_chain(&err),
            "failed to fetch https://example.com: connection refused"
        );
    }

    #[test]
    fn test_visit_error_is_transparent() {
        let err = VisitError::from(ParseError::Selector("bad".to_string()));
        assert_eq!(err.to_string(), "invalid link selector: bad");
    }
}
