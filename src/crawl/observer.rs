// src/crawl/observer.rs
// =============================================================================
// Progress reporting for the crawl engine.
//
// The engine never logs directly. It reports what happens to a CrawlObserver,
// and the default observer turns those reports into tracing events. Tests
// plug in their own observer to check what was reported.
// =============================================================================

use crate::error::{error_chain, VisitError};

/// Receives crawl progress from the engine.
pub trait CrawlObserver: Send + Sync {
    /// A URL was taken off the frontier and is about to be fetched.
    fn crawling(&self, url: &str);

    /// Fetching or extracting links from `url` failed. The crawl continues.
    fn visit_failed(&self, url: &str, error: &VisitError);

    /// The frontier is empty.
    fn finished(&self, visited: usize);
}

/// Logs crawl progress through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl CrawlObserver for TracingObserver {
    fn crawling(&self, url: &str) {
        tracing::info!("Crawling: {}", url);
    }

    fn visit_failed(&self, url: &str, error: &VisitError) {
        tracing::error!(error = %error_chain(error), "Failed to crawl: {}", url);
    }

    fn finished(&self, visited: usize) {
        tracing::info!(visited, "Crawl finished");
    }
}
