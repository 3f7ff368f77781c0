// src/crawl/engine.rs
// =============================================================================
// The crawl loop.
//
// How it works:
// 1. Start with the seed URLs in the frontier
// 2. Take the oldest URL, fetch it, extract its links
// 3. Queue every link that hasn't been seen yet
// 4. Mark the URL visited (even if step 2 failed, so it's never retried)
// 5. If the visit worked, record the URL to the output
// 6. Wait a little, then repeat until the frontier is empty
//
// One request at a time, with a fixed pause between requests. A page that
// fails to download or parse is logged and skipped; only an output failure
// stops the crawl.
// =============================================================================

use crate::crawl::observer::{CrawlObserver, TracingObserver};
use crate::crawl::queue::Frontier;
use crate::error::{SinkError, VisitError};
use crate::output::{Sink, StreamSink};
use crate::page::{Fetcher, LinkExtractor, Links};
use std::sync::Arc;
use std::time::Duration;

/// Tuning knobs for a crawl.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Pause after each processed URL
    pub delay: Duration,
    /// Per-request timeout for the HTTP client
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(1),
            timeout: Duration::from_secs(10),
            user_agent: concat!("webcrawl/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Breadth-first crawler over a fetcher and a link extractor.
pub struct CrawlEngine<F, X> {
    fetcher: F,
    extractor: X,
    frontier: Frontier,
    delay: Duration,
    observer: Arc<dyn CrawlObserver>,
    // Used by run() when the caller doesn't pass a sink
    default_output: Option<Box<dyn Sink + Send>>,
}

impl<F: Fetcher, X: LinkExtractor> CrawlEngine<F, X> {
    pub fn new<I, S>(seeds: I, fetcher: F, extractor: X) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fetcher,
            extractor,
            frontier: Frontier::with_seeds(seeds),
            delay: CrawlConfig::default().delay,
            observer: Arc::new(TracingObserver),
            default_output: None,
        }
    }

    pub fn with_config(mut self, config: &CrawlConfig) -> Self {
        self.delay = config.delay;
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn CrawlObserver>) -> Self {
        self.observer = observer;
        self
    }

    // Replaces stdout as the destination used when run() gets no sink
    #[cfg(test)]
    pub fn with_default_output(mut self, output: Box<dyn Sink + Send>) -> Self {
        self.default_output = Some(output);
        self
    }

    /// Queues `url` unless it was already queued or visited.
    pub fn enqueue(&mut self, url: impl Into<String>) -> bool {
        self.frontier.enqueue(url)
    }

    /// Fetches `url` and queues every link found on it.
    ///
    /// Failures are reported to the observer and never propagate. Links queued
    /// before a failure stay queued. Returns whether the visit succeeded.
    pub async fn visit_one(&mut self, url: &str) -> bool {
        match self.try_visit(url).await {
            Ok(discovered) => {
                tracing::debug!(%url, discovered, "page visited");
                true
            }
            Err(e) => {
                self.observer.visit_failed(url, &e);
                false
            }
        }
    }

    // Returns how many new URLs were queued
    async fn try_visit(&mut self, url: &str) -> Result<usize, VisitError> {
        let html = self.fetcher.fetch(url).await?;

        let links: Links = self.extractor.extract_links(url, &html)?;

        let mut discovered = 0;
        for link in links {
            if self.enqueue(link?) {
                discovered += 1;
            }
        }

        Ok(discovered)
    }

    /// Crawls until the frontier is empty.
    ///
    /// Successful visits go to `sink`, or to the default output (stdout unless
    /// replaced) when no sink is given. A sink failure aborts the crawl.
    pub async fn run(&mut self, sink: Option<&mut dyn Sink>) -> Result<(), SinkError> {
        let mut fallback: Option<Box<dyn Sink + Send>> = None;

        let result = match sink {
            Some(sink) => self.drain(sink).await,
            None => {
                let output = fallback.insert(
                    self.default_output
                        .take()
                        .unwrap_or_else(|| Box::new(StreamSink::stdout())),
                );
                self.drain(output.as_mut()).await
            }
        };

        // Hand the default output back so a later run() keeps using it
        if fallback.is_some() {
            self.default_output = fallback;
        }

        result
    }

    async fn drain(&mut self, sink: &mut dyn Sink) -> Result<(), SinkError> {
        while let Some(url) = self.frontier.pop() {
            self.observer.crawling(&url);

            let succeeded = self.visit_one(&url).await;
            self.frontier.mark_visited(url.clone());

            if succeeded {
                sink.record(&url)?;
            }

            // Rate limit: same pause whether the visit worked or not
            if !self.frontier.is_empty() {
                tokio::time::sleep(self.delay).await;
            }
        }

        self.observer.finished(self.frontier.visited_count());
        Ok(())
    }

    #[cfg(test)]
    pub fn is_visited(&self, url: &str) -> bool {
        self.frontier.is_visited(url)
    }

    pub fn visited_count(&self) -> usize {
        self.frontier.visited_count()
    }

    // Number of URLs still waiting in the frontier
    pub fn pending(&self) -> usize {
        self.frontier.len()
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is the engine generic over F and X?
//    - The compiler generates a version of CrawlEngine for each fetcher and
//      extractor type, so calls to them are direct (no dynamic dispatch)
//    - Tests use a fake fetcher that serves canned HTML, no network needed
//
// 2. Why Option<&mut dyn Sink>?
//    - &mut dyn Sink accepts any sink type at runtime (file, stdout, test)
//    - Option makes "no sink given" explicit instead of a special value
//
// 3. What does fallback.insert() do?
//    - Stores a value in the Option and returns a mutable reference to it
//    - The default output lives in a local while the crawl borrows it, then
//      goes back into self.default_output
// -----------------------------------------------------------------------------
