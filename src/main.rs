// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (stderr)
// 2. Parse command-line arguments using clap
// 3. Open the output file, if one was given
// 4. Crawl until there is nothing left to visit, or Ctrl-C
// 5. Close the output file on every exit path
//
// Exit codes: 0 when the crawl finishes (even if some pages failed), 1 when
// something outside the crawl loop goes wrong, e.g. the output file can't be
// opened or written.
// =============================================================================

mod cli;
mod crawl;
mod error;
mod output;
mod page;
mod telemetry;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use crawl::{CrawlConfig, CrawlEngine, TracingObserver};
use output::{FileSink, Sink};
use page::{HtmlLinkExtractor, HttpFetcher};
use std::sync::Arc;

// How the crawl ended, as far as the shell is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Finished,
    Interrupted,
}

impl Outcome {
    // 130 = 128 + SIGINT, what shells report for a Ctrl-C'd process
    fn exit_code(self) -> i32 {
        match self {
            Outcome::Finished => 0,
            Outcome::Interrupted => 130,
        }
    }
}

#[tokio::main]
async fn main() {
    telemetry::init_telemetry();

    let exit_code = match run().await {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            tracing::error!("{:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<Outcome> {
    let cli = Cli::parse();
    let config = CrawlConfig::default();

    let fetcher = HttpFetcher::new(&config).context("failed to build HTTP client")?;
    let mut engine = CrawlEngine::new([cli.url], fetcher, HtmlLinkExtractor::new())
        .with_config(&config)
        .with_observer(Arc::new(TracingObserver));

    match cli.output_file {
        Some(path) => {
            let mut sink = FileSink::open(&path)
                .with_context(|| format!("cannot open output file {}", path.display()))?;
            tracing::debug!(path = %sink.path().display(), "appending visited URLs");

            let crawled = crawl(&mut engine, Some(&mut sink)).await;
            // Close even if the crawl failed or was interrupted
            let closed = sink.close().context("failed to flush output file");
            let outcome = crawled?;
            closed?;
            Ok(outcome)
        }
        None => crawl(&mut engine, None).await,
    }
}

// Runs the crawl until the frontier is empty or the user hits Ctrl-C
async fn crawl(
    engine: &mut CrawlEngine<HttpFetcher, HtmlLinkExtractor>,
    sink: Option<&mut dyn Sink>,
) -> Result<Outcome> {
    let outcome = tokio::select! {
        result = engine.run(sink) => {
            result.context("failed to record visited URL")?;
            Outcome::Finished
        }
        _ = tokio::signal::ctrl_c() => Outcome::Interrupted,
    };

    if outcome == Outcome::Interrupted {
        tracing::warn!(
            visited = engine.visited_count(),
            pending = engine.pending(),
            "interrupted, stopping crawl"
        );
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finished_crawl_exits_zero() {
        assert_eq!(Outcome::Finished.exit_code(), 0);
    }

    #[test]
    fn test_interrupted_crawl_exits_nonzero() {
        assert_eq!(Outcome::Interrupted.exit_code(), 130);
    }
}
