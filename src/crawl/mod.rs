// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Breadth-first crawling starting from one or more seed URLs
// - Every URL is visited at most once
// - A failing page never stops the crawl
// - Fixed delay between requests
//
// Submodules:
// - queue: the frontier (pending URLs) and the visited set
// - engine: the crawl loop itself
// - observer: progress reporting (logging by default)
// =============================================================================

mod engine;
mod observer;
mod queue;

pub use engine::{CrawlConfig, CrawlEngine};
pub use observer::TracingObserver;
