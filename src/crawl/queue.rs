// src/crawl/queue.rs
// =============================================================================
// The crawl frontier: which URLs are waiting, and which are done.
//
// Two rules keep the crawl finite:
// 1. A URL is never queued twice at the same time
// 2. A URL that has been visited is never queued again
//
// A popped URL counts as queued until it is marked visited, so a page that
// links to itself does not put itself back in line.
//
// URLs are compared as exact strings. "https://ex.com/x" and
// "https://ex.com/x/" are different URLs as far as the frontier is concerned.
//
// Rust concepts:
// - VecDeque: FIFO queue, pop from the front, push to the back (BFS order)
// - HashSet: O(1) membership checks for "already queued" and "already visited"
// =============================================================================

use std::collections::{HashSet, VecDeque};

#[derive(Debug, Default)]
pub struct Frontier {
    // Pending URLs, oldest first
    queue: VecDeque<String>,
    // Everything in `queue` plus the URL being visited right now
    queued: HashSet<String>,
    visited: HashSet<String>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    // Builds a frontier from seed URLs. Duplicate seeds collapse into one entry.
    pub fn with_seeds<I, S>(seeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut frontier = Self::new();
        for seed in seeds {
            frontier.enqueue(seed);
        }
        frontier
    }

    /// Queues `url` unless it is already queued or visited.
    ///
    /// Returns true if the URL was added.
    pub fn enqueue(&mut self, url: impl Into<String>) -> bool {
        let url = url.into();
        if self.visited.contains(&url) || self.queued.contains(&url) {
            return false;
        }

        self.queued.insert(url.clone());
        self.queue.push_back(url);
        true
    }

    // Takes the oldest pending URL. It stays blocked from re-queueing until
    // mark_visited is called for it.
    pub fn pop(&mut self) -> Option<String> {
        self.queue.pop_front()
    }

    // Visited is permanent: there is no way to remove a URL from it
    pub fn mark_visited(&mut self, url: String) {
        self.queued.remove(&url);
        self.visited.insert(url);
    }

    #[cfg(test)]
    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why keep both a VecDeque and a HashSet of the same URLs?
//    - VecDeque remembers the order (who's next)
//    - HashSet answers "is it already queued?" without scanning the queue
//    - The two are always updated together in enqueue/mark_visited
//
// 2. What is impl Into<String>?
//    - Accepts both &str and String, so callers don't need .to_string()
//
// 3. Why #[cfg(test)] on is_visited?
//    - Only the tests ask about single URLs; the crawl loop doesn't need it,
//      and the attribute keeps it out of the release binary
// -----------------------------------------------------------------------------
