// src/page/http.rs
// =============================================================================
// This module downloads pages over HTTP.
//
// Key functionality:
// - One reqwest Client for the whole crawl (connection pooling + cookies,
//   so it behaves like a browser session)
// - Returns the body text of every response, whatever its status code.
//   A 404 page is still a page, and its links still get crawled.
// - Only transport failures (DNS, refused connection, timeout, broken body)
//   become FetchErrors
//
// Rust concepts:
// - async_trait: lets us put an async fn inside a trait
// - map_err: converts one error type into another
// =============================================================================

use crate::crawl::CrawlConfig;
use crate::error::FetchError;
use async_trait::async_trait;
use reqwest::Client;

/// Retrieves the text of a page.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Fetcher backed by a shared reqwest client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Builds the HTTP client from the crawl settings
    //
    // Fails only if the TLS backend cannot be initialized
    pub fn new(config: &CrawlConfig) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .cookie_store(true)
            .build()?;

        Ok(Self::with_client(client))
    }

    // Wraps an existing client (custom proxies, headers, ...)
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::new(url, e))?;

        let status = response.status();
        if !status.is_success() {
            // Not an error: the body is handed to the extractor like any other
            tracing::debug!(%url, status = status.as_u16(), "non-success response");
        }

        response.text().await.map_err(|e| FetchError::new(url, e))
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why #[async_trait]?
//    - Traits with async fn used to not be object safe or Send-checkable
//    - The macro rewrites them to return Pin<Box<dyn Future + Send>>
//
// 2. Why not fail on 404?
//    - The crawler treats every response as "fetched text"
//    - Only problems getting a response at all are errors
//
// 3. Why cookie_store(true)?
//    - The client keeps cookies between requests, like a browser session,
//      so sites that set a cookie on the first page see it on later ones
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher() -> HttpFetcher {
        HttpFetcher::new(&CrawlConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<a href=\"/next\">next</a>"))
            .mount(&server)
            .await;

        let body = fetcher()
            .fetch(&format!("{}/page", server.uri()))
            .await
            .unwrap();
        assert_eq!(body, "<a href=\"/next\">next</a>");
    }

    #[tokio::test]
    async fn test_fetch_returns_body_of_error_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not found <a href=\"/home\">home</a>"))
            .mount(&server)
            .await;

        let body = fetcher()
            .fetch(&format!("{}/missing", server.uri()))
            .await
            .unwrap();
        assert!(body.contains("/home"));
    }

    #[tokio::test]
    async fn test_fetch_sends_user_agent() {
        let server = MockServer::start().await;
        let config = CrawlConfig::default();
        Mock::given(method("GET"))
            .and(header("user-agent", config.user_agent.as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&server)
            .await;

        let body = HttpFetcher::new(&config)
            .unwrap()
            .fetch(&server.uri())
            .await
            .unwrap();
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        // Grab a free port, then close it so nothing is listening there
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = format!("http://{}/", addr);
        let err = fetcher().fetch(&url).await.unwrap_err();
        assert_eq!(err.url, url);
    }

    #[tokio::test]
    async fn test_fetch_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let config = CrawlConfig {
            timeout: Duration::from_millis(100),
            ..CrawlConfig::default()
        };
        let result = HttpFetcher::new(&config).unwrap().fetch(&server.uri()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_fetch_invalid_url() {
        assert!(fetcher().fetch("not a url").await.is_err());
    }
}
