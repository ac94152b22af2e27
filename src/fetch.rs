//! The fetch-engine boundary between the crawl pipeline and HTTP.
//!
//! The pipeline only ever sees the [`FetchEngine`] trait: one URL in, one
//! response body out. [`HttpFetcher`] is the production implementation on
//! top of `reqwest`; tests swap in an in-memory fake so the whole pipeline
//! runs without network access.
//!
//! The engine never retries. A failed fetch is fatal to that one request's
//! branch and the caller decides what that means (skip the record, fail the
//! crawl).

use reqwest::Client;
use thiserror::Error;
use tracing::{debug, instrument};

/// The registry site rejects default library user agents, so every request
/// goes out with a browser-like one.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/90.0.4430.93 Safari/537.36";

/// A fetch that could not produce a document.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure or non-success HTTP status.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The engine has no response for this URL (used by in-memory engines).
    #[error("no response available for {0}")]
    Unavailable(String),
}

/// External collaborator responsible for retrieving documents.
///
/// Scheduling, politeness, and any retry policy live behind this trait;
/// the crawl pipeline only asks for one URL at a time.
pub trait FetchEngine {
    /// Retrieve the response body for `url`.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// [`FetchEngine`] implementation over a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher with the browser-like user agent.
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }
}

impl FetchEngine for HttpFetcher {
    #[instrument(level = "debug", skip_all, fields(%url))]
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        debug!(bytes = body.len(), "Fetched document");
        Ok(body)
    }
}

#[cfg(test)]
pub(crate) mod fake {
    //! In-memory fetch engine for pipeline tests.

    use super::{FetchEngine, FetchError};
    use std::collections::HashMap;

    /// Serves canned bodies from a URL map; unknown URLs fail with
    /// [`FetchError::Unavailable`].
    #[derive(Debug, Default)]
    pub(crate) struct FakeFetcher {
        pages: HashMap<String, String>,
    }

    impl FakeFetcher {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn page(mut self, url: &str, body: &str) -> Self {
            self.pages.insert(url.to_string(), body.to_string());
            self
        }
    }

    impl FetchEngine for FakeFetcher {
        async fn fetch(&self, url: &str) -> Result<String, FetchError> {
            self.pages
                .get(url)
                .cloned()
                .ok_or_else(|| FetchError::Unavailable(url.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::FakeFetcher;
    use super::*;

    #[tokio::test]
    async fn test_fake_fetcher_serves_known_url() {
        let engine = FakeFetcher::new().page("https://x/", "<html></html>");
        let body = engine.fetch("https://x/").await.unwrap();
        assert_eq!(body, "<html></html>");
    }

    #[tokio::test]
    async fn test_fake_fetcher_unknown_url_is_unavailable() {
        let engine = FakeFetcher::new();
        let err = engine.fetch("https://nowhere/").await.unwrap_err();
        assert!(matches!(err, FetchError::Unavailable(u) if u == "https://nowhere/"));
    }
}
