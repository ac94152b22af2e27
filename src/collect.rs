//! Listing-page link collection and routing.
//!
//! Given a parsed search-results page, a [`LinkCollector`] produces the
//! deduplicated candidate detail-page links together with the destination
//! tag that selects the right extractor for each. Links that match none of
//! the source's routing prefixes are dropped before any detail fetch
//! happens.

use itertools::Itertools;
use scraper::{Html, Selector};
use tracing::debug;
use url::Url;

/// Where on the listing page the candidate anchors live.
#[derive(Debug, Clone)]
pub enum LinkScope {
    /// Every anchor matching one selector.
    FlatAnchors { anchors: &'static str },
    /// For each block matching `blocks`, only the first anchor matching
    /// `anchor`; blocks without one are skipped.
    FirstAnchorPerBlock {
        blocks: &'static str,
        anchor: &'static str,
    },
}

/// Link extraction, dedup, and prefix routing for one source.
#[derive(Debug, Clone)]
pub struct LinkCollector {
    pub scope: LinkScope,
    /// Base URL for resolving relative hrefs; `None` when the site emits
    /// absolute links.
    pub base_url: Option<&'static str>,
    /// Ordered `(URL prefix, destination tag)` rules; first match wins.
    pub routes: Vec<(&'static str, &'static str)>,
}

impl LinkCollector {
    /// Collect `(URL, destination tag)` pairs from a listing page.
    ///
    /// URLs are deduplicated by exact string equality, first occurrence
    /// wins. Unrouted links are logged at debug level and dropped.
    pub fn collect(&self, document: &Html) -> Vec<(String, &'static str)> {
        let hrefs = self.hrefs(document);
        let base = self
            .base_url
            .map(|b| Url::parse(b).expect("source base URL parses"));

        hrefs
            .into_iter()
            .filter_map(|href| match &base {
                Some(base) => base.join(&href).ok().map(|u| u.to_string()),
                None => Some(href),
            })
            .unique()
            .filter_map(|url| match self.route(&url) {
                Some(tag) => Some((url, tag)),
                None => {
                    debug!(%url, "Link matches no routing rule; dropping");
                    None
                }
            })
            .collect()
    }

    fn hrefs(&self, document: &Html) -> Vec<String> {
        match &self.scope {
            LinkScope::FlatAnchors { anchors } => {
                let selector = Selector::parse(anchors).unwrap();
                document
                    .select(&selector)
                    .filter_map(|a| a.value().attr("href"))
                    .map(str::to_string)
                    .collect()
            }
            LinkScope::FirstAnchorPerBlock { blocks, anchor } => {
                let block_selector = Selector::parse(blocks).unwrap();
                let anchor_selector = Selector::parse(anchor).unwrap();
                document
                    .select(&block_selector)
                    .filter_map(|block| {
                        block
                            .select(&anchor_selector)
                            .find_map(|a| a.value().attr("href"))
                    })
                    .map(str::to_string)
                    .collect()
            }
        }
    }

    fn route(&self, url: &str) -> Option<&'static str> {
        self.routes
            .iter()
            .find(|(prefix, _)| url.starts_with(prefix))
            .map(|(_, tag)| *tag)
    }
}
