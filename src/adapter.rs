//! Source adapters: one self-contained crawl unit per site.
//!
//! A [`SourceAdapter`] composes a seed-URL template, a [`LinkCollector`],
//! and a destination-tag → [`Extractor`] registry. Running one crawl means:
//! build the seed URL from the keyword, fetch the listing page, collect and
//! route candidate links, fetch each detail page, and extract one
//! [`Record`] per page. Adapters share no state; the concrete sites live in
//! [`crate::sources`].

use crate::collect::LinkCollector;
use crate::extract::Extractor;
use crate::fetch::{FetchEngine, FetchError};
use crate::models::Record;
use futures::stream::{self, StreamExt};
use scraper::Html;
use tracing::{debug, info, instrument, warn};

/// How many detail pages one source fetches at a time.
const DETAIL_FETCH_CONCURRENCY: usize = 4;

/// One site's crawl configuration.
#[derive(Debug, Clone)]
pub struct SourceAdapter {
    /// Short source name; also the result-file prefix.
    pub name: &'static str,
    /// Search URL template with a `{keyword}` placeholder.
    pub seed_template: &'static str,
    /// Fixed seed used when no keyword is given.
    pub default_seed: &'static str,
    pub collector: LinkCollector,
    /// Destination tag → extractor registry for this source's detail pages.
    pub extractors: Vec<(&'static str, Extractor)>,
}

impl SourceAdapter {
    /// Build the seed URL for a keyword.
    ///
    /// The keyword is percent-encoded into the template; an absent or empty
    /// keyword falls back to the source's default seed.
    pub fn seed(&self, keyword: Option<&str>) -> String {
        match keyword {
            Some(kw) if !kw.is_empty() => self
                .seed_template
                .replace("{keyword}", &urlencoding::encode(kw)),
            _ => self.default_seed.to_string(),
        }
    }

    fn extractor_for(&self, tag: &str) -> Option<&Extractor> {
        self.extractors
            .iter()
            .find(|(t, _)| *t == tag)
            .map(|(_, e)| e)
    }

    /// Run this source's crawl to completion.
    ///
    /// A seed fetch failure fails the whole crawl; a detail-page fetch
    /// failure is logged and only that record is skipped. Record order
    /// follows fetch completion order.
    #[instrument(level = "info", skip_all, fields(source = self.name))]
    pub async fn crawl<E: FetchEngine>(
        &self,
        engine: &E,
        keyword: Option<&str>,
    ) -> Result<Vec<Record>, FetchError> {
        let seed = self.seed(keyword);
        info!(url = %seed, "Fetching listing page");
        let listing = engine.fetch(&seed).await?;

        let links = {
            let document = Html::parse_document(&listing);
            self.collector.collect(&document)
        };
        info!(count = links.len(), "Collected candidate links");

        let records: Vec<Option<Record>> = stream::iter(links)
            .map(|(url, tag)| async move {
                let Some(extractor) = self.extractor_for(tag) else {
                    warn!(%url, tag, "No extractor registered for tag; skipping");
                    return None;
                };
                match engine.fetch(&url).await {
                    Ok(body) => {
                        let document = Html::parse_document(&body);
                        let record = extractor.extract(&document, &url);
                        debug!(%url, tag, "Extracted record");
                        Some(record)
                    }
                    Err(e) => {
                        warn!(%url, tag, error = %e, "Detail fetch failed; skipping");
                        None
                    }
                }
            })
            .buffer_unordered(DETAIL_FETCH_CONCURRENCY)
            .collect()
            .await;

        let records: Vec<Record> = records.into_iter().flatten().collect();
        info!(count = records.len(), "Extracted records");
        Ok(records)
    }
}
