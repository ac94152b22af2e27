//! Running every source adapter for one keyword session.
//!
//! The orchestrator runs adapters one after another against the fetch
//! engine, writes each finished result set to its own JSON file, and hands
//! the outcomes straight back to the caller so downstream filtering never
//! has to re-read its own output files.
//!
//! Failure policy: by default a source whose seed fetch fails is logged and
//! skipped and the remaining sources still run and still write their result
//! files. `fail_fast` switches to aborting the whole run on the first such
//! failure.

use crate::adapter::SourceAdapter;
use crate::fetch::{FetchEngine, FetchError};
use crate::models::Record;
use crate::outputs::json::{self, WriteError};
use thiserror::Error;
use tracing::{error, info, instrument};

/// A crawl run that could not complete.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("{source}: seed fetch failed: {error}")]
    Seed {
        source: &'static str,
        #[source]
        error: FetchError,
    },
    #[error("{source}: {error}")]
    Write {
        source: &'static str,
        #[source]
        error: WriteError,
    },
}

/// One source's completed crawl.
#[derive(Debug)]
pub struct CrawlOutcome {
    pub source: &'static str,
    pub records: Vec<Record>,
}

/// Run every adapter for one keyword and write the per-source result files.
///
/// Returns the outcomes of the sources that completed, in adapter order.
#[instrument(level = "info", skip_all, fields(keyword = keyword.unwrap_or("<default>")))]
pub async fn run_all<E: FetchEngine>(
    engine: &E,
    adapters: &[SourceAdapter],
    keyword: Option<&str>,
    output_dir: &str,
    fail_fast: bool,
) -> Result<Vec<CrawlOutcome>, CrawlError> {
    let mut outcomes = Vec::new();

    for adapter in adapters {
        match adapter.crawl(engine, keyword).await {
            Ok(records) => {
                json::write_result_set(output_dir, adapter.name, &records)
                    .await
                    .map_err(|error| CrawlError::Write { source: adapter.name, error })?;
                info!(source = adapter.name, count = records.len(), "Source crawl finished");
                outcomes.push(CrawlOutcome { source: adapter.name, records });
            }
            Err(error) => {
                if fail_fast {
                    return Err(CrawlError::Seed { source: adapter.name, error });
                }
                error!(
                    source = adapter.name,
                    error = %error,
                    "Source crawl failed; continuing with remaining sources"
                );
            }
        }
    }

    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::{LinkCollector, LinkScope};
    use crate::extract::{Extractor, FieldRule, SelectorExtractor};
    use crate::fetch::fake::FakeFetcher;

    fn adapter(name: &'static str, host: &'static str) -> SourceAdapter {
        // Leak the per-test strings: adapter config is &'static in
        // production and these live for the duration of the test binary.
        let seed_template: &'static str =
            Box::leak(format!("https://{host}/?q={{keyword}}").into_boxed_str());
        let default_seed: &'static str =
            Box::leak(format!("https://{host}/?q=default").into_boxed_str());
        let prefix: &'static str = Box::leak(format!("https://{host}/").into_boxed_str());
        SourceAdapter {
            name,
            seed_template,
            default_seed,
            collector: LinkCollector {
                scope: LinkScope::FlatAnchors { anchors: "li a" },
                base_url: None,
                routes: vec![(prefix, "article")],
            },
            extractors: vec![(
                "article",
                Extractor::Css(SelectorExtractor {
                    rules: vec![FieldRule::first("title", "h1")],
                }),
            )],
        }
    }

    fn scratch_dir(name: &str) -> String {
        let dir = std::env::temp_dir().join(format!("keyword_crawler_run_{}_{}", name, std::process::id()));
        dir.to_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_failed_source_does_not_abort_the_others() {
        let adapters = vec![adapter("broken", "broken.site"), adapter("ok", "ok.site")];
        let engine = FakeFetcher::new()
            .page("https://ok.site/?q=kw", "<li><a href=\"https://ok.site/a1\">x</a></li>")
            .page("https://ok.site/a1", "<h1>Works</h1>");

        let dir = scratch_dir("isolated");
        let outcomes = run_all(&engine, &adapters, Some("kw"), &dir, false)
            .await
            .unwrap();

        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].source, "ok");
        assert_eq!(outcomes[0].records[0].get("title"), "Works");
        // The surviving source still wrote its result file.
        let body = tokio::fs::read_to_string(json::result_path(&dir, "ok")).await.unwrap();
        assert!(body.contains("Works"));

        let _ = tokio::fs::remove_dir_all(&dir).await;
    }

    #[tokio::test]
    async fn test_fail_fast_aborts_on_first_seed_failure() {
        let adapters = vec![adapter("broken", "broken.site"), adapter("ok", "ok.site")];
        let engine = FakeFetcher::new()
            .page("https://ok.site/?q=kw", "<div></div>");

        let dir = scratch_dir("fail_fast");
        let err = run_all(&engine, &adapters, Some("kw"), &dir, true)
            .await
            .unwrap_err();
        assert!(matches!(err, CrawlError::Seed { source: "broken", .. }));

        let _ = tokio::fs::remove_dir_all(&dir).await;
    }

    #[tokio::test]
    async fn test_outcomes_follow_adapter_order() {
        let adapters = vec![adapter("one", "one.site"), adapter("two", "two.site")];
        let engine = FakeFetcher::new()
            .page("https://one.site/?q=kw", "<div></div>")
            .page("https://two.site/?q=kw", "<div></div>");

        let dir = scratch_dir("order");
        let outcomes = run_all(&engine, &adapters, Some("kw"), &dir, false)
            .await
            .unwrap();
        let sources: Vec<_> = outcomes.iter().map(|o| o.source).collect();
        assert_eq!(sources, vec!["one", "two"]);

        let _ = tokio::fs::remove_dir_all(&dir).await;
    }
}
