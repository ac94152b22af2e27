//! # Keyword Crawler
//!
//! A keyword-driven crawler over three Taiwanese news sites (CNA, UDN, LTN)
//! and the twincn company registry. One keyword seeds a search on every
//! configured source; each source's listing page is mined for detail-page
//! links, each detail page is reduced to a flat record of string fields,
//! and each source's records land in their own JSON result file.
//!
//! ## Usage
//!
//! ```sh
//! keyword_crawler 內線交易 -o ./results
//! ```
//!
//! ## Architecture
//!
//! The pipeline is strictly one-directional:
//! 1. **Seed**: keyword → per-source search URL
//! 2. **Collect**: listing page → deduplicated, routed candidate links
//! 3. **Extract**: detail page → one record per page
//! 4. **Output**: per-source JSON result file, plus the registry's
//!    responsible-person report
//!
//! Fetching is behind the [`fetch::FetchEngine`] trait; everything above it
//! is deterministic and tested against canned documents.

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod adapter;
mod cli;
mod collect;
mod extract;
mod fetch;
mod models;
mod orchestrator;
mod outputs;
mod sources;
mod utils;

use adapter::SourceAdapter;
use cli::Cli;
use fetch::HttpFetcher;
use utils::{ensure_writable_dir, prompt_for_keyword};

/// Keep only the adapters named in `--sources`, in adapter order.
fn select_adapters(
    mut adapters: Vec<SourceAdapter>,
    selection: Option<&[String]>,
) -> Result<Vec<SourceAdapter>, String> {
    let Some(selection) = selection else {
        return Ok(adapters);
    };
    for name in selection {
        if !adapters.iter().any(|a| a.name == name.as_str()) {
            return Err(format!("unknown source: {name}"));
        }
    }
    adapters.retain(|a| selection.iter().any(|name| name.as_str() == a.name));
    Ok(adapters)
}

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("keyword_crawler starting up");

    let args = Cli::parse();
    debug!(?args.keyword, ?args.output_dir, ?args.sources, fail_fast = args.fail_fast, "Parsed CLI arguments");

    // Early check: ensure the output dir is writable
    if let Err(e) = ensure_writable_dir(&args.output_dir).await {
        error!(
            path = %args.output_dir,
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    let keyword = match args.keyword {
        Some(kw) if !kw.is_empty() => Some(kw),
        _ => prompt_for_keyword()?,
    };
    match &keyword {
        Some(kw) => info!(keyword = %kw, "Crawling with keyword"),
        None => info!("No keyword given; every source uses its default search"),
    }

    let adapters = select_adapters(sources::all(), args.sources.as_deref())?;
    info!(
        sources = ?adapters.iter().map(|a| a.name).collect::<Vec<_>>(),
        "Sources selected"
    );

    let fetcher = HttpFetcher::new()?;
    let outcomes = orchestrator::run_all(
        &fetcher,
        &adapters,
        keyword.as_deref(),
        &args.output_dir,
        args.fail_fast,
    )
    .await?;

    for outcome in &outcomes {
        info!(source = outcome.source, count = outcome.records.len(), "Result set complete");
    }

    // Registry report: companies that list a responsible person.
    if let Some(outcome) = outcomes.iter().find(|o| o.source == "registry") {
        let names = sources::registry::companies_with_representative(&outcome.records);
        info!(count = names.len(), "Companies with a responsible person");
        println!("{}", serde_json::to_string(&names)?);
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );
    println!("All crawls finished.");

    Ok(())
}
