//! JSON result-set output.
//!
//! Each source's completed crawl is serialized as one JSON array of flat
//! string-field objects and written to `{output_dir}/{source}_result.json`.
//! The file is the complete result set for that (source, keyword) run; there
//! are no append semantics.

use crate::models::Record;
use thiserror::Error;
use tokio::fs;
use tracing::{info, instrument};

/// A result set that could not be written.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("serializing result set failed: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("writing result set failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Path of the result file for one source under `output_dir`.
pub fn result_path(output_dir: &str, source: &str) -> String {
    format!("{}/{}_result.json", output_dir.trim_end_matches('/'), source)
}

/// Write one source's result set as a JSON array.
#[instrument(level = "info", skip_all, fields(source = %source, output_dir = %output_dir))]
pub async fn write_result_set(
    output_dir: &str,
    source: &str,
    records: &[Record],
) -> Result<(), WriteError> {
    let json = serde_json::to_string_pretty(records)?;

    fs::create_dir_all(output_dir).await?;
    let path = result_path(output_dir, source);
    fs::write(&path, json).await?;
    info!(path = %path, count = records.len(), "Wrote result set");

    Ok(())
}
