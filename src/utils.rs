//! Small helpers for stdin prompting and output-directory validation.

use std::error::Error;
use std::fs as stdfs;
use std::io::{self, BufRead, Write};
use tokio::fs;
use tracing::{info, instrument};

/// Read a keyword from a line-based reader.
///
/// The line is trimmed; an empty answer becomes `None`, which callers treat
/// as "use each source's default seed".
pub fn read_keyword<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    let keyword = line.trim();
    Ok(if keyword.is_empty() {
        None
    } else {
        Some(keyword.to_string())
    })
}

/// Prompt on stdout and read the keyword from stdin.
pub fn prompt_for_keyword() -> io::Result<Option<String>> {
    print!("Enter a search keyword (blank for defaults): ");
    io::stdout().flush()?;
    read_keyword(&mut io::stdin().lock())
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if needed, then probes it with a throwaway file so
/// permission problems surface before any crawling happens.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<(), Box<dyn Error>> {
    if let Err(e) = fs::create_dir_all(path).await {
        return Err(Box::new(e));
    }
    // Try a small sync write using std fs (simpler error surface)
    let probe_path = format!("{}/..__probe_write__", path.trim_end_matches('/'));
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            info!("Output directory is writable");
            Ok(())
        }
        Err(e) => Err(Box::new(e)),
    }
}
