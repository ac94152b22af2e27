//! Command-line interface definitions.
//!
//! The keyword is the only positional argument; when it is omitted the
//! runner prompts for it on stdin. Everything else is an optional flag.

use clap::Parser;

/// Command-line arguments for the keyword crawler.
///
/// # Examples
///
/// ```sh
/// # Crawl all sources for a keyword
/// keyword_crawler 內線交易
///
/// # Prompt for the keyword, write results elsewhere
/// keyword_crawler -o ./results
///
/// # Registry only, abort on the first failed source
/// keyword_crawler 台積電 --sources registry --fail-fast
/// ```
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Search keyword shared by every source; prompted for when omitted
    pub keyword: Option<String>,

    /// Directory the per-source result files are written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: String,

    /// Comma-separated subset of sources to crawl (default: all)
    #[arg(long, value_delimiter = ',')]
    pub sources: Option<Vec<String>>,

    /// Abort the whole run when one source's seed fetch fails
    #[arg(long)]
    pub fail_fast: bool,
}
