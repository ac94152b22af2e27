//! Output writers for crawl result sets.
//!
//! - [`json`]: one JSON array per source, written once when the source's
//!   crawl finishes.

pub mod json;
