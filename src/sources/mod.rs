//! Crawl configurations for the supported sites.
//!
//! Each submodule builds the [`SourceAdapter`] for one site: its seed-URL
//! template, its listing-page link rules, and its detail-page extractors.
//! Adding a site means adding a submodule here; the orchestrator never
//! changes.
//!
//! # Supported sources
//!
//! | Source | Module | Listing | Detail templates | Record fields |
//! |--------|--------|---------|------------------|---------------|
//! | Central News Agency | [`cna`] | flat anchor list | one | title, date_time, content, page_url |
//! | United Daily News | [`udn`] | first anchor per story block | one | title, date_time, content, page_url |
//! | Liberty Times | [`ltn`] | flat anchor list | two (ec / news subdomains) | title, date_time, content, page_url |
//! | Company registry (twincn) | [`registry`] | first anchor per table row | one | company_id, company_name_cn, company_name_en, representative, address, industry |

use crate::adapter::SourceAdapter;

pub mod cna;
pub mod ltn;
pub mod registry;
pub mod udn;

/// All adapters in the order the session runner crawls them.
pub fn all() -> Vec<SourceAdapter> {
    vec![
        cna::adapter(),
        udn::adapter(),
        ltn::adapter(),
        registry::adapter(),
    ]
}
