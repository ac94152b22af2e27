//! Central News Agency (www.cna.com.tw).
//!
//! Search results link articles from the main result list with site-relative
//! hrefs, so collected links are resolved against the site root before
//! routing. All detail pages share one article template.

use crate::adapter::SourceAdapter;
use crate::collect::{LinkCollector, LinkScope};
use crate::extract::{Extractor, FieldRule, SelectorExtractor};

const BASE_URL: &str = "https://www.cna.com.tw";

/// Build the CNA crawl unit.
pub fn adapter() -> SourceAdapter {
    SourceAdapter {
        name: "cna",
        seed_template: "https://www.cna.com.tw/search/hysearchws.aspx?q={keyword}",
        // 貪汙
        default_seed: "https://www.cna.com.tw/search/hysearchws.aspx?q=%E8%B2%AA%E6%B1%99",
        collector: LinkCollector {
            scope: LinkScope::FlatAnchors { anchors: "ul#jsMainList li a" },
            base_url: Some(BASE_URL),
            routes: vec![(BASE_URL, "article")],
        },
        extractors: vec![(
            "article",
            Extractor::Css(SelectorExtractor {
                rules: vec![
                    FieldRule::first("title", "div.centralContent h1 span"),
                    FieldRule::first("date_time", "div.timeBox div.updatetime span"),
                    FieldRule::paragraphs("content", "div.paragraph p"),
                ],
            }),
        )],
    }
}
