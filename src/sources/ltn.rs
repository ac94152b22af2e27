//! Liberty Times (ltn.com.tw).
//!
//! The search listing links out to two different detail-page layouts
//! depending on subdomain: business news on `ec.ltn.com.tw` and general
//! news on `news.ltn.com.tw`. Each gets its own destination tag and
//! extractor; links to any other LTN property are dropped.

use crate::adapter::SourceAdapter;
use crate::collect::{LinkCollector, LinkScope};
use crate::extract::{Extractor, FieldRule, SelectorExtractor};

/// Build the LTN crawl unit.
pub fn adapter() -> SourceAdapter {
    SourceAdapter {
        name: "ltn",
        seed_template: "https://search.ltn.com.tw/list?keyword={keyword}",
        // 內線交易
        default_seed: "https://search.ltn.com.tw/list?keyword=%E5%85%A7%E7%B7%9A%E4%BA%A4%E6%98%93",
        collector: LinkCollector {
            scope: LinkScope::FlatAnchors { anchors: "ul.list.boxTitle li a" },
            base_url: None,
            routes: vec![
                ("https://ec.ltn.com.tw/", "ec"),
                ("https://news.ltn.com.tw/", "news"),
            ],
        },
        extractors: vec![
            (
                "ec",
                Extractor::Css(SelectorExtractor {
                    rules: vec![
                        FieldRule::first("title", "div.whitecon.boxTitle.boxText h1"),
                        FieldRule::first("date_time", "div.function span.time"),
                        FieldRule::paragraphs("content", "div.text p"),
                    ],
                }),
            ),
            (
                "news",
                Extractor::Css(SelectorExtractor {
                    rules: vec![
                        FieldRule::first("title", "div.whitecon.article h1"),
                        FieldRule::first("date_time", "div.text.boxTitle.boxText span.time"),
                        FieldRule::paragraphs("content", "div.text.boxTitle.boxText p"),
                    ],
                }),
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_seed_url() {
        let adapter = adapter();
        assert_eq!(
            adapter.seed(Some("test")),
            "https://search.ltn.com.tw/list?keyword=test"
        );
        assert_eq!(
            adapter.seed(Some("")),
            "https://search.ltn.com.tw/list?keyword=%E5%85%A7%E7%B7%9A%E4%BA%A4%E6%98%93"
        );
    }

    #[test]
    fn test_listing_routes_by_subdomain() {
        let listing = r#"
            <ul class="list boxTitle">
              <li><a href="https://ec.ltn.com.tw/article/paper/1">ec</a></li>
              <li><a href="https://news.ltn.com.tw/news/society/1">news</a></li>
              <li><a href="https://sports.ltn.com.tw/news/1">sports, unrouted</a></li>
              <li><a href="https://ec.ltn.com.tw/article/paper/1">duplicate</a></li>
            </ul>"#;
        let document = Html::parse_document(listing);
        let links = adapter().collector.collect(&document);
        assert_eq!(
            links,
            vec![
                ("https://ec.ltn.com.tw/article/paper/1".to_string(), "ec"),
                ("https://news.ltn.com.tw/news/society/1".to_string(), "news"),
            ]
        );
    }

    fn extractor_for<'a>(adapter: &'a SourceAdapter, tag: &str) -> &'a Extractor {
        &adapter.extractors.iter().find(|(t, _)| *t == tag).unwrap().1
    }

    #[test]
    fn test_ec_detail_extraction() {
        let detail = r#"
            <div class="whitecon boxTitle boxText"><h1>經濟版標題</h1></div>
            <div class="function"><span class="time">2024/12/07 10:56</span></div>
            <div class="text"><p>段落一</p><p> 段落二 </p></div>"#;
        let document = Html::parse_document(detail);
        let record = extractor_for(&adapter(), "ec")
            .extract(&document, "https://ec.ltn.com.tw/article/paper/1");
        assert_eq!(record.get("title"), "經濟版標題");
        assert_eq!(record.get("date_time"), "2024/12/07 10:56");
        assert_eq!(record.get("content"), "段落一\n段落二");
    }

    #[test]
    fn test_news_detail_extraction() {
        let detail = r#"
            <div class="whitecon article"><h1>社會版標題</h1></div>
            <div class="text boxTitle boxText">
              <span class="time">2024/12/08 09:00</span>
              <p>內文</p>
            </div>"#;
        let document = Html::parse_document(detail);
        let record = extractor_for(&adapter(), "news")
            .extract(&document, "https://news.ltn.com.tw/news/society/1");
        assert_eq!(record.get("title"), "社會版標題");
        assert_eq!(record.get("date_time"), "2024/12/08 09:00");
        assert_eq!(record.get("content"), "內文");
    }
}
