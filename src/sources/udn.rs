//! United Daily News (udn.com).
//!
//! Search results render one `div.story-list__news` block per hit; only the
//! headline anchor inside each block is a candidate link (the image anchor
//! duplicates it). Article bodies normally live in the editor section, with
//! the bare article container as fallback for older page layouts.

use crate::adapter::SourceAdapter;
use crate::collect::{LinkCollector, LinkScope};
use crate::extract::{Extractor, FieldRule, SelectorExtractor};

/// Build the UDN crawl unit.
pub fn adapter() -> SourceAdapter {
    SourceAdapter {
        name: "udn",
        seed_template: "https://udn.com/search/word/2/{keyword}",
        // 內線交易
        default_seed: "https://udn.com/search/word/2/%E5%85%A7%E7%B7%9A%E4%BA%A4%E6%98%93",
        collector: LinkCollector {
            scope: LinkScope::FirstAnchorPerBlock {
                blocks: "div.story-list__news",
                anchor: "h2 a",
            },
            base_url: None,
            routes: vec![("https://udn.com/", "article")],
        },
        extractors: vec![(
            "article",
            Extractor::Css(SelectorExtractor {
                rules: vec![
                    FieldRule::first("title", ".article-content__title"),
                    FieldRule::first("date_time", ".article-content__time"),
                    FieldRule::paragraphs("content", "section.article-content__editor p")
                        .or_else("article.article-content p"),
                ],
            }),
        )],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_seed_url() {
        let adapter = adapter();
        assert_eq!(adapter.seed(Some("台積電")), "https://udn.com/search/word/2/%E5%8F%B0%E7%A9%8D%E9%9B%BB");
        assert_eq!(adapter.seed(None), "https://udn.com/search/word/2/%E5%85%A7%E7%B7%9A%E4%BA%A4%E6%98%93");
    }

    #[test]
    fn test_listing_takes_first_anchor_per_story_block() {
        let listing = r#"
            <div class="story-list__news">
              <h2><a href="https://udn.com/news/story/1">headline</a></h2>
              <div class="story-list__image"><a href="https://udn.com/news/story/1?img">img</a></div>
            </div>
            <div class="story-list__news"><p>no headline link</p></div>
            <div class="story-list__news">
              <h2><a href="https://udn.com/news/story/2">headline</a></h2>
            </div>"#;
        let document = Html::parse_document(listing);
        let links = adapter().collector.collect(&document);
        assert_eq!(
            links,
            vec![
                ("https://udn.com/news/story/1".to_string(), "article"),
                ("https://udn.com/news/story/2".to_string(), "article"),
            ]
        );
    }

    #[test]
    fn test_detail_extraction_prefers_editor_section() {
        let detail = r#"
            <h1 class="article-content__title">標題</h1>
            <time class="article-content__time">2024-12-31 11:08</time>
            <section class="article-content__editor"><p>主文</p></section>
            <article class="article-content"><p>不該被選到</p></article>"#;
        let document = Html::parse_document(detail);
        let adapter = adapter();
        let (_, extractor) = &adapter.extractors[0];
        let record = extractor.extract(&document, "https://udn.com/news/story/1");
        assert_eq!(record.get("title"), "標題");
        assert_eq!(record.get("date_time"), "2024-12-31 11:08");
        assert_eq!(record.get("content"), "主文");
    }

    #[test]
    fn test_detail_extraction_falls_back_to_article_container() {
        let detail = r#"
            <h1 class="article-content__title">標題</h1>
            <article class="article-content"><p>舊版版面</p></article>"#;
        let document = Html::parse_document(detail);
        let adapter = adapter();
        let (_, extractor) = &adapter.extractors[0];
        let record = extractor.extract(&document, "https://udn.com/news/story/1");
        assert_eq!(record.get("content"), "舊版版面");
        assert_eq!(record.get("date_time"), "");
    }
}
