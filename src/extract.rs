//! Detail-page field extraction.
//!
//! Each source registers one [`Extractor`] per detail-page template. An
//! extractor turns a parsed document into a [`Record`] with the source's
//! full field schema. Extraction never fails: a selector that matches
//! nothing yields an empty string for that field and the record is emitted
//! anyway.
//!
//! Two extractor shapes cover all sources:
//!
//! - [`SelectorExtractor`] (news articles): per-field CSS selector rules
//!   with an optional fallback selector, plus the page URL appended as a
//!   `page_url` field.
//! - [`LabeledRowExtractor`] (registry pages): table rows addressed by the
//!   label text in their first cell, extracting the second cell's text.

use crate::models::Record;
use scraper::{ElementRef, Html, Selector};

/// How a field's matched fragments become one string value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextMode {
    /// Take only the first matched element's text, trimmed.
    First,
    /// Trim every matched element's text, drop empties, join with `\n`.
    Paragraphs,
}

/// One field of a [`SelectorExtractor`]: where to look and how to join.
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub name: &'static str,
    pub primary: &'static str,
    pub fallback: Option<&'static str>,
    pub mode: TextMode,
}

impl FieldRule {
    /// A first-fragment field (titles, timestamps).
    pub fn first(name: &'static str, primary: &'static str) -> Self {
        Self { name, primary, fallback: None, mode: TextMode::First }
    }

    /// A joined-paragraphs field (article bodies).
    pub fn paragraphs(name: &'static str, primary: &'static str) -> Self {
        Self { name, primary, fallback: None, mode: TextMode::Paragraphs }
    }

    /// Attach a fallback selector, tried when the primary matches nothing.
    pub fn or_else(mut self, fallback: &'static str) -> Self {
        self.fallback = Some(fallback);
        self
    }
}

/// Trim fragments, drop the ones that trim to nothing, join with newlines.
pub fn join_paragraphs<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fragments
        .into_iter()
        .map(|f| f.as_ref().trim().to_string())
        .filter(|f| !f.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>()
}

/// Collect the text of every element matching `selector`.
fn select_fragments(document: &Html, selector: &str) -> Vec<String> {
    let selector = Selector::parse(selector).unwrap();
    document.select(&selector).map(element_text).collect()
}

/// CSS-selector-driven extractor for article-style detail pages.
///
/// Produces one field per rule plus a trailing `page_url` field holding the
/// originating URL.
#[derive(Debug, Clone)]
pub struct SelectorExtractor {
    pub rules: Vec<FieldRule>,
}

impl SelectorExtractor {
    fn extract(&self, document: &Html, page_url: &str) -> Record {
        let mut record = Record::new();
        for rule in &self.rules {
            let mut fragments = select_fragments(document, rule.primary);
            if fragments.is_empty() {
                if let Some(fallback) = rule.fallback {
                    fragments = select_fragments(document, fallback);
                }
            }
            let value = match rule.mode {
                TextMode::First => fragments
                    .first()
                    .map(|f| f.trim().to_string())
                    .unwrap_or_default(),
                TextMode::Paragraphs => join_paragraphs(fragments),
            };
            record.insert(rule.name, value);
        }
        record.insert("page_url", page_url.to_string());
        record
    }
}

/// Label-addressed extractor for registry basic-data tables.
///
/// For each `(field name, label substring)` pair, finds the first row whose
/// label cell text contains the substring and joins the second cell's text
/// fragments with single spaces. Rows and labels that never appear yield
/// empty strings.
#[derive(Debug, Clone)]
pub struct LabeledRowExtractor {
    /// Selector for the candidate rows, e.g. `table#basic-data tr`.
    pub rows: &'static str,
    /// Selector for the label inside a row, e.g. `td strong`.
    pub label: &'static str,
    /// `(field name, label substring)` pairs in schema order.
    pub fields: Vec<(&'static str, &'static str)>,
}

impl LabeledRowExtractor {
    fn extract(&self, document: &Html) -> Record {
        let row_selector = Selector::parse(self.rows).unwrap();
        let label_selector = Selector::parse(self.label).unwrap();
        let cell_selector = Selector::parse("td").unwrap();

        let rows: Vec<ElementRef<'_>> = document.select(&row_selector).collect();
        let mut record = Record::new();
        for (name, label) in &self.fields {
            let value = rows
                .iter()
                .find(|row| {
                    row.select(&label_selector)
                        .any(|cell| element_text(cell).contains(label))
                })
                .and_then(|row| row.select(&cell_selector).nth(1))
                .map(|cell| {
                    cell.text()
                        .map(str::trim)
                        .filter(|t| !t.is_empty())
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .unwrap_or_default();
            record.insert(name, value);
        }
        record
    }
}

/// A registered detail-page extractor, dispatched by destination tag.
#[derive(Debug, Clone)]
pub enum Extractor {
    Css(SelectorExtractor),
    LabeledRows(LabeledRowExtractor),
}

impl Extractor {
    /// Extract one [`Record`] from a parsed detail page.
    pub fn extract(&self, document: &Html, page_url: &str) -> Record {
        match self {
            Extractor::Css(extractor) => extractor.extract(document, page_url),
            Extractor::LabeledRows(extractor) => extractor.extract(document),
        }
    }
}
