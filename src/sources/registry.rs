//! Company registry lookup (www.twincn.com).
//!
//! Search results are a striped table with one company per row; the second
//! cell links to the company's detail page. Detail pages carry a
//! `basic-data` table of labeled rows, so fields are addressed by the label
//! text in the row's first cell rather than by structural selectors.

use crate::adapter::SourceAdapter;
use crate::collect::{LinkCollector, LinkScope};
use crate::extract::{Extractor, LabeledRowExtractor};
use crate::models::Record;

const BASE_URL: &str = "https://www.twincn.com/";

/// Build the registry crawl unit.
pub fn adapter() -> SourceAdapter {
    SourceAdapter {
        name: "registry",
        seed_template: "https://www.twincn.com/Lq.aspx?q={keyword}",
        // 台積電
        default_seed: "https://www.twincn.com/Lq.aspx?q=%E5%8F%B0%E7%A9%8D%E9%9B%BB",
        collector: LinkCollector {
            scope: LinkScope::FirstAnchorPerBlock {
                blocks: "table.table-striped tbody tr",
                anchor: "td:nth-child(2) a",
            },
            base_url: Some(BASE_URL),
            routes: vec![(BASE_URL, "company")],
        },
        extractors: vec![(
            "company",
            Extractor::LabeledRows(LabeledRowExtractor {
                rows: "table#basic-data tr",
                label: "td strong",
                fields: vec![
                    ("company_id", "統一編號"),
                    ("company_name_cn", "公司名稱"),
                    ("company_name_en", "英文名稱"),
                    ("representative", "代表人姓名"),
                    ("address", "公司所在地"),
                    ("industry", "所營事業資料"),
                ],
            }),
        )],
    }
}

/// Project the Chinese company names of records with a responsible person.
///
/// Records whose `representative` field is empty after trimming are
/// excluded.
pub fn companies_with_representative(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .filter(|record| !record.get("representative").trim().is_empty())
        .map(|record| record.get("company_name_cn").to_string())
        .collect()
}
