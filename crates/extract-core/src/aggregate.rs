//! Per-page aggregation of extracted text and tables.

use crate::document::DocumentPages;
use crate::table::{normalize_table, NormalizedTable};

/// Shaped output of one pass over a document's pages.
#[derive(Debug, Clone, PartialEq)]
pub struct PageAggregate {
    /// Concatenated page text with a blank-line separator after each
    /// non-empty page.
    pub text: String,
    /// Normalized tables in page order, then in-page order. Page
    /// provenance is not retained.
    pub tables: Vec<NormalizedTable>,
    pub page_count: usize,
}

/// Walk every page in document order. Non-empty page text is appended
/// followed by exactly one blank line; pages without text contribute
/// nothing, not even a separator. Tables run through the normalizer
/// and only survivors are kept. The page count comes from this single
/// pass over the open document.
pub fn aggregate(doc: &impl DocumentPages) -> PageAggregate {
    let page_count = doc.page_count();
    let mut text = String::new();
    let mut tables = Vec::new();

    for index in 0..page_count {
        if let Some(page_text) = doc.page_text(index) {
            if !page_text.is_empty() {
                text.push_str(page_text);
                text.push_str("\n\n");
            }
        }

        for raw in doc.page_tables(index) {
            if let Some(table) = normalize_table(raw) {
                tables.push(table);
            }
        }
    }

    PageAggregate {
        text,
        tables,
        page_count,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::table::RawTable;

    struct FakeDocument {
        pages: Vec<(Option<String>, Vec<RawTable>)>,
    }

    impl DocumentPages for FakeDocument {
        fn page_count(&self) -> usize {
            self.pages.len()
        }

        fn page_text(&self, index: usize) -> Option<&str> {
            self.pages[index].0.as_deref()
        }

        fn page_tables(&self, index: usize) -> &[RawTable] {
            &self.pages[index].1
        }
    }

    fn table(header: &str) -> RawTable {
        vec![vec![json!(header)]]
    }

    #[test]
    fn pages_and_tables_keep_document_order() {
        let doc = FakeDocument {
            pages: vec![
                (Some("a".to_string()), vec![table("t1")]),
                (Some("b".to_string()), vec![table("t2"), table("t3")]),
            ],
        };

        let agg = aggregate(&doc);
        assert_eq!(agg.text, "a\n\nb\n\n");
        assert_eq!(agg.page_count, 2);

        let headers: Vec<&str> = agg
            .tables
            .iter()
            .map(|t| t.headers[0].as_str())
            .collect();
        assert_eq!(headers, vec!["t1", "t2", "t3"]);
    }

    #[test]
    fn textless_pages_contribute_no_separator() {
        let doc = FakeDocument {
            pages: vec![
                (Some("first".to_string()), vec![]),
                (None, vec![]),
                (Some(String::new()), vec![]),
                (Some("last".to_string()), vec![]),
            ],
        };

        let agg = aggregate(&doc);
        assert_eq!(agg.text, "first\n\nlast\n\n");
        assert_eq!(agg.page_count, 4);
    }

    #[test]
    fn empty_raw_tables_are_filtered_out() {
        let doc = FakeDocument {
            pages: vec![(None, vec![table("kept"), vec![], table("also kept")])],
        };

        let agg = aggregate(&doc);
        assert_eq!(agg.tables.len(), 2);
    }

    #[test]
    fn empty_document_aggregates_to_nothing() {
        let doc = FakeDocument { pages: vec![] };

        let agg = aggregate(&doc);
        assert_eq!(agg.text, "");
        assert!(agg.tables.is_empty());
        assert_eq!(agg.page_count, 0);
    }
}
