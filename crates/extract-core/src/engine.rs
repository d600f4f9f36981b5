//! Concrete extraction engine backed by lopdf and pdf-extract.

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use crate::document::DocumentPages;
use crate::error::ExtractError;
use crate::table::RawTable;

/// An opened PDF with its extraction front-loaded: lopdf validates
/// the document and supplies the page count, pdf-extract supplies
/// per-page text.
///
/// This engine exposes text and page count only. Table-grid inference
/// is external-engine territory; a table-capable engine plugs in
/// behind [`DocumentPages`] without touching the pipeline.
#[derive(Debug)]
pub struct PdfDocument {
    page_texts: Vec<String>,
    page_count: usize,
}

impl PdfDocument {
    /// Open and extract a PDF from disk.
    pub fn open(path: &Path) -> Result<Self, ExtractError> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Open and extract a PDF already in memory.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ExtractError> {
        let doc = lopdf::Document::load_mem(bytes)
            .map_err(|e| ExtractError::Parse(e.to_string()))?;
        let page_count = doc.get_pages().len();

        let page_texts = extract_page_texts(bytes)?;

        Ok(Self {
            page_texts,
            page_count,
        })
    }
}

impl DocumentPages for PdfDocument {
    fn page_count(&self) -> usize {
        self.page_count
    }

    fn page_text(&self, index: usize) -> Option<&str> {
        self.page_texts.get(index).map(String::as_str)
    }

    fn page_tables(&self, _index: usize) -> &[RawTable] {
        &[]
    }
}

/// pdf-extract panics on some malformed documents, so the call runs
/// behind an unwind boundary.
fn extract_page_texts(bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
    let owned = bytes.to_vec();
    let result = panic::catch_unwind(AssertUnwindSafe(move || {
        pdf_extract::extract_text_from_mem_by_pages(&owned)
    }));

    match result {
        Ok(Ok(pages)) => Ok(pages),
        Ok(Err(e)) => Err(ExtractError::Text(e.to_string())),
        Err(_) => Err(ExtractError::Text(
            "extraction panicked on malformed document".into(),
        )),
    }
}
