//! The extraction-engine seam.

use crate::table::RawTable;

/// One opened document as exposed by an extraction engine.
///
/// Any engine that can report a page count, per-page text, and
/// per-page raw tables can sit behind the shaping pipeline. Indexes
/// passed to the per-page methods are always `< page_count()`.
pub trait DocumentPages {
    /// Total number of pages in the document.
    fn page_count(&self) -> usize;

    /// Extracted text for the page at `index`. `None` and the empty
    /// string both mean the page contributed no text.
    fn page_text(&self, index: usize) -> Option<&str>;

    /// Raw tables found on the page at `index`, in extraction order.
    fn page_tables(&self, index: usize) -> &[RawTable];
}
