//! PDF extraction and response shaping.
//!
//! The geometric work (glyph positioning, line detection, table-grid
//! inference) is delegated to an extraction engine behind the
//! [`DocumentPages`] trait. This crate owns the pipeline that turns
//! raw per-page engine output into the service's stable contract:
//!
//! - document classification by keyword matching ([`classify`])
//! - table normalization into `{headers, rows}` ([`normalize_table`])
//! - per-page aggregation of text and tables ([`aggregate`])
//!
//! A concrete engine backed by lopdf and pdf-extract is provided as
//! [`PdfDocument`]; any other engine that can report a page count,
//! per-page text, and per-page raw tables is substitutable.

pub mod aggregate;
pub mod classify;
pub mod document;
pub mod engine;
pub mod error;
pub mod table;

pub use aggregate::{aggregate, PageAggregate};
pub use classify::{classify, DocumentType};
pub use document::DocumentPages;
pub use engine::PdfDocument;
pub use error::ExtractError;
pub use table::{normalize_table, NormalizedTable, RawCell, RawTable};
