//! Wire types for the parser API.

use extract_core::{DocumentType, NormalizedTable};
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// Response envelope for the single-document path.
#[derive(Serialize)]
pub struct ExtractionResult {
    pub ok: bool,
    pub filename: String,
    #[serde(rename = "documentType")]
    pub document_type: DocumentType,
    pub tables: Vec<NormalizedTable>,
    pub text: String,
    pub metadata: Metadata,
}

#[derive(Serialize)]
pub struct Metadata {
    pub filename: String,
    #[serde(rename = "documentType")]
    pub document_type: DocumentType,
    #[serde(rename = "pageCount")]
    pub page_count: usize,
}

/// One entry in the batch response. The batch contract carries no
/// per-document metadata or page count; existing consumers depend on
/// that shape.
#[derive(Serialize)]
pub struct BatchDocument {
    pub filename: String,
    #[serde(rename = "documentType")]
    pub document_type: DocumentType,
    pub tables: Vec<NormalizedTable>,
    pub text: String,
}

/// Response envelope for the batch path.
#[derive(Serialize)]
pub struct BatchResult {
    pub ok: bool,
    pub documents: Vec<BatchDocument>,
}
