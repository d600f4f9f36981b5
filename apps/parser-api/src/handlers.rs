//! HTTP handlers for the parser API.

use axum::{extract::Multipart, Json};
use tracing::info;

use extract_core::{aggregate, classify, DocumentType, ExtractError, PageAggregate, PdfDocument};

use crate::error::ApiError;
use crate::models::{BatchDocument, BatchResult, ExtractionResult, HealthResponse, Metadata};
use crate::scratch::ScratchFile;

/// Filename reported when an upload part carries none.
const DEFAULT_FILENAME: &str = "document.pdf";

/// Handler: GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "pdf-parser",
    })
}

/// Handler: POST /parse-pdf
///
/// Multipart field `file` carries one PDF. Responds with the full
/// envelope including per-document metadata.
pub async fn parse_pdf(mut multipart: Multipart) -> Result<Json<ExtractionResult>, ApiError> {
    let mut upload: Option<(Vec<u8>, String)> = None;

    while let Some(field) = multipart.next_field().await.map_err(decode_failure)? {
        if field.name() == Some("file") {
            let filename = part_filename(field.file_name());
            let bytes = field.bytes().await.map_err(decode_failure)?;
            upload = Some((bytes.to_vec(), filename));
        }
    }

    let (bytes, filename) = upload.ok_or(ApiError::MissingInput("No file provided"))?;
    info!("Parsing {} ({} bytes)", filename, bytes.len());

    let (agg, document_type) = extract_document(&bytes).map_err(single_failure)?;

    Ok(Json(ExtractionResult {
        ok: true,
        filename: filename.clone(),
        document_type,
        tables: agg.tables,
        text: agg.text,
        metadata: Metadata {
            filename,
            document_type,
            page_count: agg.page_count,
        },
    }))
}

/// Handler: POST /parse-multiple
///
/// Multipart field `files`, repeated once per PDF. Documents are
/// processed strictly in upload order and the first failure aborts
/// the whole batch with no partial results.
pub async fn parse_multiple(mut multipart: Multipart) -> Result<Json<BatchResult>, ApiError> {
    let mut uploads: Vec<(Vec<u8>, String)> = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(decode_failure)? {
        if field.name() == Some("files") {
            let filename = part_filename(field.file_name());
            let bytes = field.bytes().await.map_err(decode_failure)?;
            uploads.push((bytes.to_vec(), filename));
        }
    }

    if uploads.is_empty() {
        return Err(ApiError::MissingInput("No files provided"));
    }

    info!("Parsing batch of {} documents", uploads.len());

    let mut documents = Vec::with_capacity(uploads.len());
    for (bytes, filename) in uploads {
        // Each upload's scratch file is released inside this call,
        // before the next upload is touched.
        let (agg, document_type) = extract_document(&bytes).map_err(batch_failure)?;

        documents.push(BatchDocument {
            filename,
            document_type,
            tables: agg.tables,
            text: agg.text,
        });
    }

    Ok(Json(BatchResult {
        ok: true,
        documents,
    }))
}

/// Persist one upload to a scratch file, run the engine over it, and
/// classify the aggregated text. The scratch file is removed when
/// this returns, success or failure.
fn extract_document(bytes: &[u8]) -> Result<(PageAggregate, DocumentType), ExtractError> {
    let scratch = ScratchFile::create(bytes)?;
    let doc = PdfDocument::open(scratch.path())?;

    let agg = aggregate(&doc);
    let document_type = classify(&agg.text);

    Ok((agg, document_type))
}

fn part_filename(name: Option<&str>) -> String {
    name.filter(|n| !n.is_empty())
        .unwrap_or(DEFAULT_FILENAME)
        .to_string()
}

/// A request body that cannot be decoded is the caller's to fix.
fn decode_failure(err: axum::extract::multipart::MultipartError) -> ApiError {
    ApiError::Multipart(err.to_string())
}

/// Single-document failures carry a diagnostic detail string.
fn single_failure(err: ExtractError) -> ApiError {
    ApiError::Extraction {
        message: err.to_string(),
        details: Some(format!("{err:?}")),
    }
}

/// Batch failures report the message only, with no per-file attribution.
fn batch_failure(err: ExtractError) -> ApiError {
    ApiError::Extraction {
        message: err.to_string(),
        details: None,
    }
}
