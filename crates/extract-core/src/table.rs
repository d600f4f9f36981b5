//! Normalization of raw engine tables into the response contract.

use serde::Serialize;
use serde_json::Value;

/// A single cell as produced by the extraction engine: null or any
/// scalar. Transient, consumed within one normalization call.
pub type RawCell = Value;

/// One extracted table: ordered rows of possibly-null cells.
pub type RawTable = Vec<Vec<RawCell>>;

/// A table reshaped for the response: first raw row as headers, the
/// rest as data rows, every cell coerced to a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Normalize one raw table. Empty tables are skipped entirely rather
/// than defaulted, so they never appear in the output sequence. A
/// single-row table keeps its headers and carries no data rows; that
/// is valid output, not an error.
pub fn normalize_table(table: &RawTable) -> Option<NormalizedTable> {
    let (first, rest) = table.split_first()?;
    Some(NormalizedTable {
        headers: first.iter().map(coerce_cell).collect(),
        rows: rest
            .iter()
            .map(|row| row.iter().map(coerce_cell).collect())
            .collect(),
    })
}

/// Null becomes the empty string so sparse rows keep their width;
/// strings pass through verbatim; other scalars use their JSON form.
fn coerce_cell(cell: &RawCell) -> String {
    match cell {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
