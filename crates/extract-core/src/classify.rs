//! Coarse document classification by full-text keyword matching.

use std::fmt;

use serde::Serialize;

/// Document category derived from the extracted text. Recomputed on
/// every classification, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DocumentType {
    Invoice,
    Approval,
    #[serde(rename = "Claim Form")]
    ClaimForm,
    Unknown,
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DocumentType::Invoice => "Invoice",
            DocumentType::Approval => "Approval",
            DocumentType::ClaimForm => "Claim Form",
            DocumentType::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

/// Classify a document by ordered substring matching over its full
/// text. First matching rule wins; no further rules are tried.
pub fn classify(text: &str) -> DocumentType {
    let lower = text.to_lowercase();
    if lower.contains("invoice") {
        DocumentType::Invoice
    } else if lower.contains("approval") || lower.contains("pre-approval") {
        DocumentType::Approval
    } else if lower.contains("claim form") || lower.contains("patient name") {
        DocumentType::ClaimForm
    } else {
        DocumentType::Unknown
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn invoice_wins_over_approval_in_both_orders() {
        assert_eq!(
            classify("invoice pending approval"),
            DocumentType::Invoice
        );
        assert_eq!(
            classify("approval attached to invoice"),
            DocumentType::Invoice
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classify("INVOICE #123"), DocumentType::Invoice);
        assert_eq!(classify("invoice #123"), DocumentType::Invoice);
        assert_eq!(classify("Pre-Approval Letter"), DocumentType::Approval);
    }

    #[test]
    fn every_trigger_keyword_classifies() {
        assert_eq!(classify("your invoice is due"), DocumentType::Invoice);
        assert_eq!(classify("final approval granted"), DocumentType::Approval);
        assert_eq!(classify("pre-approval notice"), DocumentType::Approval);
        assert_eq!(classify("attached claim form"), DocumentType::ClaimForm);
        assert_eq!(classify("Patient Name: Jane Doe"), DocumentType::ClaimForm);
    }

    #[test]
    fn unmatched_text_is_unknown() {
        assert_eq!(classify("quarterly report"), DocumentType::Unknown);
        assert_eq!(classify(""), DocumentType::Unknown);
    }

    #[test]
    fn claim_form_serializes_with_space() {
        let json = serde_json::to_string(&DocumentType::ClaimForm).unwrap();
        assert_eq!(json, "\"Claim Form\"");
        let json = serde_json::to_string(&DocumentType::Invoice).unwrap();
        assert_eq!(json, "\"Invoice\"");
    }
}
