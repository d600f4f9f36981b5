use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Failed to parse PDF: {0}")]
    Parse(String),

    #[error("Text extraction failed: {0}")]
    Text(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
