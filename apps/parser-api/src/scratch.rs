//! Scratch-file lifecycle for uploaded documents.

use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// An uploaded document persisted to disk for the extraction engine.
///
/// The file is scoped to one handler call and removed when the value
/// drops, on every exit path.
pub struct ScratchFile {
    file: NamedTempFile,
}

impl ScratchFile {
    pub fn create(bytes: &[u8]) -> io::Result<Self> {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile()?;
        file.write_all(bytes)?;
        file.flush()?;
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn file_holds_upload_bytes_while_alive() {
        let scratch = ScratchFile::create(b"%PDF-1.4 test").unwrap();
        let on_disk = std::fs::read(scratch.path()).unwrap();
        assert_eq!(on_disk, b"%PDF-1.4 test");
    }

    #[test]
    fn file_is_removed_on_drop() {
        let scratch = ScratchFile::create(b"payload").unwrap();
        let path = scratch.path().to_path_buf();
        assert!(path.exists());

        drop(scratch);
        assert!(!path.exists());
    }
}
