/// Error types for clipboard ingestion, renaming and export
///
/// Ingestion and export errors are always recovered by the caller:
/// they end up as status text or in the export report, never as a crash.

use std::path::PathBuf;
use thiserror::Error;

/// Why a paste did not produce a new record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestError {
    /// The clipboard holds nothing that looks like an image
    #[error("No image in clipboard")]
    NoImage,
    /// The clipboard holds file references instead of pixels
    #[error("Clipboard holds files, not image data")]
    NotAnImage,
    /// The clipboard could not be read or decoded
    #[error("Clipboard read failed: {0}")]
    IngestFailed(String),
}

/// Failure reported by a clipboard backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardReadError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("malformed clipboard image: {0}")]
    Malformed(String),
}

impl From<ClipboardReadError> for IngestError {
    fn from(err: ClipboardReadError) -> Self {
        IngestError::IngestFailed(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenameError {
    #[error("index {index} is out of range for {len} images")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Per-item export failure; the batch keeps going after one of these
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportItemError {
    #[error("{file_name}: encode failed: {message}")]
    EncodeFailed { file_name: String, message: String },
    #[error("{file_name}: {message}")]
    WriteFailed { file_name: String, message: String },
}

impl ExportItemError {
    /// Name of the file the failed item was headed for
    pub fn file_name(&self) -> &str {
        match self {
            ExportItemError::EncodeFailed { file_name, .. }
            | ExportItemError::WriteFailed { file_name, .. } => file_name,
        }
    }
}

/// Conditions that stop an export before any file is touched
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("No images to export")]
    NothingToExport,
    #[error("Export folder does not exist: {}", .0.display())]
    MissingDirectory(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipboard_error_becomes_ingest_failed() {
        let err: IngestError = ClipboardReadError::Unavailable("no display".into()).into();
        assert_eq!(
            err,
            IngestError::IngestFailed("clipboard unavailable: no display".to_string())
        );
    }

    #[test]
    fn test_item_error_messages() {
        let err = ExportItemError::WriteFailed {
            file_name: "photo.jpg".into(),
            message: "permission denied".into(),
        };
        assert_eq!(err.file_name(), "photo.jpg");
        assert_eq!(err.to_string(), "photo.jpg: permission denied");
    }
}
