use thiserror::Error;

/// Failures while deciding whether a PDF needs OCR
#[derive(Error, Debug)]
pub enum OcrError {
    #[error("Cannot read '{path}' for searchability detection: {source}")]
    FileAccess {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Searchability marker must not be empty")]
    EmptyMarker,
}

impl OcrError {
    pub fn file_access(path: impl Into<String>, source: std::io::Error) -> Self {
        OcrError::FileAccess { path: path.into(), source }
    }

    pub fn is_file_access(&self) -> bool {
        matches!(self, OcrError::FileAccess { .. })
    }
}
