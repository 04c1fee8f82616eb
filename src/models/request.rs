use std::fmt;

/// Literal whose occurrences decide whether a PDF already carries text
pub const DEFAULT_MARKER: &str = "Font";

/// What the collaborator should do with the file on the search core
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum IndexingAction {
    /// Add the file to the core
    Index,
    /// Remove the file from the core
    Deindex,
}

impl IndexingAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndexingAction::Index => "index",
            IndexingAction::Deindex => "deindex",
        }
    }
}

impl fmt::Display for IndexingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One invocation's worth of input. Never mutated once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexingRequest {
    /// Absolute path of the file, as given by the caller
    pub file_path: String,
    /// Search-engine core the file is indexed into or removed from
    pub core_name: String,
    pub action: IndexingAction,
    pub marker: String,
}

impl IndexingRequest {
    pub fn new(file_path: impl Into<String>, core_name: impl Into<String>, action: IndexingAction) -> Self {
        Self {
            file_path: file_path.into(),
            core_name: core_name.into(),
            action,
            marker: DEFAULT_MARKER.to_string(),
        }
    }

    pub fn is_index(&self) -> bool {
        self.action == IndexingAction::Index
    }
}

/// Result of counting marker occurrences in a PDF
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchabilityResult {
    pub occurrence_count: u64,
    pub is_already_searchable: bool,
}

impl SearchabilityResult {
    pub fn from_count(occurrence_count: u64) -> Self {
        Self {
            occurrence_count,
            is_already_searchable: occurrence_count > 0,
        }
    }
}

/// Outcome of inspecting a PDF slated for indexing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PdfScan {
    Detected(SearchabilityResult),
    /// The file could not be opened or read; handled as not yet searchable
    Unreadable,
}

impl PdfScan {
    pub fn is_already_searchable(&self) -> bool {
        match self {
            PdfScan::Detected(result) => result.is_already_searchable,
            PdfScan::Unreadable => false,
        }
    }
}

/// Flag handed to the collaborator telling it to run OCR before indexing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanFlag {
    /// File already has extractable text (or is not a PDF being indexed)
    NotScanned,
    /// PDF needs OCR before indexing
    Scanned,
}

impl ScanFlag {
    pub fn as_arg(&self) -> &'static str {
        match self {
            ScanFlag::NotScanned => "0",
            ScanFlag::Scanned => "1",
        }
    }
}

impl fmt::Display for ScanFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_arg())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_default_marker() {
        let request = IndexingRequest::new("/docs/a.pdf", "docs", IndexingAction::Index);
        assert_eq!(request.marker, "Font");
        assert!(request.is_index());
    }

    #[test]
    fn test_searchability_follows_count() {
        assert!(!SearchabilityResult::from_count(0).is_already_searchable);
        assert!(SearchabilityResult::from_count(3).is_already_searchable);
    }

    #[test]
    fn test_unreadable_scan_is_not_searchable() {
        assert!(!PdfScan::Unreadable.is_already_searchable());
    }

    #[test]
    fn test_scan_flag_args() {
        assert_eq!(ScanFlag::Scanned.as_arg(), "1");
        assert_eq!(ScanFlag::NotScanned.to_string(), "0");
        assert_eq!(IndexingAction::Deindex.to_string(), "deindex");
    }
}
