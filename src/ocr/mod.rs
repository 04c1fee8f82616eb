pub mod error;
pub mod searchability;

use tracing::{error, info, warn};

use crate::models::{FileCategory, IndexingRequest, PdfScan, ScanFlag};
use crate::ocr::error::OcrError;
use crate::ocr::searchability::SearchabilityDetector;

pub use searchability::count_marker_in_line;

/// Decides whether a file must go through OCR before it is indexed
pub struct OcrService {
    detector: SearchabilityDetector,
}

impl OcrService {
    pub fn new(marker: &str) -> Result<Self, OcrError> {
        Ok(Self {
            detector: SearchabilityDetector::new(marker)?,
        })
    }

    pub fn for_request(request: &IndexingRequest) -> Result<Self, OcrError> {
        Self::new(&request.marker)
    }

    /// Inspect the file when it is a PDF being indexed; `None` otherwise.
    ///
    /// A file that cannot be read is reported as [`PdfScan::Unreadable`],
    /// which downstream treats as not yet searchable.
    pub async fn inspect(&self, request: &IndexingRequest, category: FileCategory) -> Option<PdfScan> {
        if !category.is_pdf() || !request.is_index() {
            return None;
        }

        match self.detector.detect(&request.file_path).await {
            Ok(result) => {
                info!(
                    "'{}' found {} times in {}",
                    self.detector.marker(),
                    result.occurrence_count,
                    request.file_path
                );
                Some(PdfScan::Detected(result))
            }
            Err(e) => {
                error!("❌ {}", e);
                warn!("Treating {} as not yet searchable", request.file_path);
                Some(PdfScan::Unreadable)
            }
        }
    }
}

/// Flag sent to the collaborator. Only a PDF being indexed that shows no
/// text layer is marked as scanned.
pub fn scan_flag_for(scan: Option<&PdfScan>) -> ScanFlag {
    match scan {
        Some(scan) if !scan.is_already_searchable() => ScanFlag::Scanned,
        _ => ScanFlag::NotScanned,
    }
}
