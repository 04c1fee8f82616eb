/*!
 * Single-File Indexing Run
 *
 * Classifies the submitted file, inspects PDFs for an existing text layer,
 * hands the file to the indexing collaborator with the resulting scan flag,
 * and prints the run report. One run handles exactly one file and keeps no
 * state afterwards.
 */

use anyhow::{Context, Result};
use std::io::Write;
use std::sync::Arc;
use tracing::{error, info};

use crate::dispatch::{DispatchError, DispatchOutcome, DispatchRequest, IndexingCollaborator};
use crate::models::{FileCategory, IndexingRequest, PdfScan, ScanFlag};
use crate::ocr::{scan_flag_for, OcrService};
use crate::report::RunReporter;
use crate::utils::file_type::classify;

/// Everything decided and observed during one run
#[derive(Debug)]
pub struct RunSummary {
    pub request: IndexingRequest,
    pub category: FileCategory,
    /// Present only for a PDF being indexed
    pub scan: Option<PdfScan>,
    pub is_scanned: ScanFlag,
    pub dispatch: Result<DispatchOutcome, DispatchError>,
}

impl RunSummary {
    pub fn dispatch_succeeded(&self) -> bool {
        self.dispatch.is_ok()
    }
}

pub struct IndexingRunService {
    collaborator: Arc<dyn IndexingCollaborator>,
}

impl IndexingRunService {
    pub fn new(collaborator: Arc<dyn IndexingCollaborator>) -> Self {
        Self { collaborator }
    }

    /// Execute the run, writing relayed collaborator output and the report to `out`.
    ///
    /// Unreadable PDFs and collaborator launch failures are logged and the
    /// run continues; only failing to write to `out` aborts it.
    pub async fn run<W>(&self, request: IndexingRequest, out: &mut W) -> Result<RunSummary>
    where
        W: Write + Send,
    {
        let category = classify(&request.file_path);
        info!(
            "Classified {} as {} ({:?})",
            request.file_path,
            category,
            category.family()
        );

        let ocr_service = OcrService::for_request(&request)?;
        let scan = ocr_service.inspect(&request, category).await;
        let is_scanned = scan_flag_for(scan.as_ref());

        let dispatch_request = DispatchRequest {
            file_path: request.file_path.clone(),
            is_scanned,
            core_name: request.core_name.clone(),
            action: request.action,
        };

        let dispatch = self.collaborator.process(&dispatch_request, &mut *out).await;
        match &dispatch {
            Ok(outcome) => info!(
                "✅ {} collaborator finished: {} stdout lines, {} stderr lines, exit code {:?}",
                self.collaborator.collaborator_type(),
                outcome.relayed_stdout_lines.len(),
                outcome.relayed_stderr_lines.len(),
                outcome.exit_code
            ),
            Err(e) => error!("❌ {}", e),
        }

        RunReporter::new(&request)
            .report(out, category, scan.as_ref())
            .context("Failed to write run report")?;

        Ok(RunSummary {
            request,
            category,
            scan,
            is_scanned,
            dispatch,
        })
    }
}
