//! Human-readable run output
//!
//! Two blocks follow the relayed collaborator output: the searchability
//! verdict for PDFs being indexed, then a one-line classification summary for
//! every index run.

use std::io::{self, Write};

use crate::models::{FileCategory, IndexingRequest, PdfScan};

/// Label for the summary line. PDFs are labelled by their searchability.
pub fn summary_label(category: FileCategory, scan: Option<&PdfScan>) -> &'static str {
    match category {
        FileCategory::Pdf => match scan {
            Some(scan) if scan.is_already_searchable() => "pdf already indexed ",
            _ => "NOT yet indexed pdf",
        },
        other => other.label(),
    }
}

pub struct RunReporter<'a> {
    request: &'a IndexingRequest,
}

impl<'a> RunReporter<'a> {
    pub fn new(request: &'a IndexingRequest) -> Self {
        Self { request }
    }

    /// Write every block that applies to this run
    pub fn report<W: Write>(&self, out: &mut W, category: FileCategory, scan: Option<&PdfScan>) -> io::Result<()> {
        if let Some(scan) = scan {
            self.write_searchability(out, scan)?;
        }
        if self.request.is_index() {
            self.write_summary(out, category, scan)?;
        }
        self.write_trailer(out)?;
        out.flush()
    }

    /// Nothing is written for an unreadable file; there is no count to show.
    pub fn write_searchability<W: Write>(&self, out: &mut W, scan: &PdfScan) -> io::Result<()> {
        let PdfScan::Detected(result) = scan else {
            return Ok(());
        };

        writeln!(out)?;
        writeln!(
            out,
            "The string '{}' was found {} times",
            self.request.marker, result.occurrence_count
        )?;
        if result.is_already_searchable {
            writeln!(out, "The file {} is already searchable", self.request.file_path)
        } else {
            writeln!(out, "The file {} is not yet searchable", self.request.file_path)
        }
    }

    pub fn write_summary<W: Write>(&self, out: &mut W, category: FileCategory, scan: Option<&PdfScan>) -> io::Result<()> {
        writeln!(out)?;
        writeln!(
            out,
            "*** The file {}, BEFORE making the potential pdf searchable, was a {} ***",
            self.request.file_path,
            summary_label(category, scan)
        )
    }

    fn write_trailer<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(b"\n\n\n\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IndexingAction, SearchabilityResult};

    fn render(request: &IndexingRequest, category: FileCategory, scan: Option<PdfScan>) -> String {
        let mut out = Vec::new();
        RunReporter::new(request)
            .report(&mut out, category, scan.as_ref())
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_labels() {
        let searchable = PdfScan::Detected(SearchabilityResult::from_count(4));
        let scanned = PdfScan::Detected(SearchabilityResult::from_count(0));

        assert_eq!(summary_label(FileCategory::Pdf, Some(&searchable)), "pdf already indexed ");
        assert_eq!(summary_label(FileCategory::Pdf, Some(&scanned)), "NOT yet indexed pdf");
        assert_eq!(summary_label(FileCategory::Pdf, Some(&PdfScan::Unreadable)), "NOT yet indexed pdf");
        assert_eq!(summary_label(FileCategory::PlainText, None), "txt");
        assert_eq!(summary_label(FileCategory::Xlsx, None), "xlsx");
        assert_eq!(summary_label(FileCategory::UnknownExtension, None), "unknown extension");
    }

    #[test]
    fn test_searchable_pdf_report() {
        let request = IndexingRequest::new("/docs/typed.pdf", "docs", IndexingAction::Index);
        let output = render(
            &request,
            FileCategory::Pdf,
            Some(PdfScan::Detected(SearchabilityResult::from_count(7))),
        );

        assert_eq!(
            output,
            "\nThe string 'Font' was found 7 times\n\
             The file /docs/typed.pdf is already searchable\n\
             \n*** The file /docs/typed.pdf, BEFORE making the potential pdf searchable, was a pdf already indexed  ***\n\
             \n\n\n\n\n"
        );
    }

    #[test]
    fn test_unreadable_pdf_skips_count_block() {
        let request = IndexingRequest::new("/docs/gone.pdf", "docs", IndexingAction::Index);
        let output = render(&request, FileCategory::Pdf, Some(PdfScan::Unreadable));

        assert!(!output.contains("was found"));
        assert!(output.contains("was a NOT yet indexed pdf ***"));
    }

    #[test]
    fn test_deindex_has_no_summary() {
        let request = IndexingRequest::new("/docs/report.txt", "docs", IndexingAction::Deindex);
        let output = render(&request, FileCategory::PlainText, None);

        assert!(!output.contains("BEFORE making"));
        assert_eq!(output, "\n\n\n\n\n");
    }
}
