/*!
 * PDF Searchability Detection
 *
 * A PDF that already carries a text layer references fonts; a PDF made only
 * of scanned page images usually does not. The detector scans the raw file
 * as text, counts occurrences of a marker literal inside whitespace-delimited
 * tokens, and calls the file searchable when at least one is found.
 */

use tokio::fs::File;
use tokio::io::{AsyncBufRead, BufReader};
use tracing::debug;

use super::error::OcrError;
use crate::models::SearchabilityResult;
use crate::utils::lines::next_lines;

pub struct SearchabilityDetector {
    marker: String,
}

impl SearchabilityDetector {
    pub fn new(marker: impl Into<String>) -> Result<Self, OcrError> {
        let marker = marker.into();
        if marker.is_empty() {
            return Err(OcrError::EmptyMarker);
        }
        Ok(Self { marker })
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Count marker occurrences in the file at `file_path`.
    ///
    /// The file handle is dropped before returning on every path.
    pub async fn detect(&self, file_path: &str) -> Result<SearchabilityResult, OcrError> {
        let file = File::open(file_path)
            .await
            .map_err(|e| OcrError::file_access(file_path, e))?;

        let occurrences = self
            .count_in_reader(BufReader::new(file))
            .await
            .map_err(|e| OcrError::file_access(file_path, e))?;

        debug!("Found {} occurrences of '{}' in {}", occurrences, self.marker, file_path);
        Ok(SearchabilityResult::from_count(occurrences))
    }

    /// Count marker occurrences in any buffered byte source.
    ///
    /// Lines end at `\n`, `\r\n` or a lone `\r`. Bytes that are not valid
    /// UTF-8 are replaced rather than rejected, since PDFs are mostly binary.
    pub async fn count_in_reader<R>(&self, mut reader: R) -> std::io::Result<u64>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut occurrences = 0u64;
        while let Some(lines) = next_lines(&mut reader).await? {
            for line in &lines {
                occurrences += count_marker_in_line(line, &self.marker);
            }
        }
        Ok(occurrences)
    }
}

/// Count marker occurrences within the whitespace-separated tokens of a line.
///
/// Every position in a token where the marker starts counts, so overlapping
/// matches each count. A marker split across two tokens never counts.
pub fn count_marker_in_line(line: &str, marker: &str) -> u64 {
    if marker.is_empty() || !line.contains(marker) {
        return 0;
    }

    line.split(is_separator)
        .map(|token| count_marker_in_token(token, marker))
        .sum()
}

fn count_marker_in_token(token: &str, marker: &str) -> u64 {
    // Windows are trimmed of characters <= ' ' before comparing, so a marker
    // with such characters at either end can never match.
    if marker.trim_matches(|c: char| c <= ' ').len() != marker.len() {
        return 0;
    }
    let Some(first) = marker.chars().next() else {
        return 0;
    };

    // A window equals the marker exactly when the token continues with the
    // marker at that position; stepping one character past each hit keeps
    // overlapping matches.
    let mut occurrences = 0u64;
    let mut from = 0;
    while let Some(pos) = token[from..].find(marker) {
        occurrences += 1;
        from += pos + first.len_utf8();
    }
    occurrences
}

// Space, tab, LF, VT, FF, CR
fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}
