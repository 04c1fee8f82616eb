/*!
 * File Type Classification
 *
 * Resolves the category of a file from the suffix of its path. Only the
 * final path component is considered, and either separator style is
 * accepted so Windows-style paths from shared folders classify the same way.
 */

use crate::models::FileCategory;

/// Extension of `path` without the dot, if it has one.
///
/// The dot must come after the last `/` or `\`; a dot inside a directory
/// name does not make an extension.
pub fn extract_extension(path: &str) -> Option<&str> {
    let dot = path.rfind('.')?;
    match path.rfind(&['/', '\\'][..]) {
        Some(separator) if dot <= separator => None,
        _ => Some(&path[dot + 1..]),
    }
}

/// Classify a file path. Never fails; unrecognised input is `UnknownExtension`.
pub fn classify(path: &str) -> FileCategory {
    match extract_extension(path) {
        Some(extension) => FileCategory::from_extension(&extension.to_lowercase()),
        None => FileCategory::UnknownExtension,
    }
}
