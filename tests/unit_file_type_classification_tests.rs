/*!
 * Unit Tests for File Type Classification
 *
 * These tests verify that file paths resolve to the right category, and so to
 * the right OCR decision, regardless of extension case or directory names.
 */

#[cfg(test)]
mod tests {
    use scanindex::models::FileCategory;
    use scanindex::utils::file_type::classify;

    #[test]
    fn test_documented_examples() {
        assert_eq!(classify("/a/b/report"), FileCategory::UnknownExtension, "No extension");
        assert_eq!(classify("/a.b/report"), FileCategory::UnknownExtension, "Dot before last separator");
        assert_eq!(classify("/a/b/FILE.PDF"), FileCategory::Pdf, "Upper-case PDF");
    }

    #[test]
    fn test_every_documented_extension_is_recognised() {
        let extensions = [
            "pdf", "txt", "htm", "html", "csv", "xml", "json", "doc", "docx", "ppt", "pptx", "xls",
            "xlsx", "odt", "odp", "ods", "odg", "ott", "otp", "ots", "rtf", "log", "gif", "bmp",
            "png", "jpeg", "jpg", "tif", "tiff", "dot", "epub", "vsd", "msg",
        ];

        for extension in extensions {
            let lower = format!("/data/file.{}", extension);
            let upper = format!("/data/file.{}", extension.to_uppercase());
            let category = classify(&lower);

            assert_ne!(category, FileCategory::UnknownExtension, "{} should be recognised", extension);
            assert_eq!(category.label(), extension, "{} should label as itself", extension);
            assert_eq!(classify(&upper), category, "{} should be case insensitive", extension);
        }
    }

    #[test]
    fn test_plain_text_category() {
        assert_eq!(classify("/docs/report.txt"), FileCategory::PlainText);
        assert_eq!(FileCategory::PlainText.label(), "txt");
    }

    #[test]
    fn test_unsupported_files_are_unknown() {
        assert_eq!(classify("video.mp4"), FileCategory::UnknownExtension, "MP4 files are not recognised");
        assert_eq!(classify("archive.zip"), FileCategory::UnknownExtension, "ZIP files are not recognised");
        assert_eq!(classify("modern.webp"), FileCategory::UnknownExtension, "WEBP files are not recognised");
        assert_eq!(classify(""), FileCategory::UnknownExtension, "Empty path is unknown");
    }

    #[test]
    fn test_only_final_component_matters() {
        assert_eq!(classify("/archive.pdf/notes.txt"), FileCategory::PlainText);
        assert_eq!(classify("/scans.pdf/page"), FileCategory::UnknownExtension);
        assert_eq!(classify("C:\\scans.pdf\\page"), FileCategory::UnknownExtension);
        assert_eq!(classify("C:\\scans\\page.Pdf"), FileCategory::Pdf);
        assert_eq!(classify("/mixed\\dir/file.name.with.dots.png"), FileCategory::Png);
    }

    #[test]
    fn test_only_pdfs_are_ocr_candidates() {
        assert!(classify("/scans/SCAN.PDF").is_pdf(), "PDF files may need OCR");
        assert!(!classify("/scans/photo.jpg").is_pdf(), "Images are indexed as they are");
        assert!(!classify("/docs/report.docx").is_pdf(), "Office files do not need OCR");
        assert!(!classify("/docs/README").is_pdf(), "Files without extension do not need OCR");
    }
}
