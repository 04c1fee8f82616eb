use std::fmt;

/// Type of a file submitted for indexing, resolved from its extension.
///
/// Exactly one category applies to each invocation. Anything outside the
/// recognised set resolves to [`FileCategory::UnknownExtension`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileCategory {
    Pdf,
    PlainText,
    Htm,
    Html,
    Csv,
    Xml,
    Json,
    Doc,
    Docx,
    Ppt,
    Pptx,
    Xls,
    Xlsx,
    Odt,
    Odp,
    Ods,
    Odg,
    Ott,
    Otp,
    Ots,
    Rtf,
    Log,
    Gif,
    Bmp,
    Png,
    Jpeg,
    Jpg,
    Tif,
    Tiff,
    Dot,
    Epub,
    Vsd,
    Msg,
    UnknownExtension,
}

/// Coarse grouping of categories, used for logging only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFamily {
    Pdf,
    Text,
    Markup,
    OfficeOpenXml,
    OpenDocument,
    LegacyOffice,
    RasterImage,
    Diagram,
    Ebook,
    Message,
    Unknown,
}

impl FileCategory {
    /// Every recognised category, in the order the extensions are documented
    pub const RECOGNISED: [FileCategory; 33] = [
        FileCategory::Pdf,
        FileCategory::PlainText,
        FileCategory::Htm,
        FileCategory::Html,
        FileCategory::Csv,
        FileCategory::Xml,
        FileCategory::Json,
        FileCategory::Doc,
        FileCategory::Docx,
        FileCategory::Ppt,
        FileCategory::Pptx,
        FileCategory::Xls,
        FileCategory::Xlsx,
        FileCategory::Odt,
        FileCategory::Odp,
        FileCategory::Ods,
        FileCategory::Odg,
        FileCategory::Ott,
        FileCategory::Otp,
        FileCategory::Ots,
        FileCategory::Rtf,
        FileCategory::Log,
        FileCategory::Gif,
        FileCategory::Bmp,
        FileCategory::Png,
        FileCategory::Jpeg,
        FileCategory::Jpg,
        FileCategory::Tif,
        FileCategory::Tiff,
        FileCategory::Dot,
        FileCategory::Epub,
        FileCategory::Vsd,
        FileCategory::Msg,
    ];

    /// Look up a lower-cased extension (without the leading dot)
    pub fn from_extension(extension: &str) -> Self {
        match extension {
            "pdf" => Self::Pdf,
            "txt" => Self::PlainText,
            "htm" => Self::Htm,
            "html" => Self::Html,
            "csv" => Self::Csv,
            "xml" => Self::Xml,
            "json" => Self::Json,
            "doc" => Self::Doc,
            "docx" => Self::Docx,
            "ppt" => Self::Ppt,
            "pptx" => Self::Pptx,
            "xls" => Self::Xls,
            "xlsx" => Self::Xlsx,
            "odt" => Self::Odt,
            "odp" => Self::Odp,
            "ods" => Self::Ods,
            "odg" => Self::Odg,
            "ott" => Self::Ott,
            "otp" => Self::Otp,
            "ots" => Self::Ots,
            "rtf" => Self::Rtf,
            "log" => Self::Log,
            "gif" => Self::Gif,
            "bmp" => Self::Bmp,
            "png" => Self::Png,
            "jpeg" => Self::Jpeg,
            "jpg" => Self::Jpg,
            "tif" => Self::Tif,
            "tiff" => Self::Tiff,
            "dot" => Self::Dot,
            "epub" => Self::Epub,
            "vsd" => Self::Vsd,
            "msg" => Self::Msg,
            _ => Self::UnknownExtension,
        }
    }

    /// Human-readable name printed in the run summary.
    ///
    /// PDFs are labelled by the summary itself, since their label depends on
    /// the searchability result.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::PlainText => "txt",
            Self::Htm => "htm",
            Self::Html => "html",
            Self::Csv => "csv",
            Self::Xml => "xml",
            Self::Json => "json",
            Self::Doc => "doc",
            Self::Docx => "docx",
            Self::Ppt => "ppt",
            Self::Pptx => "pptx",
            Self::Xls => "xls",
            Self::Xlsx => "xlsx",
            Self::Odt => "odt",
            Self::Odp => "odp",
            Self::Ods => "ods",
            Self::Odg => "odg",
            Self::Ott => "ott",
            Self::Otp => "otp",
            Self::Ots => "ots",
            Self::Rtf => "rtf",
            Self::Log => "log",
            Self::Gif => "gif",
            Self::Bmp => "bmp",
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Jpg => "jpg",
            Self::Tif => "tif",
            Self::Tiff => "tiff",
            Self::Dot => "dot",
            Self::Epub => "epub",
            Self::Vsd => "vsd",
            Self::Msg => "msg",
            Self::UnknownExtension => "unknown extension",
        }
    }

    pub fn family(&self) -> CategoryFamily {
        match self {
            Self::Pdf => CategoryFamily::Pdf,
            Self::PlainText | Self::Csv | Self::Json | Self::Log => CategoryFamily::Text,
            Self::Htm | Self::Html | Self::Xml => CategoryFamily::Markup,
            Self::Docx | Self::Pptx | Self::Xlsx => CategoryFamily::OfficeOpenXml,
            Self::Odt | Self::Odp | Self::Ods | Self::Odg
            | Self::Ott | Self::Otp | Self::Ots => CategoryFamily::OpenDocument,
            Self::Doc | Self::Ppt | Self::Xls | Self::Dot | Self::Rtf => CategoryFamily::LegacyOffice,
            Self::Gif | Self::Bmp | Self::Png | Self::Jpeg
            | Self::Jpg | Self::Tif | Self::Tiff => CategoryFamily::RasterImage,
            Self::Vsd => CategoryFamily::Diagram,
            Self::Epub => CategoryFamily::Ebook,
            Self::Msg => CategoryFamily::Message,
            Self::UnknownExtension => CategoryFamily::Unknown,
        }
    }

    pub fn is_pdf(&self) -> bool {
        matches!(self, Self::Pdf)
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
