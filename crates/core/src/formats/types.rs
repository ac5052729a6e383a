//! Closed enumerations for input types and output format tokens.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical MIME-type identifier for a supported input file.
///
/// Membership in this enum is exactly the key set of the compatibility
/// table; a type that cannot be expressed here is unsupported by
/// definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanonicalType {
    /// PDF document
    #[serde(rename = "application/pdf")]
    Pdf,
    /// Legacy Word document
    #[serde(rename = "application/msword")]
    Doc,
    /// Office Open XML word-processing document
    #[serde(rename = "application/vnd.openxmlformats-officedocument.wordprocessingml.document")]
    Docx,
    /// JPEG image
    #[serde(rename = "image/jpeg")]
    Jpeg,
    /// PNG image
    #[serde(rename = "image/png")]
    Png,
    /// GIF animation
    #[serde(rename = "image/gif")]
    Gif,
    /// SVG vector graphic (input only, never an output target)
    #[serde(rename = "image/svg+xml")]
    Svg,
}

impl CanonicalType {
    /// Returns the MIME identifier for this type.
    pub fn mime(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Doc => "application/msword",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Gif => "image/gif",
            Self::Svg => "image/svg+xml",
        }
    }

    /// Resolves a MIME string to a canonical type, if it is one we support.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "application/pdf" => Some(Self::Pdf),
            "application/msword" => Some(Self::Doc),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Some(Self::Docx)
            }
            "image/jpeg" => Some(Self::Jpeg),
            "image/png" => Some(Self::Png),
            "image/gif" => Some(Self::Gif),
            "image/svg+xml" => Some(Self::Svg),
            _ => None,
        }
    }

    /// Resolves a file extension (without the dot, any case) to a
    /// canonical type.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "doc" => Some(Self::Doc),
            "docx" => Some(Self::Docx),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            "gif" => Some(Self::Gif),
            "svg" => Some(Self::Svg),
            _ => None,
        }
    }
}

impl fmt::Display for CanonicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime())
    }
}

/// Output format token naming a conversion target.
///
/// The canonical token set is fixed: `jpeg` is accepted on parse but
/// folded into `jpg`, and `svg` is not a conversion target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Pdf,
    Docx,
    #[serde(alias = "jpeg")]
    Jpg,
    Png,
    Gif,
}

impl OutputFormat {
    /// Returns the canonical short token for this format.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Jpg => "jpg",
            Self::Png => "png",
            Self::Gif => "gif",
        }
    }

    /// Returns the file extension used when naming a converted download.
    pub fn extension(&self) -> &'static str {
        self.token()
    }

    /// Returns the content type of a file converted to this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Self::Jpg => "image/jpeg",
            Self::Png => "image/png",
            Self::Gif => "image/gif",
        }
    }

    /// Parses a format token (any case, `jpeg` accepted as `jpg`).
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "jpg" | "jpeg" => Some(Self::Jpg),
            "png" => Some(Self::Png),
            "gif" => Some(Self::Gif),
            _ => None,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
