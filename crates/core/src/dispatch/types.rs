//! Types for the dispatch module.

use serde::{Deserialize, Serialize};

use crate::formats::{CanonicalType, OutputFormat};
use crate::intake::UploadedFile;

/// Quality hint forwarded to the conversion engine.
///
/// The engine's interpretation is its own; this side of the contract
/// fixes only the token passed in the `quality` query parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Fast,
    #[default]
    Balanced,
    High,
}

impl Quality {
    /// Returns the wire token for this quality level.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::Balanced => "balanced",
            Self::High => "high",
        }
    }
}

/// A fully validated conversion request.
///
/// Carries the raw file bytes; the request is consumed by dispatch and
/// nothing is retained by the engine afterwards.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    /// The uploaded file handle.
    pub file: UploadedFile,
    /// Raw file contents.
    pub contents: Vec<u8>,
    /// Resolved input type.
    pub canonical_type: CanonicalType,
    /// Chosen conversion target.
    pub output_format: OutputFormat,
    /// Quality hint.
    pub quality: Quality,
}

/// A converted file ready to hand to the user.
///
/// The caller governs the handle's lifetime; nothing is persisted.
#[derive(Debug, Clone)]
pub struct DownloadHandle {
    /// Suggested file name: original base name with the extension
    /// replaced by the output format token.
    pub file_name: String,
    /// Content type of the converted bytes.
    pub content_type: &'static str,
    /// The converted file contents.
    pub bytes: Vec<u8>,
}

/// Builds the suggested download name for a converted file.
///
/// The last extension is replaced; a name without an extension keeps its
/// full form as the base name.
pub fn output_file_name(original: &str, format: OutputFormat) -> String {
    let base = match original.rsplit_once('.') {
        Some((base, _)) if !base.is_empty() => base,
        _ => original,
    };
    format!("{}.{}", base, format.extension())
}
