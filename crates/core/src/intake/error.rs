//! Error types for the intake module.

use thiserror::Error;

/// Errors raised while validating an uploaded file.
///
/// Both variants are terminal for the current attempt: the file itself is
/// invalid, so the caller must re-prompt for a new one rather than retry.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// The file exceeds the configured size ceiling.
    #[error("File size {byte_size} exceeds maximum allowed size of {limit_bytes} bytes")]
    FileTooLarge { byte_size: u64, limit_bytes: u64 },

    /// The file's type could not be resolved, or resolved to a type the
    /// compatibility table does not know.
    #[error("Unsupported file type: {detail}")]
    UnsupportedType { detail: String },
}

impl IntakeError {
    /// Stable label for metrics and logs.
    pub fn reason_label(&self) -> &'static str {
        match self {
            Self::FileTooLarge { .. } => "file_too_large",
            Self::UnsupportedType { .. } => "unsupported_type",
        }
    }
}
