//! Error types for the dispatch module.

use thiserror::Error;

use crate::formats::{CanonicalType, OutputFormat};

/// Errors raised while dispatching a conversion.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The chosen output format is not a legal target for the input
    /// type. Raised before any network call.
    #[error("Output format '{output}' is not a legal conversion target for {input}")]
    IncompatibleFormat {
        input: CanonicalType,
        output: OutputFormat,
    },

    /// The engine could not be reached at all.
    #[error("Conversion engine unreachable at {url}")]
    EngineUnavailable { url: String },

    /// The conversion itself failed: non-2xx response, transport error
    /// mid-request, or an unusable response body. The remote error
    /// contract is unspecified, so these are collapsed into one kind.
    #[error("Conversion failed: {reason}")]
    ConversionFailed { reason: String },
}

impl DispatchError {
    /// Creates a new conversion failed error.
    pub fn conversion_failed(reason: impl Into<String>) -> Self {
        Self::ConversionFailed {
            reason: reason.into(),
        }
    }

    /// Stable label for metrics and logs.
    pub fn reason_label(&self) -> &'static str {
        match self {
            Self::IncompatibleFormat { .. } => "incompatible_format",
            Self::EngineUnavailable { .. } => "engine_unavailable",
            Self::ConversionFailed { .. } => "conversion_failed",
        }
    }
}
