//! Trait definitions for the dispatch module.

use async_trait::async_trait;

use super::error::DispatchError;
use super::types::{ConversionRequest, DownloadHandle};

/// A backend that can carry out a conversion request.
///
/// Implementations must re-validate the format-compatibility
/// precondition and fail fast, without I/O, when it is violated. One
/// invocation performs at most one outbound call; retries are a caller
/// concern.
#[async_trait]
pub trait ConversionEngine: Send + Sync {
    /// Returns the name of this engine implementation.
    fn name(&self) -> &str;

    /// Dispatches a conversion and awaits its result.
    async fn dispatch(&self, request: ConversionRequest)
        -> Result<DownloadHandle, DispatchError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::types::{output_file_name, Quality};
    use crate::formats::{CanonicalType, FormatTable, OutputFormat};
    use crate::intake::UploadedFile;

    struct EchoEngine;

    #[async_trait]
    impl ConversionEngine for EchoEngine {
        fn name(&self) -> &str {
            "echo"
        }

        async fn dispatch(
            &self,
            request: ConversionRequest,
        ) -> Result<DownloadHandle, DispatchError> {
            if !FormatTable::is_allowed(request.canonical_type, request.output_format) {
                return Err(DispatchError::IncompatibleFormat {
                    input: request.canonical_type,
                    output: request.output_format,
                });
            }
            Ok(DownloadHandle {
                file_name: output_file_name(&request.file.name, request.output_format),
                content_type: request.output_format.content_type(),
                bytes: request.contents,
            })
        }
    }

    fn request(name: &str, ty: CanonicalType, format: OutputFormat) -> ConversionRequest {
        ConversionRequest {
            file: UploadedFile {
                name: name.to_string(),
                declared_type: ty.mime().to_string(),
                byte_size: 4,
            },
            contents: vec![1, 2, 3, 4],
            canonical_type: ty,
            output_format: format,
            quality: Quality::Balanced,
        }
    }

    #[tokio::test]
    async fn test_dispatch_names_result_after_original() {
        let engine = EchoEngine;
        let handle = engine
            .dispatch(request("photo.jpeg", CanonicalType::Jpeg, OutputFormat::Pdf))
            .await
            .unwrap();
        assert_eq!(handle.file_name, "photo.pdf");
        assert_eq!(handle.content_type, "application/pdf");
    }

    #[tokio::test]
    async fn test_dispatch_rejects_incompatible_pair() {
        let engine = EchoEngine;
        let err = engine
            .dispatch(request("report.pdf", CanonicalType::Pdf, OutputFormat::Gif))
            .await
            .unwrap_err();
        assert!(matches!(err, DispatchError::IncompatibleFormat { .. }));
    }
}
