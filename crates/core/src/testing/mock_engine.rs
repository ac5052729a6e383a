//! Mock conversion engine for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::dispatch::{
    output_file_name, ConversionEngine, ConversionRequest, DispatchError, DownloadHandle, Quality,
};
use crate::formats::{CanonicalType, FormatTable, OutputFormat};

/// A recorded dispatch for test assertions.
///
/// Each entry corresponds to one call that would have reached the
/// network; incompatible pairs are rejected before recording, mirroring
/// the real engine's fail-fast behavior.
#[derive(Debug, Clone)]
pub struct RecordedDispatch {
    /// Name of the uploaded file.
    pub file_name: String,
    /// Resolved input type.
    pub canonical_type: CanonicalType,
    /// Requested conversion target.
    pub output_format: OutputFormat,
    /// Quality hint.
    pub quality: Quality,
    /// Size of the uploaded payload.
    pub byte_size: u64,
    /// Whether the dispatch succeeded.
    pub success: bool,
}

/// Mock implementation of the [`ConversionEngine`] trait.
///
/// Provides controllable behavior for testing:
/// - Track dispatches for assertions
/// - Simulate success/failure
/// - Control the returned converted bytes
///
/// # Example
///
/// ```rust,ignore
/// use reformat_core::testing::MockEngine;
///
/// let engine = MockEngine::new();
/// engine.set_response_bytes(b"%PDF-1.7 ...".to_vec()).await;
///
/// let handle = engine.dispatch(request).await?;
///
/// let dispatches = engine.recorded_dispatches().await;
/// assert_eq!(dispatches.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockEngine {
    dispatches: Arc<RwLock<Vec<RecordedDispatch>>>,
    next_error: Arc<RwLock<Option<DispatchError>>>,
    response_bytes: Arc<RwLock<Option<Vec<u8>>>>,
}

impl MockEngine {
    /// Create a new mock engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded dispatches.
    pub async fn recorded_dispatches(&self) -> Vec<RecordedDispatch> {
        self.dispatches.read().await.clone()
    }

    /// Get the number of dispatches performed.
    pub async fn dispatch_count(&self) -> usize {
        self.dispatches.read().await.len()
    }

    /// Clear recorded dispatches.
    pub async fn clear_recorded(&self) {
        self.dispatches.write().await.clear();
    }

    /// Configure the next dispatch to fail with the given error.
    pub async fn set_next_error(&self, error: DispatchError) {
        *self.next_error.write().await = Some(error);
    }

    /// Set the bytes returned by successful dispatches.
    pub async fn set_response_bytes(&self, bytes: Vec<u8>) {
        *self.response_bytes.write().await = Some(bytes);
    }

    async fn take_error(&self) -> Option<DispatchError> {
        self.next_error.write().await.take()
    }
}

#[async_trait]
impl ConversionEngine for MockEngine {
    fn name(&self) -> &str {
        "mock"
    }

    async fn dispatch(
        &self,
        request: ConversionRequest,
    ) -> Result<DownloadHandle, DispatchError> {
        // Fail fast on illegal pairs without recording: a recorded
        // dispatch stands for a network call, and none would be made.
        if !FormatTable::is_allowed(request.canonical_type, request.output_format) {
            return Err(DispatchError::IncompatibleFormat {
                input: request.canonical_type,
                output: request.output_format,
            });
        }

        let mut record = RecordedDispatch {
            file_name: request.file.name.clone(),
            canonical_type: request.canonical_type,
            output_format: request.output_format,
            quality: request.quality,
            byte_size: request.contents.len() as u64,
            success: true,
        };

        if let Some(err) = self.take_error().await {
            record.success = false;
            self.dispatches.write().await.push(record);
            return Err(err);
        }

        self.dispatches.write().await.push(record);

        let bytes = self
            .response_bytes
            .read()
            .await
            .clone()
            .unwrap_or_else(|| b"converted-bytes".to_vec());

        Ok(DownloadHandle {
            file_name: output_file_name(&request.file.name, request.output_format),
            content_type: request.output_format.content_type(),
            bytes,
        })
    }
}
