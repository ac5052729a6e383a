//! Conversion dispatch and history handlers.

use std::sync::Arc;

use axum::{
    extract::{Multipart, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use reformat_core::{
    intake, ConversionAttempt, ConversionRequest, DispatchError, OutputFormat, Quality,
    UploadedFile,
};

use super::intake::intake_rejection;
use super::ErrorResponse;
use crate::metrics;
use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ConvertParams {
    /// Target output format token.
    pub to: String,
    /// Quality hint (defaults to balanced).
    #[serde(default)]
    pub quality: Option<Quality>,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub attempts: Vec<ConversionAttempt>,
    pub count: usize,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/v1/convert?to=<format>&quality=<level>
///
/// Accepts a multipart body with the upload under a `file` field, runs
/// intake validation, and proxies the conversion to the remote engine.
/// On success the converted bytes are returned directly with a download
/// file name derived from the original.
pub async fn convert(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ConvertParams>,
    mut multipart: Multipart,
) -> Response {
    // Pull the file field out of the multipart body.
    let mut upload: Option<(String, String, Vec<u8>)> = None;
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some("file") {
            let name = field.file_name().unwrap_or("upload").to_string();
            let declared_type = field.content_type().unwrap_or("").to_string();
            match field.bytes().await {
                Ok(bytes) => {
                    upload = Some((name, declared_type, bytes.to_vec()));
                }
                Err(e) => {
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(ErrorResponse {
                            error: format!("Unable to read file field: {}", e),
                        }),
                    )
                        .into_response();
                }
            }
            break;
        }
    }

    let Some((name, declared_type, contents)) = upload else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Missing 'file' field in multipart body".to_string(),
            }),
        )
            .into_response();
    };

    let file = UploadedFile {
        name,
        declared_type,
        byte_size: contents.len() as u64,
    };

    // Intake gate
    let canonical_type = match intake::resolve(&file, state.config().intake.max_upload_bytes) {
        Ok(ty) => ty,
        Err(e) => return intake_rejection(&e).into_response(),
    };

    let Some(output_format) = OutputFormat::parse(&params.to) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("Invalid 'to' format: {}", params.to),
            }),
        )
            .into_response();
    };
    let quality = params.quality.unwrap_or_default();

    // Record the attempt before going to the engine.
    metrics::CONVERSIONS_STARTED_TOTAL.inc();
    let attempt_id = {
        let mut history = state.history().write().await;
        let id = history.begin_attempt(&file, canonical_type, output_format);
        if let Err(e) = history.mark_converting(id) {
            warn!(error = %e, "Failed to mark attempt as converting");
        }
        id
    };

    let request = ConversionRequest {
        file,
        contents,
        canonical_type,
        output_format,
        quality,
    };

    match state.engine().dispatch(request).await {
        Ok(handle) => {
            {
                let mut history = state.history().write().await;
                if let Err(e) = history.complete(attempt_id) {
                    warn!(error = %e, "Failed to mark attempt as completed");
                }
            }
            metrics::CONVERSIONS_COMPLETED_TOTAL.inc();

            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, handle.content_type.to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", handle.file_name),
                    ),
                ],
                handle.bytes,
            )
                .into_response()
        }
        Err(e) => {
            {
                let mut history = state.history().write().await;
                if let Err(e) = history.fail(attempt_id) {
                    warn!(error = %e, "Failed to mark attempt as failed");
                }
            }
            metrics::CONVERSIONS_FAILED_TOTAL.inc();
            warn!(error = %e, "Conversion dispatch failed");

            let status = match &e {
                DispatchError::IncompatibleFormat { .. } => StatusCode::BAD_REQUEST,
                DispatchError::EngineUnavailable { .. }
                | DispatchError::ConversionFailed { .. } => StatusCode::BAD_GATEWAY,
            };

            (
                status,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// GET /api/v1/history
///
/// List this session's conversion attempts, newest first.
pub async fn history(State(state): State<Arc<AppState>>) -> Json<HistoryResponse> {
    let history = state.history().read().await;
    Json(HistoryResponse {
        attempts: history.attempts().to_vec(),
        count: history.len(),
    })
}
