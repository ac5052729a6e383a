//! File intake and format discovery handlers.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use reformat_core::{
    intake, CanonicalType, FormatTable, IntakeError, OutputFormat, UploadedFile,
};

use super::ErrorResponse;
use crate::metrics;
use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct InspectRequest {
    pub name: String,
    #[serde(default)]
    pub declared_type: String,
    pub byte_size: u64,
}

#[derive(Debug, Serialize)]
pub struct InspectResponse {
    pub canonical_type: CanonicalType,
    pub icon: &'static str,
    pub description: &'static str,
    pub allowed_outputs: &'static [OutputFormat],
    pub size_label: String,
}

#[derive(Debug, Serialize)]
pub struct FormatEntry {
    pub canonical_type: CanonicalType,
    pub icon: &'static str,
    pub description: &'static str,
    pub allowed_outputs: &'static [OutputFormat],
}

#[derive(Debug, Serialize)]
pub struct FormatsResponse {
    pub formats: Vec<FormatEntry>,
    pub count: usize,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/v1/formats
///
/// Enumerate the full compatibility table.
pub async fn list_formats() -> Json<FormatsResponse> {
    let formats: Vec<FormatEntry> = FormatTable::entries()
        .map(|(canonical_type, profile)| FormatEntry {
            canonical_type,
            icon: profile.icon,
            description: profile.description,
            allowed_outputs: profile.allowed_outputs,
        })
        .collect();
    let count = formats.len();

    Json(FormatsResponse { formats, count })
}

/// POST /api/v1/inspect
///
/// Validate an upload candidate from its metadata and report the resolved
/// type with its legal output formats. Runs the same gate as /convert, so
/// the upload surface can reject a file before sending its bytes.
pub async fn inspect(
    State(state): State<Arc<AppState>>,
    Json(request): Json<InspectRequest>,
) -> Result<Json<InspectResponse>, (StatusCode, Json<ErrorResponse>)> {
    let file = UploadedFile {
        name: request.name,
        declared_type: request.declared_type,
        byte_size: request.byte_size,
    };

    let canonical_type = intake::resolve(&file, state.config().intake.max_upload_bytes)
        .map_err(|e| intake_rejection(&e))?;

    let profile = FormatTable::lookup(canonical_type);
    Ok(Json(InspectResponse {
        canonical_type,
        icon: profile.icon,
        description: profile.description,
        allowed_outputs: profile.allowed_outputs,
        size_label: file.size_label(),
    }))
}

/// Maps an intake failure to its HTTP status and records the rejection.
pub(crate) fn intake_rejection(error: &IntakeError) -> (StatusCode, Json<ErrorResponse>) {
    metrics::INTAKE_REJECTIONS_TOTAL
        .with_label_values(&[error.reason_label()])
        .inc();

    let status = match error {
        IntakeError::FileTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        IntakeError::UnsupportedType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
    };

    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
}
