//! Axum route handlers for the Analysis API.

use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::analyzer::{analyze, AnalysisResult};
use crate::errors::AppError;
use crate::extraction::DocumentKind;
use crate::state::AppState;

/// Multipart field carrying the document.
pub const UPLOAD_FIELD: &str = "resume";

/// Checks the client-supplied filename before anything is read or parsed.
pub fn admit_upload(file_name: &str) -> Result<DocumentKind, AppError> {
    if file_name.is_empty() {
        return Err(AppError::Validation("No file was selected".to_string()));
    }
    DocumentKind::from_file_name(file_name).ok_or_else(|| {
        AppError::Validation("Unsupported file type. Use PDF or DOCX".to_string())
    })
}

/// Reads the first `resume` file field. Fields without a filename are form values,
/// not files, and are skipped.
async fn read_upload(
    multipart: &mut Multipart,
) -> Result<(String, DocumentKind, Bytes), AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        // Admission runs before the body is buffered.
        let kind = admit_upload(&file_name)?;
        let data = field.bytes().await?;
        return Ok((file_name, kind, data));
    }
    Err(AppError::Validation("No file was uploaded".to_string()))
}

/// POST /analyze
///
/// Accepts a multipart upload (`resume` field, PDF or DOCX), extracts its text and
/// returns the ATS analysis. The staged file never outlives the request.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalysisResult>, AppError> {
    let request_id = Uuid::new_v4();

    // A request that is not multipart at all carries no file either.
    let mut multipart = multipart.map_err(|rejection| {
        warn!(%request_id, reason = %rejection.body_text(), "Upload rejected: not multipart");
        AppError::Validation("No file was uploaded".to_string())
    })?;

    let (file_name, kind, data) = read_upload(&mut multipart).await.inspect_err(|e| {
        warn!(%request_id, error = %e, "Upload rejected");
    })?;

    info!(%request_id, file_name = %file_name, %kind, size = data.len(), "Analyzing upload");

    let text = state.extractor.extract(kind, data).await?;

    let result = analyze(&text, &state.catalog);
    info!(
        %request_id,
        score = result.score,
        word_count = result.word_count,
        found = result.found_sections.len(),
        "Analysis complete"
    );

    Ok(Json(result))
}
