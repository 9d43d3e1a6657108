//! Handler for converting an uploaded PDF into a plan draft.

use axum::extract::{Multipart, State};
use axum::Json;
use axum_extra::extract::WithRejection;
use gymplan_core::draft::TrainingPlanDraft;
use gymplan_pipeline::PdfUpload;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Multipart field carrying the PDF.
const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub plan: TrainingPlanDraft,
}

/// POST /api/v1/training-plans/pdf/convert
///
/// Accepts `multipart/form-data` with a `file` field holding a `.pdf`.
/// The draft is returned for review; nothing is persisted.
pub async fn convert_pdf(
    State(state): State<AppState>,
    user: AuthUser,
    WithRejection(mut multipart, _): WithRejection<Multipart, AppError>,
) -> AppResult<Json<ConvertResponse>> {
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if !filename.to_ascii_lowercase().ends_with(".pdf") {
            return Err(invalid_file());
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read uploaded file: {e}")))?;
        upload = Some(PdfUpload {
            filename,
            bytes: bytes.to_vec(),
        });
        break;
    }

    let upload = upload.ok_or_else(invalid_file)?;
    if upload.bytes.is_empty() {
        return Err(AppError::BadRequest("Uploaded file is empty".into()));
    }
    if upload.bytes.len() > state.config.max_upload_bytes {
        return Err(AppError::BadRequest(format!(
            "File exceeds the maximum size of {} bytes",
            state.config.max_upload_bytes
        )));
    }

    tracing::info!(
        owner_id = %user.user_id,
        filename = %upload.filename,
        size = upload.bytes.len(),
        "Converting PDF to training plan",
    );
    let plan = state.pdf_importer.convert_pdf_to_plan(upload).await?;
    Ok(Json(ConvertResponse { plan }))
}

fn invalid_file() -> AppError {
    AppError::BadRequest("Invalid file - only PDF files are supported".into())
}
