//! Upload, analyse, clean up, interpret.
//!
//! The uploaded file is deleted once a structured response has come back,
//! whether the answer is usable or not. A failed upload stops before the
//! analysis call, and a failed analysis call returns without deleting.

use std::sync::Arc;

use gymplan_core::draft::TrainingPlanDraft;
use gymplan_openai::{FileAnalysis, UploadFile};
use serde_json::Value;

use crate::error::PdfImportError;
use crate::prompts::{SYSTEM_PROMPT, USER_PROMPT};
use crate::schema::training_plan_output;

const PDF_CONTENT_TYPE: &str = "application/pdf";

/// An uploaded PDF held in memory.
#[derive(Debug, Clone)]
pub struct PdfUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Converts PDFs into plan drafts through a [`FileAnalysis`] provider.
#[derive(Clone)]
pub struct PdfImporter {
    analysis: Arc<dyn FileAnalysis>,
}

impl PdfImporter {
    pub fn new(analysis: Arc<dyn FileAnalysis>) -> Self {
        Self { analysis }
    }

    pub async fn convert_pdf_to_plan(
        &self,
        pdf: PdfUpload,
    ) -> Result<TrainingPlanDraft, PdfImportError> {
        let file = UploadFile {
            filename: pdf.filename,
            content_type: PDF_CONTENT_TYPE.to_string(),
            bytes: pdf.bytes,
        };

        let upload = self.analysis.upload_file(&file).await;
        if !upload.is_success() {
            let reason = upload
                .error
                .unwrap_or_else(|| "no file id returned".to_string());
            return Err(PdfImportError::Upload(reason));
        }
        tracing::info!(file_id = %upload.file_id, filename = %file.filename, "PDF uploaded for analysis");

        let response = self
            .analysis
            .create_structured_response(
                &upload.file_id,
                SYSTEM_PROMPT,
                USER_PROMPT,
                &training_plan_output(),
            )
            .await?;

        let deletion = self.analysis.delete_file(&upload.file_id).await;
        if !deletion.success {
            tracing::warn!(
                file_id = %upload.file_id,
                error = deletion.error.as_deref().unwrap_or("unknown"),
                "Failed to delete analysed PDF",
            );
        }

        let output = response.parsed_output.ok_or(PdfImportError::Parsing)?;
        interpret(output)
    }
}

/// Map the model's JSON answer to a draft or a typed failure.
fn interpret(output: Value) -> Result<TrainingPlanDraft, PdfImportError> {
    if output.get("status").and_then(Value::as_str) == Some("error") {
        let reason = output
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("the document does not contain a training plan");
        return Err(PdfImportError::InvalidPlan(reason.to_string()));
    }

    serde_json::from_value(output).map_err(|e| {
        tracing::warn!(error = %e, "Structured response does not match the plan schema");
        PdfImportError::Parsing
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    #[test]
    fn error_marker_becomes_invalid_plan() {
        let result = interpret(json!({
            "status": "error",
            "error": "No exercises found",
            "name": "",
            "description": null,
            "training_days": [],
        }));
        assert_matches!(result, Err(PdfImportError::InvalidPlan(reason)) if reason == "No exercises found");
    }

    #[test]
    fn error_marker_without_reason_uses_fallback() {
        let err = interpret(json!({ "status": "error" })).unwrap_err();
        assert_eq!(
            err.to_string(),
            "PDF processing failed: Invalid training plan: the document does not contain a training plan"
        );
    }

    #[test]
    fn shape_mismatch_is_a_parsing_error() {
        let result = interpret(json!({ "status": "ok", "name": "Plan" }));
        assert_matches!(result, Err(PdfImportError::Parsing));
    }

    #[test]
    fn valid_output_ignores_null_error_field() {
        let draft = interpret(json!({
            "status": "ok",
            "error": null,
            "name": "Push Pull",
            "description": null,
            "training_days": [{
                "weekday": 2,
                "exercises": [{
                    "exercise_name": "Row",
                    "order_index": 0,
                    "sets": 3,
                    "repetitions": 10,
                    "rest_time_seconds": 60,
                }],
            }],
        }))
        .unwrap();
        assert_eq!(draft.name, "Push Pull");
        assert_eq!(draft.description, None);
        assert_eq!(draft.training_days[0].exercises[0].exercise_name, "Row");
    }
}
