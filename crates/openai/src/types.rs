//! Request and response types for the analysis API.

use serde::{Deserialize, Serialize};

/// A file to upload, held in memory.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadStatus {
    Success,
    Error,
}

/// Outcome of an upload. Failures are reported in-band rather than as an
/// `Err` so callers can decide how to surface them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileUpload {
    /// Empty when the upload failed.
    pub file_id: String,
    pub filename: String,
    pub status: UploadStatus,
    pub error: Option<String>,
}

impl FileUpload {
    /// An upload counts as successful only with a success status and a
    /// non-empty file id.
    pub fn is_success(&self) -> bool {
        self.status == UploadStatus::Success && !self.file_id.is_empty()
    }
}

/// Outcome of a delete. Failures are reported in-band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileDeletion {
    pub success: bool,
    pub error: Option<String>,
}

/// JSON-schema constraint applied to the model's text output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructuredOutput {
    pub name: String,
    pub schema: serde_json::Value,
    pub strict: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
    #[serde(default)]
    pub total_tokens: u64,
}

/// Text returned by a structured response request.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredResponse {
    pub text: String,
    pub usage: Option<Usage>,
    /// `text` parsed as JSON; `None` when it is not valid JSON.
    pub parsed_output: Option<serde_json::Value>,
}
