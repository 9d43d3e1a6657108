//! REST client for the analysis API's files and responses endpoints.

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::OpenAiConfig;
use crate::types::{
    FileDeletion, FileUpload, StructuredOutput, StructuredResponse, UploadFile, UploadStatus,
    Usage,
};

/// Purpose attached to every uploaded file.
const UPLOAD_PURPOSE: &str = "assistants";

/// Errors from the analysis API layer.
#[derive(Debug, thiserror::Error)]
pub enum OpenAiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("OpenAI API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// A 2xx response did not have the expected shape.
    #[error("Invalid response format from OpenAI API: {0}")]
    InvalidResponse(String),
}

/// Operations PDF import needs from a file-analysis provider.
#[async_trait]
pub trait FileAnalysis: Send + Sync {
    /// Upload a file. Never fails outright; errors are carried in the
    /// returned [`FileUpload`].
    async fn upload_file(&self, file: &UploadFile) -> FileUpload;

    /// Ask the model to analyse an uploaded file, constraining its output
    /// to `output`'s JSON schema.
    async fn create_structured_response(
        &self,
        file_id: &str,
        system_prompt: &str,
        user_prompt: &str,
        output: &StructuredOutput,
    ) -> Result<StructuredResponse, OpenAiError>;

    /// Delete an uploaded file. Never fails outright.
    async fn delete_file(&self, file_id: &str) -> FileDeletion;
}

/// HTTP client bound to a single API key and model.
pub struct OpenAiClient {
    client: reqwest::Client,
    config: OpenAiConfig,
}

#[derive(Debug, Deserialize)]
struct UploadedFileBody {
    id: String,
    #[serde(default)]
    filename: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DeletedFileBody {
    #[serde(default)]
    deleted: bool,
}

#[derive(Debug, Deserialize)]
struct ResponseBody {
    #[serde(default)]
    output: Vec<OutputItem>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct OutputItem {
    #[serde(default)]
    content: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
struct ContentPart {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: OpenAiConfig) -> Self {
        Self { client, config }
    }

    async fn try_upload(&self, file: &UploadFile) -> Result<UploadedFileBody, OpenAiError> {
        let part = reqwest::multipart::Part::bytes(file.bytes.clone())
            .file_name(file.filename.clone())
            .mime_str(&file.content_type)?;
        let form = reqwest::multipart::Form::new()
            .text("purpose", UPLOAD_PURPOSE)
            .part("file", part);

        let response = self
            .client
            .post(format!("{}/files", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .multipart(form)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    async fn try_delete(&self, file_id: &str) -> Result<DeletedFileBody, OpenAiError> {
        let response = self
            .client
            .delete(format!("{}/files/{}", self.config.base_url, file_id))
            .bearer_auth(&self.config.api_key)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    fn response_request(
        &self,
        file_id: &str,
        system_prompt: &str,
        user_prompt: &str,
        output: &StructuredOutput,
    ) -> serde_json::Value {
        serde_json::json!({
            "model": self.config.model,
            "input": [
                { "role": "system", "content": system_prompt },
                {
                    "role": "user",
                    "content": [
                        { "type": "input_file", "file_id": file_id },
                        { "type": "input_text", "text": user_prompt },
                    ],
                },
            ],
            "temperature": self.config.temperature,
            "top_p": self.config.top_p,
            "max_output_tokens": self.config.max_output_tokens,
            "text": {
                "format": {
                    "type": "json_schema",
                    "name": output.name,
                    "schema": output.schema,
                    "strict": output.strict,
                },
            },
        })
    }

    // ---- private helpers ----

    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, OpenAiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(OpenAiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, OpenAiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

/// Concatenate every `output_text` part across the response's output items.
fn output_text(body: &ResponseBody) -> Option<String> {
    let parts: Vec<&str> = body
        .output
        .iter()
        .flat_map(|item| item.content.iter())
        .filter(|part| part.kind == "output_text")
        .filter_map(|part| part.text.as_deref())
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.concat())
    }
}

#[async_trait]
impl FileAnalysis for OpenAiClient {
    async fn upload_file(&self, file: &UploadFile) -> FileUpload {
        match self.try_upload(file).await {
            Ok(body) => {
                tracing::debug!(file_id = %body.id, filename = %file.filename, "File uploaded");
                FileUpload {
                    file_id: body.id,
                    filename: body.filename.unwrap_or_else(|| file.filename.clone()),
                    status: UploadStatus::Success,
                    error: None,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, filename = %file.filename, "File upload failed");
                FileUpload {
                    file_id: String::new(),
                    filename: file.filename.clone(),
                    status: UploadStatus::Error,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    async fn create_structured_response(
        &self,
        file_id: &str,
        system_prompt: &str,
        user_prompt: &str,
        output: &StructuredOutput,
    ) -> Result<StructuredResponse, OpenAiError> {
        let body = self.response_request(file_id, system_prompt, user_prompt, output);

        let response = self
            .client
            .post(format!("{}/responses", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;
        let body: ResponseBody = Self::parse_response(response).await?;

        let text = output_text(&body)
            .ok_or_else(|| OpenAiError::InvalidResponse("no output text".to_string()))?;

        let parsed_output = match serde_json::from_str(&text) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(error = %e, "Structured response is not valid JSON");
                None
            }
        };

        if let Some(usage) = &body.usage {
            tracing::debug!(
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                "Structured response received",
            );
        }

        Ok(StructuredResponse {
            text,
            usage: body.usage,
            parsed_output,
        })
    }

    async fn delete_file(&self, file_id: &str) -> FileDeletion {
        match self.try_delete(file_id).await {
            Ok(body) if body.deleted => FileDeletion {
                success: true,
                error: None,
            },
            Ok(_) => FileDeletion {
                success: false,
                error: Some(format!("File {file_id} was not deleted")),
            },
            Err(e) => {
                tracing::warn!(error = %e, file_id, "File delete failed");
                FileDeletion {
                    success: false,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}
