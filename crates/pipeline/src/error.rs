use gymplan_openai::OpenAiError;

/// Every PDF import failure, each rendered with a common
/// `PDF processing failed:` prefix.
#[derive(Debug, thiserror::Error)]
pub enum PdfImportError {
    #[error("PDF processing failed: Failed to upload PDF: {0}")]
    Upload(String),

    #[error("PDF processing failed: {0}")]
    Completion(#[from] OpenAiError),

    /// The model reported that the document holds no usable plan.
    #[error("PDF processing failed: Invalid training plan: {0}")]
    InvalidPlan(String),

    #[error("PDF processing failed: Failed to parse training plan data from OpenAI response")]
    Parsing,
}
