//! Client for the hosted file-analysis API used by PDF import.
//!
//! Wraps three HTTP endpoints (file upload, structured response against an
//! uploaded file, file deletion) using [`reqwest`], and exposes them through
//! the [`FileAnalysis`] trait so callers can substitute a fake in tests.

pub mod api;
pub mod config;
pub mod types;

pub use api::{FileAnalysis, OpenAiClient, OpenAiError};
pub use config::OpenAiConfig;
pub use types::{
    FileDeletion, FileUpload, StructuredOutput, StructuredResponse, UploadFile, UploadStatus,
    Usage,
};
