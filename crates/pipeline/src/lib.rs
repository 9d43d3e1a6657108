//! PDF import: turns an uploaded training-plan PDF into a
//! [`TrainingPlanDraft`](gymplan_core::draft::TrainingPlanDraft) by asking
//! a file-analysis model for schema-constrained output.

pub mod error;
pub mod importer;
pub mod prompts;
pub mod schema;

pub use error::PdfImportError;
pub use importer::{PdfImporter, PdfUpload};
