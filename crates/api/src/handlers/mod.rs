pub mod pdf_import;
pub mod training_plan;
pub mod workout;
