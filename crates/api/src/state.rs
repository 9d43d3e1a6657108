use std::sync::Arc;

use gymplan_core::service::TrainingPlanService;
use gymplan_pipeline::PdfImporter;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Training plan operations over the configured store.
    pub plans: Arc<TrainingPlanService>,
    /// PDF to draft conversion.
    pub pdf_importer: Arc<PdfImporter>,
    /// Server configuration (read by middleware and handlers).
    pub config: Arc<ServerConfig>,
}
