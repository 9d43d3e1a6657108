//! Route definitions for the `/training-plans` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{pdf_import, training_plan};
use crate::state::AppState;

/// Routes mounted at `/training-plans`.
///
/// ```text
/// GET    /                   -> list_plans   (?page=&limit=)
/// POST   /                   -> create_plan
/// POST   /pdf/convert        -> convert_pdf
/// GET    /{id}               -> get_plan
/// DELETE /{id}               -> delete_plan
/// POST   /{id}/activate      -> activate_plan
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(training_plan::list_plans).post(training_plan::create_plan),
        )
        .route("/pdf/convert", post(pdf_import::convert_pdf))
        .route(
            "/{id}",
            get(training_plan::get_plan).delete(training_plan::delete_plan),
        )
        .route("/{id}/activate", post(training_plan::activate_plan))
}
