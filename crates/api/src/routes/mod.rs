pub mod health;
pub mod training_plan;
pub mod workout;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /training-plans                      list, create
/// /training-plans/pdf/convert          PDF to draft (POST, multipart)
/// /training-plans/{id}                 get, delete
/// /training-plans/{id}/activate        activate (POST)
///
/// /workouts/today                      today's session (?weekday=)
/// ```
///
/// Every route requires a Bearer token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/training-plans", training_plan::router())
        .nest("/workouts", workout::router())
}
