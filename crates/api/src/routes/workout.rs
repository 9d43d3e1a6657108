use axum::routing::get;
use axum::Router;

use crate::handlers::workout;
use crate::state::AppState;

/// Routes mounted at `/workouts`.
///
/// ```text
/// GET    /today              -> today   (?weekday=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/today", get(workout::today))
}
