use axum::extract::{Query, State};
use axum::Json;
use axum_extra::extract::WithRejection;
use chrono::Datelike;
use gymplan_core::workout::TodayWorkout;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::WeekdayParams;
use crate::state::AppState;

/// GET /api/v1/workouts/today?weekday=
///
/// The caller's session for `weekday` (0 = Sunday). Without a weekday the
/// current UTC day is used. Returns 404 `NOT_SCHEDULED` when no active plan
/// trains that day.
pub async fn today(
    State(state): State<AppState>,
    user: AuthUser,
    WithRejection(Query(params), _): WithRejection<Query<WeekdayParams>, AppError>,
) -> AppResult<Json<TodayWorkout>> {
    let weekday = params.weekday.unwrap_or_else(current_weekday);
    let workout = state.plans.today_workout(user.user_id, weekday).await?;
    Ok(Json(workout))
}

fn current_weekday() -> i16 {
    chrono::Utc::now().weekday().num_days_from_sunday() as i16
}
