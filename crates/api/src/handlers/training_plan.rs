//! Handlers for the `/training-plans` resource.
//!
//! Every handler is scoped to the authenticated user: plans owned by
//! someone else are reported as not found.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::WithRejection;
use gymplan_core::plan::{CreateCompletePlan, PlanCreated, TrainingPlanDetails, TrainingPlanList};
use gymplan_core::types::DbId;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::PageParams;
use crate::state::AppState;

/// `{ "message": ... }` acknowledgement body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// GET /api/v1/training-plans
///
/// One page of the caller's plans, newest first.
pub async fn list_plans(
    State(state): State<AppState>,
    user: AuthUser,
    WithRejection(Query(params), _): WithRejection<Query<PageParams>, AppError>,
) -> AppResult<Json<TrainingPlanList>> {
    let params = params.checked()?;
    let list = state
        .plans
        .list_plans(user.user_id, params.page, params.limit)
        .await?;
    Ok(Json(list))
}

/// POST /api/v1/training-plans
///
/// Create a plan with all of its days and exercises. Returns 201.
pub async fn create_plan(
    State(state): State<AppState>,
    user: AuthUser,
    WithRejection(Json(command), _): WithRejection<Json<CreateCompletePlan>, AppError>,
) -> AppResult<(StatusCode, Json<PlanCreated>)> {
    command.validate_command()?;
    let created = state
        .plans
        .create_complete_plan(&command, user.user_id)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/training-plans/{id}
pub async fn get_plan(
    State(state): State<AppState>,
    user: AuthUser,
    WithRejection(Path(plan_id), _): WithRejection<Path<DbId>, AppError>,
) -> AppResult<Json<TrainingPlanDetails>> {
    state.plans.ensure_owned(plan_id, user.user_id).await?;
    let details = state.plans.get_details(plan_id).await?;
    Ok(Json(details))
}

/// DELETE /api/v1/training-plans/{id}
pub async fn delete_plan(
    State(state): State<AppState>,
    user: AuthUser,
    WithRejection(Path(plan_id), _): WithRejection<Path<DbId>, AppError>,
) -> AppResult<Json<MessageResponse>> {
    state.plans.ensure_owned(plan_id, user.user_id).await?;
    state.plans.delete_plan(plan_id).await?;
    Ok(Json(MessageResponse {
        message: "Training plan deleted successfully",
    }))
}

/// POST /api/v1/training-plans/{id}/activate
///
/// Returns 400 with code `NOT_ELIGIBLE` when the plan has no exercises yet.
pub async fn activate_plan(
    State(state): State<AppState>,
    user: AuthUser,
    WithRejection(Path(plan_id), _): WithRejection<Path<DbId>, AppError>,
) -> AppResult<Json<MessageResponse>> {
    state.plans.ensure_owned(plan_id, user.user_id).await?;
    state.plans.activate_plan(plan_id).await?;
    Ok(Json(MessageResponse {
        message: "Training plan activated successfully",
    }))
}
