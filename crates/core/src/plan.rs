//! Training plan types: the creation command, its validation rules, and
//! the DTOs returned by the service.
//!
//! A plan owns its training days; each day owns an ordered list of
//! exercise links (sets / repetitions / rest for one exercise).

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

// ── Constants ────────────────────────────────────────────────────────

/// Weekdays are numbered 0 (Sunday) through 6 (Saturday).
pub const MIN_WEEKDAY: i16 = 0;
pub const MAX_WEEKDAY: i16 = 6;

/// Message returned with a successfully created plan.
pub const PLAN_CREATED_MESSAGE: &str = "Training plan created successfully with all exercises";

// ── Plan source ──────────────────────────────────────────────────────

/// How a plan came into existence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanSource {
    /// Entered through the manual plan form.
    #[default]
    Manual,
    /// Confirmed from a draft produced by the PDF import pipeline.
    PdfImport,
}

impl PlanSource {
    /// The tag stored in the `training_plans.source` column.
    pub fn as_str(self) -> &'static str {
        match self {
            PlanSource::Manual => "manual",
            PlanSource::PdfImport => "pdf_import",
        }
    }
}

impl fmt::Display for PlanSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanSource {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manual" => Ok(PlanSource::Manual),
            "pdf_import" => Ok(PlanSource::PdfImport),
            other => Err(CoreError::Validation(format!(
                "Unknown plan source '{other}'"
            ))),
        }
    }
}

// ── Commands ─────────────────────────────────────────────────────────

/// Command to create a plan together with all of its days and exercises.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_unique_weekdays"))]
pub struct CreateCompletePlan {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,
    #[validate(length(max = 500, message = "Description must be 500 characters or less"))]
    pub description: Option<String>,
    #[validate(
        length(min = 1, message = "At least one training day is required"),
        nested
    )]
    pub training_days: Vec<CreateTrainingDay>,
    #[serde(default)]
    pub source: PlanSource,
}

/// One day of a [`CreateCompletePlan`].
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTrainingDay {
    #[validate(range(min = 0, max = 6, message = "Weekday must be between 0 and 6"))]
    pub weekday: i16,
    #[validate(
        length(min = 1, message = "At least one exercise is required"),
        nested
    )]
    pub exercises: Vec<CreateDayExercise>,
}

/// One exercise occurrence within a [`CreateTrainingDay`].
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDayExercise {
    #[validate(length(min = 1, message = "Exercise name is required"))]
    pub exercise_name: String,
    #[validate(range(min = 0, message = "Order index must not be negative"))]
    pub order_index: i32,
    #[validate(range(min = 1, message = "Sets must be at least 1"))]
    pub sets: i32,
    #[validate(range(min = 1, message = "Repetitions must be at least 1"))]
    pub repetitions: i32,
    #[validate(range(min = 1, message = "Rest time must be at least 1 second"))]
    pub rest_time_seconds: i32,
}

fn validate_unique_weekdays(command: &CreateCompletePlan) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for day in &command.training_days {
        if !seen.insert(day.weekday) {
            let mut err = ValidationError::new("duplicate_weekday");
            err.message = Some(format!("Weekday {} appears more than once", day.weekday).into());
            return Err(err);
        }
    }
    Ok(())
}

impl CreateCompletePlan {
    /// Run every field and cross-field rule, folding failures into a
    /// single [`CoreError::Validation`].
    pub fn validate_command(&self) -> Result<(), CoreError> {
        self.validate()
            .map_err(|errors| CoreError::Validation(errors.to_string()))
    }

    /// Total number of exercise links the command will create.
    pub fn exercise_count(&self) -> usize {
        self.training_days.iter().map(|d| d.exercises.len()).sum()
    }
}

// ── Responses ────────────────────────────────────────────────────────

/// Returned after a plan and all of its rows were created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanCreated {
    pub id: DbId,
    pub message: String,
}

/// A plan as shown in the owner's plan list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingPlanListItem {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub source: PlanSource,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    /// Total plans for the owner, independent of the page window.
    pub total: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingPlanList {
    pub plans: Vec<TrainingPlanListItem>,
    pub pagination: Pagination,
}

/// Full plan tree: plan, its days by weekday, and each day's exercises
/// by `order_index`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingPlanDetails {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub source: PlanSource,
    pub training_days: Vec<TrainingDayDetails>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingDayDetails {
    pub id: DbId,
    pub weekday: i16,
    pub created_at: Timestamp,
    pub exercises: Vec<DayExerciseDetails>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayExerciseDetails {
    pub id: DbId,
    pub exercise: ExerciseSummary,
    pub order_index: i32,
    pub sets: i32,
    pub repetitions: i32,
    pub rest_time_seconds: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseSummary {
    pub id: DbId,
    pub name: String,
}
