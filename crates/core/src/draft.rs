//! Unpersisted plan drafts produced by the PDF import pipeline.
//!
//! A draft mirrors the shape of [`CreateCompletePlan`] so that once the
//! user confirms it, it can be submitted as a regular creation command
//! with [`PlanSource::PdfImport`].

use serde::{Deserialize, Serialize};

use crate::plan::{CreateCompletePlan, CreateDayExercise, CreateTrainingDay, PlanSource};

/// Outcome tag the extraction step attaches to every draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftStatus {
    Ok,
    Error,
}

/// Candidate plan awaiting user confirmation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingPlanDraft {
    pub status: DraftStatus,
    pub name: String,
    pub description: Option<String>,
    pub training_days: Vec<DayDraft>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayDraft {
    pub weekday: i16,
    pub exercises: Vec<ExerciseDraft>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseDraft {
    pub exercise_name: String,
    pub order_index: i32,
    pub sets: i32,
    pub repetitions: i32,
    pub rest_time_seconds: i32,
}

impl TrainingPlanDraft {
    /// Turn a confirmed draft into a creation command tagged as a PDF import.
    pub fn into_command(self) -> CreateCompletePlan {
        CreateCompletePlan {
            name: self.name,
            description: self.description,
            training_days: self
                .training_days
                .into_iter()
                .map(|day| CreateTrainingDay {
                    weekday: day.weekday,
                    exercises: day
                        .exercises
                        .into_iter()
                        .map(|ex| CreateDayExercise {
                            exercise_name: ex.exercise_name,
                            order_index: ex.order_index,
                            sets: ex.sets,
                            repetitions: ex.repetitions,
                            rest_time_seconds: ex.rest_time_seconds,
                        })
                        .collect(),
                })
                .collect(),
            source: PlanSource::PdfImport,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_converts_to_pdf_import_command() {
        let draft = TrainingPlanDraft {
            status: DraftStatus::Ok,
            name: "Strength".to_string(),
            description: Some("3 days".to_string()),
            training_days: vec![DayDraft {
                weekday: 1,
                exercises: vec![ExerciseDraft {
                    exercise_name: "Squat".to_string(),
                    order_index: 0,
                    sets: 4,
                    repetitions: 8,
                    rest_time_seconds: 120,
                }],
            }],
        };

        let command = draft.into_command();
        assert_eq!(command.source, PlanSource::PdfImport);
        assert_eq!(command.training_days.len(), 1);
        assert_eq!(command.training_days[0].exercises[0].exercise_name, "Squat");
        assert!(command.validate_command().is_ok());
    }

    #[test]
    fn status_serializes_as_lowercase_tag() {
        assert_eq!(serde_json::to_value(DraftStatus::Ok).unwrap(), "ok");
        assert_eq!(serde_json::to_value(DraftStatus::Error).unwrap(), "error");
    }
}
