//! Domain core for the gym training plan service.
//!
//! Holds the plan/day/exercise types, request commands and their
//! validation, the [`store::PlanStore`] gateway trait, and the
//! [`service::TrainingPlanService`] that orchestrates multi-row plan
//! creation, listing, activation and deletion. Nothing in this crate
//! performs I/O directly; persistence is reached through the store trait.

pub mod draft;
pub mod error;
pub mod plan;
pub mod service;
pub mod store;
pub mod types;
pub mod workout;

#[cfg(any(test, feature = "test-support"))]
pub mod memory;
