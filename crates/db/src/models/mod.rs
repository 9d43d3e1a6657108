pub mod exercise;
pub mod training_day;
pub mod training_day_exercise;
pub mod training_plan;
