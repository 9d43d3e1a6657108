pub mod exercise_repo;
pub mod training_day_exercise_repo;
pub mod training_day_repo;
pub mod training_plan_repo;

pub use exercise_repo::ExerciseRepo;
pub use training_day_exercise_repo::TrainingDayExerciseRepo;
pub use training_day_repo::TrainingDayRepo;
pub use training_plan_repo::TrainingPlanRepo;
