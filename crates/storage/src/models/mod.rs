pub mod exercise;
pub mod session;
pub mod session_exercise;
pub mod user;
pub mod workout;
pub mod workout_set;

pub use exercise::{Exercise, MuscleCategory, MuscleGroup};
pub use session::Session;
pub use session_exercise::SessionExercise;
pub use user::User;
pub use workout::Workout;
pub use workout_set::WorkoutSet;
