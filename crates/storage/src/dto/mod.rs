pub mod exercise;
pub mod session;
pub mod session_exercise;
pub mod user;
pub mod workout;
pub mod workout_set;
