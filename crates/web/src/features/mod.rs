pub mod auth;
pub mod exercises;
pub mod session_exercises;
pub mod sessions;
pub mod sets;
pub mod workouts;

/// Position after the highest existing one; gaps left by deletes are kept.
pub(crate) fn next_position(existing: impl IntoIterator<Item = i32>) -> i32 {
    existing
        .into_iter()
        .max()
        .unwrap_or(0)
        .saturating_add(1)
}
