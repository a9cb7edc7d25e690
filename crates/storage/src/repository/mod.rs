use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{
    Exercise, MuscleCategory, MuscleGroup, Session, SessionExercise, User, Workout, WorkoutSet,
};
use crate::result::{StoreOutcome, StoreResult};
use crate::unit_of_work::UnitOfWork;

pub mod account;
pub mod library;
pub mod session;
pub mod session_exercise;
pub mod workout;
pub mod workout_set;

/// Single-record operations for one entity of the workout tree.
///
/// `get_by_parent_id` takes the id of the entity's parent: the owning user for
/// workouts, the workout for sessions, the session for session exercises and
/// the session exercise for sets. Results are ordered by position where the
/// entity has one.
#[async_trait]
pub trait Repository<T>: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> StoreResult<T>;

    async fn get_by_parent_id(&self, parent_id: Uuid) -> StoreResult<Vec<T>>;

    async fn add(&self, entity: &T) -> StoreResult<T>;

    /// Writes the mutable fields of `entity`; parent keys are left untouched.
    async fn update(&self, entity: &T) -> StoreResult<T>;

    /// Deletes the row and, through the parent keys, every descendant.
    async fn delete(&self, id: Uuid) -> StoreOutcome;
}

#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn get_user_by_id(&self, id: Uuid) -> StoreResult<User>;

    async fn get_user_by_email(&self, email: &str) -> StoreResult<User>;

    /// Flushes every staged entity in one transaction.
    async fn commit(&self, unit: UnitOfWork) -> StoreOutcome;
}

/// Reference library lookups, scoped to what a user can see.
#[async_trait]
pub trait ExerciseLibrary: Send + Sync {
    async fn get_exercise(&self, id: Uuid) -> StoreResult<Exercise>;

    async fn visible_exercises(&self, user_id: Uuid) -> StoreResult<Vec<Exercise>>;

    async fn add_exercise(&self, exercise: &Exercise) -> StoreResult<Exercise>;

    async fn get_muscle_group(&self, id: Uuid) -> StoreResult<MuscleGroup>;

    async fn visible_muscle_groups(&self, user_id: Uuid) -> StoreResult<Vec<MuscleGroup>>;

    async fn visible_muscle_categories(&self, user_id: Uuid) -> StoreResult<Vec<MuscleCategory>>;
}

/// Every persistence collaborator the web layer depends on.
pub trait Store: Send + Sync {
    fn workouts(&self) -> &dyn Repository<Workout>;

    fn sessions(&self) -> &dyn Repository<Session>;

    fn session_exercises(&self) -> &dyn Repository<SessionExercise>;

    fn sets(&self) -> &dyn Repository<WorkoutSet>;

    fn accounts(&self) -> &dyn AccountStore;

    fn library(&self) -> &dyn ExerciseLibrary;
}
