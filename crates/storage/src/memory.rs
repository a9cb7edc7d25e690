use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{
    Exercise, MuscleCategory, MuscleGroup, Session, SessionExercise, User, Workout, WorkoutSet,
};
use crate::repository::{AccountStore, ExerciseLibrary, Repository, Store};
use crate::result::{StoreOutcome, StoreResult};
use crate::unit_of_work::{StagedEntity, UnitOfWork};

/// Rows of every table, in insertion order.
#[derive(Debug, Clone, Default)]
struct Tables {
    users: Vec<User>,
    workouts: Vec<Workout>,
    sessions: Vec<Session>,
    session_exercises: Vec<SessionExercise>,
    sets: Vec<WorkoutSet>,
    muscle_categories: Vec<MuscleCategory>,
    muscle_groups: Vec<MuscleGroup>,
    exercises: Vec<Exercise>,
}

fn find<T: Clone>(rows: &[T], what: &str, id: Uuid, key: impl Fn(&T) -> Uuid) -> StoreResult<T> {
    match rows.iter().find(|row| key(row) == id) {
        Some(row) => StoreResult::success(row.clone()),
        None => StoreResult::not_found(format!("{what} {id} does not exist")),
    }
}

fn find_mut<'a, T>(
    rows: &'a mut [T],
    id: Uuid,
    key: impl Fn(&T) -> Uuid,
) -> Option<&'a mut T> {
    rows.iter_mut().find(|row| key(row) == id)
}

// Mirrors the constraints declared in the Postgres migration so both stores
// report the same statuses.
impl Tables {
    fn insert_user(&mut self, user: &User) -> StoreResult<User> {
        if self.users.iter().any(|u| u.user_id == user.user_id) {
            return StoreResult::duplicate_name("users_pkey");
        }
        if self.users.iter().any(|u| u.email == user.email) {
            return StoreResult::duplicate_name("users_email_key");
        }
        self.users.push(user.clone());
        StoreResult::success(user.clone())
    }

    fn insert_workout(&mut self, workout: &Workout) -> StoreResult<Workout> {
        if self.workouts.iter().any(|w| w.workout_id == workout.workout_id) {
            return StoreResult::duplicate_name("workouts_pkey");
        }
        if !self.users.iter().any(|u| u.user_id == workout.owner_user_id) {
            return StoreResult::not_found(format!("user {} does not exist", workout.owner_user_id));
        }
        if self.workout_name_taken(workout) {
            return StoreResult::duplicate_name("workouts_owner_name_key");
        }
        self.workouts.push(workout.clone());
        StoreResult::success(workout.clone())
    }

    fn workout_name_taken(&self, workout: &Workout) -> bool {
        self.workouts.iter().any(|w| {
            w.owner_user_id == workout.owner_user_id
                && w.name == workout.name
                && w.workout_id != workout.workout_id
        })
    }

    fn rename_workout(&mut self, workout: &Workout) -> StoreResult<Workout> {
        if self.workout_name_taken(workout) {
            return StoreResult::duplicate_name("workouts_owner_name_key");
        }
        match find_mut(&mut self.workouts, workout.workout_id, |w| w.workout_id) {
            Some(existing) => {
                existing.name = workout.name.clone();
                StoreResult::success(existing.clone())
            }
            None => StoreResult::not_found(format!("workout {} does not exist", workout.workout_id)),
        }
    }

    fn delete_workout(&mut self, id: Uuid) -> StoreOutcome {
        let before = self.workouts.len();
        self.workouts.retain(|w| w.workout_id != id);
        if self.workouts.len() == before {
            return StoreResult::not_found(format!("workout {id} does not exist"));
        }
        let sessions: Vec<Uuid> = self
            .sessions
            .iter()
            .filter(|s| s.workout_id == id)
            .map(|s| s.session_id)
            .collect();
        for session_id in sessions {
            self.cascade_session(session_id);
        }
        StoreOutcome::done()
    }

    fn insert_session(&mut self, session: &Session) -> StoreResult<Session> {
        if self.sessions.iter().any(|s| s.session_id == session.session_id) {
            return StoreResult::duplicate_name("sessions_pkey");
        }
        if !self.workouts.iter().any(|w| w.workout_id == session.workout_id) {
            return StoreResult::not_found(format!("workout {} does not exist", session.workout_id));
        }
        self.sessions.push(session.clone());
        StoreResult::success(session.clone())
    }

    fn reschedule_session(&mut self, session: &Session) -> StoreResult<Session> {
        match find_mut(&mut self.sessions, session.session_id, |s| s.session_id) {
            Some(existing) => {
                existing.created_at = session.created_at;
                StoreResult::success(existing.clone())
            }
            None => StoreResult::not_found(format!("session {} does not exist", session.session_id)),
        }
    }

    fn delete_session(&mut self, id: Uuid) -> StoreOutcome {
        if !self.sessions.iter().any(|s| s.session_id == id) {
            return StoreResult::not_found(format!("session {id} does not exist"));
        }
        self.cascade_session(id);
        StoreOutcome::done()
    }

    fn cascade_session(&mut self, session_id: Uuid) {
        self.sessions.retain(|s| s.session_id != session_id);
        let children: Vec<Uuid> = self
            .session_exercises
            .iter()
            .filter(|se| se.session_id == session_id)
            .map(|se| se.session_exercise_id)
            .collect();
        for session_exercise_id in children {
            self.cascade_session_exercise(session_exercise_id);
        }
    }

    fn insert_session_exercise(&mut self, se: &SessionExercise) -> StoreResult<SessionExercise> {
        if self
            .session_exercises
            .iter()
            .any(|existing| existing.session_exercise_id == se.session_exercise_id)
        {
            return StoreResult::duplicate_name("session_exercises_pkey");
        }
        if !self.sessions.iter().any(|s| s.session_id == se.session_id) {
            return StoreResult::not_found(format!("session {} does not exist", se.session_id));
        }
        if !self.exercises.iter().any(|e| e.exercise_id == se.exercise_id) {
            return StoreResult::not_found(format!("exercise {} does not exist", se.exercise_id));
        }
        if se.exercise_number <= 0 {
            return StoreResult::invalid_operation("exercise_number must be positive");
        }
        self.session_exercises.push(se.clone());
        StoreResult::success(se.clone())
    }

    fn modify_session_exercise(&mut self, se: &SessionExercise) -> StoreResult<SessionExercise> {
        if !self.exercises.iter().any(|e| e.exercise_id == se.exercise_id) {
            return StoreResult::not_found(format!("exercise {} does not exist", se.exercise_id));
        }
        if se.exercise_number <= 0 {
            return StoreResult::invalid_operation("exercise_number must be positive");
        }
        match find_mut(&mut self.session_exercises, se.session_exercise_id, |e| {
            e.session_exercise_id
        }) {
            Some(existing) => {
                existing.exercise_id = se.exercise_id;
                existing.exercise_number = se.exercise_number;
                StoreResult::success(existing.clone())
            }
            None => StoreResult::not_found(format!(
                "session exercise {} does not exist",
                se.session_exercise_id
            )),
        }
    }

    fn delete_session_exercise(&mut self, id: Uuid) -> StoreOutcome {
        if !self
            .session_exercises
            .iter()
            .any(|se| se.session_exercise_id == id)
        {
            return StoreResult::not_found(format!("session exercise {id} does not exist"));
        }
        self.cascade_session_exercise(id);
        StoreOutcome::done()
    }

    fn cascade_session_exercise(&mut self, session_exercise_id: Uuid) {
        self.session_exercises
            .retain(|se| se.session_exercise_id != session_exercise_id);
        self.sets
            .retain(|set| set.session_exercise_id != session_exercise_id);
    }

    fn check_set(set: &WorkoutSet) -> Option<&'static str> {
        if set.set_number <= 0 {
            Some("set_number must be positive")
        } else if set.weight.is_sign_negative() {
            Some("weight must not be negative")
        } else if set.reps < 0 {
            Some("reps must not be negative")
        } else {
            None
        }
    }

    fn insert_set(&mut self, set: &WorkoutSet) -> StoreResult<WorkoutSet> {
        if self.sets.iter().any(|s| s.set_id == set.set_id) {
            return StoreResult::duplicate_name("sets_pkey");
        }
        if !self
            .session_exercises
            .iter()
            .any(|se| se.session_exercise_id == set.session_exercise_id)
        {
            return StoreResult::not_found(format!(
                "session exercise {} does not exist",
                set.session_exercise_id
            ));
        }
        if let Some(reason) = Self::check_set(set) {
            return StoreResult::invalid_operation(reason);
        }
        self.sets.push(set.clone());
        StoreResult::success(set.clone())
    }

    fn modify_set(&mut self, set: &WorkoutSet) -> StoreResult<WorkoutSet> {
        if let Some(reason) = Self::check_set(set) {
            return StoreResult::invalid_operation(reason);
        }
        match find_mut(&mut self.sets, set.set_id, |s| s.set_id) {
            Some(existing) => {
                existing.set_number = set.set_number;
                existing.weight = set.weight;
                existing.reps = set.reps;
                existing.warm_up = set.warm_up;
                StoreResult::success(existing.clone())
            }
            None => StoreResult::not_found(format!("set {} does not exist", set.set_id)),
        }
    }

    fn delete_set(&mut self, id: Uuid) -> StoreOutcome {
        let before = self.sets.len();
        self.sets.retain(|s| s.set_id != id);
        if self.sets.len() == before {
            return StoreResult::not_found(format!("set {id} does not exist"));
        }
        StoreOutcome::done()
    }

    fn insert_exercise(&mut self, exercise: &Exercise) -> StoreResult<Exercise> {
        if self
            .exercises
            .iter()
            .any(|e| e.exercise_id == exercise.exercise_id)
        {
            return StoreResult::duplicate_name("exercises_pkey");
        }
        if let Some(group_id) = exercise.muscle_group_id {
            if !self.muscle_groups.iter().any(|g| g.muscle_group_id == group_id) {
                return StoreResult::not_found(format!("muscle group {group_id} does not exist"));
            }
        }
        self.exercises.push(exercise.clone());
        StoreResult::success(exercise.clone())
    }

    fn system_library() -> Self {
        let category = |id: u128, name: &str| MuscleCategory {
            muscle_category_id: Uuid::from_u128(id),
            owner_user_id: None,
            name: name.to_string(),
        };
        let group = |id: u128, category: u128, name: &str| MuscleGroup {
            muscle_group_id: Uuid::from_u128(id),
            muscle_category_id: Uuid::from_u128(category),
            owner_user_id: None,
            name: name.to_string(),
        };
        let exercise = |id: u128, group: u128, name: &str| Exercise {
            exercise_id: Uuid::from_u128(id),
            muscle_group_id: Some(Uuid::from_u128(group)),
            owner_user_id: None,
            name: name.to_string(),
        };

        Self {
            muscle_categories: vec![category(0x101, "Upper Body"), category(0x102, "Lower Body")],
            muscle_groups: vec![
                group(0x201, 0x101, "Chest"),
                group(0x202, 0x101, "Back"),
                group(0x203, 0x101, "Shoulders"),
                group(0x204, 0x102, "Legs"),
            ],
            exercises: vec![
                exercise(0x301, 0x201, "Bench Press"),
                exercise(0x302, 0x202, "Deadlift"),
                exercise(0x303, 0x202, "Pull Up"),
                exercise(0x304, 0x203, "Overhead Press"),
                exercise(0x305, 0x204, "Squat"),
            ],
            ..Self::default()
        }
    }
}

/// In-memory [`Store`] with the same constraint and cascade semantics as the
/// Postgres schema.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// A store preloaded with the system exercise library.
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables::system_library()),
        }
    }

    fn read<T>(&self, f: impl FnOnce(&RwLockReadGuard<'_, Tables>) -> StoreResult<T>) -> StoreResult<T> {
        match self.tables.read() {
            Ok(tables) => f(&tables),
            Err(_) => StoreResult::database_error("in-memory store lock poisoned"),
        }
    }

    fn write<T>(
        &self,
        f: impl FnOnce(&mut RwLockWriteGuard<'_, Tables>) -> StoreResult<T>,
    ) -> StoreResult<T> {
        match self.tables.write() {
            Ok(mut tables) => f(&mut tables),
            Err(_) => StoreResult::database_error("in-memory store lock poisoned"),
        }
    }
}

#[async_trait]
impl Repository<Workout> for InMemoryStore {
    async fn get_by_id(&self, id: Uuid) -> StoreResult<Workout> {
        self.read(|t| find(&t.workouts, "workout", id, |w| w.workout_id))
    }

    async fn get_by_parent_id(&self, owner_user_id: Uuid) -> StoreResult<Vec<Workout>> {
        self.read(|t| {
            let mut workouts: Vec<Workout> = t
                .workouts
                .iter()
                .filter(|w| w.owner_user_id == owner_user_id)
                .cloned()
                .collect();
            workouts.sort_by_key(|w| w.created_at);
            StoreResult::success(workouts)
        })
    }

    async fn add(&self, workout: &Workout) -> StoreResult<Workout> {
        self.write(|t| t.insert_workout(workout))
    }

    async fn update(&self, workout: &Workout) -> StoreResult<Workout> {
        self.write(|t| t.rename_workout(workout))
    }

    async fn delete(&self, id: Uuid) -> StoreOutcome {
        self.write(|t| t.delete_workout(id))
    }
}

#[async_trait]
impl Repository<Session> for InMemoryStore {
    async fn get_by_id(&self, id: Uuid) -> StoreResult<Session> {
        self.read(|t| find(&t.sessions, "session", id, |s| s.session_id))
    }

    async fn get_by_parent_id(&self, workout_id: Uuid) -> StoreResult<Vec<Session>> {
        self.read(|t| {
            let mut sessions: Vec<Session> = t
                .sessions
                .iter()
                .filter(|s| s.workout_id == workout_id)
                .cloned()
                .collect();
            sessions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            StoreResult::success(sessions)
        })
    }

    async fn add(&self, session: &Session) -> StoreResult<Session> {
        self.write(|t| t.insert_session(session))
    }

    async fn update(&self, session: &Session) -> StoreResult<Session> {
        self.write(|t| t.reschedule_session(session))
    }

    async fn delete(&self, id: Uuid) -> StoreOutcome {
        self.write(|t| t.delete_session(id))
    }
}

#[async_trait]
impl Repository<SessionExercise> for InMemoryStore {
    async fn get_by_id(&self, id: Uuid) -> StoreResult<SessionExercise> {
        self.read(|t| {
            find(&t.session_exercises, "session exercise", id, |se| {
                se.session_exercise_id
            })
        })
    }

    async fn get_by_parent_id(&self, session_id: Uuid) -> StoreResult<Vec<SessionExercise>> {
        self.read(|t| {
            let mut exercises: Vec<SessionExercise> = t
                .session_exercises
                .iter()
                .filter(|se| se.session_id == session_id)
                .cloned()
                .collect();
            exercises.sort_by_key(|se| se.exercise_number);
            StoreResult::success(exercises)
        })
    }

    async fn add(&self, se: &SessionExercise) -> StoreResult<SessionExercise> {
        self.write(|t| t.insert_session_exercise(se))
    }

    async fn update(&self, se: &SessionExercise) -> StoreResult<SessionExercise> {
        self.write(|t| t.modify_session_exercise(se))
    }

    async fn delete(&self, id: Uuid) -> StoreOutcome {
        self.write(|t| t.delete_session_exercise(id))
    }
}

#[async_trait]
impl Repository<WorkoutSet> for InMemoryStore {
    async fn get_by_id(&self, id: Uuid) -> StoreResult<WorkoutSet> {
        self.read(|t| find(&t.sets, "set", id, |s| s.set_id))
    }

    async fn get_by_parent_id(&self, session_exercise_id: Uuid) -> StoreResult<Vec<WorkoutSet>> {
        self.read(|t| {
            let mut sets: Vec<WorkoutSet> = t
                .sets
                .iter()
                .filter(|s| s.session_exercise_id == session_exercise_id)
                .cloned()
                .collect();
            sets.sort_by_key(|s| s.set_number);
            StoreResult::success(sets)
        })
    }

    async fn add(&self, set: &WorkoutSet) -> StoreResult<WorkoutSet> {
        self.write(|t| t.insert_set(set))
    }

    async fn update(&self, set: &WorkoutSet) -> StoreResult<WorkoutSet> {
        self.write(|t| t.modify_set(set))
    }

    async fn delete(&self, id: Uuid) -> StoreOutcome {
        self.write(|t| t.delete_set(id))
    }
}

#[async_trait]
impl AccountStore for InMemoryStore {
    async fn get_user_by_id(&self, id: Uuid) -> StoreResult<User> {
        self.read(|t| find(&t.users, "user", id, |u| u.user_id))
    }

    async fn get_user_by_email(&self, email: &str) -> StoreResult<User> {
        self.read(|t| match t.users.iter().find(|u| u.email == email) {
            Some(user) => StoreResult::success(user.clone()),
            None => StoreResult::not_found("no user with that email"),
        })
    }

    /// Applies the batch to a copy of the tables and swaps it in only if every
    /// insert succeeded. The write lock is held throughout, so readers see
    /// either none or all of the batch.
    async fn commit(&self, unit: UnitOfWork) -> StoreOutcome {
        self.write(|tables| {
            let mut draft = (**tables).clone();
            for entity in unit.staged() {
                let outcome = match entity {
                    StagedEntity::User(user) => draft.insert_user(user).map(|_| ()),
                    StagedEntity::Workout(workout) => draft.insert_workout(workout).map(|_| ()),
                };
                if let StoreResult::Failure(failure) = outcome {
                    tracing::warn!(staged = unit.len(), %failure, "unit of work rolled back");
                    return StoreResult::Failure(failure);
                }
            }
            **tables = draft;
            StoreOutcome::done()
        })
    }
}

#[async_trait]
impl ExerciseLibrary for InMemoryStore {
    async fn get_exercise(&self, id: Uuid) -> StoreResult<Exercise> {
        self.read(|t| find(&t.exercises, "exercise", id, |e| e.exercise_id))
    }

    async fn visible_exercises(&self, user_id: Uuid) -> StoreResult<Vec<Exercise>> {
        self.read(|t| {
            let mut exercises: Vec<Exercise> = t
                .exercises
                .iter()
                .filter(|e| e.is_visible_to(user_id))
                .cloned()
                .collect();
            exercises.sort_by(|a, b| a.name.cmp(&b.name));
            StoreResult::success(exercises)
        })
    }

    async fn add_exercise(&self, exercise: &Exercise) -> StoreResult<Exercise> {
        self.write(|t| t.insert_exercise(exercise))
    }

    async fn get_muscle_group(&self, id: Uuid) -> StoreResult<MuscleGroup> {
        self.read(|t| find(&t.muscle_groups, "muscle group", id, |g| g.muscle_group_id))
    }

    async fn visible_muscle_groups(&self, user_id: Uuid) -> StoreResult<Vec<MuscleGroup>> {
        self.read(|t| {
            let mut groups: Vec<MuscleGroup> = t
                .muscle_groups
                .iter()
                .filter(|g| g.is_visible_to(user_id))
                .cloned()
                .collect();
            groups.sort_by(|a, b| a.name.cmp(&b.name));
            StoreResult::success(groups)
        })
    }

    async fn visible_muscle_categories(&self, user_id: Uuid) -> StoreResult<Vec<MuscleCategory>> {
        self.read(|t| {
            let mut categories: Vec<MuscleCategory> = t
                .muscle_categories
                .iter()
                .filter(|c| c.is_visible_to(user_id))
                .cloned()
                .collect();
            categories.sort_by(|a, b| a.name.cmp(&b.name));
            StoreResult::success(categories)
        })
    }
}

impl Store for InMemoryStore {
    fn workouts(&self) -> &dyn Repository<Workout> {
        self
    }

    fn sessions(&self) -> &dyn Repository<Session> {
        self
    }

    fn session_exercises(&self) -> &dyn Repository<SessionExercise> {
        self
    }

    fn sets(&self) -> &dyn Repository<WorkoutSet> {
        self
    }

    fn accounts(&self) -> &dyn AccountStore {
        self
    }

    fn library(&self) -> &dyn ExerciseLibrary {
        self
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::result::StoreStatus;

    const BENCH_PRESS: Uuid = Uuid::from_u128(0x301);

    fn registration(email: &str, names: &[&str]) -> (User, UnitOfWork) {
        let user = User::new(email, "hash");
        let mut unit = UnitOfWork::new();
        unit.stage_user(user.clone());
        for name in names {
            unit.stage_workout(Workout::new(user.user_id, *name));
        }
        (user, unit)
    }

    async fn seeded_set(store: &InMemoryStore) -> (Workout, SessionExercise, WorkoutSet) {
        let (user, unit) = registration("lifter@example.com", &["Push"]);
        assert!(store.commit(unit).await.is_success());
        let workouts = store.workouts().get_by_parent_id(user.user_id).await;
        let workout = workouts.into_result().unwrap()[0].clone();
        let session = Session::new(workout.workout_id, workout.created_at);
        store.sessions().add(&session).await.into_result().unwrap();
        let se = SessionExercise::new(session.session_id, BENCH_PRESS, 1);
        store.session_exercises().add(&se).await.into_result().unwrap();
        let set = WorkoutSet::new(se.session_exercise_id, 1, Decimal::new(1000, 1), 5, false);
        store.sets().add(&set).await.into_result().unwrap();
        (workout, se, set)
    }

    #[tokio::test]
    async fn commit_persists_every_staged_entity() {
        let store = InMemoryStore::new();
        let (user, unit) = registration("a@example.com", &["Push", "Pull", "Legs"]);

        assert!(store.commit(unit).await.is_success());

        let workouts = store
            .workouts()
            .get_by_parent_id(user.user_id)
            .await
            .into_result()
            .unwrap();
        let names: Vec<&str> = workouts.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, ["Push", "Pull", "Legs"]);
    }

    #[tokio::test]
    async fn collision_on_second_workout_rolls_back_the_user() {
        let store = InMemoryStore::new();
        let (user, unit) = registration("a@example.com", &["Push", "Push", "Legs"]);

        let outcome = store.commit(unit).await;

        assert_eq!(outcome.status(), StoreStatus::DuplicateName);
        assert_eq!(
            store.get_user_by_id(user.user_id).await.status(),
            StoreStatus::NotFound
        );
        let workouts = store.workouts().get_by_parent_id(user.user_id).await.into_result().unwrap();
        assert!(workouts.is_empty());
    }

    #[tokio::test]
    async fn duplicate_email_is_a_duplicate_name() {
        let store = InMemoryStore::new();
        let (first, unit) = registration("a@example.com", &["Push"]);
        assert!(store.commit(unit).await.is_success());

        let (_, unit) = registration("a@example.com", &["Push"]);
        assert_eq!(store.commit(unit).await.status(), StoreStatus::DuplicateName);

        let workouts = store.workouts().get_by_parent_id(first.user_id).await.into_result().unwrap();
        assert_eq!(workouts.len(), 1);
    }

    #[tokio::test]
    async fn deleting_a_workout_cascades_to_sets() {
        let store = InMemoryStore::new();
        let (workout, se, set) = seeded_set(&store).await;

        assert!(store.workouts().delete(workout.workout_id).await.is_success());

        let se = store.session_exercises().get_by_id(se.session_exercise_id).await;
        assert_eq!(se.status(), StoreStatus::NotFound);
        let set = store.sets().get_by_id(set.set_id).await;
        assert_eq!(set.status(), StoreStatus::NotFound);
    }

    #[tokio::test]
    async fn deleting_a_leaf_leaves_siblings_alone() {
        let store = InMemoryStore::new();
        let (_, se, set) = seeded_set(&store).await;
        let sibling = WorkoutSet::new(se.session_exercise_id, 2, Decimal::new(1000, 1), 3, false);
        store.sets().add(&sibling).await.into_result().unwrap();

        assert!(store.sets().delete(set.set_id).await.is_success());

        let remaining = store.sets().get_by_parent_id(se.session_exercise_id).await;
        let remaining = remaining.into_result().unwrap();
        assert_eq!(remaining, vec![sibling]);
    }

    #[tokio::test]
    async fn child_with_missing_parent_is_not_found() {
        let store = InMemoryStore::new();
        let orphan = Session::new(Uuid::new_v4(), chrono::Utc::now().naive_utc());

        assert_eq!(store.sessions().add(&orphan).await.status(), StoreStatus::NotFound);
    }

    #[tokio::test]
    async fn renaming_onto_a_sibling_name_is_a_duplicate() {
        let store = InMemoryStore::new();
        let (user, unit) = registration("a@example.com", &["Push", "Pull"]);
        assert!(store.commit(unit).await.is_success());
        let workouts = store.workouts().get_by_parent_id(user.user_id).await.into_result().unwrap();

        let renamed = Workout {
            name: "Pull".to_string(),
            ..workouts[0].clone()
        };
        let outcome = store.workouts().update(&renamed).await;
        assert_eq!(outcome.status(), StoreStatus::DuplicateName);
    }

    #[tokio::test]
    async fn negative_reps_are_an_invalid_operation() {
        let store = InMemoryStore::new();
        let (_, _, set) = seeded_set(&store).await;

        let invalid = WorkoutSet { reps: -1, ..set };
        let outcome = store.sets().update(&invalid).await;
        assert_eq!(outcome.status(), StoreStatus::InvalidOperation);
    }

    #[tokio::test]
    async fn library_hides_other_users_exercises() {
        let store = InMemoryStore::new();
        let owner = Uuid::new_v4();
        let custom = Exercise::new(owner, None, "Zercher Squat");
        store.add_exercise(&custom).await.into_result().unwrap();

        let own = store.visible_exercises(owner).await.into_result().unwrap();
        let other = store.visible_exercises(Uuid::new_v4()).await.into_result().unwrap();

        assert_eq!(own.len(), other.len() + 1);
        assert!(own.contains(&custom));
        assert!(!other.contains(&custom));
    }
}
