pub mod dto;
pub mod error;
pub mod memory;
pub mod models;
pub mod repository;
pub mod result;
pub mod unit_of_work;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

pub use memory::InMemoryStore;
pub use repository::{AccountStore, ExerciseLibrary, Repository, Store};
pub use result::{StoreFailure, StoreOutcome, StoreResult, StoreStatus};
pub use unit_of_work::UnitOfWork;

use crate::models::{Session, SessionExercise, Workout, WorkoutSet};
use crate::repository::{
    account::AccountRepository, library::LibraryRepository, session::SessionRepository,
    session_exercise::SessionExerciseRepository, workout::WorkoutRepository,
    workout_set::WorkoutSetRepository,
};

/// Postgres-backed [`Store`].
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
    workouts: WorkoutRepository,
    sessions: SessionRepository,
    session_exercises: SessionExerciseRepository,
    sets: WorkoutSetRepository,
    accounts: AccountRepository,
    library: LibraryRepository,
}

impl Database {
    pub async fn new(database_url: &str) -> error::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        Ok(Self::from_pool(pool))
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self {
            workouts: WorkoutRepository::new(pool.clone()),
            sessions: SessionRepository::new(pool.clone()),
            session_exercises: SessionExerciseRepository::new(pool.clone()),
            sets: WorkoutSetRepository::new(pool.clone()),
            accounts: AccountRepository::new(pool.clone()),
            library: LibraryRepository::new(pool.clone()),
            pool,
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn run_migrations(&self) -> error::Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

impl Store for Database {
    fn workouts(&self) -> &dyn Repository<Workout> {
        &self.workouts
    }

    fn sessions(&self) -> &dyn Repository<Session> {
        &self.sessions
    }

    fn session_exercises(&self) -> &dyn Repository<SessionExercise> {
        &self.session_exercises
    }

    fn sets(&self) -> &dyn Repository<WorkoutSet> {
        &self.sets
    }

    fn accounts(&self) -> &dyn AccountStore {
        &self.accounts
    }

    fn library(&self) -> &dyn ExerciseLibrary {
        &self.library
    }
}
