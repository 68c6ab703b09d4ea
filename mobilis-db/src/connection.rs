use std::{env, sync::Arc};

use dotenv::dotenv;
use log::debug;
use sqlx::{Connection as SqlxConnection, Executor, SqliteConnection};
use tokio::sync::{Mutex, MutexGuard};

use crate::metrics::RepositoryError;

const SETUP_QUERY: &str = "PRAGMA journal_mode = WAL;
PRAGMA synchronous = NORMAL;

CREATE TABLE IF NOT EXISTS measurements (
    measurement_ref BLOB PRIMARY KEY,
    recorded_at INTEGER NOT NULL,
    height REAL NOT NULL,
    weight REAL NOT NULL,
    age INTEGER NOT NULL,
    gender TEXT NOT NULL,
    activity_level TEXT NOT NULL,
    neck REAL NOT NULL,
    waist REAL NOT NULL,
    hip REAL
);

CREATE TABLE IF NOT EXISTS metrics (
    measurement_ref BLOB PRIMARY KEY,
    bmi REAL NOT NULL,
    health TEXT NOT NULL,
    body_fat REAL NOT NULL,
    body_fat_mass REAL NOT NULL,
    lean_body_mass REAL NOT NULL,
    goal TEXT NOT NULL,
    goal_name TEXT NOT NULL,
    bmi_category TEXT NOT NULL,
    body_fat_category TEXT NOT NULL,
    reasoning TEXT NOT NULL,
    bmr INTEGER NOT NULL,
    tdee INTEGER NOT NULL,
    protein_min INTEGER NOT NULL,
    protein_max INTEGER NOT NULL,
    carbs_min INTEGER NOT NULL,
    carbs_max INTEGER NOT NULL,
    fats_min INTEGER NOT NULL,
    fats_max INTEGER NOT NULL
);";

#[derive(Clone)]
pub struct Connection {
    inner: Arc<Mutex<SqliteConnection>>,
}

impl Connection {
    pub async fn establish() -> Result<Self, RepositoryError> {
        dotenv().ok();
        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        Self::open(&database_url).await
    }

    pub async fn open(database_url: &str) -> Result<Self, RepositoryError> {
        let mut connection = SqliteConnection::connect(database_url).await?;

        debug!("Applying connection settings and schema");
        connection.execute(SETUP_QUERY).await?;

        Ok(Self {
            inner: Arc::new(Mutex::new(connection)),
        })
    }

    pub async fn lock(&self) -> MutexGuard<'_, SqliteConnection> {
        self.inner.lock().await
    }
}
