use std::{env, error::Error, sync::Arc};

use dotenv::dotenv;
use log::debug;
use sqlx::{Connection as SqlxConnection, Executor, SqliteConnection};
use tokio::sync::{Mutex, MutexGuard};

use crate::schema::SCHEMA_QUERY;

/// Sized for one small append-only table written by a single service.
const SETUP_QUERY: &str = "PRAGMA journal_mode = WAL;
PRAGMA synchronous = NORMAL;
PRAGMA busy_timeout = 2000;";

#[derive(Clone)]
pub struct Connection {
    inner: Arc<Mutex<SqliteConnection>>,
}

impl Connection {
    pub async fn establish() -> Result<Self, Box<dyn Error>> {
        dotenv().ok();
        let database_url = env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?;
        Self::open(&database_url).await
    }

    pub async fn open(database_url: &str) -> Result<Self, Box<dyn Error>> {
        let mut connection = SqliteConnection::connect(database_url).await?;

        connection.execute(SETUP_QUERY).await?;
        debug!("Ensuring profiles table exists");
        connection.execute(SCHEMA_QUERY).await?;

        Ok(Self {
            inner: Arc::new(Mutex::new(connection)),
        })
    }

    pub async fn lock(&self) -> MutexGuard<'_, SqliteConnection> {
        self.inner.lock().await
    }
}
