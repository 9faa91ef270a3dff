use std::error::Error;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use num_traits::{FromPrimitive, ToPrimitive};
use nutriplan_model::profile::ProfileRecord;
use serde::Serialize;
use sqlx::{sqlite::SqliteRow, Row};
use uuid::Uuid;

use super::connection::Connection;

type Result<T> = std::result::Result<T, Box<dyn Error + Send + Sync>>;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StoredProfile {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub record: ProfileRecord,
}

fn code<T: ToPrimitive + std::fmt::Debug>(value: T) -> Result<i32> {
    value
        .to_i32()
        .ok_or_else(|| format!("No storage code for {:?}", value).into())
}

fn decode<T: FromPrimitive>(row: &SqliteRow, column: &str) -> Result<T> {
    let code: i32 = row.try_get(column)?;
    T::from_i32(code).ok_or_else(|| format!("Invalid {} code {}", column, code).into())
}

impl TryFrom<SqliteRow> for StoredProfile {
    type Error = Box<dyn Error + Send + Sync>;

    fn try_from(row: SqliteRow) -> Result<Self> {
        let id: Vec<u8> = row.try_get("id")?;
        let created_at: i64 = row.try_get("created_at")?;
        let age: i64 = row.try_get("age")?;

        Ok(Self {
            id: Uuid::from_slice(&id)?,
            created_at: DateTime::from_timestamp(created_at, 0)
                .ok_or_else(|| format!("Invalid timestamp {}", created_at))?,
            record: ProfileRecord {
                user_id: row.try_get("user_id")?,
                weight: row.try_get("weight")?,
                height: row.try_get("height")?,
                age: u32::try_from(age)?,
                gender: decode(&row, "gender")?,
                activity_level: decode(&row, "activity_level")?,
                goal: decode(&row, "goal")?,
            },
        })
    }
}

#[mockall::automock]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn store_profile(&self, record: ProfileRecord) -> Result<Uuid>;
    async fn fetch_profiles(&self) -> Result<Vec<StoredProfile>>;
}

#[derive(Clone)]
pub struct ProfileRepositoryImpl {
    connection: Connection,
}

impl ProfileRepositoryImpl {
    pub fn new(connection: Connection) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryImpl {
    async fn store_profile(&self, record: ProfileRecord) -> Result<Uuid> {
        let id = Uuid::new_v4();
        let gender = code(record.gender)?;
        let activity_level = code(record.activity_level)?;
        let goal = code(record.goal)?;

        let mut conn = self.connection.lock().await;
        debug!("Storing profile {} for user {}", id, record.user_id);
        sqlx::query(
            "INSERT INTO profiles \
            (id, user_id, weight, height, age, gender, activity_level, goal, created_at) \
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id.as_bytes().to_vec())
        .bind(record.user_id.clone())
        .bind(record.weight)
        .bind(record.height)
        .bind(i64::from(record.age))
        .bind(gender)
        .bind(activity_level)
        .bind(goal)
        .bind(Utc::now().timestamp())
        .execute(&mut *conn)
        .await?;

        Ok(id)
    }

    async fn fetch_profiles(&self) -> Result<Vec<StoredProfile>> {
        let mut conn = self.connection.lock().await;
        debug!("Fetching profiles");
        sqlx::query(
            "SELECT id, user_id, weight, height, age, gender, activity_level, goal, created_at \
            FROM profiles ORDER BY created_at, rowid",
        )
        .fetch_all(&mut *conn)
        .await?
        .into_iter()
        .map(StoredProfile::try_from)
        .collect()
    }
}
