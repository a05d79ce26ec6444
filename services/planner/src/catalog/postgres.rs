use std::path::Path;

use async_trait::async_trait;
use seatplan_id::RoomId;
use seatplan_seating::Classroom;
use sqlx::{
    migrate::{MigrateError, Migrator},
    postgres::{PgPoolOptions, PgRow},
    FromRow, PgPool, Row,
};
use thiserror::Error;
use tracing::{info, instrument};

use super::{CatalogError, RoomCatalog};
use crate::config::PgConfig;

/// SQLSTATE for unique_violation.
const UNIQUE_VIOLATION: &str = "23505";

/// Failures while bringing the Postgres catalog up at startup.
#[derive(Debug, Error)]
pub enum PgSetupError {
    #[error("failed to connect to postgres: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("failed to apply migrations from {dir}: {source}")]
    Migrate {
        dir: String,
        #[source]
        source: MigrateError,
    },
}

/// Postgres-backed catalog over the `classrooms` table.
#[derive(Debug, Clone)]
pub struct PgCatalog {
    pool: PgPool,
}

impl PgCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a connection pool sized by `config`.
    pub async fn connect(config: &PgConfig) -> Result<Self, PgSetupError> {
        info!(
            max_connections = config.max_connections,
            min_connections = config.min_connections,
            "Connecting to room catalog database"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect(&config.database_url)
            .await
            .map_err(PgSetupError::Connect)?;

        Ok(Self::new(pool))
    }

    /// Create or upgrade the `classrooms` table from the SQL files in `dir`.
    pub async fn migrate(&self, dir: &Path) -> Result<(), PgSetupError> {
        let to_setup_error = |source| PgSetupError::Migrate {
            dir: dir.display().to_string(),
            source,
        };

        let migrator = Migrator::new(dir.to_path_buf()).await.map_err(to_setup_error)?;
        migrator.run(&self.pool).await.map_err(to_setup_error)?;

        info!(migrations_dir = %dir.display(), "Room catalog schema is up to date");
        Ok(())
    }
}

#[derive(Debug)]
struct ClassroomRow {
    room_id: String,
    capacity: i32,
    floor_no: i32,
    near_washroom: bool,
}

impl<'r> FromRow<'r, PgRow> for ClassroomRow {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            room_id: row.try_get("room_id")?,
            capacity: row.try_get("capacity")?,
            floor_no: row.try_get("floor_no")?,
            near_washroom: row.try_get("near_washroom")?,
        })
    }
}

impl TryFrom<ClassroomRow> for Classroom {
    type Error = CatalogError;

    fn try_from(row: ClassroomRow) -> Result<Self, Self::Error> {
        let corrupt = |reason: String| CatalogError::Corrupt {
            room_id: row.room_id.clone(),
            reason,
        };
        let room_id = RoomId::parse(&row.room_id).map_err(|e| corrupt(e.to_string()))?;
        let capacity = u32::try_from(row.capacity)
            .map_err(|_| corrupt(format!("negative capacity {}", row.capacity)))?;
        Classroom::new(room_id, capacity, row.floor_no, row.near_washroom)
            .map_err(|e| corrupt(e.to_string()))
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some(UNIQUE_VIOLATION))
}

#[async_trait]
impl RoomCatalog for PgCatalog {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Classroom>, CatalogError> {
        let rows = sqlx::query_as::<_, ClassroomRow>(
            r#"
            SELECT room_id, capacity, floor_no, near_washroom
            FROM classrooms
            ORDER BY seq ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(CatalogError::Backend)?;

        rows.into_iter().map(Classroom::try_from).collect()
    }

    #[instrument(skip(self), fields(room_id = %room_id))]
    async fn get(&self, room_id: &RoomId) -> Result<Classroom, CatalogError> {
        let row = sqlx::query_as::<_, ClassroomRow>(
            r#"
            SELECT room_id, capacity, floor_no, near_washroom
            FROM classrooms
            WHERE room_id = $1
            "#,
        )
        .bind(room_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(CatalogError::Backend)?;

        match row {
            Some(row) => Classroom::try_from(row),
            None => Err(CatalogError::NotFound(room_id.clone())),
        }
    }

    #[instrument(skip(self, room), fields(room_id = %room.room_id()))]
    async fn insert(&self, room: Classroom) -> Result<(), CatalogError> {
        // Classroom::new caps capacity at Classroom::MAX_CAPACITY (i32::MAX).
        let capacity = room.capacity() as i32;

        let result = sqlx::query(
            r#"
            INSERT INTO classrooms (room_id, capacity, floor_no, near_washroom)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(room.room_id().as_str())
        .bind(capacity)
        .bind(room.floor_no())
        .bind(room.near_washroom())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation(&e) => {
                Err(CatalogError::Duplicate(room.room_id().clone()))
            }
            Err(e) => Err(CatalogError::Backend(e)),
        }
    }

    #[instrument(skip(self), fields(room_id = %room_id))]
    async fn remove(&self, room_id: &RoomId) -> Result<(), CatalogError> {
        let result = sqlx::query("DELETE FROM classrooms WHERE room_id = $1")
            .bind(room_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(CatalogError::Backend)?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::NotFound(room_id.clone()));
        }
        Ok(())
    }

    async fn health_check(&self) -> Result<(), CatalogError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(CatalogError::Backend)?;
        Ok(())
    }
}
