//! Room catalog storage.
//!
//! The catalog owns classroom records and hands the allocator a fresh,
//! ordered snapshot per request. Two backends exist:
//! - [`MemoryCatalog`]: process-local, the default and what tests use
//! - [`PgCatalog`]: Postgres-backed, selected with `SEATPLAN_STORAGE=postgres`
//!
//! Both list rooms in insertion order; the allocator relies on that order to
//! break ties between rooms on the same floor.

mod memory;
mod postgres;

pub use memory::MemoryCatalog;
pub use postgres::{PgCatalog, PgSetupError};

use async_trait::async_trait;
use seatplan_id::RoomId;
use seatplan_seating::Classroom;
use thiserror::Error;

/// Catalog operation errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A room with this ID already exists.
    #[error("room '{0}' already exists")]
    Duplicate(RoomId),

    /// No room with this ID exists.
    #[error("room '{0}' not found")]
    NotFound(RoomId),

    /// A stored record failed validation on the way out.
    #[error("corrupt record for room '{room_id}': {reason}")]
    Corrupt { room_id: String, reason: String },

    /// Backend failure (connection, query).
    #[error("catalog backend error: {0}")]
    Backend(#[source] sqlx::Error),
}

/// Storage for classroom records.
#[async_trait]
pub trait RoomCatalog: Send + Sync {
    /// Snapshot of every room, in insertion order.
    async fn list(&self) -> Result<Vec<Classroom>, CatalogError>;

    /// Look up one room.
    async fn get(&self, room_id: &RoomId) -> Result<Classroom, CatalogError>;

    /// Add a room; the ID must not be in use.
    async fn insert(&self, room: Classroom) -> Result<(), CatalogError>;

    /// Remove a room.
    async fn remove(&self, room_id: &RoomId) -> Result<(), CatalogError>;

    /// Check the backend is reachable.
    async fn health_check(&self) -> Result<(), CatalogError>;
}
