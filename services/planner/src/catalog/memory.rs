use async_trait::async_trait;
use seatplan_id::RoomId;
use seatplan_seating::Classroom;
use tokio::sync::RwLock;
use tracing::debug;

use super::{CatalogError, RoomCatalog};

/// In-process catalog. Rooms are kept in a `Vec` so listing order is
/// insertion order.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    rooms: RwLock<Vec<Classroom>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog pre-populated with `rooms`, in order.
    ///
    /// Later duplicates of an ID are rejected the same way `insert` would.
    pub fn with_rooms(rooms: impl IntoIterator<Item = Classroom>) -> Result<Self, CatalogError> {
        let mut stored: Vec<Classroom> = Vec::new();
        for room in rooms {
            if stored.iter().any(|r| r.room_id() == room.room_id()) {
                return Err(CatalogError::Duplicate(room.room_id().clone()));
            }
            stored.push(room);
        }
        Ok(Self {
            rooms: RwLock::new(stored),
        })
    }
}

#[async_trait]
impl RoomCatalog for MemoryCatalog {
    async fn list(&self) -> Result<Vec<Classroom>, CatalogError> {
        Ok(self.rooms.read().await.clone())
    }

    async fn get(&self, room_id: &RoomId) -> Result<Classroom, CatalogError> {
        self.rooms
            .read()
            .await
            .iter()
            .find(|r| r.room_id() == room_id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(room_id.clone()))
    }

    async fn insert(&self, room: Classroom) -> Result<(), CatalogError> {
        let mut rooms = self.rooms.write().await;
        if rooms.iter().any(|r| r.room_id() == room.room_id()) {
            return Err(CatalogError::Duplicate(room.room_id().clone()));
        }
        debug!(room_id = %room.room_id(), total = rooms.len() + 1, "Stored classroom");
        rooms.push(room);
        Ok(())
    }

    async fn remove(&self, room_id: &RoomId) -> Result<(), CatalogError> {
        let mut rooms = self.rooms.write().await;
        let Some(position) = rooms.iter().position(|r| r.room_id() == room_id) else {
            return Err(CatalogError::NotFound(room_id.clone()));
        };
        rooms.remove(position);
        Ok(())
    }

    async fn health_check(&self) -> Result<(), CatalogError> {
        Ok(())
    }
}
