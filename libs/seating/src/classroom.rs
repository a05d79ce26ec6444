//! Classroom records as supplied by the room catalog.

use seatplan_id::RoomId;
use serde::{Deserialize, Serialize};

use crate::error::ClassroomError;

/// A physical room examinees can be seated in.
///
/// Read-only from the allocator's point of view. `near_washroom` is carried
/// for display and does not influence allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawClassroom")]
pub struct Classroom {
    room_id: RoomId,
    capacity: u32,
    floor_no: i32,
    near_washroom: bool,
}

impl Classroom {
    /// Largest capacity a room may declare; catalogs store it as a signed 32-bit integer.
    pub const MAX_CAPACITY: u32 = i32::MAX as u32;

    /// Create a classroom with 1..=[`Self::MAX_CAPACITY`] seats.
    pub fn new(
        room_id: RoomId,
        capacity: u32,
        floor_no: i32,
        near_washroom: bool,
    ) -> Result<Self, ClassroomError> {
        if capacity == 0 {
            return Err(ClassroomError::ZeroCapacity);
        }
        if capacity > Self::MAX_CAPACITY {
            return Err(ClassroomError::CapacityTooLarge {
                capacity,
                max: Self::MAX_CAPACITY,
            });
        }
        Ok(Self {
            room_id,
            capacity,
            floor_no,
            near_washroom,
        })
    }

    pub fn room_id(&self) -> &RoomId {
        &self.room_id
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn floor_no(&self) -> i32 {
        self.floor_no
    }

    pub fn near_washroom(&self) -> bool {
        self.near_washroom
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawClassroom {
    room_id: RoomId,
    capacity: u32,
    floor_no: i32,
    #[serde(default)]
    near_washroom: bool,
}

impl TryFrom<RawClassroom> for Classroom {
    type Error = ClassroomError;

    fn try_from(raw: RawClassroom) -> Result<Self, Self::Error> {
        Classroom::new(raw.room_id, raw.capacity, raw.floor_no, raw.near_washroom)
    }
}
