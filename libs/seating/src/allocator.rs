//! The seat allocator.

use seatplan_id::RoomId;
use serde::{Deserialize, Serialize};

use crate::classroom::Classroom;
use crate::error::AllocationError;

/// A validated, positive student count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Demand(u32);

impl Demand {
    /// Validate a raw student count.
    pub fn new(value: i64) -> Result<Self, AllocationError> {
        match u32::try_from(value) {
            Ok(n) if n > 0 => Ok(Self(n)),
            _ => Err(AllocationError::InvalidDemand {
                input: value.to_string(),
            }),
        }
    }

    /// Parse a student count typed as text, e.g. from a form field.
    pub fn parse(s: &str) -> Result<Self, AllocationError> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| AllocationError::InvalidDemand {
                input: s.to_string(),
            })?;
        Self::new(value)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

/// Seats given to one room in a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatAssignment {
    pub room_id: RoomId,
    pub floor_no: i32,
    pub capacity: u32,
    pub allocated_seats: u32,
}

impl SeatAssignment {
    fn new(room: &Classroom, allocated_seats: u32) -> Self {
        Self {
            room_id: room.room_id().clone(),
            floor_no: room.floor_no(),
            capacity: room.capacity(),
            allocated_seats,
        }
    }

    /// True when every seat in the room is used.
    pub fn is_full(&self) -> bool {
        self.allocated_seats == self.capacity
    }
}

/// The rooms opened for one request, in the order they were filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationPlan {
    total_students: u32,
    allocated_rooms: Vec<SeatAssignment>,
}

impl AllocationPlan {
    /// Demand this plan satisfies.
    pub fn total_students(&self) -> u32 {
        self.total_students
    }

    /// Number of rooms opened.
    pub fn rooms_used(&self) -> usize {
        self.allocated_rooms.len()
    }

    /// Sum of allocated seats; always equal to [`Self::total_students`].
    pub fn total_seats(&self) -> u64 {
        self.allocated_rooms
            .iter()
            .map(|a| u64::from(a.allocated_seats))
            .sum()
    }

    /// Empty seats left in the opened rooms (only the last can have any).
    pub fn spare_seats(&self) -> u32 {
        self.allocated_rooms
            .last()
            .map(|a| a.capacity - a.allocated_seats)
            .unwrap_or(0)
    }

    pub fn assignments(&self) -> &[SeatAssignment] {
        &self.allocated_rooms
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SeatAssignment> {
        self.allocated_rooms.iter()
    }

    pub fn into_assignments(self) -> Vec<SeatAssignment> {
        self.allocated_rooms
    }
}

impl<'a> IntoIterator for &'a AllocationPlan {
    type Item = &'a SeatAssignment;
    type IntoIter = std::slice::Iter<'a, SeatAssignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Allocate `total_students` seats across `rooms`.
///
/// The demand is validated before the catalog is read. See the crate docs
/// for the ordering policy.
pub fn allocate(total_students: i64, rooms: &[Classroom]) -> Result<AllocationPlan, AllocationError> {
    let demand = Demand::new(total_students)?;
    allocate_demand(demand, rooms)
}

/// Allocate an already validated demand across `rooms`.
pub fn allocate_demand(
    demand: Demand,
    rooms: &[Classroom],
) -> Result<AllocationPlan, AllocationError> {
    let requested = demand.get();

    let available: u64 = rooms.iter().map(|r| u64::from(r.capacity())).sum();
    if available < u64::from(requested) {
        return Err(AllocationError::InsufficientCapacity {
            requested,
            available,
        });
    }

    // Stable: rooms on the same floor stay in catalog order.
    let mut ordered: Vec<&Classroom> = rooms.iter().collect();
    ordered.sort_by_key(|room| room.floor_no());

    let mut remaining = requested;
    let mut allocated_rooms = Vec::new();
    for room in ordered {
        if remaining == 0 {
            break;
        }
        let seats = room.capacity().min(remaining);
        allocated_rooms.push(SeatAssignment::new(room, seats));
        remaining -= seats;
    }

    if remaining != 0 {
        return Err(AllocationError::Internal { remaining });
    }

    Ok(AllocationPlan {
        total_students: requested,
        allocated_rooms,
    })
}
