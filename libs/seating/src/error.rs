//! Error types for the seating core.

use thiserror::Error;

/// Allocation failures.
///
/// `Display` output is meant for logs. Callers that show errors to people
/// should map on the variant (or [`AllocationError::code`]) and word the
/// message themselves.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AllocationError {
    /// The requested student count is zero, negative, non-numeric or too large.
    #[error("invalid demand: {input:?} is not a positive student count")]
    InvalidDemand { input: String },

    /// The whole catalog holds fewer seats than requested.
    #[error("insufficient capacity: requested {requested} seats, catalog holds {available}")]
    InsufficientCapacity { requested: u32, available: u64 },

    /// The greedy walk finished with seats left over. Indicates a bug.
    #[error("allocation internal error: {remaining} seats left unassigned")]
    Internal { remaining: u32 },
}

impl AllocationError {
    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidDemand { .. } => "invalid_demand",
            Self::InsufficientCapacity { .. } => "insufficient_capacity",
            Self::Internal { .. } => "allocation_internal_error",
        }
    }
}

/// Classroom record validation errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClassroomError {
    /// Room ID failed validation.
    #[error("invalid room id: {0}")]
    InvalidRoomId(#[from] seatplan_id::IdError),

    /// A room must hold at least one seat.
    #[error("capacity must be greater than zero")]
    ZeroCapacity,

    #[error("capacity {capacity} exceeds the maximum of {max}")]
    CapacityTooLarge { capacity: u32, max: u32 },
}
