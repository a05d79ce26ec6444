//! Exam seat allocation.
//!
//! Given a demand (number of examinees) and a snapshot of the room catalog,
//! [`allocate`] picks the rooms to open and how many seats to use in each.
//!
//! # Policy
//!
//! Rooms are ordered by floor, lowest first; rooms sharing a floor keep the
//! order in which the catalog supplied them. The ordered rooms are then filled
//! to capacity one by one until the demand is met, so the plan is the shortest
//! prefix of that ordering whose capacity covers the demand.
//!
//! # Invariants
//!
//! - Seats allocated across the plan equal the demand exactly
//! - No room receives more seats than its capacity
//! - Only the last room in a plan may be partially filled
//! - Plans are non-decreasing in floor number
//! - Identical inputs always produce identical plans
//!
//! The allocator is a pure function: it performs no I/O, holds no state and
//! never reports a partial plan.

mod allocator;
mod classroom;
mod error;

pub use allocator::{allocate, allocate_demand, AllocationPlan, Demand, SeatAssignment};
pub use classroom::Classroom;
pub use error::{AllocationError, ClassroomError};
