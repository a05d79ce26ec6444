//! # seatplan-id
//!
//! Identifier types shared by the seat planner crates.
//!
//! ## Kinds of ID
//!
//! - [`RoomId`]: a human-chosen label such as `A-101`. The room catalog owns
//!   uniqueness; this crate only enforces the allowed shape.
//! - [`RequestId`]: a system-generated, prefixed ULID (`req_{ulid}`) used to
//!   correlate HTTP requests with log lines and error bodies.
//!
//! Both types parse strictly and roundtrip through their string form
//! (parse → format → parse).

mod error;
mod request;
mod room;

pub use error::IdError;
pub use request::RequestId;
pub use room::RoomId;

/// Re-export ulid for consumers that need raw ULID operations
pub use ulid::Ulid;
