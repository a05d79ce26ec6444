//! Exam seat planner server library.
//!
//! This crate primarily ships a `seatplan-server` binary, but we expose a
//! small library surface to enable integration testing and reuse.

pub mod api;
pub mod catalog;
pub mod config;
pub mod state;
