// src/dag/mod.rs

//! Dependency graph and scheduling.
//!
//! - [`graph`] holds the directed dependency graph over one task batch.
//! - [`scheduler`] computes the recommended execution order: an iterative
//!   depth-first topological sort with cycle detection and due-date
//!   tie-breaking.

pub mod graph;
pub mod scheduler;

pub use graph::DepGraph;
pub use scheduler::{
    compute_order, DueDatePolicy, MissingDepPolicy, Schedule, ScheduleOptions,
};
