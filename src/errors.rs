// src/errors.rs

//! Crate-wide error types.
//!
//! The scheduler returns the structured [`ScheduleError`] so callers can
//! tell the failure modes apart; the loader and CLI layers wrap it with
//! `anyhow` for context.

pub use anyhow::{Error, Result};

use thiserror::Error as ThisError;

/// Failure modes of [`crate::dag::compute_order`] and batch validation.
///
/// Every variant describes bad input, not an internal fault. The whole
/// call fails atomically; no partial schedule is ever produced.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum ScheduleError {
    /// The batch contained no tasks at all.
    #[error("no tasks supplied for scheduling")]
    EmptyBatch,

    /// A task had an empty title; titles are the dependency-graph key.
    #[error("task with empty title in batch")]
    EmptyTitle,

    /// Two tasks in the same batch share a title.
    #[error("duplicate task title '{title}' in batch")]
    DuplicateTitle { title: String },

    /// Strict mode only: a dependency names a title not present in the batch.
    #[error("task '{task}' depends on unknown task '{dependency}'")]
    UnknownDependency { task: String, dependency: String },

    /// The dependency edges form a loop, so no valid order exists.
    ///
    /// `title` names the task at which the cycle was detected, i.e. the
    /// first task revisited while still on the traversal path.
    #[error("circular dependency detected at '{title}'")]
    CircularDependency { title: String },
}
