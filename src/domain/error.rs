//! Domain errors for roster invariants.
//!
//! Every mutation is preceded by a lookup; these errors report the lookups
//! that failed rather than surfacing constraint violations from the store.

use thiserror::Error;

use super::id::StudentId;

/// Errors that occur when a roster invariant would be violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A student with this id is already on the roster.
    #[error("student id {0} already exists")]
    DuplicateId(StudentId),

    /// No student with this id is on the roster.
    #[error("student {0} not found")]
    NotFound(StudentId),
}
