//! Roster domain types.
//!
//! - [`student`] - The student record and its identifier
//! - [`error`] - Violations of roster invariants

pub mod error;
pub mod id;
pub mod student;

pub use error::DomainError;
pub use id::StudentId;
pub use student::Student;
