//! Persistence port for student records.

use crate::domain::{Student, StudentId};
use crate::error::Result;

/// Storage operations for students.
///
/// Implementations only persist; existence rules live in
/// [`Roster`](crate::application::roster::Roster).
pub trait StudentStore {
    /// Get a student by id.
    fn find(&self, id: StudentId) -> Result<Option<Student>>;

    /// List all students ordered by id.
    fn list(&self) -> Result<Vec<Student>>;

    /// Insert a new student.
    fn insert(&self, student: &Student) -> Result<()>;

    /// Atomically remove the row at `original` and store `student` in its place.
    ///
    /// `student.id` may differ from `original`.
    fn replace(&self, original: StudentId, student: &Student) -> Result<()>;

    /// Delete a student by id. Returns whether a row was removed.
    fn delete(&self, id: StudentId) -> Result<bool>;

    /// Number of stored students.
    fn count(&self) -> Result<usize>;
}
