//! Roster service.
//!
//! Every mutation follows lookup-then-mutate: the target id is checked
//! against the store before anything is written, so callers see
//! [`DomainError`] values instead of constraint failures.

use tracing::{debug, info};

use crate::domain::{DomainError, Student, StudentId};
use crate::error::Result;
use crate::port::outbound::store::StudentStore;

/// Student roster backed by a [`StudentStore`].
pub struct Roster<S> {
    store: S,
}

impl<S: StudentStore> Roster<S> {
    /// Create a roster over an initialized store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Check whether a student with `id` exists.
    pub fn exists(&self, id: StudentId) -> Result<bool> {
        Ok(self.store.find(id)?.is_some())
    }

    /// Add a student whose id is not yet taken.
    pub fn add(&self, student: Student) -> Result<Student> {
        if self.exists(student.id)? {
            return Err(DomainError::DuplicateId(student.id).into());
        }

        self.store.insert(&student)?;
        info!(id = %student.id, "student added");
        Ok(student)
    }

    /// All students ordered by id.
    pub fn list(&self) -> Result<Vec<Student>> {
        self.store.list()
    }

    /// Fetch one student.
    pub fn get(&self, id: StudentId) -> Result<Student> {
        self.store
            .find(id)?
            .ok_or_else(|| DomainError::NotFound(id).into())
    }

    /// Overwrite the student at `original` with `student`.
    ///
    /// `student.id` may differ from `original`, in which case the new id must
    /// be free. The old row is removed and the new one written atomically.
    pub fn update(&self, original: StudentId, student: Student) -> Result<Student> {
        if !self.exists(original)? {
            return Err(DomainError::NotFound(original).into());
        }
        if student.id != original && self.exists(student.id)? {
            return Err(DomainError::DuplicateId(student.id).into());
        }

        self.store.replace(original, &student)?;
        if student.id == original {
            info!(id = %original, "student updated");
        } else {
            info!(from = %original, to = %student.id, "student updated with new id");
        }
        Ok(student)
    }

    /// Remove a student, returning the deleted record.
    pub fn delete(&self, id: StudentId) -> Result<Student> {
        let student = self.get(id)?;
        if !self.store.delete(id)? {
            // Row vanished between lookup and delete.
            return Err(DomainError::NotFound(id).into());
        }

        info!(%id, "student deleted");
        Ok(student)
    }

    /// Number of students on the roster.
    pub fn count(&self) -> Result<usize> {
        let count = self.store.count()?;
        debug!(count, "roster counted");
        Ok(count)
    }
}
