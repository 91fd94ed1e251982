//! The student record.

use serde::{Deserialize, Serialize};

use super::id::StudentId;

/// A single roster entry.
///
/// `id` is unique across the roster; the remaining fields are free-form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub age: i64,
    pub grade: String,
}

impl Student {
    /// Create a new student record.
    pub fn new(id: StudentId, name: impl Into<String>, age: i64, grade: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            grade: grade.into(),
        }
    }

    /// Return a copy of this record under a different id.
    #[must_use]
    pub fn with_id(mut self, id: StudentId) -> Self {
        self.id = id;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_id_keeps_other_fields() {
        let student = Student::new(StudentId::new(1), "Ada", 12, "A");
        let moved = student.clone().with_id(StudentId::new(9));

        assert_eq!(moved.id, StudentId::new(9));
        assert_eq!(moved.name, student.name);
        assert_eq!(moved.age, student.age);
        assert_eq!(moved.grade, student.grade);
    }

    #[test]
    fn serializes_flat_json() {
        let student = Student::new(StudentId::new(3), "Lin", 14, "B+");
        let value = serde_json::to_value(&student).unwrap();

        assert_eq!(value["id"], 3);
        assert_eq!(value["name"], "Lin");
        assert_eq!(value["age"], 14);
        assert_eq!(value["grade"], "B+");
    }
}
