//! Database model types for Diesel ORM.

use diesel::prelude::*;

use super::schema::students;
use crate::domain::{Student, StudentId};

/// Database row for a student.
#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = students)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct StudentRow {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub grade: String,
}

impl From<&Student> for StudentRow {
    fn from(student: &Student) -> Self {
        Self {
            id: student.id.value(),
            name: student.name.clone(),
            age: student.age,
            grade: student.grade.clone(),
        }
    }
}

impl From<StudentRow> for Student {
    fn from(row: StudentRow) -> Self {
        Student::new(StudentId::new(row.id), row.name, row.age, row.grade)
    }
}
