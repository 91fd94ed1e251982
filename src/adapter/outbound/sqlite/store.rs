//! SQLite student store implementation.
//!
//! Provides persistent storage for the roster using SQLite and Diesel ORM.

use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use tracing::debug;

use crate::adapter::outbound::sqlite::database::connection::DbPool;
use crate::adapter::outbound::sqlite::database::model::StudentRow;
use crate::adapter::outbound::sqlite::database::schema::students;
use crate::domain::{Student, StudentId};
use crate::error::{Error, Result};
use crate::port::outbound::store::StudentStore;

/// SQLite-backed student store.
///
/// Implements the [`StudentStore`] trait over a migrated connection pool.
pub struct SqliteStudentStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteStudentStore {
    /// Create a new SQLite student store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<PooledConnection<ConnectionManager<SqliteConnection>>> {
        self.pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))
    }
}

impl StudentStore for SqliteStudentStore {
    fn find(&self, id: StudentId) -> Result<Option<Student>> {
        let mut conn = self.conn()?;

        let row: Option<StudentRow> = students::table
            .find(id.value())
            .select(StudentRow::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(row.map(Student::from))
    }

    fn list(&self) -> Result<Vec<Student>> {
        let mut conn = self.conn()?;

        let rows: Vec<StudentRow> = students::table
            .order(students::id.asc())
            .select(StudentRow::as_select())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(Student::from).collect())
    }

    fn insert(&self, student: &Student) -> Result<()> {
        let mut conn = self.conn()?;

        diesel::insert_into(students::table)
            .values(StudentRow::from(student))
            .execute(&mut conn)?;

        debug!(id = %student.id, "student row inserted");
        Ok(())
    }

    fn replace(&self, original: StudentId, student: &Student) -> Result<()> {
        let mut conn = self.conn()?;
        let row = StudentRow::from(student);

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            diesel::delete(students::table.find(original.value())).execute(conn)?;
            diesel::insert_into(students::table)
                .values(&row)
                .execute(conn)?;
            Ok(())
        })?;

        debug!(from = %original, to = %student.id, "student row replaced");
        Ok(())
    }

    fn delete(&self, id: StudentId) -> Result<bool> {
        let mut conn = self.conn()?;

        let deleted = diesel::delete(students::table.find(id.value())).execute(&mut conn)?;

        debug!(%id, deleted, "student row delete");
        Ok(deleted > 0)
    }

    fn count(&self) -> Result<usize> {
        let mut conn = self.conn()?;

        let count: i64 = students::table.count().get_result(&mut conn)?;
        usize::try_from(count).map_err(|e| Error::Parse(e.to_string()))
    }
}
