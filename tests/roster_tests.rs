//! Roster service against a real SQLite file.

mod harness;

use harness::temp_db::TempDb;
use roster::adapter::outbound::sqlite::database::connection::{open, PoolSettings};
use roster::adapter::outbound::sqlite::store::SqliteStudentStore;
use roster::application::roster::Roster;
use roster::domain::{DomainError, Student, StudentId};
use roster::error::Error;

fn student(id: i64, name: &str, age: i64, grade: &str) -> Student {
    Student::new(StudentId::new(id), name, age, grade)
}

#[test]
fn full_lifecycle() {
    let db = TempDb::create("lifecycle");
    let roster = db.roster();

    roster.add(student(1, "Ada", 12, "A")).unwrap();
    roster.add(student(2, "Bob", 13, "B")).unwrap();
    assert_eq!(roster.count().unwrap(), 2);

    roster
        .update(StudentId::new(1), student(10, "Ada", 13, "A+"))
        .unwrap();
    roster.delete(StudentId::new(2)).unwrap();

    let all = roster.list().unwrap();
    assert_eq!(all, vec![student(10, "Ada", 13, "A+")]);
}

#[test]
fn duplicate_add_is_domain_error_not_constraint_error() {
    let db = TempDb::create("duplicate");
    let roster = db.roster();

    roster.add(student(1, "Ada", 12, "A")).unwrap();
    let err = roster.add(student(1, "Eve", 12, "A")).unwrap_err();

    assert!(matches!(
        err,
        Error::Domain(DomainError::DuplicateId(id)) if id == StudentId::new(1)
    ));
}

#[test]
fn rekey_onto_taken_id_leaves_both_rows() {
    let db = TempDb::create("rekey");
    let roster = db.roster();

    roster.add(student(1, "Ada", 12, "A")).unwrap();
    roster.add(student(2, "Bob", 13, "B")).unwrap();

    let err = roster
        .update(StudentId::new(1), student(2, "Ada", 12, "A"))
        .unwrap_err();
    assert!(matches!(err, Error::Domain(DomainError::DuplicateId(_))));
    assert_eq!(roster.get(StudentId::new(1)).unwrap().name, "Ada");
    assert_eq!(roster.get(StudentId::new(2)).unwrap().name, "Bob");
}

#[test]
fn data_survives_reopen() {
    let db = TempDb::create("reopen");
    db.roster().add(student(4, "Lin", 15, "B+")).unwrap();

    // A second pool over the same file sees the committed row.
    let pool = open(&db.path().display().to_string(), &PoolSettings::default()).unwrap();
    let reopened = Roster::new(SqliteStudentStore::new(pool));

    assert_eq!(reopened.get(StudentId::new(4)).unwrap().grade, "B+");
}
