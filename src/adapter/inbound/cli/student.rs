//! Handlers for the one-shot student commands and shared student rendering.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::{AddArgs, UpdateArgs};
use crate::adapter::inbound::cli::output;
use crate::application::roster::Roster;
use crate::domain::{Student, StudentId};
use crate::error::Result;
use crate::port::outbound::store::StudentStore;

#[derive(Tabled)]
struct StudentRow<'a> {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: &'a str,
    #[tabled(rename = "Age")]
    age: i64,
    #[tabled(rename = "Grade")]
    grade: &'a str,
}

impl<'a> From<&'a Student> for StudentRow<'a> {
    fn from(student: &'a Student) -> Self {
        Self {
            id: student.id.value(),
            name: &student.name,
            age: student.age,
            grade: &student.grade,
        }
    }
}

/// Render students as a table.
#[must_use]
pub fn render_table(students: &[Student]) -> String {
    Table::new(students.iter().map(StudentRow::from)).to_string()
}

/// Print students, or a note when there are none.
pub fn print_students(students: &[Student]) {
    if students.is_empty() {
        output::note("No students on the roster.");
        return;
    }
    output::lines(&render_table(students));
}

/// Execute `add`.
pub fn execute_add<S: StudentStore>(roster: &Roster<S>, args: AddArgs) -> Result<()> {
    let student = roster.add(Student::new(
        StudentId::new(args.id),
        args.name,
        args.age,
        args.grade,
    ))?;

    if output::is_json() {
        output::json_output(json!({
            "command": "add",
            "student": student,
        }));
        return Ok(());
    }

    output::success(&format!("Added student {}", output::highlight(student.id)));
    Ok(())
}

/// Execute `list`.
pub fn execute_list<S: StudentStore>(roster: &Roster<S>) -> Result<()> {
    let students = roster.list()?;

    if output::is_json() {
        output::json_output(json!({
            "command": "list",
            "count": students.len(),
            "students": students,
        }));
        return Ok(());
    }

    output::section("All students");
    print_students(&students);
    Ok(())
}

/// Execute `show`.
pub fn execute_show<S: StudentStore>(roster: &Roster<S>, id: i64) -> Result<()> {
    let student = roster.get(StudentId::new(id))?;

    if output::is_json() {
        output::json_output(json!({
            "command": "show",
            "student": student,
        }));
        return Ok(());
    }

    output::section(&format!("Student {}", student.id));
    output::field("Name", &student.name);
    output::field("Age", student.age);
    output::field("Grade", &student.grade);
    Ok(())
}

/// Execute `update`. Omitted fields keep the stored value.
pub fn execute_update<S: StudentStore>(roster: &Roster<S>, args: UpdateArgs) -> Result<()> {
    let original = StudentId::new(args.id);
    let current = roster.get(original)?;

    let updated = Student {
        id: args.new_id.map_or(current.id, StudentId::new),
        name: args.name.unwrap_or(current.name),
        age: args.age.unwrap_or(current.age),
        grade: args.grade.unwrap_or(current.grade),
    };
    let student = roster.update(original, updated)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "update",
            "previous_id": original,
            "student": student,
        }));
        return Ok(());
    }

    if student.id == original {
        output::success(&format!("Updated student {}", output::highlight(original)));
    } else {
        output::success(&format!(
            "Updated student {} {} {}",
            output::highlight(original),
            output::muted("→"),
            output::highlight(student.id)
        ));
    }
    Ok(())
}

/// Execute `delete`.
pub fn execute_delete<S: StudentStore>(roster: &Roster<S>, id: i64) -> Result<()> {
    let student = roster.delete(StudentId::new(id))?;

    if output::is_json() {
        output::json_output(json!({
            "command": "delete",
            "student": student,
        }));
        return Ok(());
    }

    output::success(&format!(
        "Deleted student {} ({})",
        output::highlight(student.id),
        student.name
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::roster::tests::MemoryStore;

    #[test]
    fn table_has_headers_and_rows() {
        let students = vec![
            Student::new(StudentId::new(1), "Ada", 12, "A"),
            Student::new(StudentId::new(2), "Bob", 13, "B+"),
        ];

        let table = render_table(&students);
        for needle in ["ID", "Name", "Age", "Grade", "Ada", "Bob", "B+"] {
            assert!(table.contains(needle), "missing {needle} in\n{table}");
        }
    }

    #[test]
    fn update_keeps_omitted_fields() {
        let roster = Roster::new(MemoryStore::default());
        roster
            .add(Student::new(StudentId::new(1), "Ada", 12, "A"))
            .unwrap();

        execute_update(
            &roster,
            UpdateArgs {
                id: 1,
                new_id: Some(5),
                name: None,
                age: Some(13),
                grade: None,
            },
        )
        .unwrap();

        let moved = roster.get(StudentId::new(5)).unwrap();
        assert_eq!(moved, Student::new(StudentId::new(5), "Ada", 13, "A"));
        assert!(!roster.exists(StudentId::new(1)).unwrap());
    }

    #[test]
    fn add_duplicate_propagates_domain_error() {
        let roster = Roster::new(MemoryStore::default());
        let args = || AddArgs {
            id: 1,
            name: "Ada".into(),
            age: 12,
            grade: "A".into(),
        };

        execute_add(&roster, args()).unwrap();
        assert!(execute_add(&roster, args()).is_err());
    }
}
