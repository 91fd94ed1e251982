//! Interactive roster menu.
//!
//! Each action keeps asking for an id until the lookup succeeds, so a typo
//! never drops the operator back to the menu. Closing stdin ends the session.

use tracing::debug;

use crate::adapter::inbound::cli::{output, student};
use crate::application::roster::Roster;
use crate::domain::{DomainError, Student, StudentId};
use crate::error::{Error, Result};
use crate::port::inbound::prompt::Prompt;
use crate::port::outbound::store::StudentStore;

const MENU_ITEMS: [&str; 6] = [
    "Add student",
    "List students",
    "Update student",
    "Delete student",
    "Show student",
    "Exit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Add,
    List,
    Update,
    Delete,
    Show,
    Exit,
}

impl Action {
    fn from_index(index: usize) -> Option<Self> {
        Some(match index {
            0 => Self::Add,
            1 => Self::List,
            2 => Self::Update,
            3 => Self::Delete,
            4 => Self::Show,
            5 => Self::Exit,
            _ => return None,
        })
    }
}

/// Run the menu until the operator exits or input closes.
///
/// Domain errors are reported and the loop continues; anything else (I/O,
/// database) ends the session with the error.
pub fn run<S: StudentStore, P: Prompt>(roster: &Roster<S>, prompt: &mut P) -> Result<()> {
    loop {
        let choice = match prompt.select("Choose an option", &MENU_ITEMS) {
            Ok(choice) => choice,
            Err(Error::InputClosed) => return Ok(()),
            Err(e) => return Err(e),
        };

        let Some(action) = choice.and_then(Action::from_index) else {
            output::warning("Invalid option, please try again.");
            continue;
        };
        debug!(?action, "menu action");

        let result = match action {
            Action::Add => add(roster, prompt),
            Action::List => list(roster),
            Action::Update => update(roster, prompt),
            Action::Delete => delete(roster, prompt),
            Action::Show => show(roster, prompt),
            Action::Exit => {
                output::success("Goodbye!");
                return Ok(());
            }
        };

        match result {
            Ok(()) => {}
            Err(Error::InputClosed) => return Ok(()),
            Err(Error::Domain(e)) => output::error(&e.to_string()),
            Err(e) => return Err(e),
        }
    }
}

fn add<S: StudentStore, P: Prompt>(roster: &Roster<S>, prompt: &mut P) -> Result<()> {
    let id = loop {
        let id = read_id(prompt, "Student id")?;
        if roster.exists(id)? {
            output::warning(&format!("Student id {id} already exists, enter another."));
        } else {
            break id;
        }
    };

    let student = read_fields(prompt, id)?;
    roster.add(student)?;
    output::success("Student added.");
    Ok(())
}

fn list<S: StudentStore>(roster: &Roster<S>) -> Result<()> {
    let students = roster.list()?;
    output::section("All students");
    student::print_students(&students);
    Ok(())
}

fn show<S: StudentStore, P: Prompt>(roster: &Roster<S>, prompt: &mut P) -> Result<()> {
    let found = read_existing(roster, prompt, "Student id")?;
    student::print_students(std::slice::from_ref(&found));
    Ok(())
}

fn update<S: StudentStore, P: Prompt>(roster: &Roster<S>, prompt: &mut P) -> Result<()> {
    let current = read_existing(roster, prompt, "Id of student to update")?;
    output::hint(&format!(
        "current: {}, {}, {}",
        current.name, current.age, current.grade
    ));

    let new_id = loop {
        let id = read_id(prompt, "New id")?;
        if id != current.id && roster.exists(id)? {
            output::warning(&format!("Student id {id} already exists, enter another."));
        } else {
            break id;
        }
    };

    let student = read_fields(prompt, new_id)?;
    roster.update(current.id, student)?;
    output::success("Student updated.");
    Ok(())
}

fn delete<S: StudentStore, P: Prompt>(roster: &Roster<S>, prompt: &mut P) -> Result<()> {
    let target = read_existing(roster, prompt, "Id of student to delete")?;
    roster.delete(target.id)?;
    output::success(&format!("Student {} deleted.", target.id));
    Ok(())
}

fn read_fields<P: Prompt>(prompt: &mut P, id: StudentId) -> Result<Student> {
    let name = read_text(prompt, "Name")?;
    let age = read_number(prompt, "Age")?;
    let grade = read_text(prompt, "Grade")?;
    Ok(Student::new(id, name, age, grade))
}

fn read_existing<S: StudentStore, P: Prompt>(
    roster: &Roster<S>,
    prompt: &mut P,
    label: &str,
) -> Result<Student> {
    loop {
        let id = read_id(prompt, label)?;
        match roster.get(id) {
            Ok(found) => return Ok(found),
            Err(Error::Domain(DomainError::NotFound(_))) => {
                output::warning(&format!("Student {id} not found, try again."));
            }
            Err(e) => return Err(e),
        }
    }
}

fn read_id<P: Prompt>(prompt: &mut P, label: &str) -> Result<StudentId> {
    read_number(prompt, label).map(StudentId::new)
}

fn read_number<P: Prompt>(prompt: &mut P, label: &str) -> Result<i64> {
    loop {
        match prompt.text(label)?.parse::<i64>() {
            Ok(n) => return Ok(n),
            Err(_) => output::warning("Please enter a whole number."),
        }
    }
}

fn read_text<P: Prompt>(prompt: &mut P, label: &str) -> Result<String> {
    loop {
        let value = prompt.text(label)?;
        if value.is_empty() {
            output::warning(&format!("{label} cannot be empty."));
        } else {
            return Ok(value);
        }
    }
}
