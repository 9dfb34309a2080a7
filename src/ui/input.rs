//! Free-form text to task form conversion.
//!
//! The editor hands back an unstructured buffer; this module shapes it
//! into a [`TaskForm`]. First non-empty line is the title. The next
//! non-empty line is tried as a due phrase once; if it does not parse,
//! due matching is abandoned and the line joins the description, as
//! does everything after it.

use crate::tasks::TaskForm;
use crate::utils::datetime;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InputError {
    #[error("empty input")]
    Empty,
}

pub fn parse_task_form(text: &str) -> Result<TaskForm, InputError> {
    if text.is_empty() {
        return Err(InputError::Empty);
    }

    let mut title = String::new();
    let mut description = String::new();
    let mut due = None;
    let mut skip_due = false;

    for line in text.lines() {
        let trimmed = line.trim();
        if title.is_empty() && !trimmed.is_empty() {
            title = trimmed.to_string();
        } else if !skip_due && due.is_none() && !trimmed.is_empty() {
            match datetime::parse_due_phrase(line) {
                Ok(parsed) => due = Some(parsed),
                Err(_) => {
                    skip_due = true;
                    description.push_str(line);
                    description.push('\n');
                }
            }
        } else {
            description.push_str(line);
            description.push('\n');
        }
    }

    Ok(TaskForm {
        title,
        due,
        description,
        ..TaskForm::default()
    })
}
