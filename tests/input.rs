use chrono::Utc;
use taskpile::ui::input::{parse_task_form, InputError};

#[test]
fn test_title_only() {
    let form = parse_task_form("Buy milk\n").unwrap();
    assert_eq!(form.title, "Buy milk");
    assert!(form.due.is_none());
    assert!(form.description.is_empty());
}

#[test]
fn test_title_and_due() {
    let form = parse_task_form("Buy milk\ntomorrow\n").unwrap();
    assert_eq!(form.title, "Buy milk");
    let minutes = (form.due.unwrap() - Utc::now()).num_minutes();
    assert!(minutes > 23 * 60 && minutes <= 24 * 60);
    assert!(form.description.is_empty());

    let form = parse_task_form("Buy milk\ntoday\n").unwrap();
    let seconds = (form.due.unwrap() - Utc::now()).num_seconds().abs();
    assert!(seconds < 60);
}

#[test]
fn test_second_line_that_is_no_due_joins_the_description() {
    let form = parse_task_form("Buy milk\nfrom the corner shop\nsoon\n").unwrap();
    assert_eq!(form.title, "Buy milk");
    assert!(form.due.is_none());
    assert_eq!(form.description, "from the corner shop\nsoon\n");
}

#[test]
fn test_due_matching_is_abandoned_after_one_miss() {
    // "tomorrow" on line three is in description position by then
    let form = parse_task_form("Title\nnot a due\ntomorrow\n").unwrap();
    assert!(form.due.is_none());
    assert_eq!(form.description, "not a due\ntomorrow\n");
}

#[test]
fn test_due_is_still_found_after_blank_lines() {
    let form = parse_task_form("Title\n\n\ntomorrow\n").unwrap();
    assert_eq!(form.title, "Title");
    assert!(form.due.is_some());
    assert_eq!(form.description, "\n\n");
}

#[test]
fn test_blank_lines_before_the_title_join_the_description() {
    let form = parse_task_form("\n\nTitle\n").unwrap();
    assert_eq!(form.title, "Title");
    assert_eq!(form.description, "\n\n");
}

#[test]
fn test_title_is_trimmed_description_lines_are_not() {
    let form = parse_task_form("  Title  \n  indented note\n").unwrap();
    assert_eq!(form.title, "Title");
    assert_eq!(form.description, "  indented note\n");
}

#[test]
fn test_empty_input_is_an_error() {
    assert_eq!(parse_task_form(""), Err(InputError::Empty));
}

#[test]
fn test_whitespace_only_input_yields_an_empty_title() {
    // Not an input error; the add-task validation rejects it later
    let form = parse_task_form("\n   \n").unwrap();
    assert!(form.title.is_empty());
}
