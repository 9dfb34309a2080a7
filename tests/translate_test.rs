use taskpile::entities::{ItemKind, ItemState};
use taskpile::service::translate::{
    item_kind_to_task_kind, item_state_to_task_status, task_kind_to_item_kind,
    task_status_to_item_state,
};
use taskpile::tasks::{TaskKind, TaskStatus};

#[test]
fn test_kind_translation_is_bijective() {
    assert_eq!(task_kind_to_item_kind(TaskKind::Category), ItemKind::Category);
    assert_eq!(task_kind_to_item_kind(TaskKind::Task), ItemKind::Task);

    for kind in [TaskKind::Category, TaskKind::Task] {
        assert_eq!(item_kind_to_task_kind(task_kind_to_item_kind(kind)), kind);
    }
    for kind in [ItemKind::Category, ItemKind::Task] {
        assert_eq!(task_kind_to_item_kind(item_kind_to_task_kind(kind)), kind);
    }
}

#[test]
fn test_status_translation_is_bijective() {
    assert_eq!(task_status_to_item_state(TaskStatus::Normal), ItemState::Normal);
    assert_eq!(
        task_status_to_item_state(TaskStatus::Completed),
        ItemState::Completed
    );

    for status in [TaskStatus::Normal, TaskStatus::Completed] {
        assert_eq!(
            item_state_to_task_status(task_status_to_item_state(status)),
            status
        );
    }
}

#[test]
fn test_toggled_flips_and_returns() {
    assert_eq!(TaskStatus::Normal.toggled(), TaskStatus::Completed);
    assert_eq!(TaskStatus::Completed.toggled(), TaskStatus::Normal);
    assert_eq!(TaskStatus::Normal.toggled().toggled(), TaskStatus::Normal);
}
