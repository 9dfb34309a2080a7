//! Bijective translation between the external task vocabulary and the
//! internal item vocabulary.
//!
//! Forward tables are written once; reverse tables are mechanical
//! inversions, so the two directions cannot drift apart. Nothing
//! mutates the tables after construction.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::entities::{ItemKind, ItemState};
use crate::tasks::{TaskKind, TaskStatus};

static TASK_KIND_TO_ITEM_KIND: Lazy<HashMap<TaskKind, ItemKind>> = Lazy::new(|| {
    HashMap::from([
        (TaskKind::Category, ItemKind::Category),
        (TaskKind::Task, ItemKind::Task),
    ])
});

static ITEM_KIND_TO_TASK_KIND: Lazy<HashMap<ItemKind, TaskKind>> =
    Lazy::new(|| TASK_KIND_TO_ITEM_KIND.iter().map(|(t, i)| (*i, *t)).collect());

static TASK_STATUS_TO_ITEM_STATE: Lazy<HashMap<TaskStatus, ItemState>> = Lazy::new(|| {
    HashMap::from([
        (TaskStatus::Normal, ItemState::Normal),
        (TaskStatus::Completed, ItemState::Completed),
    ])
});

static ITEM_STATE_TO_TASK_STATUS: Lazy<HashMap<ItemState, TaskStatus>> = Lazy::new(|| {
    TASK_STATUS_TO_ITEM_STATE
        .iter()
        .map(|(t, i)| (*i, *t))
        .collect()
});

#[must_use]
pub fn task_kind_to_item_kind(kind: TaskKind) -> ItemKind {
    TASK_KIND_TO_ITEM_KIND.get(&kind).copied().unwrap_or_default()
}

#[must_use]
pub fn item_kind_to_task_kind(kind: ItemKind) -> TaskKind {
    ITEM_KIND_TO_TASK_KIND.get(&kind).copied().unwrap_or_default()
}

#[must_use]
pub fn task_status_to_item_state(status: TaskStatus) -> ItemState {
    TASK_STATUS_TO_ITEM_STATE
        .get(&status)
        .copied()
        .unwrap_or_default()
}

#[must_use]
pub fn item_state_to_task_status(state: ItemState) -> TaskStatus {
    ITEM_STATE_TO_TASK_STATUS
        .get(&state)
        .copied()
        .unwrap_or_default()
}
