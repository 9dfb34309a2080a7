//! Task use-case layer.
//!
//! [`TaskService`] sits between the UI and the store: it validates
//! input, translates between the external task vocabulary and the
//! internal item vocabulary, orchestrates save/renumber sequences, and
//! pushes results into a [`Presenter`]. It never renders anything
//! itself and the UI never touches the store directly.

pub mod template;
pub mod translate;

use anyhow::{Context, Result};
use log::info;

use crate::entities::{Item, ItemState};
use crate::storage::ItemStore;
use crate::tasks::{Task, TaskForm, TaskStatus};

use translate::{
    item_kind_to_task_kind, item_state_to_task_status, task_kind_to_item_kind,
    task_status_to_item_state,
};

/// Typed validation failures. Everything else travels as contextual
/// [`anyhow`] errors wrapping [`crate::storage::StoreError`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("task title cannot be empty")]
    EmptyTitle,
}

/// Output port of the service: push-style sinks the use cases call
/// with display-ready data.
pub trait Presenter {
    fn show_task_added(&mut self, task: &Task) -> Result<()>;
    fn show_tasks_of_parent(&mut self, parent_id: i64, tasks: Vec<Task>) -> Result<()>;
}

/// Use-case service for the task hierarchy, generic over its store and
/// presenter so tests can plug in recording fakes.
pub struct TaskService<S, P> {
    store: S,
    presenter: P,
}

impl<S: ItemStore, P: Presenter> TaskService<S, P> {
    pub fn new(store: S, presenter: P) -> Self {
        Self { store, presenter }
    }

    fn validate_add_task(&self, form: &TaskForm) -> Result<()> {
        if form.title.trim().is_empty() {
            return Err(ServiceError::EmptyTitle.into());
        }
        self.store
            .item_by_id(form.parent_id)
            .context("getting parent item")?;
        Ok(())
    }

    /// Creates a new item from the form and slots it into the sibling
    /// sequence at the form's order.
    ///
    /// The sequence is: validate, save (store assigns the ID), then
    /// shift every conflicting sibling one position further. The
    /// presenter hears about the task only after all three succeeded.
    pub fn add_task(&mut self, form: &TaskForm) -> Result<()> {
        self.validate_add_task(form).context("validating task")?;

        let mut item = Item {
            title: form.title.clone(),
            due: form.due,
            description: form.description.clone(),
            order: form.order,
            kind: task_kind_to_item_kind(form.kind),
            state: ItemState::Normal,
            parent_id: form.parent_id,
            ..Item::default()
        };
        let id = self.store.save(&item).context("saving task")?;
        item.id = id;

        self.store
            .increase_order_after(&item)
            .context("changing order")?;

        info!(
            "added {:?} '{}' under parent {} at order {}",
            form.kind, item.title, form.parent_id, form.order
        );
        self.presenter.show_task_added(&item_to_task(&item))
    }

    /// Overwrites the completion state of one item.
    pub fn change_task_state_by_id(&mut self, id: i64, status: TaskStatus) -> Result<()> {
        let mut item = self.store.item_by_id(id).context("getting item")?;
        item.state = task_status_to_item_state(status);
        self.store.save(&item).context("saving item")?;
        // TODO: notify the presenter once a task-updated view exists
        Ok(())
    }

    /// Loads the children of `parent_id` and pushes them, store order
    /// preserved, to the presenter keyed by the same parent ID.
    pub fn list_tasks_by_parent(&mut self, parent_id: i64) -> Result<()> {
        let items = self
            .store
            .items_by_parent(parent_id)
            .context("getting tasks from storage")?;
        let tasks: Vec<Task> = items.iter().map(item_to_task).collect();
        self.presenter
            .show_tasks_of_parent(parent_id, tasks)
            .with_context(|| format!("showing tasks of parent {parent_id}"))
    }
}

fn item_to_task(item: &Item) -> Task {
    Task {
        id: item.id,
        title: item.title.clone(),
        due: item.due,
        kind: item_kind_to_task_kind(item.kind),
        status: item_state_to_task_status(item.state),
        description: item.description.clone(),
        order: item.order,
    }
}
