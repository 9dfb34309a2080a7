//! Channel-backed presenter implementation.

use anyhow::{Context, Result};
use tokio::sync::mpsc::UnboundedSender;

use crate::service::Presenter;
use crate::tasks::Task;

/// View updates produced by the service layer. The controller drains
/// them on its next pass and routes each one to the matching widget.
#[derive(Clone, Debug)]
pub enum PresenterUpdate {
    TaskAdded(Task),
    TasksListed { parent_id: i64, tasks: Vec<Task> },
}

/// Presenter that forwards service output over a channel instead of
/// mutating widgets directly.
pub struct UiPresenter {
    updates: UnboundedSender<PresenterUpdate>,
}

impl UiPresenter {
    #[must_use]
    pub fn new(updates: UnboundedSender<PresenterUpdate>) -> Self {
        Self { updates }
    }
}

impl Presenter for UiPresenter {
    fn show_task_added(&mut self, task: &Task) -> Result<()> {
        self.updates
            .send(PresenterUpdate::TaskAdded(task.clone()))
            .context("presenter channel closed")
    }

    fn show_tasks_of_parent(&mut self, parent_id: i64, tasks: Vec<Task>) -> Result<()> {
        self.updates
            .send(PresenterUpdate::TasksListed { parent_id, tasks })
            .context("presenter channel closed")
    }
}
