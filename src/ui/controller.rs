//! Event-loop controller.
//!
//! Owns the pane grid, the description panel, the status bar and the
//! task service. Keys flow in from the run loop, semantic pane events
//! flow back over a channel, and every pass pulls fresh rows out of
//! storage and routes them into the panes through the presenter
//! channel.

use std::collections::HashMap;

use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use tokio::sync::mpsc::{self, UnboundedReceiver};

use crate::config::Config;
use crate::constants::{GREETING, TITLE_CATEGORIES, TITLE_DESCRIPTION, TITLE_STATE, TITLE_TASKS};
use crate::entities::ROOT_ID;
use crate::service::TaskService;
use crate::storage::ItemStore;
use crate::tasks::{Task, TaskKind};
use crate::ui::components::{ItemListComponent, PaneGrid, TextPanel};
use crate::ui::core::{Component, InteractiveComponent, ListEvent, ListEventKind, PaneId};
use crate::ui::input;
use crate::ui::layout::LayoutManager;
use crate::ui::presenter::{PresenterUpdate, UiPresenter};

/// Editor round-trip requested by a pane. The run loop owns the
/// terminal, so it performs the suspension and hands the captured text
/// back through [`Controller::complete_insert`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InsertRequest {
    pub source: PaneId,
    pub order: u64,
}

pub struct Controller<S: ItemStore> {
    service: TaskService<S, UiPresenter>,
    grid: PaneGrid<ItemListComponent>,
    description: TextPanel,
    status: TextPanel,
    list_events: UnboundedReceiver<ListEvent>,
    presenter_updates: UnboundedReceiver<PresenterUpdate>,
    sidebar_percent: u16,
    pending_insert: Option<InsertRequest>,
}

impl<S: ItemStore> Controller<S> {
    pub fn new(store: S, config: &Config) -> Self {
        let (event_tx, list_events) = mpsc::unbounded_channel();
        let (update_tx, presenter_updates) = mpsc::unbounded_channel();

        let mut categories = ItemListComponent::new(PaneId::Categories, TITLE_CATEGORIES);
        categories.set_event_sender(event_tx.clone());
        let mut tasks = ItemListComponent::new(PaneId::Tasks, TITLE_TASKS);
        tasks.set_event_sender(event_tx);

        let keymap = HashMap::from([
            (KeyCode::Char('h'), PaneId::Categories),
            (KeyCode::Left, PaneId::Categories),
            (KeyCode::Char('l'), PaneId::Tasks),
            (KeyCode::Right, PaneId::Tasks),
        ]);
        let grid = PaneGrid::new(
            vec![(PaneId::Categories, categories), (PaneId::Tasks, tasks)],
            keymap,
            Some(PaneId::Categories),
        );

        let mut status = TextPanel::new(TITLE_STATE);
        status.plain(GREETING);

        Self {
            service: TaskService::new(store, UiPresenter::new(update_tx)),
            grid,
            description: TextPanel::new(TITLE_DESCRIPTION),
            status,
            list_events,
            presenter_updates,
            sidebar_percent: config.ui.sidebar_percent,
            pending_insert: None,
        }
    }

    /// Seeds the welcome hierarchy when the store is empty.
    pub fn seed_welcome(&mut self) -> Result<bool> {
        self.service.seed_welcome_if_empty()
    }

    /// Routes one key press. Returns `true` when the user asked to
    /// quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
            _ => {
                if let Err(err) = self.grid.handle_key(key) {
                    self.status.warn(&err);
                }
                self.process_list_events();
            }
        }
        false
    }

    /// One scheduler pass: panes re-resolve their cursors, pane events
    /// are applied, then fresh rows are pulled from storage and routed
    /// back in through the presenter channel.
    pub fn refresh(&mut self) -> Result<()> {
        self.grid.update_all()?;
        self.process_list_events();

        let parents: Vec<i64> = self
            .grid
            .panes()
            .map(|(_, pane)| pane.parent_id())
            .collect();
        for parent_id in parents {
            self.service
                .list_tasks_by_parent(parent_id)
                .with_context(|| format!("getting tasks of parent[{parent_id}]"))?;
        }

        self.apply_presenter_updates();
        Ok(())
    }

    pub fn render(&mut self, f: &mut Frame) {
        let main = LayoutManager::main_layout(f.area());
        let body = LayoutManager::body_layout(main[0], self.sidebar_percent);
        let right = LayoutManager::right_column_layout(body[1]);

        if let Some(pane) = self.grid.pane_mut(PaneId::Categories) {
            pane.render(f, body[0]);
        }
        if let Some(pane) = self.grid.pane_mut(PaneId::Tasks) {
            pane.render(f, right[0]);
        }
        self.description.render(f, right[1]);
        self.status.render(f, main[1]);
    }

    /// Consumes the queued editor request, if any.
    pub fn take_insert_request(&mut self) -> Option<InsertRequest> {
        self.pending_insert.take()
    }

    /// Finishes an insert after the run loop captured editor input.
    /// Capture failures land in the status bar; a buffer that yields no
    /// form is discarded without a word.
    pub fn complete_insert(&mut self, request: InsertRequest, captured: Result<String>) {
        let text = match captured {
            Ok(text) => text,
            Err(err) => {
                self.status.warn(&err);
                return;
            }
        };
        let Ok(mut form) = input::parse_task_form(&text) else {
            return;
        };
        form.kind = match request.source {
            PaneId::Categories => TaskKind::Category,
            PaneId::Tasks => TaskKind::Task,
        };
        form.parent_id = self
            .grid
            .pane(request.source)
            .map_or(ROOT_ID, ItemListComponent::parent_id);
        form.order = request.order;
        if let Err(err) = self.service.add_task(&form).context("adding task") {
            // TODO: relaunch the editor with the rejected buffer for another attempt
            self.status.warn(&err);
        }
    }

    pub fn warn(&mut self, err: &anyhow::Error) {
        self.status.warn(err);
    }

    #[must_use]
    pub fn pane(&self, id: PaneId) -> Option<&ItemListComponent> {
        self.grid.pane(id)
    }

    #[must_use]
    pub fn activated_pane(&self) -> Option<PaneId> {
        self.grid.activated()
    }

    #[must_use]
    pub fn status_text(&self) -> &str {
        self.status.text()
    }

    #[must_use]
    pub fn description_text(&self) -> &str {
        self.description.text()
    }

    fn process_list_events(&mut self) {
        while let Ok(event) = self.list_events.try_recv() {
            self.handle_list_event(event);
        }
    }

    fn handle_list_event(&mut self, event: ListEvent) {
        // A cursor move in the category pane re-scopes the task pane
        // before the generic handling below.
        if event.source == PaneId::Categories && event.kind == ListEventKind::AfterUpdate {
            let selected = self
                .grid
                .pane(PaneId::Categories)
                .and_then(ItemListComponent::selected_task)
                .map(|task| task.id);
            if let Some(id) = selected {
                if let Some(pane) = self.grid.pane_mut(PaneId::Tasks) {
                    pane.set_parent_id(id);
                }
            }
        }

        match event.kind {
            ListEventKind::AfterUpdate => self.refresh_description(event.source),
            ListEventKind::InsertRequested { order } => {
                self.pending_insert = Some(InsertRequest {
                    source: event.source,
                    order,
                });
            }
            ListEventKind::ToggleState => self.toggle_selected(event.source),
        }
    }

    /// Mirrors the selected row's description into the side panel, but
    /// only for the pane holding the activation.
    fn refresh_description(&mut self, source: PaneId) {
        let Some(pane) = self.grid.pane(source) else {
            return;
        };
        if !pane.is_activated() {
            return;
        }
        if let Some(task) = pane.selected_task() {
            self.description.plain(task.description.clone());
        }
    }

    fn toggle_selected(&mut self, source: PaneId) {
        let Some(task) = self
            .grid
            .pane(source)
            .and_then(ItemListComponent::selected_task)
        else {
            return;
        };
        let id = task.id;
        let next = task.status.toggled();
        if let Err(err) = self
            .service
            .change_task_state_by_id(id, next)
            .with_context(|| format!("changing task[{id}] state"))
        {
            self.status.warn(&err);
        }
    }

    fn apply_presenter_updates(&mut self) {
        while let Ok(update) = self.presenter_updates.try_recv() {
            match update {
                PresenterUpdate::TaskAdded(task) => {
                    self.status.info(format!("Task Added: {}", task.title));
                }
                PresenterUpdate::TasksListed { parent_id, tasks } => {
                    self.route_tasks(parent_id, tasks);
                }
            }
        }
    }

    /// First matching pane wins, so the category list shadows the task
    /// list whenever both point at the same parent.
    fn route_tasks(&mut self, parent_id: i64, tasks: Vec<Task>) {
        let target = [PaneId::Categories, PaneId::Tasks].into_iter().find(|id| {
            self.grid
                .pane(*id)
                .is_some_and(|pane| pane.parent_id() == parent_id)
        });
        if let Some(id) = target {
            if let Some(pane) = self.grid.pane_mut(id) {
                pane.set_tasks(tasks);
            }
        }
    }
}
