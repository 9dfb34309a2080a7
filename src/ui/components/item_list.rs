//! Selectable list over externally supplied tasks.
//!
//! The list never talks to storage. Rows come in through
//! [`set_tasks`](ItemListComponent::set_tasks) and every data-changing
//! intent leaves as a [`ListEvent`] on the controller channel.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};
use tokio::sync::mpsc::UnboundedSender;

use crate::constants::EMPTY_LIST_ROW;
use crate::entities::ROOT_ID;
use crate::tasks::{Task, TaskKind, TaskStatus};
use crate::ui::core::{Component, InteractiveComponent, ListEvent, ListEventKind, PaneId};
use crate::utils::datetime;

/// Vim-flavored list pane. Both the category sidebar and the task list
/// are instances of this component, differing only in id, title and
/// the parent they are scoped to.
pub struct ItemListComponent {
    id: PaneId,
    title: String,
    parent_id: i64,
    tasks: Vec<Task>,
    selected_id: Option<i64>,
    list_state: ListState,
    previous_key: Option<KeyCode>,
    activated: bool,
    events: Option<UnboundedSender<ListEvent>>,
}

impl ItemListComponent {
    #[must_use]
    pub fn new(id: PaneId, title: impl Into<String>) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            id,
            title: title.into(),
            parent_id: ROOT_ID,
            tasks: Vec::new(),
            selected_id: None,
            list_state,
            previous_key: None,
            activated: false,
            events: None,
        }
    }

    /// Wires the outgoing event channel. Events emitted before this is
    /// called are dropped.
    pub fn set_event_sender(&mut self, events: UnboundedSender<ListEvent>) {
        self.events = Some(events);
    }

    #[must_use]
    pub fn id(&self) -> PaneId {
        self.id
    }

    #[must_use]
    pub fn parent_id(&self) -> i64 {
        self.parent_id
    }

    /// Points the list at another parent. The cursor snaps back to the
    /// first row since the remembered selection belongs to the old scope.
    pub fn set_parent_id(&mut self, parent_id: i64) {
        if self.parent_id == parent_id {
            return;
        }
        self.parent_id = parent_id;
        self.selected_id = None;
        self.list_state.select(Some(0));
    }

    pub fn set_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.list_state.selected().unwrap_or(0))
    }

    /// Rows shown on screen. An empty list still renders one
    /// placeholder row, and cursor motion operates on that row.
    fn row_count(&self) -> usize {
        self.tasks.len().max(1)
    }

    fn select_at(&mut self, index: usize) {
        if index >= self.row_count() {
            return;
        }
        self.list_state.select(Some(index));
        self.selected_id = self.tasks.get(index).map(|task| task.id);
    }

    fn selected_index(&self) -> usize {
        self.list_state.selected().unwrap_or(0)
    }

    fn emit(&self, kind: ListEventKind) {
        if let Some(events) = &self.events {
            let _ = events.send(ListEvent {
                source: self.id,
                kind,
            });
        }
    }
}

impl Component for ItemListComponent {
    /// Re-resolves the cursor against the current rows: the selection
    /// follows the task id when it is still present and falls back to
    /// the first row when it is gone.
    fn update(&mut self) -> Result<()> {
        let row = self
            .selected_id
            .and_then(|id| self.tasks.iter().position(|task| task.id == id))
            .unwrap_or(0);
        self.list_state.select(Some(row));
        self.selected_id = self.tasks.get(row).map(|task| task.id);
        self.emit(ListEventKind::AfterUpdate);
        Ok(())
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let width = rect.width.saturating_sub(2) as usize;
        let rows: Vec<ListItem> = if self.tasks.is_empty() {
            vec![ListItem::new(EMPTY_LIST_ROW)]
        } else {
            self.tasks
                .iter()
                .map(|task| ListItem::new(format_task_row(task, width)))
                .collect()
        };

        let highlight = if self.activated {
            Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::UNDERLINED)
        };

        let list = List::new(rows)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(self.title.clone())
                    .title_style(Style::default().add_modifier(Modifier::BOLD)),
            )
            .highlight_style(highlight);

        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}

impl InteractiveComponent for ItemListComponent {
    fn is_activated(&self) -> bool {
        self.activated
    }

    fn set_activated(&mut self, activated: bool) {
        self.activated = activated;
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.select_at(self.selected_index() + 1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                let index = self.selected_index();
                if index > 0 {
                    self.select_at(index - 1);
                }
            }
            KeyCode::Char('g') if self.previous_key == Some(KeyCode::Char('g')) => {
                self.select_at(0);
            }
            KeyCode::Home => {
                self.select_at(0);
            }
            KeyCode::Char('G') | KeyCode::End => {
                self.select_at(self.row_count() - 1);
            }
            KeyCode::Char('o') | KeyCode::Char('O') => {
                let bump = u64::from(key.code == KeyCode::Char('o'));
                let order = match self.selected_task() {
                    Some(task) => task.order + bump,
                    None => 0,
                };
                self.emit(ListEventKind::InsertRequested { order });
            }
            KeyCode::Char(' ') => {
                self.emit(ListEventKind::ToggleState);
            }
            _ => {}
        }
        self.previous_key = Some(key.code);
        Ok(())
    }
}

fn format_task_row(task: &Task, width: usize) -> String {
    match task.kind {
        TaskKind::Category => format!("+ {}", task.title),
        TaskKind::Task => {
            let check = match task.status {
                TaskStatus::Completed => "[x]",
                TaskStatus::Normal => "[ ]",
            };
            let due = task.due.map(datetime::format_relative).unwrap_or_default();
            let title_width = width.saturating_sub(check.len() + due.len() + 2);
            let title = truncate(&task.title, title_width);
            format!("{check} {title:<title_width$} {due}")
        }
    }
}

/// Char-based truncation with a `...` marker so wide titles never
/// split a multibyte character.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}

#[cfg(test)]
mod tests {
    use super::truncate;

    #[test]
    fn truncate_keeps_short_titles() {
        assert_eq!(truncate("buy milk", 20), "buy milk");
    }

    #[test]
    fn truncate_marks_long_titles() {
        assert_eq!(truncate("a very long task title", 10), "a very ...");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("héllo wörld désu", 10), "héllo w...");
    }
}
