//! Semantic events emitted by interactive widgets.

use std::fmt;

/// Identity of a pane inside the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PaneId {
    Categories,
    Tasks,
}

impl fmt::Display for PaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaneId::Categories => write!(f, "categories"),
            PaneId::Tasks => write!(f, "tasks"),
        }
    }
}

/// A high-level intent emitted by a list widget, distinct from the raw
/// key event that triggered it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ListEvent {
    pub source: PaneId,
    pub kind: ListEventKind,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ListEventKind {
    /// The list finished an update pass.
    AfterUpdate,
    /// A new sibling should be created at this order.
    InsertRequested { order: u64 },
    /// The selected row's completion state should flip.
    ToggleState,
}
