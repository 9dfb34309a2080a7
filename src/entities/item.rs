use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// ID of the virtual root item. Top-level items have their `parent_id`
/// set to this.
pub const ROOT_ID: i64 = 0;

/// A single node of the hierarchy: either a task or a category holding
/// other items.
///
/// Identity is assigned by the store on first save; `id == 0` means
/// "not stored yet". `order` sequences an item among its siblings only,
/// values are meaningless across parents and gaps are allowed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub kind: ItemKind,
    pub state: ItemState,
    pub due: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub parent_id: i64,
    pub order: u64,
}

impl Item {
    /// The virtual root sentinel. Never persisted; resolving ID 0
    /// always yields this value.
    #[must_use]
    pub fn root() -> Self {
        Item {
            id: ROOT_ID,
            ..Item::default()
        }
    }
}

/// Kind of an item.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    #[default]
    Task,
    Category,
}

/// Completion state of an item.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemState {
    #[default]
    Normal,
    Completed,
}
