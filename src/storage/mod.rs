//! Item storage: ownership of the hierarchy, identity assignment, and
//! sibling-order renumbering.
//!
//! Two implementations share the [`ItemStore`] contract:
//! - [`MemoryStore`]: volatile, vector-backed
//! - [`SnapshotStore`]: memory-backed with a best-effort JSON snapshot
//!   rewritten after every mutation

pub mod memory;
pub mod snapshot;

pub use memory::MemoryStore;
pub use snapshot::SnapshotStore;

use crate::entities::Item;

/// Errors returned by store operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("item {0} not found")]
    ItemNotFound(i64),

    #[error("snapshot {path}: {reason}")]
    Snapshot { path: String, reason: String },
}

/// The store contract.
///
/// Stored state never aliases caller state: writes clone the passed
/// item, reads hand back clones. Mutating an item after saving it does
/// not change what the store holds, and vice versa.
pub trait ItemStore {
    /// Saves an item and returns its ID.
    ///
    /// `id == 0` inserts: the store assigns the next ID, stamps
    /// `created_at` when unset and always refreshes `updated_at`.
    /// A non-zero `id` updates the matching record in place, keeping
    /// the stored `created_at` and refreshing `updated_at`; with no
    /// matching record the save fails with [`StoreError::ItemNotFound`].
    fn save(&mut self, item: &Item) -> Result<i64, StoreError>;

    /// Resolves an item by ID. ID 0 yields the root sentinel.
    fn item_by_id(&self, id: i64) -> Result<Item, StoreError>;

    /// Returns the direct children of a parent, sorted ascending by
    /// sibling order. A childless parent yields an empty vector.
    fn items_by_parent(&self, parent_id: i64) -> Result<Vec<Item>, StoreError>;

    /// Shifts siblings to make room at `item.order`: every *other*
    /// child of `item.parent_id` whose order is >= `item.order` gets
    /// its order incremented by one. The reference item itself is
    /// untouched.
    fn increase_order_after(&mut self, item: &Item) -> Result<(), StoreError>;
}
