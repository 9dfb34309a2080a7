//! Volatile in-memory store.

use chrono::Utc;

use super::{ItemStore, StoreError};
use crate::entities::{Item, ROOT_ID};

/// Vector-backed store. The backing vector keeps insertion sequence,
/// which the stable sort in [`ItemStore::items_by_parent`] uses as the
/// tie-breaker for equal orders.
#[derive(Debug)]
pub struct MemoryStore {
    next_id: i64,
    items: Vec<Item>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: 1,
            items: Vec::new(),
        }
    }

    /// Number of stored items, root excluded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn restore(next_id: i64, items: Vec<Item>) -> Self {
        Self { next_id, items }
    }

    pub(crate) fn dump(&self) -> (i64, &[Item]) {
        (self.next_id, &self.items)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore for MemoryStore {
    fn save(&mut self, item: &Item) -> Result<i64, StoreError> {
        let now = Utc::now();

        if item.id != 0 {
            let stored = self
                .items
                .iter_mut()
                .find(|it| it.id == item.id)
                .ok_or(StoreError::ItemNotFound(item.id))?;
            let created_at = stored.created_at;
            *stored = item.clone();
            stored.created_at = created_at;
            stored.updated_at = Some(now);
            return Ok(item.id);
        }

        let mut stored = item.clone();
        stored.id = self.next_id;
        self.next_id += 1;
        if stored.created_at.is_none() {
            stored.created_at = Some(now);
        }
        stored.updated_at = Some(now);
        let id = stored.id;
        self.items.push(stored);
        Ok(id)
    }

    fn item_by_id(&self, id: i64) -> Result<Item, StoreError> {
        if id == ROOT_ID {
            return Ok(Item::root());
        }
        self.items
            .iter()
            .find(|it| it.id == id)
            .cloned()
            .ok_or(StoreError::ItemNotFound(id))
    }

    fn items_by_parent(&self, parent_id: i64) -> Result<Vec<Item>, StoreError> {
        let mut children: Vec<Item> = self
            .items
            .iter()
            .filter(|it| it.parent_id == parent_id)
            .cloned()
            .collect();
        children.sort_by_key(|it| it.order);
        Ok(children)
    }

    fn increase_order_after(&mut self, item: &Item) -> Result<(), StoreError> {
        for it in &mut self.items {
            if it.parent_id != item.parent_id || it.id == item.id {
                continue;
            }
            if it.order >= item.order {
                it.order += 1;
            }
        }
        Ok(())
    }
}
