//! Persisted data model for the item hierarchy.

pub mod item;

pub use item::{Item, ItemKind, ItemState, ROOT_ID};
