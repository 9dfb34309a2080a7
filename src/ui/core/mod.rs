//! Core building blocks of the component tree.
//!
//! - [`component`] - the two capability tiers every widget implements
//! - [`event_handler`] - raw terminal event source with an idle tick
//! - [`events`] - semantic events flowing from widgets to the controller

pub mod component;
pub mod event_handler;
pub mod events;

pub use component::{Component, InteractiveComponent};
pub use event_handler::{EventHandler, EventType};
pub use events::{ListEvent, ListEventKind, PaneId};
