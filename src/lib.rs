//! Taskpile - a hierarchical task manager for the terminal
//!
//! Tasks live in a tree of categories with gap-tolerant sibling
//! ordering. The layers never reach across each other: widgets talk to
//! a controller, the controller talks to a task service, and only the
//! service touches the item store.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Application configuration management
//! * [`entities`] - The stored item vocabulary
//! * [`storage`] - In-memory and snapshot-backed item stores
//! * [`service`] - Task use cases between the UI and the store
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// External editor integration for free-form task input
pub mod editor;

/// Stored item model shared by every store implementation
pub mod entities;

/// Logging setup for the log file sink
pub mod logger;

/// Task use cases: validation, ordering and presentation
pub mod service;

/// Item stores owning identity and sibling order
pub mod storage;

/// Caller-facing task vocabulary
pub mod tasks;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling and other helpers
pub mod utils;

// Re-export the task vocabulary for convenient access
pub use tasks::{Task, TaskForm, TaskKind, TaskStatus};
