//! Reusable UI components

pub mod item_list;
pub mod pane_grid;
pub mod text_panel;

pub use item_list::ItemListComponent;
pub use pane_grid::PaneGrid;
pub use text_panel::TextPanel;
