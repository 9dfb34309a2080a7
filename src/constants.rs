//! Constants used throughout the application.

// UI text
/// Startup greeting shown in the status bar
pub const GREETING: &str = "Good day!";
/// Placeholder row rendered by a list with no items
pub const EMPTY_LIST_ROW: &str = "<Empty>";
/// Pane titles
pub const TITLE_CATEGORIES: &str = "Categories";
pub const TITLE_TASKS: &str = "Tasks";
pub const TITLE_DESCRIPTION: &str = "Description";
pub const TITLE_STATE: &str = "State";

// UI layout
/// Minimum sidebar width as a percentage of the terminal width
pub const SIDEBAR_MIN_PERCENT: u16 = 10;
/// Maximum sidebar width as a percentage of the terminal width
pub const SIDEBAR_MAX_PERCENT: u16 = 50;
/// Default sidebar width as a percentage of the terminal width
pub const SIDEBAR_DEFAULT_PERCENT: u16 = 20;
/// Status bar height as a percentage of the terminal height
pub const STATUS_BAR_PERCENT: u16 = 10;

// Default file names under the platform data directory
pub const LOG_FILE_NAME: &str = "taskpile.log";
pub const DATA_FILE_NAME: &str = "items.json";
