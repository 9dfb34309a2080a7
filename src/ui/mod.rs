//! Terminal user interface module
//!
//! Contains the pane widgets, the controller and the event loop glue.

pub mod components;
pub mod controller;
pub mod core;
pub mod input;
pub mod layout;
pub mod presenter;

pub use controller::{Controller, InsertRequest};
pub use layout::LayoutManager;

use std::io;

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use crate::config::Config;
use crate::editor;
use crate::storage::ItemStore;
use crate::ui::core::{EventHandler, EventType};

/// Sets up the terminal, runs the controller loop and restores the
/// terminal on the way out.
pub async fn run_app<S: ItemStore>(store: S, config: &Config) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut controller = Controller::new(store, config);
    if config.ui.seed_welcome {
        controller.seed_welcome().context("seeding welcome template")?;
    }
    let mut event_handler = EventHandler::new();
    let result = run_app_loop(&mut terminal, &mut controller, &mut event_handler, config).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B, S>(
    terminal: &mut Terminal<B>,
    controller: &mut Controller<S>,
    event_handler: &mut EventHandler,
    config: &Config,
) -> Result<()>
where
    B: Backend + io::Write,
    S: ItemStore,
{
    if let Err(err) = controller.refresh() {
        controller.warn(&err);
    }
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| controller.render(f))?;
            needs_render = false;
        }

        match event_handler.next_event().await? {
            EventType::Key(key) => {
                if controller.handle_key(key) {
                    return Ok(());
                }
                if let Some(request) = controller.take_insert_request() {
                    let captured = capture_with_suspended_terminal(terminal, config)?;
                    controller.complete_insert(request, captured);
                }
                if let Err(err) = controller.refresh() {
                    controller.warn(&err);
                }
                needs_render = true;
            }
            EventType::Resize(_, _) => {
                terminal.clear()?;
                needs_render = true;
            }
            EventType::Tick => {
                if let Err(err) = controller.refresh() {
                    controller.warn(&err);
                }
                needs_render = true;
            }
            EventType::Other => {}
        }
    }
}

/// Hands the terminal to the editor, then re-enters the alternate
/// screen unconditionally. The captured result is only inspected after
/// the TUI is live again, so a failed capture can still be reported on
/// the status bar.
fn capture_with_suspended_terminal<B: Backend + io::Write>(
    terminal: &mut Terminal<B>,
    config: &Config,
) -> Result<Result<String>> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    let captured = editor::capture_input(config.editor.command.as_deref());

    enable_raw_mode()?;
    execute!(terminal.backend_mut(), EnterAlternateScreen)?;
    terminal.clear()?;
    Ok(captured)
}
