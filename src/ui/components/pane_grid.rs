//! Pane container with exclusive activation.
//!
//! A `Ctrl-w` prefix arms target selection; the following key either
//! activates the pane it maps to or silently drops back to idle. Every
//! other key is forwarded to whichever pane is activated.

use std::collections::HashMap;

use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::core::{InteractiveComponent, PaneId};

pub struct PaneGrid<P> {
    panes: Vec<(PaneId, P)>,
    keymap: HashMap<KeyCode, PaneId>,
    selecting_target: bool,
    activated: Option<PaneId>,
}

impl<P: InteractiveComponent> PaneGrid<P> {
    #[must_use]
    pub fn new(
        panes: Vec<(PaneId, P)>,
        keymap: HashMap<KeyCode, PaneId>,
        default_activated: Option<PaneId>,
    ) -> Self {
        let mut grid = Self {
            panes,
            keymap,
            selecting_target: false,
            activated: None,
        };
        if let Some(id) = default_activated {
            grid.activate(id);
        }
        grid
    }

    #[must_use]
    pub fn activated(&self) -> Option<PaneId> {
        self.activated
    }

    #[must_use]
    pub fn pane(&self, id: PaneId) -> Option<&P> {
        self.panes
            .iter()
            .find(|(pane_id, _)| *pane_id == id)
            .map(|(_, pane)| pane)
    }

    pub fn pane_mut(&mut self, id: PaneId) -> Option<&mut P> {
        self.panes
            .iter_mut()
            .find(|(pane_id, _)| *pane_id == id)
            .map(|(_, pane)| pane)
    }

    pub fn panes(&self) -> impl Iterator<Item = (PaneId, &P)> {
        self.panes.iter().map(|(id, pane)| (*id, pane))
    }

    pub fn panes_mut(&mut self) -> impl Iterator<Item = (PaneId, &mut P)> {
        self.panes.iter_mut().map(|(id, pane)| (*id, pane))
    }

    /// Refreshes every pane, activated or not.
    pub fn update_all(&mut self) -> Result<()> {
        for (id, pane) in &mut self.panes {
            pane.update().with_context(|| format!("updating {id} pane"))?;
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('w') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.selecting_target = true;
            return Ok(());
        }
        if self.selecting_target {
            self.selecting_target = false;
            if let Some(target) = self.keymap.get(&key.code).copied() {
                self.activate(target);
            }
            return Ok(());
        }
        if let Some(id) = self.activated {
            if let Some(pane) = self.pane_mut(id) {
                pane.handle_key(key)
                    .with_context(|| format!("{id} pane handling key"))?;
            }
        }
        Ok(())
    }

    fn activate(&mut self, id: PaneId) {
        for (pane_id, pane) in &mut self.panes {
            pane.set_activated(*pane_id == id);
        }
        self.activated = Some(id);
    }
}
