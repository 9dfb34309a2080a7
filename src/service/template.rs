//! Welcome-template seeding.
//!
//! The template is a fixed indentation-structured text block: four
//! spaces per tree level, `+ ` lines are categories, `[ ]` lines are
//! tasks, the line directly after a task is its due phrase, anything
//! else accumulates into the current item's description. Each level
//! tracks its own running order counter and the most recently saved
//! item at a level becomes the parent for the level below.

use std::collections::HashMap;

use anyhow::{Context, Result};
use log::info;

use crate::entities::{Item, ItemKind, ROOT_ID};
use crate::storage::ItemStore;
use crate::utils::datetime;

use super::{Presenter, TaskService};

const WELCOME_TEMPLATE: &str = r"
+ Inbox

Inbox is the place to dump your thoughts into.

    [ ] Welcome!
    today
    This is the description

    [ ] Press ? to show help
    today

    [ ] Use j/k to move down/up
    today
+ Projects
";

#[derive(Default)]
struct LevelInfo {
    parent_id: i64,
    order: u64,
}

impl<S: ItemStore, P: Presenter> TaskService<S, P> {
    /// Seeds the welcome tree, but only into a store with no root
    /// children yet. Returns whether seeding happened.
    pub fn seed_welcome_if_empty(&mut self) -> Result<bool> {
        let existing = self
            .store
            .items_by_parent(ROOT_ID)
            .context("checking for existing items")?;
        if !existing.is_empty() {
            return Ok(false);
        }
        self.seed_template()?;
        Ok(true)
    }

    /// Parses the welcome template and persists the resulting tree.
    pub fn seed_template(&mut self) -> Result<()> {
        self.load_template(WELCOME_TEMPLATE)?;
        info!("seeded welcome template");
        Ok(())
    }

    fn load_template(&mut self, text: &str) -> Result<()> {
        let mut levels: HashMap<usize, LevelInfo> = HashMap::new();
        let mut previous_line_is_item = false;
        let mut current: Option<Item> = None;

        for (lineno, raw) in text.lines().enumerate() {
            if raw.is_empty() {
                continue;
            }
            let level = indent_level(raw);
            levels.entry(level + 1).or_default();

            let line = raw.trim();
            let Some(first) = line.chars().next() else {
                continue;
            };
            match first {
                '+' => {
                    previous_line_is_item = false;
                    let info = levels.entry(level).or_default();
                    info.order += 1;
                    current = Some(Item {
                        title: line.get(2..).unwrap_or_default().to_string(),
                        kind: ItemKind::Category,
                        order: info.order,
                        parent_id: info.parent_id,
                        ..Item::default()
                    });
                }
                '[' => {
                    previous_line_is_item = true;
                    let info = levels.entry(level).or_default();
                    info.order += 1;
                    current = Some(Item {
                        title: line.get(4..).unwrap_or_default().to_string(),
                        kind: ItemKind::Task,
                        order: info.order,
                        parent_id: info.parent_id,
                        ..Item::default()
                    });
                }
                _ => {
                    if previous_line_is_item {
                        let due = datetime::parse_due_phrase(line)
                            .with_context(|| format!("parsing due in template line {}", lineno + 1))?;
                        if let Some(item) = current.as_mut() {
                            item.due = Some(due);
                        }
                    } else if let Some(item) = current.as_mut() {
                        item.description.push_str(line);
                        item.description.push('\n');
                    }
                    previous_line_is_item = false;
                }
            }

            if let Some(item) = current.as_mut() {
                let id = self.store.save(item).context("saving template item")?;
                item.id = id;
                if let Some(below) = levels.get_mut(&(level + 1)) {
                    below.parent_id = id;
                }
            }
        }
        Ok(())
    }
}

fn indent_level(line: &str) -> usize {
    line.chars().take_while(|c| *c == ' ').count() / 4
}
