use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// Passive capability tier: a widget that can refresh its derived
/// state and draw itself.
pub trait Component {
    /// Recomputes visual/data state. Fails only on an irrecoverable
    /// internal error.
    fn update(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    fn render(&mut self, f: &mut Frame, rect: Rect);
}

/// Interactive capability tier: a widget that can hold keyboard focus.
///
/// Activation is exclusive. The container owning the widgets keeps at
/// most one activated at any time and routes key events to it.
pub trait InteractiveComponent: Component {
    fn is_activated(&self) -> bool;

    fn set_activated(&mut self, yes: bool);

    fn handle_key(&mut self, key: KeyEvent) -> anyhow::Result<()>;
}
