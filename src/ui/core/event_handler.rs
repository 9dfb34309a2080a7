use crossterm::event::{poll, Event, KeyEvent};
use tokio::time::Duration;

/// Raw event source for the controller loop.
///
/// Pending terminal events are returned immediately through a
/// non-blocking poll; only when nothing is pending does the handler
/// sleep briefly and yield a tick.
pub struct EventHandler {
    idle_wait: Duration,
}

impl EventHandler {
    #[must_use]
    pub fn new() -> Self {
        Self {
            idle_wait: Duration::from_millis(100),
        }
    }

    pub async fn next_event(&mut self) -> anyhow::Result<EventType> {
        // Check for terminal events without blocking first
        if poll(Duration::from_millis(0))? {
            match crossterm::event::read()? {
                Event::Key(key) => return Ok(EventType::Key(key)),
                Event::Resize(w, h) => return Ok(EventType::Resize(w, h)),
                _ => return Ok(EventType::Other),
            }
        }

        // Nothing pending: wait a bit, then hand the loop a tick
        tokio::time::sleep(self.idle_wait).await;
        Ok(EventType::Tick)
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub enum EventType {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
    Other,
}
