//! Read-only text panel with styled severity states.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::core::Component;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Severity {
    Plain,
    Info,
    Warn,
}

/// Bordered paragraph. The description box and the status bar are both
/// instances, differing only in title and the severity they are fed.
pub struct TextPanel {
    title: String,
    text: String,
    severity: Severity,
}

impl TextPanel {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: String::new(),
            severity: Severity::Plain,
        }
    }

    pub fn plain(&mut self, text: impl Into<String>) {
        self.severity = Severity::Plain;
        self.text = text.into();
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.severity = Severity::Info;
        self.text = text.into();
    }

    /// Renders the full context chain of the error in the panel.
    pub fn warn(&mut self, err: &anyhow::Error) {
        self.severity = Severity::Warn;
        self.text = format!("{err:#}");
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Component for TextPanel {
    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let (body, border) = match self.severity {
            Severity::Plain => (Style::default(), Style::default()),
            Severity::Info => (
                Style::default().fg(Color::White),
                Style::default().fg(Color::Cyan),
            ),
            Severity::Warn => (
                Style::default().fg(Color::White),
                Style::default().fg(Color::Red),
            ),
        };

        let panel = Paragraph::new(self.text.clone())
            .wrap(Wrap { trim: false })
            .style(body)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(self.title.clone())
                    .title_style(Style::default().add_modifier(Modifier::BOLD))
                    .border_style(border),
            );

        f.render_widget(panel, rect);
    }
}
