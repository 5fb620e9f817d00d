//! Status bar widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    /// Progress, e.g. a fetch in flight.
    Info,
    /// Failed fetch.
    Error,
}

impl StatusLevel {
    /// Returns color for level.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Info => Color::Cyan,
            Self::Error => Color::Red,
        }
    }
}

/// Bottom line with key hints on the left and a status message on the right.
#[derive(Debug, Clone, Default)]
pub struct StatusBar {
    hints: Vec<(&'static str, &'static str)>,
    message: Option<(String, StatusLevel)>,
}

impl StatusBar {
    /// Creates empty status bar.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hints: Vec::new(),
            message: None,
        }
    }

    /// Adds a key hint.
    #[must_use]
    pub fn hint(mut self, key: &'static str, label: &'static str) -> Self {
        self.hints.push((key, label));
        self
    }

    /// Sets the status message.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>, level: StatusLevel) -> Self {
        self.message = Some((message.into(), level));
        self
    }

    /// Returns the status message, if any.
    #[must_use]
    pub fn status(&self) -> Option<(&str, StatusLevel)> {
        self.message
            .as_ref()
            .map(|(message, level)| (message.as_str(), *level))
    }
}

impl Widget for &StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = area.width as usize;
        let key_style = Style::default()
            .fg(Color::Black)
            .bg(Color::Gray)
            .add_modifier(Modifier::BOLD);
        let label_style = Style::default().fg(Color::DarkGray);

        let mut spans = Vec::new();
        let mut used = 0;

        for (i, (key, label)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
                used += 1;
            }
            let key_text = format!(" {key} ");
            let label_text = format!(" {label}");
            used += key_text.width() + label_text.width();
            spans.push(Span::styled(key_text, key_style));
            spans.push(Span::styled(label_text, label_style));
        }

        if let Some((message, level)) = &self.message {
            let style = Style::default()
                .fg(level.color())
                .add_modifier(Modifier::BOLD);
            let padding = width.saturating_sub(used + message.width());
            spans.push(Span::raw(" ".repeat(padding.max(1))));
            spans.push(Span::styled(message.as_str(), style));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_is_right_aligned() {
        let bar = StatusBar::new()
            .hint("Tab", "próximo")
            .message("Falhou", StatusLevel::Error);
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);

        (&bar).render(area, &mut buf);

        let line: String = (0..40).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert!(line.starts_with(" Tab "));
        assert!(line.trim_end().ends_with("Falhou"));
        assert_eq!(bar.status(), Some(("Falhou", StatusLevel::Error)));
    }

    #[test]
    fn test_message_uses_level_color() {
        let bar = StatusBar::new().message("Carregando...", StatusLevel::Info);
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);

        (&bar).render(area, &mut buf);

        let start = 20 - u16::try_from("Carregando...".len()).unwrap();
        assert_eq!(buf[(start, 0)].symbol(), "C");
        assert_eq!(buf[(start, 0)].fg, StatusLevel::Info.color());
        assert_ne!(StatusLevel::Info.color(), StatusLevel::Error.color());
    }
}
