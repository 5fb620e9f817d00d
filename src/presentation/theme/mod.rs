//! Screen colors.

use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

const IDLE_BORDER: Color = Color::Rgb(0x99, 0x99, 0x99);
const DESCRIPTION: Color = Color::Rgb(0x6C, 0x6C, 0x80);
const FALLBACK_ACCENT: Color = Color::Rgb(0x34, 0xCB, 0x79);

/// Colors and text styles of the selection screen.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Chosen selectors, button and dropdown frame.
    pub accent: Color,
    /// Border of a selector without a value.
    pub idle_border: Color,
    /// Welcome title.
    pub title_style: Style,
    /// Welcome description.
    pub description_style: Style,
    /// Highlighted dropdown row.
    pub selection_style: Style,
    /// Placeholders and hints.
    pub dimmed_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_color(FALLBACK_ACCENT)
    }
}

impl Theme {
    /// Builds theme from a color name or hex code, falling back to green.
    #[must_use]
    pub fn new(accent_color_str: &str) -> Self {
        Self::from_color(parse_color(accent_color_str))
    }

    /// Builds theme around `accent`.
    #[must_use]
    pub fn from_color(accent: Color) -> Self {
        Self {
            accent,
            idle_border: IDLE_BORDER,
            title_style: Style::default().add_modifier(Modifier::BOLD),
            description_style: Style::default().fg(DESCRIPTION),
            selection_style: Style::default().bg(accent).fg(Color::Black),
            dimmed_style: Style::default().fg(Color::DarkGray),
        }
    }

    /// Border color of a selector, green once it holds a value.
    #[must_use]
    pub const fn selector_border(&self, has_value: bool) -> Color {
        if has_value {
            self.accent
        } else {
            self.idle_border
        }
    }
}

fn parse_color(s: &str) -> Color {
    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    if s.starts_with('#')
        && let Some((r, g, b)) = parse_hex_color(s)
    {
        return Color::Rgb(r, g, b);
    }

    FALLBACK_ACCENT
}

fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let s = s.trim_start_matches('#');

    if !s.is_ascii() {
        return None;
    }

    let channel = |hex: &str| u8::from_str_radix(hex, 16).ok();

    match s.len() {
        6 => Some((channel(&s[0..2])?, channel(&s[2..4])?, channel(&s[4..6])?)),
        3 => Some((
            channel(&s[0..1].repeat(2))?,
            channel(&s[1..2].repeat(2))?,
            channel(&s[2..3].repeat(2))?,
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("Red"), Color::Red);
        assert_eq!(parse_color("#34CB79"), Color::Rgb(0x34, 0xCB, 0x79));
        assert_eq!(parse_color("#0f0"), Color::Rgb(0, 255, 0));
        assert_eq!(parse_color("Invalid"), FALLBACK_ACCENT);
    }

    #[test]
    fn test_selector_border_turns_accent_when_chosen() {
        let theme = Theme::new("Blue");
        assert_eq!(theme.selector_border(false), IDLE_BORDER);
        assert_eq!(theme.selector_border(true), Color::Blue);
    }
}
