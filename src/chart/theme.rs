//! Color definitions for the chart view.

use ratatui::style::{Color, Modifier, Style};

/// Theme for the chart with a consistent color scheme.
#[derive(Debug, Clone)]
pub struct Theme {
    pub price: Color,
    pub macd: Color,
    pub signal: Color,
    pub buy: Color,
    pub sell: Color,
    pub border: Color,
    pub muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            price: Color::Cyan,
            macd: Color::Magenta,
            signal: Color::Blue,
            buy: Color::Green,
            sell: Color::Red,
            border: Color::Cyan,
            muted: Color::DarkGray,
        }
    }
}

impl Theme {
    /// Get style for titles.
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.price)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for muted text.
    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Get style for borders.
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }
}
