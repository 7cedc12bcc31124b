mod palette;

use std::sync::OnceLock;

use ratatui::prelude::*;
use ratatui::widgets::BorderType;

use palette::Palette;

#[derive(Default)]
pub struct Theme {
    pub palette: Palette,
}

impl Theme {
    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.palette.border_active)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.palette.border)
        }
    }

    pub fn border_type(&self, focused: bool) -> BorderType {
        if focused {
            BorderType::Thick
        } else {
            BorderType::Plain
        }
    }

    pub fn title(&self, title: &str, focused: bool) -> Line<'static> {
        let style = if focused {
            Style::default()
                .fg(self.palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.palette.dim)
        };
        Line::styled(format!(" {} ", title), style)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.palette.text)
    }

    pub fn subtext(&self) -> Style {
        Style::default().fg(self.palette.subtext)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.palette.dim)
    }

    pub fn hint(&self) -> Style {
        Style::default()
            .fg(self.palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status(&self) -> Style {
        Style::default().fg(self.palette.notice)
    }

    pub fn confirm(&self) -> Style {
        Style::default()
            .fg(self.palette.danger)
            .add_modifier(Modifier::BOLD)
    }

    /// Action row, highlighted when it holds the cursor
    pub fn row(&self, selected: bool) -> Style {
        if selected {
            Style::default().bg(self.palette.row_selected_bg)
        } else {
            Style::default()
        }
    }

    /// Key chip inside an action row
    pub fn chip(&self, selected: bool) -> Style {
        if selected {
            Style::default()
                .fg(self.palette.chip_selected_fg)
                .bg(self.palette.chip_selected_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.palette.text).bg(self.palette.chip_bg)
        }
    }

    pub fn custom_marker(&self) -> Style {
        Style::default()
            .fg(self.palette.custom)
            .add_modifier(Modifier::BOLD)
    }

    /// Activity log line, colored by its leading marker
    pub fn log_line(&self, line: &str) -> Style {
        match line.chars().next() {
            Some('+') => Style::default().fg(self.palette.custom),
            Some('-') => Style::default().fg(self.palette.subtext),
            Some('!') => Style::default().fg(self.palette.danger),
            Some('*') => Style::default().fg(self.palette.notice),
            _ => Style::default().fg(self.palette.dim),
        }
    }
}

static THEME: OnceLock<Theme> = OnceLock::new();

pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::default)
}
