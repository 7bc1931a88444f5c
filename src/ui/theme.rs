use ratatui::style::{Color, Modifier, Style};

use crate::logic::theme::ThemeMode;

/// Colors for one theme mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub element: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
}

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Palette {
                background: Color::Rgb(250, 250, 250),
                element: Color::Rgb(255, 255, 255),
                text: Color::Rgb(17, 21, 23),
                muted: Color::Rgb(133, 133, 133),
                accent: Color::Rgb(43, 57, 69),
                selection_bg: Color::Rgb(224, 228, 232),
                selection_fg: Color::Rgb(17, 21, 23),
            },
            ThemeMode::Dark => Palette {
                background: Color::Rgb(32, 44, 55),
                element: Color::Rgb(43, 57, 69),
                text: Color::Rgb(255, 255, 255),
                muted: Color::Rgb(160, 170, 180),
                accent: Color::Rgb(250, 250, 250),
                selection_bg: Color::Rgb(70, 88, 104),
                selection_fg: Color::Rgb(255, 255, 255),
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn panel(&self) -> Style {
        Style::default().fg(self.text).bg(self.element)
    }

    pub fn label(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn key(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.selection_fg)
            .bg(self.selection_bg)
            .add_modifier(Modifier::BOLD)
    }
}
