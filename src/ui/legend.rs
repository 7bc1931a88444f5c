use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::Palette;

/// Which set of hotkeys to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendContext {
    Home { vim_mode: bool },
    Search,
    RegionDropdown,
    Detail,
}

/// Build hotkey (key, action) pairs (extracted for testability)
fn build_hotkeys(context: LegendContext) -> Vec<(&'static str, &'static str)> {
    match context {
        LegendContext::Home { vim_mode } => {
            let mut keys = if vim_mode {
                vec![("j/k", "Nav"), ("gg/G", "First/Last"), ("l", "Open")]
            } else {
                vec![("↑/↓", "Nav"), ("Enter", "Open")]
            };
            keys.extend([
                ("/", "Search"),
                ("r", "Region"),
                ("R", "All regions"),
                ("t", "Theme"),
                ("q", "Quit"),
            ]);
            keys
        }
        LegendContext::Search => vec![
            ("Enter", "Done"),
            ("Esc", "Clear"),
            ("↑/↓", "Nav"),
        ],
        LegendContext::RegionDropdown => vec![
            ("↑/↓", "Choose"),
            ("Enter", "Select"),
            ("Esc", "Close"),
        ],
        LegendContext::Detail => vec![
            ("Esc", "Back"),
            ("↑/↓", "Scroll"),
            ("t", "Theme"),
            ("q", "Quit"),
        ],
    }
}

pub fn render_legend(f: &mut Frame, area: Rect, context: LegendContext, palette: &Palette) {
    let mut spans = vec![Span::raw(" ")];
    for (key, action) in build_hotkeys(context) {
        spans.push(Span::styled(key, palette.key()));
        spans.push(Span::styled(format!(":{}  ", action), palette.muted()));
    }

    f.render_widget(Paragraph::new(Line::from(spans)).style(palette.base()), area);
}
