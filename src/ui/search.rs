//! Search Input UI

use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme::Palette;

pub const PLACEHOLDER: &str = "Search for a country";

/// Render the search box
///
/// Shows the placeholder when the query is empty and input is inactive, and a
/// blinking cursor while typing.
pub fn render_search_input(f: &mut Frame, area: Rect, query: &str, active: bool, palette: &Palette) {
    let border_style = if active { palette.key() } else { palette.muted() };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Search ")
        .style(palette.panel());

    let line = if query.is_empty() && !active {
        Line::from(vec![
            Span::styled("⌕ ", palette.muted()),
            Span::styled(PLACEHOLDER, palette.muted()),
        ])
    } else if active {
        Line::from(vec![
            Span::styled("⌕ ", palette.muted()),
            Span::raw(query.to_string()),
            Span::styled("█", palette.key().add_modifier(Modifier::SLOW_BLINK)),
        ])
    } else {
        Line::from(vec![Span::styled("⌕ ", palette.muted()), Span::raw(query.to_string())])
    };

    f.render_widget(Paragraph::new(line).block(block), area);
}
