use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme::Palette;
use crate::logic::theme::ThemeMode;

pub const TITLE: &str = "Where in the world?";

/// Title bar with the theme toggle label on the right
pub fn render_header(f: &mut Frame, area: Rect, mode: ThemeMode, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .style(palette.panel());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(18)])
        .split(inner);

    let title = Paragraph::new(Line::from(Span::styled(format!(" {}", TITLE), palette.label())));
    f.render_widget(title, cols[0]);

    let icon = if mode.is_dark() { "☾" } else { "☀" };
    let toggle = Paragraph::new(Line::from(vec![
        Span::raw(format!("{} ", icon)),
        Span::styled(mode.label(), palette.label()),
    ]))
    .alignment(ratatui::layout::Alignment::Right);
    f.render_widget(toggle, cols[1]);
}
