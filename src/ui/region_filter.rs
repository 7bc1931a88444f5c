use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::theme::Palette;
use crate::logic::search::ALL_REGIONS;
use crate::model::RegionDropdownState;

/// Label of a dropdown entry
fn option_label(region: &str) -> &str {
    if region == ALL_REGIONS {
        "All regions"
    } else {
        region
    }
}

/// Render the region selector button showing the current selection
pub fn render_region_button(f: &mut Frame, area: Rect, selected_region: &str, open: bool, palette: &Palette) {
    let arrow = if open { "▴" } else { "▾" };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if open { palette.key() } else { palette.muted() })
        .style(palette.panel());

    let line = Line::from(vec![
        Span::raw(format!(" {} ", selected_region)),
        Span::styled(arrow, palette.muted()),
    ]);

    f.render_widget(Paragraph::new(line).block(block), area);
}

/// Render the open dropdown below the selector button
pub fn render_region_dropdown(
    f: &mut Frame,
    button_area: Rect,
    screen: Rect,
    dropdown: &RegionDropdownState,
    palette: &Palette,
) {
    let options = RegionDropdownState::options();
    let height = (options.len() as u16 + 2).min(screen.height.saturating_sub(button_area.bottom()));
    if height < 3 {
        return;
    }

    let area = Rect {
        x: button_area.x,
        y: button_area.bottom(),
        width: button_area.width,
        height,
    };

    let items: Vec<ListItem> = options
        .iter()
        .map(|region| ListItem::new(format!(" {}", option_label(region))))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.key())
                .style(palette.panel()),
        )
        .highlight_style(palette.selected());

    let mut state = ListState::default();
    state.select(Some(dropdown.highlighted));

    f.render_widget(Clear, area);
    f.render_stateful_widget(list, area, &mut state);
}
