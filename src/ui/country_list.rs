use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::theme::Palette;
use crate::api::Country;
use crate::logic::formatting::{first_capital, format_population, truncate_to_width};

pub const NO_RESULTS: &str = "No countries found";

/// One card: name on the first line, attributes on the second
fn card<'a>(country: &Country, width: usize, palette: &Palette) -> ListItem<'a> {
    let name = truncate_to_width(country.common_name(), width.saturating_sub(2));
    let attributes = Line::from(vec![
        Span::styled("  Population: ", palette.label()),
        Span::raw(format_population(country.population)),
        Span::styled("  Region: ", palette.label()),
        Span::raw(country.region.clone()),
        Span::styled("  Capital: ", palette.label()),
        Span::raw(first_capital(&country.capital).to_string()),
    ]);

    ListItem::new(vec![
        Line::from(Span::styled(format!(" {}", name), palette.label())),
        attributes,
        Line::raw(""),
    ])
}

/// Render the visible countries, or the "no results" placeholder
pub fn render_country_list(
    f: &mut Frame,
    area: Rect,
    countries: &[&Country],
    selected: Option<usize>,
    palette: &Palette,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.muted())
        .title(format!(" Countries ({}) ", countries.len()))
        .style(palette.base());

    if countries.is_empty() {
        let inner_height = area.height.saturating_sub(2);
        let mut lines = vec![Line::raw(""); (inner_height / 2) as usize];
        lines.push(Line::from(Span::styled(NO_RESULTS, palette.muted())));
        let placeholder = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let width = area.width.saturating_sub(2) as usize;
    let items: Vec<ListItem> = countries
        .iter()
        .map(|country| card(country, width, palette))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(palette.selected())
        .highlight_symbol("▌");

    let mut state = ListState::default();
    state.select(selected);
    f.render_stateful_widget(list, area, &mut state);
}
