use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use ratatui_image::{protocol::StatefulProtocol, StatefulImage};

use super::theme::Palette;
use crate::logic::borders::NO_BORDERS;
use crate::logic::details::CountryDetails;
use crate::model::{DetailModel, LoadStatus};

pub const NOT_FOUND: &str = "Country not found";

fn field<'a>(label: &'static str, value: String, palette: &Palette) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), palette.label()),
        Span::raw(value),
    ])
}

/// Border names as chips, or the fixed placeholder when there are none
fn border_line<'a>(detail: Option<&DetailModel>, palette: &Palette) -> Line<'a> {
    let mut spans = Vec::new();

    match detail {
        Some(detail) if !detail.border_names.is_empty() => {
            for name in &detail.border_names {
                spans.push(Span::styled(format!("[{}]", name), palette.panel()));
                spans.push(Span::raw(" "));
            }
        }
        _ => spans.push(Span::raw(NO_BORDERS)),
    }

    if detail.map(|d| d.border_status == LoadStatus::Loading).unwrap_or(false) {
        spans.push(Span::styled("  (resolving…)", palette.muted()));
    }

    Line::from(spans)
}

pub fn detail_lines<'a>(
    details: &CountryDetails,
    detail: Option<&DetailModel>,
    palette: &Palette,
) -> Vec<Line<'a>> {
    vec![
        Line::from(Span::styled(details.name.clone(), palette.label())),
        Line::raw(""),
        field("Native Name", details.native_name.clone(), palette),
        field("Population", details.population.clone(), palette),
        field("Region", details.region.clone(), palette),
        field("Sub Region", details.subregion.clone(), palette),
        field("Capital", details.capital.clone(), palette),
        Line::raw(""),
        field("Top Level Domain", details.top_level_domain.clone(), palette),
        field("Currencies", details.currencies.clone(), palette),
        field("Languages", details.languages.clone(), palette),
        Line::raw(""),
        Line::from(Span::styled("Border Countries:", palette.label())),
        border_line(detail, palette),
    ]
}

/// Furthest the detail panel can scroll: its last line stays on screen
pub fn max_detail_scroll(details: Option<&CountryDetails>, detail: Option<&DetailModel>) -> u16 {
    let Some(details) = details else {
        return 0;
    };
    let palette = Palette::for_mode(Default::default());
    let lines = detail_lines(details, detail, &palette).len();
    u16::try_from(lines.saturating_sub(1)).unwrap_or(u16::MAX)
}

/// Render the detail attributes, or the not-found state
pub fn render_details(
    f: &mut Frame,
    area: Rect,
    details: Option<&CountryDetails>,
    detail: Option<&DetailModel>,
    scroll: u16,
    palette: &Palette,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.muted())
        .title(" ← Back (Esc) ")
        .style(palette.base());

    let Some(details) = details else {
        let name = detail.map(|d| d.country_name.as_str()).unwrap_or_default();
        let lines = vec![
            Line::raw(""),
            Line::from(Span::styled(NOT_FOUND, palette.label())),
            Line::from(Span::styled(format!("\"{}\"", name), palette.muted())),
        ];
        f.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center).block(block),
            area,
        );
        return;
    };

    let paragraph = Paragraph::new(detail_lines(details, detail, palette))
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(paragraph, area);
}

/// Render the flag image column
pub fn render_flag(
    f: &mut Frame,
    area: Rect,
    protocol: Option<&mut StatefulProtocol>,
    status: LoadStatus,
    palette: &Palette,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.muted())
        .style(palette.base());
    let inner = block.inner(area);
    f.render_widget(block, area);

    match protocol {
        Some(protocol) => {
            f.render_stateful_widget(StatefulImage::default(), inner, protocol);
        }
        None => {
            let text = match status {
                LoadStatus::Loading => "Loading flag…",
                _ => "No flag",
            };
            f.render_widget(
                Paragraph::new(Span::styled(text, palette.muted())).alignment(Alignment::Center),
                inner,
            );
        }
    }
}
