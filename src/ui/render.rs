use ratatui::{widgets::Block, Frame};

use super::{
    country_list::render_country_list,
    details::{render_details, render_flag},
    header::render_header,
    layout::{calculate_detail_layout, calculate_home_layout},
    legend::{render_legend, LegendContext},
    region_filter::{render_region_button, render_region_dropdown},
    search::render_search_input,
    theme::Palette,
};
use crate::api::CountrySource;
use crate::model::LoadStatus;
use crate::App;

/// Main render function - draws the view for the current route
pub fn render<S: CountrySource>(f: &mut Frame, app: &mut App<S>) {
    let palette = Palette::for_mode(app.model.ui.theme);
    let size = f.area();

    // Root theme attribute: every frame starts from the palette background
    f.render_widget(Block::default().style(palette.base()), size);

    if app.model.navigation.in_detail_view() {
        render_detail_view(f, app, &palette);
    } else {
        render_home_view(f, app, &palette);
    }
}

fn render_home_view<S: CountrySource>(f: &mut Frame, app: &App<S>, palette: &Palette) {
    let layout = calculate_home_layout(f.area());
    let ui = &app.model.ui;

    render_header(f, layout.header_area, ui.theme, palette);
    render_search_input(
        f,
        layout.search_area,
        &ui.filter.search_text,
        ui.search_mode,
        palette,
    );
    render_region_button(
        f,
        layout.region_area,
        &ui.filter.selected_region,
        ui.region_dropdown.is_some(),
        palette,
    );

    let visible = app.model.visible_countries();
    render_country_list(
        f,
        layout.list_area,
        &visible,
        app.model.navigation.selected,
        palette,
    );

    let context = if ui.search_mode {
        LegendContext::Search
    } else if ui.region_dropdown.is_some() {
        LegendContext::RegionDropdown
    } else {
        LegendContext::Home { vim_mode: ui.vim_mode }
    };
    render_legend(f, layout.legend_area, context, palette);

    // Overlay last so it draws over the list
    if let Some(dropdown) = &ui.region_dropdown {
        let screen = f.area();
        render_region_dropdown(f, layout.region_area, screen, dropdown, palette);
    }
}

fn render_detail_view<S: CountrySource>(f: &mut Frame, app: &mut App<S>, palette: &Palette) {
    let details = app.current_details();
    let flag_status = app
        .model
        .detail
        .as_ref()
        .map(|d| d.flag_status.clone())
        .unwrap_or_default();
    // Flag column only when a flag was requested for this view
    let show_flag = details.is_some() && flag_status != LoadStatus::Idle;
    let layout = calculate_detail_layout(f.area(), show_flag);

    render_header(f, layout.header_area, app.model.ui.theme, palette);

    if let Some(flag_area) = layout.flag_area {
        render_flag(f, flag_area, app.flag_protocol.as_mut(), flag_status, palette);
    }

    render_details(
        f,
        layout.info_area,
        details.as_ref(),
        app.model.detail.as_ref(),
        app.model.navigation.detail_scroll,
        palette,
    );

    render_legend(f, layout.legend_area, LegendContext::Detail, palette);
}
