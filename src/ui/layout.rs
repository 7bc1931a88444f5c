use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen areas of the home view
pub struct HomeLayout {
    pub header_area: Rect,
    pub search_area: Rect,
    pub region_area: Rect,
    pub list_area: Rect,
    pub legend_area: Rect,
}

/// Screen areas of the detail view
pub struct DetailLayout {
    pub header_area: Rect,
    pub flag_area: Option<Rect>,
    pub info_area: Rect,
    pub legend_area: Rect,
}

/// Width of the region selector column
const REGION_WIDTH: u16 = 24;

/// Minimum content width before the flag column is dropped
const FLAG_MIN_WIDTH: u16 = 80;

pub fn calculate_home_layout(size: Rect) -> HomeLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Search + region
            Constraint::Min(3),    // Country cards
            Constraint::Length(1), // Legend
        ])
        .split(size);

    let controls = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(REGION_WIDTH)])
        .split(rows[1]);

    HomeLayout {
        header_area: rows[0],
        search_area: controls[0],
        region_area: controls[1],
        list_area: rows[2],
        legend_area: rows[3],
    }
}

pub fn calculate_detail_layout(size: Rect, show_flag: bool) -> DetailLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(size);

    let (flag_area, info_area) = if show_flag && rows[1].width >= FLAG_MIN_WIDTH {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(rows[1]);
        (Some(cols[0]), cols[1])
    } else {
        (None, rows[1])
    };

    DetailLayout {
        header_area: rows[0],
        flag_area,
        info_area,
        legend_area: rows[2],
    }
}
