//! Route transitions and list selection

use crate::api::CountrySource;
use crate::logic::navigation::{country_path, next_selection, prev_selection, Route};
use crate::ui::details::max_detail_scroll;
use crate::App;

impl<S: CountrySource> App<S> {
    /// Navigate to a URL-style path. Unknown paths are ignored.
    pub fn navigate_to_path(&mut self, path: &str) -> bool {
        match Route::parse(path) {
            Some(route) => {
                self.navigate(route);
                true
            }
            None => {
                tracing::warn!(path, "ignoring navigation to unknown path");
                false
            }
        }
    }

    pub fn navigate(&mut self, route: Route) {
        tracing::debug!(path = %route.path(), "navigate");

        if self.model.navigation.in_detail_view() {
            self.leave_detail_view();
        }

        self.model.navigation.route = route.clone();

        if let Route::Country { name } = route {
            self.model.ui.search_mode = false;
            self.model.ui.region_dropdown = None;
            self.enter_detail_view(name);
        }
    }

    /// Open the detail view of the highlighted list entry
    pub fn open_selected(&mut self) -> bool {
        let Some(country) = self.model.selected_country() else {
            return false;
        };
        let path = country_path(country.common_name());
        self.navigate_to_path(&path)
    }

    pub fn back(&mut self) {
        self.navigate_to_path("/");
    }

    pub fn select_next(&mut self) {
        let len = self.visible_countries().len();
        self.model.navigation.selected = next_selection(self.model.navigation.selected, len);
    }

    pub fn select_prev(&mut self) {
        let len = self.visible_countries().len();
        self.model.navigation.selected = prev_selection(self.model.navigation.selected, len);
    }

    pub fn select_first(&mut self) {
        let len = self.visible_countries().len();
        self.model.navigation.selected = if len == 0 { None } else { Some(0) };
    }

    pub fn select_last(&mut self) {
        let len = self.visible_countries().len();
        self.model.navigation.selected = len.checked_sub(1);
    }

    /// Move the selection by a page, clamped to the list
    pub fn select_page(&mut self, page: usize, forward: bool) {
        let len = self.visible_countries().len();
        if len == 0 {
            self.model.navigation.selected = None;
            return;
        }
        let current = self.model.navigation.selected.unwrap_or(0);
        self.model.navigation.selected = Some(if forward {
            (current + page).min(len - 1)
        } else {
            current.saturating_sub(page)
        });
    }

    /// Scroll the detail panel one line, bounded by its content
    pub fn scroll_detail(&mut self, down: bool) {
        let max = max_detail_scroll(self.current_details().as_ref(), self.model.detail.as_ref());
        let scroll = &mut self.model.navigation.detail_scroll;
        *scroll = if down {
            scroll.saturating_add(1).min(max)
        } else {
            scroll.saturating_sub(1)
        };
    }
}
