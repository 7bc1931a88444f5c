//! Search text and region selection

use crate::api::{Country, CountrySource};
use crate::logic::navigation::clamp_selection;
use crate::logic::search::ALL_REGIONS;
use crate::model::RegionDropdownState;
use crate::App;

impl<S: CountrySource> App<S> {
    /// Visible list, derived from the directory and filter state on every call
    pub fn visible_countries(&self) -> Vec<&Country> {
        self.model.visible_countries()
    }

    pub fn start_search(&mut self) {
        self.model.ui.search_mode = true;
    }

    /// Stop receiving keystrokes; the query stays applied
    pub fn accept_search(&mut self) {
        self.model.ui.search_mode = false;
    }

    pub fn push_search_char(&mut self, c: char) {
        self.model.ui.filter.search_text.push(c);
        self.filter_changed();
    }

    pub fn pop_search_char(&mut self) {
        self.model.ui.filter.search_text.pop();
        self.filter_changed();
    }

    pub fn set_search_text(&mut self, text: &str) {
        self.model.ui.filter.search_text = text.to_string();
        self.filter_changed();
    }

    pub fn clear_search(&mut self) {
        self.model.ui.search_mode = false;
        self.set_search_text("");
    }

    /// Set the region selector; `ALL_REGIONS` disables region filtering
    pub fn select_region(&mut self, region: &str) {
        self.model.ui.filter.selected_region = region.to_string();
        self.model.ui.region_dropdown = None;
        self.filter_changed();
    }

    pub fn clear_region(&mut self) {
        self.select_region(ALL_REGIONS);
    }

    pub fn toggle_region_dropdown(&mut self) {
        self.model.ui.region_dropdown = match self.model.ui.region_dropdown {
            Some(_) => None,
            None => {
                let highlighted = RegionDropdownState::options()
                    .iter()
                    .position(|r| *r == self.model.ui.filter.selected_region)
                    .unwrap_or(0);
                Some(RegionDropdownState { highlighted })
            }
        };
    }

    pub fn move_region_highlight(&mut self, forward: bool) {
        let len = RegionDropdownState::options().len();
        if let Some(dropdown) = &mut self.model.ui.region_dropdown {
            dropdown.highlighted = if forward {
                (dropdown.highlighted + 1) % len
            } else {
                (dropdown.highlighted + len - 1) % len
            };
        }
    }

    pub fn choose_highlighted_region(&mut self) {
        let Some(dropdown) = &self.model.ui.region_dropdown else {
            return;
        };
        if let Some(region) = RegionDropdownState::options().get(dropdown.highlighted) {
            self.select_region(region);
        }
    }

    fn filter_changed(&mut self) {
        let len = self.visible_countries().len();
        self.model.navigation.selected = clamp_selection(self.model.navigation.selected, len);
    }
}
