//! Navigation Model
//!
//! Current route and the highlighted entry of the home list.

use crate::logic::navigation::Route;

#[derive(Clone, Debug)]
pub struct NavigationModel {
    pub route: Route,

    /// Highlighted index into the visible (filtered) list
    pub selected: Option<usize>,

    /// Vertical scroll of the detail view
    pub detail_scroll: u16,
}

impl NavigationModel {
    pub fn new() -> Self {
        Self {
            route: Route::Home,
            selected: None,
            detail_scroll: 0,
        }
    }

    pub fn in_detail_view(&self) -> bool {
        matches!(self.route, Route::Country { .. })
    }
}

impl Default for NavigationModel {
    fn default() -> Self {
        Self::new()
    }
}
