//! UI Model
//!
//! Filter state, input modes and the root theme attribute.

use super::types::{FilterState, RegionDropdownState, VimCommandState};
use crate::logic::theme::ThemeMode;

#[derive(Clone, Debug)]
pub struct UiModel {
    /// Region selector and search text of the home view
    pub filter: FilterState,

    /// Whether the search input is receiving keystrokes
    pub search_mode: bool,

    /// Region dropdown, when open
    pub region_dropdown: Option<RegionDropdownState>,

    /// Root theme attribute all widgets are styled from
    pub theme: ThemeMode,

    pub vim_mode: bool,

    pub vim_command_state: VimCommandState,

    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            filter: FilterState::default(),
            search_mode: false,
            region_dropdown: None,
            theme: ThemeMode::Light,
            vim_mode,
            vim_command_state: VimCommandState::None,
            should_quit: false,
        }
    }
}
