//! Shared types for the Model

use crate::logic::search::{ALL_REGIONS, REGIONS};

/// Selector values offered by the region dropdown, sentinel first
const REGION_OPTIONS: [&str; REGIONS.len() + 1] = {
    let mut options = [ALL_REGIONS; REGIONS.len() + 1];
    let mut i = 0;
    while i < REGIONS.len() {
        options[i + 1] = REGIONS[i];
        i += 1;
    }
    options
};

/// Region selector plus free-text query
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    pub selected_region: String,
    pub search_text: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            selected_region: ALL_REGIONS.to_string(),
            search_text: String::new(),
        }
    }
}

/// Open region dropdown and its highlighted entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionDropdownState {
    pub highlighted: usize,
}

impl RegionDropdownState {
    /// Entries of the dropdown: "all regions" followed by the five regions
    pub fn options() -> &'static [&'static str] {
        &REGION_OPTIONS
    }
}

/// Progress of an asynchronous per-view fetch
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Vim command state for tracking double-key commands like 'gg'
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VimCommandState {
    None,
    WaitingForSecondG,
}
