//! Pure Application Model - Elm Architecture
//!
//! The Model is organized into focused sub-models:
//!
//! - **DirectoryModel**: The country list loaded once at startup
//! - **NavigationModel**: Current route and list selection
//! - **UiModel**: Filter state, input modes, dropdown, theme attribute
//! - **DetailModel**: Per-mount state of the detail view (border names, flag)
//!
//! Services and task handles live on `App`, not here.

pub mod detail;
pub mod directory;
pub mod navigation;
pub mod types;
pub mod ui;

pub use detail::DetailModel;
pub use directory::DirectoryModel;
pub use navigation::NavigationModel;
pub use types::*;
pub use ui::UiModel;

use crate::api::Country;
use crate::logic;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    pub directory: DirectoryModel,
    pub navigation: NavigationModel,
    pub ui: UiModel,
    /// Present only while the detail view is mounted
    pub detail: Option<DetailModel>,
}

impl Model {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            directory: DirectoryModel::new(),
            navigation: NavigationModel::new(),
            ui: UiModel::new(vim_mode),
            detail: None,
        }
    }

    /// Records visible under the current filter state, in directory order
    pub fn visible_countries(&self) -> Vec<&Country> {
        logic::search::filter_countries(
            &self.directory.countries,
            &self.ui.filter.selected_region,
            &self.ui.filter.search_text,
        )
    }

    /// Currently highlighted record of the visible list
    pub fn selected_country(&self) -> Option<&Country> {
        let idx = self.navigation.selected?;
        self.visible_countries().get(idx).copied()
    }
}
