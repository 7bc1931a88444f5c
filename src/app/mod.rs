//! App Orchestration
//!
//! `App` owns the Model, the country source, the theme preference and the
//! handles of background tasks. Its methods are grouped by domain:
//! - details: Detail view mount/unmount, border and flag results
//! - filters: Search text and region selection
//! - navigation: Routes, selection, back
//! - theme: Light/Dark toggle

pub mod details;
pub mod filters;
pub mod navigation;
pub mod theme;

use ratatui_image::picker::Picker;
use ratatui_image::protocol::StatefulProtocol;
use tokio::sync::mpsc;

use crate::api::{CountrySource, RestCountriesClient};
use crate::config::Config;
use crate::model::Model;
use crate::preferences::ThemePreference;
use crate::services::api::{spawn_directory_load, ApiResponse};
use crate::services::ViewTasks;

pub struct App<S: CountrySource = RestCountriesClient> {
    pub model: Model,

    source: S,
    theme: ThemePreference,
    api_tx: mpsc::UnboundedSender<ApiResponse>,
    api_rx: mpsc::UnboundedReceiver<ApiResponse>,

    /// Tasks started by the mounted detail view
    detail_tasks: ViewTasks,
    next_generation: u64,

    flag_images: bool,
    image_picker: Option<Picker>,
    /// Decoded flag of the mounted detail view (not Clone, kept out of Model)
    pub flag_protocol: Option<StatefulProtocol>,
}

impl<S: CountrySource> App<S> {
    /// Build the app and start the one-shot directory fetch.
    ///
    /// Must be called inside a tokio runtime.
    pub fn new(config: &Config, source: S, theme: ThemePreference, image_picker: Option<Picker>) -> Self {
        let (api_tx, api_rx) = mpsc::unbounded_channel();

        let mut model = Model::new(config.vim_mode);
        model.ui.theme = theme.mode();

        spawn_directory_load(source.clone(), api_tx.clone());

        Self {
            model,
            source,
            theme,
            api_tx,
            api_rx,
            detail_tasks: ViewTasks::new(),
            next_generation: 0,
            flag_images: config.flag_images && image_picker.is_some(),
            image_picker,
            flag_protocol: None,
        }
    }

    /// Next pending background result, if any (non-blocking)
    pub fn try_recv_response(&mut self) -> Option<ApiResponse> {
        self.api_rx.try_recv().ok()
    }

    /// Wait for the next background result
    pub async fn recv_response(&mut self) -> Option<ApiResponse> {
        self.api_rx.recv().await
    }

    /// Apply every background result that has already arrived
    pub fn drain_responses(&mut self) -> usize {
        let mut handled = 0;
        while let Some(response) = self.try_recv_response() {
            crate::handlers::handle_api_response(self, response);
            handled += 1;
        }
        handled
    }

    pub fn theme_preference(&self) -> &ThemePreference {
        &self.theme
    }

    pub fn should_quit(&self) -> bool {
        self.model.ui.should_quit
    }

    pub fn quit(&mut self) {
        self.leave_detail_view();
        self.model.ui.should_quit = true;
    }
}
