use crate::api::CountrySource;
use crate::logic::theme::ThemeMode;
use crate::App;

impl<S: CountrySource> App<S> {
    /// Flip Light/Dark: applies the root attribute and persists immediately
    pub fn toggle_theme(&mut self) -> ThemeMode {
        let mode = self.theme.toggle();
        self.model.ui.theme = mode;
        tracing::debug!(theme = mode.as_str(), "theme toggled");
        mode
    }
}
