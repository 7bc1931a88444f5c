//! Theme mode logic
//!
//! Light/Dark mode and the literal strings it is stored as.

/// Preference key the theme is stored under
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Interpret a stored value. Only the exact literal "dark" selects Dark.
    ///
    /// # Examples
    /// ```
    /// use wheretui::logic::theme::ThemeMode;
    ///
    /// assert_eq!(ThemeMode::from_stored(Some("dark")), ThemeMode::Dark);
    /// assert_eq!(ThemeMode::from_stored(Some("Dark")), ThemeMode::Light);
    /// assert_eq!(ThemeMode::from_stored(None), ThemeMode::Light);
    /// ```
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    /// Label of the header toggle
    pub fn label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Light Mode",
            ThemeMode::Dark => "Dark Mode",
        }
    }
}
