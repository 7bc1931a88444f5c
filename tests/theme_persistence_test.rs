//! Light/Dark preference persisted across sessions

mod common;

use common::{country, loaded_app, test_config, FakeSource};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tempfile::TempDir;
use wheretui::handlers::handle_key;
use wheretui::logic::theme::{ThemeMode, THEME_KEY};
use wheretui::preferences::{PreferenceDb, ThemePreference};
use wheretui::App;

fn open_store(dir: &TempDir) -> PreferenceDb {
    PreferenceDb::open(&dir.path().join("preferences.db")).unwrap()
}

#[tokio::test]
async fn test_toggle_persists_across_sessions() {
    let dir = TempDir::new().unwrap();

    {
        let theme = ThemePreference::load(open_store(&dir));
        assert_eq!(theme.mode(), ThemeMode::Light);

        let mut app = App::new(&test_config(), FakeSource::new(Vec::new()), theme, None);
        assert_eq!(app.model.ui.theme, ThemeMode::Light);

        assert_eq!(app.toggle_theme(), ThemeMode::Dark);
        assert_eq!(app.model.ui.theme, ThemeMode::Dark);
        assert_eq!(
            app.theme_preference().store().unwrap().get(THEME_KEY).unwrap().as_deref(),
            Some("dark")
        );
    }

    // Fresh read of storage in a new session
    let theme = ThemePreference::load(open_store(&dir));
    assert_eq!(theme.mode(), ThemeMode::Dark);

    let app = App::new(&test_config(), FakeSource::new(Vec::new()), theme, None);
    assert!(app.model.ui.theme.is_dark());
}

#[tokio::test]
async fn test_theme_key_works_in_detail_view() {
    let mut app = loaded_app(FakeSource::new(vec![country("Togo", "Africa", "TGO", &[])])).await;
    assert!(app.open_selected());

    handle_key(&mut app, KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE));
    assert_eq!(app.model.ui.theme, ThemeMode::Dark);
    assert!(app.model.navigation.in_detail_view());

    handle_key(&mut app, KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
    assert!(!app.model.navigation.in_detail_view());

    handle_key(&mut app, KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE));
    assert_eq!(app.model.ui.theme, ThemeMode::Light);
}

#[test]
fn test_unreadable_value_falls_back_to_light() {
    let dir = TempDir::new().unwrap();
    open_store(&dir).set(THEME_KEY, "purple").unwrap();

    let theme = ThemePreference::load(open_store(&dir));
    assert_eq!(theme.mode(), ThemeMode::Light);
    assert_eq!(
        open_store(&dir).get(THEME_KEY).unwrap().as_deref(),
        Some("light")
    );
}
