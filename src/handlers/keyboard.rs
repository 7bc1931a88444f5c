//! Keyboard Input Handler
//!
//! Dispatches key presses by view: region dropdown first, then search input,
//! then the home list or the detail view.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::api::CountrySource;
use crate::model::VimCommandState;
use crate::App;

const PAGE_SIZE: usize = 10;

/// Handle keyboard input
pub fn handle_key<S: CountrySource>(app: &mut App<S>, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    if app.model.navigation.in_detail_view() {
        handle_detail_key(app, key);
        return;
    }

    if app.model.ui.region_dropdown.is_some() {
        handle_dropdown_key(app, key);
        return;
    }

    if app.model.ui.search_mode {
        handle_search_key(app, key);
        return;
    }

    handle_home_key(app, key);
}

fn handle_dropdown_key<S: CountrySource>(app: &mut App<S>, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_region_highlight(false),
        KeyCode::Down | KeyCode::Char('j') => app.move_region_highlight(true),
        KeyCode::Enter => app.choose_highlighted_region(),
        KeyCode::Esc | KeyCode::Char('r') => app.toggle_region_dropdown(),
        _ => {}
    }
}

fn handle_search_key<S: CountrySource>(app: &mut App<S>, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.accept_search(),
        KeyCode::Esc => app.clear_search(),
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Up => app.select_prev(),
        KeyCode::Down => app.select_next(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.push_search_char(c)
        }
        _ => {}
    }
}

fn handle_home_key<S: CountrySource>(app: &mut App<S>, key: KeyEvent) {
    let vim = app.model.ui.vim_mode;
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Second half of 'gg'
    if app.model.ui.vim_command_state == VimCommandState::WaitingForSecondG {
        app.model.ui.vim_command_state = VimCommandState::None;
        if key.code == KeyCode::Char('g') {
            app.select_first();
            return;
        }
    }

    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('f') if ctrl => app.start_search(),
        KeyCode::Char('/') => app.start_search(),
        KeyCode::Esc => {
            if !app.model.ui.filter.search_text.is_empty() {
                app.clear_search();
            }
        }
        KeyCode::Char('r') => app.toggle_region_dropdown(),
        KeyCode::Char('R') => app.clear_region(),
        KeyCode::Char('t') => {
            app.toggle_theme();
        }
        KeyCode::Up => app.select_prev(),
        KeyCode::Down => app.select_next(),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),
        KeyCode::PageUp => app.select_page(PAGE_SIZE, false),
        KeyCode::PageDown => app.select_page(PAGE_SIZE, true),
        KeyCode::Enter | KeyCode::Right => {
            app.open_selected();
        }
        KeyCode::Char('k') if vim => app.select_prev(),
        KeyCode::Char('j') if vim => app.select_next(),
        KeyCode::Char('l') if vim => {
            app.open_selected();
        }
        KeyCode::Char('g') if vim => {
            app.model.ui.vim_command_state = VimCommandState::WaitingForSecondG;
        }
        KeyCode::Char('G') if vim => app.select_last(),
        KeyCode::Char('d') if vim && ctrl => app.select_page(PAGE_SIZE / 2, true),
        KeyCode::Char('u') if vim && ctrl => app.select_page(PAGE_SIZE / 2, false),
        _ => {}
    }
}

fn handle_detail_key<S: CountrySource>(app: &mut App<S>, key: KeyEvent) {
    let vim = app.model.ui.vim_mode;

    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('b') => app.back(),
        KeyCode::Char('h') if vim => app.back(),
        KeyCode::Char('t') => {
            app.toggle_theme();
        }
        KeyCode::Up => app.scroll_detail(false),
        KeyCode::Down => app.scroll_detail(true),
        KeyCode::Char('k') if vim => app.scroll_detail(false),
        KeyCode::Char('j') if vim => app.scroll_detail(true),
        _ => {}
    }
}
