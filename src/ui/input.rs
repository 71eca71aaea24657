use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::app::{App, Move};
use crate::ui::route::Route;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
        app.request_quit();
        return;
    }

    match app.route() {
        Route::CardList => handle_list_key(app, key, ctrl),
        Route::CardDetails { .. } => handle_details_key(app, key),
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent, ctrl: bool) {
    match key.code {
        KeyCode::Char('r') if ctrl => app.refresh(),
        KeyCode::Char('u') if ctrl => app.clear_query(),
        KeyCode::Char(c) if !ctrl => app.push_query_char(c),
        KeyCode::Backspace => app.pop_query_char(),
        KeyCode::Left => app.move_selection(Move::Left),
        KeyCode::Right => app.move_selection(Move::Right),
        KeyCode::Up => app.move_selection(Move::Up),
        KeyCode::Down => app.move_selection(Move::Down),
        KeyCode::Enter => app.activate_selection(),
        KeyCode::Esc => app.request_quit(),
        _ => {}
    }
}

fn handle_details_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('q') => app.back(),
        _ => {}
    }
}
