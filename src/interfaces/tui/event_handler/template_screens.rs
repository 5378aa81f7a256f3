//! Event handlers for template screens
//!
//! Handles: Main, TemplateForm, DeleteConfirm

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::interfaces::tui::input_handler::{
    handle_backspace, handle_tab_navigation, handle_text_input,
};

/// Handle main screen input
pub fn handle_main_screen(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),
        KeyCode::Home | KeyCode::Char('g') => app.jump_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.jump_to_bottom(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.start_refresh(),
        KeyCode::Char('a') | KeyCode::Char('A') => app.open_create_form(),
        KeyCode::Char('e') | KeyCode::Char('E') => app.open_edit_form(),
        KeyCode::Char('d') | KeyCode::Char('D') => app.request_delete(),
        KeyCode::Char('i') | KeyCode::Char('I') => app.import_selected(),
        KeyCode::Char('?') | KeyCode::Char('h') => app.current_screen = CurrentScreen::Help,
        KeyCode::Esc => {
            app.clear_error();
            app.panel.notifications.dismiss();
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => app.current_screen = CurrentScreen::Exiting,
        _ => {}
    }
    false
}

/// Handle create / edit form input
pub fn handle_template_form_screen(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Enter => app.submit_form(),
        KeyCode::Esc => app.cancel_form(),
        KeyCode::Tab | KeyCode::Down => handle_tab_navigation(app, false),
        KeyCode::BackTab | KeyCode::Up => handle_tab_navigation(app, true),
        KeyCode::Backspace => handle_backspace(app),
        KeyCode::Char(c) => handle_text_input(app, c),
        _ => {}
    }
    false
}

/// Handle delete confirmation input
pub fn handle_delete_confirm_screen(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_delete(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_delete(),
        _ => {}
    }
    false
}
