//! Event handling for TUI
//!
//! Handles keyboard events and delegates to appropriate handlers
//!
//! - template_screens: Main, TemplateForm, DeleteConfirm
//! - misc_screens: Help, Exiting

use ratatui::crossterm::event::KeyEvent;

use crate::interfaces::tui::app::{App, CurrentScreen};

mod misc_screens;
mod template_screens;

use misc_screens::*;
use template_screens::*;

/// Handle keyboard input based on current screen, returns true to exit
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    match app.current_screen {
        CurrentScreen::Main => handle_main_screen(app, key.code),
        CurrentScreen::TemplateForm => handle_template_form_screen(app, key.code),
        CurrentScreen::DeleteConfirm => handle_delete_confirm_screen(app, key.code),
        CurrentScreen::Help => handle_help_screen(app, key.code),
        CurrentScreen::Exiting => handle_exiting_screen(app, key.code),
    }
}
