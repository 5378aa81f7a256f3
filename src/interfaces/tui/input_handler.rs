//! Input handling utilities
//!
//! Text editing goes straight into the workflow's open form.

use super::app::App;

/// Handle text character input
pub fn handle_text_input(app: &mut App, c: char) {
    app.panel.workflow.with_form(|form| {
        if !form.submitting {
            form.push_char(c);
            form.validation_errors.clear();
        }
    });
}

/// Handle backspace input
pub fn handle_backspace(app: &mut App) {
    app.panel.workflow.with_form(|form| {
        if !form.submitting {
            form.pop_char();
        }
    });
}

/// Handle tab key for field navigation
pub fn handle_tab_navigation(app: &mut App, backwards: bool) {
    app.panel.workflow.with_form(|form| {
        form.currently_editing = Some(match form.currently_editing {
            Some(field) if backwards => field.prev(),
            Some(field) => field.next(),
            None => Default::default(),
        });
    });
}
