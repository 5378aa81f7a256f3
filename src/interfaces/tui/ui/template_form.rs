use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::common::truncate;
use super::widgets::{InputField, Popup};
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{colors, popup};
use crate::workflow::FormField;

pub fn draw_template_form_screen(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(form) = app.panel.workflow.form() else {
        return;
    };

    let color = if form.is_editing() {
        Color::Yellow
    } else {
        Color::Green
    };
    let inner_area = Popup::new(form.mode.title(), popup::TEMPLATE_FORM)
        .theme_color(color)
        .render(frame, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Name + error
            Constraint::Length(4), // Description + error
            Constraint::Length(4), // Template URL + error
            Constraint::Length(4), // Thumbnail path
            Constraint::Length(1), // Preview
            Constraint::Min(1),    // Inline error / progress
        ])
        .split(inner_area);

    for (field, chunk) in FormField::ALL.iter().zip(chunks.iter()) {
        let mut input = InputField::new(field.display_title(), form.input(*field))
            .active(form.currently_editing == Some(*field))
            .error(form.get_error(*field).map(String::as_str))
            .disabled(form.submitting);
        input = match field {
            FormField::Thumbnail => input.placeholder("path to an image file"),
            _ => input.required(),
        };
        input.render(frame, *chunk);
    }

    let preview = match &form.thumbnail_preview {
        Some(preview) => Line::from(vec![
            Span::styled("Preview: ", Style::default().fg(colors::MUTED)),
            Span::styled(truncate(preview, 60), Style::default().fg(Color::Blue)),
        ]),
        None => Line::from(Span::styled(
            "No thumbnail",
            Style::default().fg(colors::MUTED),
        )),
    };
    frame.render_widget(Paragraph::new(preview), chunks[4]);

    let status = if form.submitting {
        Line::from(Span::styled(
            format!("{} Saving...", app.spinner()),
            Style::default().fg(colors::WARNING),
        ))
    } else if let Some(error) = &form.error {
        Line::from(Span::styled(
            error.clone(),
            Style::default().fg(colors::ERROR).bold(),
        ))
    } else {
        Line::from("")
    };
    frame.render_widget(Paragraph::new(status).wrap(Wrap { trim: true }), chunks[5]);
}
