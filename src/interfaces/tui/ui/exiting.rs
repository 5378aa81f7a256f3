use ratatui::{
    Frame,
    layout::{Alignment, Margin, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::widgets::Popup;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::popup;

/// What quitting now would cut short, if anything
fn in_flight_notice(running: usize, deleting: Option<&str>, saving: bool) -> Option<String> {
    if let Some(name) = deleting {
        return Some(format!(
            "Deleting \"{}\" has not finished; quitting aborts it.",
            name
        ));
    }
    if saving {
        return Some("The template form is still saving; quitting aborts it.".to_string());
    }
    match running {
        0 => None,
        1 => Some("1 request is still running and will be aborted.".to_string()),
        n => Some(format!("{} requests are still running and will be aborted.", n)),
    }
}

pub fn draw_exiting_screen(frame: &mut Frame, app: &App, area: Rect) {
    let inner_area = Popup::new("Quit template-desk", popup::EXITING)
        .theme_color(Color::Magenta)
        .margin(Margin::new(2, 2))
        .render(frame, area);

    let deleting = app
        .panel
        .workflow
        .pending_delete()
        .filter(|ctx| ctx.deleting)
        .map(|ctx| ctx.template_name);
    let saving = app
        .panel
        .workflow
        .form()
        .is_some_and(|form| form.submitting);

    let mut text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Leave the {} templates panel?", app.panel.organization),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(""),
    ];
    if let Some(notice) = in_flight_notice(app.running_tasks(), deleting.as_deref(), saving) {
        text.push(Line::from(Span::styled(
            notice,
            Style::default().fg(Color::Yellow),
        )));
        text.push(Line::from(""));
    }
    text.push(Line::from(Span::styled(
        "Press [y] to quit, [n] to cancel",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_panel_has_no_notice() {
        assert_eq!(in_flight_notice(0, None, false), None);
    }

    #[test]
    fn test_pending_delete_is_named() {
        let notice = in_flight_notice(1, Some("Intro"), false).unwrap();
        assert!(notice.contains("\"Intro\""));
    }

    #[test]
    fn test_saving_form_wins_over_plain_count() {
        let notice = in_flight_notice(1, None, true).unwrap();
        assert!(notice.contains("saving"));
    }

    #[test]
    fn test_running_requests_are_counted() {
        assert_eq!(
            in_flight_notice(3, None, false).as_deref(),
            Some("3 requests are still running and will be aborted.")
        );
    }
}
