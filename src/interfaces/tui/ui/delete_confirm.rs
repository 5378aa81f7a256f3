use ratatui::{
    Frame,
    layout::{Margin, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::widgets::Popup;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::popup;
use crate::workflow::messages;

pub fn draw_delete_confirm_screen(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(ctx) = app.panel.workflow.pending_delete() else {
        return;
    };

    let inner_area = Popup::new(messages::DELETE_TEMPLATE_HEADER, popup::DELETE_CONFIRM)
        .theme_color(Color::Red)
        .margin(Margin::new(2, 2))
        .render(frame, area);

    let mut text = vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            messages::CONFIRM_DELETE,
            Style::default().fg(Color::Yellow).bold(),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Template: ", Style::default().fg(Color::DarkGray)),
            Span::styled(ctx.template_name, Style::default().fg(Color::Cyan).bold()),
        ]),
        Line::from(vec![
            Span::styled("ID: ", Style::default().fg(Color::DarkGray)),
            Span::styled(ctx.template_id, Style::default().fg(Color::White)),
        ]),
        Line::from(""),
    ];

    if ctx.deleting {
        text.push(Line::from(vec![Span::styled(
            format!("{} Deleting...", app.spinner()),
            Style::default().fg(Color::Yellow).bold(),
        )]));
    } else {
        text.push(Line::from(vec![Span::styled(
            "This action cannot be undone!",
            Style::default().fg(Color::Red).bold(),
        )]));
    }

    let paragraph = Paragraph::new(text)
        .alignment(ratatui::layout::Alignment::Center)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, inner_area);
}
