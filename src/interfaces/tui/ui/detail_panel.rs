//! Detail panel for the selected template

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::interfaces::tui::app::App;

pub fn draw_detail_panel(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title("Details")
        .title_style(Style::default().fg(Color::Cyan).bold())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    let Some(template) = app.get_selected_template() else {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No template selected",
            Style::default().fg(Color::DarkGray),
        )))
        .block(block)
        .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(empty, area);
        return;
    };

    let label = Style::default().fg(Color::DarkGray);
    let mut details = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Name:      ", label),
            Span::styled(
                template.display_name.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("ID:        ", label),
            Span::styled(template.id.clone(), Style::default().fg(Color::White)),
        ]),
    ];

    if let Some(title) = template.title() {
        details.push(Line::from(vec![
            Span::styled("Title:     ", label),
            Span::styled(title.to_string(), Style::default().fg(Color::White)),
        ]));
    }

    details.push(Line::from(""));
    details.push(Line::from(Span::styled("Description:", label)));
    details.push(Line::from(Span::styled(
        template.description().unwrap_or("-").to_string(),
        Style::default().fg(Color::White),
    )));

    details.push(Line::from(""));
    details.push(Line::from(Span::styled("Template URL:", label)));
    details.push(Line::from(Span::styled(
        template.package_url.clone(),
        Style::default().fg(Color::Blue),
    )));

    if let Some(thumbnail) = template.thumbnail_url() {
        details.push(Line::from(""));
        details.push(Line::from(Span::styled("Thumbnail:", label)));
        details.push(Line::from(Span::styled(
            thumbnail.to_string(),
            Style::default().fg(Color::Blue),
        )));
    }

    let paragraph = Paragraph::new(details)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
