use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table, TableState, Wrap},
};

use super::common::truncate;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::URL_TRUNCATE_LENGTH;
use crate::store::CollectionState;
use crate::workflow::messages;

fn list_block(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title)
        .title_style(Style::default().fg(Color::Cyan))
}

fn draw_message(frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
    let paragraph = Paragraph::new(lines)
        .block(list_block("Templates".to_string()))
        .alignment(ratatui::layout::Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

pub fn draw_main_screen(frame: &mut Frame, app: &mut App, area: Rect) {
    let templates = match app.panel.store.state() {
        CollectionState::Idle | CollectionState::Loading => {
            draw_message(
                frame,
                area,
                vec![
                    Line::from(""),
                    Line::from(""),
                    Line::from(Span::styled(
                        format!("{} Loading templates...", app.spinner()),
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                    )),
                ],
            );
            return;
        }
        CollectionState::Failed(error) => {
            draw_message(
                frame,
                area,
                vec![
                    Line::from(""),
                    Line::from(""),
                    Line::from(Span::styled(
                        messages::loading_error(&error),
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(""),
                    Line::from(vec![
                        Span::styled("Press ", Style::default().fg(Color::DarkGray)),
                        Span::styled(
                            "[r]",
                            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(" to retry", Style::default().fg(Color::DarkGray)),
                    ]),
                ],
            );
            return;
        }
        CollectionState::Ready(templates) => templates,
    };

    if templates.is_empty() {
        draw_message(
            frame,
            area,
            vec![
                Line::from(""),
                Line::from(""),
                Line::from(Span::styled(
                    messages::empty_list(&app.panel.organization),
                    Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(vec![
                    Span::styled("Press ", Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        "[a]",
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        " to create the first template",
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
            ],
        );
        return;
    }

    // border 2行 + header 1行 + header margin 1行 = 4行开销
    let total = templates.len();
    let visible_height = (area.height as usize).saturating_sub(4);
    app.last_visible_height = visible_height.max(1);

    let offset = app.scroll_offset.min(total.saturating_sub(1));
    app.scroll_offset = offset;
    let end = (offset + visible_height).min(total);

    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Span::styled("ID", header_style),
        Span::styled("Name", header_style),
        Span::styled("Template URL", header_style),
    ])
    .bottom_margin(1);

    let rows: Vec<Row> = templates[offset..end]
        .iter()
        .map(|template| {
            Row::new(vec![
                Span::styled(template.id.clone(), Style::default().fg(Color::DarkGray)),
                Span::styled(
                    template.display_name.clone(),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    truncate(&template.package_url, URL_TRUNCATE_LENGTH),
                    Style::default().fg(Color::Blue),
                ),
            ])
        })
        .collect();

    let title = if app.is_busy() {
        format!("Templates ({}) {}", total, app.spinner())
    } else {
        format!("Templates ({})", total)
    };

    let table = Table::new(
        rows,
        [
            ratatui::layout::Constraint::Length(6),  // ID
            ratatui::layout::Constraint::Length(24), // Name
            ratatui::layout::Constraint::Min(20),    // URL
        ],
    )
    .header(header)
    .block(list_block(title).title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)))
    .row_highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White))
    .highlight_symbol("▶ ")
    .column_spacing(1);

    // selected 调整为相对于可见窗口的偏移
    let mut virtual_state = TableState::default();
    if app.selected_index >= offset && app.selected_index < end {
        virtual_state.select(Some(app.selected_index - offset));
    }

    frame.render_stateful_widget(table, area, &mut virtual_state);
}
