use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::Popup;
use crate::interfaces::tui::constants::popup;

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )])
}

fn shortcut(keys: &'static str, action: &'static str, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<17}", keys), Style::default().fg(color)),
        Span::styled(action, Style::default().fg(Color::White)),
    ])
}

pub fn draw_help_screen(frame: &mut Frame, area: Rect) {
    let inner_area = Popup::new("Help - Keyboard Shortcuts", popup::HELP).render(frame, area);

    let help_text = vec![
        Line::from(""),
        section("NAVIGATION"),
        shortcut("Up/Down, j/k", "Navigate list", Color::Cyan),
        shortcut("Home, g", "Jump to top", Color::Cyan),
        shortcut("End, G", "Jump to bottom", Color::Cyan),
        shortcut("PageUp/PageDown", "Scroll 10 items", Color::Cyan),
        Line::from(""),
        section("ACTIONS"),
        shortcut("r", "Refresh templates", Color::Cyan),
        shortcut("a", "Create template", Color::Green),
        shortcut("e", "Edit selected template", Color::Yellow),
        shortcut("d", "Delete selected template", Color::Red),
        shortcut("i", "Import selected template", Color::Magenta),
        shortcut("Esc", "Dismiss notification", Color::Red),
        Line::from(""),
        section("FORM"),
        shortcut("Tab / Shift+Tab", "Next / previous field", Color::Cyan),
        shortcut("Enter", "Save", Color::Green),
        shortcut("Esc", "Cancel", Color::Red),
        Line::from(""),
        section("OTHER"),
        shortcut("?, h", "Toggle this help", Color::Blue),
        shortcut("q", "Quit", Color::Magenta),
    ];

    frame.render_widget(Paragraph::new(help_text), inner_area);
}
