//! Help dialog
//!
//! Key reference overlay; closes on any key.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::layout::centered_rect_fixed;

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect_fixed(44, 14, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let key = |k: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:12}", k), Style::default().fg(Color::Green)),
            Span::styled(desc, Style::default().fg(Color::White)),
        ])
    };

    let lines = vec![
        Line::from(""),
        key("Tab / 1 / 2", "Switch between Expenses and Income"),
        key("j / k", "Move selection down / up"),
        key("g / G", "Jump to first / last entry"),
        key("e / Enter", "Edit the selected entry's value"),
        key("d", "Delete the selected entry"),
        key("?", "Show this help"),
        key("q", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "  Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
