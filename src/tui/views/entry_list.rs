//! Entry list view
//!
//! Shows the entries of the active view's kind, in collection order, with
//! signed amounts. An empty filter result renders an explicit placeholder
//! instead of an empty list.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::signed_amount;
use crate::models::EntryKind;
use crate::tui::app::{ActiveView, App};

/// Render the active list view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let entries = app.visible_entries();

    let title_color = match app.active_view {
        ActiveView::Expenses => Color::Red,
        ActiveView::Income => Color::Green,
    };

    let block = Block::default()
        .title(format!(" {} ", app.active_view.title()))
        .title_style(
            Style::default()
                .fg(title_color)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if entries.is_empty() {
        let text = Paragraph::new("There are no entries.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Min(20),    // Title
        Constraint::Length(14), // Amount
    ];

    let header = Row::new(vec![
        Cell::from("Title").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Amount").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let symbol = app.settings.currency_symbol.as_str();
    let rows: Vec<Row> = entries
        .iter()
        .map(|entry| {
            let amount_color = match entry.kind {
                EntryKind::Expense => Color::Red,
                EntryKind::Income => Color::Green,
            };
            Row::new(vec![
                Cell::from(entry.title.clone()),
                Cell::from(signed_amount(entry, symbol))
                    .style(Style::default().fg(amount_color)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_index));

    frame.render_stateful_widget(table, area, &mut state);
}
