//! Edit value dialog
//!
//! Modal for editing an entry's numeric value. The input accepts arbitrary
//! text; the numeric constraint is enforced only when the edit is applied.
//! An input that fails to parse leaves the dialog open with the text still
//! editable and produces no other feedback.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{Entry, EntryId};
use crate::tui::layout::centered_rect_fixed;

/// State for the edit value dialog
#[derive(Debug, Clone, PartialEq)]
pub struct EditValueState {
    /// The entry being edited
    pub entry_id: EntryId,
    /// Entry title for display
    pub title: String,
    /// Input value (as text while editing)
    pub input: String,
    /// Cursor position, counted in characters
    pub cursor: usize,
}

impl EditValueState {
    /// Initialize the dialog for an entry, pre-filled with its current value
    pub fn for_entry(entry: &Entry) -> Self {
        let input = entry.value.to_string();
        Self {
            entry_id: entry.id,
            title: entry.title.clone(),
            cursor: input.chars().count(),
            input,
        }
    }

    /// Insert a character at the cursor
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.input.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.input.remove(at);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.input.chars().count() {
            self.cursor += 1;
        }
    }

    /// Clear the input
    pub fn clear_input(&mut self) {
        self.input.clear();
        self.cursor = 0;
    }

    /// Handle a text-editing key; Enter and Esc are routed by the caller
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear_input();
            }
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.input.chars().count(),
            _ => {}
        }
    }

    /// Byte offset of the given character position
    fn byte_index(&self, char_pos: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }
}

/// Render the edit value dialog
pub fn render(frame: &mut Frame, state: &EditValueState) {
    let area = centered_rect_fixed(46, 8, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Edit Value ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Entry title
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Instructions
            Constraint::Min(0),    // Remaining
        ])
        .split(inner);

    let title_line = Line::from(vec![
        Span::styled("Entry: ", Style::default().fg(Color::Yellow)),
        Span::styled(state.title.as_str(), Style::default().fg(Color::White)),
    ]);
    frame.render_widget(Paragraph::new(title_line), chunks[0]);

    // Input with cursor
    let byte_cursor = state
        .input
        .char_indices()
        .nth(state.cursor)
        .map(|(i, _)| i)
        .unwrap_or(state.input.len());
    let (before, after) = state.input.split_at(byte_cursor);

    let mut input_spans = vec![
        Span::styled("New value: ", Style::default().fg(Color::Cyan)),
        Span::styled(before.to_string(), Style::default().fg(Color::White)),
    ];

    let mut rest = after.chars();
    let cursor_char = rest.next().unwrap_or(' ');
    input_spans.push(Span::styled(
        cursor_char.to_string(),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    ));
    input_spans.push(Span::styled(
        rest.as_str().to_string(),
        Style::default().fg(Color::White),
    ));

    frame.render_widget(Paragraph::new(Line::from(input_spans)), chunks[2]);

    let instructions = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Update  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel  "),
        Span::styled("[Ctrl+U]", Style::default().fg(Color::Cyan)),
        Span::raw(" Clear"),
    ]);
    frame.render_widget(Paragraph::new(instructions), chunks[4]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryKind;

    fn state() -> EditValueState {
        EditValueState::for_entry(&Entry::new("Coffee", EntryKind::Expense, 4.5))
    }

    #[test]
    fn test_for_entry_prefills_value() {
        let state = state();
        assert_eq!(state.input, "4.5");
        assert_eq!(state.cursor, 3);
        assert_eq!(state.title, "Coffee");
    }

    #[test]
    fn test_insert_and_backspace() {
        let mut state = state();
        state.insert_char('0');
        assert_eq!(state.input, "4.50");
        state.backspace();
        state.backspace();
        assert_eq!(state.input, "4.");
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn test_insert_mid_input() {
        let mut state = state();
        state.move_left();
        state.move_left();
        state.insert_char('2');
        assert_eq!(state.input, "42.5");
    }

    #[test]
    fn test_arbitrary_text_is_allowed() {
        // The input surface has no format constraint; only the parse at
        // apply time decides.
        let mut state = state();
        state.clear_input();
        for c in "abc".chars() {
            state.insert_char(c);
        }
        assert_eq!(state.input, "abc");
    }

    #[test]
    fn test_clear_via_ctrl_u() {
        let mut state = state();
        state.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert!(state.input.is_empty());
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_cursor_handles_multibyte_input() {
        let mut state = state();
        state.clear_input();
        state.insert_char('é');
        state.insert_char('5');
        state.move_left();
        state.move_left();
        state.insert_char('x');
        assert_eq!(state.input, "xé5");
    }
}
