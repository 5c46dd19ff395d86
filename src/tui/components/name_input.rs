//! # NameInput Component
//!
//! Single-line text field bound to the roster's pending entry.
//!
//! ## Responsibilities
//!
//! - Capture text input
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Handle submission (Enter)
//!
//! ## State Management
//!
//! The buffer is internal state and mirrors the core's pending entry: every
//! edit emits [`InputEvent::Changed`] with the new text so the event loop
//! can dispatch it into the reducer, and after a commit the loop writes the
//! (reset) pending name back via [`NameInput::set_text`]. Names are a single
//! line; newlines never enter the buffer.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the NameInput
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Buffer content changed; carries the full new text.
    Changed(String),
    /// User pressed Enter to commit the pending name.
    Submit,
}

/// Single-line name input.
///
/// # State
///
/// - `buffer`: current text being typed (mirror of the pending entry)
/// - `cursor`: byte offset of the cursor within `buffer`
pub struct NameInput {
    buffer: String,
    cursor: usize,
}

impl NameInput {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Replace the buffer (used to sync from the core's pending entry).
    /// The cursor moves to the end of the new text.
    pub fn set_text(&mut self, text: &str) {
        self.buffer.clear();
        self.buffer.push_str(text);
        self.cursor = self.buffer.len();
    }

    fn insert_str(&mut self, text: &str) -> Option<InputEvent> {
        // Single-line field: collapse pasted newlines to spaces.
        let cleaned: String = text
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect();
        if cleaned.is_empty() {
            return None;
        }
        self.buffer.insert_str(self.cursor, &cleaned);
        self.cursor += cleaned.len();
        Some(InputEvent::Changed(self.buffer.clone()))
    }
}

impl Default for NameInput {
    fn default() -> Self {
        Self::new()
    }
}

fn prev_char_boundary(s: &str, pos: usize) -> usize {
    s[..pos].char_indices().next_back().map_or(0, |(i, _)| i)
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    s[pos..].chars().next().map_or(s.len(), |c| pos + c.len_utf8())
}

impl Component for NameInput {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(2);

        // Keep the cursor visible: scroll the line left once the cursor's
        // display column passes the inner width.
        let cursor_col = self.buffer[..self.cursor].width() as u16;
        let scroll = cursor_col.saturating_sub(inner_width.saturating_sub(1));

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title("Name");

        let input = Paragraph::new(self.buffer.as_str())
            .block(block)
            .scroll((0, scroll))
            .style(Style::default().fg(Color::Green));

        frame.render_widget(input, area);
        frame.set_cursor_position((area.x + 1 + cursor_col - scroll, area.y + 1));
    }
}

impl EventHandler for NameInput {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                if c.is_control() {
                    return None;
                }
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(InputEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Paste(text) => self.insert_str(text),
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(InputEvent::Changed(self.buffer.clone()))
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                    Some(InputEvent::Changed(self.buffer.clone()))
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor > 0 {
                    self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                }
                None
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor = next_char_boundary(&self.buffer, self.cursor);
                }
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.buffer.len();
                None
            }
            TuiEvent::Submit => Some(InputEvent::Submit),
            _ => None,
        }
    }
}
