//! # RosterList Component
//!
//! Scrollable view of the committed entries, in insertion order. Purely a
//! reflection of the list store: no selection, no editing.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, List, ListItem, ListState};

use crate::core::roster::Entry;
use crate::tui::event::TuiEvent;

pub struct RosterList {
    state: ListState,
}

impl RosterList {
    pub fn new() -> Self {
        Self {
            state: ListState::default(),
        }
    }

    /// Handle a scroll event. Offsets are clamped by the widget on render.
    pub fn handle_event(&mut self, event: &TuiEvent) {
        match event {
            TuiEvent::ScrollUp => {
                *self.state.offset_mut() = self.state.offset().saturating_sub(1);
            }
            TuiEvent::ScrollDown => {
                *self.state.offset_mut() = self.state.offset().saturating_add(1);
            }
            _ => {}
        }
    }

    /// Render the entries. Props come in as parameters so the component
    /// never reaches into global state.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, entries: &[Entry]) {
        // Don't let a stale offset scroll past the end after entries change.
        let max_offset = entries.len().saturating_sub(area.height.saturating_sub(2) as usize);
        if self.state.offset() > max_offset {
            *self.state.offset_mut() = max_offset;
        }

        let items: Vec<ListItem> = entries
            .iter()
            .map(|entry| ListItem::new(entry.name.as_str()))
            .collect();

        let list = List::new(items)
            .block(Block::bordered().title(format!("Names ({})", entries.len())))
            .style(Style::default().fg(Color::Cyan));

        frame.render_stateful_widget(list, area, &mut self.state);
    }
}

impl Default for RosterList {
    fn default() -> Self {
        Self::new()
    }
}
