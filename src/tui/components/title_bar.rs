//! # TitleBar Component
//!
//! Top status bar. Stateless: everything it shows arrives as props, so it
//! renders the same regardless of where the data came from.
//!
//! Format priority:
//!
//! 1. With a status message: `"Roster (json) | 4 names on the list"`
//! 2. Without: `"Roster (json)"`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::tui::component::Component;

/// Top status bar component showing the encoding variant and status text.
pub struct TitleBar {
    pub encoding_label: &'static str,
    pub status_message: String,
}

impl TitleBar {
    fn title_text(&self) -> String {
        if self.status_message.is_empty() {
            format!("Roster ({})", self.encoding_label)
        } else {
            format!("Roster ({}) | {}", self.encoding_label, self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::raw(self.title_text()), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_with_status() {
        let bar = TitleBar {
            encoding_label: "json",
            status_message: "4 names on the list".to_string(),
        };
        assert_eq!(bar.title_text(), "Roster (json) | 4 names on the list");
    }

    #[test]
    fn test_title_without_status() {
        let bar = TitleBar {
            encoding_label: "plain",
            status_message: String::new(),
        };
        assert_eq!(bar.title_text(), "Roster (plain)");
    }
}
