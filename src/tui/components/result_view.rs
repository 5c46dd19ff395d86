//! # ResultView Component
//!
//! Body of the results screen. Built once when navigation happens: the
//! payload is decoded here (and only here), so the rest of the TUI never
//! sees anything but display lines.
//!
//! The two encoding variants render differently on purpose:
//!
//! - json: the payload is decoded back into entries and listed one per
//!   line. A payload that fails to decode shows an explicit empty notice
//!   instead of crashing or erroring.
//! - plain: the payload is not decodable, so the joined string is shown
//!   as-is.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::codec::{self, Encoding};
use crate::tui::component::Component;

const EMPTY_NOTICE: &str = "No names were submitted";

pub struct ResultView {
    lines: Vec<String>,
}

impl ResultView {
    /// Decode the navigation payload according to the deployment's variant.
    pub fn new(encoding: Encoding, list_data: &str) -> Self {
        let lines = match encoding {
            Encoding::Json => {
                let entries = codec::decode(list_data);
                if entries.is_empty() {
                    vec![EMPTY_NOTICE.to_string()]
                } else {
                    entries.into_iter().map(|e| e.name).collect()
                }
            }
            Encoding::Plain => {
                if list_data.is_empty() {
                    vec![EMPTY_NOTICE.to_string()]
                } else {
                    vec![list_data.to_string()]
                }
            }
        };
        Self { lines }
    }
}

impl Component for ResultView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut text_lines = Vec::with_capacity(self.lines.len() + 2);
        text_lines.push(Line::from(Span::styled(
            "Submitted Names:",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
        text_lines.push(Line::default());
        for line in &self.lines {
            text_lines.push(Line::from(line.as_str()));
        }

        let height = text_lines.len() as u16;
        let [centered] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);

        let paragraph = Paragraph::new(text_lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, centered);
    }
}
