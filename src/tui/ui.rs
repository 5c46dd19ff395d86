use crate::core::nav::Route;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ResultView, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    let mut title_bar = TitleBar {
        encoding_label: app.encoding.label(),
        status_message: app.status_message.clone(),
    };

    match app.nav.current() {
        Route::Home => {
            let layout = Layout::vertical([Length(1), Min(0), Length(3), Length(1)]);
            let [title_area, list_area, input_area, help_area] = layout.areas(frame.area());

            title_bar.render(frame, title_area);
            tui.roster_list.render(frame, list_area, app.roster.entries());
            tui.name_input.render(frame, input_area);
            draw_help(
                frame,
                help_area,
                "Enter adds the name · Ctrl+F shows the list · Esc quits",
            );
        }
        Route::Result { list_data } => {
            let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
            let [title_area, body_area, help_area] = layout.areas(frame.area());

            title_bar.render(frame, title_area);
            // Decode happens once, on the first frame of the results route.
            let view = tui
                .result_view
                .get_or_insert_with(|| ResultView::new(app.encoding, list_data));
            view.render(frame, body_area);
            draw_help(frame, help_area, "q or Esc quits");
        }
    }
}

fn draw_help(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::codec::Encoding;
    use crate::test_support::{test_app, test_app_with};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw_to_text(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(60, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_home_shows_seeds_and_input() {
        let app = test_app();
        let mut tui = TuiState::new();
        let text = draw_to_text(&app, &mut tui);

        assert!(text.contains("Roster (json)"));
        assert!(text.contains("Tanu"));
        assert!(text.contains("Tina"));
        assert!(text.contains("Tono"));
        assert!(text.contains("Name"));
        assert!(text.contains("Enter adds the name"));
    }

    #[test]
    fn test_draw_result_lists_decoded_names() {
        let mut app = test_app_with(Encoding::Json);
        update(&mut app, Action::Finish);
        let mut tui = TuiState::new();
        let text = draw_to_text(&app, &mut tui);

        assert!(text.contains("Submitted Names:"));
        assert!(text.contains("Tono"));
        assert!(text.contains("q or Esc quits"));
    }

    #[test]
    fn test_draw_result_plain_shows_joined_string() {
        let mut app = test_app_with(Encoding::Plain);
        update(&mut app, Action::Finish);
        let mut tui = TuiState::new();
        let text = draw_to_text(&app, &mut tui);

        assert!(text.contains("Tanu, Tina, Tono"));
    }
}
