//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the event loop uses conditional redraw: it sleeps
//! up to 500ms in the poll, and only redraws after an event arrived. Every
//! mutating action is followed by exactly one redraw of the affected
//! screen.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor
//! because ratatui's `set_cursor_position` resets the terminal's blink
//! timer on every `draw()` call.

mod component;
mod components;
mod event;
mod ui;

use log::info;
use std::io::stdout;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputEvent, NameInput, ResultView, RosterList};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub name_input: NameInput,
    pub roster_list: RosterList,
    // Results screen body; built lazily on the route's first frame
    pub result_view: Option<ResultView>,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            name_input: NameInput::new(),
            roster_list: RosterList::new(),
            result_view: None,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,   // Wheel scrolling of the roster list
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide // Hide cursor on exit
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    let mut needs_redraw = true; // Force first frame

    loop {
        // Mirror the core's pending entry into the input box. A successful
        // commit resets the pending name, which clears the field here; a
        // rejected blank commit leaves both untouched.
        if tui.name_input.text() != app.roster.pending_name() {
            let pending = app.roster.pending_name().to_string();
            tui.name_input.set_text(&pending);
        }

        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(500));

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // ForceQuit (Ctrl+C) always quits regardless of screen
            if matches!(event, TuiEvent::ForceQuit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // Per-screen event dispatch
            if app.nav.is_home() {
                match event {
                    TuiEvent::Escape => {
                        if update(&mut app, Action::Quit) == Effect::Quit {
                            should_quit = true;
                        }
                    }
                    TuiEvent::Finish => {
                        update(&mut app, Action::Finish);
                        tui.result_view = None;
                    }
                    ev @ (TuiEvent::ScrollUp | TuiEvent::ScrollDown) => {
                        tui.roster_list.handle_event(&ev);
                    }
                    // NameInput handles everything else
                    other => {
                        if let Some(input_event) = tui.name_input.handle_event(&other) {
                            match input_event {
                                InputEvent::Changed(text) => {
                                    update(&mut app, Action::UpdatePending(text));
                                }
                                InputEvent::Submit => {
                                    update(&mut app, Action::CommitPending);
                                }
                            }
                        }
                    }
                }
            } else {
                // Results screen: no transition back, only quitting
                match event {
                    TuiEvent::Escape | TuiEvent::InputChar('q') => {
                        if update(&mut app, Action::Quit) == Effect::Quit {
                            should_quit = true;
                        }
                    }
                    _ => {}
                }
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}
