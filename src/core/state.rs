//! # Application State
//!
//! Core business state for Roster. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── roster: Roster          // committed entries + pending name
//! ├── nav: Navigator          // active screen + carried payload
//! ├── encoding: Encoding      // payload variant for this deployment
//! └── status_message: String  // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::codec::Encoding;
use crate::core::config::ResolvedConfig;
use crate::core::nav::Navigator;
use crate::core::roster::Roster;

pub struct App {
    pub roster: Roster,
    pub nav: Navigator,
    pub encoding: Encoding,
    pub status_message: String,
}

impl App {
    pub fn new(encoding: Encoding) -> Self {
        Self {
            roster: Roster::seeded(),
            nav: Navigator::new(),
            encoding,
            status_message: String::from("Welcome to Roster!"),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.encoding)
    }
}
