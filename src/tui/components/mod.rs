//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! Two patterns, mirroring how the rest of the adapter is built:
//!
//! - **Stateless (props-based)**: `TitleBar` and `ResultView` receive all
//!   their data up front and just render it.
//! - **Stateful (event-driven)**: `NameInput` (buffer + cursor) and
//!   `RosterList` (scroll offset) manage local presentation state and emit
//!   high-level events for the main loop to translate into actions.
//!
//! Props always arrive explicitly - as constructor arguments, struct
//! fields, or render parameters - never by reaching into global state.
//! Each component file co-locates its state, events, rendering, and tests.

pub mod name_input;
pub mod result_view;
pub mod roster_list;
pub mod title_bar;

pub use name_input::{InputEvent, NameInput};
pub use result_view::ResultView;
pub use roster_list::RosterList;
pub use title_bar::TitleBar;
