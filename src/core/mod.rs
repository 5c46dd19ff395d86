//! # Core Application Logic
//!
//! This module contains Roster's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Roster (list store)  │
//!                    │  • Codec (payload)      │
//!                    │  • Navigator (routes)   │
//!                    │  • State / Action /     │
//!                    │    update() reducer     │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`roster`]: `Entry` and `Roster` — the list store and pending entry
//! - [`codec`]: payload encode/decode for the navigation parameter
//! - [`nav`]: `Route` and `Navigator` — which screen is active
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum — everything that can happen in the app
//! - [`config`]: TOML config file, env vars, and CLI flag resolution

pub mod action;
pub mod codec;
pub mod config;
pub mod nav;
pub mod roster;
pub mod state;
