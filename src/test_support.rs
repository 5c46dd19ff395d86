//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::codec::Encoding;
use crate::core::state::App;

/// Creates a test App with the default (json) encoding.
pub fn test_app() -> App {
    App::new(Encoding::default())
}

/// Creates a test App with an explicit encoding variant.
pub fn test_app_with(encoding: Encoding) -> App {
    App::new(encoding)
}
