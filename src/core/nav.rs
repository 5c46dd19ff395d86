//! # Navigator
//!
//! Typed route contract between the two screens. The payload travels as an
//! owned string on the `Result` route rather than as text spliced into a
//! route pattern, so there is no escaping scheme to get wrong.
//!
//! Exactly one transition is defined: `Home → Result`. There is no back
//! transition; from the results screen the only way out is quitting.

/// The active screen, with whatever data it owns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// Input screen: roster list plus the pending-name field.
    Home,
    /// Results screen. `list_data` is the encoded payload, immutable and
    /// untrusted from here on.
    Result { list_data: String },
}

/// Switches the active screen and carries the encoded payload.
#[derive(Debug)]
pub struct Navigator {
    current: Route,
}

impl Navigator {
    /// Starts on the home screen.
    pub fn new() -> Self {
        Self {
            current: Route::Home,
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn is_home(&self) -> bool {
        matches!(self.current, Route::Home)
    }

    /// The single defined transition. Hands ownership of the payload to the
    /// results route.
    pub fn to_result(&mut self, list_data: String) {
        self.current = Route::Result { list_data };
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
