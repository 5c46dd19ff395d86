//! # Actions
//!
//! Everything that can happen in Roster becomes an `Action`.
//! User edits the name field? That's `Action::UpdatePending`.
//! User presses Enter? That's `Action::CommitPending`.
//!
//! The `update()` function takes the current state and an action,
//! then mutates the state. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State
//! ```
//!
//! This makes everything testable: run actions, assert on the state.

use log::{debug, info};

use crate::core::state::App;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Replace the pending entry's name with the input field's text.
    UpdatePending(String),
    /// Try to append the pending entry to the roster.
    CommitPending,
    /// Encode the full roster and navigate to the results screen.
    Finish,
    Quit,
}

/// What the caller should do after an update. The reducer itself never
/// performs I/O.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::UpdatePending(text) => {
            app.roster.update_pending(text);
            Effect::None
        }
        Action::CommitPending => {
            // A blank name is rejected silently: no status change, no error.
            if app.roster.commit() {
                app.status_message = format!("{} names on the list", app.roster.len());
            }
            Effect::None
        }
        Action::Finish => {
            let payload = app.encoding.encode(app.roster.entries());
            info!(
                "Navigating to results with {} entries ({} bytes, {} encoding)",
                app.roster.len(),
                payload.len(),
                app.encoding.label()
            );
            app.nav.to_result(payload);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::codec::{self, Encoding};
    use crate::core::nav::Route;
    use crate::test_support::{test_app, test_app_with};

    #[test]
    fn test_update_pending_then_commit_appends() {
        let mut app = test_app();

        update(&mut app, Action::UpdatePending("Budi".to_string()));
        assert_eq!(app.roster.pending_name(), "Budi");

        let effect = update(&mut app, Action::CommitPending);
        assert_eq!(effect, Effect::None);

        let names: Vec<&str> = app.roster.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Tanu", "Tina", "Tono", "Budi"]);
        assert_eq!(app.roster.pending_name(), "");
        assert_eq!(app.status_message, "4 names on the list");
    }

    #[test]
    fn test_blank_commit_changes_nothing() {
        let mut app = test_app();
        let welcome = app.status_message.clone();

        update(&mut app, Action::UpdatePending("   ".to_string()));
        update(&mut app, Action::CommitPending);

        assert_eq!(app.roster.len(), 3);
        assert_eq!(app.roster.pending_name(), "   ");
        // Silent rejection: even the status line stays put.
        assert_eq!(app.status_message, welcome);
    }

    #[test]
    fn test_finish_encodes_full_roster_and_navigates() {
        let mut app = test_app_with(Encoding::Json);
        // An uncommitted pending name must not leak into the payload.
        update(&mut app, Action::UpdatePending("Budi".to_string()));
        update(&mut app, Action::Finish);

        match app.nav.current() {
            Route::Result { list_data } => {
                let names: Vec<String> =
                    codec::decode(list_data).into_iter().map(|e| e.name).collect();
                assert_eq!(names, ["Tanu", "Tina", "Tono"]);
            }
            Route::Home => panic!("expected Result route"),
        }
    }

    #[test]
    fn test_finish_plain_variant_joins_names() {
        let mut app = test_app_with(Encoding::Plain);
        update(&mut app, Action::Finish);

        assert_eq!(
            *app.nav.current(),
            Route::Result {
                list_data: "Tanu, Tina, Tono".to_string()
            }
        );
    }

    #[test]
    fn test_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
