//! Reducer - pure state transitions

use crate::action::Action;
use crate::state::AppState;

pub const USERNAME_MIN_CHARS: usize = 3;

/// Apply an action to the state.
///
/// Returns `true` if the state changed and the UI should re-render.
pub fn update(state: &mut AppState, action: Action) -> bool {
    match action {
        Action::DataDidLoad(users) => {
            state.users = users;
            state.loading = false;
            state.error = None;
            true
        }

        Action::DataDidError(msg) => {
            state.loading = false;
            state.error = Some(msg);
            true
        }

        Action::UsersSelect(rows) => {
            state.selected = rows;
            true
        }

        Action::UsernameChange(value) => {
            state.username = value;
            // Typing past the minimum clears a stale validation error
            if state.username_error.is_some()
                && state.username.chars().count() >= USERNAME_MIN_CHARS
            {
                state.username_error = None;
            }
            true
        }

        Action::UsernameBlur => {
            let len = state.username.chars().count();
            state.username_error = if len > 0 && len < USERNAME_MIN_CHARS {
                Some(format!(
                    "Username must be at least {} characters",
                    USERNAME_MIN_CHARS
                ))
            } else {
                None
            };
            true
        }

        Action::PasswordChange(value) => {
            state.password = value;
            true
        }

        Action::FocusNext => {
            state.focus = state.focus.next();
            true
        }

        // Quit is handled in the main loop, not here
        Action::Quit => false,
    }
}
