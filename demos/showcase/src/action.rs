//! Actions - everything that can happen in the app

use crate::data::User;

#[derive(Clone, Debug)]
pub enum Action {
    /// Simulated data load finished
    DataDidLoad(Vec<User>),
    DataDidError(String),
    /// Table selection changed; carries the full current selection
    UsersSelect(Vec<User>),
    UsernameChange(String),
    UsernameBlur,
    PasswordChange(String),
    FocusNext,
    Quit,
}
