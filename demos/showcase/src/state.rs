//! App state - what the app knows

use crate::data::User;

/// Which widget receives keyboard input
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Table,
    Username,
    Password,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Table => Focus::Username,
            Focus::Username => Focus::Password,
            Focus::Password => Focus::Table,
        }
    }
}

#[derive(Default)]
pub struct AppState {
    pub users: Vec<User>,
    pub loading: bool,
    pub error: Option<String>,
    pub focus: Focus,
    pub username: String,
    pub username_error: Option<String>,
    pub password: String,
    /// Current table selection, mirrored out of the component
    pub selected: Vec<User>,
}

impl AppState {
    /// Initial state: loading until the data task delivers
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }
}
