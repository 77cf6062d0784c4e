//! Demo dataset and column definitions

use serde::Deserialize;
use tui_parts_components::{Column, Record};

/// Account state of a demo user
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    Inactive,
    Pending,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::Inactive => "Inactive",
            Status::Pending => "Pending",
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            Status::Active => "●",
            Status::Inactive => "○",
            Status::Pending => "◌",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    /// Missing in the source data for some users
    pub age: Option<u32>,
    pub status: Status,
}

impl Record for User {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

// One user deliberately carries no age, to exercise absent-value sorting.
const USERS_JSON: &str = r#"[
    { "id": 1, "name": "Alice Johnson", "email": "alice@example.com", "age": 28, "status": "active" },
    { "id": 2, "name": "Bob Smith", "email": "bob@example.com", "age": 34, "status": "inactive" },
    { "id": 3, "name": "Carol Davis", "email": "carol@example.com", "age": 45, "status": "active" },
    { "id": 4, "name": "Dan Wright", "email": "dan@example.com", "age": null, "status": "pending" },
    { "id": 5, "name": "Eve Martinez", "email": "eve@example.com", "age": 31, "status": "active" },
    { "id": 6, "name": "Frank Miller", "email": "frank@example.com", "age": 52, "status": "inactive" },
    { "id": 7, "name": "Grace Lee", "email": "grace@example.com", "age": 24, "status": "pending" },
    { "id": 8, "name": "Henry Ford", "email": "henry@example.com", "age": 39, "status": "active" }
]"#;

/// Parse the embedded demo dataset
pub fn load_users() -> serde_json::Result<Vec<User>> {
    serde_json::from_str(USERS_JSON)
}

/// Column layout for the user table
pub fn user_columns() -> Vec<Column<User>> {
    vec![
        Column::new("name", "Name", |u: &User| Some(u.name.as_str().into())).sortable(),
        Column::new("email", "Email", |u: &User| Some(u.email.as_str().into())).sortable(),
        Column::new("age", "Age", |u: &User| u.age.map(Into::into)).sortable(),
        Column::new("status", "Status", |u: &User| Some(u.status.label().into()))
            .sortable()
            .with_render(|u| format!("{} {}", u.status.glyph(), u.status.label())),
    ]
}
