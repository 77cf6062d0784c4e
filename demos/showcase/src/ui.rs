//! UI composition: table plus login form, with focus-aware event routing

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_parts_core::{Component, EventKind};
use tui_parts_components::{
    Column, DataTable, DataTableProps, FieldType, InputField, InputFieldProps, InputSize,
    InputVariant,
};

use crate::action::Action;
use crate::data::{user_columns, User};
use crate::state::{AppState, Focus};

pub struct ShowcaseUi {
    table: DataTable<User>,
    username: InputField,
    password: InputField,
    columns: Vec<Column<User>>,
}

impl Default for ShowcaseUi {
    fn default() -> Self {
        Self::new()
    }
}

impl ShowcaseUi {
    pub fn new() -> Self {
        Self {
            table: DataTable::new(),
            username: InputField::new(),
            password: InputField::new(),
            columns: user_columns(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let [table_area, form_area, help_area] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(10),
            Constraint::Length(1),
        ])
        .areas(area);

        if let Some(error) = &state.error {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red));
            let paragraph = Paragraph::new(format!("Could not load users: {}", error))
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(paragraph, table_area);
        } else {
            self.table.render(
                frame,
                table_area,
                DataTableProps {
                    data: &state.users,
                    columns: &self.columns,
                    loading: state.loading,
                    selectable: true,
                    is_focused: state.focus == Focus::Table,
                    on_row_select: Action::UsersSelect,
                },
            );
        }

        let [username_area, password_area] =
            Layout::vertical([Constraint::Length(5), Constraint::Length(5)]).areas(form_area);

        self.username.render(
            frame,
            username_area,
            InputFieldProps {
                value: &state.username,
                label: "Username",
                placeholder: "Enter username",
                helper_text: Some("At least 3 characters"),
                error_message: state.username_error.as_deref(),
                disabled: false,
                invalid: state.username_error.is_some(),
                variant: InputVariant::Outlined,
                size: InputSize::Medium,
                field_type: FieldType::Text,
                is_focused: state.focus == Focus::Username,
                on_change: Action::UsernameChange,
                on_blur: Some(|| Action::UsernameBlur),
            },
        );

        self.password.render(
            frame,
            password_area,
            InputFieldProps {
                value: &state.password,
                label: "Password",
                placeholder: "Enter password",
                helper_text: None,
                error_message: None,
                disabled: false,
                invalid: false,
                variant: InputVariant::Outlined,
                size: InputSize::Medium,
                field_type: FieldType::Password,
                is_focused: state.focus == Focus::Password,
                on_change: Action::PasswordChange,
                on_blur: None,
            },
        );

        let help = Paragraph::new(
            "tab: next field  space: select row  a: select all  1-4: sort  q/esc: quit",
        )
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, help_area);
    }

    /// Map a terminal event to actions.
    ///
    /// Global keys are claimed first; everything else is offered to each
    /// component. Unfocused components stay quiet apart from the input
    /// fields' blur edge, which is why they all get to see the event.
    pub fn map_event(&mut self, event: &EventKind, state: &AppState) -> Vec<Action> {
        if let EventKind::Key(key) = event {
            match key.code {
                KeyCode::Tab => return vec![Action::FocusNext],
                KeyCode::Esc => return vec![Action::Quit],
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return vec![Action::Quit];
                }
                // q quits only while the table is focused, so the inputs
                // can still receive the letter
                KeyCode::Char('q') if state.focus == Focus::Table => {
                    return vec![Action::Quit];
                }
                _ => {}
            }
        }

        let mut actions = Vec::new();

        actions.extend(self.table.handle_event(
            event,
            DataTableProps {
                data: &state.users,
                columns: &self.columns,
                loading: state.loading,
                selectable: true,
                is_focused: state.focus == Focus::Table,
                on_row_select: Action::UsersSelect,
            },
        ));

        actions.extend(self.username.handle_event(
            event,
            InputFieldProps {
                value: &state.username,
                label: "Username",
                placeholder: "Enter username",
                helper_text: Some("At least 3 characters"),
                error_message: state.username_error.as_deref(),
                disabled: false,
                invalid: state.username_error.is_some(),
                variant: InputVariant::Outlined,
                size: InputSize::Medium,
                field_type: FieldType::Text,
                is_focused: state.focus == Focus::Username,
                on_change: Action::UsernameChange,
                on_blur: Some(|| Action::UsernameBlur),
            },
        ));

        actions.extend(self.password.handle_event(
            event,
            InputFieldProps {
                value: &state.password,
                label: "Password",
                placeholder: "Enter password",
                helper_text: None,
                error_message: None,
                disabled: false,
                invalid: false,
                variant: InputVariant::Outlined,
                size: InputSize::Medium,
                field_type: FieldType::Password,
                is_focused: state.focus == Focus::Password,
                on_change: Action::PasswordChange,
                on_blur: None,
            },
        ));

        actions
    }
}
