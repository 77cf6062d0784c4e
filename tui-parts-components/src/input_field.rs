//! Single-line text and password input component

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_parts_core::{format_key_for_display, Component, EventKind};

/// Content kind of the field
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldType {
    #[default]
    Text,
    /// Masked entry with a visibility toggle (ctrl+t)
    Password,
}

/// Visual treatment of the input line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputVariant {
    /// Bordered box around the input line
    #[default]
    Outlined,
    /// Filled background, no border
    Filled,
    /// Plain text on the default background
    Ghost,
}

/// Horizontal padding preset for the input line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl InputSize {
    fn padding_x(self) -> u16 {
        match self {
            InputSize::Small => 0,
            InputSize::Medium => 1,
            InputSize::Large => 2,
        }
    }
}

/// Props for InputField component
pub struct InputFieldProps<'a, A> {
    /// Current input value (host-owned)
    pub value: &'a str,
    /// Label rendered above the input line ("" = no label row)
    pub label: &'a str,
    /// Placeholder text when empty
    pub placeholder: &'a str,
    /// Guidance text below the input; suppressed while an error shows
    pub helper_text: Option<&'a str>,
    /// Validation error below the input, wins over helper_text
    pub error_message: Option<&'a str>,
    /// Reject edits and render dimmed
    pub disabled: bool,
    /// Error styling without an error message
    pub invalid: bool,
    pub variant: InputVariant,
    pub size: InputSize,
    pub field_type: FieldType,
    /// Whether this component has focus
    pub is_focused: bool,
    /// Callback for every value edit
    pub on_change: fn(String) -> A,
    /// Callback fired once when focus is lost
    pub on_blur: Option<fn() -> A>,
}

/// A single-line input with label, validation display and password masking.
///
/// The value is controlled: every edit goes out through `on_change` and the
/// host passes the new value back in. Cursor position, password visibility
/// and the focus edge used for `on_blur` are the only component-owned state.
///
/// Editing keys: typing, backspace/delete, arrows, home/end, ctrl+a/ctrl+e
/// for line start/end, ctrl+u clears a non-empty text field. Password
/// fields swap the clear action for ctrl+t, which toggles masking and keeps
/// working while the field is disabled so an operator can always inspect
/// what is about to be submitted.
#[derive(Default)]
pub struct InputField {
    /// Cursor position (byte index)
    cursor: usize,
    /// Password fields only: plain-text display toggled by ctrl+t
    reveal: bool,
    /// Focus observed on the previous event, for blur edge detection
    focused: bool,
}

impl InputField {
    /// Create a new InputField
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a password field is currently showing plain text
    pub fn revealed(&self) -> bool {
        self.reveal
    }

    /// Clamp cursor to valid range for the given value
    fn clamp_cursor(&mut self, value: &str) {
        self.cursor = self.cursor.min(value.len());
    }

    /// Move cursor left by one character
    fn move_cursor_left(&mut self, value: &str) {
        if self.cursor > 0 {
            let mut new_pos = self.cursor - 1;
            while new_pos > 0 && !value.is_char_boundary(new_pos) {
                new_pos -= 1;
            }
            self.cursor = new_pos;
        }
    }

    /// Move cursor right by one character
    fn move_cursor_right(&mut self, value: &str) {
        if self.cursor < value.len() {
            let mut new_pos = self.cursor + 1;
            while new_pos < value.len() && !value.is_char_boundary(new_pos) {
                new_pos += 1;
            }
            self.cursor = new_pos;
        }
    }

    /// Insert character at cursor position
    fn insert_char(&mut self, value: &str, c: char) -> String {
        let mut new_value = String::with_capacity(value.len() + c.len_utf8());
        new_value.push_str(&value[..self.cursor]);
        new_value.push(c);
        new_value.push_str(&value[self.cursor..]);
        self.cursor += c.len_utf8();
        new_value
    }

    /// Delete character before cursor (backspace)
    fn delete_char_before(&mut self, value: &str) -> Option<String> {
        if self.cursor == 0 {
            return None;
        }

        let mut new_value = String::with_capacity(value.len());
        let before_cursor = &value[..self.cursor];

        let char_start = before_cursor
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);

        new_value.push_str(&value[..char_start]);
        new_value.push_str(&value[self.cursor..]);
        self.cursor = char_start;
        Some(new_value)
    }

    /// Delete character at cursor (delete key)
    fn delete_char_at(&self, value: &str) -> Option<String> {
        if self.cursor >= value.len() {
            return None;
        }

        let mut new_value = String::with_capacity(value.len());
        new_value.push_str(&value[..self.cursor]);

        let after_cursor = &value[self.cursor..];
        if let Some((_, c)) = after_cursor.char_indices().next() {
            new_value.push_str(&value[self.cursor + c.len_utf8()..]);
        }

        Some(new_value)
    }

    /// Whether ctrl+u may clear the field right now
    fn can_clear<A>(&self, props: &InputFieldProps<'_, A>) -> bool {
        !props.value.is_empty() && !props.disabled && props.field_type != FieldType::Password
    }

    /// Text shown on the input line, masking password values
    fn display_value<'v, A>(&self, props: &InputFieldProps<'v, A>) -> std::borrow::Cow<'v, str> {
        if props.field_type == FieldType::Password && !self.reveal {
            std::borrow::Cow::Owned("•".repeat(props.value.chars().count()))
        } else {
            std::borrow::Cow::Borrowed(props.value)
        }
    }
}

impl<A> Component<A> for InputField {
    type Props<'a> = InputFieldProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        // Blur is edge-triggered: emitted once on the first event observed
        // after the host dropped focus, then the field goes quiet.
        if !props.is_focused {
            if self.focused {
                self.focused = false;
                return props.on_blur.map(|blur| blur());
            }
            return None;
        }
        self.focused = true;

        self.clamp_cursor(props.value);

        match event {
            EventKind::Key(key) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return match key.code {
                        // Ctrl+T: toggle password visibility. Stays active
                        // while disabled; it reveals, it never edits.
                        KeyCode::Char('t') => {
                            if props.field_type == FieldType::Password {
                                self.reveal = !self.reveal;
                                self.cursor = props.value.len();
                            }
                            None
                        }
                        _ if props.disabled => None,
                        // Ctrl+A: move to start
                        KeyCode::Char('a') => {
                            self.cursor = 0;
                            None
                        }
                        // Ctrl+E: move to end
                        KeyCode::Char('e') => {
                            self.cursor = props.value.len();
                            None
                        }
                        // Ctrl+U: clear, text fields only
                        KeyCode::Char('u') => {
                            if self.can_clear(&props) {
                                self.cursor = 0;
                                Some((props.on_change)(String::new()))
                            } else {
                                None
                            }
                        }
                        _ => None,
                    };
                }

                if props.disabled {
                    return None;
                }

                match key.code {
                    // Character input
                    KeyCode::Char(c) => {
                        let new_value = self.insert_char(props.value, c);
                        Some((props.on_change)(new_value))
                    }
                    // Backspace
                    KeyCode::Backspace => self
                        .delete_char_before(props.value)
                        .map(|v| (props.on_change)(v)),
                    // Delete
                    KeyCode::Delete => self
                        .delete_char_at(props.value)
                        .map(|v| (props.on_change)(v)),
                    // Cursor movement
                    KeyCode::Left => {
                        self.move_cursor_left(props.value);
                        None
                    }
                    KeyCode::Right => {
                        self.move_cursor_right(props.value);
                        None
                    }
                    KeyCode::Home => {
                        self.cursor = 0;
                        None
                    }
                    KeyCode::End => {
                        self.cursor = props.value.len();
                        None
                    }
                    _ => None,
                }
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.clamp_cursor(props.value);

        let erroring = props.invalid || props.error_message.is_some();

        let accent = if props.disabled {
            Style::default().fg(Color::DarkGray)
        } else if erroring {
            Style::default().fg(Color::Red)
        } else if props.is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut y = area.y;

        // Label row
        if !props.label.is_empty() && y < area.y + area.height {
            let label_area = Rect {
                x: area.x,
                y,
                width: area.width,
                height: 1,
            };
            frame.render_widget(
                Paragraph::new(props.label).style(accent.add_modifier(Modifier::BOLD)),
                label_area,
            );
            y += 1;
        }

        // Input line: 3 rows when bordered, 1 otherwise
        let bordered = props.variant == InputVariant::Outlined;
        let input_height = if bordered { 3 } else { 1 };
        let input_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height: input_height.min((area.y + area.height).saturating_sub(y)),
        };
        y += input_height;

        let display = self.display_value(&props);
        let text: &str = if display.is_empty() {
            props.placeholder
        } else {
            &display
        };

        let mut text_style = if display.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else if props.disabled {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        if props.variant == InputVariant::Filled {
            text_style = text_style.bg(Color::Rgb(40, 40, 48));
        }

        let padding_x = props.size.padding_x();
        let mut paragraph =
            Paragraph::new(format!("{}{}", " ".repeat(padding_x as usize), text)).style(text_style);

        if bordered {
            let mut block = Block::default().borders(Borders::ALL).border_style(accent);
            // Surface the keyboard affordances on the border itself
            if props.field_type == FieldType::Password {
                let hint = if self.reveal { "hide" } else { "show" };
                block = block.title_bottom(
                    Line::from(format!(" {} {} ", format_key_for_display("ctrl+t"), hint))
                        .right_aligned()
                        .style(Style::default().fg(Color::DarkGray)),
                );
            } else if self.can_clear(&props) {
                block = block.title_bottom(
                    Line::from(format!(" {} clear ", format_key_for_display("ctrl+u")))
                        .right_aligned()
                        .style(Style::default().fg(Color::DarkGray)),
                );
            }
            paragraph = paragraph.block(block);
        }

        frame.render_widget(paragraph, input_area);

        // Supplementary row: error wins over helper
        let supplementary = props.error_message.or(props.helper_text);
        if let Some(text) = supplementary {
            if y < area.y + area.height {
                let supp_area = Rect {
                    x: area.x,
                    y,
                    width: area.width,
                    height: 1,
                };
                let style = if props.error_message.is_some() {
                    Style::default().fg(Color::Red)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                frame.render_widget(Paragraph::new(text).style(style), supp_area);
            }
        }

        // Terminal cursor on the input line when editable
        if props.is_focused && !props.disabled {
            let border_offset = if bordered { 1 } else { 0 };
            // One cell per character, which also holds for masked glyphs
            let cursor_col = props.value[..self.cursor].chars().count() as u16;
            let cursor_x = input_area.x + border_offset + padding_x + cursor_col;
            let cursor_y = input_area.y + border_offset;

            let max_x = input_area.x + input_area.width.saturating_sub(border_offset);
            if cursor_x < max_x {
                frame.set_cursor_position((cursor_x, cursor_y));
            }
        }
    }
}
