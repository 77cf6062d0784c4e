//! Test utilities for tui-parts components
//!
//! This module provides helpers for testing prop-driven components:
//!
//! - [`key`]: Create `KeyEvent` from string (e.g., `key("ctrl+u")`)
//! - [`RenderHarness`]: Render a component into an in-memory terminal and
//!   read the result back as plain text
//! - Assertion macros for verifying emitted actions
//!
//! # Example
//!
//! ```ignore
//! use tui_parts_core::testing::{key, RenderHarness};
//! use tui_parts_core::EventKind;
//!
//! let actions: Vec<_> = component
//!     .handle_event(&EventKind::Key(key("space")), props)
//!     .into_iter()
//!     .collect();
//! assert_emitted!(actions, Action::RowsSelected(_));
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, buffer::Buffer, Frame, Terminal};

use crate::keys::parse_key_string;

/// Create a `KeyEvent` from a key string.
///
/// This is a convenience wrapper around [`parse_key_string`] that panics
/// if the key string is invalid, making it suitable for use in tests.
///
/// # Examples
///
/// ```
/// use tui_parts_core::testing::key;
/// use crossterm::event::{KeyCode, KeyModifiers};
///
/// let k = key("q");
/// assert_eq!(k.code, KeyCode::Char('q'));
///
/// let k = key("ctrl+u");
/// assert_eq!(k.code, KeyCode::Char('u'));
/// assert!(k.modifiers.contains(KeyModifiers::CONTROL));
/// ```
///
/// # Panics
///
/// Panics if the key string cannot be parsed.
pub fn key(s: &str) -> KeyEvent {
    parse_key_string(s).unwrap_or_else(|| panic!("Invalid key string: {:?}", s))
}

/// Create a `KeyEvent` for a character with no modifiers.
pub fn char_key(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::empty(),
        kind: crossterm::event::KeyEventKind::Press,
        state: crossterm::event::KeyEventState::empty(),
    }
}

/// Create a `KeyEvent` for a character with Ctrl modifier.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::CONTROL,
        kind: crossterm::event::KeyEventKind::Press,
        state: crossterm::event::KeyEventState::empty(),
    }
}

/// Convert a buffer to a plain string, one line per buffer row, no styling.
pub fn buffer_to_string_plain(buffer: &Buffer) -> String {
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

/// In-memory render harness backed by ratatui's `TestBackend`.
///
/// Renders a closure into a fixed-size test terminal and returns the
/// resulting screen content as plain text for substring assertions.
///
/// # Example
///
/// ```ignore
/// let mut harness = RenderHarness::new(60, 12);
/// let output = harness.render_to_string_plain(|frame| {
///     component.render(frame, frame.area(), props);
/// });
/// assert!(output.contains("No data to display"));
/// ```
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    /// Create a harness with the given terminal dimensions.
    ///
    /// # Panics
    ///
    /// Panics if the test terminal cannot be created (test-only code).
    pub fn new(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("failed to create test terminal");
        Self { terminal }
    }

    /// Render a frame and return the buffer content without styling.
    pub fn render_to_string_plain<F>(&mut self, render_fn: F) -> String
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal
            .draw(|frame| render_fn(frame))
            .expect("failed to draw test frame");
        buffer_to_string_plain(self.terminal.backend().buffer())
    }
}

/// Assert that a specific action was emitted.
///
/// # Example
///
/// ```ignore
/// let actions: Vec<_> = component.handle_event(&event, props).into_iter().collect();
/// assert_emitted!(actions, Action::ValueChange(_));
/// ```
#[macro_export]
macro_rules! assert_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            $actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` to be emitted, but got: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Assert that a specific action was NOT emitted.
#[macro_export]
macro_rules! assert_not_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            !$actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` NOT to be emitted, but it was: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}
