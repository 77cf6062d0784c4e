//! Core contract for tui-parts components
//!
//! This crate defines the prop-driven component model that the tui-parts
//! widgets build on, plus the event plumbing a host application needs to
//! drive them.
//!
//! # Core Concepts
//!
//! - **Component**: a reusable UI element rendered purely from props,
//!   communicating outward only through caller-supplied action callbacks
//! - **EventKind**: terminal events (key, mouse, scroll, resize, tick)
//! - **Event poller**: a cancellable tokio task feeding crossterm events
//!   into a channel
//!
//! # Basic Example
//!
//! ```ignore
//! use tui_parts_core::{Component, EventKind};
//!
//! struct Toggle;
//!
//! struct ToggleProps<A> {
//!     on: bool,
//!     is_focused: bool,
//!     on_toggle: fn(bool) -> A,
//! }
//!
//! impl<A> Component<A> for Toggle {
//!     type Props<'a> = ToggleProps<A>;
//!
//!     fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> impl IntoIterator<Item = A> {
//!         if !props.is_focused {
//!             return None;
//!         }
//!         match event {
//!             EventKind::Key(k) if k.code == KeyCode::Char(' ') => {
//!                 Some((props.on_toggle)(!props.on))
//!             }
//!             _ => None,
//!         }
//!     }
//!
//!     fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
//!         let mark = if props.on { "[x]" } else { "[ ]" };
//!         frame.render_widget(Paragraph::new(mark), area);
//!     }
//! }
//! ```
//!
//! The host owns all data state: it passes current values in through props,
//! applies the actions a component emits, and re-renders. Components keep
//! only view-local state (cursor, scroll offset, visibility flags) in
//! `&mut self`.

pub mod component;
pub mod event;
pub mod keys;
pub mod testing;

pub use component::Component;
pub use event::{process_raw_event, spawn_event_poller, EventKind, EventType, RawEvent};
pub use keys::{format_key_for_display, parse_key_string};
pub use testing::{
    buffer_to_string_plain, char_key, ctrl_key, key, RenderHarness,
};

// Re-export ratatui types for convenience
pub use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    Frame,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::component::Component;
    pub use crate::event::{
        process_raw_event, spawn_event_poller, EventKind, EventType, RawEvent,
    };
    pub use crate::keys::{format_key_for_display, parse_key_string};

    // Re-export ratatui types
    pub use ratatui::{
        layout::Rect,
        style::{Color, Modifier, Style},
        text::{Line, Span, Text},
        Frame,
    };
}
