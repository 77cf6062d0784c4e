//! Component trait for prop-driven UI elements

use ratatui::{layout::Rect, Frame};

use crate::event::EventKind;

/// A presentational component that renders from props and emits actions
///
/// Components follow these rules:
/// 1. Props carry ALL data needed for rendering; the component never owns a
///    copy of host data
/// 2. `handle_event` returns actions for the host to apply, it never mutates
///    host state directly
/// 3. View-local state (cursor, scroll offset, visibility toggles, the
///    table's sort and selection) lives in `&mut self` and survives prop
///    updates until the instance is dropped
///
/// Focus is passed through props rather than tracked globally: a component
/// that is not focused should ignore input events.
///
/// # Example
///
/// ```ignore
/// use tui_parts_core::{Component, EventKind, Frame, Rect};
///
/// struct Counter;
///
/// struct CounterProps<A> {
///     count: i32,
///     is_focused: bool,
///     on_change: fn(i32) -> A,
/// }
///
/// impl<A> Component<A> for Counter {
///     type Props<'a> = CounterProps<A>;
///
///     fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> impl IntoIterator<Item = A> {
///         if !props.is_focused {
///             return None;
///         }
///         if let EventKind::Key(key) = event {
///             match key.code {
///                 KeyCode::Up => return Some((props.on_change)(props.count + 1)),
///                 KeyCode::Down => return Some((props.on_change)(props.count - 1)),
///                 _ => {}
///             }
///         }
///         None
///     }
///
///     fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
///         let text = format!("Count: {}", props.count);
///         frame.render_widget(Paragraph::new(text), area);
///     }
/// }
/// ```
pub trait Component<A> {
    /// Data required to render the component (read-only)
    type Props<'a>
    where
        Self: 'a;

    /// Handle an event and return actions for the host to dispatch
    ///
    /// Returns any type implementing `IntoIterator<Item = A>`:
    /// - `None` - no actions (most common)
    /// - `Some(action)` - single action
    /// - `[a, b]` or `vec![...]` - multiple actions
    ///
    /// Default implementation returns no actions (render-only components).
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        None::<A>
    }

    /// Render the component to the frame
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
