//! Sortable, selectable data table component

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use tui_parts_core::{Component, EventKind};

use crate::column::Column;

/// A record displayed as one table row, identified by a stable key.
///
/// Selection is tracked by id equality, never by structural equality:
/// supplying a new record object with a previously selected id keeps that
/// row selected. Ids must be unique within the data slice and stable for
/// the record's lifetime (duplicates are a precondition violation).
pub trait Record {
    type Id: Clone + PartialEq;

    fn id(&self) -> Self::Id;
}

/// Sort direction for the active column
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn toggle(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Props for DataTable component
pub struct DataTableProps<'a, T, A> {
    /// Records to display, in host-supplied order
    pub data: &'a [T],
    /// Ordered column descriptors
    pub columns: &'a [Column<T>],
    /// Suppress data rendering and show a loading indicator
    pub loading: bool,
    /// Enable checkbox selection UI and toggling
    pub selectable: bool,
    /// Whether this component has focus
    pub is_focused: bool,
    /// Callback invoked with the full current selection after every
    /// selection change (never from a sort or a data update)
    pub on_row_select: fn(Vec<T>) -> A,
}

/// A data table with single-column sort toggling and row selection.
///
/// Sort and selection state are owned by the component instance and survive
/// prop updates; the sorted view is re-derived from the current props on
/// every render. The `data` slice is never mutated or reordered.
///
/// Keyboard surface (focused, not loading): j/k/arrows move the cursor,
/// g/G/Home/End jump, space toggles the cursor row, `a` toggles select-all,
/// digits 1-9 toggle sort on the Nth column when it is sortable.
pub struct DataTable<T: Record> {
    /// Active sort key and direction (None = input order)
    sort: Option<(&'static str, SortDirection)>,
    /// Selected identity keys in the order they were added
    selection: Vec<T::Id>,
    /// Cursor row within the sorted view
    cursor: usize,
    /// Scroll offset for viewport
    scroll_offset: usize,
}

impl<T: Record> Default for DataTable<T> {
    fn default() -> Self {
        Self {
            sort: None,
            selection: Vec::new(),
            cursor: 0,
            scroll_offset: 0,
        }
    }
}

impl<T: Record + Clone> DataTable<T> {
    /// Create a new DataTable with no active sort and an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// The active sort key and direction, if any
    pub fn sort(&self) -> Option<(&'static str, SortDirection)> {
        self.sort
    }

    /// Toggle sorting on a column key.
    ///
    /// A new key starts ascending; re-activating the current key flips the
    /// direction. The cycle never returns to unsorted: once a key has been
    /// activated the table stays sorted by some key.
    pub fn toggle_sort(&mut self, key: &'static str) {
        self.sort = match self.sort {
            Some((active, direction)) if active == key => Some((key, direction.toggle())),
            _ => Some((key, SortDirection::Ascending)),
        };
    }

    /// The sorted view of `data` under the current sort state.
    ///
    /// Stable-sorts a fresh list of references; ties and absent values keep
    /// their input order, and absent values order after present values in
    /// both directions. If the active key matches none of the supplied
    /// columns the view falls back to input order (the sort state is kept,
    /// so restoring the column restores the ordering).
    pub fn sorted_view<'d>(&self, data: &'d [T], columns: &[Column<T>]) -> Vec<&'d T> {
        let mut view: Vec<&T> = data.iter().collect();
        if let Some((key, direction)) = self.sort {
            if let Some(col) = columns.iter().find(|c| c.key == key) {
                view.sort_by(|a, b| {
                    use std::cmp::Ordering;
                    match ((col.value)(a), (col.value)(b)) {
                        (None, None) => Ordering::Equal,
                        // Absent values always sort last, even descending
                        (None, Some(_)) => Ordering::Greater,
                        (Some(_), None) => Ordering::Less,
                        (Some(x), Some(y)) => {
                            let ord = x.partial_cmp(&y).unwrap_or(Ordering::Equal);
                            match direction {
                                SortDirection::Ascending => ord,
                                SortDirection::Descending => ord.reverse(),
                            }
                        }
                    }
                });
            }
        }
        view
    }

    /// Whether the record with this id is currently selected
    pub fn is_selected(&self, id: &T::Id) -> bool {
        self.selection.iter().any(|s| s == id)
    }

    /// Number of currently selected rows
    pub fn selection_len(&self) -> usize {
        self.selection.len()
    }

    /// Toggle selection of a single record by id.
    ///
    /// Adds the id at the end of the selection order, or removes it without
    /// reordering the remaining entries.
    pub fn toggle_row(&mut self, id: T::Id) {
        if let Some(pos) = self.selection.iter().position(|s| *s == id) {
            self.selection.remove(pos);
        } else {
            self.selection.push(id);
        }
    }

    /// Toggle between full selection and no selection.
    ///
    /// Clears when the selection already covers every record, otherwise
    /// selects the complete data list in data order (independent of the
    /// current sort).
    pub fn toggle_select_all(&mut self, data: &[T]) {
        if self.selection.len() == data.len() {
            self.selection.clear();
        } else {
            self.selection = data.iter().map(|r| r.id()).collect();
        }
    }

    /// The current selection as record clones, in selection order.
    ///
    /// Ids without a matching record in `data` are skipped.
    pub fn selected_rows(&self, data: &[T]) -> Vec<T> {
        self.selection
            .iter()
            .filter_map(|id| data.iter().find(|r| r.id() == *id))
            .cloned()
            .collect()
    }

    /// Drop selected ids that no longer exist in `data`.
    ///
    /// Called before every selection-affecting operation so that stale ids
    /// from a data change cannot skew the select-all size comparison.
    /// Pruning itself never fires the selection callback.
    fn prune_stale(&mut self, data: &[T]) {
        self.selection
            .retain(|id| data.iter().any(|r| r.id() == *id));
    }

    /// Ensure the cursor row is visible within the viewport
    fn ensure_visible(&mut self, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }

        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + viewport_height {
            self.scroll_offset = self.cursor.saturating_sub(viewport_height - 1);
        }
    }
}

impl<T: Record + Clone, A> Component<A> for DataTable<T> {
    type Props<'a>
        = DataTableProps<'a, T, A>
    where
        Self: 'a;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        if !props.is_focused || props.loading {
            return None;
        }

        let len = props.data.len();
        self.cursor = self.cursor.min(len.saturating_sub(1));

        match event {
            EventKind::Key(key) => match key.code {
                // Navigate down
                KeyCode::Char('j') | KeyCode::Down => {
                    self.cursor = (self.cursor + 1).min(len.saturating_sub(1));
                    None
                }
                // Navigate up
                KeyCode::Char('k') | KeyCode::Up => {
                    self.cursor = self.cursor.saturating_sub(1);
                    None
                }
                // Jump to top
                KeyCode::Char('g') | KeyCode::Home => {
                    self.cursor = 0;
                    None
                }
                // Jump to bottom
                KeyCode::Char('G') | KeyCode::End => {
                    self.cursor = len.saturating_sub(1);
                    None
                }
                // Toggle selection of the cursor row (sorted-view order)
                KeyCode::Char(' ') => {
                    if !props.selectable {
                        return None;
                    }
                    let id = {
                        let view = self.sorted_view(props.data, props.columns);
                        view.get(self.cursor).map(|r| r.id())
                    };
                    match id {
                        Some(id) => {
                            self.prune_stale(props.data);
                            self.toggle_row(id);
                            Some((props.on_row_select)(self.selected_rows(props.data)))
                        }
                        None => None,
                    }
                }
                // Toggle select-all
                KeyCode::Char('a') => {
                    if !props.selectable {
                        return None;
                    }
                    self.prune_stale(props.data);
                    self.toggle_select_all(props.data);
                    Some((props.on_row_select)(self.selected_rows(props.data)))
                }
                // Toggle sort on the Nth column
                KeyCode::Char(c @ '1'..='9') => {
                    let idx = c as usize - '1' as usize;
                    if let Some(col) = props.columns.get(idx) {
                        if col.sortable {
                            self.toggle_sort(col.key);
                        }
                    }
                    None
                }
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let border_style = if props.is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        if props.loading {
            let block = Block::default().borders(Borders::ALL).border_style(border_style);
            let indicator = Paragraph::new("⣾ Loading data...")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(indicator, area);
            return;
        }

        if props.data.is_empty() {
            let block = Block::default().borders(Borders::ALL).border_style(border_style);
            let empty = Paragraph::new("No data to display")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let view = self.sorted_view(props.data, props.columns);
        self.cursor = self.cursor.min(view.len() - 1);

        // Viewport: area minus borders and header row
        let viewport_height = area.height.saturating_sub(3) as usize;
        self.ensure_visible(viewport_height);

        let all_selected = self.selection.len() == props.data.len();

        // Header cells: optional select-all mark, then column titles with
        // sort indicators
        let mut header_cells: Vec<Cell> = Vec::new();
        if props.selectable {
            header_cells.push(Cell::from(if all_selected { "[x]" } else { "[ ]" }));
        }
        for (i, col) in props.columns.iter().enumerate() {
            // Sortable headers carry their digit hotkey
            let text = match self.sort {
                Some((key, direction)) if key == col.key => {
                    format!("{} {} {}", i + 1, col.title, direction.indicator())
                }
                _ if col.sortable => format!("{} {} ↕", i + 1, col.title),
                _ => col.title.to_string(),
            };
            header_cells.push(Cell::from(text));
        }
        let header = Row::new(header_cells)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .bottom_margin(0);

        // Body rows from the sorted view
        let rows: Vec<Row> = view
            .iter()
            .map(|record| {
                let selected = self.is_selected(&record.id());
                let mut cells: Vec<Cell> = Vec::new();
                if props.selectable {
                    cells.push(Cell::from(if selected { "[x]" } else { "[ ]" }));
                }
                for col in props.columns {
                    cells.push(Cell::from(col.display(record)));
                }
                let style = if selected {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default()
                };
                Row::new(cells).style(style)
            })
            .collect();

        let mut widths: Vec<Constraint> = Vec::new();
        if props.selectable {
            widths.push(Constraint::Length(3));
        }
        widths.extend(std::iter::repeat(Constraint::Fill(1)).take(props.columns.len()));

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title_bottom(
                Line::from(format!(" Showing {} of {} entries ", view.len(), props.data.len()))
                    .left_aligned()
                    .style(Style::default().fg(Color::DarkGray)),
            );
        if props.selectable {
            block = block.title_bottom(
                Line::from(format!(
                    " {} of {} selected ",
                    self.selection.len(),
                    props.data.len()
                ))
                .right_aligned()
                .style(Style::default().fg(Color::DarkGray)),
            );
        }

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            );

        let mut state = TableState::default().with_selected(Some(self.cursor));
        *state.offset_mut() = self.scroll_offset;

        frame.render_stateful_widget(table, area, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_parts_core::testing::{key, RenderHarness};
    use tui_parts_core::{assert_emitted, assert_not_emitted};

    #[derive(Clone, Debug, PartialEq)]
    struct User {
        id: u32,
        name: &'static str,
        age: Option<u32>,
    }

    impl Record for User {
        type Id = u32;

        fn id(&self) -> u32 {
            self.id
        }
    }

    #[derive(Debug, PartialEq)]
    enum TestAction {
        Select(Vec<User>),
    }

    fn user(id: u32, name: &'static str) -> User {
        User {
            id,
            name,
            age: Some(20 + id),
        }
    }

    fn columns() -> Vec<Column<User>> {
        vec![
            Column::new("id", "ID", |u: &User| Some(u.id.into())).sortable(),
            Column::new("name", "Name", |u: &User| Some(u.name.into())).sortable(),
            Column::new("age", "Age", |u: &User| u.age.map(Into::into)).sortable(),
        ]
    }

    fn props<'a>(
        data: &'a [User],
        cols: &'a [Column<User>],
        selectable: bool,
    ) -> DataTableProps<'a, User, TestAction> {
        DataTableProps {
            data,
            columns: cols,
            loading: false,
            selectable,
            is_focused: true,
            on_row_select: TestAction::Select,
        }
    }

    fn ids(view: &[&User]) -> Vec<u32> {
        view.iter().map(|u| u.id).collect()
    }

    #[test]
    fn test_sort_first_activation_is_ascending() {
        let data = vec![user(1, "B"), user(2, "A"), user(3, "C")];
        let mut table = DataTable::new();

        table.toggle_sort("name");

        assert_eq!(table.sort(), Some(("name", SortDirection::Ascending)));
        assert_eq!(ids(&table.sorted_view(&data, &columns())), vec![2, 1, 3]);
    }

    #[test]
    fn test_sort_toggle_cycles_forever() {
        let data = vec![user(1, "B"), user(2, "A"), user(3, "C")];
        let cols = columns();
        let mut table = DataTable::new();

        table.toggle_sort("name");
        table.toggle_sort("name");
        assert_eq!(table.sort(), Some(("name", SortDirection::Descending)));
        assert_eq!(ids(&table.sorted_view(&data, &cols)), vec![3, 1, 2]);

        // Never returns to unsorted
        table.toggle_sort("name");
        assert_eq!(table.sort(), Some(("name", SortDirection::Ascending)));
        assert_eq!(ids(&table.sorted_view(&data, &cols)), vec![2, 1, 3]);
    }

    #[test]
    fn test_switching_key_resets_to_ascending() {
        let mut table: DataTable<User> = DataTable::new();

        table.toggle_sort("name");
        table.toggle_sort("name");
        assert_eq!(table.sort(), Some(("name", SortDirection::Descending)));

        table.toggle_sort("age");
        assert_eq!(table.sort(), Some(("age", SortDirection::Ascending)));
    }

    #[test]
    fn test_absent_values_sort_last_in_both_directions() {
        let data = vec![
            User { id: 1, name: "a", age: None },
            User { id: 2, name: "b", age: Some(40) },
            User { id: 3, name: "c", age: None },
            User { id: 4, name: "d", age: Some(25) },
        ];
        let cols = columns();
        let mut table = DataTable::new();

        table.toggle_sort("age");
        // Ascending: present values first, absent values keep input order
        assert_eq!(ids(&table.sorted_view(&data, &cols)), vec![4, 2, 1, 3]);

        table.toggle_sort("age");
        // Descending: absent values still last, still in input order
        assert_eq!(ids(&table.sorted_view(&data, &cols)), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let data = vec![
            User { id: 1, name: "x", age: Some(30) },
            User { id: 2, name: "x", age: Some(30) },
            User { id: 3, name: "x", age: Some(30) },
        ];
        let cols = columns();
        let mut table = DataTable::new();

        table.toggle_sort("name");
        assert_eq!(ids(&table.sorted_view(&data, &cols)), vec![1, 2, 3]);

        table.toggle_sort("name");
        assert_eq!(ids(&table.sorted_view(&data, &cols)), vec![1, 2, 3]);
    }

    #[test]
    fn test_sorted_view_does_not_mutate_data() {
        let data = vec![user(1, "B"), user(2, "A")];
        let cols = columns();
        let mut table = DataTable::new();

        table.toggle_sort("name");
        let _ = table.sorted_view(&data, &cols);

        assert_eq!(data[0].id, 1);
        assert_eq!(data[1].id, 2);
    }

    #[test]
    fn test_missing_sort_column_falls_back_to_input_order() {
        let data = vec![user(1, "B"), user(2, "A")];
        let mut table = DataTable::new();

        table.toggle_sort("name");
        let name_only: Vec<Column<User>> =
            vec![Column::new("id", "ID", |u: &User| Some(u.id.into())).sortable()];

        // Active key no longer among the columns: input order, state kept
        assert_eq!(ids(&table.sorted_view(&data, &name_only)), vec![1, 2]);
        assert_eq!(table.sort(), Some(("name", SortDirection::Ascending)));

        // Restoring the column restores the ordering
        assert_eq!(ids(&table.sorted_view(&data, &columns())), vec![2, 1]);
    }

    #[test]
    fn test_space_toggles_selection_and_emits() {
        let data = vec![user(1, "B"), user(2, "A"), user(3, "C")];
        let cols = columns();
        let mut table = DataTable::new();

        let actions: Vec<_> = table
            .handle_event(&EventKind::Key(key("space")), props(&data, &cols, true))
            .into_iter()
            .collect();

        assert_eq!(actions, vec![TestAction::Select(vec![user(1, "B")])]);
        assert!(table.is_selected(&1));
    }

    #[test]
    fn test_space_untoggles_selected_row() {
        let data = vec![user(1, "B"), user(2, "A")];
        let cols = columns();
        let mut table = DataTable::new();

        let _ = table
            .handle_event(&EventKind::Key(key("space")), props(&data, &cols, true))
            .into_iter()
            .count();
        let actions: Vec<_> = table
            .handle_event(&EventKind::Key(key("space")), props(&data, &cols, true))
            .into_iter()
            .collect();

        assert_eq!(actions, vec![TestAction::Select(vec![])]);
        assert!(!table.is_selected(&1));
    }

    #[test]
    fn test_selection_tracks_sorted_view_cursor() {
        let data = vec![user(1, "B"), user(2, "A"), user(3, "C")];
        let cols = columns();
        let mut table = DataTable::new();

        // Sort by name ascending: view order is A(2), B(1), C(3)
        table.toggle_sort("name");

        let actions: Vec<_> = table
            .handle_event(&EventKind::Key(key("space")), props(&data, &cols, true))
            .into_iter()
            .collect();

        // Cursor at row 0 of the sorted view selects id 2
        assert_eq!(actions, vec![TestAction::Select(vec![user(2, "A")])]);
    }

    #[test]
    fn test_selection_order_is_insertion_order() {
        let data = vec![user(1, "B"), user(2, "A"), user(3, "C")];
        let mut table: DataTable<User> = DataTable::new();

        table.toggle_row(3);
        table.toggle_row(1);
        table.toggle_row(2);
        assert_eq!(
            table.selected_rows(&data),
            vec![user(3, "C"), user(1, "B"), user(2, "A")]
        );

        // Removal keeps the remaining order
        table.toggle_row(1);
        assert_eq!(table.selected_rows(&data), vec![user(3, "C"), user(2, "A")]);
    }

    #[test]
    fn test_selection_survives_data_swap_by_id() {
        let mut table: DataTable<User> = DataTable::new();
        table.toggle_row(2);

        // New record objects, same id: still selected
        let new_data = vec![
            User { id: 2, name: "renamed", age: Some(99) },
            user(5, "E"),
        ];
        assert!(table.is_selected(&2));
        assert_eq!(
            table.selected_rows(&new_data),
            vec![User { id: 2, name: "renamed", age: Some(99) }]
        );
    }

    #[test]
    fn test_select_all_is_a_toggle() {
        let data = vec![user(1, "B"), user(2, "A"), user(3, "C")];
        let cols = columns();
        let mut table = DataTable::new();

        let actions: Vec<_> = table
            .handle_event(&EventKind::Key(key("a")), props(&data, &cols, true))
            .into_iter()
            .collect();
        assert_eq!(
            actions,
            vec![TestAction::Select(vec![user(1, "B"), user(2, "A"), user(3, "C")])]
        );

        // Full selection -> clears
        let actions: Vec<_> = table
            .handle_event(&EventKind::Key(key("a")), props(&data, &cols, true))
            .into_iter()
            .collect();
        assert_eq!(actions, vec![TestAction::Select(vec![])]);

        // And selects the full set again
        let actions: Vec<_> = table
            .handle_event(&EventKind::Key(key("a")), props(&data, &cols, true))
            .into_iter()
            .collect();
        assert_emitted!(actions, TestAction::Select(rows) if rows.len() == 3);
    }

    #[test]
    fn test_select_all_uses_data_order_not_sort_order() {
        let data = vec![user(1, "B"), user(2, "A"), user(3, "C")];
        let cols = columns();
        let mut table = DataTable::new();

        table.toggle_sort("name");
        let actions: Vec<_> = table
            .handle_event(&EventKind::Key(key("a")), props(&data, &cols, true))
            .into_iter()
            .collect();

        // Selection follows the unsorted data list
        assert_eq!(
            actions,
            vec![TestAction::Select(vec![user(1, "B"), user(2, "A"), user(3, "C")])]
        );
    }

    #[test]
    fn test_select_all_on_empty_data_emits_empty() {
        let data: Vec<User> = vec![];
        let cols = columns();
        let mut table = DataTable::new();

        let actions: Vec<_> = table
            .handle_event(&EventKind::Key(key("a")), props(&data, &cols, true))
            .into_iter()
            .collect();

        assert_eq!(actions, vec![TestAction::Select(vec![])]);
    }

    #[test]
    fn test_not_selectable_is_a_complete_noop() {
        let data = vec![user(1, "B"), user(2, "A")];
        let cols = columns();
        let mut table = DataTable::new();

        let actions: Vec<_> = table
            .handle_event(&EventKind::Key(key("space")), props(&data, &cols, false))
            .into_iter()
            .collect();
        assert_not_emitted!(actions, TestAction::Select(_));
        assert_eq!(table.selection_len(), 0);

        let actions: Vec<_> = table
            .handle_event(&EventKind::Key(key("a")), props(&data, &cols, false))
            .into_iter()
            .collect();
        assert!(actions.is_empty());
        assert_eq!(table.selection_len(), 0);
    }

    #[test]
    fn test_sort_key_emits_no_selection_action() {
        let data = vec![user(1, "B"), user(2, "A")];
        let cols = columns();
        let mut table = DataTable::new();

        // Column 2 is "name"
        let actions: Vec<_> = table
            .handle_event(&EventKind::Key(key("2")), props(&data, &cols, true))
            .into_iter()
            .collect();

        assert!(actions.is_empty());
        assert_eq!(table.sort(), Some(("name", SortDirection::Ascending)));
    }

    #[test]
    fn test_sort_key_ignored_for_unsortable_column() {
        let data = vec![user(1, "B")];
        let cols = vec![Column::new("name", "Name", |u: &User| Some(u.name.into()))];
        let mut table = DataTable::new();

        let actions: Vec<_> = table
            .handle_event(&EventKind::Key(key("1")), props(&data, &cols, true))
            .into_iter()
            .collect();

        assert!(actions.is_empty());
        assert_eq!(table.sort(), None);
    }

    #[test]
    fn test_stale_ids_pruned_before_select_all() {
        let old = vec![user(1, "B"), user(2, "A"), user(3, "C")];
        let cols = columns();
        let mut table = DataTable::new();

        let _ = table
            .handle_event(&EventKind::Key(key("a")), props(&old, &cols, true))
            .into_iter()
            .count();
        assert_eq!(table.selection_len(), 3);

        // Data shrinks to two rows; stale id 3 must not make the size
        // comparison think everything is selected
        let new = vec![user(1, "B"), user(2, "A")];
        let _ = table
            .handle_event(&EventKind::Key(key("space")), props(&new, &cols, true))
            .into_iter()
            .count();
        assert!(table.selection_len() <= new.len());
    }

    #[test]
    fn test_unfocused_ignores_events() {
        let data = vec![user(1, "B")];
        let cols = columns();
        let mut table = DataTable::new();

        let mut p = props(&data, &cols, true);
        p.is_focused = false;
        let actions: Vec<_> = table
            .handle_event(&EventKind::Key(key("space")), p)
            .into_iter()
            .collect();

        assert!(actions.is_empty());
        assert_eq!(table.selection_len(), 0);
    }

    #[test]
    fn test_loading_ignores_events() {
        let data = vec![user(1, "B")];
        let cols = columns();
        let mut table = DataTable::new();

        let mut p = props(&data, &cols, true);
        p.loading = true;
        let actions: Vec<_> = table
            .handle_event(&EventKind::Key(key("space")), p)
            .into_iter()
            .collect();

        assert!(actions.is_empty());
    }

    #[test]
    fn test_render_loading_state() {
        let mut render = RenderHarness::new(60, 10);
        let data = vec![user(1, "B")];
        let cols = columns();
        let mut table = DataTable::new();

        let output = render.render_to_string_plain(|frame| {
            let mut p = props(&data, &cols, true);
            p.loading = true;
            table.render(frame, frame.area(), p);
        });

        assert!(output.contains("Loading data..."));
        assert!(!output.contains("Name"), "loading must suppress the table");
    }

    #[test]
    fn test_render_empty_state() {
        let mut render = RenderHarness::new(60, 10);
        let data: Vec<User> = vec![];
        let cols = columns();
        let mut table = DataTable::new();

        let output = render.render_to_string_plain(|frame| {
            table.render(frame, frame.area(), props(&data, &cols, true));
        });

        assert!(output.contains("No data to display"));
    }

    #[test]
    fn test_render_sorted_rows_and_indicator() {
        let mut render = RenderHarness::new(70, 12);
        let data = vec![user(1, "B"), user(2, "A"), user(3, "C")];
        let cols = columns();
        let mut table = DataTable::new();

        table.toggle_sort("name");

        let output = render.render_to_string_plain(|frame| {
            table.render(frame, frame.area(), props(&data, &cols, true));
        });

        assert!(output.contains("Name ▲"));
        let a_pos = output.find(" A ").expect("row A rendered");
        let b_pos = output.find(" B ").expect("row B rendered");
        let c_pos = output.find(" C ").expect("row C rendered");
        assert!(a_pos < b_pos && b_pos < c_pos, "rows in ascending order");
        assert!(output.contains("Showing 3 of 3 entries"));
    }

    #[test]
    fn test_render_descending_indicator() {
        let mut render = RenderHarness::new(70, 12);
        let data = vec![user(1, "B"), user(2, "A"), user(3, "C")];
        let cols = columns();
        let mut table = DataTable::new();

        table.toggle_sort("name");
        table.toggle_sort("name");

        let output = render.render_to_string_plain(|frame| {
            table.render(frame, frame.area(), props(&data, &cols, true));
        });

        assert!(output.contains("Name ▼"));
        let a_pos = output.find(" A ").expect("row A rendered");
        let c_pos = output.find(" C ").expect("row C rendered");
        assert!(c_pos < a_pos, "rows in descending order");
    }

    #[test]
    fn test_render_selection_marks_and_summary() {
        let mut render = RenderHarness::new(70, 12);
        let data = vec![user(1, "B"), user(2, "A")];
        let cols = columns();
        let mut table = DataTable::new();

        table.toggle_row(1);

        let output = render.render_to_string_plain(|frame| {
            table.render(frame, frame.area(), props(&data, &cols, true));
        });

        assert!(output.contains("[x]"));
        assert!(output.contains("1 of 2 selected"));
    }

    #[test]
    fn test_render_without_selection_column() {
        let mut render = RenderHarness::new(70, 12);
        let data = vec![user(1, "B")];
        let cols = columns();
        let mut table = DataTable::new();

        let output = render.render_to_string_plain(|frame| {
            table.render(frame, frame.area(), props(&data, &cols, false));
        });

        assert!(!output.contains("[ ]"));
        assert!(!output.contains("selected"));
    }
}
