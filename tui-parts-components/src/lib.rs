//! Presentational UI building blocks for ratatui
//!
//! This crate provides two independent, prop-driven components. Both
//! implement the `Component<A>` trait from `tui-parts-core`: data flows in
//! through props, actions flow out through callback functions carried in
//! props, and only view-local state lives inside the component.
//!
//! # Components
//!
//! - [`DataTable`] - Tabular display with single-column sort toggling and
//!   checkbox-style row selection tracked by identity key
//! - [`InputField`] - Single-line text or password entry with clear action,
//!   visibility toggle and host-driven validation display
//!
//! # Example
//!
//! ```ignore
//! use tui_parts_components::{Column, DataTable, DataTableProps};
//!
//! // In your render function:
//! let mut table = DataTable::default();
//! table.render(frame, area, DataTableProps {
//!     data: &state.users,
//!     columns: &columns,
//!     loading: state.loading,
//!     selectable: true,
//!     is_focused: state.focus == Focus::Table,
//!     on_row_select: Action::UsersSelect,
//! });
//! ```

mod cell;
mod column;
mod data_table;
mod input_field;

pub use cell::CellValue;
pub use column::Column;
pub use data_table::{DataTable, DataTableProps, Record, SortDirection};
pub use input_field::{FieldType, InputField, InputFieldProps, InputSize, InputVariant};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        CellValue, Column, DataTable, DataTableProps, FieldType, InputField, InputFieldProps,
        InputSize, InputVariant, Record, SortDirection,
    };
}
