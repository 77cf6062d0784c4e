//! Column descriptors for the data table

use crate::cell::CellValue;

/// Describes one displayed field of a record.
///
/// Columns are supplied to the table as an ordered slice; display order
/// follows slice order. The `key` identifies the field for sorting and must
/// be unique among the supplied columns (a duplicate key is a precondition
/// violation, not a defended error).
pub struct Column<T> {
    /// Field-accessor key, also the sort key for this column
    pub key: &'static str,
    /// Header title
    pub title: &'static str,
    /// Whether the column participates in sorting
    pub sortable: bool,
    /// Projects the sortable/displayable value out of a record.
    /// `None` marks an absent value, which sorts after all present values.
    pub value: fn(&T) -> Option<CellValue>,
    /// Optional custom formatter overriding the default value display.
    /// Must be a pure function of the record.
    pub render: Option<fn(&T) -> String>,
}

impl<T> Column<T> {
    /// Create a non-sortable column with the default value display.
    pub fn new(key: &'static str, title: &'static str, value: fn(&T) -> Option<CellValue>) -> Self {
        Self {
            key,
            title,
            sortable: false,
            value,
            render: None,
        }
    }

    /// Mark the column as sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Attach a custom render function.
    pub fn with_render(mut self, render: fn(&T) -> String) -> Self {
        self.render = Some(render);
        self
    }

    /// Displayable text for a record's cell in this column.
    ///
    /// Uses the custom render function when present, otherwise the default
    /// display of the projected value. Absent values display as empty text.
    pub fn display(&self, record: &T) -> String {
        match self.render {
            Some(render) => render(record),
            None => (self.value)(record)
                .map(|v| v.to_string())
                .unwrap_or_default(),
        }
    }
}
