//! Headless editable-table model.
//!
//! The crate owns everything about an editable table that does not touch the DOM: the column
//! adapter that injects drag-handle and actions columns, cell payload construction, edit sessions
//! with the live-update / commit contract, numeric input formatting, sizing and alignment hints,
//! sorting, and the row lifecycle reducer. `system_ui` renders these payloads with Leptos.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod cell;
mod columns;
mod date;
mod edit;
mod model;
mod number_format;
mod reducer;
mod sizing;
mod sort;
mod store;

pub use cell::{
    editor_cell, render_cell, ActionCellData, CellContext, CellRender, ComponentCell,
    DragHandleData, EditableDatepickerData, EditableNumberData, EditableSelectData,
    EditableTextData,
};
pub use columns::{
    effective_columns, resolve_column_key, ColumnKind, EffectiveColumn, ACTIONS_COLUMN_ID,
    DRAG_HANDLE_COLUMN_ID,
};
pub use date::{date_to_value, parse_date_value, DateValueError, DATE_FORMAT};
pub use edit::{CellSignal, DiscreteCellSession, NumberCellSession, TextCellSession};
pub use model::{
    value_text, CellRenderer, ColumnDef, ColumnMeta, EditorKind, Record, RowAction,
    RowActionVariant, SelectOption, TableOptions, TableRow,
};
pub use number_format::{
    KeyModifiers, LiveFormat, NumberFormat, NumberFormatPreset, UnknownPresetError,
};
pub use reducer::{
    move_item, reduce_table, CellEdit, TableAction, TableError, TableEvent, TableState,
};
pub use sizing::{
    resolve_sizing, ColumnAlign, ColumnSizing, SizeToken, SizeValue, SizingHints,
};
pub use sort::{compare_values, display_order, ColumnSort, SortDirection, SortState};
pub use store::{SubscriptionId, TableStore};
