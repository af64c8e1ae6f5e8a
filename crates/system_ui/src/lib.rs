//! Shared UI primitive library and the editable table built on it.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, and the stable `data-ui-*`
//! DOM contract consumed by the stylesheet layer. [`EditableTable`] renders the headless
//! `table_core` model through these primitives; callers compose it instead of emitting ad hoc
//! table markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod editable_table;
mod icon;
mod primitives;

pub use editable_table::{
    ActionCell, DragHandleCell, EditableDatepickerCell, EditableNumberCell, EditableSelectCell,
    EditableTable, EditableTextCell,
};
pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Avatar, Button, ButtonSize, ButtonVariant, Cluster, DataTable, EmptyState, FieldVariant,
    IconButton, LayoutAlign, LayoutGap, LayoutJustify, SelectField, Stack, Text, TextField,
    TextTone,
};

/// Convenience imports for application crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Avatar, Button, ButtonSize, ButtonVariant, Cluster, DataTable, EditableTable, EmptyState,
        FieldVariant, Icon, IconButton, IconName, IconSize, LayoutAlign, LayoutGap,
        LayoutJustify, SelectField, Stack, Text, TextField, TextTone,
    };
    pub use table_core::{
        CellEdit, ColumnAlign, ColumnDef, ColumnSizing, EditorKind, NumberFormat,
        NumberFormatPreset, Record, RowAction, SelectOption, SortState,
    };
}
