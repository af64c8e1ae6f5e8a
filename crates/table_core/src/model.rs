//! Row, column, and option types shared by every editable-table layer.
//!
//! Rows are addressed by their position in the current row collection. Reordering or deleting a
//! row shifts which row later edits target; there is no stable row id.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::cell::{CellContext, CellRender};
use crate::number_format::NumberFormat;
use crate::sizing::{ColumnAlign, ColumnSizing};

/// Default row type: a JSON object keyed by column accessor.
pub type Record = Map<String, Value>;

/// Field access required from a row type rendered by the editable table.
pub trait TableRow: Clone + PartialEq + 'static {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<Value>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: Value);

    /// Builds a row from `(key, value)` pairs.
    fn from_fields<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (String, Value)>;
}

impl TableRow for Record {
    fn get(&self, key: &str) -> Option<Value> {
        Map::get(self, key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) {
        self.insert(key.to_string(), value);
    }

    fn from_fields<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        fields.into_iter().collect()
    }
}

impl TableRow for Value {
    fn get(&self, key: &str) -> Option<Value> {
        self.as_object().and_then(|map| map.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) {
        if !self.is_object() {
            *self = Value::Object(Map::new());
        }
        if let Some(map) = self.as_object_mut() {
            map.insert(key.to_string(), value);
        }
    }

    fn from_fields<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        Value::Object(fields.into_iter().collect())
    }
}

/// Custom cell renderer supplied by the caller.
pub type CellRenderer<R> = Rc<dyn Fn(&CellContext<'_, R>) -> CellRender<R>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Editor widget mounted for a column when no custom renderer is supplied.
pub enum EditorKind {
    /// Free-text input.
    Text,
    /// Numeric input with optional formatting.
    Number,
    /// Option picker.
    Select,
    /// Calendar date picker.
    Datepicker,
}

impl EditorKind {
    /// Stable token used by `data-ui-*` attributes.
    pub fn token(self) -> &'static str {
        match self {
            Self::Text => "editable-text",
            Self::Number => "editable-number",
            Self::Select => "editable-select",
            Self::Datepicker => "editable-datepicker",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One choice offered by a select editor.
pub struct SelectOption {
    /// Value written into the row when selected.
    pub value: Value,
    /// Display label.
    pub label: String,
}

impl SelectOption {
    /// Creates an option whose label is rendered from `label`.
    pub fn new(value: impl Into<Value>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Optional per-column metadata.
pub struct ColumnMeta {
    /// Declarative width rules.
    pub sizing: Option<ColumnSizing>,
    /// Text alignment applied to header and cell.
    pub align: Option<ColumnAlign>,
    /// Header-only alignment override.
    pub header_align: Option<ColumnAlign>,
    /// Value used for this column when a blank row is added.
    pub default_value: Option<Value>,
    /// Editor mounted when the column has no custom renderer.
    pub editor: Option<EditorKind>,
    /// Placeholder shown by empty editors.
    pub placeholder: Option<String>,
    /// Numeric formatting for number editors.
    pub number_format: Option<NumberFormat>,
    /// Choices for select editors.
    pub options: Vec<SelectOption>,
}

/// Caller-supplied description of one table column.
pub struct ColumnDef<R> {
    /// Row field rendered by this column.
    pub accessor_key: Option<String>,
    /// Explicit column id; used for display-only columns.
    pub id: Option<String>,
    /// Header label.
    pub header: String,
    /// Custom cell renderer.
    pub cell: Option<CellRenderer<R>>,
    /// Per-column sort preference; sorting defaults to enabled.
    pub enable_sorting: Option<bool>,
    /// Sizing, alignment, and editor metadata.
    pub meta: ColumnMeta,
}

impl<R> ColumnDef<R> {
    /// Column bound to a row field.
    pub fn accessor(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            accessor_key: Some(key.into()),
            id: None,
            header: header.into(),
            cell: None,
            enable_sorting: None,
            meta: ColumnMeta::default(),
        }
    }

    /// Column without a row field, rendered entirely by a custom cell renderer.
    pub fn display(id: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            accessor_key: None,
            id: Some(id.into()),
            header: header.into(),
            cell: None,
            enable_sorting: None,
            meta: ColumnMeta::default(),
        }
    }

    /// Id used for sorting and cell payloads: explicit id first, then accessor key.
    pub fn column_id(&self) -> Option<&str> {
        self.id.as_deref().or(self.accessor_key.as_deref())
    }

    /// Mounts `editor` for this column.
    pub fn with_editor(mut self, editor: EditorKind) -> Self {
        self.meta.editor = Some(editor);
        self
    }

    /// Sets header and cell alignment.
    pub fn with_align(mut self, align: ColumnAlign) -> Self {
        self.meta.align = Some(align);
        self
    }

    /// Sets width rules.
    pub fn with_sizing(mut self, sizing: ColumnSizing) -> Self {
        self.meta.sizing = Some(sizing);
        self
    }

    /// Sets the value used when a blank row is added.
    pub fn with_default_value(mut self, value: impl Into<Value>) -> Self {
        self.meta.default_value = Some(value.into());
        self
    }

    /// Sets the editor placeholder.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.meta.placeholder = Some(placeholder.into());
        self
    }

    /// Sets numeric formatting and implies the number editor.
    pub fn with_number_format(mut self, format: NumberFormat) -> Self {
        self.meta.number_format = Some(format);
        self.meta.editor = Some(EditorKind::Number);
        self
    }

    /// Sets select choices and implies the select editor.
    pub fn with_options(mut self, options: Vec<SelectOption>) -> Self {
        self.meta.options = options;
        self.meta.editor = Some(EditorKind::Select);
        self
    }

    /// Overrides the per-column sort preference.
    pub fn with_sorting(mut self, enabled: bool) -> Self {
        self.enable_sorting = Some(enabled);
        self
    }

    /// Installs a custom cell renderer.
    pub fn with_cell<F>(mut self, render: F) -> Self
    where
        F: Fn(&CellContext<'_, R>) -> CellRender<R> + 'static,
    {
        self.cell = Some(Rc::new(render));
        self
    }
}

impl<R> Clone for ColumnDef<R> {
    fn clone(&self) -> Self {
        Self {
            accessor_key: self.accessor_key.clone(),
            id: self.id.clone(),
            header: self.header.clone(),
            cell: self.cell.clone(),
            enable_sorting: self.enable_sorting,
            meta: self.meta.clone(),
        }
    }
}

impl<R> PartialEq for ColumnDef<R> {
    fn eq(&self, other: &Self) -> bool {
        let same_renderer = match (&self.cell, &other.cell) {
            (Some(left), Some(right)) => Rc::ptr_eq(left, right),
            (None, None) => true,
            _ => false,
        };
        same_renderer
            && self.accessor_key == other.accessor_key
            && self.id == other.id
            && self.header == other.header
            && self.enable_sorting == other.enable_sorting
            && self.meta == other.meta
    }
}

impl<R> fmt::Debug for ColumnDef<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("accessor_key", &self.accessor_key)
            .field("id", &self.id)
            .field("header", &self.header)
            .field("cell", &self.cell.as_ref().map(|_| "<renderer>"))
            .field("enable_sorting", &self.enable_sorting)
            .field("meta", &self.meta)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Visual treatment for a custom row action button.
pub enum RowActionVariant {
    /// Standard button.
    Standard,
    /// Quiet button.
    Quiet,
    /// Destructive button.
    Danger,
}

impl Default for RowActionVariant {
    fn default() -> Self {
        Self::Quiet
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Labeled button rendered in the actions column.
pub struct RowAction {
    /// Icon token.
    pub icon: String,
    /// Accessible label.
    pub aria_label: String,
    /// Action name reported back through `ActionClicked`.
    pub action: String,
    /// Whether the button is inert.
    #[serde(default)]
    pub disabled: bool,
    /// Visual variant.
    #[serde(default)]
    pub variant: RowActionVariant,
}

impl RowAction {
    /// Creates an enabled quiet action.
    pub fn new(
        action: impl Into<String>,
        icon: impl Into<String>,
        aria_label: impl Into<String>,
    ) -> Self {
        Self {
            icon: icon.into(),
            aria_label: aria_label.into(),
            action: action.into(),
            disabled: false,
            variant: RowActionVariant::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Table-level behavior switches.
pub struct TableOptions {
    /// Enables drag reordering; disables column sorting while set.
    pub reorderable: bool,
    /// Shows the synthetic drag-handle column when reordering.
    pub show_drag_handle: bool,
    /// Shows the add-row button and accepts `AddRow`.
    pub allow_add_row: bool,
    /// Shows the synthetic actions column.
    pub allow_delete_row: bool,
    /// Disables drag handles and row actions.
    pub disabled: bool,
    /// Fields copied into each added row instead of column defaults.
    pub new_row_template: Option<Record>,
    /// Custom buttons for the actions column; `None` shows the delete button.
    pub row_actions: Option<Vec<RowAction>>,
    /// Text shown when there are no rows.
    pub empty_message: String,
    /// Label of the add-row button.
    pub add_row_button_text: String,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            reorderable: true,
            show_drag_handle: true,
            allow_add_row: true,
            allow_delete_row: true,
            disabled: false,
            new_row_template: None,
            row_actions: None,
            empty_message: "No data".to_string(),
            add_row_button_text: "Add row".to_string(),
        }
    }
}

/// Renders a cell value as plain text.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn column_id_prefers_explicit_id() {
        let mut column = ColumnDef::<Record>::accessor("qty", "Quantity");
        assert_eq!(column.column_id(), Some("qty"));
        column.id = Some("quantity".to_string());
        assert_eq!(column.column_id(), Some("quantity"));
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: TableOptions =
            serde_json::from_value(json!({ "reorderable": false, "emptyMessage": "Nothing" }))
                .expect("options");
        assert!(!options.reorderable);
        assert!(options.show_drag_handle);
        assert!(options.allow_add_row);
        assert_eq!(options.empty_message, "Nothing");
        assert_eq!(options.add_row_button_text, "Add row");
    }

    #[test]
    fn value_row_set_promotes_non_objects() {
        let mut row = Value::Null;
        row.set("name", json!("Ada"));
        assert_eq!(row, json!({ "name": "Ada" }));
        assert_eq!(TableRow::get(&row, "name"), Some(json!("Ada")));
    }

    #[test]
    fn value_text_renders_scalars() {
        assert_eq!(value_text(&Value::Null), "");
        assert_eq!(value_text(&json!("x")), "x");
        assert_eq!(value_text(&json!(12.5)), "12.5");
        assert_eq!(value_text(&json!(true)), "true");
    }
}
