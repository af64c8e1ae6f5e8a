//! Tagged cell render results.
//!
//! A cell renders either to plain markup text or to a [`ComponentCell`] that tells the host which
//! interactive widget to mount and with what payload.

use serde_json::Value;

use crate::model::{value_text, ColumnDef, EditorKind, RowAction, SelectOption, TableRow};
use crate::number_format::NumberFormat;
use crate::sizing::ColumnAlign;

/// Inputs handed to a cell renderer.
pub struct CellContext<'a, R> {
    /// Row being rendered.
    pub row: &'a R,
    /// Position of the row in the row collection.
    pub row_index: usize,
    /// Column being rendered.
    pub column: &'a ColumnDef<R>,
    /// Value read through the column accessor.
    pub value: Option<Value>,
}

impl<'a, R: TableRow> CellContext<'a, R> {
    /// Builds a context, reading the accessor value from `row`.
    pub fn new(row: &'a R, row_index: usize, column: &'a ColumnDef<R>) -> Self {
        let value = column
            .accessor_key
            .as_deref()
            .and_then(|key| row.get(key));
        Self {
            row,
            row_index,
            column,
            value,
        }
    }

    /// Column reference carried in component payloads.
    pub fn column_ref(&self) -> String {
        column_ref(self.column)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Result of rendering one cell.
pub enum CellRender<R> {
    /// Plain, non-editable text.
    Markup(String),
    /// Interactive widget.
    Component(ComponentCell<R>),
}

#[derive(Debug, Clone, PartialEq)]
/// Widget kinds the table knows how to mount.
pub enum ComponentCell<R> {
    /// Free-text editor.
    EditableText(EditableTextData),
    /// Numeric editor.
    EditableNumber(EditableNumberData),
    /// Option picker.
    EditableSelect(EditableSelectData),
    /// Date picker.
    EditableDatepicker(EditableDatepickerData),
    /// Drag handle for row reordering.
    DragHandle(DragHandleData),
    /// Row action buttons.
    Action(ActionCellData<R>),
}

impl<R> ComponentCell<R> {
    /// Stable kind token.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EditableText(_) => "editable-text",
            Self::EditableNumber(_) => "editable-number",
            Self::EditableSelect(_) => "editable-select",
            Self::EditableDatepicker(_) => "editable-datepicker",
            Self::DragHandle(_) => "drag-handle",
            Self::Action(_) => "action",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Payload for [`ComponentCell::EditableText`].
pub struct EditableTextData {
    /// Current text.
    pub value: String,
    /// Row position.
    pub row_index: usize,
    /// Column reference resolved by the table on change.
    pub column: String,
    /// Input text alignment.
    pub align: Option<ColumnAlign>,
    /// Placeholder text.
    pub placeholder: Option<String>,
    /// Number format applied to the text while typing and on commit.
    pub format: Option<NumberFormat>,
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Payload for [`ComponentCell::EditableNumber`].
pub struct EditableNumberData {
    /// Current number, `None` when blank.
    pub value: Option<f64>,
    /// Row position.
    pub row_index: usize,
    /// Column reference resolved by the table on change.
    pub column: String,
    /// Input text alignment.
    pub align: Option<ColumnAlign>,
    /// Placeholder text.
    pub placeholder: Option<String>,
    /// Display formatting.
    pub format: Option<NumberFormat>,
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Payload for [`ComponentCell::EditableSelect`].
pub struct EditableSelectData {
    /// Currently selected value.
    pub value: Value,
    /// Row position.
    pub row_index: usize,
    /// Column reference resolved by the table on change.
    pub column: String,
    /// Trigger text alignment.
    pub align: Option<ColumnAlign>,
    /// Placeholder text.
    pub placeholder: Option<String>,
    /// Available choices.
    pub options: Vec<SelectOption>,
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Payload for [`ComponentCell::EditableDatepicker`].
pub struct EditableDatepickerData {
    /// Raw stored value; parsed by the widget's value accessor.
    pub value: Value,
    /// Row position.
    pub row_index: usize,
    /// Column reference resolved by the table on change.
    pub column: String,
    /// Trigger text alignment.
    pub align: Option<ColumnAlign>,
    /// Placeholder text.
    pub placeholder: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Payload for [`ComponentCell::DragHandle`].
pub struct DragHandleData {
    /// Row position.
    pub row_index: usize,
    /// Whether dragging is inert.
    pub disabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Payload for [`ComponentCell::Action`].
pub struct ActionCellData<R> {
    /// Row the actions apply to.
    pub row: R,
    /// Row position.
    pub row_index: usize,
    /// Whether every action is inert.
    pub disabled: bool,
    /// Custom buttons; `None` renders the delete button.
    pub actions: Option<Vec<RowAction>>,
}

/// Default rendering for a caller column: its custom renderer, else its declared editor, else text.
pub fn render_cell<R: TableRow>(
    column: &ColumnDef<R>,
    row: &R,
    row_index: usize,
) -> CellRender<R> {
    let ctx = CellContext::new(row, row_index, column);
    if let Some(render) = column.cell.as_ref() {
        return render(&ctx);
    }
    match column.meta.editor {
        Some(editor) => editor_cell(&ctx, editor),
        None => CellRender::Markup(ctx.value.as_ref().map(value_text).unwrap_or_default()),
    }
}

/// Builds the component cell for `editor`, forwarding column alignment into the payload.
pub fn editor_cell<R: TableRow>(ctx: &CellContext<'_, R>, editor: EditorKind) -> CellRender<R> {
    let meta = &ctx.column.meta;
    let value = ctx.value.clone().unwrap_or(Value::Null);
    let column = ctx.column_ref();
    let placeholder = meta.placeholder.clone();
    let format_align = meta
        .align
        .or_else(|| meta.number_format.as_ref().map(|format| format.align));
    let cell = match editor {
        EditorKind::Text => ComponentCell::EditableText(EditableTextData {
            value: value_text(&value),
            row_index: ctx.row_index,
            column,
            align: format_align,
            placeholder,
            format: meta.number_format.clone(),
        }),
        EditorKind::Number => ComponentCell::EditableNumber(EditableNumberData {
            value: number_value(&value, meta.number_format.as_ref()),
            row_index: ctx.row_index,
            column,
            align: format_align,
            placeholder,
            format: meta.number_format.clone(),
        }),
        EditorKind::Select => ComponentCell::EditableSelect(EditableSelectData {
            value,
            row_index: ctx.row_index,
            column,
            align: meta.align,
            placeholder,
            options: meta.options.clone(),
        }),
        EditorKind::Datepicker => ComponentCell::EditableDatepicker(EditableDatepickerData {
            value,
            row_index: ctx.row_index,
            column,
            align: meta.align,
            placeholder,
        }),
    };
    CellRender::Component(cell)
}

fn number_value(value: &Value, format: Option<&NumberFormat>) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => match format {
            Some(format) => format.parse(text),
            None => text.trim().parse::<f64>().ok(),
        },
        _ => None,
    }
}

/// Raw column reference: id or accessor key, else the header text.
pub(crate) fn column_ref<R>(column: &ColumnDef<R>) -> String {
    column
        .column_id()
        .map(str::to_string)
        .unwrap_or_else(|| column.header.clone())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::model::Record;
    use crate::number_format::NumberFormatPreset;

    fn row() -> Record {
        json!({ "name": "Widget", "qty": 3, "price": "1,250.5" })
            .as_object()
            .cloned()
            .expect("object")
    }

    #[test]
    fn plain_columns_render_markup() {
        let column = ColumnDef::<Record>::accessor("qty", "Qty");
        assert_eq!(
            render_cell(&column, &row(), 0),
            CellRender::Markup("3".to_string())
        );
        let missing = ColumnDef::<Record>::accessor("missing", "Missing");
        assert_eq!(
            render_cell(&missing, &row(), 0),
            CellRender::Markup(String::new())
        );
    }

    #[test]
    fn text_editor_carries_alignment_and_column() {
        let column = ColumnDef::<Record>::accessor("name", "Name")
            .with_editor(EditorKind::Text)
            .with_align(ColumnAlign::Center)
            .with_placeholder("Name");
        let CellRender::Component(ComponentCell::EditableText(data)) =
            render_cell(&column, &row(), 2)
        else {
            panic!("expected text editor");
        };
        assert_eq!(data.value, "Widget");
        assert_eq!(data.row_index, 2);
        assert_eq!(data.column, "name");
        assert_eq!(data.align, Some(ColumnAlign::Center));
        assert_eq!(data.placeholder.as_deref(), Some("Name"));
    }

    #[test]
    fn number_editor_parses_formatted_strings() {
        let column = ColumnDef::<Record>::accessor("price", "Price")
            .with_number_format(NumberFormat::preset(NumberFormatPreset::Currency));
        let CellRender::Component(ComponentCell::EditableNumber(data)) =
            render_cell(&column, &row(), 0)
        else {
            panic!("expected number editor");
        };
        assert_eq!(data.value, Some(1250.5));
        assert_eq!(data.align, Some(ColumnAlign::Right));
    }

    #[test]
    fn text_editor_carries_number_format() {
        let column = ColumnDef::<Record>::accessor("price", "Price")
            .with_number_format(NumberFormat::preset(NumberFormatPreset::Currency))
            .with_editor(EditorKind::Text);
        let CellRender::Component(ComponentCell::EditableText(data)) =
            render_cell(&column, &row(), 1)
        else {
            panic!("expected text editor");
        };
        assert_eq!(data.value, "1,250.5");
        assert_eq!(data.align, Some(ColumnAlign::Right));
        assert_eq!(
            data.format,
            Some(NumberFormat::preset(NumberFormatPreset::Currency))
        );
    }

    #[test]
    fn custom_renderer_wins_over_editor() {
        let column = ColumnDef::<Record>::display("summary", "Summary")
            .with_editor(EditorKind::Text)
            .with_cell(|ctx| CellRender::Markup(format!("row {}", ctx.row_index)));
        assert_eq!(
            render_cell(&column, &row(), 4),
            CellRender::Markup("row 4".to_string())
        );
    }

    #[test]
    fn column_ref_falls_back_for_malformed_columns() {
        let mut column = ColumnDef::<Record>::accessor("qty", "Qty");
        column.accessor_key = None;
        assert_eq!(column_ref(&column), "Qty");
    }
}
