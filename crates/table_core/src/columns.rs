//! Column model adapter: derives the effective column list the table renders.
//!
//! Synthetic drag-handle and actions columns are injected here and are never sortable. Column
//! sorting is suppressed globally while row reordering is enabled.

use std::fmt;

use crate::cell::{
    column_ref, render_cell, ActionCellData, CellRender, ComponentCell, DragHandleData,
};
use crate::model::{ColumnDef, ColumnMeta, TableOptions, TableRow};
use crate::sizing::{resolve_sizing, ColumnSizing, SizingHints};

/// Id of the injected drag-handle column.
pub const DRAG_HANDLE_COLUMN_ID: &str = "_drag-handle";
/// Id of the injected actions column.
pub const ACTIONS_COLUMN_ID: &str = "_actions";

const DRAG_HANDLE_WIDTH: &str = "40px";
const ACTIONS_WIDTH: &str = "56px";
const ACTION_BUTTON_WIDTH_PX: usize = 40;

/// Where an effective column came from.
pub enum ColumnKind<R> {
    /// Injected drag handle.
    DragHandle,
    /// Caller column.
    Data(ColumnDef<R>),
    /// Injected row actions.
    Actions,
}

impl<R> Clone for ColumnKind<R> {
    fn clone(&self) -> Self {
        match self {
            Self::DragHandle => Self::DragHandle,
            Self::Data(column) => Self::Data(column.clone()),
            Self::Actions => Self::Actions,
        }
    }
}

impl<R> PartialEq for ColumnKind<R> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::DragHandle, Self::DragHandle) | (Self::Actions, Self::Actions) => true,
            (Self::Data(left), Self::Data(right)) => left == right,
            _ => false,
        }
    }
}

impl<R> fmt::Debug for ColumnKind<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DragHandle => f.write_str("DragHandle"),
            Self::Data(column) => f.debug_tuple("Data").field(column).finish(),
            Self::Actions => f.write_str("Actions"),
        }
    }
}

/// Column as rendered, after synthetic injection and sort gating.
pub struct EffectiveColumn<R> {
    /// Column id used by sort state and header keys.
    pub id: String,
    /// Header label.
    pub header: String,
    /// Source of the column.
    pub kind: ColumnKind<R>,
    /// Whether clicking the header changes the sort state.
    pub enable_sorting: bool,
    /// Resolved width, truncation, and alignment hints.
    pub hints: SizingHints,
}

impl<R> Clone for EffectiveColumn<R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            header: self.header.clone(),
            kind: self.kind.clone(),
            enable_sorting: self.enable_sorting,
            hints: self.hints.clone(),
        }
    }
}

impl<R> PartialEq for EffectiveColumn<R> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.header == other.header
            && self.kind == other.kind
            && self.enable_sorting == other.enable_sorting
            && self.hints == other.hints
    }
}

impl<R> fmt::Debug for EffectiveColumn<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EffectiveColumn")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("kind", &self.kind)
            .field("enable_sorting", &self.enable_sorting)
            .field("hints", &self.hints)
            .finish()
    }
}

impl<R: TableRow> EffectiveColumn<R> {
    /// Whether the column was injected by the table.
    pub fn is_synthetic(&self) -> bool {
        !matches!(self.kind, ColumnKind::Data(_))
    }

    /// Renders the cell of this column for the row at `row_index`.
    pub fn render(&self, row: &R, row_index: usize, options: &TableOptions) -> CellRender<R> {
        match &self.kind {
            ColumnKind::DragHandle => CellRender::Component(ComponentCell::DragHandle(
                DragHandleData {
                    row_index,
                    disabled: options.disabled || !options.reorderable,
                },
            )),
            ColumnKind::Data(column) => render_cell(column, row, row_index),
            ColumnKind::Actions => CellRender::Component(ComponentCell::Action(ActionCellData {
                row: row.clone(),
                row_index,
                disabled: options.disabled,
                actions: options.row_actions.clone(),
            })),
        }
    }
}

/// Derives the rendered column list from caller columns and table options.
pub fn effective_columns<R: TableRow>(
    columns: &[ColumnDef<R>],
    options: &TableOptions,
) -> Vec<EffectiveColumn<R>> {
    let mut effective = Vec::with_capacity(columns.len() + 2);

    if options.reorderable && options.show_drag_handle {
        effective.push(EffectiveColumn {
            id: DRAG_HANDLE_COLUMN_ID.to_string(),
            header: String::new(),
            kind: ColumnKind::DragHandle,
            enable_sorting: false,
            hints: fixed_hints(DRAG_HANDLE_WIDTH.to_string()),
        });
    }

    effective.extend(columns.iter().map(|column| EffectiveColumn {
        id: column_ref(column),
        header: column.header.clone(),
        kind: ColumnKind::Data(column.clone()),
        enable_sorting: !options.reorderable && column.enable_sorting.unwrap_or(true),
        hints: resolve_sizing(&column.meta),
    }));

    if options.allow_delete_row {
        let width = match options.row_actions.as_ref() {
            Some(actions) if actions.len() > 1 => {
                format!("{}px", actions.len() * ACTION_BUTTON_WIDTH_PX + 16)
            }
            _ => ACTIONS_WIDTH.to_string(),
        };
        effective.push(EffectiveColumn {
            id: ACTIONS_COLUMN_ID.to_string(),
            header: String::new(),
            kind: ColumnKind::Actions,
            enable_sorting: false,
            hints: fixed_hints(width),
        });
    }

    effective
}

fn fixed_hints(width: String) -> SizingHints {
    resolve_sizing(&ColumnMeta {
        sizing: Some(ColumnSizing::fixed(width)),
        ..ColumnMeta::default()
    })
}

/// Resolves the column identifier reported in cell events.
///
/// Looks up the caller column whose id or accessor key matches `column_ref` and returns its
/// accessor key, else its id. Unknown references are returned unchanged.
pub fn resolve_column_key<R>(columns: &[ColumnDef<R>], column_ref: &str) -> String {
    columns
        .iter()
        .find(|column| {
            column.id.as_deref() == Some(column_ref)
                || column.accessor_key.as_deref() == Some(column_ref)
        })
        .and_then(|column| column.accessor_key.clone().or_else(|| column.id.clone()))
        .unwrap_or_else(|| column_ref.to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::model::{Record, RowAction};

    fn columns() -> Vec<ColumnDef<Record>> {
        vec![
            ColumnDef::accessor("name", "Name"),
            ColumnDef::accessor("qty", "Qty").with_sorting(true),
            ColumnDef::accessor("notes", "Notes").with_sorting(false),
        ]
    }

    fn ids(columns: &[EffectiveColumn<Record>]) -> Vec<&str> {
        columns.iter().map(|column| column.id.as_str()).collect()
    }

    #[test]
    fn reorderable_tables_inject_handle_and_disable_sorting() {
        let options = TableOptions::default();
        let effective = effective_columns(&columns(), &options);
        assert_eq!(
            ids(&effective),
            vec![DRAG_HANDLE_COLUMN_ID, "name", "qty", "notes", ACTIONS_COLUMN_ID]
        );
        assert!(effective.iter().all(|column| !column.enable_sorting));
        assert_eq!(effective[0].hints.width.as_deref(), Some("40px"));
        assert!(effective[0].is_synthetic());
        assert!(!effective[1].is_synthetic());
    }

    #[test]
    fn sortable_tables_respect_column_preference() {
        let options = TableOptions {
            reorderable: false,
            allow_delete_row: false,
            ..TableOptions::default()
        };
        let effective = effective_columns(&columns(), &options);
        assert_eq!(ids(&effective), vec!["name", "qty", "notes"]);
        let sortable: Vec<bool> = effective.iter().map(|c| c.enable_sorting).collect();
        assert_eq!(sortable, vec![true, true, false]);
    }

    #[test]
    fn drag_handle_requires_both_flags() {
        let options = TableOptions {
            show_drag_handle: false,
            ..TableOptions::default()
        };
        let effective = effective_columns(&columns(), &options);
        assert_eq!(effective[0].id, "name");
    }

    #[test]
    fn synthetic_cells_render_component_payloads() {
        let options = TableOptions {
            row_actions: Some(vec![
                RowAction::new("manage", "settings", "Manage"),
                RowAction::new("delete", "delete", "Delete"),
            ]),
            ..TableOptions::default()
        };
        let effective = effective_columns(&columns(), &options);
        let row: Record = json!({ "name": "A" }).as_object().cloned().expect("row");

        assert_eq!(
            effective[0].render(&row, 3, &options),
            CellRender::Component(ComponentCell::DragHandle(DragHandleData {
                row_index: 3,
                disabled: false,
            }))
        );

        let actions = effective.last().expect("actions column");
        assert_eq!(actions.hints.width.as_deref(), Some("96px"));
        let CellRender::Component(ComponentCell::Action(data)) = actions.render(&row, 3, &options)
        else {
            panic!("expected action cell");
        };
        assert_eq!(data.row, row);
        assert_eq!(data.row_index, 3);
        assert_eq!(data.actions.map(|actions| actions.len()), Some(2));
    }

    #[test]
    fn column_keys_resolve_to_accessor_then_id() {
        let mut columns = columns();
        columns.push(ColumnDef::display("summary", "Summary"));
        let mut aliased = ColumnDef::accessor("unit_price", "Price");
        aliased.id = Some("price".to_string());
        columns.push(aliased);

        assert_eq!(resolve_column_key(&columns, "qty"), "qty");
        assert_eq!(resolve_column_key(&columns, "summary"), "summary");
        assert_eq!(resolve_column_key(&columns, "price"), "unit_price");
        assert_eq!(resolve_column_key(&columns, "unknown"), "unknown");
    }
}
