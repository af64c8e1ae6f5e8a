//! Table actions, emitted events, and the transition logic for the row collection.
//!
//! Every mutation replaces the row snapshot before any event is produced, so a listener handling
//! `RowAdded`, `RowDeleted`, `RowReordered`, or a cell event can read the updated collection.

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use crate::columns::resolve_column_key;
use crate::model::{ColumnDef, Record, TableOptions, TableRow};
use crate::sort::SortState;

#[derive(Debug, Clone, PartialEq)]
/// Owned state of one editable table instance.
pub struct TableState<R = Record> {
    rows: Arc<Vec<R>>,
    sorting: SortState,
    options: TableOptions,
}

impl<R: TableRow> TableState<R> {
    /// Creates state over `rows` with `options`.
    pub fn new(rows: Vec<R>, options: TableOptions) -> Self {
        Self {
            rows: Arc::new(rows),
            sorting: SortState::default(),
            options,
        }
    }

    /// Current row snapshot.
    pub fn rows(&self) -> &Arc<Vec<R>> {
        &self.rows
    }

    /// Current sort keys; always empty while reordering is enabled.
    pub fn sorting(&self) -> &SortState {
        &self.sorting
    }

    /// Behavior switches.
    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Message to show instead of rows, when there are none.
    pub fn empty_message(&self) -> Option<&str> {
        self.rows
            .is_empty()
            .then_some(self.options.empty_message.as_str())
    }
}

impl<R: TableRow> Default for TableState<R> {
    fn default() -> Self {
        Self::new(Vec::new(), TableOptions::default())
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_table`].
pub enum TableAction<R = Record> {
    /// Append the template row, or a row of column defaults.
    AddRow,
    /// Remove the row at `index`.
    DeleteRow {
        /// Row position.
        index: usize,
    },
    /// Move one row from `previous_index` to `current_index` (drag and drop).
    ReorderRow {
        /// Position the row was dragged from.
        previous_index: usize,
        /// Position the row was dropped at.
        current_index: usize,
    },
    /// Live value from an editor.
    EditCell {
        /// Row position.
        row_index: usize,
        /// Column reference from the cell payload.
        column: String,
        /// New value.
        value: Value,
    },
    /// Final value from an editor (blur, Enter, or discrete selection).
    CommitCell {
        /// Row position.
        row_index: usize,
        /// Column reference from the cell payload.
        column: String,
        /// Final value.
        value: Value,
    },
    /// A custom row action button was clicked.
    ActionClicked {
        /// Action name.
        action: String,
        /// Row position.
        row_index: usize,
    },
    /// Replace the sort keys.
    SetSorting(SortState),
    /// Cycle one column's sort direction.
    ToggleSort {
        /// Column id.
        column_id: String,
        /// Keep other sort keys.
        multi: bool,
    },
    /// Replace the rows with a caller-fed snapshot.
    SetData(Vec<R>),
    /// Replace the behavior switches.
    SetOptions(TableOptions),
}

#[derive(Debug, Clone, PartialEq)]
/// Payload of cell edit and commit events.
pub struct CellEdit<R = Record> {
    /// Row after the value was written.
    pub row: R,
    /// Row position.
    pub row_index: usize,
    /// Resolved column key.
    pub column: String,
    /// Written value.
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq)]
/// Events produced by [`reduce_table`], in emission order.
pub enum TableEvent<R = Record> {
    /// The row snapshot was replaced.
    DataChanged(Arc<Vec<R>>),
    /// A row was appended.
    RowAdded(R),
    /// A row was removed.
    RowDeleted {
        /// Removed row.
        row: R,
        /// Position it was removed from.
        index: usize,
    },
    /// A row was moved.
    RowReordered {
        /// Source position.
        from: usize,
        /// Destination position.
        to: usize,
    },
    /// A live edit was written.
    CellEdited(CellEdit<R>),
    /// A final value was written.
    CellCommitted(CellEdit<R>),
    /// A custom action was clicked; interpretation is up to the caller.
    ActionClicked {
        /// Action name.
        action: String,
        /// Row position.
        row_index: usize,
        /// Row the action targets.
        row: R,
    },
    /// Sort keys changed.
    SortingChanged(SortState),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that reference rows outside the current snapshot.
pub enum TableError {
    /// Row index does not exist in the current snapshot.
    #[error("row index {index} out of range for {len} row(s)")]
    RowOutOfRange {
        /// Requested index.
        index: usize,
        /// Snapshot length.
        len: usize,
    },
}

/// Applies a [`TableAction`] to the table state and collects the resulting events.
///
/// `columns` are the caller's column definitions, used to resolve cell column keys and to build
/// blank rows.
///
/// # Errors
///
/// Returns [`TableError::RowOutOfRange`] when a delete, edit, or action references a row that is
/// not in the snapshot. The state is left unchanged.
pub fn reduce_table<R: TableRow>(
    state: &mut TableState<R>,
    columns: &[ColumnDef<R>],
    action: TableAction<R>,
) -> Result<Vec<TableEvent<R>>, TableError> {
    let mut events = Vec::new();
    match action {
        TableAction::AddRow => {
            if !state.options.allow_add_row {
                return Ok(events);
            }
            let row = new_row(columns, &state.options);
            Arc::make_mut(&mut state.rows).push(row.clone());
            events.push(TableEvent::DataChanged(state.rows.clone()));
            events.push(TableEvent::RowAdded(row));
        }
        TableAction::DeleteRow { index } => {
            check_index(state, index)?;
            let row = Arc::make_mut(&mut state.rows).remove(index);
            events.push(TableEvent::DataChanged(state.rows.clone()));
            events.push(TableEvent::RowDeleted { row, index });
        }
        TableAction::ReorderRow {
            previous_index,
            current_index,
        } => {
            if !state.options.reorderable || state.rows.is_empty() {
                return Ok(events);
            }
            let last = state.rows.len() - 1;
            let from = previous_index.min(last);
            let to = current_index.min(last);
            if from != to {
                let rows = Arc::make_mut(&mut state.rows);
                move_item(rows, from, to);
                events.push(TableEvent::DataChanged(state.rows.clone()));
            }
            events.push(TableEvent::RowReordered { from, to });
        }
        TableAction::EditCell {
            row_index,
            column,
            value,
        } => {
            let edit = write_cell(state, columns, row_index, &column, value)?;
            events.push(TableEvent::DataChanged(state.rows.clone()));
            events.push(TableEvent::CellEdited(edit));
        }
        TableAction::CommitCell {
            row_index,
            column,
            value,
        } => {
            let edit = write_cell(state, columns, row_index, &column, value)?;
            events.push(TableEvent::DataChanged(state.rows.clone()));
            events.push(TableEvent::CellCommitted(edit));
        }
        TableAction::ActionClicked { action, row_index } => {
            check_index(state, row_index)?;
            events.push(TableEvent::ActionClicked {
                action,
                row_index,
                row: state.rows[row_index].clone(),
            });
        }
        TableAction::SetSorting(sorting) => {
            if state.options.reorderable || sorting == state.sorting {
                return Ok(events);
            }
            state.sorting = sorting;
            events.push(TableEvent::SortingChanged(state.sorting.clone()));
        }
        TableAction::ToggleSort { column_id, multi } => {
            if state.options.reorderable {
                return Ok(events);
            }
            state.sorting.toggle(&column_id, multi);
            events.push(TableEvent::SortingChanged(state.sorting.clone()));
        }
        TableAction::SetData(rows) => {
            state.rows = Arc::new(rows);
        }
        TableAction::SetOptions(options) => {
            state.options = options;
            if state.options.reorderable && !state.sorting.is_empty() {
                state.sorting = SortState::default();
                events.push(TableEvent::SortingChanged(state.sorting.clone()));
            }
        }
    }

    Ok(events)
}

/// Moves the item at `from` to `to`, shifting the items in between.
pub fn move_item<T>(items: &mut [T], from: usize, to: usize) {
    if from < to {
        items[from..=to].rotate_left(1);
    } else if to < from {
        items[to..=from].rotate_right(1);
    }
}

fn new_row<R: TableRow>(columns: &[ColumnDef<R>], options: &TableOptions) -> R {
    if let Some(template) = options.new_row_template.as_ref() {
        return R::from_fields(template.clone());
    }
    R::from_fields(columns.iter().filter_map(|column| {
        column.accessor_key.as_ref().map(|key| {
            let value = column
                .meta
                .default_value
                .clone()
                .unwrap_or_else(|| Value::String(String::new()));
            (key.clone(), value)
        })
    }))
}

fn check_index<R>(state: &TableState<R>, index: usize) -> Result<(), TableError> {
    if index < state.rows.len() {
        Ok(())
    } else {
        Err(TableError::RowOutOfRange {
            index,
            len: state.rows.len(),
        })
    }
}

fn write_cell<R: TableRow>(
    state: &mut TableState<R>,
    columns: &[ColumnDef<R>],
    row_index: usize,
    column: &str,
    value: Value,
) -> Result<CellEdit<R>, TableError> {
    check_index(state, row_index)?;
    let key = resolve_column_key(columns, column);
    let row = &mut Arc::make_mut(&mut state.rows)[row_index];
    row.set(&key, value.clone());
    Ok(CellEdit {
        row: row.clone(),
        row_index,
        column: key,
        value,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::sort::{ColumnSort, SortDirection};

    fn record(value: Value) -> Record {
        value.as_object().cloned().expect("object row")
    }

    fn letters() -> Vec<Record> {
        ["A", "B", "C", "D"]
            .into_iter()
            .map(|name| record(json!({ "name": name })))
            .collect()
    }

    fn names(state: &TableState<Record>) -> Vec<String> {
        state
            .rows()
            .iter()
            .map(|row| row["name"].as_str().unwrap_or_default().to_string())
            .collect()
    }

    fn columns() -> Vec<ColumnDef<Record>> {
        vec![
            ColumnDef::accessor("name", "Name"),
            ColumnDef::accessor("qty", "Qty").with_default_value(0),
        ]
    }

    fn sortable() -> TableOptions {
        TableOptions {
            reorderable: false,
            ..TableOptions::default()
        }
    }

    #[test]
    fn add_row_uses_column_defaults_without_template() {
        let mut state = TableState::default();
        let events = reduce_table(&mut state, &columns(), TableAction::AddRow).expect("add");
        let expected = record(json!({ "name": "", "qty": 0 }));
        assert_eq!(state.rows().as_slice(), &[expected.clone()]);
        assert_eq!(events.last(), Some(&TableEvent::RowAdded(expected)));
    }

    #[test]
    fn add_row_prefers_template_and_respects_flag() {
        let template = record(json!({ "name": "New", "qty": 1 }));
        let mut state = TableState::new(
            Vec::new(),
            TableOptions {
                new_row_template: Some(template.clone()),
                ..TableOptions::default()
            },
        );
        reduce_table(&mut state, &columns(), TableAction::AddRow).expect("add");
        assert_eq!(state.rows().as_slice(), &[template]);

        let mut locked = TableState::new(
            Vec::new(),
            TableOptions {
                allow_add_row: false,
                ..TableOptions::default()
            },
        );
        let events = reduce_table(&mut locked, &columns(), TableAction::AddRow).expect("add");
        assert!(events.is_empty());
        assert!(locked.rows().is_empty());
    }

    #[test]
    fn reorder_relocates_single_row() {
        let mut state = TableState::new(letters(), TableOptions::default());
        let events = reduce_table(
            &mut state,
            &columns(),
            TableAction::ReorderRow {
                previous_index: 0,
                current_index: 2,
            },
        )
        .expect("reorder");
        assert_eq!(names(&state), vec!["B", "C", "A", "D"]);
        assert_eq!(events.last(), Some(&TableEvent::RowReordered { from: 0, to: 2 }));

        reduce_table(
            &mut state,
            &columns(),
            TableAction::ReorderRow {
                previous_index: 3,
                current_index: 0,
            },
        )
        .expect("reorder up");
        assert_eq!(names(&state), vec!["D", "B", "C", "A"]);
    }

    #[test]
    fn reorder_clamps_and_is_inert_when_disabled() {
        let mut state = TableState::new(letters(), TableOptions::default());
        let events = reduce_table(
            &mut state,
            &columns(),
            TableAction::ReorderRow {
                previous_index: 1,
                current_index: 99,
            },
        )
        .expect("reorder");
        assert_eq!(names(&state), vec!["A", "C", "D", "B"]);
        assert_eq!(events.last(), Some(&TableEvent::RowReordered { from: 1, to: 3 }));

        let mut fixed = TableState::new(letters(), sortable());
        let events = reduce_table(
            &mut fixed,
            &columns(),
            TableAction::ReorderRow {
                previous_index: 0,
                current_index: 2,
            },
        )
        .expect("reorder");
        assert!(events.is_empty());
        assert_eq!(names(&fixed), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn delete_out_of_range_leaves_state_unchanged() {
        let mut state = TableState::new(letters(), TableOptions::default());
        let err = reduce_table(&mut state, &columns(), TableAction::DeleteRow { index: 4 })
            .expect_err("out of range");
        assert_eq!(err, TableError::RowOutOfRange { index: 4, len: 4 });
        assert_eq!(names(&state), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn edit_and_commit_write_resolved_column() {
        let mut columns = columns();
        columns[1].id = Some("quantity".to_string());
        let mut state = TableState::new(letters(), TableOptions::default());

        let events = reduce_table(
            &mut state,
            &columns,
            TableAction::EditCell {
                row_index: 1,
                column: "quantity".to_string(),
                value: json!(7),
            },
        )
        .expect("edit");
        let expected = CellEdit {
            row: record(json!({ "name": "B", "qty": 7 })),
            row_index: 1,
            column: "qty".to_string(),
            value: json!(7),
        };
        assert_eq!(events.last(), Some(&TableEvent::CellEdited(expected.clone())));

        let events = reduce_table(
            &mut state,
            &columns,
            TableAction::CommitCell {
                row_index: 1,
                column: "quantity".to_string(),
                value: json!(7),
            },
        )
        .expect("commit");
        assert_eq!(events.last(), Some(&TableEvent::CellCommitted(expected)));
    }

    #[test]
    fn custom_actions_only_report() {
        let mut state = TableState::new(letters(), TableOptions::default());
        let events = reduce_table(
            &mut state,
            &columns(),
            TableAction::ActionClicked {
                action: "delete".to_string(),
                row_index: 2,
            },
        )
        .expect("action");
        assert_eq!(
            events,
            vec![TableEvent::ActionClicked {
                action: "delete".to_string(),
                row_index: 2,
                row: record(json!({ "name": "C" })),
            }]
        );
        assert_eq!(state.rows().len(), 4);
    }

    #[test]
    fn sorting_is_ignored_while_reorderable() {
        let mut state = TableState::new(letters(), TableOptions::default());
        let events = reduce_table(
            &mut state,
            &columns(),
            TableAction::ToggleSort {
                column_id: "name".to_string(),
                multi: false,
            },
        )
        .expect("toggle");
        assert!(events.is_empty());
        assert!(state.sorting().is_empty());
    }

    #[test]
    fn enabling_reorder_clears_sorting() {
        let mut state = TableState::new(letters(), sortable());
        let sorting = SortState(vec![ColumnSort {
            column_id: "name".to_string(),
            direction: SortDirection::Desc,
        }]);
        let events = reduce_table(
            &mut state,
            &columns(),
            TableAction::SetSorting(sorting.clone()),
        )
        .expect("sort");
        assert_eq!(events, vec![TableEvent::SortingChanged(sorting)]);

        let events = reduce_table(
            &mut state,
            &columns(),
            TableAction::SetOptions(TableOptions::default()),
        )
        .expect("options");
        assert_eq!(
            events,
            vec![TableEvent::SortingChanged(SortState::default())]
        );
        assert!(state.sorting().is_empty());
    }

    #[test]
    fn set_data_replaces_snapshot_silently() {
        let mut state = TableState::new(letters(), TableOptions::default());
        let events = reduce_table(
            &mut state,
            &columns(),
            TableAction::SetData(vec![record(json!({ "name": "Z" }))]),
        )
        .expect("set data");
        assert!(events.is_empty());
        assert_eq!(names(&state), vec!["Z"]);
    }

    #[test]
    fn earlier_snapshots_are_not_mutated() {
        let mut state = TableState::new(letters(), TableOptions::default());
        let before = state.rows().clone();
        reduce_table(&mut state, &columns(), TableAction::DeleteRow { index: 0 }).expect("delete");
        assert_eq!(before.len(), 4);
        assert_eq!(state.rows().len(), 3);
    }
}
