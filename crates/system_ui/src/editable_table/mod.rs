//! Leptos rendering of the headless `table_core` editable table.
//!
//! [`EditableTable`] owns a [`TableState`] signal and a dispatch callback in the shape of a
//! runtime reducer container: actions are reduced against an untracked copy of the state, the
//! new state is published, and the emitted events are then handed to the caller's callbacks.
//! The caller's `data` signal is the two-way bound row collection. Every `DataChanged` event
//! writes the new snapshot back into it, and external writes are adopted through
//! `TableAction::SetData`.
//!
//! Rows are keyed by their index in the collection, matching the positional row identity of the
//! table model.

mod cells;
mod drag;

use leptos::ev::MouseEvent;
use leptos::*;
use table_core::{
    display_order, effective_columns, reduce_table, CellEdit, CellRender, ColumnAlign,
    ColumnDef, ComponentCell, EffectiveColumn, Record, RowAction, SizingHints, SortDirection,
    SortState, TableAction, TableEvent, TableOptions, TableState,
};

pub use cells::{
    ActionCell, DragHandleCell, EditableDatepickerCell, EditableNumberCell, EditableSelectCell,
    EditableTextCell,
};

use self::drag::RowDrag;
use crate::primitives::{
    bool_token, Button, Cluster, DataTable, EmptyState, LayoutGap, LayoutJustify, Stack, Text,
};
use crate::{Icon, IconName, IconSize};

#[derive(Clone, Copy)]
struct TableCallbacks {
    on_row_added: Option<Callback<Record>>,
    on_row_deleted: Option<Callback<(Record, usize)>>,
    on_row_reordered: Option<Callback<(usize, usize)>>,
    on_cell_edited: Option<Callback<CellEdit<Record>>>,
    on_cell_committed: Option<Callback<CellEdit<Record>>>,
    on_action_clicked: Option<Callback<(String, usize, Record)>>,
    on_sorting_changed: Option<Callback<SortState>>,
}

impl TableCallbacks {
    fn emit(&self, event: TableEvent<Record>, data: RwSignal<Vec<Record>>) {
        match event {
            TableEvent::DataChanged(rows) => data.set(rows.as_ref().clone()),
            TableEvent::RowAdded(row) => {
                if let Some(on_row_added) = self.on_row_added.as_ref() {
                    on_row_added.call(row);
                }
            }
            TableEvent::RowDeleted { row, index } => {
                if let Some(on_row_deleted) = self.on_row_deleted.as_ref() {
                    on_row_deleted.call((row, index));
                }
            }
            TableEvent::RowReordered { from, to } => {
                if let Some(on_row_reordered) = self.on_row_reordered.as_ref() {
                    on_row_reordered.call((from, to));
                }
            }
            TableEvent::CellEdited(edit) => {
                if let Some(on_cell_edited) = self.on_cell_edited.as_ref() {
                    on_cell_edited.call(edit);
                }
            }
            TableEvent::CellCommitted(edit) => {
                if let Some(on_cell_committed) = self.on_cell_committed.as_ref() {
                    on_cell_committed.call(edit);
                }
            }
            TableEvent::ActionClicked {
                action,
                row_index,
                row,
            } => {
                if let Some(on_action_clicked) = self.on_action_clicked.as_ref() {
                    on_action_clicked.call((action, row_index, row));
                }
            }
            TableEvent::SortingChanged(sorting) => {
                if let Some(on_sorting_changed) = self.on_sorting_changed.as_ref() {
                    on_sorting_changed.call(sorting);
                }
            }
        }
    }
}

fn header_class(hints: &SizingHints) -> String {
    let mut tokens = vec!["ui-editable-table-header"];
    if hints.should_truncate {
        tokens.push("ui-cell-truncate");
    }
    match hints.header_align {
        Some(ColumnAlign::Left) => tokens.push("ui-align-left"),
        Some(ColumnAlign::Right) => tokens.push("ui-align-right"),
        Some(ColumnAlign::Center) => tokens.push("ui-align-center"),
        None => {}
    }
    tokens.join(" ")
}

fn cell_class(hints: &SizingHints) -> String {
    std::iter::once("ui-editable-table-cell")
        .chain(hints.class_tokens())
        .collect::<Vec<_>>()
        .join(" ")
}

fn component_kind(render: &Option<CellRender<Record>>) -> &'static str {
    match render {
        Some(CellRender::Component(cell)) => cell.kind(),
        _ => "markup",
    }
}

fn payload<T>(
    render: Memo<Option<CellRender<Record>>>,
    pick: fn(&ComponentCell<Record>) -> Option<&T>,
) -> Signal<T>
where
    T: Clone + Default + PartialEq + 'static,
{
    create_memo(move |_| {
        render
            .with(|render| match render {
                Some(CellRender::Component(cell)) => pick(cell).cloned(),
                _ => None,
            })
            .unwrap_or_default()
    })
    .into()
}

#[component]
fn HeaderCell(
    column: EffectiveColumn<Record>,
    table: RwSignal<TableState<Record>>,
    dispatch: Callback<TableAction<Record>>,
) -> impl IntoView {
    let EffectiveColumn {
        id,
        header,
        enable_sorting,
        hints,
        ..
    } = column;
    let sort_id = id.clone();
    let direction = Signal::derive(move || table.with(|state| state.sorting().direction_for(&sort_id)));
    let toggle_id = id.clone();

    view! {
        <th
            scope="col"
            class=header_class(&hints)
            style=hints.style()
            data-ui-column=id
            data-ui-sortable=bool_token(enable_sorting)
            aria-sort=move || direction.get().map(SortDirection::aria_token).unwrap_or("none")
            on:click=move |ev: MouseEvent| {
                if enable_sorting {
                    dispatch.call(TableAction::ToggleSort {
                        column_id: toggle_id.clone(),
                        multi: ev.shift_key(),
                    });
                }
            }
        >
            <span data-ui-slot="label">{header}</span>
            {move || {
                direction.get().map(|direction| {
                    let icon = match direction {
                        SortDirection::Asc => IconName::ArrowUp,
                        SortDirection::Desc => IconName::ArrowDown,
                    };
                    view! { <Icon icon size=IconSize::Xs /> }
                })
            }}
        </th>
    }
}

#[component]
fn BodyCell(
    column_id: String,
    row_index: usize,
    columns: Memo<Vec<EffectiveColumn<Record>>>,
    table: RwSignal<TableState<Record>>,
    drag: RwSignal<RowDrag>,
    dispatch: Callback<TableAction<Record>>,
) -> impl IntoView {
    let hints_id = column_id.clone();
    let hints = create_memo(move |_| {
        columns.with(|columns| {
            columns
                .iter()
                .find(|column| column.id == hints_id)
                .map(|column| column.hints.clone())
                .unwrap_or_default()
        })
    });
    let render_id = column_id.clone();
    let render = create_memo(move |_| {
        columns.with(|columns| {
            let column = columns.iter().find(|column| column.id == render_id)?;
            table.with(|state| {
                state
                    .rows()
                    .get(row_index)
                    .map(|row| column.render(row, row_index, state.options()))
            })
        })
    });
    let kind = create_memo(move |_| render.with(component_kind));
    let disabled = Signal::derive(move || table.with(|state| state.options().disabled));

    let content = move || match kind.get() {
        "editable-text" => view! {
            <EditableTextCell
                data=payload(render, |cell| match cell {
                    ComponentCell::EditableText(data) => Some(data),
                    _ => None,
                })
                disabled
                dispatch
            />
        }
        .into_view(),
        "editable-number" => view! {
            <EditableNumberCell
                data=payload(render, |cell| match cell {
                    ComponentCell::EditableNumber(data) => Some(data),
                    _ => None,
                })
                disabled
                dispatch
            />
        }
        .into_view(),
        "editable-select" => view! {
            <EditableSelectCell
                data=payload(render, |cell| match cell {
                    ComponentCell::EditableSelect(data) => Some(data),
                    _ => None,
                })
                disabled
                dispatch
            />
        }
        .into_view(),
        "editable-datepicker" => view! {
            <EditableDatepickerCell
                data=payload(render, |cell| match cell {
                    ComponentCell::EditableDatepicker(data) => Some(data),
                    _ => None,
                })
                disabled
                dispatch
            />
        }
        .into_view(),
        "drag-handle" => view! {
            <DragHandleCell
                data=payload(render, |cell| match cell {
                    ComponentCell::DragHandle(data) => Some(data),
                    _ => None,
                })
                drag
            />
        }
        .into_view(),
        "action" => view! {
            <ActionCell
                data=payload(render, |cell| match cell {
                    ComponentCell::Action(data) => Some(data),
                    _ => None,
                })
                dispatch
            />
        }
        .into_view(),
        _ => view! {
            <Text>
                {move || {
                    render.with(|render| match render {
                        Some(CellRender::Markup(text)) => text.clone(),
                        _ => String::new(),
                    })
                }}
            </Text>
        }
        .into_view(),
    };

    view! {
        <td
            class=move || hints.with(cell_class)
            style=move || hints.with(SizingHints::style)
            data-ui-column=column_id
            data-ui-cell-kind=move || kind.get()
        >
            {content}
        </td>
    }
}

#[component]
/// Editable data table with inline editors, row add/delete, drag reordering, and column sorting.
///
/// Sorting and reordering are mutually exclusive: while `reorderable` is set, every column is
/// unsortable and rows display in collection order. Cells mount editors from each column's
/// `meta.editor` unless the column supplies its own renderer.
///
/// Events reach the callbacks after `data` already holds the updated rows:
///
/// - `on_row_added(row)` after the add-row button appends a row.
/// - `on_row_deleted((row, index))` after the delete button removes a row.
/// - `on_row_reordered((from, to))` after a drag-and-drop move.
/// - `on_cell_edited(edit)` on every live editor change.
/// - `on_cell_committed(edit)` on blur, Enter, or a discrete selection.
/// - `on_action_clicked((action, row_index, row))` when a custom row action is clicked. The table
///   does not act on custom actions itself.
/// - `on_sorting_changed(sorting)` when a header click changes the sort state.
pub fn EditableTable(
    /// Two-way bound row collection.
    data: RwSignal<Vec<Record>>,
    /// Column definitions.
    #[prop(into)]
    columns: MaybeSignal<Vec<ColumnDef<Record>>>,
    /// Enables drag reordering and disables sorting.
    #[prop(into, default = MaybeSignal::Static(true))]
    reorderable: MaybeSignal<bool>,
    /// Shows the drag-handle column while reordering.
    #[prop(into, default = MaybeSignal::Static(true))]
    show_drag_handle: MaybeSignal<bool>,
    /// Shows the add-row button.
    #[prop(into, default = MaybeSignal::Static(true))]
    allow_add_row: MaybeSignal<bool>,
    /// Shows the row actions column.
    #[prop(into, default = MaybeSignal::Static(true))]
    allow_delete_row: MaybeSignal<bool>,
    /// Disables drag handles, row actions, and editors.
    #[prop(optional, into)]
    disabled: MaybeSignal<bool>,
    /// Fields copied into each added row instead of column defaults.
    #[prop(optional)]
    new_row_template: Option<Record>,
    /// Custom buttons for the actions column.
    #[prop(optional)]
    row_actions: Option<Vec<RowAction>>,
    /// Text shown when there are no rows.
    #[prop(optional, into)]
    empty_message: Option<String>,
    /// Label of the add-row button.
    #[prop(optional, into)]
    add_row_button_text: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] on_row_added: Option<Callback<Record>>,
    #[prop(optional)] on_row_deleted: Option<Callback<(Record, usize)>>,
    #[prop(optional)] on_row_reordered: Option<Callback<(usize, usize)>>,
    #[prop(optional)] on_cell_edited: Option<Callback<CellEdit<Record>>>,
    #[prop(optional)] on_cell_committed: Option<Callback<CellEdit<Record>>>,
    #[prop(optional)] on_action_clicked: Option<Callback<(String, usize, Record)>>,
    #[prop(optional)] on_sorting_changed: Option<Callback<SortState>>,
) -> impl IntoView {
    let columns = create_memo(move |_| columns.get());
    let defaults = TableOptions::default();
    let empty_message = empty_message.unwrap_or(defaults.empty_message);
    let add_row_button_text = add_row_button_text.unwrap_or(defaults.add_row_button_text);
    let options = create_memo(move |_| TableOptions {
        reorderable: reorderable.get(),
        show_drag_handle: show_drag_handle.get(),
        allow_add_row: allow_add_row.get(),
        allow_delete_row: allow_delete_row.get(),
        disabled: disabled.get(),
        new_row_template: new_row_template.clone(),
        row_actions: row_actions.clone(),
        empty_message: empty_message.clone(),
        add_row_button_text: add_row_button_text.clone(),
    });

    let table = create_rw_signal(TableState::new(data.get_untracked(), options.get_untracked()));
    let drag = create_rw_signal(RowDrag::default());
    let callbacks = TableCallbacks {
        on_row_added,
        on_row_deleted,
        on_row_reordered,
        on_cell_edited,
        on_cell_committed,
        on_action_clicked,
        on_sorting_changed,
    };

    let dispatch = Callback::new(move |action: TableAction<Record>| {
        let mut state = table.get_untracked();
        let previous = state.clone();
        let result = columns.with_untracked(|columns| reduce_table(&mut state, columns, action));

        match result {
            Ok(events) => {
                if state != previous {
                    table.set(state);
                }
                for event in events {
                    callbacks.emit(event, data);
                }
            }
            Err(err) => logging::warn!("editable table reducer error: {err}"),
        }
    });

    create_effect(move |_| {
        let next = options.get();
        if table.with_untracked(|state| state.options() != &next) {
            dispatch.call(TableAction::SetOptions(next));
        }
    });

    create_effect(move |_| {
        let rows = data.get();
        if table.with_untracked(|state| state.rows().as_slice() != rows.as_slice()) {
            dispatch.call(TableAction::SetData(rows));
        }
    });

    let effective = create_memo(move |_| {
        let options = options.get();
        columns.with(|columns| effective_columns(columns, &options))
    });
    let order = create_memo(move |_| {
        table.with(|state| {
            columns.with(|columns| {
                display_order(
                    state.rows(),
                    columns,
                    state.sorting(),
                    state.options().reorderable,
                )
            })
        })
    });
    let column_ids = create_memo(move |_| {
        effective.with(|columns| {
            columns
                .iter()
                .map(|column| column.id.clone())
                .collect::<Vec<_>>()
        })
    });
    let is_empty = Signal::derive(move || table.with(|state| state.rows().is_empty()));

    let rows = move || {
        view! {
            <For each=move || order.get() key=|row_index| *row_index let:row_index>
                <tr
                    data-ui-row-index=row_index
                    data-ui-drag-source=move || bool_token(drag.with(|drag| drag.is_source(row_index)))
                    data-ui-drop-target=move || bool_token(drag.with(|drag| drag.target() == Some(row_index)))
                    on:dragover=move |ev| {
                        let (dragging, hovered) = drag.with_untracked(|drag| {
                            (drag.target().is_some(), drag.target() == Some(row_index))
                        });
                        if dragging {
                            ev.prevent_default();
                            if !hovered {
                                drag.update(|drag| {
                                    drag.hover(row_index);
                                });
                            }
                        }
                    }
                    on:drop=move |ev| {
                        ev.prevent_default();
                        if let Some(action) = drag.try_update(|drag| drag.drop_on(row_index)).flatten() {
                            dispatch.call(action);
                        }
                    }
                >
                    <For each=move || column_ids.get() key=|column_id| column_id.clone() let:column_id>
                        <BodyCell column_id row_index columns=effective table drag dispatch />
                    </For>
                </tr>
            </For>
        }
    };

    view! {
        <Stack gap=LayoutGap::Sm layout_class=layout_class.unwrap_or("ui-editable-table") ui_slot="editable-table">
            <DataTable
                aria_label=aria_label.unwrap_or_else(|| "Editable table".to_string())
                ui_slot="grid"
            >
                <thead>
                    <tr>
                        {move || {
                            effective
                                .get()
                                .into_iter()
                                .map(|column| view! { <HeaderCell column table dispatch /> })
                                .collect_view()
                        }}
                    </tr>
                </thead>
                <tbody>
                    <Show when=move || is_empty.get() fallback=rows>
                        <tr data-ui-slot="empty">
                            <td colspan=move || effective.with(Vec::len).max(1)>
                                <EmptyState>
                                    {move || {
                                        table.with(|state| {
                                            state.empty_message().unwrap_or_default().to_string()
                                        })
                                    }}
                                </EmptyState>
                            </td>
                        </tr>
                    </Show>
                </tbody>
            </DataTable>
            <Show when=move || options.with(|options| options.allow_add_row) fallback=|| ()>
                <Cluster justify=LayoutJustify::Start ui_slot="table-footer">
                    <Button
                        leading_icon=IconName::Add
                        disabled=Signal::derive(move || options.with(|options| options.disabled))
                        on_click=Callback::new(move |_| dispatch.call(TableAction::AddRow))
                    >
                        {move || options.with(|options| options.add_row_button_text.clone())}
                    </Button>
                </Cluster>
            </Show>
        </Stack>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use table_core::{ColumnSizing, SizeToken};

    use super::*;

    #[test]
    fn header_and_cell_classes_follow_hints() {
        let hints = SizingHints {
            max_width: Some(SizeToken::Md.css().to_string()),
            should_truncate: true,
            header_align: Some(ColumnAlign::Center),
            cell_align: Some(ColumnAlign::Right),
            ..SizingHints::default()
        };
        assert_eq!(
            header_class(&hints),
            "ui-editable-table-header ui-cell-truncate ui-align-center"
        );
        assert_eq!(
            cell_class(&hints),
            "ui-editable-table-cell ui-cell-truncate ui-align-right"
        );
    }

    #[test]
    fn unrendered_cells_fall_back_to_markup() {
        assert_eq!(component_kind(&None), "markup");
        assert_eq!(
            component_kind(&Some(CellRender::Markup("10".to_string()))),
            "markup"
        );
    }

    #[test]
    fn synthetic_columns_render_component_kinds() {
        let columns: Vec<ColumnDef<Record>> = vec![ColumnDef::accessor("total", "Total")
            .with_sizing(ColumnSizing::fixed("120px"))];
        let options = TableOptions::default();
        let effective = effective_columns(&columns, &options);
        let row = Record::new();
        let kinds: Vec<&str> = effective
            .iter()
            .map(|column| component_kind(&Some(column.render(&row, 0, &options))))
            .collect();
        assert_eq!(kinds, vec!["drag-handle", "markup", "action"]);
    }
}
