//! Interactive cell components mounted for [`table_core::ComponentCell`] payloads.
//!
//! Each editor keeps a `table_core` edit session in a `StoredValue` and forwards the session's
//! signals to the table as `EditCell`/`CommitCell` actions. Payload signals are re-read at event
//! time so edits always target the row's current index.

use leptos::ev::{FocusEvent, KeyboardEvent};
use leptos::*;
use serde_json::Value;
use table_core::{
    date_to_value, parse_date_value, value_text, ActionCellData, CellSignal, ColumnAlign,
    DiscreteCellSession, DragHandleData, EditableDatepickerData, EditableNumberData,
    EditableSelectData, EditableTextData, KeyModifiers, LiveFormat, NumberCellSession, Record,
    SelectOption, TableAction, TextCellSession,
};

use super::drag::RowDrag;
use crate::primitives::{
    ButtonVariant, Cluster, FieldVariant, IconButton, LayoutGap, LayoutJustify, SelectField,
    TextField,
};
use crate::IconName;

/// Maps an edit-session signal to the table action that applies it.
pub(crate) fn cell_action(row_index: usize, column: String, signal: CellSignal) -> TableAction<Record> {
    match signal {
        CellSignal::Changed(value) => TableAction::EditCell {
            row_index,
            column,
            value,
        },
        CellSignal::Committed(value) => TableAction::CommitCell {
            row_index,
            column,
            value,
        },
    }
}

/// Position of the option holding `value`.
pub(crate) fn selected_option(options: &[SelectOption], value: &Value) -> Option<usize> {
    options.iter().position(|option| &option.value == value)
}

/// `<input type="date">` text for a stored value; unreadable values show as no date.
pub(crate) fn date_input_text(value: &Value) -> String {
    match parse_date_value(value) {
        Ok(date) => value_text(&date_to_value(date)),
        Err(err) => {
            logging::warn!("editable table date value ignored: {err}");
            String::new()
        }
    }
}

fn align_token(align: Option<ColumnAlign>) -> &'static str {
    align.unwrap_or(ColumnAlign::Left).token()
}

fn caret(input: NodeRef<html::Input>) -> Option<usize> {
    input
        .get_untracked()
        .and_then(|input| input.selection_start().ok().flatten())
        .map(|offset| offset as usize)
}

fn key_modifiers(ev: &KeyboardEvent) -> KeyModifiers {
    KeyModifiers {
        ctrl: ev.ctrl_key(),
        meta: ev.meta_key(),
        alt: ev.alt_key(),
        shift: ev.shift_key(),
    }
}

// Writes formatted text back into the focused input and restores the caret.
fn show_live(input_ref: NodeRef<html::Input>, raw: &str, live: &LiveFormat) {
    if live.text == raw {
        return;
    }
    if let Some(input) = input_ref.get_untracked() {
        input.set_value(&live.text);
        let offset = live.cursor as u32;
        let _ = input.set_selection_range(offset, offset);
    }
}

#[component]
/// Free-text editor: edits on every keystroke, commits on blur and Enter.
///
/// A payload carrying a number format filters keys and formats the text like a number cell.
pub fn EditableTextCell(
    #[prop(into)] data: Signal<EditableTextData>,
    #[prop(into)] disabled: Signal<bool>,
    dispatch: Callback<TableAction<Record>>,
) -> impl IntoView {
    let initial = data.get_untracked();
    let session = store_value(
        TextCellSession::new(initial.value.clone()).with_format(initial.format.clone()),
    );
    let text = create_rw_signal(session.with_value(|session| value_text(session.value())));
    let input_ref = create_node_ref::<html::Input>();

    create_effect(move |_| {
        let external = data.with(|data| data.value.clone());
        session.update_value(|session| session.sync(Value::String(external)));
        let shown = session.with_value(|session| value_text(session.value()));
        if text.get_untracked() != shown {
            text.set(shown);
        }
    });

    let forward = move |signal: CellSignal| {
        let (row_index, column) = data.with_untracked(|data| (data.row_index, data.column.clone()));
        dispatch.call(cell_action(row_index, column, signal));
    };
    let commit = move |signal: CellSignal| {
        text.set(session.with_value(|session| value_text(session.value())));
        forward(signal);
    };

    view! {
        <TextField
            variant=FieldVariant::Cell
            node_ref=input_ref
            placeholder=initial.placeholder.unwrap_or_default()
            aria_label=initial.column
            align=align_token(initial.align)
            value=text
            disabled=disabled
            on_input=Callback::new(move |ev: web_sys::Event| {
                let raw = event_target_value(&ev);
                let cursor = caret(input_ref).unwrap_or(raw.chars().count());
                let Some((live, signal)) = session.try_update_value(|session| session.input_at(&raw, cursor)) else {
                    return;
                };
                show_live(input_ref, &raw, &live);
                text.set(live.text);
                forward(signal);
            })
            on_focus=Callback::new(move |_: FocusEvent| session.update_value(|session| session.focus()))
            on_blur=Callback::new(move |_: FocusEvent| {
                if let Some(signal) = session.try_update_value(|session| session.blur()) {
                    commit(signal);
                }
            })
            on_keydown=Callback::new(move |ev: KeyboardEvent| {
                let key = ev.key();
                let admitted = session.with_value(|session| {
                    let cursor = caret(input_ref).unwrap_or(value_text(session.value()).chars().count());
                    session.admits_key(&key, cursor, key_modifiers(&ev))
                });
                if !admitted {
                    ev.prevent_default();
                    return;
                }
                if let Some(signal) = session.try_update_value(|session| session.key(&key)).flatten() {
                    commit(signal);
                }
            })
        />
    }
}

#[component]
/// Numeric editor with optional live formatting and keystroke filtering.
pub fn EditableNumberCell(
    #[prop(into)] data: Signal<EditableNumberData>,
    #[prop(into)] disabled: Signal<bool>,
    dispatch: Callback<TableAction<Record>>,
) -> impl IntoView {
    let initial = data.get_untracked();
    let session = store_value(NumberCellSession::new(initial.value, initial.format.clone()));
    let text = create_rw_signal(session.with_value(|session| session.text().to_string()));
    let input_ref = create_node_ref::<html::Input>();

    create_effect(move |_| {
        let external = data.with(|data| data.value);
        session.update_value(|session| session.sync(external));
        let shown = session.with_value(|session| session.text().to_string());
        if text.get_untracked() != shown {
            text.set(shown);
        }
    });

    let forward = move |signal: CellSignal| {
        let (row_index, column) = data.with_untracked(|data| (data.row_index, data.column.clone()));
        dispatch.call(cell_action(row_index, column, signal));
    };
    let commit = move |signal: CellSignal| {
        text.set(session.with_value(|session| session.text().to_string()));
        forward(signal);
    };

    view! {
        <TextField
            variant=FieldVariant::Cell
            node_ref=input_ref
            input_mode="decimal"
            placeholder=initial.placeholder.unwrap_or_default()
            aria_label=initial.column
            align=align_token(initial.align)
            value=text
            disabled=disabled
            on_keydown=Callback::new(move |ev: KeyboardEvent| {
                let key = ev.key();
                let admitted = session.with_value(|session| {
                    let cursor = caret(input_ref).unwrap_or(session.text().chars().count());
                    session.admits_key(&key, cursor, key_modifiers(&ev))
                });
                if !admitted {
                    ev.prevent_default();
                    return;
                }
                if let Some(signal) = session.try_update_value(|session| session.key(&key)).flatten() {
                    commit(signal);
                }
            })
            on_input=Callback::new(move |ev: web_sys::Event| {
                let raw = event_target_value(&ev);
                let cursor = caret(input_ref).unwrap_or(raw.chars().count());
                let Some((live, signal)) = session.try_update_value(|session| session.input(&raw, cursor)) else {
                    return;
                };
                show_live(input_ref, &raw, &live);
                text.set(live.text);
                forward(signal);
            })
            on_focus=Callback::new(move |_: FocusEvent| session.update_value(|session| session.focus()))
            on_blur=Callback::new(move |_: FocusEvent| {
                if let Some(signal) = session.try_update_value(|session| session.blur()) {
                    commit(signal);
                }
            })
        />
    }
}

#[component]
/// Option picker; each distinct selection edits and commits at once.
pub fn EditableSelectCell(
    #[prop(into)] data: Signal<EditableSelectData>,
    #[prop(into)] disabled: Signal<bool>,
    dispatch: Callback<TableAction<Record>>,
) -> impl IntoView {
    let initial = data.get_untracked();
    let session = store_value(DiscreteCellSession::new(initial.value.clone()));

    create_effect(move |_| {
        let external = data.with(|data| data.value.clone());
        session.update_value(|session| session.sync(external));
    });

    let selected = Signal::derive(move || {
        data.with(|data| selected_option(&data.options, &data.value))
            .map(|index| index.to_string())
            .unwrap_or_default()
    });
    let placeholder = initial.placeholder.unwrap_or_default();

    view! {
        <SelectField
            variant=FieldVariant::Cell
            aria_label=initial.column
            align=align_token(initial.align)
            value=selected
            disabled=disabled
            on_change=Callback::new(move |ev: web_sys::Event| {
                let picked = event_target_value(&ev)
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| {
                        data.with_untracked(|data| data.options.get(index).map(|option| option.value.clone()))
                    })
                    .unwrap_or(Value::Null);
                let signals = session
                    .try_update_value(|session| session.select(picked))
                    .unwrap_or_default();
                let (row_index, column) = data.with_untracked(|data| (data.row_index, data.column.clone()));
                for signal in signals {
                    dispatch.call(cell_action(row_index, column.clone(), signal));
                }
            })
        >
            <option value="" disabled=true>{placeholder}</option>
            {move || {
                data.with(|data| {
                    data.options
                        .iter()
                        .enumerate()
                        .map(|(index, option)| {
                            view! { <option value=index.to_string()>{option.label.clone()}</option> }
                        })
                        .collect_view()
                })
            }}
        </SelectField>
    }
}

#[component]
/// Native date input; picking or clearing a date edits and commits at once.
pub fn EditableDatepickerCell(
    #[prop(into)] data: Signal<EditableDatepickerData>,
    #[prop(into)] disabled: Signal<bool>,
    dispatch: Callback<TableAction<Record>>,
) -> impl IntoView {
    let initial = data.get_untracked();
    let session = store_value(DiscreteCellSession::new(initial.value.clone()));

    create_effect(move |_| {
        let external = data.with(|data| data.value.clone());
        session.update_value(|session| session.sync(external));
    });

    let shown = create_memo(move |_| data.with(|data| date_input_text(&data.value)));

    view! {
        <TextField
            variant=FieldVariant::Cell
            input_type="date"
            placeholder=initial.placeholder.unwrap_or_default()
            aria_label=initial.column
            align=align_token(initial.align)
            value=shown
            disabled=disabled
            on_change=Callback::new(move |ev: web_sys::Event| {
                let raw = event_target_value(&ev);
                let picked = match parse_date_value(&Value::String(raw)) {
                    Ok(date) => date_to_value(date),
                    Err(err) => {
                        logging::warn!("editable table date input ignored: {err}");
                        return;
                    }
                };
                let signals = session
                    .try_update_value(|session| session.select(picked))
                    .unwrap_or_default();
                let (row_index, column) = data.with_untracked(|data| (data.row_index, data.column.clone()));
                for signal in signals {
                    dispatch.call(cell_action(row_index, column.clone(), signal));
                }
            })
        />
    }
}

#[component]
/// Native drag source for row reordering.
pub fn DragHandleCell(
    #[prop(into)] data: Signal<DragHandleData>,
    drag: RwSignal<RowDrag>,
) -> impl IntoView {
    view! {
        <IconButton
            icon=IconName::DragHandle
            layout_class="ui-drag-handle"
            aria_label="Drag to reorder row"
            title="Drag to reorder row"
            draggable=true
            disabled=Signal::derive(move || data.with(|data| data.disabled))
            on_dragstart=Callback::new(move |ev: web_sys::DragEvent| {
                let index = data.with_untracked(|data| data.row_index);
                if let Some(transfer) = ev.data_transfer() {
                    transfer.set_effect_allowed("move");
                    let _ = transfer.set_data("text/plain", &index.to_string());
                }
                drag.update(|drag| drag.start(index));
            })
            on_dragend=Callback::new(move |_: web_sys::DragEvent| drag.update(|drag| drag.cancel()))
        />
    }
}

#[component]
/// Row action buttons; a single delete button when no custom actions are configured.
pub fn ActionCell(
    #[prop(into)] data: Signal<ActionCellData<Record>>,
    dispatch: Callback<TableAction<Record>>,
) -> impl IntoView {
    let layout = create_memo(move |_| {
        data.with(|data| (data.row_index, data.disabled, data.actions.clone()))
    });

    let buttons = move || {
        let (row_index, disabled, actions) = layout.get();
        match actions {
            None => view! {
                <IconButton
                    icon=IconName::Delete
                    aria_label="Delete row"
                    title="Delete row"
                    disabled=disabled
                    on_click=Callback::new(move |_| dispatch.call(TableAction::DeleteRow { index: row_index }))
                />
            }
            .into_view(),
            Some(actions) => actions
                .into_iter()
                .map(|action| {
                    let icon = IconName::from_token(&action.icon).unwrap_or(IconName::More);
                    let name = action.action.clone();
                    view! {
                        <IconButton
                            icon=icon
                            variant=ButtonVariant::from(action.variant)
                            aria_label=action.aria_label.clone()
                            title=action.aria_label
                            disabled=disabled || action.disabled
                            on_click=Callback::new(move |_| {
                                dispatch.call(TableAction::ActionClicked {
                                    action: name.clone(),
                                    row_index,
                                })
                            })
                        />
                    }
                })
                .collect_view(),
        }
    };

    view! {
        <Cluster gap=LayoutGap::None justify=LayoutJustify::End ui_slot="row-actions">
            {buttons}
        </Cluster>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn session_signals_map_to_edit_and_commit_actions() {
        assert_eq!(
            cell_action(2, "qty".to_string(), CellSignal::Changed(json!(4))),
            TableAction::EditCell {
                row_index: 2,
                column: "qty".to_string(),
                value: json!(4),
            }
        );
        assert_eq!(
            cell_action(2, "qty".to_string(), CellSignal::Committed(json!(4))),
            TableAction::CommitCell {
                row_index: 2,
                column: "qty".to_string(),
                value: json!(4),
            }
        );
    }

    #[test]
    fn selected_option_matches_by_value() {
        let options = vec![
            SelectOption::new("open", "Open"),
            SelectOption::new(3, "Three"),
        ];
        assert_eq!(selected_option(&options, &json!(3)), Some(1));
        assert_eq!(selected_option(&options, &json!("closed")), None);
    }

    #[test]
    fn date_text_reads_stored_dates() {
        assert_eq!(date_input_text(&json!("2024-05-01T08:00:00Z")), "2024-05-01");
        assert_eq!(date_input_text(&Value::Null), "");
    }

    #[test]
    fn unreadable_dates_show_as_no_date() {
        assert_eq!(date_input_text(&json!("not-a-date")), "");
        assert_eq!(date_input_text(&json!(42)), "");
        assert_eq!(date_input_text(&json!({ "day": 1 })), "");
    }
}
