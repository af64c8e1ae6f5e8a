//! Sort state and the sorted display order used while reordering is disabled.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::{ColumnDef, TableRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Sort direction for one column.
pub enum SortDirection {
    /// Smallest first.
    Asc,
    /// Largest first.
    Desc,
}

impl SortDirection {
    /// `aria-sort` token.
    pub fn aria_token(self) -> &'static str {
        match self {
            Self::Asc => "ascending",
            Self::Desc => "descending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One sort key.
pub struct ColumnSort {
    /// Sorted column id.
    pub column_id: String,
    /// Direction.
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
/// Ordered sort keys; the first key is the primary sort.
pub struct SortState(pub Vec<ColumnSort>);

impl SortState {
    /// Whether no sort keys are active.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Active direction for `column_id`.
    pub fn direction_for(&self, column_id: &str) -> Option<SortDirection> {
        self.0
            .iter()
            .find(|sort| sort.column_id == column_id)
            .map(|sort| sort.direction)
    }

    /// Cycles `column_id` through ascending, descending, and unsorted.
    ///
    /// With `multi` the other keys are kept; otherwise the column becomes the only key.
    pub fn toggle(&mut self, column_id: &str, multi: bool) {
        let next = match self.direction_for(column_id) {
            None => Some(SortDirection::Asc),
            Some(SortDirection::Asc) => Some(SortDirection::Desc),
            Some(SortDirection::Desc) => None,
        };

        if !multi {
            self.0.retain(|sort| sort.column_id == column_id);
        }
        match next {
            Some(direction) => match self.0.iter_mut().find(|sort| sort.column_id == column_id) {
                Some(sort) => sort.direction = direction,
                None => self.0.push(ColumnSort {
                    column_id: column_id.to_string(),
                    direction,
                }),
            },
            None => self.0.retain(|sort| sort.column_id != column_id),
        }
    }
}

/// Row indices in display order.
///
/// Reorderable tables display rows in collection order. Otherwise rows are stably sorted by the
/// sort keys whose column has an accessor key; unknown columns are ignored.
pub fn display_order<R: TableRow>(
    rows: &[R],
    columns: &[ColumnDef<R>],
    sorting: &SortState,
    reorderable: bool,
) -> Vec<usize> {
    let mut order: Vec<usize> = (0..rows.len()).collect();
    if reorderable || sorting.is_empty() {
        return order;
    }

    let keys: Vec<(&str, SortDirection)> = sorting
        .0
        .iter()
        .filter_map(|sort| {
            columns
                .iter()
                .find(|column| column.column_id() == Some(sort.column_id.as_str()))
                .and_then(|column| column.accessor_key.as_deref())
                .map(|key| (key, sort.direction))
        })
        .collect();
    if keys.is_empty() {
        return order;
    }

    order.sort_by(|&left, &right| {
        keys.iter()
            .map(|(key, direction)| {
                let ordering = compare_values(
                    rows[left].get(key).as_ref(),
                    rows[right].get(key).as_ref(),
                );
                match direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            })
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    });
    order
}

/// Orders cell values: missing/null, then booleans, numbers, strings, and other JSON.
pub fn compare_values(left: Option<&Value>, right: Option<&Value>) -> Ordering {
    let left = left.unwrap_or(&Value::Null);
    let right = right.unwrap_or(&Value::Null);
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => {
            let a = a.as_f64().unwrap_or(0.0);
            let b = b.as_f64().unwrap_or(0.0);
            a.partial_cmp(&b).unwrap_or(Ordering::Equal)
        }
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Null, Value::Null) => Ordering::Equal,
        _ => match rank(left).cmp(&rank(right)) {
            Ordering::Equal => left.to_string().cmp(&right.to_string()),
            unequal => unequal,
        },
    }
}

fn rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::model::Record;

    fn rows() -> Vec<Record> {
        [
            json!({ "name": "Carol", "qty": 2 }),
            json!({ "name": "Alice", "qty": 5 }),
            json!({ "name": "Bob", "qty": 2 }),
            json!({ "name": "Dave" }),
        ]
        .into_iter()
        .filter_map(|value| value.as_object().cloned())
        .collect()
    }

    fn columns() -> Vec<ColumnDef<Record>> {
        vec![
            ColumnDef::accessor("name", "Name"),
            ColumnDef::accessor("qty", "Qty"),
        ]
    }

    fn sort(column_id: &str, direction: SortDirection) -> ColumnSort {
        ColumnSort {
            column_id: column_id.to_string(),
            direction,
        }
    }

    #[test]
    fn toggle_cycles_through_directions() {
        let mut state = SortState::default();
        state.toggle("name", false);
        assert_eq!(state.direction_for("name"), Some(SortDirection::Asc));
        state.toggle("name", false);
        assert_eq!(state.direction_for("name"), Some(SortDirection::Desc));
        state.toggle("name", false);
        assert!(state.is_empty());
    }

    #[test]
    fn toggle_replaces_keys_unless_multi() {
        let mut state = SortState::default();
        state.toggle("name", false);
        state.toggle("qty", false);
        assert_eq!(state, SortState(vec![sort("qty", SortDirection::Asc)]));

        state.toggle("name", true);
        assert_eq!(
            state,
            SortState(vec![
                sort("qty", SortDirection::Asc),
                sort("name", SortDirection::Asc),
            ])
        );
    }

    #[test]
    fn display_order_sorts_by_keys_in_priority() {
        let sorting = SortState(vec![
            sort("qty", SortDirection::Desc),
            sort("name", SortDirection::Asc),
        ]);
        assert_eq!(
            display_order(&rows(), &columns(), &sorting, false),
            vec![1, 2, 0, 3]
        );
    }

    #[test]
    fn display_order_is_stable_for_equal_keys() {
        let sorting = SortState(vec![sort("qty", SortDirection::Asc)]);
        assert_eq!(
            display_order(&rows(), &columns(), &sorting, false),
            vec![3, 0, 2, 1]
        );
    }

    #[test]
    fn reorderable_tables_keep_collection_order() {
        let sorting = SortState(vec![sort("name", SortDirection::Asc)]);
        assert_eq!(
            display_order(&rows(), &columns(), &sorting, true),
            vec![0, 1, 2, 3]
        );
    }

    #[test]
    fn sort_state_serializes_as_array() {
        let state = SortState(vec![sort("qty", SortDirection::Desc)]);
        assert_eq!(
            serde_json::to_value(&state).expect("serialize"),
            json!([{ "columnId": "qty", "direction": "desc" }])
        );
    }
}
